use std::env;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::applications::EvaluationConfig;

/// Distinguishes runtime behavior for different deployment stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the evaluator.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub evaluation: EvaluationConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            evaluation: load_evaluation()?,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn load_evaluation() -> Result<EvaluationConfig, ConfigError> {
    let defaults = EvaluationConfig::default();

    let required_country = env::var("INTERN_REQUIRED_COUNTRY")
        .map(|value| value.trim().to_string())
        .unwrap_or(defaults.required_country);

    let reference_skills = match env::var("INTERN_REFERENCE_SKILLS") {
        Ok(value) => {
            let skills: Vec<String> = value
                .split(',')
                .map(str::trim)
                .filter(|skill| !skill.is_empty())
                .map(str::to_string)
                .collect();
            if skills.is_empty() {
                return Err(ConfigError::EmptyReferenceSkills);
            }
            skills
        }
        Err(_) => defaults.reference_skills,
    };

    Ok(EvaluationConfig {
        minimum_age: threshold("INTERN_MIN_AGE", defaults.minimum_age)?,
        minimum_quiz_score: threshold("INTERN_MIN_QUIZ_SCORE", defaults.minimum_quiz_score)?,
        minimum_skill_overlap: threshold(
            "INTERN_MIN_SKILL_OVERLAP",
            defaults.minimum_skill_overlap,
        )?,
        cto_skill_overlap: threshold("INTERN_CTO_SKILL_OVERLAP", defaults.cto_skill_overlap)?,
        detailed_review_age: threshold(
            "INTERN_DETAILED_REVIEW_AGE",
            defaults.detailed_review_age,
        )?,
        required_country,
        reference_skills,
    })
}

fn threshold<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr<Err = ParseIntError>,
{
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|source| ConfigError::InvalidNumber { key, source }),
        Err(_) => Ok(default),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber {
        key: &'static str,
        source: ParseIntError,
    },
    EmptyReferenceSkills,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key, .. } => {
                write!(f, "{} must be a whole number in range for its threshold", key)
            }
            ConfigError::EmptyReferenceSkills => {
                write!(f, "INTERN_REFERENCE_SKILLS must list at least one skill")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidNumber { source, .. } => Some(source),
            ConfigError::EmptyReferenceSkills => None,
        }
    }
}
