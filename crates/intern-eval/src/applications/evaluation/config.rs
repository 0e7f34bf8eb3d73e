use serde::{Deserialize, Serialize};

pub const DEFAULT_REFERENCE_SKILLS: [&str; 5] =
    ["C#", "RabbitMQ", "Docker", "Microservice", "VisualStudio"];

/// Thresholds and reference data driving the eligibility rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub minimum_age: i32,
    pub minimum_quiz_score: u8,
    pub minimum_skill_overlap: u32,
    pub cto_skill_overlap: u32,
    pub detailed_review_age: i32,
    pub required_country: String,
    pub reference_skills: Vec<String>,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            minimum_age: 18,
            minimum_quiz_score: 70,
            minimum_skill_overlap: 25,
            cto_skill_overlap: 75,
            detailed_review_age: 25,
            required_country: "TURKEY".to_string(),
            reference_skills: DEFAULT_REFERENCE_SKILLS
                .iter()
                .map(|skill| skill.to_string())
                .collect(),
        }
    }
}
