use std::sync::atomic::{AtomicUsize, Ordering};

use crate::applications::domain::{Applicant, InternApplication};
use crate::applications::evaluation::{EvaluationConfig, EvaluationEngine};
use crate::applications::identity::IdentityValidator;

pub(super) fn full_skill_set() -> Vec<String> {
    ["C#", "RabbitMQ", "Docker", "Microservice", "VisualStudio"]
        .iter()
        .map(|skill| skill.to_string())
        .collect()
}

pub(super) fn skills(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Application that clears every rule when paired with `validator()`.
pub(super) fn application() -> InternApplication {
    InternApplication {
        applicant: Applicant {
            identity_number: "12345678901".to_string(),
            age: 18,
            is_graduate: false,
        },
        skills: full_skill_set(),
        quiz_score: 71,
        interview_success: true,
    }
}

pub(super) fn evaluation_engine() -> EvaluationEngine {
    EvaluationEngine::new(EvaluationConfig::default())
}

pub(super) fn validator() -> StubValidator {
    StubValidator::new(true, "TURKEY")
}

/// Hand-rolled validator recording how often the engine consults it.
pub(super) struct StubValidator {
    valid: bool,
    country: String,
    validity_checks: AtomicUsize,
    country_lookups: AtomicUsize,
}

impl StubValidator {
    pub(super) fn new(valid: bool, country: &str) -> Self {
        Self {
            valid,
            country: country.to_string(),
            validity_checks: AtomicUsize::new(0),
            country_lookups: AtomicUsize::new(0),
        }
    }

    pub(super) fn validity_checks(&self) -> usize {
        self.validity_checks.load(Ordering::SeqCst)
    }

    pub(super) fn country_lookups(&self) -> usize {
        self.country_lookups.load(Ordering::SeqCst)
    }
}

impl IdentityValidator for StubValidator {
    fn is_valid(&self, _identity_number: &str) -> bool {
        self.validity_checks.fetch_add(1, Ordering::SeqCst);
        self.valid
    }

    fn country(&self) -> String {
        self.country_lookups.fetch_add(1, Ordering::SeqCst);
        self.country.clone()
    }
}
