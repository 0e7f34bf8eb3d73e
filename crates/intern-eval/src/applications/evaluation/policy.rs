use super::super::domain::{InternApplication, ReviewMode, Verdict};
use super::super::identity::IdentityValidator;
use super::config::EvaluationConfig;
use super::rules::skill_overlap;
use serde::{Deserialize, Serialize};

/// Rule that settled an application, carrying the values it was judged on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionReason {
    Underage { age: i32, minimum_age: i32 },
    InvalidIdentity,
    AlreadyGraduated,
    InsufficientQuizScore { score: u8, minimum_score: u8 },
    InsufficientSkillOverlap { overlap: u32, minimum_overlap: u32 },
    DetailedReviewEscalation { overlap: u32, threshold: u32 },
    UnsupportedCountry { country: String, required: String },
    Eligible,
}

impl DecisionReason {
    pub fn verdict(&self) -> Verdict {
        match self {
            DecisionReason::Underage { .. }
            | DecisionReason::InsufficientQuizScore { .. }
            | DecisionReason::InsufficientSkillOverlap { .. }
            | DecisionReason::UnsupportedCountry { .. } => Verdict::AutoReject,
            DecisionReason::InvalidIdentity | DecisionReason::AlreadyGraduated => {
                Verdict::TransferredToHr
            }
            DecisionReason::DetailedReviewEscalation { .. } => Verdict::TransferredToCto,
            DecisionReason::Eligible => Verdict::AutoAccept,
        }
    }

    pub fn summary(&self) -> String {
        match self {
            DecisionReason::Underage { age, minimum_age } => {
                format!("rejected: applicant is {age}, minimum age is {minimum_age}")
            }
            DecisionReason::InvalidIdentity => {
                "transferred to HR: identity number failed validation".to_string()
            }
            DecisionReason::AlreadyGraduated => {
                "transferred to HR: applicant has already graduated".to_string()
            }
            DecisionReason::InsufficientQuizScore {
                score,
                minimum_score,
            } => format!("rejected: quiz score {score} below minimum {minimum_score}"),
            DecisionReason::InsufficientSkillOverlap {
                overlap,
                minimum_overlap,
            } => format!("rejected: skill overlap {overlap}% below minimum {minimum_overlap}%"),
            DecisionReason::DetailedReviewEscalation { overlap, threshold } => format!(
                "transferred to CTO: skill overlap {overlap}% exceeds {threshold}% under detailed review"
            ),
            DecisionReason::UnsupportedCountry { country, required } => {
                format!("rejected: country {country} does not match required {required}")
            }
            DecisionReason::Eligible => "application auto-accepted".to_string(),
        }
    }
}

/// Rule that fired plus the skill overlap, when evaluation got far enough to compute it.
pub(crate) struct Decision {
    pub reason: DecisionReason,
    pub skill_overlap: Option<u32>,
}

impl Decision {
    fn settled(reason: DecisionReason) -> Self {
        Self {
            reason,
            skill_overlap: None,
        }
    }
}

/// Applies the eligibility rules in order; the first rule that matches decides.
pub(crate) fn decide_outcome<V>(
    application: &InternApplication,
    config: &EvaluationConfig,
    validator: &V,
) -> Decision
where
    V: IdentityValidator + ?Sized,
{
    let applicant = &application.applicant;

    if applicant.age < config.minimum_age {
        return Decision::settled(DecisionReason::Underage {
            age: applicant.age,
            minimum_age: config.minimum_age,
        });
    }

    if !validator.is_valid(&applicant.identity_number) {
        return Decision::settled(DecisionReason::InvalidIdentity);
    }

    if applicant.is_graduate {
        return Decision::settled(DecisionReason::AlreadyGraduated);
    }

    if application.quiz_score < config.minimum_quiz_score {
        return Decision::settled(DecisionReason::InsufficientQuizScore {
            score: application.quiz_score,
            minimum_score: config.minimum_quiz_score,
        });
    }

    let overlap = skill_overlap(&application.skills, &config.reference_skills);
    let reason = if overlap < config.minimum_skill_overlap {
        DecisionReason::InsufficientSkillOverlap {
            overlap,
            minimum_overlap: config.minimum_skill_overlap,
        }
    } else if overlap > config.cto_skill_overlap
        && ReviewMode::for_age(applicant.age, config.detailed_review_age) == ReviewMode::Detailed
    {
        DecisionReason::DetailedReviewEscalation {
            overlap,
            threshold: config.cto_skill_overlap,
        }
    } else {
        let country = validator.country();
        if country != config.required_country {
            DecisionReason::UnsupportedCountry {
                country,
                required: config.required_country.clone(),
            }
        } else {
            DecisionReason::Eligible
        }
    };

    Decision {
        reason,
        skill_overlap: Some(overlap),
    }
}
