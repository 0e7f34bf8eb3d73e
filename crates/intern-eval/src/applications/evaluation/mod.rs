mod config;
mod policy;
mod rules;

pub use config::{EvaluationConfig, DEFAULT_REFERENCE_SKILLS};
pub use policy::DecisionReason;

use super::domain::{InternApplication, ReviewMode, Verdict};
use super::identity::IdentityValidator;
use policy::decide_outcome;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Stateless evaluator that applies the eligibility rules to an application.
#[derive(Debug, Clone, Default)]
pub struct EvaluationEngine {
    config: EvaluationConfig,
}

impl EvaluationEngine {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Decide the verdict for `application`, consulting `validator` only when a rule needs it.
    pub fn evaluate<V>(
        &self,
        application: Option<&InternApplication>,
        validator: &V,
    ) -> Result<Verdict, EvaluationError>
    where
        V: IdentityValidator + ?Sized,
    {
        self.assess(application, validator)
            .map(|outcome| outcome.verdict)
    }

    /// Like [`EvaluationEngine::evaluate`], keeping the rule that fired for audits.
    pub fn assess<V>(
        &self,
        application: Option<&InternApplication>,
        validator: &V,
    ) -> Result<EvaluationOutcome, EvaluationError>
    where
        V: IdentityValidator + ?Sized,
    {
        let Some(application) = application else {
            warn!("evaluation requested without an application");
            return Err(EvaluationError::MissingApplication);
        };

        let decision = decide_outcome(application, &self.config, validator);
        let verdict = decision.reason.verdict();
        let review_mode =
            ReviewMode::for_age(application.applicant.age, self.config.detailed_review_age);

        debug!(
            verdict = verdict.label(),
            ?review_mode,
            skill_overlap = ?decision.skill_overlap,
            rationale = %decision.reason.summary(),
            "intern application evaluated"
        );

        Ok(EvaluationOutcome {
            verdict,
            reason: decision.reason,
            review_mode,
            skill_overlap: decision.skill_overlap,
        })
    }
}

/// Evaluate with the default thresholds and reference skills.
pub fn evaluate<V>(
    application: Option<&InternApplication>,
    validator: &V,
) -> Result<Verdict, EvaluationError>
where
    V: IdentityValidator + ?Sized,
{
    EvaluationEngine::default().evaluate(application, validator)
}

/// Evaluation output describing the verdict and the rule behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub verdict: Verdict,
    pub reason: DecisionReason,
    pub review_mode: ReviewMode,
    /// `None` when an earlier rule settled the application before skills were compared.
    pub skill_overlap: Option<u32>,
}

/// Invalid input handed to the evaluation engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    #[error("application must be provided for evaluation")]
    MissingApplication,
}
