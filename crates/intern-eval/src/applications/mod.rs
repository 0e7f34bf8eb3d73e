//! Internship application intake types, the identity capability, and the evaluation engine.

pub mod domain;
pub mod evaluation;
pub mod identity;

#[cfg(test)]
mod tests;

pub use domain::{Applicant, InternApplication, ReviewMode, Verdict};
pub use evaluation::{
    evaluate, DecisionReason, EvaluationConfig, EvaluationEngine, EvaluationError,
    EvaluationOutcome, DEFAULT_REFERENCE_SKILLS,
};
pub use identity::{
    CountryData, CountryDataProvider, IdentityValidator, NationalIdentityValidator,
    StaticCountryProvider,
};
