//! Eligibility evaluation for internship applications.
//!
//! [`applications::EvaluationEngine`] runs an application through a fixed, ordered rule set
//! and returns a [`applications::Verdict`]. Identity checks and country residency come from
//! an injected [`applications::IdentityValidator`].

pub mod applications;
pub mod config;
pub mod error;
pub mod telemetry;

pub use applications::{
    evaluate, Applicant, EvaluationEngine, EvaluationError, IdentityValidator, InternApplication,
    Verdict,
};
