use serde::{Deserialize, Serialize};

/// Personal details captured for the person applying to the internship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub identity_number: String,
    pub age: i32,
    pub is_graduate: bool,
}

/// Submitted internship application as received from intake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternApplication {
    pub applicant: Applicant,
    #[serde(default)]
    pub skills: Vec<String>,
    pub quiz_score: u8,
    /// Collected during intake; no eligibility rule reads it.
    #[serde(default)]
    pub interview_success: bool,
}

/// Final categorical outcome of an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    AutoAccept,
    AutoReject,
    TransferredToHr,
    TransferredToCto,
}

impl Verdict {
    pub const fn label(self) -> &'static str {
        match self {
            Verdict::AutoAccept => "auto_accept",
            Verdict::AutoReject => "auto_reject",
            Verdict::TransferredToHr => "transferred_to_hr",
            Verdict::TransferredToCto => "transferred_to_cto",
        }
    }
}

/// Depth of review an application receives, derived from the applicant's age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewMode {
    Quick,
    Detailed,
}

impl ReviewMode {
    /// Applicants strictly older than `detailed_review_age` get a detailed review.
    pub const fn for_age(age: i32, detailed_review_age: i32) -> Self {
        if age > detailed_review_age {
            ReviewMode::Detailed
        } else {
            ReviewMode::Quick
        }
    }
}
