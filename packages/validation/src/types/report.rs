//! Final validation report and status classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::results::{DocumentResult, RegistryResult, WebResult};

/// Status classification derived from the confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationStatus {
    Verified,
    VerifiedWithIssues,
    NeedsReview,
    ManualReviewRequired,
}

impl ValidationStatus {
    /// Classify a confidence score.
    ///
    /// Thresholds are inclusive at the lower bound: 80 is `Verified`,
    /// 79 is `VerifiedWithIssues`, 50 is `NeedsReview`, 49 is
    /// `ManualReviewRequired`.
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => ValidationStatus::Verified,
            70..=79 => ValidationStatus::VerifiedWithIssues,
            50..=69 => ValidationStatus::NeedsReview,
            _ => ValidationStatus::ManualReviewRequired,
        }
    }

    /// Whether this status counts toward the verified tally.
    pub fn is_verified(&self) -> bool {
        matches!(
            self,
            ValidationStatus::Verified | ValidationStatus::VerifiedWithIssues
        )
    }

    /// Whether this status counts toward the needs-review tally.
    pub fn requires_review(&self) -> bool {
        !self.is_verified()
    }
}

impl std::fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationStatus::Verified => write!(f, "VERIFIED"),
            ValidationStatus::VerifiedWithIssues => write!(f, "VERIFIED_WITH_ISSUES"),
            ValidationStatus::NeedsReview => write!(f, "NEEDS_REVIEW"),
            ValidationStatus::ManualReviewRequired => write!(f, "MANUAL_REVIEW_REQUIRED"),
        }
    }
}

impl std::str::FromStr for ValidationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VERIFIED" => Ok(ValidationStatus::Verified),
            "VERIFIED_WITH_ISSUES" => Ok(ValidationStatus::VerifiedWithIssues),
            "NEEDS_REVIEW" => Ok(ValidationStatus::NeedsReview),
            "MANUAL_REVIEW_REQUIRED" => Ok(ValidationStatus::ManualReviewRequired),
            _ => Err(format!("invalid validation status: {}", s)),
        }
    }
}

/// Complete validation report for one record.
///
/// Built once at the end of a pipeline run and immutable afterwards.
/// `document` is `None` when the document stage never ran, which is
/// distinct from a [`DocumentResult`] with `success = false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub provider_id: String,
    pub provider_name: String,
    pub npi: String,
    pub specialty: String,

    pub status: ValidationStatus,
    pub confidence_score: u32,

    pub registry: RegistryResult,
    pub web: WebResult,
    pub document: Option<DocumentResult>,

    pub issues: Vec<String>,
    pub actions: Vec<String>,

    /// Draft notification to send to the provider
    pub notification: String,

    /// Stage names in completion order, for auditability
    pub completed_steps: Vec<String>,

    pub validated_at: DateTime<Utc>,
    pub elapsed_seconds: f64,
}
