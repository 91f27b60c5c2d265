//! Batch job model for tracking many-record validation runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;
use uuid::Uuid;
use validation::ValidationStatus;

/// Lifecycle of a batch job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    #[default]
    Queued,
    InProgress,
    Completed,
    Failed,
}

impl std::fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchStatus::Queued => write!(f, "queued"),
            BatchStatus::InProgress => write!(f, "in_progress"),
            BatchStatus::Completed => write!(f, "completed"),
            BatchStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Which tally bucket a finished record falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Verified,
    NeedsReview,
}

impl From<ValidationStatus> for RecordOutcome {
    fn from(status: ValidationStatus) -> Self {
        if status.is_verified() {
            RecordOutcome::Verified
        } else {
            RecordOutcome::NeedsReview
        }
    }
}

/// A tracked unit of batch validation work.
///
/// Counters are only mutated through the job store's atomic completion
/// path; `verified + needs_review == completed` holds at every point,
/// regardless of the order records finish in.
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct BatchJob {
    #[builder(default = Uuid::new_v4())]
    pub id: Uuid,

    /// Validation mode tag from the request. Carried for traceability;
    /// scoring does not read it.
    #[builder(default = "full".to_string())]
    pub mode: String,

    /// Target records, in submission order
    pub provider_ids: Vec<String>,

    #[builder(default = 0)]
    pub completed: usize,
    #[builder(default = 0)]
    pub verified: usize,
    #[builder(default = 0)]
    pub needs_review: usize,

    #[builder(default)]
    pub status: BatchStatus,

    #[builder(default, setter(strip_option))]
    pub failure_reason: Option<String>,

    #[builder(default = Utc::now())]
    pub started_at: DateTime<Utc>,
    #[builder(default, setter(strip_option))]
    pub completed_at: Option<DateTime<Utc>>,
}

impl BatchJob {
    /// Create a queued job for the given targets.
    pub fn new(provider_ids: Vec<String>, mode: impl Into<String>) -> Self {
        Self::builder().provider_ids(provider_ids).mode(mode).build()
    }

    /// Number of records targeted by this job.
    pub fn total(&self) -> usize {
        self.provider_ids.len()
    }

    /// Fold one finished record into the tallies.
    pub fn apply(&mut self, outcome: RecordOutcome) {
        self.completed += 1;
        match outcome {
            RecordOutcome::Verified => self.verified += 1,
            RecordOutcome::NeedsReview => self.needs_review += 1,
        }
    }

    /// Completion progress in percent.
    pub fn progress_percentage(&self) -> f64 {
        if self.provider_ids.is_empty() {
            return 100.0;
        }
        (self.completed as f64 / self.provider_ids.len() as f64) * 100.0
    }

    /// Whether the job has reached a terminal status.
    pub fn is_terminal(&self) -> bool {
        matches!(self.status, BatchStatus::Completed | BatchStatus::Failed)
    }
}
