//! Typed errors for the directory service layer.

use thiserror::Error;
use uuid::Uuid;
use validation::ValidationError;

/// Errors surfaced by stores, jobs, and the provider service.
///
/// Unknown identifiers are distinct conditions, never silent defaults.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// No record stored under this provider id
    #[error("provider not found: {provider_id}")]
    RecordNotFound { provider_id: String },

    /// Provider was never validated, or its batch has not reached it yet
    #[error("no validation report for provider: {provider_id}")]
    ReportNotFound { provider_id: String },

    /// No batch job with this id
    #[error("job not found: {job_id}")]
    JobNotFound { job_id: Uuid },

    /// Batch request contained no provider ids
    #[error("batch contains no provider ids")]
    EmptyBatch,

    /// Record rejected before pipeline entry
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DirectoryError {
    pub fn record_not_found(provider_id: impl Into<String>) -> Self {
        DirectoryError::RecordNotFound {
            provider_id: provider_id.into(),
        }
    }

    pub fn report_not_found(provider_id: impl Into<String>) -> Self {
        DirectoryError::ReportNotFound {
            provider_id: provider_id.into(),
        }
    }
}

/// Result type alias for directory operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;
