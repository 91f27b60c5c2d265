//! Typed errors for the validation library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur during validation operations.
///
/// Verification sources returning "not found" is a normal result, not an
/// error; only structural problems surface here.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Record is missing a required field and cannot enter the pipeline
    #[error("invalid record: {reason}")]
    InvalidRecord { reason: String },

    /// A verification source failed outright (I/O, protocol)
    #[error("verification source error: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ValidationError {
    /// Construct an invalid-record error.
    pub fn invalid_record(reason: impl Into<String>) -> Self {
        ValidationError::InvalidRecord {
            reason: reason.into(),
        }
    }
}

/// Result type alias for validation operations.
pub type Result<T> = std::result::Result<T, ValidationError>;
