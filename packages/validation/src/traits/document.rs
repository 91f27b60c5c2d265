//! Document extraction trait for attached credential documents.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::DocumentResult;

/// Extract credential fields from an attached document.
///
/// Invoked only for records that declare attached documents. A low
/// quality scan that cannot be read is a failed result
/// (`success = false`), not an error.
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    /// Extract from the document identified by `document_ref`.
    async fn extract(&self, document_ref: &str) -> Result<DocumentResult>;

    /// Source name for logging.
    fn name(&self) -> &str {
        "documents"
    }
}
