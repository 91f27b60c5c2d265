//! Web presence trait for confirming a provider's public contact
//! information.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::WebResult;

/// Check for a provider's web presence and compare published contact
/// details against the record on file.
///
/// "No site found" is a normal result with a zero contact-match ratio,
/// not an error. Implementations decide how discovery happens (search
/// API, site crawl, cached index); the pipeline only consumes the
/// structured result.
#[async_trait]
pub trait WebPresenceCheck: Send + Sync {
    /// Search for the provider's site and score how well its contact
    /// details match the record.
    async fn check(&self, full_name: &str, city: &str, state: &str) -> Result<WebResult>;

    /// Source name for logging.
    fn name(&self) -> &str {
        "web"
    }
}
