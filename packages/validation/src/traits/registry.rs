//! Registry lookup trait for verifying records against a national
//! registry.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::RegistryResult;

/// Lookup of a provider in a national registry (NPI or equivalent).
///
/// A missing entry is reported as `RegistryResult { found: false, .. }`,
/// never as an error; `Err` is reserved for the source itself breaking.
/// Implementations must be safe to call concurrently and hold no shared
/// mutable state across calls.
///
/// # Example
///
/// ```rust,ignore
/// let result = registry.lookup("1234567890", "Dr. Jane Doe").await?;
/// if result.found {
///     println!("address verified: {}", result.address_verified);
/// }
/// ```
#[async_trait]
pub trait RegistryLookup: Send + Sync {
    /// Look up a registry identifier and compare the entry against the
    /// provider's name on file.
    async fn lookup(&self, npi: &str, full_name: &str) -> Result<RegistryResult>;

    /// Source name for logging.
    fn name(&self) -> &str {
        "registry"
    }
}
