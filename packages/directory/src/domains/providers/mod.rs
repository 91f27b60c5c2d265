//! Providers domain - directory records and their validation surface.

pub mod queries;
pub mod service;

// Re-export commonly used types
pub use queries::{ProviderFilter, ProviderListing, ValidationSummary};
pub use service::ProviderService;
