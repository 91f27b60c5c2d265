//! Testing utilities including fixtures and call-recording wrappers.
//!
//! Useful for testing applications that use the validation library
//! without wiring real verification sources.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::error::Result;
use crate::traits::RegistryLookup;
use crate::types::{ProviderRecord, RegistryResult};

/// A complete sample record for tests.
pub fn sample_record(provider_id: impl Into<String>) -> ProviderRecord {
    ProviderRecord::new(provider_id, "1234567890", "Jane", "Doe", "Cardiology")
        .with_phone("(555) 123-4567")
        .with_email("jane.doe@example.com")
        .with_address("123 Medical Plaza")
        .with_location("Boston", "MA", "02101")
        .with_license_number("MA123456")
}

/// Record of a call made to a [`RecordingRegistry`].
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryCall {
    pub npi: String,
    pub full_name: String,
}

/// Registry wrapper that records every lookup for assertions.
pub struct RecordingRegistry<R: RegistryLookup> {
    inner: R,
    calls: Arc<RwLock<Vec<RegistryCall>>>,
}

impl<R: RegistryLookup> RecordingRegistry<R> {
    /// Wrap a registry implementation.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// All lookups made so far, in call order.
    pub fn calls(&self) -> Vec<RegistryCall> {
        self.calls.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of lookups made so far.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Clear call history.
    pub fn clear_calls(&self) {
        self.calls
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

#[async_trait]
impl<R: RegistryLookup> RegistryLookup for RecordingRegistry<R> {
    async fn lookup(&self, npi: &str, full_name: &str) -> Result<RegistryResult> {
        self.calls
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(RegistryCall {
                npi: npi.to_string(),
                full_name: full_name.to_string(),
            });
        self.inner.lookup(npi, full_name).await
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::fixed::FixedRegistry;

    #[test]
    fn sample_record_is_well_formed() {
        assert!(sample_record("1").validate().is_ok());
    }

    #[tokio::test]
    async fn recording_registry_tracks_calls() {
        let registry = RecordingRegistry::new(FixedRegistry::verifying_all());

        registry.lookup("1234567890", "Dr. Jane Doe").await.unwrap();
        registry.lookup("0987654321", "Dr. John Roe").await.unwrap();

        assert_eq!(registry.call_count(), 2);
        assert_eq!(registry.calls()[0].npi, "1234567890");

        registry.clear_calls();
        assert_eq!(registry.call_count(), 0);
    }
}
