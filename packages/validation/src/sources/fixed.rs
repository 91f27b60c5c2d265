//! Deterministic verification sources keyed by input.
//!
//! Useful for development and testing: results are configured up front
//! and returned verbatim, with a default for unknown keys. Replaces
//! randomized stand-ins with repeatable behavior behind the same traits.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::Result;
use crate::traits::{DocumentExtractor, RegistryLookup, WebPresenceCheck};
use crate::types::{DocumentQuality, DocumentResult, RegistryResult, WebResult};

/// Registry lookup backed by a fixed map of NPI -> result.
pub struct FixedRegistry {
    results: RwLock<HashMap<String, RegistryResult>>,
    default: RegistryResult,
}

impl Default for FixedRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FixedRegistry {
    /// Registry that knows no entries (every lookup misses).
    pub fn new() -> Self {
        Self {
            results: RwLock::new(HashMap::new()),
            default: RegistryResult::not_found("NPI not found in registry"),
        }
    }

    /// Registry that fully verifies every lookup.
    pub fn verifying_all() -> Self {
        Self {
            results: RwLock::new(HashMap::new()),
            default: RegistryResult::fully_verified(),
        }
    }

    /// Set the result returned for a specific NPI.
    pub fn with_result(self, npi: impl Into<String>, result: RegistryResult) -> Self {
        self.results
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(npi.into(), result);
        self
    }

    /// Replace the default returned for unknown NPIs.
    pub fn with_default(mut self, default: RegistryResult) -> Self {
        self.default = default;
        self
    }
}

#[async_trait]
impl RegistryLookup for FixedRegistry {
    async fn lookup(&self, npi: &str, _full_name: &str) -> Result<RegistryResult> {
        Ok(self
            .results
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(npi)
            .cloned()
            .unwrap_or_else(|| self.default.clone()))
    }

    fn name(&self) -> &str {
        "fixed-registry"
    }
}

/// Web presence check backed by a fixed map of full name -> result.
pub struct FixedWebPresence {
    results: RwLock<HashMap<String, WebResult>>,
    default: WebResult,
}

impl Default for FixedWebPresence {
    fn default() -> Self {
        Self::new()
    }
}

impl FixedWebPresence {
    /// Check that finds no site for anyone.
    pub fn new() -> Self {
        Self {
            results: RwLock::new(HashMap::new()),
            default: WebResult::not_found(),
        }
    }

    /// Check that finds a site with the given contact-match ratio for
    /// everyone.
    pub fn matching(contact_match: f64) -> Self {
        Self {
            results: RwLock::new(HashMap::new()),
            default: WebResult::found(contact_match),
        }
    }

    /// Set the result returned for a specific provider name.
    pub fn with_result(self, full_name: impl Into<String>, result: WebResult) -> Self {
        self.results
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(full_name.into(), result);
        self
    }
}

#[async_trait]
impl WebPresenceCheck for FixedWebPresence {
    async fn check(&self, full_name: &str, _city: &str, _state: &str) -> Result<WebResult> {
        Ok(self
            .results
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(full_name)
            .cloned()
            .unwrap_or_else(|| self.default.clone()))
    }

    fn name(&self) -> &str {
        "fixed-web"
    }
}

/// Document extractor backed by a fixed map of document ref -> result.
pub struct FixedDocumentExtractor {
    results: RwLock<HashMap<String, DocumentResult>>,
    default: DocumentResult,
}

impl Default for FixedDocumentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FixedDocumentExtractor {
    /// Extractor that fails every document.
    pub fn new() -> Self {
        Self {
            results: RwLock::new(HashMap::new()),
            default: DocumentResult::failed("Poor scan quality, manual review needed"),
        }
    }

    /// Extractor that succeeds on every document with the given quality
    /// and confidence.
    pub fn extracting(quality: DocumentQuality, confidence: f64) -> Self {
        Self {
            results: RwLock::new(HashMap::new()),
            default: DocumentResult::extracted(quality, confidence),
        }
    }

    /// Set the result returned for a specific document reference.
    pub fn with_result(self, document_ref: impl Into<String>, result: DocumentResult) -> Self {
        self.results
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(document_ref.into(), result);
        self
    }
}

#[async_trait]
impl DocumentExtractor for FixedDocumentExtractor {
    async fn extract(&self, document_ref: &str) -> Result<DocumentResult> {
        Ok(self
            .results
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(document_ref)
            .cloned()
            .unwrap_or_else(|| self.default.clone()))
    }

    fn name(&self) -> &str {
        "fixed-documents"
    }
}
