//! Structured results returned by verification sources.
//!
//! "Not found" and "extraction failed" are ordinary results, never
//! errors: every stage produces a result and the pipeline always runs to
//! completion.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Outcome of a registry lookup for one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryResult {
    /// Whether the registry identifier resolved to an entry
    pub found: bool,

    /// Registry name matches the record's name
    pub name_match: bool,

    /// Registry address matches the record's address
    pub address_verified: bool,

    /// Registry phone matches the record's phone
    pub phone_verified: bool,

    /// When the registry entry was last updated
    pub last_updated: Option<NaiveDate>,

    /// Why the lookup produced no entry
    pub failure_reason: Option<String>,
}

impl RegistryResult {
    /// A lookup that resolved to a registry entry.
    ///
    /// Match flags start false; set them with the `with_*` setters.
    pub fn found() -> Self {
        Self {
            found: true,
            name_match: false,
            address_verified: false,
            phone_verified: false,
            last_updated: None,
            failure_reason: None,
        }
    }

    /// A lookup that produced no registry entry.
    pub fn not_found(reason: impl Into<String>) -> Self {
        Self {
            found: false,
            name_match: false,
            address_verified: false,
            phone_verified: false,
            last_updated: None,
            failure_reason: Some(reason.into()),
        }
    }

    pub fn with_name_match(mut self, name_match: bool) -> Self {
        self.name_match = name_match;
        self
    }

    pub fn with_address_verified(mut self, address_verified: bool) -> Self {
        self.address_verified = address_verified;
        self
    }

    pub fn with_phone_verified(mut self, phone_verified: bool) -> Self {
        self.phone_verified = phone_verified;
        self
    }

    pub fn with_last_updated(mut self, last_updated: NaiveDate) -> Self {
        self.last_updated = Some(last_updated);
        self
    }

    /// An entry where every match flag passed.
    pub fn fully_verified() -> Self {
        Self::found()
            .with_name_match(true)
            .with_address_verified(true)
            .with_phone_verified(true)
    }
}

/// Outcome of a web presence check for one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebResult {
    /// Whether a site for the provider was located
    pub website_found: bool,

    /// Ratio of on-file contact fields confirmed by the site (0.0-1.0).
    /// Zero when no site was found.
    pub contact_match: f64,

    // Incidental contact details observed on the site
    pub url: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl WebResult {
    /// A check that located a site, with the given contact-match ratio.
    ///
    /// The ratio is clamped to `[0.0, 1.0]`.
    pub fn found(contact_match: f64) -> Self {
        Self {
            website_found: true,
            contact_match: contact_match.clamp(0.0, 1.0),
            url: None,
            phone: None,
            email: None,
            address: None,
        }
    }

    /// A check that found no web presence.
    pub fn not_found() -> Self {
        Self {
            website_found: false,
            contact_match: 0.0,
            url: None,
            phone: None,
            email: None,
            address: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// Quality tier reported by a document extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentQuality {
    High,
    Medium,
    Low,
}

/// Outcome of extracting credentials from an attached document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentResult {
    /// Whether extraction produced usable fields
    pub success: bool,

    /// Scan quality tier, when extraction ran to completion
    pub quality: Option<DocumentQuality>,

    /// Extraction confidence (0.0-1.0). Zero on failure.
    pub confidence: f64,

    /// Why extraction failed
    pub failure_reason: Option<String>,
}

impl DocumentResult {
    /// A successful extraction.
    ///
    /// Confidence is clamped to `[0.0, 1.0]`.
    pub fn extracted(quality: DocumentQuality, confidence: f64) -> Self {
        Self {
            success: true,
            quality: Some(quality),
            confidence: confidence.clamp(0.0, 1.0),
            failure_reason: None,
        }
    }

    /// A failed extraction.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            quality: None,
            confidence: 0.0,
            failure_reason: Some(reason.into()),
        }
    }
}
