//! Provider directory record - the entry being validated.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// A stored directory record for a single provider.
///
/// Immutable for the duration of a validation run. The identifier must be
/// unique within a batch; `npi` is the registry identifier checked by
/// [`RegistryLookup`](crate::traits::RegistryLookup).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderRecord {
    /// Directory identifier for this provider
    pub provider_id: String,

    /// National registry identifier (10-digit NPI)
    pub npi: String,

    pub first_name: String,
    pub last_name: String,
    pub full_name: String,

    /// Medical specialty, e.g. "Cardiology"
    pub specialty: String,

    // Contact fields on file
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,

    /// State license number, when on file
    #[serde(default)]
    pub license_number: Option<String>,

    /// Whether supporting credential documents are attached
    #[serde(default)]
    pub has_documents: bool,

    /// Reference to the attached document, when one was supplied
    #[serde(default)]
    pub document_ref: Option<String>,
}

impl ProviderRecord {
    /// Create a record with the required identity fields.
    ///
    /// Contact fields start empty and can be filled with the `with_*`
    /// setters.
    pub fn new(
        provider_id: impl Into<String>,
        npi: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        specialty: impl Into<String>,
    ) -> Self {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let full_name = format!("Dr. {} {}", first_name, last_name);

        Self {
            provider_id: provider_id.into(),
            npi: npi.into(),
            first_name,
            last_name,
            full_name,
            specialty: specialty.into(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            license_number: None,
            has_documents: false,
            document_ref: None,
        }
    }

    /// Set the phone number on file.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Set the email on file.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Set the street address on file.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the city and state on file.
    pub fn with_location(
        mut self,
        city: impl Into<String>,
        state: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Self {
        self.city = city.into();
        self.state = state.into();
        self.zip_code = zip_code.into();
        self
    }

    /// Set the state license number.
    pub fn with_license_number(mut self, license_number: impl Into<String>) -> Self {
        self.license_number = Some(license_number.into());
        self
    }

    /// Attach a supporting document reference.
    pub fn with_document(mut self, document_ref: impl Into<String>) -> Self {
        self.has_documents = true;
        self.document_ref = Some(document_ref.into());
        self
    }

    /// Mark documents attached without a specific reference.
    pub fn with_documents(mut self) -> Self {
        self.has_documents = true;
        self
    }

    /// Reference passed to the document extractor.
    ///
    /// Falls back to the provider id when the record carries the document
    /// flag without an explicit reference.
    pub fn extraction_ref(&self) -> &str {
        self.document_ref.as_deref().unwrap_or(&self.provider_id)
    }

    /// Check the record is well-formed enough to enter the pipeline.
    ///
    /// A record without an identifier or a name cannot be validated and
    /// is rejected before any stage runs.
    pub fn validate(&self) -> Result<()> {
        if self.provider_id.trim().is_empty() {
            return Err(ValidationError::invalid_record("missing provider_id"));
        }
        if self.full_name.trim().is_empty() {
            return Err(ValidationError::invalid_record("missing full_name"));
        }
        Ok(())
    }
}
