//! Read-side types and helpers for the provider directory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validation::{ProviderRecord, ValidationReport, ValidationStatus};

/// Filters for listing providers. All filters are conjunctive; `None`
/// means "any".
#[derive(Debug, Clone, Default)]
pub struct ProviderFilter {
    /// Exact state/region match, e.g. "MA"
    pub state: Option<String>,
    /// Exact specialty match, e.g. "Cardiology"
    pub specialty: Option<String>,
    /// Validation status match; excludes never-validated providers
    pub status: Option<ValidationStatus>,
}

impl ProviderFilter {
    pub fn by_state(state: impl Into<String>) -> Self {
        Self {
            state: Some(state.into()),
            ..Default::default()
        }
    }

    pub fn by_specialty(specialty: impl Into<String>) -> Self {
        Self {
            specialty: Some(specialty.into()),
            ..Default::default()
        }
    }

    pub fn by_status(status: ValidationStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    fn matches(&self, listing: &ProviderListing) -> bool {
        if let Some(state) = &self.state {
            if &listing.state != state {
                return false;
            }
        }
        if let Some(specialty) = &self.specialty {
            if &listing.specialty != specialty {
                return false;
            }
        }
        if let Some(status) = self.status {
            if listing.status != Some(status) {
                return false;
            }
        }
        true
    }
}

/// Record joined with its latest validation outcome, for list queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderListing {
    pub provider_id: String,
    pub full_name: String,
    pub specialty: String,
    pub city: String,
    pub state: String,
    pub npi: String,

    /// Latest validation status, when the provider has been validated
    pub status: Option<ValidationStatus>,
    pub confidence_score: Option<u32>,
    pub last_validated: Option<DateTime<Utc>>,
}

impl ProviderListing {
    fn from_parts(record: &ProviderRecord, report: Option<&ValidationReport>) -> Self {
        Self {
            provider_id: record.provider_id.clone(),
            full_name: record.full_name.clone(),
            specialty: record.specialty.clone(),
            city: record.city.clone(),
            state: record.state.clone(),
            npi: record.npi.clone(),
            status: report.map(|r| r.status),
            confidence_score: report.map(|r| r.confidence_score),
            last_validated: report.map(|r| r.validated_at),
        }
    }
}

/// Join records with stored reports and apply a filter.
pub fn filtered_listings(
    records: &[ProviderRecord],
    reports: &[ValidationReport],
    filter: &ProviderFilter,
) -> Vec<ProviderListing> {
    let by_provider: HashMap<&str, &ValidationReport> = reports
        .iter()
        .map(|r| (r.provider_id.as_str(), r))
        .collect();

    records
        .iter()
        .map(|record| {
            ProviderListing::from_parts(record, by_provider.get(record.provider_id.as_str()).copied())
        })
        .filter(|listing| filter.matches(listing))
        .collect()
}

/// Aggregate statistics over all stored reports.
///
/// Derived purely by summation, so the numbers are independent of the
/// order records were validated in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Records in the directory
    pub total_providers: usize,
    /// Records with a stored report
    pub total_validated: usize,
    pub verified: usize,
    pub needs_review: usize,
    pub average_confidence: f64,
    /// Percentage of validated records that verified
    pub success_rate: f64,
}

/// Summarize stored reports against the directory size.
pub fn summarize(total_providers: usize, reports: &[ValidationReport]) -> ValidationSummary {
    let total_validated = reports.len();
    let verified = reports.iter().filter(|r| r.status.is_verified()).count();
    let needs_review = total_validated - verified;

    let (average_confidence, success_rate) = if total_validated == 0 {
        (0.0, 0.0)
    } else {
        let sum: u32 = reports.iter().map(|r| r.confidence_score).sum();
        (
            sum as f64 / total_validated as f64,
            (verified as f64 / total_validated as f64) * 100.0,
        )
    };

    ValidationSummary {
        total_providers,
        total_validated,
        verified,
        needs_review,
        average_confidence,
        success_rate,
    }
}
