//! Provider Record Validation Library
//!
//! Validates directory records for medical providers by reconciling the
//! stored record against independent verification sources, producing a
//! confidence score, a status classification, and a list of issues and
//! required actions.
//!
//! # Design Philosophy
//!
//! - Sources are contracts, not implementations: the pipeline depends on
//!   [`RegistryLookup`], [`WebPresenceCheck`], and [`DocumentExtractor`]
//!   and never inspects what is behind them
//! - "Not found" is data, not an error: every accepted record produces
//!   exactly one report
//! - Scoring is a pure function of stage results
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use validation::{Pipeline, FixedRegistry, FixedWebPresence, FixedDocumentExtractor};
//! use validation::testing::sample_record;
//!
//! let pipeline = Pipeline::new(
//!     Arc::new(FixedRegistry::verifying_all()),
//!     Arc::new(FixedWebPresence::matching(0.9)),
//!     Arc::new(FixedDocumentExtractor::new()),
//! );
//!
//! let report = pipeline.run(sample_record("1")).await?;
//! println!("{} -> {}", report.provider_id, report.status);
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Verification source contracts
//! - [`types`] - Records, stage results, reports
//! - [`pipeline`] - Stage orchestration, scoring, report assembly
//! - [`sources`] - Deterministic source implementations
//! - [`testing`] - Fixtures and call-recording wrappers

pub mod error;
pub mod pipeline;
pub mod sources;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{Result, ValidationError};
pub use traits::{DocumentExtractor, RegistryLookup, WebPresenceCheck};
pub use types::{
    DocumentQuality, DocumentResult, ProviderRecord, RegistryResult, ValidationReport,
    ValidationStatus, WebResult,
};

// Re-export pipeline components
pub use pipeline::{Pipeline, PipelineConfig, ReportBuilder, ValidationState};

// Re-export deterministic sources
pub use sources::{FixedDocumentExtractor, FixedRegistry, FixedWebPresence};
