// Provider Directory Validation - Service Core
//
// This crate provides the service layer around the validation pipeline:
// repository-backed stores, batch job coordination with a bounded worker
// pool, and the provider service facade used by applications.

pub mod common;
pub mod config;
pub mod domains;
pub mod error;
pub mod kernel;

pub use config::Config;
pub use domains::providers::{ProviderFilter, ProviderListing, ProviderService, ValidationSummary};
pub use error::{DirectoryError, Result};
pub use kernel::{
    BatchCoordinator, BatchCoordinatorConfig, BatchJob, BatchStatus, DirectoryDeps, JobStore,
    MemoryJobStore, MemoryRecordStore, MemoryReportStore, RecordOutcome, RecordStore, ReportStore,
};
