//! Repository traits for records, reports, and batch jobs.
//!
//! These are INFRASTRUCTURE traits - storage only, no validation logic.
//! The in-memory implementations in [`memory`] are the default backend;
//! a durable backend can replace them without changing any caller.

pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;
use validation::{ProviderRecord, ValidationReport};

use crate::error::Result;
use crate::kernel::jobs::{BatchJob, RecordOutcome};

/// Storage for directory records keyed by provider id.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn get(&self, provider_id: &str) -> Result<Option<ProviderRecord>>;

    async fn put(&self, record: ProviderRecord) -> Result<()>;

    /// All records, ordered by provider id.
    async fn list(&self) -> Result<Vec<ProviderRecord>>;

    async fn count(&self) -> Result<usize>;
}

/// Storage for validation reports keyed by provider id.
#[async_trait]
pub trait ReportStore: Send + Sync {
    async fn get(&self, provider_id: &str) -> Result<Option<ValidationReport>>;

    async fn put(&self, report: ValidationReport) -> Result<()>;

    /// All reports, ordered by provider id.
    async fn list(&self) -> Result<Vec<ValidationReport>>;
}

/// Storage and tally bookkeeping for batch jobs.
///
/// `record_completion` is the single write path for per-record tallies:
/// each call is an atomic read-modify-write under the store's lock, so
/// concurrent workers never lose increments.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn get(&self, job_id: Uuid) -> Result<Option<BatchJob>>;

    async fn put(&self, job: BatchJob) -> Result<()>;

    /// Transition a queued job to in-progress.
    async fn mark_started(&self, job_id: Uuid) -> Result<()>;

    /// Record one finished record, updating completion and tally counts.
    async fn record_completion(&self, job_id: Uuid, outcome: RecordOutcome) -> Result<()>;

    /// Transition a job to completed, stamping the completion time.
    async fn mark_completed(&self, job_id: Uuid) -> Result<()>;

    /// Transition a job to failed with a reason.
    async fn mark_failed(&self, job_id: Uuid, reason: &str) -> Result<()>;
}

pub use memory::{MemoryJobStore, MemoryRecordStore, MemoryReportStore};
