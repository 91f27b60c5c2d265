//! Kernel: dependency container, stores, and batch job infrastructure.

pub mod deps;
pub mod jobs;
pub mod stores;

pub use deps::DirectoryDeps;
pub use jobs::{BatchCoordinator, BatchCoordinatorConfig, BatchJob, BatchStatus, RecordOutcome};
pub use stores::{
    JobStore, MemoryJobStore, MemoryRecordStore, MemoryReportStore, RecordStore, ReportStore,
};
