//! Directory dependencies for services (using traits for testability)
//!
//! Central dependency container wired into the batch coordinator and the
//! provider service. All verification sources and stores sit behind
//! trait objects so implementations can be swapped without touching the
//! core.

use std::sync::Arc;

use validation::sources::fixed::{FixedDocumentExtractor, FixedRegistry, FixedWebPresence};
use validation::types::DocumentQuality;
use validation::Pipeline;

use crate::kernel::stores::{
    JobStore, MemoryJobStore, MemoryRecordStore, MemoryReportStore, RecordStore, ReportStore,
};

/// Dependencies shared by the coordinator and provider service.
#[derive(Clone)]
pub struct DirectoryDeps {
    pub pipeline: Arc<Pipeline>,
    pub records: Arc<dyn RecordStore>,
    pub reports: Arc<dyn ReportStore>,
    pub jobs: Arc<dyn JobStore>,
}

impl DirectoryDeps {
    /// Create new DirectoryDeps with the given dependencies
    pub fn new(
        pipeline: Arc<Pipeline>,
        records: Arc<dyn RecordStore>,
        reports: Arc<dyn ReportStore>,
        jobs: Arc<dyn JobStore>,
    ) -> Self {
        Self {
            pipeline,
            records,
            reports,
            jobs,
        }
    }

    /// Deps wired for tests: deterministic passing sources and empty
    /// in-memory stores.
    pub fn for_testing() -> Self {
        let pipeline = Pipeline::new(
            Arc::new(FixedRegistry::verifying_all()),
            Arc::new(FixedWebPresence::matching(0.9)),
            Arc::new(FixedDocumentExtractor::extracting(DocumentQuality::High, 0.9)),
        );

        Self::new(
            Arc::new(pipeline),
            Arc::new(MemoryRecordStore::new()),
            Arc::new(MemoryReportStore::new()),
            Arc::new(MemoryJobStore::new()),
        )
    }

    /// Replace the pipeline, keeping the stores.
    pub fn with_pipeline(mut self, pipeline: Arc<Pipeline>) -> Self {
        self.pipeline = pipeline;
        self
    }
}
