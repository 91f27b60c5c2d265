//! In-memory storage implementations.
//!
//! Data is lost on restart; suitable for development, testing, and the
//! in-process deployment model. Poisoned locks are recovered with
//! `unwrap_or_else(|e| e.into_inner())` so a panicking worker cannot
//! wedge the stores.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;
use validation::{ProviderRecord, ValidationReport};

use super::{JobStore, RecordStore, ReportStore};
use crate::error::{DirectoryError, Result};
use crate::kernel::jobs::{BatchJob, BatchStatus, RecordOutcome};

/// In-memory record store keyed by provider id.
#[derive(Default)]
pub struct MemoryRecordStore {
    records: RwLock<HashMap<String, ProviderRecord>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store from an iterator of records.
    pub fn with_records(records: impl IntoIterator<Item = ProviderRecord>) -> Self {
        let map = records
            .into_iter()
            .map(|r| (r.provider_id.clone(), r))
            .collect();
        Self {
            records: RwLock::new(map),
        }
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn get(&self, provider_id: &str) -> Result<Option<ProviderRecord>> {
        Ok(self
            .records
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(provider_id)
            .cloned())
    }

    async fn put(&self, record: ProviderRecord) -> Result<()> {
        self.records
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(record.provider_id.clone(), record);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<ProviderRecord>> {
        let mut records: Vec<_> = self
            .records
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .cloned()
            .collect();
        records.sort_by(|a, b| a.provider_id.cmp(&b.provider_id));
        Ok(records)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self
            .records
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len())
    }
}

/// In-memory report store keyed by provider id.
#[derive(Default)]
pub struct MemoryReportStore {
    reports: RwLock<HashMap<String, ValidationReport>>,
}

impl MemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReportStore for MemoryReportStore {
    async fn get(&self, provider_id: &str) -> Result<Option<ValidationReport>> {
        Ok(self
            .reports
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(provider_id)
            .cloned())
    }

    async fn put(&self, report: ValidationReport) -> Result<()> {
        self.reports
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(report.provider_id.clone(), report);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<ValidationReport>> {
        let mut reports: Vec<_> = self
            .reports
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .cloned()
            .collect();
        reports.sort_by(|a, b| a.provider_id.cmp(&b.provider_id));
        Ok(reports)
    }
}

/// In-memory job store keyed by job id.
///
/// All mutations happen under the write lock, giving the
/// single-writer discipline batch tallies require.
#[derive(Default)]
pub struct MemoryJobStore {
    jobs: RwLock<HashMap<Uuid, BatchJob>>,
}

impl MemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn update<F>(&self, job_id: Uuid, apply: F) -> Result<()>
    where
        F: FnOnce(&mut BatchJob),
    {
        let mut jobs = self.jobs.write().unwrap_or_else(|e| e.into_inner());
        let job = jobs
            .get_mut(&job_id)
            .ok_or(DirectoryError::JobNotFound { job_id })?;
        apply(job);
        Ok(())
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn get(&self, job_id: Uuid) -> Result<Option<BatchJob>> {
        Ok(self
            .jobs
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&job_id)
            .cloned())
    }

    async fn put(&self, job: BatchJob) -> Result<()> {
        self.jobs
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(job.id, job);
        Ok(())
    }

    async fn mark_started(&self, job_id: Uuid) -> Result<()> {
        self.update(job_id, |job| {
            if job.status == BatchStatus::Queued {
                job.status = BatchStatus::InProgress;
            }
        })
    }

    async fn record_completion(&self, job_id: Uuid, outcome: RecordOutcome) -> Result<()> {
        self.update(job_id, |job| job.apply(outcome))
    }

    async fn mark_completed(&self, job_id: Uuid) -> Result<()> {
        self.update(job_id, |job| {
            if !job.is_terminal() {
                job.status = BatchStatus::Completed;
                job.completed_at = Some(Utc::now());
            }
        })
    }

    async fn mark_failed(&self, job_id: Uuid, reason: &str) -> Result<()> {
        self.update(job_id, |job| {
            if !job.is_terminal() {
                job.status = BatchStatus::Failed;
                job.failure_reason = Some(reason.to_string());
                job.completed_at = Some(Utc::now());
            }
        })
    }
}
