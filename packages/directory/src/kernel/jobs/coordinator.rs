//! Batch coordinator: runs the pipeline over many records with a
//! bounded worker pool.
//!
//! # Architecture
//!
//! ```text
//! submit(ids, mode)
//!     │
//!     ├─► resolve records up front (unknown id rejects the batch)
//!     ├─► store BatchJob (queued), return job id
//!     └─► spawn batch task
//!             ├─► mark in_progress
//!             ├─► for_each_concurrent(concurrency):
//!             │       run pipeline ─► store report ─► record_completion
//!             └─► mark completed (or failed on cancellation)
//! ```
//!
//! Distinct jobs are independent and may run concurrently; within a job
//! no ordering is guaranteed between records, and the tallies are
//! order-independent by construction.

use futures::StreamExt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use uuid::Uuid;
use validation::ProviderRecord;

use super::job::{BatchJob, RecordOutcome};
use crate::error::{DirectoryError, Result};
use crate::kernel::deps::DirectoryDeps;

/// Configuration for the batch coordinator.
#[derive(Debug, Clone)]
pub struct BatchCoordinatorConfig {
    /// Maximum records validated concurrently within one job
    pub concurrency: usize,
    /// Worker ID for this instance
    pub worker_id: String,
}

impl Default for BatchCoordinatorConfig {
    fn default() -> Self {
        Self {
            concurrency: 4,
            worker_id: format!("batch-worker-{}", Uuid::new_v4()),
        }
    }
}

impl BatchCoordinatorConfig {
    /// Create a config with a specific concurrency bound.
    pub fn with_concurrency(concurrency: usize) -> Self {
        Self {
            concurrency: concurrency.max(1),
            ..Default::default()
        }
    }
}

/// Accepts batch requests and drives them to completion in the
/// background.
pub struct BatchCoordinator {
    deps: DirectoryDeps,
    config: BatchCoordinatorConfig,
    shutdown: CancellationToken,
}

impl BatchCoordinator {
    /// Create a coordinator with default configuration.
    pub fn new(deps: DirectoryDeps) -> Self {
        Self::with_config(deps, BatchCoordinatorConfig::default())
    }

    /// Create with custom configuration.
    pub fn with_config(deps: DirectoryDeps, config: BatchCoordinatorConfig) -> Self {
        Self {
            deps,
            config,
            shutdown: CancellationToken::new(),
        }
    }

    /// Submit a batch for asynchronous validation.
    ///
    /// All provider ids are resolved against the record store before the
    /// job is accepted; an unknown or malformed record rejects the whole
    /// batch so every accepted record ends with exactly one report.
    /// Returns the job id immediately; processing happens in a spawned
    /// task.
    pub async fn submit(
        &self,
        provider_ids: Vec<String>,
        mode: impl Into<String>,
    ) -> Result<Uuid> {
        if provider_ids.is_empty() {
            return Err(DirectoryError::EmptyBatch);
        }

        let mut records = Vec::with_capacity(provider_ids.len());
        for provider_id in &provider_ids {
            let record = self
                .deps
                .records
                .get(provider_id)
                .await?
                .ok_or_else(|| DirectoryError::record_not_found(provider_id.clone()))?;
            record.validate()?;
            records.push(record);
        }

        let job = BatchJob::new(provider_ids, mode);
        let job_id = job.id;
        info!(
            job_id = %job_id,
            worker_id = %self.config.worker_id,
            total = job.total(),
            mode = %job.mode,
            "batch accepted"
        );
        self.deps.jobs.put(job).await?;

        let deps = self.deps.clone();
        let concurrency = self.config.concurrency.max(1);
        let cancel = self.shutdown.child_token();
        tokio::spawn(async move {
            run_batch(deps, job_id, records, concurrency, cancel).await;
        });

        Ok(job_id)
    }

    /// Snapshot of a job's current state.
    pub async fn status(&self, job_id: Uuid) -> Result<BatchJob> {
        self.deps
            .jobs
            .get(job_id)
            .await?
            .ok_or(DirectoryError::JobNotFound { job_id })
    }

    /// Request cooperative shutdown of all in-flight batches.
    ///
    /// Records already being validated run to completion; unstarted
    /// records are skipped and affected jobs are marked failed.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }
}

async fn run_batch(
    deps: DirectoryDeps,
    job_id: Uuid,
    records: Vec<ProviderRecord>,
    concurrency: usize,
    cancel: CancellationToken,
) {
    if let Err(e) = deps.jobs.mark_started(job_id).await {
        error!(job_id = %job_id, error = %e, "failed to mark job started");
        return;
    }

    futures::stream::iter(records)
        .for_each_concurrent(concurrency, |record| {
            let deps = deps.clone();
            let cancel = cancel.clone();
            async move {
                if cancel.is_cancelled() {
                    return;
                }
                process_record(&deps, job_id, record).await;
            }
        })
        .await;

    if cancel.is_cancelled() {
        warn!(job_id = %job_id, "batch cancelled before completion");
        if let Err(e) = deps
            .jobs
            .mark_failed(job_id, "batch cancelled before completion")
            .await
        {
            error!(job_id = %job_id, error = %e, "failed to mark job failed");
        }
        return;
    }

    if let Err(e) = deps.jobs.mark_completed(job_id).await {
        error!(job_id = %job_id, error = %e, "failed to mark job completed");
        return;
    }
    info!(job_id = %job_id, "batch completed");
}

async fn process_record(deps: &DirectoryDeps, job_id: Uuid, record: ProviderRecord) {
    let provider_id = record.provider_id.clone();
    debug!(job_id = %job_id, provider_id = %provider_id, "validating record");

    let outcome = match deps.pipeline.run(record).await {
        Ok(report) => {
            let outcome = RecordOutcome::from(report.status);
            if let Err(e) = deps.reports.put(report).await {
                error!(job_id = %job_id, provider_id = %provider_id, error = %e, "failed to store report");
            }
            outcome
        }
        Err(e) => {
            // Records are validated at submit time, so this is
            // unexpected; keep the tallies consistent regardless.
            warn!(job_id = %job_id, provider_id = %provider_id, error = %e, "record validation failed");
            RecordOutcome::NeedsReview
        }
    };

    if let Err(e) = deps.jobs.record_completion(job_id, outcome).await {
        error!(job_id = %job_id, provider_id = %provider_id, error = %e, "failed to record completion");
    }
}
