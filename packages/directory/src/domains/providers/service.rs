//! Provider service facade - the external surface of the directory
//! validation system.

use tracing::info;
use uuid::Uuid;
use validation::{ProviderRecord, ValidationReport};

use super::queries::{filtered_listings, summarize, ProviderFilter, ProviderListing, ValidationSummary};
use crate::common::{paginate, Page, PageArgs};
use crate::error::{DirectoryError, Result};
use crate::kernel::jobs::{BatchCoordinator, BatchCoordinatorConfig, BatchJob};
use crate::kernel::DirectoryDeps;

/// Facade over the pipeline, stores, and batch coordinator.
///
/// This is the only entry point applications need: single and batch
/// validation, job status, report retrieval, and the administrative
/// list/summary queries.
pub struct ProviderService {
    deps: DirectoryDeps,
    coordinator: BatchCoordinator,
}

impl ProviderService {
    /// Create a service with default coordinator configuration.
    pub fn new(deps: DirectoryDeps) -> Self {
        let coordinator = BatchCoordinator::new(deps.clone());
        Self { deps, coordinator }
    }

    /// Create with custom coordinator configuration.
    pub fn with_config(deps: DirectoryDeps, config: BatchCoordinatorConfig) -> Self {
        let coordinator = BatchCoordinator::with_config(deps.clone(), config);
        Self { deps, coordinator }
    }

    /// Add or replace a directory record.
    pub async fn add_record(&self, record: ProviderRecord) -> Result<()> {
        record.validate()?;
        self.deps.records.put(record).await
    }

    /// Fetch a directory record.
    pub async fn record(&self, provider_id: &str) -> Result<ProviderRecord> {
        self.deps
            .records
            .get(provider_id)
            .await?
            .ok_or_else(|| DirectoryError::record_not_found(provider_id))
    }

    /// Validate one record synchronously and store its report.
    pub async fn validate_provider(&self, record: ProviderRecord) -> Result<ValidationReport> {
        let report = self.deps.pipeline.run(record).await?;
        self.deps.reports.put(report.clone()).await?;
        info!(
            provider_id = %report.provider_id,
            status = %report.status,
            "single validation stored"
        );
        Ok(report)
    }

    /// Start a batch validation over stored records.
    ///
    /// Returns the job id immediately; processing is asynchronous.
    pub async fn validate_batch(
        &self,
        provider_ids: Vec<String>,
        mode: impl Into<String>,
    ) -> Result<Uuid> {
        self.coordinator.submit(provider_ids, mode).await
    }

    /// Snapshot of a batch job, including final tallies after it
    /// completes.
    pub async fn job_status(&self, job_id: Uuid) -> Result<BatchJob> {
        self.coordinator.status(job_id).await
    }

    /// Previously computed report for a provider.
    pub async fn validation_report(&self, provider_id: &str) -> Result<ValidationReport> {
        self.deps
            .reports
            .get(provider_id)
            .await?
            .ok_or_else(|| DirectoryError::report_not_found(provider_id))
    }

    /// List providers with filters and skip/limit pagination.
    pub async fn list_providers(
        &self,
        filter: &ProviderFilter,
        page: &PageArgs,
    ) -> Result<Page<ProviderListing>> {
        let records = self.deps.records.list().await?;
        let reports = self.deps.reports.list().await?;
        Ok(paginate(filtered_listings(&records, &reports, filter), page))
    }

    /// Aggregate validation statistics over the directory.
    pub async fn summary(&self) -> Result<ValidationSummary> {
        let total_providers = self.deps.records.count().await?;
        let reports = self.deps.reports.list().await?;
        Ok(summarize(total_providers, &reports))
    }

    /// Request cooperative shutdown of in-flight batches.
    pub fn shutdown(&self) {
        self.coordinator.shutdown();
    }
}
