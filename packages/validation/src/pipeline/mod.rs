//! Validation pipeline with fixed stage orchestration.
//!
//! One [`Pipeline`] instance validates many records; each call to
//! [`Pipeline::run`] owns a fresh [`ValidationState`] and walks the
//! stage sequence exactly once:
//!
//! ```text
//! start
//!   └─► document_extraction      (only when the record has documents)
//!   └─► data_validation          (registry + web, concurrently)
//!   └─► quality_assurance        (scoring + issue/action side effects)
//!   └─► report_generation
//! ```
//!
//! No stage failure aborts the run: a source returning "not found",
//! erroring, or timing out is absorbed as a negative result and recorded
//! as an issue, and the report is always produced.

pub mod report;
pub mod scoring;
pub mod state;

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::traits::{DocumentExtractor, RegistryLookup, WebPresenceCheck};
use crate::types::{DocumentResult, ProviderRecord, RegistryResult, ValidationReport, WebResult};

pub use report::ReportBuilder;
pub use state::ValidationState;

/// Stage names, in the order they appear in `completed_steps`.
pub const STEP_START: &str = "start";
pub const STEP_DOCUMENT_EXTRACTION: &str = "document_extraction";
pub const STEP_DATA_VALIDATION: &str = "data_validation";
pub const STEP_QUALITY_ASSURANCE: &str = "quality_assurance";
pub const STEP_REPORT_GENERATION: &str = "report_generation";

/// Pipeline tuning knobs.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    /// Per-source-call timeout. A call exceeding it is treated as a
    /// not-found result for that source. `None` disables the limit.
    pub source_timeout: Option<Duration>,
}

impl PipelineConfig {
    /// Config with a per-source timeout.
    pub fn with_source_timeout(timeout: Duration) -> Self {
        Self {
            source_timeout: Some(timeout),
        }
    }
}

/// Executes the validation stage sequence over one record at a time.
pub struct Pipeline {
    registry: Arc<dyn RegistryLookup>,
    web: Arc<dyn WebPresenceCheck>,
    documents: Arc<dyn DocumentExtractor>,
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline over the given verification sources.
    pub fn new(
        registry: Arc<dyn RegistryLookup>,
        web: Arc<dyn WebPresenceCheck>,
        documents: Arc<dyn DocumentExtractor>,
    ) -> Self {
        Self {
            registry,
            web,
            documents,
            config: PipelineConfig::default(),
        }
    }

    /// Create with custom configuration.
    pub fn with_config(
        registry: Arc<dyn RegistryLookup>,
        web: Arc<dyn WebPresenceCheck>,
        documents: Arc<dyn DocumentExtractor>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            registry,
            web,
            documents,
            config,
        }
    }

    /// Validate one record and produce its report.
    ///
    /// Errors only on a malformed record (missing identifier or name);
    /// every accepted record yields exactly one report.
    pub async fn run(&self, record: ProviderRecord) -> Result<ValidationReport> {
        record.validate()?;

        let started = Instant::now();
        let mut state = ValidationState::new(record);

        debug!(
            provider_id = %state.record.provider_id,
            name = %state.record.full_name,
            "starting validation"
        );
        state.complete_step(STEP_START);

        if state.record.has_documents {
            self.document_stage(&mut state).await;
        }

        self.data_validation_stage(&mut state).await;

        scoring::apply(&mut state);
        state.complete_step(STEP_QUALITY_ASSURANCE);

        state.complete_step(STEP_REPORT_GENERATION);
        let report = ReportBuilder::build(&state, Utc::now(), started.elapsed());

        info!(
            provider_id = %report.provider_id,
            score = report.confidence_score,
            status = %report.status,
            issues = report.issues.len(),
            "validation completed"
        );

        Ok(report)
    }

    async fn document_stage(&self, state: &mut ValidationState) {
        let record = &state.record;
        let result = match self
            .bounded(self.documents.extract(record.extraction_ref()))
            .await
        {
            Some(Ok(result)) => result,
            Some(Err(e)) => {
                warn!(
                    provider_id = %record.provider_id,
                    source = self.documents.name(),
                    error = %e,
                    "document extraction errored"
                );
                DocumentResult::failed(format!("document extraction unavailable: {}", e))
            }
            None => {
                warn!(
                    provider_id = %record.provider_id,
                    source = self.documents.name(),
                    "document extraction timed out"
                );
                DocumentResult::failed("document extraction timed out")
            }
        };

        if !result.success {
            state.push_issue("Document extraction failed - manual review needed");
        }
        state.document = Some(result);
        state.complete_step(STEP_DOCUMENT_EXTRACTION);
    }

    /// Registry and web checks are independent and run concurrently;
    /// both must complete before scoring.
    async fn data_validation_stage(&self, state: &mut ValidationState) {
        let record = &state.record;
        let (registry_result, web_result) = tokio::join!(
            self.lookup_registry(record),
            self.check_web(record),
        );

        if !registry_result.found {
            state.push_issue("NPI not found in registry");
        }

        state.registry = Some(registry_result);
        state.web = Some(web_result);
        state.complete_step(STEP_DATA_VALIDATION);
    }

    async fn lookup_registry(&self, record: &ProviderRecord) -> RegistryResult {
        match self
            .bounded(self.registry.lookup(&record.npi, &record.full_name))
            .await
        {
            Some(Ok(result)) => result,
            Some(Err(e)) => {
                warn!(
                    provider_id = %record.provider_id,
                    source = self.registry.name(),
                    error = %e,
                    "registry lookup errored"
                );
                RegistryResult::not_found(format!("registry unavailable: {}", e))
            }
            None => {
                warn!(
                    provider_id = %record.provider_id,
                    source = self.registry.name(),
                    "registry lookup timed out"
                );
                RegistryResult::not_found("registry lookup timed out")
            }
        }
    }

    async fn check_web(&self, record: &ProviderRecord) -> WebResult {
        match self
            .bounded(self.web.check(&record.full_name, &record.city, &record.state))
            .await
        {
            Some(Ok(result)) => result,
            Some(Err(e)) => {
                warn!(
                    provider_id = %record.provider_id,
                    source = self.web.name(),
                    error = %e,
                    "web presence check errored"
                );
                WebResult::not_found()
            }
            None => {
                warn!(
                    provider_id = %record.provider_id,
                    source = self.web.name(),
                    "web presence check timed out"
                );
                WebResult::not_found()
            }
        }
    }

    /// Apply the configured source timeout; `None` means it elapsed.
    async fn bounded<F, T>(&self, fut: F) -> Option<Result<T>>
    where
        F: Future<Output = Result<T>>,
    {
        match self.config.source_timeout {
            Some(limit) => tokio::time::timeout(limit, fut).await.ok(),
            None => Some(fut.await),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::fixed::{FixedDocumentExtractor, FixedRegistry, FixedWebPresence};
    use crate::testing::sample_record;
    use crate::types::{DocumentQuality, ValidationStatus};

    fn pipeline_with(
        registry: FixedRegistry,
        web: FixedWebPresence,
        documents: FixedDocumentExtractor,
    ) -> Pipeline {
        Pipeline::new(Arc::new(registry), Arc::new(web), Arc::new(documents))
    }

    #[tokio::test]
    async fn skips_document_stage_without_documents() {
        let pipeline = pipeline_with(
            FixedRegistry::verifying_all(),
            FixedWebPresence::matching(0.9),
            FixedDocumentExtractor::extracting(DocumentQuality::High, 0.9),
        );

        let report = pipeline.run(sample_record("1")).await.unwrap();

        assert!(report.document.is_none());
        assert_eq!(
            report.completed_steps,
            vec![
                STEP_START,
                STEP_DATA_VALIDATION,
                STEP_QUALITY_ASSURANCE,
                STEP_REPORT_GENERATION
            ]
        );
    }

    #[tokio::test]
    async fn runs_document_stage_when_flagged() {
        let pipeline = pipeline_with(
            FixedRegistry::verifying_all(),
            FixedWebPresence::matching(0.9),
            FixedDocumentExtractor::extracting(DocumentQuality::High, 0.9),
        );

        let report = pipeline
            .run(sample_record("1").with_document("license.pdf"))
            .await
            .unwrap();

        let document = report.document.expect("document stage ran");
        assert!(document.success);
        assert_eq!(report.completed_steps[1], STEP_DOCUMENT_EXTRACTION);
    }

    #[tokio::test]
    async fn registry_miss_is_issue_not_error() {
        let pipeline = pipeline_with(
            FixedRegistry::new(),
            FixedWebPresence::new(),
            FixedDocumentExtractor::new(),
        );

        let report = pipeline.run(sample_record("1")).await.unwrap();

        assert!(!report.registry.found);
        assert!(report.issues.iter().any(|i| i == "NPI not found in registry"));
        assert_eq!(report.status, ValidationStatus::ManualReviewRequired);
    }

    #[tokio::test]
    async fn malformed_record_is_rejected_before_stages() {
        let pipeline = pipeline_with(
            FixedRegistry::verifying_all(),
            FixedWebPresence::matching(0.9),
            FixedDocumentExtractor::new(),
        );

        let mut record = sample_record("1");
        record.full_name = String::new();

        assert!(pipeline.run(record).await.is_err());
    }
}
