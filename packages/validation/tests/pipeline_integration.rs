//! End-to-end pipeline tests with deterministic sources.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use validation::testing::{sample_record, RecordingRegistry};
use validation::{
    DocumentQuality, FixedDocumentExtractor, FixedRegistry, FixedWebPresence, Pipeline,
    PipelineConfig, RegistryLookup, RegistryResult, ValidationStatus,
};

fn pipeline(
    registry: FixedRegistry,
    web: FixedWebPresence,
    documents: FixedDocumentExtractor,
) -> Pipeline {
    Pipeline::new(Arc::new(registry), Arc::new(web), Arc::new(documents))
}

#[tokio::test]
async fn fully_verified_record_without_documents_scores_77() {
    let pipeline = pipeline(
        FixedRegistry::new().with_result("1234567890", RegistryResult::fully_verified()),
        FixedWebPresence::matching(0.9),
        FixedDocumentExtractor::new(),
    );

    let report = pipeline.run(sample_record("1")).await.unwrap();

    // 40 registry + 10 address + round(30 * 0.9)
    assert_eq!(report.confidence_score, 77);
    assert_eq!(report.status, ValidationStatus::VerifiedWithIssues);
    assert!(report.document.is_none());
    assert!(!report.issues.iter().any(|i| i.contains("Address")));
}

#[tokio::test]
async fn nothing_found_requires_manual_review() {
    let pipeline = pipeline(
        FixedRegistry::new(),
        FixedWebPresence::new(),
        FixedDocumentExtractor::new(),
    );

    let report = pipeline.run(sample_record("1")).await.unwrap();

    assert_eq!(report.confidence_score, 0);
    assert_eq!(report.status, ValidationStatus::ManualReviewRequired);
    assert!(report
        .issues
        .iter()
        .any(|i| i == "NPI not found in registry"));
}

#[tokio::test]
async fn document_confidence_pushes_score_to_verified() {
    let pipeline = pipeline(
        FixedRegistry::new().with_result("1234567890", RegistryResult::fully_verified()),
        FixedWebPresence::matching(0.9),
        FixedDocumentExtractor::extracting(DocumentQuality::High, 0.9),
    );

    let report = pipeline
        .run(sample_record("1").with_document("license.pdf"))
        .await
        .unwrap();

    // 77 + round(20 * 0.9)
    assert_eq!(report.confidence_score, 95);
    assert_eq!(report.status, ValidationStatus::Verified);
    assert!(report.document.is_some());
}

#[tokio::test]
async fn failed_extraction_is_distinguishable_from_skipped_stage() {
    let sources = || {
        (
            FixedRegistry::verifying_all(),
            FixedWebPresence::matching(1.0),
            FixedDocumentExtractor::new(),
        )
    };

    let (r1, w1, d1) = sources();
    let skipped = pipeline(r1, w1, d1).run(sample_record("1")).await.unwrap();

    let (r2, w2, d2) = sources();
    let failed = pipeline(r2, w2, d2)
        .run(sample_record("2").with_document("license.pdf"))
        .await
        .unwrap();

    assert!(skipped.document.is_none());
    let document = failed.document.expect("stage ran");
    assert!(!document.success);
    assert!(failed
        .issues
        .iter()
        .any(|i| i == "Document extraction failed - manual review needed"));

    // A failed extraction contributes zero, same as a skipped stage.
    assert_eq!(skipped.confidence_score, failed.confidence_score);
}

#[tokio::test]
async fn timed_out_source_is_recorded_as_not_found() {
    struct SlowRegistry;

    #[async_trait]
    impl RegistryLookup for SlowRegistry {
        async fn lookup(&self, _npi: &str, _full_name: &str) -> validation::Result<RegistryResult> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(RegistryResult::fully_verified())
        }
    }

    let pipeline = Pipeline::with_config(
        Arc::new(SlowRegistry),
        Arc::new(FixedWebPresence::matching(0.9)),
        Arc::new(FixedDocumentExtractor::new()),
        PipelineConfig::with_source_timeout(Duration::from_millis(50)),
    );

    let report = pipeline.run(sample_record("1")).await.unwrap();

    assert!(!report.registry.found);
    assert_eq!(
        report.registry.failure_reason.as_deref(),
        Some("registry lookup timed out")
    );
    assert!(report
        .issues
        .iter()
        .any(|i| i == "NPI not found in registry"));
}

#[tokio::test]
async fn registry_and_web_both_complete_before_scoring() {
    let registry = Arc::new(RecordingRegistry::new(FixedRegistry::verifying_all()));
    let pipeline = Pipeline::new(
        registry.clone(),
        Arc::new(FixedWebPresence::matching(1.0)),
        Arc::new(FixedDocumentExtractor::new()),
    );

    let report = pipeline.run(sample_record("1")).await.unwrap();

    assert_eq!(registry.call_count(), 1);
    assert_eq!(registry.calls()[0].full_name, "Dr. Jane Doe");
    // Registry found + address + full web match
    assert_eq!(report.confidence_score, 80);
    assert_eq!(report.status, ValidationStatus::Verified);
}

#[tokio::test]
async fn notification_reflects_issue_and_action_lists() {
    let pipeline = pipeline(
        FixedRegistry::new(),
        FixedWebPresence::new(),
        FixedDocumentExtractor::new(),
    );

    let report = pipeline.run(sample_record("1")).await.unwrap();

    assert!(report.notification.contains("Dear Dr. Doe,"));
    assert!(report
        .notification
        .contains("- Address verification failed"));
    assert!(report
        .notification
        .contains("- Manual address verification needed"));
}

#[tokio::test]
async fn clean_record_notification_has_none_lines() {
    let pipeline = pipeline(
        FixedRegistry::verifying_all(),
        FixedWebPresence::matching(1.0),
        FixedDocumentExtractor::new(),
    );

    let report = pipeline.run(sample_record("1")).await.unwrap();

    assert!(report.issues.is_empty());
    assert!(report.notification.contains("Issues Identified:\n- None"));
    assert!(report
        .notification
        .contains("Actions Needed:\n- None - Information confirmed accurate"));
}
