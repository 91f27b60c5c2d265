//! Confidence scoring over accumulated stage results.

use tracing::debug;

use super::state::ValidationState;
use crate::types::ValidationStatus;

/// Points awarded when the registry entry is found.
pub const REGISTRY_FOUND_POINTS: u32 = 40;
/// Points awarded when the registry address matches.
pub const ADDRESS_VERIFIED_POINTS: u32 = 10;
/// Maximum points from the web contact-match ratio.
pub const WEB_MATCH_POINTS: u32 = 30;
/// Maximum points from document extraction confidence.
pub const DOCUMENT_POINTS: u32 = 20;
/// Contact-match ratio below which the record is flagged.
pub const CONTACT_MATCH_THRESHOLD: f64 = 0.8;

const MAX_SCORE: u32 = 100;

/// Score the accumulated results and classify the record.
///
/// Runs exactly once per pipeline, after all applicable stages finish.
/// Registry name-match and phone-verified contribute no points beyond
/// the base 40; when false they are recorded as informational issues
/// only. Also appends the address and contact-mismatch issues/actions.
pub fn apply(state: &mut ValidationState) {
    let mut score: u32 = 0;

    if let Some(registry) = &state.registry {
        if registry.found {
            score += REGISTRY_FOUND_POINTS;
            if registry.address_verified {
                score += ADDRESS_VERIFIED_POINTS;
            }
        }
    }

    if let Some(web) = &state.web {
        if web.website_found {
            score += (WEB_MATCH_POINTS as f64 * web.contact_match).round() as u32;
        }
    }

    if let Some(document) = &state.document {
        if document.success {
            score += (DOCUMENT_POINTS as f64 * document.confidence).round() as u32;
        }
    }

    let score = score.min(MAX_SCORE);

    let name_mismatch = state
        .registry
        .as_ref()
        .map(|r| r.found && !r.name_match)
        .unwrap_or(false);
    let phone_unverified = state
        .registry
        .as_ref()
        .map(|r| r.found && !r.phone_verified)
        .unwrap_or(false);
    if name_mismatch {
        state.push_issue("Name mismatch in registry records");
    }
    if phone_unverified {
        state.push_issue("Phone number could not be verified");
        state.push_action("Contact provider to confirm phone number");
    }

    let address_verified = state
        .registry
        .as_ref()
        .map(|r| r.address_verified)
        .unwrap_or(false);
    if !address_verified {
        state.push_issue("Address verification failed");
        state.push_action("Manual address verification needed");
    }

    let contact_match = state.web.as_ref().map(|w| w.contact_match).unwrap_or(1.0);
    if contact_match < CONTACT_MATCH_THRESHOLD {
        state.push_issue("Contact information mismatch");
        state.push_action("Contact provider to update information");
    }

    let status = ValidationStatus::from_score(score);
    debug!(
        provider_id = %state.record.provider_id,
        score,
        status = %status,
        "confidence score computed"
    );

    state.score = Some(score);
    state.status = Some(status);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_record;
    use crate::types::{DocumentQuality, DocumentResult, RegistryResult, WebResult};
    use proptest::prelude::*;

    fn state_with(
        registry: RegistryResult,
        web: WebResult,
        document: Option<DocumentResult>,
    ) -> ValidationState {
        let mut state = ValidationState::new(sample_record("1"));
        state.registry = Some(registry);
        state.web = Some(web);
        state.document = document;
        state
    }

    #[test]
    fn registry_found_with_address_and_strong_web_scores_77() {
        let mut state = state_with(RegistryResult::fully_verified(), WebResult::found(0.9), None);
        apply(&mut state);

        assert_eq!(state.score, Some(77));
        assert_eq!(state.status, Some(ValidationStatus::VerifiedWithIssues));
        assert!(!state.issues.iter().any(|i| i.contains("Address")));
    }

    #[test]
    fn nothing_found_scores_zero() {
        let mut state = state_with(
            RegistryResult::not_found("NPI not found in registry"),
            WebResult::not_found(),
            None,
        );
        apply(&mut state);

        assert_eq!(state.score, Some(0));
        assert_eq!(state.status, Some(ValidationStatus::ManualReviewRequired));
    }

    #[test]
    fn name_and_phone_add_no_points_beyond_base() {
        let all_flags = state_with(RegistryResult::fully_verified(), WebResult::not_found(), None);
        let base_only = state_with(
            RegistryResult::found().with_address_verified(true),
            WebResult::not_found(),
            None,
        );

        let mut a = all_flags;
        let mut b = base_only;
        apply(&mut a);
        apply(&mut b);

        assert_eq!(a.score, b.score);
        assert_eq!(a.score, Some(50));
    }

    #[test]
    fn unverified_phone_is_informational_issue_with_action() {
        let mut state = state_with(
            RegistryResult::found()
                .with_name_match(true)
                .with_address_verified(true),
            WebResult::found(0.95),
            None,
        );
        apply(&mut state);

        assert!(state
            .issues
            .iter()
            .any(|i| i == "Phone number could not be verified"));
        assert!(state
            .actions
            .iter()
            .any(|a| a == "Contact provider to confirm phone number"));
    }

    #[test]
    fn failed_address_appends_issue_and_action() {
        let mut state = state_with(RegistryResult::found(), WebResult::found(0.9), None);
        apply(&mut state);

        assert!(state.issues.iter().any(|i| i == "Address verification failed"));
        assert!(state
            .actions
            .iter()
            .any(|a| a == "Manual address verification needed"));
    }

    #[test]
    fn weak_contact_match_appends_issue_and_action() {
        let mut state = state_with(
            RegistryResult::fully_verified(),
            WebResult::found(0.6),
            None,
        );
        apply(&mut state);

        assert!(state.issues.iter().any(|i| i == "Contact information mismatch"));
        assert!(state
            .actions
            .iter()
            .any(|a| a == "Contact provider to update information"));
    }

    #[test]
    fn website_not_found_counts_as_contact_mismatch() {
        let mut state = state_with(RegistryResult::fully_verified(), WebResult::not_found(), None);
        apply(&mut state);

        assert!(state.issues.iter().any(|i| i == "Contact information mismatch"));
    }

    #[test]
    fn successful_document_adds_scaled_points() {
        let mut state = state_with(
            RegistryResult::fully_verified(),
            WebResult::found(1.0),
            Some(DocumentResult::extracted(DocumentQuality::High, 0.9)),
        );
        apply(&mut state);

        // 40 + 10 + 30 + round(20 * 0.9)
        assert_eq!(state.score, Some(98));
        assert_eq!(state.status, Some(ValidationStatus::Verified));
    }

    #[test]
    fn failed_document_adds_nothing() {
        let mut state = state_with(
            RegistryResult::fully_verified(),
            WebResult::found(1.0),
            Some(DocumentResult::failed("poor scan quality")),
        );
        apply(&mut state);

        assert_eq!(state.score, Some(80));
    }

    proptest! {
        #[test]
        fn score_is_always_in_range(
            found in any::<bool>(),
            address in any::<bool>(),
            website in any::<bool>(),
            contact in 0.0f64..=1.0,
            has_doc in any::<bool>(),
            doc_ok in any::<bool>(),
            doc_confidence in 0.0f64..=1.0,
        ) {
            let registry = if found {
                RegistryResult::found().with_address_verified(address)
            } else {
                RegistryResult::not_found("missing")
            };
            let web = if website {
                WebResult::found(contact)
            } else {
                WebResult::not_found()
            };
            let document = has_doc.then(|| {
                if doc_ok {
                    DocumentResult::extracted(DocumentQuality::Medium, doc_confidence)
                } else {
                    DocumentResult::failed("unreadable")
                }
            });

            let mut state = state_with(registry, web, document);
            apply(&mut state);

            let score = state.score.unwrap();
            prop_assert!(score <= 100);
            prop_assert_eq!(state.status.unwrap(), ValidationStatus::from_score(score));
        }
    }
}
