//! Report assembly from final pipeline state.

use chrono::{DateTime, Utc};
use std::time::Duration;

use super::state::ValidationState;
use crate::types::{RegistryResult, ValidationReport, ValidationStatus, WebResult};

/// Assembles the immutable [`ValidationReport`] from a finished run.
///
/// Pure: no network, no randomness. Building twice from the same state
/// with the same timestamp yields identical reports.
pub struct ReportBuilder;

impl ReportBuilder {
    /// Build the report for a scored state.
    pub fn build(
        state: &ValidationState,
        validated_at: DateTime<Utc>,
        elapsed: Duration,
    ) -> ValidationReport {
        let record = &state.record;

        ValidationReport {
            provider_id: record.provider_id.clone(),
            provider_name: record.full_name.clone(),
            npi: record.npi.clone(),
            specialty: record.specialty.clone(),
            status: state
                .status
                .unwrap_or(ValidationStatus::ManualReviewRequired),
            confidence_score: state.score.unwrap_or(0),
            registry: state
                .registry
                .clone()
                .unwrap_or_else(|| RegistryResult::not_found("registry stage did not run")),
            web: state.web.clone().unwrap_or_else(WebResult::not_found),
            document: state.document.clone(),
            issues: state.issues.clone(),
            actions: state.actions.clone(),
            notification: render_notification(state),
            completed_steps: state.completed_steps.clone(),
            validated_at,
            elapsed_seconds: elapsed.as_secs_f64(),
        }
    }
}

/// Render the provider notification draft.
///
/// Substitutes record fields and the issue/action lists into a fixed
/// message skeleton; each entry gets its own line, with a single "None"
/// line when a list is empty.
fn render_notification(state: &ValidationState) -> String {
    let record = &state.record;

    format!(
        "Subject: Provider Directory Information Update Required\n\
         \n\
         Dear Dr. {last_name},\n\
         \n\
         We are updating our provider directory and need to verify your information.\n\
         \n\
         Current Information on File:\n\
         - Name: {full_name}\n\
         - Specialty: {specialty}\n\
         - Phone: {phone}\n\
         - Address: {address}, {city}, {state}\n\
         \n\
         Issues Identified:\n\
         {issues}\n\
         \n\
         Actions Needed:\n\
         {actions}\n\
         \n\
         Please reply to this message with updated information or confirm the information is correct.\n\
         \n\
         Thank you for your cooperation.\n\
         \n\
         Best regards,\n\
         Provider Network Services",
        last_name = record.last_name,
        full_name = record.full_name,
        specialty = record.specialty,
        phone = record.phone,
        address = record.address,
        city = record.city,
        state = record.state,
        issues = render_list(&state.issues, "None"),
        actions = render_list(&state.actions, "None - Information confirmed accurate"),
    )
}

fn render_list(items: &[String], empty: &str) -> String {
    if items.is_empty() {
        format!("- {}", empty)
    } else {
        items
            .iter()
            .map(|item| format!("- {}", item))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_record;
    use crate::types::RegistryResult;

    fn scored_state() -> ValidationState {
        let mut state = ValidationState::new(
            sample_record("1")
                .with_phone("(555) 123-4567")
                .with_address("123 Medical Plaza")
                .with_location("Boston", "MA", "02101"),
        );
        state.registry = Some(RegistryResult::fully_verified());
        state.web = Some(WebResult::found(0.9));
        state.score = Some(77);
        state.status = Some(ValidationStatus::VerifiedWithIssues);
        state
    }

    #[test]
    fn report_copies_state_verbatim() {
        let mut state = scored_state();
        state.push_issue("Contact information mismatch");
        state.push_action("Contact provider to update information");

        let report = ReportBuilder::build(&state, Utc::now(), Duration::from_millis(1200));

        assert_eq!(report.provider_id, "1");
        assert_eq!(report.confidence_score, 77);
        assert_eq!(report.status, ValidationStatus::VerifiedWithIssues);
        assert_eq!(report.issues, vec!["Contact information mismatch"]);
        assert_eq!(report.actions, vec!["Contact provider to update information"]);
        assert!(report.document.is_none());
    }

    #[test]
    fn building_twice_is_idempotent() {
        let state = scored_state();
        let at = Utc::now();
        let elapsed = Duration::from_millis(500);

        let first = ReportBuilder::build(&state, at, elapsed);
        let second = ReportBuilder::build(&state, at, elapsed);

        assert_eq!(first, second);
    }

    #[test]
    fn notification_lists_each_issue_on_own_line() {
        let mut state = scored_state();
        state.push_issue("Address verification failed");
        state.push_issue("Contact information mismatch");

        let report = ReportBuilder::build(&state, Utc::now(), Duration::ZERO);

        assert!(report
            .notification
            .contains("- Address verification failed\n- Contact information mismatch"));
    }

    #[test]
    fn notification_renders_none_lines_when_clean() {
        let state = scored_state();
        let report = ReportBuilder::build(&state, Utc::now(), Duration::ZERO);

        assert!(report.notification.contains("Issues Identified:\n- None\n"));
        assert!(report
            .notification
            .contains("Actions Needed:\n- None - Information confirmed accurate\n"));
    }

    #[test]
    fn notification_addresses_provider_by_last_name() {
        let state = scored_state();
        let report = ReportBuilder::build(&state, Utc::now(), Duration::ZERO);

        assert!(report.notification.contains("Dear Dr. Doe,"));
        assert!(report.notification.contains("- Address: 123 Medical Plaza, Boston, MA"));
    }
}
