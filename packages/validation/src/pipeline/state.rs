//! Mutable state carried through one validation run.

use crate::types::{
    DocumentResult, ProviderRecord, RegistryResult, ValidationStatus, WebResult,
};

/// State accumulated across the stages of a single pipeline run.
///
/// Created at pipeline start, owned exclusively by that run, and dropped
/// when the report is built. Each result slot is written once, by the
/// stage that owns it; the scorer reads all of them. Issues and actions
/// are append-only.
#[derive(Debug, Clone)]
pub struct ValidationState {
    pub record: ProviderRecord,

    pub registry: Option<RegistryResult>,
    pub web: Option<WebResult>,
    pub document: Option<DocumentResult>,

    pub issues: Vec<String>,
    pub actions: Vec<String>,

    /// Set by the scoring stage; `None` while pending
    pub score: Option<u32>,
    /// Set by the scoring stage; `None` while pending
    pub status: Option<ValidationStatus>,

    /// Stage names in completion order
    pub completed_steps: Vec<String>,
}

impl ValidationState {
    /// Create fresh state for a record.
    pub fn new(record: ProviderRecord) -> Self {
        Self {
            record,
            registry: None,
            web: None,
            document: None,
            issues: Vec::new(),
            actions: Vec::new(),
            score: None,
            status: None,
            completed_steps: Vec::new(),
        }
    }

    /// Append a detected issue.
    pub fn push_issue(&mut self, issue: impl Into<String>) {
        self.issues.push(issue.into());
    }

    /// Append a required remediation action.
    pub fn push_action(&mut self, action: impl Into<String>) {
        self.actions.push(action.into());
    }

    /// Record a stage as completed.
    pub fn complete_step(&mut self, step: &str) {
        self.completed_steps.push(step.to_string());
    }

    /// Whether the scoring stage has run.
    pub fn is_scored(&self) -> bool {
        self.score.is_some() && self.status.is_some()
    }
}
