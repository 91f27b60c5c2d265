//! Batch job infrastructure.
//!
//! This module provides the kernel-level pieces for batch validation:
//! - [`BatchJob`] - job model with progress tallies
//! - [`BatchCoordinator`] - accepts batches and drives the worker pool
//!
//! Domain logic stays in `domains`; this module only moves records
//! through the pipeline and keeps job state consistent.

mod coordinator;
mod job;

pub use coordinator::{BatchCoordinator, BatchCoordinatorConfig};
pub use job::{BatchJob, BatchStatus, RecordOutcome};
