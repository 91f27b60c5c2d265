//! Verification source implementations.
//!
//! Only deterministic implementations live here; real registry, web, or
//! document integrations are supplied by applications behind the traits
//! in [`crate::traits`].

pub mod fixed;

pub use fixed::{FixedDocumentExtractor, FixedRegistry, FixedWebPresence};
