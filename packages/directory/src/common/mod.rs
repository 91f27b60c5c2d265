//! Shared helpers for the directory service layer.

pub mod pagination;

pub use pagination::{paginate, Page, PageArgs};
