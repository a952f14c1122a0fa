//! Storage module for reports
//!
//! Provides the `ReportStore` abstraction and its in-memory implementation.

mod report_store;

pub use report_store::{InMemoryReportStore, ReportStore};
