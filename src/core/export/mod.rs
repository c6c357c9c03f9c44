//! Export orchestration
//!
//! This module provides the export pipeline:
//! - Settings resolved from configuration
//! - Export coordination with bounded concurrency
//! - Per-record outcomes and the run summary

pub mod coordinator;
pub mod outcome;
pub mod settings;
pub mod summary;

pub use coordinator::ExportCoordinator;
pub use outcome::{ExportOutcome, RecordReport, SkipReason};
pub use settings::ExportSettings;
pub use summary::{ExportSummary, RecordFailure};
