//! Export summary and reporting
//!
//! Aggregates per-record outcomes of a run. Outcomes arrive in completion
//! order, which carries no meaning; the summary is a tally plus the list of
//! failed records.

use super::outcome::{ExportOutcome, RecordReport};
use std::time::Duration;

/// A record that failed to export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFailure {
    /// Slug of the failed record
    pub slug: String,

    /// Failure reason
    pub reason: String,
}

/// Summary of an export run
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Collection that was exported
    pub collection: String,

    /// Number of records fetched from the provider
    pub total_records: usize,

    /// Total number of records the provider reports for the collection
    pub provider_total: Option<usize>,

    /// Number of files written
    pub written: usize,

    /// Number of records skipped because their file already existed
    pub skipped: usize,

    /// Number of records that failed
    pub failed: usize,

    /// Failed records with reasons
    pub failures: Vec<RecordFailure>,

    /// Every per-record report
    pub reports: Vec<RecordReport>,

    /// Duration of the run
    pub duration: Duration,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            total_records: 0,
            provider_total: None,
            written: 0,
            skipped: 0,
            failed: 0,
            failures: Vec::new(),
            reports: Vec::new(),
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Tally a record report
    pub fn record(&mut self, report: RecordReport) {
        match &report.outcome {
            ExportOutcome::Written => self.written += 1,
            ExportOutcome::Skipped(_) => self.skipped += 1,
            ExportOutcome::Failed(reason) => {
                self.failed += 1;
                self.failures.push(RecordFailure {
                    slug: report.slug.clone(),
                    reason: reason.clone(),
                });
            }
        }
        self.reports.push(report);
    }

    /// True when the provider holds more records than were fetched
    pub fn is_truncated(&self) -> bool {
        self.provider_total
            .map(|total| total > self.total_records)
            .unwrap_or(false)
    }

    /// Slugs of failed records, sorted
    pub fn failed_slugs(&self) -> Vec<&str> {
        let mut slugs: Vec<&str> = self.failures.iter().map(|f| f.slug.as_str()).collect();
        slugs.sort_unstable();
        slugs
    }

    /// Check if no record failed
    pub fn is_successful(&self) -> bool {
        self.failed == 0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            collection = %self.collection,
            total = self.total_records,
            written = self.written,
            skipped = self.skipped,
            failed = self.failed,
            duration_ms = self.duration.as_millis() as u64,
            "Export completed"
        );

        if self.is_truncated() {
            tracing::warn!(
                fetched = self.total_records,
                available = ?self.provider_total,
                "Collection has more records than the page size; the rest were not exported"
            );
        }

        for failure in &self.failures {
            tracing::warn!(
                slug = %failure.slug,
                reason = %failure.reason,
                "Record failed to export"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::export::outcome::SkipReason;

    fn report(slug: &str, outcome: ExportOutcome) -> RecordReport {
        RecordReport::new(slug, None, outcome)
    }

    #[test]
    fn test_export_summary_creation() {
        let summary = ExportSummary::new("blogs");

        assert_eq!(summary.collection, "blogs");
        assert_eq!(summary.total_records, 0);
        assert_eq!(summary.written, 0);
        assert!(summary.failures.is_empty());
        assert!(summary.is_successful());
        assert!(!summary.is_truncated());
    }

    #[test]
    fn test_record_tallies_outcomes() {
        let mut summary = ExportSummary::new("blogs");
        summary.record(report("a", ExportOutcome::Written));
        summary.record(report("b", ExportOutcome::Skipped(SkipReason::AlreadyExists)));
        summary.record(report("d", ExportOutcome::Failed("boom".to_string())));
        summary.record(report("c", ExportOutcome::Failed("bang".to_string())));

        assert_eq!(summary.written, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.reports.len(), 4);
        assert_eq!(summary.failed_slugs(), vec!["c", "d"]);
        assert!(!summary.is_successful());
    }

    #[test]
    fn test_truncation() {
        let mut summary = ExportSummary::new("blogs");
        summary.total_records = 100;
        summary.provider_total = Some(100);
        assert!(!summary.is_truncated());

        summary.provider_total = Some(250);
        assert!(summary.is_truncated());
    }

    #[test]
    fn test_with_duration() {
        let summary = ExportSummary::new("blogs").with_duration(Duration::from_secs(3));
        assert_eq!(summary.duration, Duration::from_secs(3));
    }
}
