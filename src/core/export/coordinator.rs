//! Export coordinator - main orchestrator for the export process
//!
//! A run has two phases. The fetch phase calls the content provider once and
//! must finish before anything is written; if it fails the run aborts with no
//! files touched. The write phase renders and writes every record
//! independently, at most `max_concurrency` at a time, and collects one
//! [`RecordReport`] per record. A record's failure never stops its siblings.

use crate::adapters::provider::ContentProvider;
use crate::core::export::outcome::{ExportOutcome, RecordReport, SkipReason};
use crate::core::export::settings::ExportSettings;
use crate::core::export::summary::ExportSummary;
use crate::core::progress::{NoopProgress, Phase, ProgressSink};
use crate::core::render::render_record;
use crate::core::writer::{target_path, write_exclusive, WriteStatus};
use crate::domain::{QuireError, Record, Result};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Instant;

/// Export coordinator
pub struct ExportCoordinator {
    provider: Arc<dyn ContentProvider>,
    settings: ExportSettings,
    progress: Arc<dyn ProgressSink>,
}

impl ExportCoordinator {
    /// Create a new export coordinator with no progress reporting
    pub fn new(provider: Arc<dyn ContentProvider>, settings: ExportSettings) -> Self {
        Self {
            provider,
            settings,
            progress: Arc::new(NoopProgress),
        }
    }

    /// Report progress to the given sink
    pub fn with_progress(mut self, progress: Arc<dyn ProgressSink>) -> Self {
        self.progress = progress;
        self
    }

    /// Execute the export
    ///
    /// # Errors
    ///
    /// Only a fetch failure is returned as an error. Per-record failures are
    /// reported in the summary.
    pub async fn execute_export(&self) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let mut summary = ExportSummary::new(self.settings.collection.as_str());

        tracing::info!(
            provider = self.provider.name(),
            collection = %self.settings.collection,
            page_size = self.settings.page_size,
            "Starting export process"
        );

        self.progress.phase_started(Phase::Fetch);
        let page = match self
            .provider
            .fetch_records(&self.settings.collection, self.settings.page_size)
            .await
        {
            Ok(page) => {
                self.progress.phase_succeeded(Phase::Fetch);
                page
            }
            Err(e) => {
                tracing::error!(
                    collection = %self.settings.collection,
                    error = %e,
                    "Failed to fetch records"
                );
                self.progress.phase_failed(Phase::Fetch, &e.to_string());
                return Err(e);
            }
        };

        summary.total_records = page.records.len();
        summary.provider_total = page.total_count;

        tracing::info!(
            count = summary.total_records,
            available = ?summary.provider_total,
            output_root = %self.settings.output_root.display(),
            layout = %self.settings.layout,
            front_matter = %self.settings.variant,
            "Fetched records, writing files"
        );

        self.progress.phase_started(Phase::Write);
        let reports: Vec<RecordReport> = stream::iter(page.records)
            .map(|record| self.export_record(record))
            .buffer_unordered(self.settings.max_concurrency.max(1))
            .collect()
            .await;

        for report in reports {
            summary.record(report);
        }
        self.progress.phase_succeeded(Phase::Write);

        summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();

        Ok(summary)
    }

    /// Render and write one record, converting every failure into its outcome
    async fn export_record(&self, record: Record) -> RecordReport {
        let report = match render_record(&record, self.settings.layout, self.settings.variant) {
            Ok(doc) => {
                let path = target_path(&self.settings.output_root, &doc.relative_path);
                let outcome = match write_exclusive(
                    &self.settings.output_root,
                    &doc.relative_path,
                    &doc.contents,
                )
                .await
                {
                    Ok(WriteStatus::Written) => {
                        tracing::debug!(slug = %record.slug, path = %path.display(), "Wrote file");
                        ExportOutcome::Written
                    }
                    Ok(WriteStatus::AlreadyExists) => {
                        tracing::debug!(
                            slug = %record.slug,
                            path = %path.display(),
                            "File already exists, skipping"
                        );
                        ExportOutcome::Skipped(SkipReason::AlreadyExists)
                    }
                    Err(e) => {
                        tracing::warn!(
                            slug = %record.slug,
                            path = %path.display(),
                            error = %e,
                            "Failed to write file"
                        );
                        ExportOutcome::Failed(QuireError::from(e).to_string())
                    }
                };
                RecordReport::new(record.slug, Some(path), outcome)
            }
            Err(e) => {
                tracing::warn!(slug = %record.slug, error = %e, "Failed to render record");
                RecordReport::new(record.slug, None, ExportOutcome::Failed(e.to_string()))
            }
        };

        self.progress.record_finished(&report);
        report
    }
}
