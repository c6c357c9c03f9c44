//! Export command implementation
//!
//! This module implements the `export` command, which is also what runs when
//! `quire` is invoked without a subcommand.

use super::{EXIT_CONFIG, EXIT_FATAL, EXIT_FETCH, EXIT_OK, EXIT_RECORD_FAILURES};
use crate::adapters::microcms::MicroCmsProvider;
use crate::cli::progress::ConsoleProgress;
use crate::config::{resolve_config, QuireConfig};
use crate::core::export::{ExportCoordinator, ExportSettings, ExportSummary};
use crate::domain::QuireError;
use clap::Args;
use std::path::Path;
use std::sync::Arc;

/// Failed records listed individually before the rest are summarized
const MAX_LISTED_FAILURES: usize = 10;

/// Arguments for the export command
#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// Override the output root directory
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Override the path layout (flat or year)
    #[arg(long, value_name = "LAYOUT")]
    pub layout: Option<String>,

    /// Override the front-matter variant (fixed or optional)
    #[arg(long, value_name = "VARIANT")]
    pub front_matter: Option<String>,

    /// Override the maximum number of concurrent writes
    #[arg(long, value_name = "N")]
    pub max_concurrency: Option<usize>,

    /// Exit with code 1 when any record fails
    #[arg(long)]
    pub strict: bool,
}

impl ExportArgs {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut QuireConfig) {
        if let Some(dir) = &self.output_dir {
            tracing::info!(output_dir = %dir, "Overriding output directory from CLI");
            config.export.output_dir = dir.clone();
        }
        if let Some(layout) = &self.layout {
            tracing::info!(layout = %layout, "Overriding path layout from CLI");
            config.export.path_layout = layout.clone();
        }
        if let Some(variant) = &self.front_matter {
            tracing::info!(front_matter = %variant, "Overriding front matter from CLI");
            config.export.front_matter = variant.clone();
        }
        if let Some(n) = self.max_concurrency {
            config.export.max_concurrency = n;
        }
        if self.strict {
            config.export.strict = true;
        }
    }

    /// Execute the export command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = match resolve_config(config_path.map(Path::new)) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("{e}");
                return Ok(EXIT_CONFIG);
            }
        };

        self.apply_overrides(&mut config);

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(EXIT_CONFIG);
        }

        let settings = match ExportSettings::from_config(&config) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let provider = match MicroCmsProvider::new(config.cms.clone()) {
            Ok(p) => Arc::new(p),
            Err(e) => {
                tracing::error!(error = %e, "Failed to create content provider");
                eprintln!("{e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let coordinator = ExportCoordinator::new(provider, settings)
            .with_progress(Arc::new(ConsoleProgress::new("microCMS")));

        let summary = match coordinator.execute_export().await {
            Ok(s) => s,
            Err(e) => return Ok(exit_code_for_error(&e)),
        };

        print_summary(&summary);

        Ok(exit_code_for_summary(&summary, config.export.strict))
    }
}

/// Exit code for an export that aborted
pub fn exit_code_for_error(err: &QuireError) -> i32 {
    match err {
        QuireError::Provider(_) => EXIT_FETCH,
        QuireError::Configuration(_) => EXIT_CONFIG,
        _ => EXIT_FATAL,
    }
}

/// Exit code for an export that ran to completion
pub fn exit_code_for_summary(summary: &ExportSummary, strict: bool) -> i32 {
    if strict && !summary.is_successful() {
        EXIT_RECORD_FAILURES
    } else {
        EXIT_OK
    }
}

fn print_summary(summary: &ExportSummary) {
    println!();
    println!("📊 Export Summary:");
    println!("  Collection: {}", summary.collection);
    println!("  Fetched: {}", summary.total_records);
    println!("  Written: {}", summary.written);
    println!("  Skipped (already exists): {}", summary.skipped);
    println!("  Failed: {}", summary.failed);
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());

    if let (true, Some(total)) = (summary.is_truncated(), summary.provider_total) {
        println!();
        println!(
            "⚠️  The collection holds {total} records; only the first {} were exported",
            summary.total_records
        );
    }

    if !summary.failures.is_empty() {
        println!();
        println!("⚠️  Failed records:");
        for failure in summary.failures.iter().take(MAX_LISTED_FAILURES) {
            println!("  - {}: {}", failure.slug, failure.reason);
        }
        if summary.failures.len() > MAX_LISTED_FAILURES {
            println!(
                "  ... and {} more failures",
                summary.failures.len() - MAX_LISTED_FAILURES
            );
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::export::{ExportOutcome, RecordReport};
    use crate::domain::ProviderError;

    #[test]
    fn test_export_args_defaults() {
        let args = ExportArgs::default();
        let mut config = QuireConfig::default();
        args.apply_overrides(&mut config);

        assert_eq!(config.export.output_dir, "outputs");
        assert_eq!(config.export.path_layout, "year");
        assert!(!config.export.strict);
    }

    #[test]
    fn test_export_args_with_overrides() {
        let args = ExportArgs {
            output_dir: Some("out".to_string()),
            layout: Some("flat".to_string()),
            front_matter: Some("optional".to_string()),
            max_concurrency: Some(2),
            strict: true,
        };
        let mut config = QuireConfig::default();
        args.apply_overrides(&mut config);

        assert_eq!(config.export.output_dir, "out");
        assert_eq!(config.export.path_layout, "flat");
        assert_eq!(config.export.front_matter, "optional");
        assert_eq!(config.export.max_concurrency, 2);
        assert!(config.export.strict);
    }

    #[test]
    fn test_exit_code_for_error() {
        let fetch = QuireError::Provider(ProviderError::Timeout("slow".to_string()));
        assert_eq!(exit_code_for_error(&fetch), EXIT_FETCH);

        let config = QuireError::Configuration("bad".to_string());
        assert_eq!(exit_code_for_error(&config), EXIT_CONFIG);

        let other = QuireError::Io("disk".to_string());
        assert_eq!(exit_code_for_error(&other), EXIT_FATAL);
    }

    #[test]
    fn test_exit_code_for_summary() {
        let mut summary = ExportSummary::new("blogs");
        summary.record(RecordReport::new("a", None, ExportOutcome::Written));
        assert_eq!(exit_code_for_summary(&summary, true), EXIT_OK);

        summary.record(RecordReport::new(
            "b",
            None,
            ExportOutcome::Failed("boom".to_string()),
        ));
        assert_eq!(exit_code_for_summary(&summary, false), EXIT_OK);
        assert_eq!(exit_code_for_summary(&summary, true), EXIT_RECORD_FAILURES);
    }
}
