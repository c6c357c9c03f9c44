//! Core business logic for Quire.
//!
//! This module contains the rendering, writing, and orchestration logic for
//! exports.
//!
//! # Modules
//!
//! - [`export`] - Export orchestration, outcomes, and summary
//! - [`render`] - Output path derivation and Markdown rendering
//! - [`writer`] - Create-exclusive file writes
//! - [`progress`] - Progress notification hooks
//!
//! # Export Workflow
//!
//! 1. **Fetch**: One request to the content provider for the collection
//! 2. **Render**: Derive each record's path and document text
//! 3. **Write**: Create each file exclusively, never overwriting
//! 4. **Report**: Collect per-record outcomes into a summary
//!
//! # Example
//!
//! ```rust,no_run
//! use quire::adapters::microcms::MicroCmsProvider;
//! use quire::config::load_config;
//! use quire::core::export::{ExportCoordinator, ExportSettings};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("quire.toml")?;
//! let provider = Arc::new(MicroCmsProvider::new(config.cms.clone())?);
//! let settings = ExportSettings::from_config(&config)?;
//!
//! let coordinator = ExportCoordinator::new(provider, settings);
//! let summary = coordinator.execute_export().await?;
//!
//! println!("Written: {}", summary.written);
//! println!("Skipped: {}", summary.skipped);
//! println!("Failed: {}", summary.failed);
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod progress;
pub mod render;
pub mod writer;
