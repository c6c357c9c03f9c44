// Quire - Headless CMS to Markdown export tool
// Copyright (c) 2025 Quire Contributors
// Licensed under the MIT License

//! # Quire - Headless CMS to Markdown export
//!
//! Quire fetches the records of a headless CMS collection and writes each one
//! as a Markdown file with a front-matter header, for static site generators.
//!
//! ## Overview
//!
//! - **Fetching** one page of a collection from microCMS
//! - **Rendering** each record to a path and a front-matter document
//! - **Writing** files create-exclusively, so existing files are never touched
//! - **Reporting** a per-record outcome: written, skipped, or failed
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Rendering, writing, and export orchestration
//! - [`adapters`] - Content providers (microCMS)
//! - [`domain`] - Records, identifiers, and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quire::adapters::microcms::MicroCmsProvider;
//! use quire::config::load_config;
//! use quire::core::export::{ExportCoordinator, ExportSettings};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("quire.toml")?;
//!     let provider = Arc::new(MicroCmsProvider::new(config.cms.clone())?);
//!
//!     let coordinator = ExportCoordinator::new(provider, ExportSettings::from_config(&config)?);
//!     let summary = coordinator.execute_export().await?;
//!
//!     println!("Wrote {} files", summary.written);
//!     Ok(())
//! }
//! ```
//!
//! ## Rendering
//!
//! Rendering is a pure function of the record:
//!
//! ```rust
//! use quire::core::render::{render_record, FrontMatterVariant, PathLayout};
//! use quire::domain::Record;
//!
//! let record = Record::new("hello", "Hi", "World", "2023-01-02T00:00:00Z", "2023-01-03T00:00:00Z");
//! let doc = render_record(&record, PathLayout::Year, FrontMatterVariant::Fixed).unwrap();
//!
//! assert_eq!(doc.relative_path, std::path::PathBuf::from("2023/hello.md"));
//! assert!(doc.contents.starts_with("---\ntitle: Hi\n"));
//! ```
//!
//! ## Error Handling
//!
//! Library functions return [`domain::Result`] with [`domain::QuireError`].
//! Only a failed fetch aborts an export; per-record problems are reported in
//! the [`ExportSummary`](core::export::ExportSummary).

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
