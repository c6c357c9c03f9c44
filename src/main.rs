// Quire - Headless CMS to Markdown export tool
// Copyright (c) 2025 Quire Contributors
// Licensed under the MIT License

use clap::Parser;
use quire::cli::commands::export::ExportArgs;
use quire::cli::commands::EXIT_FATAL;
use quire::cli::{Cli, Commands};
use quire::config::{resolve_config, LoggingConfig};
use quire::logging::init_logging;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logging settings come from the config when it loads; commands report
    // configuration errors themselves.
    let (config_level, logging_config) = match resolve_config(cli.config.as_deref().map(Path::new))
    {
        Ok(config) => (Some(config.application.log_level), config.logging),
        Err(_) => (None, LoggingConfig::default()),
    };
    let log_level = cli
        .log_level
        .clone()
        .or(config_level)
        .unwrap_or_else(|| "info".to_string());

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(EXIT_FATAL);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Quire - Headless CMS to Markdown export tool"
    );

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            EXIT_FATAL
        }
    };

    // process::exit skips destructors; flush file logs first
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    let config_path = cli.config.as_deref();
    match &cli.command {
        Some(Commands::Export(args)) => args.execute(config_path).await,
        Some(Commands::ValidateConfig(args)) => args.execute(config_path).await,
        Some(Commands::Init(args)) => args.execute().await,
        None => ExportArgs::default().execute(config_path).await,
    }
}
