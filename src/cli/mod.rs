//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Quire using clap.

pub mod commands;
pub mod progress;

use clap::{Parser, Subcommand};

/// Quire - export headless CMS content to Markdown files
#[derive(Parser, Debug)]
#[command(name = "quire")]
#[command(version, about, long_about = None)]
#[command(author = "Quire Contributors")]
pub struct Cli {
    /// Path to configuration file (defaults to quire.toml when present)
    #[arg(short, long, env = "QUIRE_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "QUIRE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute (defaults to `export`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export CMS contents to Markdown files
    Export(commands::export::ExportArgs),

    /// Validate configuration
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_command() {
        let cli = Cli::parse_from(["quire"]);
        assert!(cli.config.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["quire", "export"]);
        assert!(matches!(cli.command, Some(Commands::Export(_))));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["quire", "--config", "custom.toml", "export"]);
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["quire", "--log-level", "debug", "export"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_export_overrides() {
        let cli = Cli::parse_from([
            "quire",
            "export",
            "--output-dir",
            "out",
            "--layout",
            "flat",
            "--front-matter",
            "optional",
            "--max-concurrency",
            "4",
            "--strict",
        ]);
        let Some(Commands::Export(args)) = cli.command else {
            panic!("expected export command");
        };
        assert_eq!(args.output_dir.as_deref(), Some("out"));
        assert_eq!(args.layout.as_deref(), Some("flat"));
        assert_eq!(args.front_matter.as_deref(), Some("optional"));
        assert_eq!(args.max_concurrency, Some(4));
        assert!(args.strict);
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["quire", "validate-config"]);
        assert!(matches!(cli.command, Some(Commands::ValidateConfig(_))));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["quire", "init", "--force"]);
        assert!(matches!(cli.command, Some(Commands::Init(ref a)) if a.force));
    }
}
