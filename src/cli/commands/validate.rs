//! Validate config command implementation

use super::{EXIT_CONFIG, EXIT_OK};
use crate::config::{resolve_config, DEFAULT_CONFIG_PATH};
use clap::Args;
use std::path::Path;

/// Arguments for the validate-config command
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let source = match config_path {
            Some(path) => path.to_string(),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => DEFAULT_CONFIG_PATH.to_string(),
            None => "environment".to_string(),
        };
        tracing::info!(source = %source, "Validating configuration");

        println!("🔍 Validating configuration from: {source}");
        println!();

        // Loading validates as well
        let config = match resolve_config(config_path.map(Path::new)) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  CMS Base URL: {}", config.cms.resolved_base_url());
        println!("  CMS Endpoint: {}", config.cms.endpoint);
        println!("  API Key: (set)");
        println!("  Page Size: {}", config.cms.page_size);
        println!("  Output Directory: {}", config.export.output_dir);
        println!("  Path Layout: {}", config.export.path_layout);
        println!("  Front Matter: {}", config.export.front_matter);
        println!("  Max Concurrency: {}", config.export.max_concurrency);
        println!("  Strict: {}", config.export.strict);
        println!();

        Ok(EXIT_OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_validate_missing_file() {
        let args = ValidateArgs::default();
        let code = args
            .execute(Some("/nonexistent/quire.toml"))
            .await
            .unwrap();
        assert_eq!(code, EXIT_CONFIG);
    }

    #[tokio::test]
    async fn test_validate_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"
[cms]
service_domain = "example"
api_key = "key"
endpoint = "blogs"
"#,
        )
        .unwrap();
        file.flush().unwrap();

        let path = file.path().to_string_lossy().to_string();
        let code = ValidateArgs::default().execute(Some(&path)).await.unwrap();
        assert_eq!(code, EXIT_OK);
    }
}
