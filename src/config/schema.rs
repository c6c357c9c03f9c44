//! Configuration schema types
//!
//! This module defines the configuration structure for Quire.

use crate::config::{secret_string, SecretString};
use serde::{Deserialize, Serialize};

/// Main Quire configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// Every section is optional in the file; omitted sections take defaults so
/// a configuration can be assembled from the environment alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuireConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Headless CMS connection
    #[serde(default)]
    pub cms: CmsConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl QuireConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.cms.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Headless CMS (microCMS) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsConfig {
    /// Service subdomain, as in `https://<service_domain>.microcms.io`
    #[serde(default)]
    pub service_domain: String,

    /// API key sent with every request
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default = "default_api_key")]
    pub api_key: SecretString,

    /// Collection (API endpoint name) to export
    #[serde(default)]
    pub endpoint: String,

    /// Overrides the base URL derived from `service_domain`
    #[serde(default)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Maximum number of records fetched
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl CmsConfig {
    /// Base URL requests are made against
    pub fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}.microcms.io", self.service_domain),
        }
    }

    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        match &self.base_url {
            Some(url) => {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err("cms.base_url must start with http:// or https://".to_string());
                }
            }
            None => {
                if self.service_domain.is_empty() {
                    return Err(
                        "cms.service_domain cannot be empty (or set X_MICROCMS_API_SUB_DOMAIN)"
                            .to_string(),
                    );
                }
                if !self
                    .service_domain
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-')
                {
                    return Err(format!(
                        "Invalid cms.service_domain '{}'. Only letters, digits and '-' are allowed",
                        self.service_domain
                    ));
                }
            }
        }

        if self.api_key.expose_secret().is_empty() {
            return Err("cms.api_key cannot be empty (or set X_MICROCMS_API_KEY)".to_string());
        }

        if self.endpoint.is_empty() {
            return Err("cms.endpoint cannot be empty (or set X_MICROCMS_API_NAME)".to_string());
        }

        if self.endpoint.contains('/') {
            return Err(format!(
                "Invalid cms.endpoint '{}'. Must be a single path segment",
                self.endpoint
            ));
        }

        if self.timeout_seconds == 0 {
            return Err("cms.timeout_seconds must be > 0".to_string());
        }

        if self.page_size == 0 || self.page_size > 100 {
            return Err("cms.page_size must be between 1 and 100".to_string());
        }

        Ok(())
    }
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            service_domain: String::new(),
            api_key: default_api_key(),
            endpoint: String::new(),
            base_url: None,
            timeout_seconds: default_timeout_seconds(),
            page_size: default_page_size(),
        }
    }
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Output root directory
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Directory layout (flat, year)
    #[serde(default = "default_path_layout")]
    pub path_layout: String,

    /// Front-matter variant (fixed, optional)
    #[serde(default = "default_front_matter")]
    pub front_matter: String,

    /// Maximum number of records written concurrently
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// Exit non-zero when any record fails
    #[serde(default)]
    pub strict: bool,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_dir.is_empty() {
            return Err("export.output_dir cannot be empty".to_string());
        }

        let valid_layouts = ["flat", "year", "year-partitioned"];
        if !valid_layouts.contains(&self.path_layout.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid export.path_layout '{}'. Must be one of: {}",
                self.path_layout,
                valid_layouts.join(", ")
            ));
        }

        let valid_variants = ["fixed", "fixed-field", "optional", "optional-field"];
        if !valid_variants.contains(&self.front_matter.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid export.front_matter '{}'. Must be one of: {}",
                self.front_matter,
                valid_variants.join(", ")
            ));
        }

        if self.max_concurrency == 0 || self.max_concurrency > 256 {
            return Err("export.max_concurrency must be between 1 and 256".to_string());
        }

        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            path_layout: default_path_layout(),
            front_matter: default_front_matter(),
            max_concurrency: default_max_concurrency(),
            strict: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_api_key() -> SecretString {
    secret_string(String::new())
}

fn default_timeout_seconds() -> u64 {
    60
}

fn default_page_size() -> usize {
    100
}

fn default_output_dir() -> String {
    "outputs".to_string()
}

fn default_path_layout() -> String {
    "year".to_string()
}

fn default_front_matter() -> String {
    "fixed".to_string()
}

fn default_max_concurrency() -> usize {
    16
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
