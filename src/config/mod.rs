//! Configuration management for Quire.
//!
//! # Overview
//!
//! Quire reads an optional TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every setting
//! - `QUIRE_<SECTION>_<KEY>` environment overrides
//! - The `X_MICROCMS_*` variables used by earlier releases
//!
//! When no file is given and `quire.toml` does not exist, configuration is
//! built from the environment alone.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use quire::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("quire.toml")?;
//!
//! println!("Endpoint: {}", config.cms.endpoint);
//! println!("Output: {}", config.export.output_dir);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`CmsConfig`] - microCMS service, API key, endpoint
//! - [`ExportConfig`] - Output directory, layout, front matter, concurrency
//! - [`LoggingConfig`] - Local JSON file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [cms]
//! service_domain = "my-service"
//! api_key = "${X_MICROCMS_API_KEY}"
//! endpoint = "blogs"
//!
//! [export]
//! output_dir = "outputs"
//! path_layout = "year"
//! front_matter = "fixed"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::{load_config, load_config_from_env, resolve_config, DEFAULT_CONFIG_PATH};
pub use schema::{ApplicationConfig, CmsConfig, ExportConfig, LoggingConfig, QuireConfig};
pub use secret::{secret_string, SecretString, SecretValue};
