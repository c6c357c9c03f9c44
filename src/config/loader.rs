//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::QuireConfig;
use super::secret::secret_string;
use crate::domain::errors::QuireError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Default configuration file name
pub const DEFAULT_CONFIG_PATH: &str = "quire.toml";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into QuireConfig
/// 4. Applies environment variable overrides (X_MICROCMS_* then QUIRE_*)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use quire::config::loader::load_config;
///
/// let config = load_config("quire.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<QuireConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(QuireError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        QuireError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: QuireConfig = toml::from_str(&contents)
        .map_err(|e| QuireError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    validate(&config)?;

    Ok(config)
}

/// Builds configuration from defaults and the process environment only
///
/// # Errors
///
/// Returns an error if an override cannot be parsed or validation fails.
pub fn load_config_from_env() -> Result<QuireConfig> {
    let mut config = QuireConfig::default();
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    validate(&config)?;
    Ok(config)
}

/// Resolves configuration for a run
///
/// An explicitly given path must exist. Without one, `quire.toml` in the
/// working directory is used when present, and the environment alone
/// otherwise.
///
/// # Errors
///
/// Returns an error if the chosen source fails to load or validate.
pub fn resolve_config(path: Option<&Path>) -> Result<QuireConfig> {
    match path {
        Some(path) => load_config(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                load_config(default_path)
            } else {
                tracing::debug!(
                    "No {} found, building configuration from environment",
                    DEFAULT_CONFIG_PATH
                );
                load_config_from_env()
            }
        }
    }
}

fn validate(config: &QuireConfig) -> Result<()> {
    config.validate().map_err(|e| {
        QuireError::Configuration(format!("Configuration validation failed: {e}"))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| QuireError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        // Placeholders in comments are left alone
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(QuireError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

fn parse_override<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        QuireError::Configuration(format!("Invalid value '{value}' for environment variable {key}"))
    })
}

/// Applies environment variable overrides
///
/// The variable names used by earlier releases (`X_MICROCMS_API_KEY`,
/// `X_MICROCMS_API_SUB_DOMAIN`, `X_MICROCMS_API_NAME`) are applied first;
/// `QUIRE_<SECTION>_<KEY>` variables win over them.
fn apply_env_overrides<F>(config: &mut QuireConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    // Legacy names
    if let Some(val) = lookup("X_MICROCMS_API_KEY") {
        config.cms.api_key = secret_string(val);
    }
    if let Some(val) = lookup("X_MICROCMS_API_SUB_DOMAIN") {
        config.cms.service_domain = val;
    }
    if let Some(val) = lookup("X_MICROCMS_API_NAME") {
        config.cms.endpoint = val;
    }

    // Application overrides
    if let Some(val) = lookup("QUIRE_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // CMS overrides
    if let Some(val) = lookup("QUIRE_CMS_SERVICE_DOMAIN") {
        config.cms.service_domain = val;
    }
    if let Some(val) = lookup("QUIRE_CMS_API_KEY") {
        config.cms.api_key = secret_string(val);
    }
    if let Some(val) = lookup("QUIRE_CMS_ENDPOINT") {
        config.cms.endpoint = val;
    }
    if let Some(val) = lookup("QUIRE_CMS_BASE_URL") {
        config.cms.base_url = Some(val);
    }
    if let Some(val) = lookup("QUIRE_CMS_TIMEOUT_SECONDS") {
        config.cms.timeout_seconds = parse_override("QUIRE_CMS_TIMEOUT_SECONDS", &val)?;
    }
    if let Some(val) = lookup("QUIRE_CMS_PAGE_SIZE") {
        config.cms.page_size = parse_override("QUIRE_CMS_PAGE_SIZE", &val)?;
    }

    // Export overrides
    if let Some(val) = lookup("QUIRE_EXPORT_OUTPUT_DIR") {
        config.export.output_dir = val;
    }
    if let Some(val) = lookup("QUIRE_EXPORT_PATH_LAYOUT") {
        config.export.path_layout = val;
    }
    if let Some(val) = lookup("QUIRE_EXPORT_FRONT_MATTER") {
        config.export.front_matter = val;
    }
    if let Some(val) = lookup("QUIRE_EXPORT_MAX_CONCURRENCY") {
        config.export.max_concurrency = parse_override("QUIRE_EXPORT_MAX_CONCURRENCY", &val)?;
    }
    if let Some(val) = lookup("QUIRE_EXPORT_STRICT") {
        config.export.strict = parse_override("QUIRE_EXPORT_STRICT", &val)?;
    }

    // Logging overrides
    if let Some(val) = lookup("QUIRE_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_override("QUIRE_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Some(val) = lookup("QUIRE_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Some(val) = lookup("QUIRE_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("QUIRE_LOADER_TEST_VAR", "test_value");
        let input = "api_key = \"${QUIRE_LOADER_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "api_key = \"test_value\"");
        std::env::remove_var("QUIRE_LOADER_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("QUIRE_LOADER_MISSING_VAR");
        let input = "api_key = \"${QUIRE_LOADER_MISSING_VAR}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("QUIRE_LOADER_COMMENTED_VAR");
        let input = "# api_key = \"${QUIRE_LOADER_COMMENTED_VAR}\"\nendpoint = \"blogs\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, input);
    }

    #[test]
    fn test_legacy_env_names() {
        let vars = env(&[
            ("X_MICROCMS_API_KEY", "legacy-key"),
            ("X_MICROCMS_API_SUB_DOMAIN", "legacy"),
            ("X_MICROCMS_API_NAME", "news"),
        ]);
        let mut config = QuireConfig::default();
        apply_env_overrides(&mut config, |k| vars.get(k).cloned()).unwrap();

        assert_eq!(config.cms.api_key.expose_secret(), "legacy-key");
        assert_eq!(config.cms.service_domain, "legacy");
        assert_eq!(config.cms.endpoint, "news");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_prefixed_env_wins_over_legacy() {
        let vars = env(&[
            ("X_MICROCMS_API_NAME", "news"),
            ("QUIRE_CMS_ENDPOINT", "blogs"),
            ("QUIRE_EXPORT_PATH_LAYOUT", "flat"),
            ("QUIRE_EXPORT_MAX_CONCURRENCY", "4"),
            ("QUIRE_EXPORT_STRICT", "true"),
        ]);
        let mut config = QuireConfig::default();
        apply_env_overrides(&mut config, |k| vars.get(k).cloned()).unwrap();

        assert_eq!(config.cms.endpoint, "blogs");
        assert_eq!(config.export.path_layout, "flat");
        assert_eq!(config.export.max_concurrency, 4);
        assert!(config.export.strict);
    }

    #[test]
    fn test_invalid_numeric_override() {
        let vars = env(&[("QUIRE_CMS_PAGE_SIZE", "lots")]);
        let mut config = QuireConfig::default();
        let result = apply_env_overrides(&mut config, |k| vars.get(k).cloned());
        assert!(matches!(result, Err(QuireError::Configuration(_))));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[cms]
service_domain = "example"
api_key = "test-key"
endpoint = "blogs"

[export]
output_dir = "out"
path_layout = "flat"
front_matter = "optional"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.cms.service_domain, "example");
        assert_eq!(config.export.output_dir, "out");
        assert_eq!(config.export.front_matter, "optional");
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[cms\nendpoint = ").unwrap();
        temp_file.flush().unwrap();

        let result = load_config(temp_file.path());
        assert!(matches!(result, Err(QuireError::Configuration(_))));
    }
}
