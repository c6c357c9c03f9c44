//! Resolved settings for an export run

use crate::config::QuireConfig;
use crate::core::render::{FrontMatterVariant, PathLayout};
use crate::domain::{QuireError, Result};
use std::path::PathBuf;
use std::str::FromStr;

/// Default page-size bound for the single provider fetch
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Default cap on concurrently running record writes
pub const DEFAULT_MAX_CONCURRENCY: usize = 16;

/// Everything the export pipeline needs, already parsed and validated
#[derive(Debug, Clone)]
pub struct ExportSettings {
    /// Collection (endpoint) to fetch
    pub collection: String,

    /// Page-size bound for the fetch
    pub page_size: usize,

    /// Directory all output paths are relative to
    pub output_root: PathBuf,

    /// Directory layout
    pub layout: PathLayout,

    /// Front-matter variant
    pub variant: FrontMatterVariant,

    /// Maximum number of records processed at once
    pub max_concurrency: usize,
}

impl ExportSettings {
    /// Create settings with default page size and concurrency
    pub fn new(
        collection: impl Into<String>,
        output_root: impl Into<PathBuf>,
        layout: PathLayout,
        variant: FrontMatterVariant,
    ) -> Self {
        Self {
            collection: collection.into(),
            page_size: DEFAULT_PAGE_SIZE,
            output_root: output_root.into(),
            layout,
            variant,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }

    /// Set the page size
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the concurrency cap
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency;
        self
    }

    /// Build settings from the loaded configuration
    pub fn from_config(config: &QuireConfig) -> Result<Self> {
        let layout = PathLayout::from_str(&config.export.path_layout)?;
        let variant = FrontMatterVariant::from_str(&config.export.front_matter)?;

        if config.export.max_concurrency == 0 {
            return Err(QuireError::Configuration(
                "export.max_concurrency must be > 0".to_string(),
            ));
        }

        Ok(Self::new(
            config.cms.endpoint.clone(),
            config.export.output_dir.clone(),
            layout,
            variant,
        )
        .with_page_size(config.cms.page_size)
        .with_max_concurrency(config.export.max_concurrency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = ExportSettings::new(
            "blogs",
            "outputs",
            PathLayout::Year,
            FrontMatterVariant::Fixed,
        );
        assert_eq!(settings.page_size, 100);
        assert_eq!(settings.max_concurrency, 16);
        assert_eq!(settings.output_root, PathBuf::from("outputs"));
    }

    #[test]
    fn test_settings_from_config() {
        let mut config = QuireConfig::default();
        config.cms.endpoint = "news".to_string();
        config.export.path_layout = "flat".to_string();
        config.export.front_matter = "optional".to_string();
        config.export.max_concurrency = 4;

        let settings = ExportSettings::from_config(&config).unwrap();
        assert_eq!(settings.collection, "news");
        assert_eq!(settings.layout, PathLayout::Flat);
        assert_eq!(settings.variant, FrontMatterVariant::Optional);
        assert_eq!(settings.max_concurrency, 4);
    }

    #[test]
    fn test_settings_from_config_invalid_layout() {
        let mut config = QuireConfig::default();
        config.export.path_layout = "monthly".to_string();
        assert!(ExportSettings::from_config(&config).is_err());
    }

    #[test]
    fn test_settings_from_config_zero_concurrency() {
        let mut config = QuireConfig::default();
        config.export.max_concurrency = 0;
        assert!(ExportSettings::from_config(&config).is_err());
    }
}
