//! External system integrations for Quire.
//!
//! - [`provider`] - The [`ContentProvider`](provider::ContentProvider) trait
//! - [`microcms`] - microCMS implementation
//!
//! The export pipeline only sees the trait, so tests substitute in-memory
//! providers and other headless CMSs can be added beside microCMS.
//!
//! ```rust,no_run
//! use quire::adapters::microcms::MicroCmsProvider;
//! use quire::config::{secret_string, CmsConfig};
//!
//! # fn example() -> quire::domain::Result<()> {
//! let config = CmsConfig {
//!     service_domain: "my-service".to_string(),
//!     api_key: secret_string("api-key".to_string()),
//!     endpoint: "blogs".to_string(),
//!     ..Default::default()
//! };
//!
//! let provider = MicroCmsProvider::new(config)?;
//! # Ok(())
//! # }
//! ```

pub mod microcms;
pub mod provider;
