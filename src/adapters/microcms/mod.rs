//! microCMS integration
//!
//! - [`client`] - [`MicroCmsProvider`], the HTTP content provider
//! - [`models`] - List endpoint response shapes

pub mod client;
pub mod models;

pub use client::{MicroCmsProvider, API_KEY_HEADER};
pub use models::ListResponse;
