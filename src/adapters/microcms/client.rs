//! microCMS content provider
//!
//! Fetches one page of a list endpoint. Authentication is the
//! `X-MICROCMS-API-KEY` header; the key never appears in logs.

use super::models::{ErrorResponse, ListResponse};
use crate::adapters::provider::{ContentProvider, FetchedPage};
use crate::config::CmsConfig;
use crate::domain::{ProviderError, QuireError, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use secrecy::ExposeSecret;
use std::time::Duration;
use url::Url;

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-MICROCMS-API-KEY";

/// microCMS provider implementation
///
/// # Example
///
/// ```no_run
/// use quire::adapters::microcms::MicroCmsProvider;
/// use quire::adapters::provider::ContentProvider;
/// use quire::config::CmsConfig;
///
/// # async fn example(config: CmsConfig) -> quire::domain::Result<()> {
/// let provider = MicroCmsProvider::new(config)?;
/// let page = provider.fetch_records("blogs", 100).await?;
/// # Ok(())
/// # }
/// ```
pub struct MicroCmsProvider {
    /// Base URL, e.g. `https://my-service.microcms.io`
    base_url: Url,

    /// HTTP client for making requests
    client: Client,

    /// CMS configuration
    config: CmsConfig,
}

impl MicroCmsProvider {
    /// Create a new microCMS provider
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base URL is invalid or the HTTP
    /// client cannot be built.
    pub fn new(config: CmsConfig) -> Result<Self> {
        let base = config.resolved_base_url();
        let base_url = Url::parse(&base).map_err(|e| {
            QuireError::Configuration(format!("Invalid CMS base URL '{base}': {e}"))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(QuireError::Configuration(format!(
                "CMS base URL '{base}' cannot be used as a base"
            )));
        }

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| QuireError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url,
            client,
            config,
        })
    }

    /// Build `{base}/api/v1/{collection}?limit={limit}`
    fn list_url(&self, collection: &str, limit: usize) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                QuireError::Configuration(format!(
                    "CMS base URL '{}' cannot be used as a base",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["api", "v1", collection]);
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());
        Ok(url)
    }
}

/// Map a non-success status and its body to a provider error
fn status_error(status: StatusCode, body: &str) -> ProviderError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| body.to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            ProviderError::AuthenticationFailed(format!("status {status}: {message}"))
        }
        s if s.is_client_error() => ProviderError::ClientError {
            status: s.as_u16(),
            message,
        },
        s if s.is_server_error() => ProviderError::ServerError {
            status: s.as_u16(),
            message,
        },
        s => ProviderError::InvalidResponse(format!("unexpected status {s}: {message}")),
    }
}

fn transport_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout(err.to_string())
    } else {
        ProviderError::ConnectionFailed(err.to_string())
    }
}

#[async_trait]
impl ContentProvider for MicroCmsProvider {
    async fn fetch_records(&self, collection: &str, limit: usize) -> Result<FetchedPage> {
        let url = self.list_url(collection, limit)?;

        tracing::info!(url = %url, "Fetching contents from microCMS");

        let resp = self
            .client
            .get(url)
            .header(API_KEY_HEADER, self.config.api_key.expose_secret().as_str())
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        let body = resp.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(status_error(status, &body).into());
        }

        let response: ListResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        tracing::debug!(
            count = response.contents.len(),
            total_count = ?response.total_count,
            offset = ?response.offset,
            limit = ?response.limit,
            "microCMS list response received"
        );

        Ok(response.into())
    }

    fn name(&self) -> &str {
        "microcms"
    }
}
