//! Content provider trait definition
//!
//! A content provider is the remote source of records. The export needs a
//! single operation from it: fetch the records of a named collection, bounded
//! by a page size. Implementations hide transport and authentication details.

use crate::domain::{Record, Result};
use async_trait::async_trait;

/// One page of records fetched from a provider
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedPage {
    /// Records in provider order
    pub records: Vec<Record>,

    /// Total number of records in the collection, when the provider reports it
    pub total_count: Option<usize>,
}

impl FetchedPage {
    /// Create a page without a reported total
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            total_count: None,
        }
    }

    /// Set the reported total
    pub fn with_total_count(mut self, total_count: usize) -> Self {
        self.total_count = Some(total_count);
        self
    }
}

/// Trait for content provider implementations
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
/// println!("Fetched {} records", page.records.len());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Fetch up to `limit` records of `collection`
    ///
    /// # Errors
    ///
    /// Any network, authentication, or payload problem fails the whole fetch.
    async fn fetch_records(&self, collection: &str, limit: usize) -> Result<FetchedPage>;

    /// Human-readable provider name, for logs
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetched_page_builder() {
        let page = FetchedPage::new(vec![Record::new("a", "A", "", "p", "r")]).with_total_count(7);
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.total_count, Some(7));
    }

    #[test]
    fn test_fetched_page_default_is_empty() {
        let page = FetchedPage::default();
        assert!(page.records.is_empty());
        assert!(page.total_count.is_none());
    }
}
