//! Content record model
//!
//! A [`Record`] is one item of a CMS collection, carrying only the fields the
//! export consumes. Everything else in the provider payload is ignored.

use serde::{Deserialize, Serialize};

/// A single content item as returned by the content provider
///
/// Timestamps are kept as opaque strings and written to front matter verbatim.
/// `categories` and `tags` distinguish "absent" (`None`) from "present"; an
/// empty list is treated as absent when rendering optional fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Unique identifier, used as the file stem
    pub slug: String,

    /// Document title
    pub title: String,

    /// Raw document body, written after the front matter
    pub body: String,

    /// Publication timestamp
    pub published_at: String,

    /// Last revision timestamp
    pub revised_at: String,

    /// Category names
    #[serde(default)]
    pub categories: Option<Vec<String>>,

    /// Tag names
    #[serde(default)]
    pub tags: Option<Vec<String>>,

    /// Short summary
    #[serde(default)]
    pub excerpt: Option<String>,
}

impl Record {
    /// Create a record with the required fields
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        published_at: impl Into<String>,
        revised_at: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            body: body.into(),
            published_at: published_at.into(),
            revised_at: revised_at.into(),
            categories: None,
            tags: None,
            excerpt: None,
        }
    }

    /// Set the categories
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    /// Set the tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Set the excerpt
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }
}
