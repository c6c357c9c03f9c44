//! Record rendering
//!
//! Turns a [`Record`] into the relative path and contents of its Markdown file.
//! Two independent choices drive the result:
//!
//! - **Path layout**: `flat` (`<slug>.md`) or `year` (`<year>/<slug>.md`)
//! - **Front-matter variant**: `fixed` (every field, always) or `optional`
//!   (absent or empty fields omitted, lists bracketed)
//!
//! Both are pure functions of the record, so the same record always renders to
//! byte-identical output.

pub mod front_matter;
pub mod path;

pub use front_matter::{render_document, render_front_matter};
pub use path::{derive_relative_path, parse_published_year};

use crate::domain::{QuireError, Record, Result};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Directory layout of exported files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathLayout {
    /// All files directly under the output root
    Flat,
    /// One subdirectory per publication year
    Year,
}

impl FromStr for PathLayout {
    type Err = QuireError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "flat" => Ok(Self::Flat),
            "year" | "year-partitioned" => Ok(Self::Year),
            _ => Err(QuireError::Configuration(format!(
                "Invalid path layout: {s}. Expected 'flat' or 'year'"
            ))),
        }
    }
}

impl fmt::Display for PathLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat => write!(f, "flat"),
            Self::Year => write!(f, "year"),
        }
    }
}

/// Front-matter field emission rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontMatterVariant {
    /// title, categories, tags, publishedAt, revisedAt; always emitted
    Fixed,
    /// title, excerpt?, categories?, tags?, publishedAt, revisedAt
    Optional,
}

impl FromStr for FrontMatterVariant {
    type Err = QuireError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "fixed" | "fixed-field" => Ok(Self::Fixed),
            "optional" | "optional-field" => Ok(Self::Optional),
            _ => Err(QuireError::Configuration(format!(
                "Invalid front matter variant: {s}. Expected 'fixed' or 'optional'"
            ))),
        }
    }
}

impl fmt::Display for FrontMatterVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => write!(f, "fixed"),
            Self::Optional => write!(f, "optional"),
        }
    }
}

/// A rendered record, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// Path relative to the output root
    pub relative_path: PathBuf,

    /// Full file contents
    pub contents: String,
}

/// Render a record into its relative path and file contents
///
/// # Errors
///
/// Fails with [`QuireError::PathDerivation`] when no path can be derived for
/// the record (see [`derive_relative_path`]).
///
/// # Examples
///
/// ```
/// use quire::core::render::{render_record, FrontMatterVariant, PathLayout};
/// use quire::domain::Record;
///
/// let record = Record::new("hello", "Hi", "World", "2023-01-02T00:00:00Z", "2023-01-03T00:00:00Z");
/// let doc = render_record(&record, PathLayout::Flat, FrontMatterVariant::Optional).unwrap();
/// assert!(doc.contents.starts_with("---\ntitle: Hi\n"));
/// ```
pub fn render_record(
    record: &Record,
    layout: PathLayout,
    variant: FrontMatterVariant,
) -> Result<RenderedDocument> {
    let relative_path = derive_relative_path(record, layout)?;
    let contents = render_document(record, variant);
    Ok(RenderedDocument {
        relative_path,
        contents,
    })
}
