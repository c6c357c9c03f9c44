//! Domain identifier types with validation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record slug newtype wrapper
///
/// The slug is used verbatim as the output file stem, so it must name a
/// single path component inside the output root.
///
/// # Examples
///
/// ```
/// use quire::domain::ids::Slug;
/// use std::str::FromStr;
///
/// let slug = Slug::from_str("hello-world").unwrap();
/// assert_eq!(slug.as_str(), "hello-world");
/// assert!(Slug::from_str("../etc").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slug(String);

impl Slug {
    /// Creates a new Slug, rejecting values that are not a single path component
    pub fn new(slug: impl Into<String>) -> Result<Self, String> {
        let slug = slug.into();
        if slug.trim().is_empty() {
            return Err("Slug cannot be empty".to_string());
        }
        if slug == "." || slug == ".." {
            return Err(format!("Slug '{slug}' is not a valid file name"));
        }
        if slug.contains(&['/', '\\', '\0'][..]) {
            return Err(format!(
                "Slug '{slug}' contains a path separator or NUL byte"
            ));
        }
        Ok(Self(slug))
    }

    /// Returns the slug as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Output file name for this slug (`<slug>.md`)
    pub fn file_name(&self) -> String {
        format!("{}.md", self.0)
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Slug {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_valid() {
        let slug = Slug::new("2023-recap").unwrap();
        assert_eq!(slug.as_str(), "2023-recap");
        assert_eq!(slug.file_name(), "2023-recap.md");
        assert_eq!(slug.to_string(), "2023-recap");
    }

    #[test]
    fn test_slug_rejects_empty() {
        assert!(Slug::new("").is_err());
        assert!(Slug::new("   ").is_err());
    }

    #[test]
    fn test_slug_rejects_traversal() {
        assert!(Slug::new(".").is_err());
        assert!(Slug::new("..").is_err());
        assert!(Slug::new("a/b").is_err());
        assert!(Slug::new("a\\b").is_err());
        assert!(Slug::new("a\0b").is_err());
    }

    #[test]
    fn test_slug_allows_dots_inside() {
        assert!(Slug::new("v1.2-release").is_ok());
        assert!(Slug::new(".hidden").is_ok());
    }
}
