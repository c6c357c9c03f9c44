//! Output path derivation
//!
//! Maps a record to its path relative to the output root. The mapping is a
//! pure function of the record and the layout, so re-running an export always
//! targets the same files.

use super::PathLayout;
use crate::domain::{QuireError, Record, Result, Slug};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use std::path::PathBuf;

/// Derive the output path of a record relative to the output root
///
/// - [`PathLayout::Flat`]: `<slug>.md`
/// - [`PathLayout::Year`]: `<year>/<slug>.md`, year taken from `publishedAt` in UTC
///
/// # Errors
///
/// Returns [`QuireError::PathDerivation`] if the slug is not a single path
/// component, or if the layout needs a year and `publishedAt` does not parse.
///
/// # Examples
///
/// ```
/// use quire::core::render::{derive_relative_path, PathLayout};
/// use quire::domain::Record;
/// use std::path::Path;
///
/// let record = Record::new("hello", "Hi", "World", "2022-07-01T00:00:00Z", "2022-07-02T00:00:00Z");
/// let path = derive_relative_path(&record, PathLayout::Year).unwrap();
/// assert_eq!(path, Path::new("2022").join("hello.md"));
/// ```
pub fn derive_relative_path(record: &Record, layout: PathLayout) -> Result<PathBuf> {
    let slug = Slug::new(record.slug.as_str())
        .map_err(|e| QuireError::PathDerivation(format!("invalid slug: {e}")))?;

    match layout {
        PathLayout::Flat => Ok(PathBuf::from(slug.file_name())),
        PathLayout::Year => {
            let year = parse_published_year(&record.published_at)?;
            Ok(PathBuf::from(format!("{year:04}")).join(slug.file_name()))
        }
    }
}

/// Extract the UTC calendar year from a publication timestamp
///
/// Accepts ISO-8601 timestamps with seconds or minute precision, with or
/// without fractional seconds and with any offset or `Z`. Values without an
/// offset are taken as UTC. Reduced-precision dates (`YYYY-MM-DD`, `YYYY-MM`,
/// `YYYY`) are accepted as well.
pub fn parse_published_year(value: &str) -> Result<i32> {
    let trimmed = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc).year());
    }

    // `%#z` wants a numeric offset
    let with_offset = match trimmed.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{rest}+00:00"),
        None => trimmed.to_string(),
    };
    if let Ok(dt) = DateTime::parse_from_str(&with_offset, "%Y-%m-%dT%H:%M%#z") {
        return Ok(dt.with_timezone(&Utc).year());
    }

    for format in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc().year());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.year());
    }

    if let Some(year) = parse_reduced_precision(trimmed) {
        return Ok(year);
    }

    Err(QuireError::PathDerivation(format!(
        "unparsable publishedAt timestamp '{value}'"
    )))
}

/// `YYYY-MM` or `YYYY`
fn parse_reduced_precision(value: &str) -> Option<i32> {
    let padded = match value.len() {
        4 => format!("{value}-01-01"),
        7 => format!("{value}-01"),
        _ => return None,
    };
    NaiveDate::parse_from_str(&padded, "%Y-%m-%d")
        .ok()
        .map(|date| date.year())
}
