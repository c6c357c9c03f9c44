//! Per-record export outcomes

use std::fmt;
use std::path::PathBuf;

/// Why a record was not written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// A file already exists at the derived path
    AlreadyExists,
}

/// Outcome of exporting a single record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The file was created
    Written,
    /// Nothing was written; this is the idempotency guard, not an error
    Skipped(SkipReason),
    /// Path derivation or I/O failed for this record only
    Failed(String),
}

impl fmt::Display for ExportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Written => write!(f, "written"),
            Self::Skipped(SkipReason::AlreadyExists) => write!(f, "skipped (already exists)"),
            Self::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

/// Outcome of one record together with what identifies it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordReport {
    /// Slug of the record
    pub slug: String,

    /// Target path, if one could be derived
    pub path: Option<PathBuf>,

    /// What happened
    pub outcome: ExportOutcome,
}

impl RecordReport {
    /// Create a new record report
    pub fn new(slug: impl Into<String>, path: Option<PathBuf>, outcome: ExportOutcome) -> Self {
        Self {
            slug: slug.into(),
            path,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display() {
        assert_eq!(ExportOutcome::Written.to_string(), "written");
        assert_eq!(
            ExportOutcome::Skipped(SkipReason::AlreadyExists).to_string(),
            "skipped (already exists)"
        );
        assert_eq!(
            ExportOutcome::Failed("disk full".to_string()).to_string(),
            "failed: disk full"
        );
    }
}
