//! Progress reporting hooks
//!
//! The export pipeline notifies a [`ProgressSink`] of phase transitions and of
//! each finished record. Sinks only observe; they cannot change the outcome.

use crate::core::export::outcome::RecordReport;
use std::fmt;

/// Phases of an export run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fetching records from the content provider
    Fetch,
    /// Rendering and writing files
    Write,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch => write!(f, "fetch"),
            Self::Write => write!(f, "write"),
        }
    }
}

/// Receiver of progress notifications
pub trait ProgressSink: Send + Sync {
    /// A phase has started
    fn phase_started(&self, phase: Phase);

    /// A phase finished
    fn phase_succeeded(&self, phase: Phase);

    /// A phase failed; the run is aborted
    fn phase_failed(&self, phase: Phase, reason: &str);

    /// A record finished with the given outcome
    fn record_finished(&self, _report: &RecordReport) {}
}

/// Sink that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgress;

impl ProgressSink for NoopProgress {
    fn phase_started(&self, _phase: Phase) {}

    fn phase_succeeded(&self, _phase: Phase) {}

    fn phase_failed(&self, _phase: Phase, _reason: &str) {}
}
