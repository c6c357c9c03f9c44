//! Console progress output
//!
//! Prints one line when a phase starts and one when it ends, matching the
//! messages users of earlier releases know.

use crate::core::progress::{Phase, ProgressSink};

/// Progress sink that prints to stdout
#[derive(Debug, Clone)]
pub struct ConsoleProgress {
    provider_label: String,
}

impl ConsoleProgress {
    /// Create a sink labelling the fetch phase with the provider name
    pub fn new(provider_label: impl Into<String>) -> Self {
        Self {
            provider_label: provider_label.into(),
        }
    }

    fn phase_text(&self, phase: Phase) -> String {
        match phase {
            Phase::Fetch => format!("Fetching {} contents...", self.provider_label),
            Phase::Write => "Writing markdown files...".to_string(),
        }
    }

    fn started_line(&self, phase: Phase) -> String {
        format!("⏳ {}", self.phase_text(phase))
    }

    fn succeeded_line(&self, phase: Phase) -> String {
        format!("✅ {} Done", self.phase_text(phase))
    }

    fn failed_line(&self, reason: &str) -> String {
        format!("❌ Something went wrong... Failed\n   Error: {reason}")
    }
}

impl ProgressSink for ConsoleProgress {
    fn phase_started(&self, phase: Phase) {
        println!("{}", self.started_line(phase));
    }

    fn phase_succeeded(&self, phase: Phase) {
        println!("{}", self.succeeded_line(phase));
    }

    fn phase_failed(&self, _phase: Phase, reason: &str) {
        println!("{}", self.failed_line(reason));
    }
}
