//! Build result types.

use std::path::PathBuf;
use std::time::Duration;

/// Outcome of a complete build run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildResult {
    /// Icon files discovered, in processing order
    pub sources: Vec<PathBuf>,
    /// Number of blocks in the stylesheet
    pub icons: usize,
    /// Stylesheet path; `None` when no icon was found. Set in dry runs too,
    /// even though nothing is written.
    pub artifact: Option<PathBuf>,
    /// Total build duration
    pub total_duration: Duration,
}

impl BuildResult {
    /// Whether a stylesheet was produced.
    pub fn has_artifact(&self) -> bool {
        self.artifact.is_some()
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.total_duration = duration;
        self
    }
}
