//! Run configuration.
//!
//! Built by the `tileslide` binary from command-line flags; tests construct
//! it directly. Every field has a default that reproduces the reference
//! behavior: inferred side, best-child-only reinsertion, no trace, no report.

use std::path::PathBuf;

use tileslide_search::policy::SearchPolicy;

#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Board side length. `None` infers it from the token count.
    pub side: Option<usize>,
    pub policy: SearchPolicy,
    /// Print every iteration to stdout.
    pub trace: bool,
    /// Write a report directory after the run.
    pub report_dir: Option<PathBuf>,
}

impl RunConfig {
    /// Number of cells an arrangement must have, if the side is fixed.
    #[must_use]
    pub fn expected_len(&self) -> Option<usize> {
        self.side.map(|s| s.saturating_mul(s))
    }
}
