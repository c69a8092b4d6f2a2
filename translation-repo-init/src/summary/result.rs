//! Processing result types.

use crate::init::{EnsureOutcome, Plan};

/// Result of processing a single language.
#[derive(Debug, Clone)]
pub enum ProcessingResult {
    /// The translated repository is in place.
    Success {
        /// Language code.
        code: String,
        /// Which path the run finished on.
        outcome: EnsureOutcome,
    },

    /// Dry run: what would have happened.
    Planned {
        /// The computed plan.
        plan: Plan,
    },

    /// Processing failed.
    Failed {
        /// Language code.
        code: String,
        /// Error message.
        error: String,
    },
}
