//! Run summary types.

use super::result::ProcessingResult;
use crate::init::EnsureOutcome;

/// Summary of a complete run.
///
/// In dry-run mode the outcome counters hold what would have happened.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of languages processed.
    pub languages_processed: usize,

    /// Number of translations whose local clone already existed.
    pub already_present: usize,

    /// Number of translations whose remote existed and were synced locally.
    pub cloned_existing: usize,

    /// Number of translations created from scratch.
    pub created: usize,

    /// Number of languages that failed.
    pub failed: usize,

    /// Number of languages whose run would clone the original first.
    pub original_clones: usize,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with a processing result.
    pub fn record_result(&mut self, result: &ProcessingResult) {
        self.languages_processed += 1;
        match result {
            ProcessingResult::Success { outcome, .. } => self.record_outcome(*outcome),
            ProcessingResult::Planned { plan } => {
                if plan.clone_original {
                    self.original_clones += 1;
                }
                self.record_outcome(plan.outcome);
            }
            ProcessingResult::Failed { .. } => self.failed += 1,
        }
    }

    fn record_outcome(&mut self, outcome: EnsureOutcome) {
        match outcome {
            EnsureOutcome::AlreadyPresent => self.already_present += 1,
            EnsureOutcome::ClonedExisting => self.cloned_existing += 1,
            EnsureOutcome::Created => self.created += 1,
        }
    }

    /// Returns true if any language failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Returns true if every language succeeded.
    #[must_use]
    pub fn all_success(&self) -> bool {
        self.failed == 0
    }
}
