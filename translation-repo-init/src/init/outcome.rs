//! Bootstrap outcome types.

use serde::Serialize;

/// Which path a bootstrap run finished on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnsureOutcome {
    /// The local translated clone already existed; nothing was done.
    AlreadyPresent,

    /// The remote repository existed; metadata was applied and the local
    /// clone was synced.
    ClonedExisting,

    /// The remote repository was created and initialized from the original.
    Created,
}

impl EnsureOutcome {
    /// Returns the outcome as a string for display.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AlreadyPresent => "already present",
            Self::ClonedExisting => "cloned existing",
            Self::Created => "created",
        }
    }
}

/// What a bootstrap run would do, computed without mutating anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    /// Language code.
    pub code: String,

    /// Whether the original repository would be cloned first.
    pub clone_original: bool,

    /// Outcome the real run would produce.
    pub outcome: EnsureOutcome,
}
