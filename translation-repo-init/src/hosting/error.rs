//! Hosting API error types.

use thiserror::Error;

/// Errors that can occur while talking to the repository host.
#[derive(Debug, Error)]
pub enum HostError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// Search response did not report a result count.
    #[error("Repository search for '{query}' returned no total count")]
    MissingTotalCount { query: String },
}
