//! Git command error types.

use thiserror::Error;

/// Errors that can occur while running git.
#[derive(Debug, Error)]
pub enum GitError {
    /// The git binary could not be started.
    #[error("Failed to execute git {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// git exited with a non-zero status.
    #[error("git {command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },
}
