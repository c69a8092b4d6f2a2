//! Bootstrap error types.

use crate::git::GitError;
use crate::hosting::HostError;
use crate::templates::TemplateError;
use thiserror::Error;

/// Errors that can occur while bootstrapping a translated repository.
///
/// Git and hosting failures are passed through unchanged.
#[derive(Debug, Error)]
pub enum InitError {
    /// A git command failed.
    #[error(transparent)]
    Git(#[from] GitError),

    /// A hosting API call failed.
    #[error(transparent)]
    Host(#[from] HostError),

    /// Description or homepage rendering failed.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Checking a local path failed.
    #[error("Failed to check '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
