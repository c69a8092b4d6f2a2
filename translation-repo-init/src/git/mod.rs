//! Version-control command runner.
//!
//! Every git invocation in the crate goes through [`GitRunner`], so the
//! orchestration can be exercised against a recording runner in tests.

mod error;
mod system;

pub use error::GitError;
pub use system::SystemGit;

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

/// Executes git commands against a working directory.
#[async_trait]
pub trait GitRunner: Send + Sync {
    /// Runs `git <args>` in `cwd` and returns its standard output.
    ///
    /// # Errors
    ///
    /// Returns [`GitError`] if git cannot be started or exits non-zero.
    async fn run(&self, args: &[&str], cwd: &Path) -> Result<String, GitError>;
}

#[async_trait]
impl<T: GitRunner + ?Sized> GitRunner for Arc<T> {
    async fn run(&self, args: &[&str], cwd: &Path) -> Result<String, GitError> {
        (**self).run(args, cwd).await
    }
}

/// Lists the remotes configured in a repository.
///
/// # Errors
///
/// Returns [`GitError`] if `git remote` fails.
pub async fn remote_names<G: GitRunner + ?Sized>(
    git: &G,
    repo_path: &Path,
) -> Result<Vec<String>, GitError> {
    let output = git.run(&["remote"], repo_path).await?;
    Ok(parse_remote_names(&output))
}

fn parse_remote_names(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
