//! [`GitRunner`] backed by the system `git` binary.

use super::{GitError, GitRunner};
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Runs git commands through [`tokio::process::Command`].
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: String,
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemGit {
    /// Uses `git` from `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Uses a specific git executable.
    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl GitRunner for SystemGit {
    async fn run(&self, args: &[&str], cwd: &Path) -> Result<String, GitError> {
        let command = args.join(" ");
        debug!(command = %command, cwd = %cwd.display(), "Running git");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(cwd)
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| GitError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitError::CommandFailed {
                command,
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_binary_reports_spawn_error() {
        let temp = TempDir::new().unwrap();
        let git = SystemGit::with_program("definitely-not-a-git-binary");

        let result = git.run(&["status"], temp.path()).await;

        assert!(matches!(result, Err(GitError::Spawn { .. })));
    }

    #[tokio::test]
    async fn failing_command_reports_stderr() {
        let temp = TempDir::new().unwrap();
        let git = SystemGit::new();

        match git.run(&["no-such-subcommand", "--flag"], temp.path()).await {
            Err(GitError::CommandFailed { command, stderr }) => {
                assert_eq!(command, "no-such-subcommand --flag");
                assert!(!stderr.is_empty());
            }
            // No git installed on this machine.
            Err(GitError::Spawn { .. }) => {}
            Ok(output) => panic!("expected failure, got {output:?}"),
        }
    }
}
