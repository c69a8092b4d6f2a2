//! Syncing an existing translated repository.
//!
//! When the remote translated repository already exists, bootstrapping hands
//! over to a [`RepoUpdater`] to get the local clone in place and up to date.

use crate::config::InitConfig;
use crate::git::{remote_names, GitRunner};
use crate::init::{path_exists, InitError};
use async_trait::async_trait;
use tracing::{debug, info, info_span, Instrument};

/// Brings the local clone of a translated repository in sync with its remotes.
#[async_trait]
pub trait RepoUpdater: Send + Sync {
    /// Updates the translated repository of `code`.
    ///
    /// # Errors
    ///
    /// Returns [`InitError`] if checking the local clone or a git command fails.
    async fn update(&self, code: &str) -> Result<(), InitError>;
}

/// [`RepoUpdater`] that clones the translated repository if needed, makes sure
/// it has an `upstream` remote pointing at the original, and fetches it.
pub struct GitUpdater<G> {
    git: G,
    config: InitConfig,
}

impl<G: GitRunner> GitUpdater<G> {
    /// Creates an updater.
    pub fn new(git: G, config: InitConfig) -> Self {
        Self { git, config }
    }
}

#[async_trait]
impl<G: GitRunner> RepoUpdater for GitUpdater<G> {
    async fn update(&self, code: &str) -> Result<(), InitError> {
        let repo_name = self.config.repo_name(code);
        let span = info_span!("update_repo", repo = %repo_name);

        async {
            let translated_path = self.config.translated_path(code);

            if !path_exists(&translated_path).await? {
                info!("Cloning translated repo");
                let url = self.config.ssh_url(&repo_name);
                self.git
                    .run(&["clone", &url], &self.config.repo_root)
                    .await?;
            }

            let remotes = remote_names(&self.git, &translated_path).await?;
            if !remotes.iter().any(|remote| remote == "upstream") {
                debug!("Adding upstream remote");
                let upstream = self.config.ssh_url(&self.config.original_repo_name());
                self.git
                    .run(&["remote", "add", "upstream", &upstream], &translated_path)
                    .await?;
            }

            self.git.run(&["fetch", "upstream"], &translated_path).await?;

            info!("Translated repo updated");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
