//! Bootstrapping of translated repositories.
//!
//! [`RepoInitializer::ensure_repo`] makes sure the original repository is
//! cloned locally, and that the translated repository of a language exists
//! both on GitHub and on disk:
//!
//! 1. clone the original if its local copy is missing;
//! 2. stop if the local translated clone exists (it is trusted as current);
//! 3. if the remote translated repository exists, apply metadata and hand
//!    over to the [`RepoUpdater`];
//! 4. otherwise create the remote, apply metadata, clone the local original
//!    with `--no-local`, repoint `origin`, add `upstream`, and push.
//!
//! Failures are returned as they happen. Nothing is rolled back: a run that
//! created the remote but failed later is picked up by step 3 next time.

mod error;
mod locks;
mod outcome;

pub use error::InitError;
pub use locks::LanguageLocks;
pub use outcome::{EnsureOutcome, Plan};

use crate::config::{InitConfig, LanguageInfo};
use crate::git::GitRunner;
use crate::hosting::RepoHost;
use crate::metadata::setup_repo;
use crate::templates::TemplateRenderer;
use crate::update::RepoUpdater;
use std::path::Path;
use tracing::{debug, info, info_span, Instrument};

/// Creates, clones and configures translated repositories.
pub struct RepoInitializer<G, H, U> {
    config: InitConfig,
    git: G,
    host: H,
    updater: U,
    renderer: TemplateRenderer,
    locks: LanguageLocks,
}

impl<G, H, U> RepoInitializer<G, H, U>
where
    G: GitRunner,
    H: RepoHost,
    U: RepoUpdater,
{
    /// Builds an initializer from its collaborators.
    pub fn new(config: InitConfig, git: G, host: H, updater: U) -> Self {
        Self {
            config,
            git,
            host,
            updater,
            renderer: TemplateRenderer::new(),
            locks: LanguageLocks::new(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &InitConfig {
        &self.config
    }

    /// Ensures the translated repository of `language` exists remotely and locally.
    ///
    /// # Errors
    ///
    /// Returns [`InitError`] with the first git, API or filesystem failure.
    pub async fn ensure_repo(&self, language: &LanguageInfo) -> Result<EnsureOutcome, InitError> {
        let span = info_span!("ensure_repo", code = %language.code);

        async {
            self.ensure_original().await?;

            let _guard = self.locks.acquire(&language.code).await;

            let translated_path = self.config.translated_path(&language.code);
            let exists_translated = path_exists(&translated_path).await?;
            debug!(exists = exists_translated, "Local translated repo");

            if exists_translated {
                debug!("When the local repo exists, it is assumed to be up to date");
                return Ok(EnsureOutcome::AlreadyPresent);
            }

            if self.remote_exists(&language.code).await? {
                info!("Translated remote repo exists");
                setup_repo(&self.host, &self.config, &self.renderer, language).await?;
                self.updater.update(&language.code).await?;
                info!("Translated local repo ready");
                return Ok(EnsureOutcome::ClonedExisting);
            }

            info!("No translated local and remote repo: creating");
            self.create_translated(language).await?;
            info!("Translated remote repo is initialized");
            Ok(EnsureOutcome::Created)
        }
        .instrument(span)
        .await
    }

    /// Computes what [`ensure_repo`](Self::ensure_repo) would do without
    /// changing anything locally or remotely.
    ///
    /// # Errors
    ///
    /// Returns [`InitError`] if a path check or the remote search fails.
    pub async fn plan(&self, language: &LanguageInfo) -> Result<Plan, InitError> {
        let span = info_span!("plan", code = %language.code);

        async {
            let clone_original = !path_exists(&self.config.original_path()).await?;
            let translated_path = self.config.translated_path(&language.code);

            let outcome = if path_exists(&translated_path).await? {
                EnsureOutcome::AlreadyPresent
            } else if self.remote_exists(&language.code).await? {
                EnsureOutcome::ClonedExisting
            } else {
                EnsureOutcome::Created
            };

            debug!(clone_original, outcome = outcome.as_str(), "Planned");
            Ok(Plan {
                code: language.code.clone(),
                clone_original,
                outcome,
            })
        }
        .instrument(span)
        .await
    }

    /// Clones the original repository if its local copy is missing.
    async fn ensure_original(&self) -> Result<(), InitError> {
        let _guard = self.locks.acquire(&self.config.lang_main).await;

        let original_path = self.config.original_path();
        let exists_original = path_exists(&original_path).await?;
        debug!(exists = exists_original, "Local original repo");

        if !exists_original {
            info!("Cloning local original repo");
            let url = self.config.ssh_url(&self.config.original_repo_name());
            self.git
                .run(&["clone", &url], &self.config.repo_root)
                .await?;
            info!("Created local original repo");
        }

        Ok(())
    }

    /// Checks whether the translated repository exists on the host.
    async fn remote_exists(&self, code: &str) -> Result<bool, InitError> {
        debug!("Checking if remote repo exists");
        let count = self
            .host
            .count_repositories(&self.config.org, &self.config.repo_name(code))
            .await?;
        Ok(count > 0)
    }

    /// Creates the remote repository and initializes it from the local original.
    async fn create_translated(&self, language: &LanguageInfo) -> Result<(), InitError> {
        let config = &self.config;
        let repo_name = config.repo_name(&language.code);
        let original_name = config.original_repo_name();
        let translated_path = config.translated_path(&language.code);

        let description = self
            .renderer
            .render_language(&config.description_format, language)?;
        self.host
            .create_org_repository(&config.org, &repo_name, &description)
            .await?;
        info!(repo = %repo_name, "Translated remote repo created");

        setup_repo(&self.host, config, &self.renderer, language).await?;

        debug!("Cloning local translated repo");
        self.git
            .run(
                &["clone", "--no-local", &original_name, &repo_name],
                &config.repo_root,
            )
            .await?;
        info!("Created local translated repo");

        let origin = config.ssh_url(&repo_name);
        let upstream = config.ssh_url(&original_name);
        self.git
            .run(&["remote", "set-url", "origin", &origin], &translated_path)
            .await?;
        self.git
            .run(&["remote", "add", "upstream", &upstream], &translated_path)
            .await?;

        debug!(branch = %config.default_branch, "Pushing to remote");
        self.git
            .run(
                &["push", "-u", "origin", &config.default_branch],
                &translated_path,
            )
            .await?;

        Ok(())
    }
}

/// Checks whether a local path exists.
pub(crate) async fn path_exists(path: &Path) -> Result<bool, InitError> {
    tokio::fs::try_exists(path)
        .await
        .map_err(|source| InitError::Io {
            path: path.display().to_string(),
            source,
        })
}
