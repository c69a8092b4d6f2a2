//! Orchestrates bootstrapping over a list of languages.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::config::LanguageInfo;
use crate::git::{GitRunner, SystemGit};
use crate::hosting::{GitHubHost, RepoHost};
use crate::init::{Plan, RepoInitializer};
use crate::summary::{ProcessingResult, RunSummary};
use crate::update::{GitUpdater, RepoUpdater};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Initializer wired to the system git binary and GitHub.
pub type GitHubInitializer =
    RepoInitializer<Arc<SystemGit>, GitHubHost, GitUpdater<Arc<SystemGit>>>;

/// Runs [`RepoInitializer`] for every requested language.
pub struct Runner<G, H, U> {
    initializer: RepoInitializer<G, H, U>,
    dry_run: bool,
    concurrency: usize,
}

impl Runner<Arc<SystemGit>, GitHubHost, GitUpdater<Arc<SystemGit>>> {
    /// Builds a runner talking to GitHub with the configured token.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let init = config.init().clone();
        let host = GitHubHost::from_token(&init.token)?;
        let git = Arc::new(SystemGit::new());
        let updater = GitUpdater::new(Arc::clone(&git), init.clone());
        let initializer: GitHubInitializer = RepoInitializer::new(init, git, host, updater);

        Ok(Self::with_initializer(
            initializer,
            config.dry_run(),
            config.concurrency(),
        ))
    }
}

impl<G, H, U> Runner<G, H, U>
where
    G: GitRunner,
    H: RepoHost,
    U: RepoUpdater,
{
    /// Builds a runner around an existing initializer.
    ///
    /// A concurrency of 0 is raised to 1.
    pub fn with_initializer(
        initializer: RepoInitializer<G, H, U>,
        dry_run: bool,
        concurrency: usize,
    ) -> Self {
        Self {
            initializer,
            dry_run,
            concurrency: concurrency.max(1),
        }
    }

    /// Processes every language, continuing past failures.
    pub async fn run(&self, languages: &[LanguageInfo]) -> RunSummary {
        let mut summary = RunSummary::new(self.dry_run);

        if languages.is_empty() {
            warn!("No languages given");
            return summary;
        }

        info!(
            count = languages.len(),
            dry_run = self.dry_run,
            "Bootstrapping translation repositories"
        );

        let results: Vec<ProcessingResult> = stream::iter(languages)
            .map(|language| self.process_language(language))
            .buffer_unordered(self.concurrency)
            .collect()
            .await;

        for result in &results {
            summary.record_result(result);
        }

        if self.dry_run {
            print_dry_run_preview(&results, self.initializer.config());
        }

        summary
    }

    async fn process_language(&self, language: &LanguageInfo) -> ProcessingResult {
        if self.dry_run {
            return match self.initializer.plan(language).await {
                Ok(plan) => ProcessingResult::Planned { plan },
                Err(e) => {
                    error!(code = %language.code, error = %e, "Failed to plan");
                    ProcessingResult::Failed {
                        code: language.code.clone(),
                        error: e.to_string(),
                    }
                }
            };
        }

        match self.initializer.ensure_repo(language).await {
            Ok(outcome) => {
                info!(code = %language.code, outcome = outcome.as_str(), "Translated repo ready");
                ProcessingResult::Success {
                    code: language.code.clone(),
                    outcome,
                }
            }
            Err(e) => {
                error!(code = %language.code, error = %e, "Failed to bootstrap translated repo");
                ProcessingResult::Failed {
                    code: language.code.clone(),
                    error: e.to_string(),
                }
            }
        }
    }
}

fn print_dry_run_preview(results: &[ProcessingResult], config: &crate::config::InitConfig) {
    println!("\n[DRY RUN] Organization: {}", config.org);

    let mut plans: Vec<&Plan> = results
        .iter()
        .filter_map(|result| match result {
            ProcessingResult::Planned { plan } => Some(plan),
            _ => None,
        })
        .collect();
    plans.sort_by(|a, b| a.code.cmp(&b.code));

    if plans.iter().any(|plan| plan.clone_original) {
        println!(
            "  Would clone original: {}",
            config.ssh_url(&config.original_repo_name())
        );
    }

    for plan in plans {
        println!(
            "  {}: {}",
            config.repo_name(&plan.code),
            plan.outcome.as_str()
        );
    }

    println!();
}
