//! Runner configuration.

use crate::config::InitConfig;

/// Configuration for a bootstrap run over several languages.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Repository settings shared by every language.
    init: InitConfig,
    /// Whether to only report what would happen.
    dry_run: bool,
    /// Maximum number of languages processed at once; the runner treats 0 as 1.
    concurrency: usize,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(init: InitConfig, dry_run: bool, concurrency: usize) -> Self {
        Self {
            init,
            dry_run,
            concurrency,
        }
    }

    /// Returns the repository settings.
    pub fn init(&self) -> &InitConfig {
        &self.init
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the max number of languages processed at once.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }
}
