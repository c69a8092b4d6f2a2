#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod git;
pub mod hosting;
pub mod init;
pub mod metadata;
pub mod runner;
pub mod summary;
pub mod templates;
pub mod update;

pub use config::{
    load_languages, validate_language, ConfigError, InitConfig, LanguageInfo, Published, TOKEN_ENV,
};
pub use git::{remote_names, GitError, GitRunner, SystemGit};
pub use hosting::{build_search_query, GitHubHost, HostError, RepoHost, RepoSettings};
pub use init::{EnsureOutcome, InitError, LanguageLocks, Plan, RepoInitializer};
pub use metadata::{repo_topics, select_homepage, setup_repo, topic_slug};
pub use runner::{GitHubInitializer, Runner, RunnerConfig, RunnerError};
pub use summary::{ProcessingResult, RunSummary};
pub use templates::{create_handlebars_registry, TemplateError, TemplateRenderer};
pub use update::{GitUpdater, RepoUpdater};
