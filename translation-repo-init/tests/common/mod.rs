//! Recording fakes of the git runner, the hosting API and the updater.

#![allow(dead_code)]

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use translation_repo_init::{
    GitError, GitRunner, HostError, InitConfig, InitError, RepoHost, RepoInitializer,
    RepoSettings, RepoUpdater,
};

/// Every collaborator call, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Git { args: String, cwd: PathBuf },
    Search { org: String, name: String },
    Create { org: String, name: String, description: String },
    Topics { repo: String, topics: Vec<String> },
    Settings { repo: String, settings: RepoSettings },
    Update { code: String },
}

pub type Log = Arc<Mutex<Vec<Call>>>;

pub fn calls(log: &Log) -> Vec<Call> {
    log.lock().unwrap().clone()
}

#[derive(Clone)]
pub struct FakeGit {
    pub log: Log,
    /// Commands starting with this prefix fail.
    pub fail_on: Option<&'static str>,
    /// Whether `clone` creates the target directory.
    pub materialize: bool,
}

#[async_trait]
impl GitRunner for FakeGit {
    async fn run(&self, args: &[&str], cwd: &Path) -> Result<String, GitError> {
        let command = args.join(" ");
        self.log.lock().unwrap().push(Call::Git {
            args: command.clone(),
            cwd: cwd.to_path_buf(),
        });

        if let Some(prefix) = self.fail_on {
            if command.starts_with(prefix) {
                return Err(GitError::CommandFailed {
                    command,
                    stderr: "fatal: simulated failure".to_string(),
                });
            }
        }

        if self.materialize && args.first() == Some(&"clone") {
            let target = match args {
                [_, "--no-local", _, destination] => destination.to_string(),
                [_, url] => url.rsplit('/').next().unwrap_or_default().to_string(),
                _ => String::new(),
            };
            std::fs::create_dir_all(cwd.join(target)).unwrap();
        }

        Ok(String::new())
    }
}

#[derive(Clone)]
pub struct FakeHost {
    pub log: Log,
    pub existing: u64,
    /// Call that fails after being logged: `search`, `create`, `topics` or `settings`.
    pub fail_on: Option<&'static str>,
}

impl FakeHost {
    fn check(&self, call: &str) -> Result<(), HostError> {
        if self.fail_on == Some(call) {
            return Err(HostError::MissingTotalCount {
                query: format!("simulated {call} failure"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl RepoHost for FakeHost {
    async fn count_repositories(&self, org: &str, name: &str) -> Result<u64, HostError> {
        self.log.lock().unwrap().push(Call::Search {
            org: org.to_string(),
            name: name.to_string(),
        });
        self.check("search")?;
        Ok(self.existing)
    }

    async fn create_org_repository(
        &self,
        org: &str,
        name: &str,
        description: &str,
    ) -> Result<(), HostError> {
        self.log.lock().unwrap().push(Call::Create {
            org: org.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        });
        self.check("create")
    }

    async fn replace_topics(
        &self,
        _owner: &str,
        repo: &str,
        topics: &[String],
    ) -> Result<(), HostError> {
        self.log.lock().unwrap().push(Call::Topics {
            repo: repo.to_string(),
            topics: topics.to_vec(),
        });
        self.check("topics")
    }

    async fn update_settings(
        &self,
        _owner: &str,
        repo: &str,
        settings: &RepoSettings,
    ) -> Result<(), HostError> {
        self.log.lock().unwrap().push(Call::Settings {
            repo: repo.to_string(),
            settings: settings.clone(),
        });
        self.check("settings")
    }
}

#[derive(Clone)]
pub struct FakeUpdater {
    pub log: Log,
}

#[async_trait]
impl RepoUpdater for FakeUpdater {
    async fn update(&self, code: &str) -> Result<(), InitError> {
        self.log.lock().unwrap().push(Call::Update {
            code: code.to_string(),
        });
        Ok(())
    }
}

pub struct Fixture {
    pub temp: TempDir,
    pub log: Log,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().unwrap(),
            log: Log::default(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn mkdir(&self, name: &str) {
        std::fs::create_dir_all(self.root().join(name)).unwrap();
    }

    pub fn initializer(
        &self,
        existing: u64,
        fail_on: Option<&'static str>,
        materialize: bool,
    ) -> RepoInitializer<FakeGit, FakeHost, FakeUpdater> {
        let host = FakeHost {
            log: self.log.clone(),
            existing,
            fail_on: None,
        };
        self.initializer_with_host(host, fail_on, materialize)
    }

    pub fn initializer_with_host(
        &self,
        host: FakeHost,
        fail_on: Option<&'static str>,
        materialize: bool,
    ) -> RepoInitializer<FakeGit, FakeHost, FakeUpdater> {
        let config = InitConfig::new(
            self.root(),
            "javascript-tutorial",
            "en",
            "javascript.info",
            "token",
        );
        RepoInitializer::new(
            config,
            FakeGit {
                log: self.log.clone(),
                fail_on,
                materialize,
            },
            host,
            FakeUpdater {
                log: self.log.clone(),
            },
        )
    }
}
