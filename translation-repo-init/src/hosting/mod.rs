//! Repository-hosting API.
//!
//! [`RepoHost`] is the seam between the bootstrap flow and GitHub; the
//! production implementation is [`GitHubHost`].

mod error;
mod github;

pub use error::HostError;
pub use github::GitHubHost;

use async_trait::async_trait;
use serde::Serialize;

/// Repository settings applied on every metadata update.
///
/// Serialized as the body of `PATCH /repos/{owner}/{repo}`. Every field is
/// sent, so the update overwrites whatever the repository had before.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoSettings {
    /// Repository name (unchanged, GitHub requires it in older API versions).
    pub name: String,
    /// Whether the projects tab is enabled.
    pub has_projects: bool,
    /// Whether the wiki is enabled.
    pub has_wiki: bool,
    /// Homepage URL.
    pub homepage: String,
    /// Whether merge commits are allowed.
    pub allow_merge_commit: bool,
    /// Whether squash merging is allowed.
    pub allow_squash_merge: bool,
    /// Whether rebase merging is allowed.
    pub allow_rebase_merge: bool,
}

impl RepoSettings {
    /// Settings for a translated repository: no projects or wiki, merge commits only.
    #[must_use]
    pub fn translation(name: impl Into<String>, homepage: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            has_projects: false,
            has_wiki: false,
            homepage: homepage.into(),
            allow_merge_commit: true,
            allow_squash_merge: false,
            allow_rebase_merge: false,
        }
    }
}

/// Operations the bootstrap flow needs from the repository host.
#[async_trait]
pub trait RepoHost: Send + Sync {
    /// Counts repositories in `org` matching `name`.
    async fn count_repositories(&self, org: &str, name: &str) -> Result<u64, HostError>;

    /// Creates a repository in `org`.
    async fn create_org_repository(
        &self,
        org: &str,
        name: &str,
        description: &str,
    ) -> Result<(), HostError>;

    /// Replaces the full topic set of a repository.
    async fn replace_topics(
        &self,
        owner: &str,
        repo: &str,
        topics: &[String],
    ) -> Result<(), HostError>;

    /// Overwrites repository settings.
    async fn update_settings(
        &self,
        owner: &str,
        repo: &str,
        settings: &RepoSettings,
    ) -> Result<(), HostError>;
}

/// Builds the repository search query.
///
/// Format: `org:{org} "{name}"`
#[must_use]
pub fn build_search_query(org: &str, name: &str) -> String {
    format!("org:{org} \"{name}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_search_query() {
        let query = build_search_query("javascript-tutorial", "ru.javascript.info");
        assert_eq!(query, "org:javascript-tutorial \"ru.javascript.info\"");
    }

    #[test]
    fn translation_settings_allow_only_merge_commits() {
        let settings = RepoSettings::translation("ru.javascript.info", "https://ru.javascript.info");

        assert!(!settings.has_projects);
        assert!(!settings.has_wiki);
        assert!(settings.allow_merge_commit);
        assert!(!settings.allow_squash_merge);
        assert!(!settings.allow_rebase_merge);
    }

    #[test]
    fn settings_serialize_every_field() {
        let settings = RepoSettings::translation("ru.javascript.info", "https://javascript.info");
        let body = serde_json::to_value(&settings).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "name": "ru.javascript.info",
                "has_projects": false,
                "has_wiki": false,
                "homepage": "https://javascript.info",
                "allow_merge_commit": true,
                "allow_squash_merge": false,
                "allow_rebase_merge": false
            })
        );
    }
}
