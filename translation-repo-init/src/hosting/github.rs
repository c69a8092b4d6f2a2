//! [`RepoHost`] implementation on top of octocrab.

use super::{build_search_query, HostError, RepoHost, RepoSettings};
use async_trait::async_trait;
use octocrab::Octocrab;
use serde_json::json;
use tracing::debug;

/// GitHub REST API client.
#[derive(Debug, Clone)]
pub struct GitHubHost {
    octocrab: Octocrab,
}

impl GitHubHost {
    /// Wraps an authenticated client.
    #[must_use]
    pub fn new(octocrab: Octocrab) -> Self {
        Self { octocrab }
    }

    /// Builds a client authenticated with a personal access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_token(token: &str) -> Result<Self, octocrab::Error> {
        let octocrab = Octocrab::builder()
            .personal_token(token.to_string())
            .build()?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl RepoHost for GitHubHost {
    async fn count_repositories(&self, org: &str, name: &str) -> Result<u64, HostError> {
        let query = build_search_query(org, name);
        debug!(query = %query, "Searching repositories");

        let page = self
            .octocrab
            .search()
            .repositories(&query)
            .per_page(1u8)
            .send()
            .await?;

        page.total_count
            .ok_or(HostError::MissingTotalCount { query })
    }

    async fn create_org_repository(
        &self,
        org: &str,
        name: &str,
        description: &str,
    ) -> Result<(), HostError> {
        debug!(org, name, "Creating repository");

        let body = json!({
            "name": name,
            "description": description,
        });
        let _: serde_json::Value = self
            .octocrab
            .post(format!("/orgs/{org}/repos"), Some(&body))
            .await?;

        Ok(())
    }

    async fn replace_topics(
        &self,
        owner: &str,
        repo: &str,
        topics: &[String],
    ) -> Result<(), HostError> {
        debug!(owner, repo, ?topics, "Replacing topics");

        let body = json!({ "names": topics });
        let _: serde_json::Value = self
            .octocrab
            .put(format!("/repos/{owner}/{repo}/topics"), Some(&body))
            .await?;

        Ok(())
    }

    async fn update_settings(
        &self,
        owner: &str,
        repo: &str,
        settings: &RepoSettings,
    ) -> Result<(), HostError> {
        debug!(owner, repo, homepage = %settings.homepage, "Updating repository settings");

        let _: serde_json::Value = self
            .octocrab
            .patch(format!("/repos/{owner}/{repo}"), Some(settings))
            .await?;

        Ok(())
    }
}
