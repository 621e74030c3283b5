use anyhow::Context;
use async_trait::async_trait;
use octocrab::Octocrab;

use crate::github::api::GithubToken;
use crate::github::{GithubRepoName, Label, LabelUpdate, PullRequestNumber, UpdateDirection};

/// Performs label modifications on pull requests.
/// It is behind a trait to allow easier mocking in tests.
#[async_trait]
pub trait LabelClient: Send + Sync {
    /// Add a set of labels to a PR.
    async fn add_labels(&self, pr: PullRequestNumber, labels: &[Label]) -> anyhow::Result<()>;

    /// Remove a label from a PR.
    async fn remove_label(&self, pr: PullRequestNumber, label: Label) -> anyhow::Result<()>;

    /// Apply a single label update to a PR.
    async fn update_label(&self, pr: PullRequestNumber, update: &LabelUpdate) -> anyhow::Result<()> {
        match update.direction {
            UpdateDirection::Add => self.add_labels(pr, &[update.label]).await,
            UpdateDirection::Remove => self.remove_label(pr, update.label).await,
        }
    }
}

/// Provides access to the labels of a single repository using the GitHub API.
pub struct GithubRepositoryClient {
    client: Octocrab,
    repo_name: GithubRepoName,
}

impl GithubRepositoryClient {
    /// Creates a client authenticated with `token`.
    /// `api_url` overrides the API endpoint, e.g. for GitHub Enterprise.
    pub fn new(
        token: &GithubToken,
        api_url: Option<&str>,
        repo_name: GithubRepoName,
    ) -> anyhow::Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.expose().to_string());
        if let Some(url) = api_url {
            builder = builder
                .base_uri(url)
                .with_context(|| format!("Invalid GitHub API URL {url}"))?;
        }
        let client = builder.build().context("Could not create octocrab client")?;
        Ok(Self { client, repo_name })
    }

    pub fn name(&self) -> &GithubRepoName {
        &self.repo_name
    }

    fn format_pr(&self, pr: PullRequestNumber) -> String {
        format!("{}/{}/{}", self.name().owner(), self.name().name(), pr)
    }
}

#[async_trait]
impl LabelClient for GithubRepositoryClient {
    async fn add_labels(&self, pr: PullRequestNumber, labels: &[Label]) -> anyhow::Result<()> {
        if labels.is_empty() {
            return Ok(());
        }
        let names: Vec<String> = labels.iter().map(|label| label.to_string()).collect();
        let response = self
            .client
            .issues(self.name().owner(), self.name().name())
            .add_labels(pr.0, &names)
            .await
            .with_context(|| format!("Cannot add label(s) {names:?} to {}", self.format_pr(pr)))?;
        tracing::debug!(
            "Labels of {} after addition: {:?}",
            self.format_pr(pr),
            response.iter().map(|label| &label.name).collect::<Vec<_>>()
        );
        Ok(())
    }

    /// Removing a label that is not present on the PR is reported as an error.
    async fn remove_label(&self, pr: PullRequestNumber, label: Label) -> anyhow::Result<()> {
        let response = self
            .client
            .issues(self.name().owner(), self.name().name())
            .remove_label(pr.0, label.as_str())
            .await
            .with_context(|| format!("Cannot remove label {label} from {}", self.format_pr(pr)))?;
        tracing::debug!(
            "Labels of {} after removal: {:?}",
            self.format_pr(pr),
            response.iter().map(|label| &label.name).collect::<Vec<_>>()
        );
        Ok(())
    }
}
