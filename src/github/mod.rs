//! Contains definitions of common types (repository name, pull request, labels) needed
//! for working with GitHub pull requests.
use std::fmt::{Debug, Display, Formatter};

pub mod api;
mod labels;
pub mod webhook;

pub use api::client::{GithubRepositoryClient, LabelClient};
pub use api::GithubToken;
pub use labels::{Label, LabelParseError, LabelUpdate, UpdateDirection};

/// Unique identifier of a GitHub repository
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct GithubRepoName {
    owner: String,
    name: String,
}

impl GithubRepoName {
    pub fn new(owner: &str, name: &str) -> Self {
        Self {
            owner: owner.to_lowercase(),
            name: name.to_lowercase(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for GithubRepoName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}/{}", self.owner, self.name))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PullRequestNumber(pub u64);

impl From<u64> for PullRequestNumber {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for PullRequestNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        <u64 as Display>::fmt(&self.0, f)
    }
}

/// State of the pull request at the moment the comment event was received.
#[derive(Clone, Debug, PartialEq)]
pub struct PullRequestContext {
    pub repository: GithubRepoName,
    pub number: PullRequestNumber,
    /// Names of all labels present on the PR, including ones this bot does not manage.
    pub labels: Vec<String>,
}
