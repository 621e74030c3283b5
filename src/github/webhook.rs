//! Parsing of the `issue_comment` event payload that triggers the label manager.
use anyhow::Context;

use crate::config::ManagerConfig;
use crate::github::{GithubRepoName, PullRequestContext};
use crate::manager::{CommentAction, CommentAuthor, CommentEvent};

#[derive(serde::Deserialize, Debug)]
struct IssueCommentPayload {
    action: String,
    issue: IssuePayload,
    comment: CommentPayload,
    #[serde(default)]
    changes: Option<ChangesPayload>,
    repository: RepositoryPayload,
}

#[derive(serde::Deserialize, Debug)]
struct IssuePayload {
    number: u64,
    #[serde(default)]
    labels: Vec<LabelPayload>,
    /// Only present when the issue is a pull request.
    #[serde(default)]
    pull_request: Option<serde_json::Value>,
}

#[derive(serde::Deserialize, Debug)]
struct LabelPayload {
    name: String,
}

#[derive(serde::Deserialize, Debug)]
struct CommentPayload {
    body: Option<String>,
    user: UserPayload,
}

#[derive(serde::Deserialize, Debug)]
struct UserPayload {
    login: String,
}

#[derive(serde::Deserialize, Debug)]
struct ChangesPayload {
    body: Option<ChangePayload>,
}

#[derive(serde::Deserialize, Debug)]
struct ChangePayload {
    from: String,
}

#[derive(serde::Deserialize, Debug)]
struct RepositoryPayload {
    name: String,
    owner: UserPayload,
}

/// A comment event on a pull request, together with the state of the pull request.
#[derive(Debug, PartialEq)]
pub struct PullRequestCommentEvent {
    pub pr: PullRequestContext,
    pub comment: CommentEvent,
}

/// Parses the JSON payload of an `issue_comment` event.
///
/// Returns `None` for events that the label manager does not react to.
pub fn parse_issue_comment_event(
    body: &[u8],
    config: &ManagerConfig,
) -> anyhow::Result<Option<PullRequestCommentEvent>> {
    let payload: IssueCommentPayload =
        serde_json::from_slice(body).context("Cannot parse issue_comment payload")?;

    // We only care about pull request comments
    if payload.issue.pull_request.is_none() {
        tracing::debug!(
            "Ignoring comment on issue #{} because it does not belong to a pull request",
            payload.issue.number
        );
        return Ok(None);
    }

    let action: CommentAction = match payload.action.parse() {
        Ok(action) => action,
        Err(error) => {
            tracing::debug!("Ignoring comment event: {error}");
            return Ok(None);
        }
    };

    let pr = PullRequestContext {
        repository: GithubRepoName::new(&payload.repository.owner.login, &payload.repository.name),
        number: payload.issue.number.into(),
        labels: payload
            .issue
            .labels
            .into_iter()
            .map(|label| label.name)
            .collect(),
    };
    let comment = CommentEvent {
        action,
        author: CommentAuthor::new(&payload.comment.user.login, config),
        before: payload
            .changes
            .and_then(|changes| changes.body)
            .map(|body| body.from),
        after: payload.comment.body.unwrap_or_default(),
    };
    Ok(Some(PullRequestCommentEvent { pr, comment }))
}
