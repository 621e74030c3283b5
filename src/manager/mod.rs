//! Decides which labels to add to or remove from a PR based on a comment event.
use crate::github::{LabelClient, PullRequestContext};

pub mod assessor;
pub mod catalog;
pub mod classifier;
pub mod collector;
pub mod conditions;
pub mod event;
pub mod phrase;

pub use assessor::{AssessmentOutcome, UpdateAssessor};
pub use catalog::{LabelCatalog, LabelRules};
pub use collector::{UpdateCollector, NO_ACTIONS};
pub use event::{CommentAction, CommentAuthor, CommentEvent, EventParseError};
pub use phrase::{LabelAssociation, TriggerPhrase};

/// Adds and removes labels of `pr` based on the content of `comment`.
///
/// Returns the collector so that the caller can print the summary. When the label client
/// fails, the remaining rules are skipped and the error is returned.
pub async fn manage_labels<'a, Client: LabelClient>(
    client: &'a Client,
    pr: &'a PullRequestContext,
    comment: &'a CommentEvent,
    catalog: &LabelCatalog,
) -> anyhow::Result<UpdateCollector<'a, Client>> {
    tracing::debug!(
        "Managing labels of {}#{} for comment {} by {}",
        pr.repository,
        pr.number,
        comment.action,
        comment.author.login()
    );
    let mut collector = UpdateCollector::new(UpdateAssessor::new(client, pr, comment));
    collector.collect_all(catalog).await?;
    Ok(collector)
}
