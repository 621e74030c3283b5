use itertools::Itertools;

use crate::github::{LabelClient, LabelUpdate, PullRequestContext, UpdateDirection};
use crate::manager::classifier::AssociateLabel;
use crate::manager::conditions::{ConditionsResult, LabelTest, LabelUpdateConditions};
use crate::manager::event::CommentEvent;

/// Messages describing what happened to a single label.
/// Empty when the comment does not mention the label at all.
#[derive(Debug, Default, PartialEq)]
pub struct AssessmentOutcome {
    messages: Vec<String>,
}

impl AssessmentOutcome {
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    fn push(&mut self, message: String) {
        self.messages.push(message);
    }
}

impl From<Vec<String>> for AssessmentOutcome {
    fn from(messages: Vec<String>) -> Self {
        Self { messages }
    }
}

/// Decides whether a comment event should update a label on the PR and performs the update.
pub struct UpdateAssessor<'a, Client: LabelClient> {
    client: &'a Client,
    pr: &'a PullRequestContext,
    comment: &'a CommentEvent,
}

impl<'a, Client: LabelClient> UpdateAssessor<'a, Client> {
    pub fn new(client: &'a Client, pr: &'a PullRequestContext, comment: &'a CommentEvent) -> Self {
        Self {
            client,
            pr,
            comment,
        }
    }

    pub fn pr(&self) -> &PullRequestContext {
        self.pr
    }

    /// Tries to update the label found by `classifier`, if `conditions` allow it.
    ///
    /// Errors of the label client are returned as they are.
    pub async fn assess<C, T>(
        &self,
        classifier: &C,
        conditions: &LabelUpdateConditions<T>,
    ) -> anyhow::Result<AssessmentOutcome>
    where
        C: AssociateLabel + ?Sized,
        T: LabelTest,
    {
        let mut outcome = AssessmentOutcome::default();
        let Some(update) = self.find_label_update(classifier, &mut outcome) else {
            return Ok(outcome);
        };

        let result =
            ConditionsResult::evaluate(conditions.for_direction(update.direction), &self.pr.labels);
        if !result.all_conditions_met {
            tracing::debug!(
                "Conditions for {update:?} on PR {} not met: {:?}",
                self.pr.number,
                result.conditions_not_met
            );
            outcome.push(format!(
                "Label '{}' not {} because {}",
                update.label,
                update.direction.past_tense(),
                result.conditions_not_met.iter().join(", ")
            ));
            return Ok(outcome);
        }

        tracing::info!(
            "Label '{}' will be {} on PR {}",
            update.label,
            update.direction.past_tense(),
            self.pr.number
        );
        self.client.update_label(self.pr.number, &update).await?;
        outcome.push(format!(
            "Label '{}' {}",
            update.label,
            update.direction.past_tense()
        ));
        Ok(outcome)
    }

    /// The comment body before an edit can only withdraw a label request, the body after the
    /// action requests an update in the direction of the action. An edit that both withdraws
    /// and requests the same label is ambiguous and yields no update.
    fn find_label_update<C: AssociateLabel + ?Sized>(
        &self,
        classifier: &C,
        outcome: &mut AssessmentOutcome,
    ) -> Option<LabelUpdate> {
        let mut candidates = Vec::with_capacity(2);
        candidates.extend(self.candidate_update(
            classifier,
            self.comment.before.as_deref(),
            UpdateDirection::Remove,
            outcome,
        ));
        candidates.extend(self.candidate_update(
            classifier,
            Some(self.comment.after.as_str()),
            self.comment.action.update_direction(),
            outcome,
        ));

        match candidates.as_slice() {
            [] => None,
            [update] => Some(*update),
            [first, ..] => {
                tracing::debug!("Edit both removed and added {:?}", first.label);
                outcome.messages.pop();
                outcome.push(format!(
                    "No action taken from comment edit for label '{}'",
                    first.label
                ));
                None
            }
        }
    }

    fn candidate_update<C: AssociateLabel + ?Sized>(
        &self,
        classifier: &C,
        text: Option<&str>,
        direction: UpdateDirection,
        outcome: &mut AssessmentOutcome,
    ) -> Option<LabelUpdate> {
        let association = classifier.associated_label(text, &self.comment.author)?;
        outcome.push(format!(
            "Comment {} with {}",
            self.comment.action, association.phrase
        ));
        Some(LabelUpdate {
            label: association.label,
            direction,
        })
    }
}
