//! Detection of trigger phrases in comment bodies and label presence tests.
use crate::github::Label;
use crate::manager::conditions::LabelTest;
use crate::manager::event::CommentAuthor;
use crate::manager::phrase::{LabelAssociation, TriggerPhrase};

/// Finds the label requested by a comment body, if any.
pub trait AssociateLabel {
    /// Returns `None` when `text` is missing or does not request the label.
    fn associated_label(
        &self,
        text: Option<&str>,
        author: &CommentAuthor,
    ) -> Option<LabelAssociation>;
}

impl<F> AssociateLabel for F
where
    F: Fn(Option<&str>, &CommentAuthor) -> Option<LabelAssociation>,
{
    fn associated_label(
        &self,
        text: Option<&str>,
        author: &CommentAuthor,
    ) -> Option<LabelAssociation> {
        self(text, author)
    }
}

/// Which comment authors are allowed to trigger a phrase.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AuthorGate {
    /// Anyone except the automation user. Keeps the bot's own status comments, which quote
    /// the contributor phrases, from re-triggering the labels.
    Contributor,
    /// Only the automation user.
    Automation,
}

impl AuthorGate {
    pub fn admits(&self, author: &CommentAuthor) -> bool {
        match self {
            AuthorGate::Contributor => !author.is_automation(),
            AuthorGate::Automation => author.is_automation(),
        }
    }
}

/// Detects a single trigger phrase written by an admitted author.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PhraseClassifier {
    pub phrase: TriggerPhrase,
    pub gate: AuthorGate,
}

impl PhraseClassifier {
    pub const fn contributor(phrase: TriggerPhrase) -> Self {
        Self {
            phrase,
            gate: AuthorGate::Contributor,
        }
    }

    pub const fn automation(phrase: TriggerPhrase) -> Self {
        Self {
            phrase,
            gate: AuthorGate::Automation,
        }
    }
}

impl AssociateLabel for PhraseClassifier {
    fn associated_label(
        &self,
        text: Option<&str>,
        author: &CommentAuthor,
    ) -> Option<LabelAssociation> {
        let text = text?;
        if self.phrase.is_mentioned_in(text) && self.gate.admits(author) {
            Some(LabelAssociation::from(self.phrase))
        } else {
            None
        }
    }
}

/// Tests whether a label is present on the PR.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HasLabel(pub Label);

impl LabelTest for HasLabel {
    fn test(&self, labels: &[String]) -> bool {
        pull_request_has_label(labels, self.0)
    }
}

pub const REQUESTS_CLARIFICATION: HasLabel = HasLabel(Label::ClarificationRequested);
pub const REQUESTS_EXEMPTION: HasLabel = HasLabel(Label::ExemptionRequested);
pub const EXEMPTION_DENIED: HasLabel = HasLabel(Label::ExemptionDenied);
pub const CLI_INTEG_TEST_NEEDED: HasLabel = HasLabel(Label::CliIntegTestsNeeded);
pub const CLI_INTEG_TEST_COMPLETE: HasLabel = HasLabel(Label::CliIntegTested);

pub fn pull_request_has_label(labels: &[String], label: Label) -> bool {
    labels.iter().any(|name| name == label.as_str())
}
