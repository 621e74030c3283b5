use std::fmt::{Display, Formatter};

use crate::github::Label;
use crate::utils::text::contains_ignore_case;

/// Text in PR comments that requests a label update.
///
/// The PR linter instructs contributors to use these phrases. The CLI phrase is only ever
/// written by the linter itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TriggerPhrase {
    ClarificationRequested,
    ExemptionRequested,
    CliIntegTestsNeeded,
}

impl TriggerPhrase {
    pub const ALL: [TriggerPhrase; 3] = [
        TriggerPhrase::ClarificationRequested,
        TriggerPhrase::ExemptionRequested,
        TriggerPhrase::CliIntegTestsNeeded,
    ];

    /// The literal text searched for in comment bodies.
    pub fn text(&self) -> &'static str {
        match self {
            TriggerPhrase::ClarificationRequested => "clarification request",
            TriggerPhrase::ExemptionRequested => "exemption request",
            TriggerPhrase::CliIntegTestsNeeded => {
                "CLI code has changed. A maintainer must run the code through the testing pipeline"
            }
        }
    }

    /// The label requested by this phrase.
    pub fn label(&self) -> Label {
        match self {
            TriggerPhrase::ClarificationRequested => Label::ClarificationRequested,
            TriggerPhrase::ExemptionRequested => Label::ExemptionRequested,
            TriggerPhrase::CliIntegTestsNeeded => Label::CliIntegTestsNeeded,
        }
    }

    /// The phrase requesting `label`, if the label can be requested from a comment at all.
    pub fn from_label(label: Label) -> Option<TriggerPhrase> {
        match label {
            Label::ClarificationRequested => Some(TriggerPhrase::ClarificationRequested),
            Label::ExemptionRequested => Some(TriggerPhrase::ExemptionRequested),
            Label::CliIntegTestsNeeded => Some(TriggerPhrase::CliIntegTestsNeeded),
            Label::ExemptionDenied | Label::CliIntegTested => None,
        }
    }

    /// Case-insensitive search for the phrase in `text`.
    pub fn is_mentioned_in(&self, text: &str) -> bool {
        contains_ignore_case(text, self.text())
    }
}

impl Display for TriggerPhrase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// A label together with the phrase that requested it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LabelAssociation {
    pub label: Label,
    pub phrase: TriggerPhrase,
}

impl From<TriggerPhrase> for LabelAssociation {
    fn from(phrase: TriggerPhrase) -> Self {
        Self {
            label: phrase.label(),
            phrase,
        }
    }
}
