use std::fmt::{Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

/// Labels that this bot reads or modifies on pull requests.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    /// The contributor needs input from a core team member regarding their PR,
    /// e.g. help with a failing build or with the requested changes.
    ClarificationRequested,
    /// Added manually by a maintainer to stop `pr-linter/exemption-requested`
    /// from being re-added to the PR.
    ExemptionDenied,
    /// The contributor would like a core team member to assess whether their change
    /// qualifies for an exemption from the PR linter result.
    ExemptionRequested,
    /// The PR linter detected changes to CLI code. Removed once the CLI integration
    /// tests have been run.
    CliIntegTestsNeeded,
    /// Added manually by a maintainer once the CLI code went through the integration
    /// test pipeline.
    CliIntegTested,
}

impl Label {
    pub const ALL: [Label; 5] = [
        Label::ClarificationRequested,
        Label::ExemptionDenied,
        Label::ExemptionRequested,
        Label::CliIntegTestsNeeded,
        Label::CliIntegTested,
    ];

    /// Name of the label on GitHub.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::ClarificationRequested => "pr/reviewer-clarification-requested",
            Label::ExemptionDenied => "pr-linter/no-exemption",
            Label::ExemptionRequested => "pr-linter/exemption-requested",
            Label::CliIntegTestsNeeded => "pr/needs-cli-test-run",
            Label::CliIntegTested => "pr-linter/cli-integ-tested",
        }
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum LabelParseError {
    #[error("Unknown label `{0}`")]
    UnknownLabel(String),
}

impl FromStr for Label {
    type Err = LabelParseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Label::ALL
            .into_iter()
            .find(|label| label.as_str() == name)
            .ok_or_else(|| LabelParseError::UnknownLabel(name.to_string()))
    }
}

/// Whether a label is being added to or removed from a PR.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UpdateDirection {
    Add,
    Remove,
}

impl UpdateDirection {
    /// Form used in the audit messages, e.g. "Label 'x' added".
    pub fn past_tense(&self) -> &'static str {
        match self {
            UpdateDirection::Add => "added",
            UpdateDirection::Remove => "removed",
        }
    }
}

/// A single label modification that may be performed on a PR.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LabelUpdate {
    pub label: Label,
    pub direction: UpdateDirection,
}

impl LabelUpdate {
    pub fn add(label: Label) -> Self {
        Self {
            label,
            direction: UpdateDirection::Add,
        }
    }

    pub fn remove(label: Label) -> Self {
        Self {
            label,
            direction: UpdateDirection::Remove,
        }
    }
}
