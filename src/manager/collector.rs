use crate::github::{LabelClient, PullRequestNumber};
use crate::manager::assessor::{AssessmentOutcome, UpdateAssessor};
use crate::manager::catalog::{LabelCatalog, LabelRules};
use crate::manager::classifier::AssociateLabel;
use crate::manager::conditions::{LabelTest, LabelUpdateConditions};
use crate::utils::text::pluralize;

/// Indicates that no actions are being taken on the PR.
pub const NO_ACTIONS: &str = "No actions to take on this PR";

const SUMMARY_BORDER: &str = "**************************************";

/// Collects the outcomes of all label updates performed for a single comment event.
pub struct UpdateCollector<'a, Client: LabelClient> {
    assessor: UpdateAssessor<'a, Client>,
    messages: Vec<String>,
}

impl<'a, Client: LabelClient> UpdateCollector<'a, Client> {
    pub fn new(assessor: UpdateAssessor<'a, Client>) -> Self {
        Self {
            assessor,
            messages: Vec::new(),
        }
    }

    /// Assesses a single label update and records its messages.
    pub async fn collect_update<C, T>(
        &mut self,
        classifier: &C,
        conditions: &LabelUpdateConditions<T>,
    ) -> anyhow::Result<()>
    where
        C: AssociateLabel + ?Sized,
        T: LabelTest,
    {
        let outcome = self.assessor.assess(classifier, conditions).await?;
        self.record(outcome);
        Ok(())
    }

    /// Assesses the rules of the catalog one by one, in catalog order.
    /// The first label client error stops the collection.
    pub async fn collect_all(&mut self, catalog: &LabelCatalog) -> anyhow::Result<()> {
        for LabelRules {
            classifier,
            conditions,
        } in catalog.rules()
        {
            self.collect_update(classifier, conditions).await?;
        }
        tracing::info!(
            "Collected {} {} for PR {}",
            self.messages.len(),
            pluralize("message", self.messages.len()),
            self.pr_number()
        );
        Ok(())
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Lines of the user-facing summary of the label updates.
    pub fn summary_lines(&self) -> Vec<String> {
        summary_lines(self.pr_number(), &self.messages)
    }

    pub fn render_summary(&self) -> String {
        let mut summary = self.summary_lines().join("\n");
        summary.push('\n');
        summary
    }

    /// Prints a user-friendly summary of the label updates to stdout.
    pub fn print_updates(&self) {
        print!("{}", self.render_summary());
    }

    fn pr_number(&self) -> PullRequestNumber {
        self.assessor.pr().number
    }

    fn record(&mut self, outcome: AssessmentOutcome) {
        self.messages.extend(outcome.into_messages());
    }
}

fn summary_lines(pr: PullRequestNumber, messages: &[String]) -> Vec<String> {
    let mut lines = vec![
        SUMMARY_BORDER.to_string(),
        format!("Summary of updates for PR {pr}: "),
    ];
    if messages.is_empty() {
        lines.push(format!("\t{NO_ACTIONS}"));
    } else {
        lines.extend(messages.iter().map(|message| format!("\t{message}")));
    }
    lines.push(SUMMARY_BORDER.to_string());
    lines
}
