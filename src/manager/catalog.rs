//! The phrases this bot reacts to and the rules for updating their labels.
use crate::github::Label;
use crate::manager::classifier::{
    PhraseClassifier, CLI_INTEG_TEST_COMPLETE, CLI_INTEG_TEST_NEEDED, EXEMPTION_DENIED,
    REQUESTS_CLARIFICATION, REQUESTS_EXEMPTION,
};
use crate::manager::conditions::{Condition, LabelUpdateConditions};
use crate::manager::phrase::TriggerPhrase;

/// How a single phrase is detected and when its label may be updated.
#[derive(Debug, Clone)]
pub struct LabelRules {
    pub classifier: PhraseClassifier,
    pub conditions: LabelUpdateConditions,
}

impl LabelRules {
    pub fn for_phrase(phrase: TriggerPhrase) -> Self {
        match phrase {
            TriggerPhrase::ClarificationRequested => Self {
                classifier: PhraseClassifier::contributor(phrase),
                conditions: LabelUpdateConditions {
                    created: vec![Condition::new(
                        REQUESTS_CLARIFICATION,
                        false,
                        "it has already been added",
                    )],
                    deleted: vec![Condition::new(
                        REQUESTS_CLARIFICATION,
                        true,
                        "it was not present",
                    )],
                },
            },
            TriggerPhrase::ExemptionRequested => Self {
                classifier: PhraseClassifier::contributor(phrase),
                conditions: LabelUpdateConditions {
                    created: vec![
                        Condition::new(REQUESTS_EXEMPTION, false, "it has already been added"),
                        Condition::new(
                            EXEMPTION_DENIED,
                            false,
                            format!("label '{}' is present", Label::ExemptionDenied),
                        ),
                    ],
                    deleted: vec![Condition::new(
                        REQUESTS_EXEMPTION,
                        true,
                        "it was not present",
                    )],
                },
            },
            TriggerPhrase::CliIntegTestsNeeded => Self {
                classifier: PhraseClassifier::automation(phrase),
                conditions: LabelUpdateConditions {
                    created: vec![
                        Condition::new(CLI_INTEG_TEST_NEEDED, false, "it has already been added"),
                        Condition::new(
                            CLI_INTEG_TEST_COMPLETE,
                            false,
                            format!("label '{}' is present", Label::CliIntegTested),
                        ),
                    ],
                    deleted: vec![
                        Condition::new(CLI_INTEG_TEST_NEEDED, true, "already present"),
                        Condition::new(
                            CLI_INTEG_TEST_COMPLETE,
                            false,
                            format!("label '{}' is not present", Label::CliIntegTested),
                        ),
                    ],
                },
            },
        }
    }

    pub fn phrase(&self) -> TriggerPhrase {
        self.classifier.phrase
    }
}

/// Ordered set of label rules. The order determines the order of label updates
/// and of the messages in the summary.
#[derive(Debug, Clone)]
pub struct LabelCatalog {
    rules: Vec<LabelRules>,
}

impl LabelCatalog {
    pub fn new(rules: Vec<LabelRules>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[LabelRules] {
        &self.rules
    }

    pub fn get(&self, phrase: TriggerPhrase) -> Option<&LabelRules> {
        self.rules.iter().find(|rules| rules.phrase() == phrase)
    }
}

impl Default for LabelCatalog {
    fn default() -> Self {
        Self::new(
            TriggerPhrase::ALL
                .into_iter()
                .map(LabelRules::for_phrase)
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::UpdateDirection;
    use crate::manager::classifier::{AuthorGate, HasLabel};
    use crate::manager::conditions::ConditionsResult;

    fn outputs(conditions: &[Condition]) -> Vec<(HasLabel, bool, &str)> {
        conditions
            .iter()
            .map(|condition| {
                (
                    condition.test,
                    condition.expects,
                    condition.output_on_failure.as_str(),
                )
            })
            .collect()
    }

    #[test]
    fn default_catalog_order() {
        let catalog = LabelCatalog::default();
        let phrases: Vec<_> = catalog.rules().iter().map(LabelRules::phrase).collect();
        assert_eq!(
            phrases,
            vec![
                TriggerPhrase::ClarificationRequested,
                TriggerPhrase::ExemptionRequested,
                TriggerPhrase::CliIntegTestsNeeded,
            ]
        );
    }

    #[test]
    fn only_cli_phrase_is_automation_gated() {
        let catalog = LabelCatalog::default();
        let gates: Vec<_> = catalog
            .rules()
            .iter()
            .map(|rules| rules.classifier.gate)
            .collect();
        assert_eq!(
            gates,
            vec![
                AuthorGate::Contributor,
                AuthorGate::Contributor,
                AuthorGate::Automation,
            ]
        );
    }

    #[test]
    fn exemption_rules() {
        let catalog = LabelCatalog::default();
        let rules = catalog.get(TriggerPhrase::ExemptionRequested).unwrap();
        assert_eq!(
            outputs(&rules.conditions.created),
            vec![
                (REQUESTS_EXEMPTION, false, "it has already been added"),
                (
                    EXEMPTION_DENIED,
                    false,
                    "label 'pr-linter/no-exemption' is present"
                ),
            ]
        );
        assert_eq!(
            outputs(&rules.conditions.deleted),
            vec![(REQUESTS_EXEMPTION, true, "it was not present")]
        );
    }

    #[test]
    fn cli_integ_rules() {
        let catalog = LabelCatalog::default();
        let rules = catalog.get(TriggerPhrase::CliIntegTestsNeeded).unwrap();
        assert_eq!(
            outputs(&rules.conditions.deleted),
            vec![
                (CLI_INTEG_TEST_NEEDED, true, "already present"),
                (
                    CLI_INTEG_TEST_COMPLETE,
                    false,
                    "label 'pr-linter/cli-integ-tested' is not present"
                ),
            ]
        );
    }

    #[test]
    fn cli_integ_tested_blocks_both_directions() {
        let catalog = LabelCatalog::default();
        let rules = catalog.get(TriggerPhrase::CliIntegTestsNeeded).unwrap();
        let labels = vec![
            Label::CliIntegTestsNeeded.to_string(),
            Label::CliIntegTested.to_string(),
        ];

        let created = ConditionsResult::evaluate(
            rules.conditions.for_direction(UpdateDirection::Add),
            &labels,
        );
        assert_eq!(
            created.conditions_not_met,
            vec![
                "it has already been added",
                "label 'pr-linter/cli-integ-tested' is present"
            ]
        );

        let deleted = ConditionsResult::evaluate(
            rules.conditions.for_direction(UpdateDirection::Remove),
            &labels,
        );
        assert_eq!(
            deleted.conditions_not_met,
            vec!["label 'pr-linter/cli-integ-tested' is not present"]
        );
    }

    #[test]
    fn every_phrase_has_rules() {
        let catalog = LabelCatalog::default();
        for phrase in TriggerPhrase::ALL {
            let rules = catalog.get(phrase).unwrap();
            assert!(!rules.conditions.created.is_empty());
            assert!(!rules.conditions.deleted.is_empty());
        }
    }
}
