//! Rules gating label updates on the current labels of a PR.
use crate::github::UpdateDirection;
use crate::manager::classifier::HasLabel;

/// A boolean test of the labels present on a PR.
pub trait LabelTest {
    fn test(&self, labels: &[String]) -> bool;
}

impl<F> LabelTest for F
where
    F: Fn(&[String]) -> bool,
{
    fn test(&self, labels: &[String]) -> bool {
        self(labels)
    }
}

/// A single rule: `test` must evaluate to `expects`, otherwise the update is refused
/// and `output_on_failure` explains why.
#[derive(Debug, Clone)]
pub struct Condition<T = HasLabel> {
    pub test: T,
    pub expects: bool,
    pub output_on_failure: String,
}

impl<T> Condition<T> {
    pub fn new(test: T, expects: bool, output_on_failure: impl Into<String>) -> Self {
        Self {
            test,
            expects,
            output_on_failure: output_on_failure.into(),
        }
    }
}

/// Rules for adding and removing a single label.
#[derive(Debug, Clone)]
pub struct LabelUpdateConditions<T = HasLabel> {
    /// Checked before the label is added.
    pub created: Vec<Condition<T>>,
    /// Checked before the label is removed.
    pub deleted: Vec<Condition<T>>,
}

impl<T> LabelUpdateConditions<T> {
    pub fn for_direction(&self, direction: UpdateDirection) -> &[Condition<T>] {
        match direction {
            UpdateDirection::Add => &self.created,
            UpdateDirection::Remove => &self.deleted,
        }
    }
}

/// Result of testing a set of conditions against the labels of a PR.
#[derive(Debug, PartialEq, Eq)]
pub struct ConditionsResult {
    pub all_conditions_met: bool,
    /// Failure outputs of the unmet conditions, in the order of the conditions.
    pub conditions_not_met: Vec<String>,
}

impl ConditionsResult {
    /// Every condition is evaluated, even after the first failure.
    pub fn evaluate<T: LabelTest>(conditions: &[Condition<T>], labels: &[String]) -> Self {
        let conditions_not_met: Vec<String> = conditions
            .iter()
            .filter(|condition| condition.test.test(labels) != condition.expects)
            .map(|condition| condition.output_on_failure.clone())
            .collect();
        Self {
            all_conditions_met: conditions_not_met.is_empty(),
            conditions_not_met,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    type TestFn = fn(&[String]) -> bool;

    fn always_true(_: &[String]) -> bool {
        true
    }

    fn always_false(_: &[String]) -> bool {
        false
    }

    fn labels() -> Vec<String> {
        vec!["label".to_string(), "another one".to_string()]
    }

    #[test]
    fn all_conditions_met() {
        let conditions: Vec<Condition<TestFn>> = vec![
            Condition::new(always_true as TestFn, true, "this failed"),
            Condition::new(always_false as TestFn, false, "this also failed"),
        ];
        let result = ConditionsResult::evaluate(&conditions, &labels());
        assert!(result.all_conditions_met);
        assert!(result.conditions_not_met.is_empty());
    }

    #[test]
    fn no_conditions_met() {
        let conditions: Vec<Condition<TestFn>> = vec![
            Condition::new(always_true as TestFn, false, "this failed"),
            Condition::new(always_false as TestFn, true, "this also failed"),
        ];
        let result = ConditionsResult::evaluate(&conditions, &labels());
        assert!(!result.all_conditions_met);
        assert_eq!(
            result.conditions_not_met,
            vec!["this failed", "this also failed"]
        );
    }

    #[test]
    fn one_condition_not_met() {
        let conditions: Vec<Condition<TestFn>> = vec![
            Condition::new(always_true as TestFn, false, "this failed"),
            Condition::new(always_false as TestFn, false, "this also failed"),
        ];
        let result = ConditionsResult::evaluate(&conditions, &labels());
        assert!(!result.all_conditions_met);
        assert_eq!(result.conditions_not_met, vec!["this failed"]);
    }

    #[test]
    fn empty_conditions_are_met() {
        let result = ConditionsResult::evaluate::<TestFn>(&[], &labels());
        assert_eq!(
            result,
            ConditionsResult {
                all_conditions_met: true,
                conditions_not_met: vec![],
            }
        );
    }

    #[test]
    fn evaluation_does_not_short_circuit() {
        let calls = Cell::new(0);
        let counting = |_: &[String]| {
            calls.set(calls.get() + 1);
            false
        };
        let conditions = vec![
            Condition::new(&counting, true, "first"),
            Condition::new(&counting, true, "second"),
            Condition::new(&counting, false, "third"),
        ];
        let result = ConditionsResult::evaluate(&conditions, &labels());
        assert_eq!(calls.get(), 3);
        assert_eq!(result.conditions_not_met, vec!["first", "second"]);
    }

    #[test]
    fn conditions_are_tested_against_labels() {
        let has_label = |labels: &[String]| labels.iter().any(|label| label == "label");
        let conditions = vec![Condition::new(has_label, false, "label is present")];
        let result = ConditionsResult::evaluate(&conditions, &labels());
        assert_eq!(result.conditions_not_met, vec!["label is present"]);
        assert!(ConditionsResult::evaluate(&conditions, &[]).all_conditions_met);
    }

    #[test]
    fn conditions_for_direction() {
        let conditions: LabelUpdateConditions<TestFn> = LabelUpdateConditions {
            created: vec![Condition::new(always_true as TestFn, true, "created")],
            deleted: vec![],
        };
        assert_eq!(conditions.for_direction(UpdateDirection::Add).len(), 1);
        assert!(conditions.for_direction(UpdateDirection::Remove).is_empty());
    }
}
