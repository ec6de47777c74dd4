//! Rule aggregator - folds sub-rule verdicts into a rule verdict
//!
//! Only the pass count and the set of failure reasons matter, so the order
//! in which sub-rules were executed never changes the outcome.

use crate::core::models::{Condition, Observation, Rule, RuleResult, Status, SubruleVerdict};

use super::evaluate_subrule;

/// Running counts over a rule's sub-rule verdicts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    /// Sub-rules that passed
    pub passed: usize,
    /// Sub-rules seen
    pub total: usize,
    /// `[expression] reason` for every failed sub-rule
    pub fail_reasons: Vec<String>,
}

impl Tally {
    /// Record one verdict for `expression`
    pub fn record(&mut self, expression: &str, verdict: &SubruleVerdict) {
        self.total += 1;
        if verdict.passed {
            self.passed += 1;
        } else {
            self.fail_reasons.push(format!("[{expression}] {}", verdict.reason));
        }
    }
}

/// Apply `condition` to a tally
///
/// Returns the status and the details string: the joined failure reasons
/// when the rule fails and any were recorded, `passed/total sub-rules
/// passed` otherwise.
#[must_use]
pub fn aggregate(condition: Condition, tally: &Tally) -> (Status, String) {
    let passed = condition.is_satisfied(tally.passed, tally.total);

    let details = if !passed && !tally.fail_reasons.is_empty() {
        tally.fail_reasons.join("; ")
    } else {
        format!("{}/{} sub-rules passed", tally.passed, tally.total)
    };

    let status = if passed { Status::Pass } else { Status::Fail };
    (status, details)
}

/// Evaluate every observation of `rule` and build its result
#[must_use]
pub fn evaluate_rule(rule: &Rule, observations: &[Observation]) -> RuleResult {
    let mut tally = Tally::default();
    for observation in observations {
        tally.record(&observation.expression, &evaluate_subrule(observation));
    }

    let (status, details) = aggregate(rule.policy(), &tally);
    RuleResult::from_rule(rule, status, details)
}
