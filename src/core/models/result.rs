//! Evaluation results
//!
//! [`SubruleVerdict`] is the per-expression outcome, [`RuleResult`] the
//! per-rule outcome handed to reporters, [`ScanSummary`] the counts over a
//! whole scan.

use serde::{Deserialize, Serialize};

use super::{Compliance, Rule};

/// Pass/fail status of a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// The rule's condition is satisfied
    Pass,
    /// The rule's condition is not satisfied
    Fail,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "PASS"),
            Self::Fail => write!(f, "FAIL"),
        }
    }
}

/// Verdict for a single probe expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubruleVerdict {
    /// Whether the expectation was met
    pub passed: bool,
    /// Human-readable explanation
    pub reason: String,
}

impl SubruleVerdict {
    /// A passing verdict
    pub fn pass(reason: impl Into<String>) -> Self {
        Self {
            passed: true,
            reason: reason.into(),
        }
    }

    /// A failing verdict
    pub fn fail(reason: impl Into<String>) -> Self {
        Self {
            passed: false,
            reason: reason.into(),
        }
    }
}

/// Final result of one rule, with the rule's metadata carried through
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResult {
    /// Rule identifier
    pub id: i64,
    /// Rule title
    pub title: String,
    /// Overall status
    pub status: Status,
    /// Failure reasons, or a `passed/total` count
    pub details: String,
    /// Rule description
    pub description: String,
    /// Rule rationale
    pub rationale: String,
    /// Remediation text
    pub remediation: String,
    /// Compliance mapping, unmodified
    pub compliance: Compliance,
    /// References, unmodified
    #[serde(default)]
    pub references: Vec<String>,
    /// Condition as written in the rule
    pub condition: String,
}

impl RuleResult {
    /// Build a result from a rule and its computed status
    #[must_use]
    pub fn from_rule(rule: &Rule, status: Status, details: String) -> Self {
        Self {
            id: rule.id,
            title: rule.title.clone(),
            status,
            details,
            description: rule.description.clone(),
            rationale: rule.rationale.clone(),
            remediation: rule.remediation.clone(),
            compliance: rule.compliance.clone(),
            references: rule.references.clone(),
            condition: rule.condition.clone(),
        }
    }

    /// Whether the rule passed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.status == Status::Pass
    }
}

/// Counts over a list of rule results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Number of rules evaluated
    pub total: usize,
    /// Rules that passed
    pub passed: usize,
    /// Rules that failed
    pub failed: usize,
    /// `passed / total` as a rounded percentage, 0 for an empty scan
    pub score_percent: u32,
}

impl ScanSummary {
    /// Summarize a list of results
    #[must_use]
    pub fn from_results(results: &[RuleResult]) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed()).count();
        let score_percent = if total == 0 {
            0
        } else {
            // passed <= total, so the quotient is within 0..=100
            u32::try_from((passed * 200 + total) / (total * 2)).unwrap_or(100)
        };

        Self {
            total,
            passed,
            failed: total - passed,
            score_percent,
        }
    }
}
