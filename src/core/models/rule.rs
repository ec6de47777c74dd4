//! Rule model
//!
//! A rule is one compliance check: descriptive metadata that is passed
//! through untouched, a condition policy, and the probe expressions
//! (sub-rules) whose verdicts decide it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Condition;

/// Compliance mapping: a list of `framework -> control ids` maps
///
/// Kept in the shape rule files use (e.g. `[{cis: ["2.3.1.2"]}, {pci_dss: ["8.1"]}]`).
pub type Compliance = Vec<BTreeMap<String, Vec<String>>>;

/// A compliance rule loaded from a policy file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rule {
    /// Numeric identifier
    pub id: i64,

    /// Short title
    pub title: String,

    /// What the rule checks
    #[serde(default)]
    pub description: String,

    /// Why the setting matters
    #[serde(default)]
    pub rationale: String,

    /// How to fix a failure
    #[serde(default)]
    pub remediation: String,

    /// Framework control mappings (not interpreted)
    #[serde(default)]
    pub compliance: Compliance,

    /// External references (not interpreted)
    #[serde(default)]
    pub references: Vec<String>,

    /// Condition policy as written in the rule file
    #[serde(default = "default_condition")]
    pub condition: String,

    /// Probe expressions, in order
    #[serde(default)]
    pub rules: Vec<String>,
}

fn default_condition() -> String {
    Condition::All.to_string()
}

impl Rule {
    /// Create a rule with an `all` condition and no sub-rules
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            condition: default_condition(),
            ..Self::default()
        }
    }

    /// Set the condition policy
    #[must_use]
    pub fn with_condition(mut self, condition: &str) -> Self {
        self.condition = condition.to_string();
        self
    }

    /// Set the probe expressions
    #[must_use]
    pub fn with_rules<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules = rules.into_iter().map(Into::into).collect();
        self
    }

    /// The parsed condition policy
    #[must_use]
    pub fn policy(&self) -> Condition {
        Condition::from_policy(&self.condition)
    }
}
