//! Scanner - runs rules against a host, one probe at a time

use log::{debug, info};

use crate::core::models::{Rule, RuleResult};
use crate::core::ports::HostProbe;

use super::{evaluate_rule, execute_subrule};

/// Sequential scan driver
///
/// Produces exactly one [`RuleResult`] per input rule, in input order.
#[derive(Debug, Clone)]
pub struct Scanner<H> {
    host: H,
}

impl<H: HostProbe> Scanner<H> {
    /// Create a scanner over `host`
    #[must_use]
    pub const fn new(host: H) -> Self {
        Self { host }
    }

    /// Execute and evaluate a single rule
    #[must_use]
    pub fn evaluate(&self, rule: &Rule) -> RuleResult {
        let observations: Vec<_> =
            rule.rules.iter().map(|expr| execute_subrule(expr, &self.host)).collect();

        let result = evaluate_rule(rule, &observations);
        debug!("rule {} ({}): {} - {}", rule.id, rule.title, result.status, result.details);
        result
    }

    /// Evaluate every rule in order
    #[must_use]
    pub fn scan(&self, rules: &[Rule]) -> Vec<RuleResult> {
        info!("Scanning {} rule(s)", rules.len());
        rules.iter().map(|rule| self.evaluate(rule)).collect()
    }
}
