//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Observation, RuleResult, ScanSummary, Status, SubruleVerdict};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a scan
#[derive(Debug, Serialize)]
pub struct ScanOutput {
    /// Rule counts
    pub summary: ScanSummary,
    /// Per-rule results, in rule order
    pub results: Vec<RuleResult>,
}

/// Result of running a single probe expression
#[derive(Debug, Serialize)]
pub struct ProbeOutput {
    /// Normalized expression
    pub expression: String,
    /// Observed value (empty on error)
    pub value: String,
    /// Probe error, if any
    pub error: Option<String>,
    /// Sub-rule verdict
    pub passed: bool,
    /// Verdict reason
    pub reason: String,
}

/// Result of listing loaded rules
#[derive(Debug, Serialize)]
pub struct RuleListOutput {
    /// Loaded rules
    pub rules: Vec<RuleInfo>,
}

/// Summary information about a rule
#[derive(Debug, Serialize)]
pub struct RuleInfo {
    /// Rule identifier
    pub id: i64,
    /// Rule title
    pub title: String,
    /// Condition as written
    pub condition: String,
    /// Number of probe expressions
    pub subrules: usize,
}

fn status_label(status: Status) -> String {
    match status {
        Status::Pass => status.to_string().green().bold().to_string(),
        Status::Fail => status.to_string().red().bold().to_string(),
    }
}

impl ScanOutput {
    /// Build output from scan results
    #[must_use]
    pub fn new(results: Vec<RuleResult>) -> Self {
        Self {
            summary: ScanSummary::from_results(&results),
            results,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.results.is_empty() {
            println!("No rules evaluated.");
            return;
        }

        for r in &self.results {
            println!("[{}] {} {}", status_label(r.status), r.id, r.title);
            if r.status == Status::Fail {
                println!("        {}", r.details.dimmed());
            }
        }

        println!(
            "\nPassed: {}, Failed: {} (score {}%)",
            self.summary.passed, self.summary.failed, self.summary.score_percent
        );
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ProbeOutput {
    /// Build output from an observation and its verdict
    #[must_use]
    pub fn new(observation: &Observation, verdict: SubruleVerdict) -> Self {
        Self {
            expression: observation.expression.clone(),
            value: observation.value().to_string(),
            error: observation.error().map(ToString::to_string),
            passed: verdict.passed,
            reason: verdict.reason,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Expression: {}", self.expression);
        match &self.error {
            Some(err) => println!("Error:      {err}"),
            None => println!("Value:      {}", self.value),
        }
        let status = if self.passed { Status::Pass } else { Status::Fail };
        println!("Verdict:    {} ({})", status_label(status), self.reason);
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl RuleListOutput {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.rules.is_empty() {
            println!("No rules found.");
            return;
        }

        println!("Rules:\n");
        for r in &self.rules {
            println!("  [{}] {} ({} sub-rule(s))", r.condition.to_uppercase(), r.id, r.subrules);
            println!("  {}\n", r.title);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
