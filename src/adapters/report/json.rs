//! JSON report

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};
use serde::Serialize;

use super::{ReportMeta, ensure_parent};
use crate::core::models::{Compliance, RuleResult, ScanSummary, Status};

/// Top-level JSON report document
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    /// Benchmark name, may be empty
    pub benchmark_name: &'a str,
    /// Rules that passed
    pub passed: usize,
    /// Rules that failed
    pub failed: usize,
    /// Rounded pass percentage
    pub score_percent: u32,
    /// When the report was produced (RFC 3339)
    pub scan_time: String,
    /// Host name
    pub host: &'a str,
    /// Operating system label
    pub os: &'a str,
    /// One entry per rule, in scan order
    pub checks: Vec<JsonCheck<'a>>,
}

/// One rule in the JSON report
#[derive(Debug, Serialize)]
pub struct JsonCheck<'a> {
    /// Rule identifier
    pub id: i64,
    /// Rule title
    pub title: &'a str,
    /// PASS or FAIL
    pub status: Status,
    /// Evaluation details
    pub details: &'a str,
    /// Rule description
    pub description: &'a str,
    /// Rule rationale
    pub rationale: &'a str,
    /// Remediation text
    pub remediation: &'a str,
    /// Compliance mapping
    pub compliance: &'a Compliance,
    /// Condition as written in the rule
    pub condition: &'a str,
}

impl<'a> JsonReport<'a> {
    /// Assemble a report from scan results
    #[must_use]
    pub fn new(results: &'a [RuleResult], meta: &'a ReportMeta, scan_time: DateTime<Local>) -> Self {
        let summary = ScanSummary::from_results(results);
        Self {
            benchmark_name: &meta.benchmark,
            passed: summary.passed,
            failed: summary.failed,
            score_percent: summary.score_percent,
            scan_time: scan_time.to_rfc3339(),
            host: &meta.host,
            os: &meta.os,
            checks: results.iter().map(JsonCheck::from).collect(),
        }
    }
}

impl<'a> From<&'a RuleResult> for JsonCheck<'a> {
    fn from(r: &'a RuleResult) -> Self {
        Self {
            id: r.id,
            title: &r.title,
            status: r.status,
            details: &r.details,
            description: &r.description,
            rationale: &r.rationale,
            remediation: &r.remediation,
            compliance: &r.compliance,
            condition: &r.condition,
        }
    }
}

/// Write the JSON report to `path`, creating parent directories
pub fn write_json_report(
    path: &Path,
    results: &[RuleResult],
    meta: &ReportMeta,
) -> anyhow::Result<()> {
    let report = JsonReport::new(results, meta, Local::now());
    ensure_parent(path)?;
    fs::write(path, serde_json::to_string_pretty(&report)?)?;
    Ok(())
}
