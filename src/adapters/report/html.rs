//! HTML report
//!
//! A single self-contained page: summary tiles on top, then a table of
//! checks whose details can be expanded in place. The page is a minijinja
//! template registered under an `.html` name, so every value from a rule
//! file is HTML-escaped on output.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};
use minijinja::Environment;
use serde::Serialize;

use super::{ReportMeta, ensure_parent};
use crate::core::models::{Compliance, RuleResult, ScanSummary, Status};

const TEMPLATE_NAME: &str = "report.html";
const REPORT_TEMPLATE: &str = include_str!("report.html");
const DEFAULT_TITLE: &str = "CIS Scan Report";

/// Values available to the report template
#[derive(Debug, Serialize)]
struct ReportContext<'a> {
    title: &'a str,
    summary: ScanSummary,
    scan_date: String,
    host: &'a str,
    os: &'a str,
    checks: Vec<CheckRow<'a>>,
}

/// One table row
#[derive(Debug, Serialize)]
struct CheckRow<'a> {
    id: i64,
    title: &'a str,
    status: Status,
    description: &'a str,
    rationale: &'a str,
    remediation: &'a str,
    compliance: String,
    condition: &'a str,
    details: &'a str,
}

impl<'a> From<&'a RuleResult> for CheckRow<'a> {
    fn from(r: &'a RuleResult) -> Self {
        Self {
            id: r.id,
            title: &r.title,
            status: r.status,
            description: &r.description,
            rationale: &r.rationale,
            remediation: &r.remediation,
            compliance: format_compliance(&r.compliance),
            condition: &r.condition,
            details: &r.details,
        }
    }
}

/// Render the full HTML page
pub fn render_html(
    results: &[RuleResult],
    meta: &ReportMeta,
    scan_time: DateTime<Local>,
) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, REPORT_TEMPLATE)?;

    let context = ReportContext {
        title: if meta.benchmark.is_empty() {
            DEFAULT_TITLE
        } else {
            meta.benchmark.as_str()
        },
        summary: ScanSummary::from_results(results),
        scan_date: scan_time.format("%b %d, %Y @ %H:%M:%S").to_string(),
        host: &meta.host,
        os: &meta.os,
        checks: results.iter().map(CheckRow::from).collect(),
    };

    env.get_template(TEMPLATE_NAME)?.render(&context)
}

/// Flatten a compliance mapping to `cis: 1.1, 1.2; pci_dss: 8.1`
#[must_use]
pub fn format_compliance(compliance: &Compliance) -> String {
    compliance
        .iter()
        .flat_map(|mapping| {
            mapping.iter().map(|(framework, ids)| format!("{framework}: {}", ids.join(", ")))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Write the HTML report to `path`, creating parent directories
pub fn write_html_report(
    path: &Path,
    results: &[RuleResult],
    meta: &ReportMeta,
) -> anyhow::Result<()> {
    let html = render_html(results, meta, Local::now())?;
    ensure_parent(path)?;
    fs::write(path, html)?;
    Ok(())
}
