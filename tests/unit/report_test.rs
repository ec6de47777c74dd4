//! Tests for JSON and HTML report writers

use std::collections::BTreeMap;

use chrono::{Local, TimeZone};
use hostaudit::adapters::report::{
    JsonReport, ReportMeta, render_html, write_html_report, write_json_report,
};
use hostaudit::core::models::{Rule, RuleResult, Status};
use tempfile::TempDir;

fn results() -> Vec<RuleResult> {
    let mut rule = Rule::new(26000, "Password <history>").with_condition("all");
    rule.compliance = vec![BTreeMap::from([("cis".to_string(), vec!["1.1.1".to_string()])])];
    vec![
        RuleResult::from_rule(&rule, Status::Pass, "1/1 sub-rules passed".to_string()),
        RuleResult::from_rule(
            &Rule::new(26001, "Shadow"),
            Status::Fail,
            "[f:/etc/shadow -> exists] file not found (missing)".to_string(),
        ),
    ]
}

fn meta() -> ReportMeta {
    ReportMeta {
        host: "web-01".to_string(),
        os: "Windows 11".to_string(),
        benchmark: String::new(),
    }
}

#[test]
fn json_report_shape() {
    let results = results();
    let meta = meta();
    let scan_time = Local.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
    let report = JsonReport::new(&results, &meta, scan_time);

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["passed"], 1);
    assert_eq!(value["failed"], 1);
    assert_eq!(value["score_percent"], 50);
    assert_eq!(value["host"], "web-01");
    assert_eq!(value["benchmark_name"], "");
    assert_eq!(value["checks"][0]["id"], 26000);
    assert_eq!(value["checks"][0]["status"], "PASS");
    assert_eq!(value["checks"][0]["compliance"][0]["cis"][0], "1.1.1");
    assert_eq!(value["checks"][1]["status"], "FAIL");
    assert!(value["scan_time"].as_str().unwrap().starts_with("2024-05-01T12:30:00"));
}

#[test]
fn html_escapes_rule_text() {
    let scan_time = Local.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
    let html = render_html(&results(), &meta(), scan_time).unwrap();

    assert!(html.contains("<title>CIS Scan Report</title>"));
    assert!(html.contains("Password &lt;history&gt;"));
    assert!(!html.contains("Password <history>"));
    assert!(html.contains("cis: 1.1.1"));
    assert!(html.contains("<tr class=\"fail\">"));
    assert!(html.contains("May 01, 2024 @ 12:30:00"));
    assert!(html.contains("<tr class=\"pass\">"));
}

#[test]
fn html_escapes_host_metadata() {
    let meta = ReportMeta {
        host: "<b>db</b>".to_string(),
        os: "Linux & co".to_string(),
        benchmark: "A \"quoted\" benchmark".to_string(),
    };
    let html = render_html(&results(), &meta, Local::now()).unwrap();

    assert!(html.contains("&lt;b&gt;db&lt;"));
    assert!(html.contains("Linux &amp; co"));
    assert!(html.contains("<h1>A &quot;quoted&quot; benchmark</h1>"));
    assert!(!html.contains("<b>db</b>"));
}

#[test]
fn html_uses_benchmark_name() {
    let mut meta = meta();
    meta.benchmark = "CIS Windows 11".to_string();
    let html = render_html(&[], &meta, Local::now()).unwrap();
    assert!(html.contains("<h1>CIS Windows 11</h1>"));
    assert!(html.contains("Checks (0)"));
}

#[test]
fn writers_create_parent_directories() {
    let dir = TempDir::new().unwrap();
    let json = dir.path().join("out/nested/scan.json");
    let html = dir.path().join("out/report.html");

    write_json_report(&json, &results(), &meta()).unwrap();
    write_html_report(&html, &results(), &meta()).unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(parsed["checks"].as_array().unwrap().len(), 2);
    assert!(std::fs::read_to_string(&html).unwrap().starts_with("<!DOCTYPE html>"));
}
