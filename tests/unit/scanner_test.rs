//! Tests for the scanner - end-to-end rule evaluation

use hostaudit::adapters::host::SystemHost;
use hostaudit::core::models::{ScanSummary, Status};
use hostaudit::core::services::Scanner;

use crate::common::{MockHost, RuleBuilder};

#[test]
fn any_with_one_existing_file() {
    let host = MockHost::new().file("/tmp/exists-file");
    let rule = RuleBuilder::new(1)
        .condition("any")
        .subrule("f:/tmp/exists-file -> exists")
        .subrule("f:/tmp/missing-file -> exists")
        .build();

    let result = Scanner::new(host).evaluate(&rule);
    assert_eq!(result.status, Status::Pass);
    assert_eq!(result.details, "1/2 sub-rules passed");
}

#[test]
fn none_with_absent_file() {
    let rule = RuleBuilder::new(2).condition("none").subrule("f:/nonexistent -> exists").build();
    let result = Scanner::new(MockHost::new()).evaluate(&rule);
    assert_eq!(result.status, Status::Pass);
    assert_eq!(result.details, "0/1 sub-rules passed");
}

#[test]
fn unknown_prefix_fails_rule() {
    let rule = RuleBuilder::new(3).subrule("x:something").build();
    let result = Scanner::new(MockHost::new()).evaluate(&rule);
    assert_eq!(result.status, Status::Fail);
    assert!(result.details.contains("unknown prefix"));
}

#[test]
fn results_preserve_rule_order() {
    let host = MockHost::new().file("/a");
    let rules: Vec<_> = (0..10)
        .map(|i| {
            let expr = if i % 2 == 0 { "f:/a -> exists" } else { "f:/b -> exists" };
            RuleBuilder::new(i).subrule(expr).build()
        })
        .collect();

    let results = Scanner::new(&host).scan(&rules);
    assert_eq!(results.len(), rules.len());
    for (i, result) in results.iter().enumerate() {
        assert_eq!(result.id, i64::try_from(i).unwrap());
        let expected = if i % 2 == 0 { Status::Pass } else { Status::Fail };
        assert_eq!(result.status, expected);
    }

    let summary = ScanSummary::from_results(&results);
    assert_eq!((summary.passed, summary.failed, summary.score_percent), (5, 5, 50));
}

#[test]
fn one_rule_error_does_not_affect_others() {
    let host = MockHost::new().failing_command("boom", "exit status: 2").file("/ok");
    let rules = vec![
        RuleBuilder::new(1).subrule("cmd:boom").build(),
        RuleBuilder::new(2).subrule("f:/ok -> exists").build(),
    ];
    let results = Scanner::new(host).scan(&rules);
    assert_eq!(results[0].status, Status::Fail);
    assert_eq!(results[0].details, "[cmd:boom] command error: exit status: 2");
    assert_eq!(results[1].status, Status::Pass);
}

#[cfg(unix)]
mod system_host {
    use super::*;

    #[test]
    fn echo_matches_regex() {
        let rule = RuleBuilder::new(10).condition("all").subrule("cmd:echo hello -> regex:^hello$").build();
        let result = Scanner::new(SystemHost::new()).evaluate(&rule);
        assert_eq!(result.status, Status::Pass, "{}", result.details);
    }

    #[test]
    fn nonzero_exit_fails() {
        let rule = RuleBuilder::new(11).subrule("cmd:exit 4").build();
        let result = Scanner::new(SystemHost::new()).evaluate(&rule);
        assert_eq!(result.status, Status::Fail);
        assert!(result.details.starts_with("[cmd:exit 4] command error:"));
    }

    #[test]
    fn registry_is_unsupported() {
        let rule = RuleBuilder::new(12).subrule(r"r:HKLM\Software -> x").build();
        let result = Scanner::new(SystemHost::new()).evaluate(&rule);
        assert_eq!(result.status, Status::Fail);
        assert!(result.details.contains("unsupported on this platform"));
    }

    #[test]
    fn root_directory_exists() {
        let rule = RuleBuilder::new(13).subrule("f:/ -> exists").build();
        let result = Scanner::new(SystemHost::new()).evaluate(&rule);
        assert_eq!(result.status, Status::Pass, "{}", result.details);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn mixed_case_path_is_case_folded() {
        let dir = tempfile::TempDir::new().unwrap();
        let upper = dir.path().join("UPPER");
        std::fs::create_dir(&upper).unwrap();

        let rule = RuleBuilder::new(14).subrule(&format!("f:{} -> exists", upper.display())).build();
        let result = Scanner::new(SystemHost::new()).evaluate(&rule);
        assert_eq!(result.status, Status::Fail);
        assert!(result.details.ends_with("file not found (missing)"));
    }
}
