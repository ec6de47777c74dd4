//! Tests for the probe executor

use hostaudit::core::models::{FILE_EXISTS, FILE_MISSING, Hive, ProbeError, ProbeErrorKind};
use hostaudit::core::services::execute_subrule;

use crate::common::MockHost;

mod dispatch {
    use super::*;

    #[test]
    fn expression_is_trimmed_and_lowercased() {
        let host = MockHost::new();
        let obs = execute_subrule("  F:/ETC/Passwd -> EXISTS  ", &host);
        assert_eq!(obs.expression, "f:/etc/passwd -> exists");
    }

    #[test]
    fn unknown_prefix_is_malformed() {
        let obs = execute_subrule("x:something", &MockHost::new());
        let err = obs.error().unwrap();
        assert_eq!(err.kind(), ProbeErrorKind::Malformed);
        assert!(err.to_string().contains("unknown prefix"));
        assert_eq!(obs.value(), "");
    }
}

mod file {
    use super::*;

    #[test]
    fn existing_path() {
        let host = MockHost::new().file("/etc/shadow");
        let obs = execute_subrule("f:/etc/shadow -> exists", &host);
        assert_eq!(obs.value(), FILE_EXISTS);
        assert!(obs.error().is_none());
    }

    #[test]
    fn missing_path() {
        let obs = execute_subrule("f:/nonexistent -> exists", &MockHost::new());
        assert_eq!(obs.value(), FILE_MISSING);
    }

    #[test]
    fn path_is_case_folded_before_lookup() {
        // The host only knows the mixed-case spelling, which is never queried
        let host = MockHost::new().file("/Data/Report.txt");
        let obs = execute_subrule("f:/Data/Report.txt -> exists", &host);
        assert_eq!(obs.value(), FILE_MISSING);
    }
}

mod command {
    use super::*;

    #[test]
    fn stdout_becomes_value() {
        let host = MockHost::new().command("echo hello", "hello");
        let obs = execute_subrule("cmd:echo hello -> regex:^hello$", &host);
        assert_eq!(obs.value(), "hello");
    }

    #[test]
    fn failure_has_empty_value() {
        let host = MockHost::new().failing_command("false", "exit status: 1");
        let obs = execute_subrule("cmd:false", &host);
        assert_eq!(obs.value(), "");
        assert_eq!(obs.error(), Some(&ProbeError::Command("exit status: 1".to_string())));
        assert_eq!(obs.error().unwrap().kind(), ProbeErrorKind::Lookup);
    }
}

mod registry {
    use super::*;

    #[test]
    fn unsupported_without_registry() {
        let obs = execute_subrule(r"r:HKLM\Software -> Value", &MockHost::new());
        assert_eq!(obs.error(), Some(&ProbeError::RegistryUnsupported));
        assert_eq!(obs.error().unwrap().kind(), ProbeErrorKind::Unsupported);
    }

    #[test]
    fn platform_gate_precedes_format_check() {
        let obs = execute_subrule(r"r:HKLM\Software", &MockHost::new());
        assert_eq!(obs.error(), Some(&ProbeError::RegistryUnsupported));
    }

    #[test]
    fn missing_separator() {
        let obs = execute_subrule(r"r:HKLM\Software", &MockHost::new().with_registry());
        assert_eq!(obs.error(), Some(&ProbeError::MissingSeparator));
    }

    #[test]
    fn unsupported_hive() {
        let obs = execute_subrule(r"r:HKCC\Software -> x", &MockHost::new().with_registry());
        assert_eq!(obs.error(), Some(&ProbeError::UnsupportedHive("hkcc".to_string())));
    }

    #[test]
    fn reads_named_value() {
        let host = MockHost::new().value(
            Hive::LocalMachine,
            r"software\microsoft\windows nt\currentversion",
            "productname",
            "Windows 10 Pro",
        );
        let obs = execute_subrule(
            r"r:HKLM\SOFTWARE\Microsoft\Windows NT\CurrentVersion -> ProductName -> regex:^windows",
            &host,
        );
        assert_eq!(obs.value(), "Windows 10 Pro");
    }

    #[test]
    fn empty_value_name_reads_default() {
        let host = MockHost::new().value(Hive::CurrentUser, r"software\app", "", "1");
        let obs = execute_subrule(r"r:HKCU\Software\App ->", &host);
        assert_eq!(obs.value(), "1");
    }

    #[test]
    fn lookup_failure_is_captured() {
        let obs = execute_subrule(r"r:HKU\Missing -> x", &MockHost::new().with_registry());
        let err = obs.error().unwrap();
        assert_eq!(err.kind(), ProbeErrorKind::Lookup);
        assert!(err.to_string().starts_with("registry error:"));
    }
}
