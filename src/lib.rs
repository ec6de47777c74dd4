//! hostaudit - Audit a host's configuration against SCA-style compliance rules
//!
//! Rules carry probe expressions (registry values, file presence, command
//! output) plus an expectation marker. The engine runs each probe, judges
//! the observation, and folds sub-rule verdicts into a PASS/FAIL per rule
//! under an ALL/ANY/NONE policy.
//!
//! ```
//! use hostaudit::adapters::host::SystemHost;
//! use hostaudit::core::models::{Rule, Status};
//! use hostaudit::core::services::Scanner;
//!
//! let rule = Rule::new(1, "No such file").with_condition("none").with_rules(["f:/definitely/not/here -> exists"]);
//! let results = Scanner::new(SystemHost::new()).scan(&[rule]);
//! assert_eq!(results[0].status, Status::Pass);
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
