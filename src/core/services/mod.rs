//! Engine services
//!
//! A single-pass pipeline: expression → [`Observation`] → [`SubruleVerdict`]
//! → [`RuleResult`].
//!
//! - [`executor`] - Run one probe expression against a host
//! - [`evaluator`] - Judge an observation against its expectation marker
//! - [`aggregator`] - Fold sub-rule verdicts under a condition policy
//! - [`scanner`] - Drive the pipeline over an ordered rule list
//!
//! [`Observation`]: crate::core::models::Observation
//! [`SubruleVerdict`]: crate::core::models::SubruleVerdict
//! [`RuleResult`]: crate::core::models::RuleResult

pub mod aggregator;
pub mod evaluator;
pub mod executor;
pub mod scanner;

pub use aggregator::{Tally, aggregate, evaluate_rule};
pub use evaluator::{evaluate_subrule, regex_prefix_match};
pub use executor::{execute_probe, execute_subrule};
pub use scanner::Scanner;
