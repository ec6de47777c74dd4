//! Domain models for hostaudit
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Rule`] - A compliance check and the probe expressions it runs
//! - [`Condition`] - How sub-rule verdicts fold into one rule verdict
//! - [`Probe`] - A parsed probe expression (registry, file, command)
//! - [`Observation`] - The raw outcome of running one probe
//! - [`SubruleVerdict`] / [`RuleResult`] - Evaluation outcomes

mod condition;
mod error;
mod hive;
mod observation;
mod probe;
mod result;
mod rule;

pub use condition::Condition;
pub use error::{ProbeError, ProbeErrorKind};
pub use hive::Hive;
pub use observation::Observation;
pub use probe::{FILE_EXISTS, FILE_MISSING, Probe, ProbeTag, RegistryQuery, split_expectation};
pub use result::{RuleResult, ScanSummary, Status, SubruleVerdict};
pub use rule::{Compliance, Rule};
