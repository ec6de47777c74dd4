//! Raw probe observations

use super::ProbeError;

/// The outcome of running one probe expression against the host
///
/// Observations live only for the evaluation of the rule that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    /// The expression as executed (trimmed and lowercased)
    pub expression: String,
    /// Backend value on success, probe error otherwise
    pub outcome: Result<String, ProbeError>,
}

impl Observation {
    /// An observation carrying a backend value
    pub fn ok(expression: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            outcome: Ok(value.into()),
        }
    }

    /// An observation carrying a probe error
    pub fn err(expression: impl Into<String>, error: ProbeError) -> Self {
        Self {
            expression: expression.into(),
            outcome: Err(error),
        }
    }

    /// The observed value, empty when the probe failed
    #[must_use]
    pub fn value(&self) -> &str {
        self.outcome.as_deref().unwrap_or_default()
    }

    /// The probe error, if any
    #[must_use]
    pub fn error(&self) -> Option<&ProbeError> {
        self.outcome.as_ref().err()
    }
}
