//! Rule condition policies
//!
//! Defines how the verdicts of a rule's sub-rules are folded together.

/// Boolean policy applied to a rule's sub-rule verdicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Condition {
    /// Every sub-rule must pass
    #[default]
    All,
    /// At least one sub-rule must pass
    Any,
    /// No sub-rule may pass
    None,
}

impl Condition {
    /// Parse a policy string from a rule definition
    ///
    /// Matching is case-insensitive. Anything unrecognized, including an
    /// empty string, falls back to [`Condition::All`].
    #[must_use]
    pub fn from_policy(policy: &str) -> Self {
        match policy.to_lowercase().as_str() {
            "any" => Self::Any,
            "none" => Self::None,
            _ => Self::All,
        }
    }

    /// Whether `passed` out of `total` sub-rules satisfies this policy
    #[must_use]
    pub const fn is_satisfied(self, passed: usize, total: usize) -> bool {
        match self {
            Self::All => passed == total,
            Self::Any => passed > 0,
            Self::None => passed == 0,
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Any => write!(f, "any"),
            Self::None => write!(f, "none"),
        }
    }
}
