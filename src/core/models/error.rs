//! Probe errors
//!
//! Every probe failure is carried as a value and ends up as the reason of a
//! failed sub-rule. None of these abort a scan.

use thiserror::Error;

/// Errors produced while parsing or executing a probe expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// The host has no Windows-style registry
    #[error("registry probes are unsupported on this platform")]
    RegistryUnsupported,

    /// Expression does not start with `r:`, `f:` or `cmd:`
    #[error("unknown prefix in {0}")]
    UnknownPrefix(String),

    /// Registry expression without a `->` value-name segment
    #[error("invalid registry rule format: missing '->'")]
    MissingSeparator,

    /// Registry path starts with a hive name we do not know
    #[error("unsupported hive: {0}")]
    UnsupportedHive(String),

    /// Opening the key or reading the value failed
    #[error("registry error: {0}")]
    Registry(String),

    /// The shell command could not be spawned or exited non-zero
    #[error("command error: {0}")]
    Command(String),
}

/// Coarse classification of a [`ProbeError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeErrorKind {
    /// The platform lacks the capability the probe needs
    Unsupported,
    /// The expression itself is malformed
    Malformed,
    /// The probe ran but the lookup failed
    Lookup,
}

impl ProbeError {
    /// Classify this error
    #[must_use]
    pub const fn kind(&self) -> ProbeErrorKind {
        match self {
            Self::RegistryUnsupported => ProbeErrorKind::Unsupported,
            Self::UnknownPrefix(_) | Self::MissingSeparator | Self::UnsupportedHive(_) => {
                ProbeErrorKind::Malformed
            },
            Self::Registry(_) | Self::Command(_) => ProbeErrorKind::Lookup,
        }
    }
}
