//! Probe executor - dispatches expressions to host backends
//!
//! Never fails: every problem is captured in the returned [`Observation`].

use std::path::Path;

use log::{debug, warn};

use crate::core::models::{
    FILE_EXISTS, FILE_MISSING, Observation, Probe, ProbeError, ProbeErrorKind, ProbeTag,
};
use crate::core::ports::HostProbe;

/// Execute one probe expression against `host`
///
/// The expression is trimmed and lowercased first; the normalized form is
/// what the returned observation carries.
pub fn execute_subrule<H: HostProbe + ?Sized>(expression: &str, host: &H) -> Observation {
    let expression = Probe::normalize(expression);
    let outcome = probe_outcome(&expression, host);

    match &outcome {
        Ok(value) => debug!("probe `{expression}` -> {value:?}"),
        // A malformed expression is a rule-file bug; the rest are host state
        Err(err) if err.kind() == ProbeErrorKind::Malformed => {
            warn!("probe `{expression}` is malformed: {err}");
        },
        Err(err) => debug!("probe `{expression}` failed: {err}"),
    }

    Observation {
        expression,
        outcome,
    }
}

fn probe_outcome<H: HostProbe + ?Sized>(expression: &str, host: &H) -> Result<String, ProbeError> {
    let (tag, body) = ProbeTag::split(expression)?;

    // Platform gate comes before any parsing of the registry body
    if tag == ProbeTag::Registry && !host.registry_available() {
        return Err(ProbeError::RegistryUnsupported);
    }

    let probe = Probe::from_tagged(tag, body)?;
    execute_probe(&probe, host)
}

/// Run an already parsed probe
pub fn execute_probe<H: HostProbe + ?Sized>(probe: &Probe, host: &H) -> Result<String, ProbeError> {
    match probe {
        Probe::Registry(query) => host.read_registry(query),
        Probe::File { path } => {
            let value = if host.path_exists(Path::new(path)) {
                FILE_EXISTS
            } else {
                FILE_MISSING
            };
            Ok(value.to_string())
        },
        Probe::Command { command } => host.run_command(command),
    }
}
