//! Host access port
//!
//! Defines the primitive lookups the probe backends need.

use std::path::Path;

use crate::core::models::{ProbeError, RegistryQuery};

/// Read-only access to the state of the audited host
pub trait HostProbe {
    /// Whether this host exposes a Windows-style registry
    fn registry_available(&self) -> bool;

    /// Read one registry value and render it as a string
    ///
    /// Key handles must not outlive the call.
    fn read_registry(&self, query: &RegistryQuery) -> Result<String, ProbeError>;

    /// Whether a filesystem path exists
    fn path_exists(&self, path: &Path) -> bool;

    /// Run a command through the platform shell and return its stdout,
    /// trailing whitespace trimmed
    fn run_command(&self, command: &str) -> Result<String, ProbeError>;
}

impl<T: HostProbe + ?Sized> HostProbe for &T {
    fn registry_available(&self) -> bool {
        (**self).registry_available()
    }

    fn read_registry(&self, query: &RegistryQuery) -> Result<String, ProbeError> {
        (**self).read_registry(query)
    }

    fn path_exists(&self, path: &Path) -> bool {
        (**self).path_exists(path)
    }

    fn run_command(&self, command: &str) -> Result<String, ProbeError> {
        (**self).run_command(command)
    }
}
