//! Local host adapter
//!
//! - [`command`] - Shell invocation
//! - [`registry`] - Windows registry reads (unsupported elsewhere)

pub mod command;
pub mod registry;

use std::path::Path;

use crate::core::models::{ProbeError, RegistryQuery};
use crate::core::ports::HostProbe;

/// [`HostProbe`] backed by the machine the process runs on
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl SystemHost {
    /// Create a handle to the local host
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl HostProbe for SystemHost {
    fn registry_available(&self) -> bool {
        registry::AVAILABLE
    }

    fn read_registry(&self, query: &RegistryQuery) -> Result<String, ProbeError> {
        registry::read_value(query)
    }

    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn run_command(&self, command: &str) -> Result<String, ProbeError> {
        command::run_shell(command)
    }
}
