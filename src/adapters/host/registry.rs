//! Windows registry reads
//!
//! On Windows values are read through `winreg`; the key handle is dropped
//! before [`read_value`] returns on every path. Other platforms report
//! [`ProbeError::RegistryUnsupported`].

use crate::core::models::{ProbeError, RegistryQuery};

/// Whether registry probes can run on this build
pub const AVAILABLE: bool = cfg!(windows);

/// Read the value described by `query` as a string
#[cfg(windows)]
pub fn read_value(query: &RegistryQuery) -> Result<String, ProbeError> {
    use winreg::RegKey;
    use winreg::enums::{HKEY_CLASSES_ROOT, HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE, HKEY_USERS};

    use crate::core::models::Hive;

    let root = RegKey::predef(match query.hive {
        Hive::LocalMachine => HKEY_LOCAL_MACHINE,
        Hive::CurrentUser => HKEY_CURRENT_USER,
        Hive::Users => HKEY_USERS,
        Hive::ClassesRoot => HKEY_CLASSES_ROOT,
    });

    let key = root
        .open_subkey(&query.subkey)
        .map_err(|e| ProbeError::Registry(format!("{}\\{}: {e}", query.hive, query.subkey)))?;

    let name = query.value_name.as_deref().unwrap_or("");
    let value = key
        .get_raw_value(name)
        .map_err(|e| ProbeError::Registry(format!("value '{name}': {e}")))?;

    Ok(value.to_string())
}

/// Read the value described by `query` as a string
#[cfg(not(windows))]
pub fn read_value(_query: &RegistryQuery) -> Result<String, ProbeError> {
    Err(ProbeError::RegistryUnsupported)
}
