//! Registry hives

use super::ProbeError;

/// A predefined registry root key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hive {
    /// `HKEY_LOCAL_MACHINE` (`HKLM`)
    LocalMachine,
    /// `HKEY_CURRENT_USER` (`HKCU`)
    CurrentUser,
    /// `HKEY_USERS` (`HKU`)
    Users,
    /// `HKEY_CLASSES_ROOT` (`HKCR`)
    ClassesRoot,
}

impl std::fmt::Display for Hive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LocalMachine => write!(f, "HKEY_LOCAL_MACHINE"),
            Self::CurrentUser => write!(f, "HKEY_CURRENT_USER"),
            Self::Users => write!(f, "HKEY_USERS"),
            Self::ClassesRoot => write!(f, "HKEY_CLASSES_ROOT"),
        }
    }
}

impl std::str::FromStr for Hive {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "HKLM" | "HKEY_LOCAL_MACHINE" => Ok(Self::LocalMachine),
            "HKCU" | "HKEY_CURRENT_USER" => Ok(Self::CurrentUser),
            "HKU" | "HKEY_USERS" => Ok(Self::Users),
            "HKCR" | "HKEY_CLASSES_ROOT" => Ok(Self::ClassesRoot),
            _ => Err(ProbeError::UnsupportedHive(s.to_string())),
        }
    }
}
