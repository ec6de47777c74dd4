//! Probe expressions
//!
//! A probe expression is a single string describing one host-state check,
//! optionally followed by an expectation marker:
//!
//! ```text
//! r:<hive>\<subkey> -> <value-name> [-> <extra>]*
//! f:<path> -> exists | missing | regex:<pattern>
//! cmd:<shell text> [-> exists | missing | regex:<pattern>]
//! ```
//!
//! Expressions are trimmed and lowercased as a whole before they are parsed,
//! embedded paths and command text included.
//!
//! # Examples
//!
//! ```
//! use hostaudit::core::models::{Hive, Probe};
//!
//! let probe = Probe::parse(r"r:HKLM\Software\Policies -> NoAutorun").unwrap();
//! match probe {
//!     Probe::Registry(query) => {
//!         assert_eq!(query.hive, Hive::LocalMachine);
//!         assert_eq!(query.subkey, r"software\policies");
//!         assert_eq!(query.value_name.as_deref(), Some("noautorun"));
//!     },
//!     _ => unreachable!(),
//! }
//! ```

use super::{Hive, ProbeError};

/// Value reported by the file backend when the path exists
pub const FILE_EXISTS: &str = "exists";

/// Value reported by the file backend when the path does not exist
pub const FILE_MISSING: &str = "missing";

const SEPARATOR: &str = "->";

/// Backend selected by an expression's prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeTag {
    /// `r:` - registry value lookup
    Registry,
    /// `f:` - file existence
    File,
    /// `cmd:` - shell command output
    Command,
}

impl ProbeTag {
    /// The literal prefix for this tag
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Registry => "r:",
            Self::File => "f:",
            Self::Command => "cmd:",
        }
    }

    /// Split a normalized expression into its tag and body
    pub fn split(expression: &str) -> Result<(Self, &str), ProbeError> {
        [Self::Registry, Self::File, Self::Command]
            .into_iter()
            .find_map(|tag| expression.strip_prefix(tag.prefix()).map(|body| (tag, body)))
            .ok_or_else(|| ProbeError::UnknownPrefix(expression.to_string()))
    }
}

/// A registry value to read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryQuery {
    /// Root key
    pub hive: Hive,
    /// Path below the hive, backslash separated (may be empty)
    pub subkey: String,
    /// Value name; `None` reads the key's default value
    pub value_name: Option<String>,
}

impl RegistryQuery {
    /// Parse the body of an `r:` expression
    ///
    /// Only the first two `->` segments are consumed. Anything after them is
    /// left for the evaluator.
    pub fn parse(body: &str) -> Result<Self, ProbeError> {
        let mut parts = body.trim().split(SEPARATOR);
        let reg_path = parts.next().unwrap_or_default().trim();
        let value_name = parts.next().ok_or(ProbeError::MissingSeparator)?.trim();

        let (hive, subkey) = reg_path.split_once('\\').unwrap_or((reg_path, ""));

        Ok(Self {
            hive: hive.parse()?,
            subkey: subkey.to_string(),
            value_name: (!value_name.is_empty()).then(|| value_name.to_string()),
        })
    }
}

/// A parsed probe, ready to run against a host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    /// Read a registry value
    Registry(RegistryQuery),
    /// Check whether a path exists
    File {
        /// Filesystem path (already case-folded)
        path: String,
    },
    /// Run a shell command and capture stdout
    Command {
        /// Command text handed to the shell
        command: String,
    },
}

impl Probe {
    /// Trim and lowercase an expression the way every probe sees it
    #[must_use]
    pub fn normalize(expression: &str) -> String {
        expression.trim().to_lowercase()
    }

    /// Normalize and parse a full expression
    pub fn parse(expression: &str) -> Result<Self, ProbeError> {
        let normalized = Self::normalize(expression);
        let (tag, body) = ProbeTag::split(&normalized)?;
        Self::from_tagged(tag, body)
    }

    /// Build a probe from an already split tag and body
    pub fn from_tagged(tag: ProbeTag, body: &str) -> Result<Self, ProbeError> {
        let body = body.trim();
        match tag {
            ProbeTag::Registry => RegistryQuery::parse(body).map(Self::Registry),
            ProbeTag::File => {
                let path = body.split(SEPARATOR).next().unwrap_or_default().trim();
                Ok(Self::File {
                    path: path.to_string(),
                })
            },
            ProbeTag::Command => {
                let (command, _) = split_expectation(body);
                Ok(Self::Command {
                    command: command.to_string(),
                })
            },
        }
    }

    /// The tag this probe was parsed from
    #[must_use]
    pub const fn tag(&self) -> ProbeTag {
        match self {
            Self::Registry(_) => ProbeTag::Registry,
            Self::File { .. } => ProbeTag::File,
            Self::Command { .. } => ProbeTag::Command,
        }
    }
}

/// Split a trailing expectation marker off an expression body
///
/// Returns the body before the marker and the marker text after `->`
/// (`exists`, `missing` or `regex:<pattern>`). Bodies without a marker are
/// returned whole.
#[must_use]
pub fn split_expectation(body: &str) -> (&str, Option<&str>) {
    for (idx, _) in body.match_indices(SEPARATOR) {
        let tail = body[idx + SEPARATOR.len()..].trim();
        if tail == FILE_EXISTS || tail == FILE_MISSING || tail.starts_with("regex:") {
            return (body[..idx].trim_end(), Some(tail));
        }
    }
    (body, None)
}
