//! YAML parser for SCA policy files
//!
//! A policy file has three top-level blocks:
//!
//! ```yaml
//! policy:
//!   id: cis_win11
//!   name: CIS Microsoft Windows 11 Benchmark
//! requirements:
//!   title: Check that the host is Windows 11
//!   condition: any
//!   rules: ['r:HKLM\SOFTWARE\Microsoft\Windows NT\CurrentVersion -> ProductName -> regex:^windows 11']
//! checks:
//!   - id: 26000
//!     title: Ensure 'Enforce password history' is set to '24 or more password(s)'
//!     compliance:
//!       - cis: ["1.1.1"]
//!     condition: all
//!     rules:
//!       - 'r:HKLM\SYSTEM\CurrentControlSet\Services\Netlogon\Parameters -> MaximumPasswordAge -> regex:^\d+'
//! ```
//!
//! Only `checks` is turned into rules; the other blocks are parsed for
//! completeness and otherwise ignored.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_yaml::Value;

use super::LoadError;
use crate::core::models::{Compliance, Rule};

/// A parsed policy file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScaFile {
    /// `policy:` block
    pub policy: PolicyBlock,
    /// `requirements:` block
    pub requirements: RequirementsBlock,
    /// `checks:` list
    pub checks: Vec<CheckEntry>,
}

/// The `policy:` block
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PolicyBlock {
    /// Policy identifier
    pub id: String,
    /// Source file name
    pub file: String,
    /// Display name
    pub name: String,
    /// Description
    pub description: String,
    /// External references
    pub references: Vec<String>,
}

/// The `requirements:` block
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RequirementsBlock {
    /// Title
    pub title: String,
    /// Description
    pub description: String,
    /// Condition policy
    pub condition: String,
    /// Probe expressions
    pub rules: Vec<String>,
}

impl Default for RequirementsBlock {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            condition: default_condition(),
            rules: Vec::new(),
        }
    }
}

/// One entry of the `checks:` list
#[derive(Debug, Deserialize)]
pub struct CheckEntry {
    /// Numeric identifier
    #[serde(default)]
    pub id: i64,
    /// Title
    #[serde(default)]
    pub title: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Rationale
    #[serde(default)]
    pub rationale: String,
    /// Remediation
    #[serde(default)]
    pub remediation: String,
    /// Control ids may be written as strings or bare numbers
    #[serde(default)]
    pub compliance: Vec<BTreeMap<String, Vec<Value>>>,
    /// References
    #[serde(default)]
    pub references: Vec<String>,
    /// Condition policy
    #[serde(default = "default_condition")]
    pub condition: String,
    /// Probe expressions
    #[serde(default)]
    pub rules: Vec<String>,
}

fn default_condition() -> String {
    "all".to_string()
}

impl From<CheckEntry> for Rule {
    fn from(entry: CheckEntry) -> Self {
        Self {
            id: entry.id,
            title: entry.title,
            description: entry.description,
            rationale: entry.rationale,
            remediation: entry.remediation,
            compliance: stringify_compliance(entry.compliance),
            references: entry.references,
            condition: entry.condition,
            rules: entry.rules,
        }
    }
}

fn stringify_compliance(raw: Vec<BTreeMap<String, Vec<Value>>>) -> Compliance {
    raw.into_iter()
        .map(|mapping| {
            mapping
                .into_iter()
                .map(|(framework, ids)| (framework, ids.iter().map(control_id).collect()))
                .collect()
        })
        .collect()
}

fn control_id(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => serde_yaml::to_string(other).unwrap_or_default().trim_end().to_string(),
    }
}

impl ScaFile {
    /// Convert the `checks:` list into rules, in file order
    #[must_use]
    pub fn into_rules(self) -> Vec<Rule> {
        self.checks.into_iter().map(Rule::from).collect()
    }
}

/// Parse policy YAML from a string
///
/// An empty document yields an empty policy.
pub fn parse_str(content: &str) -> Result<ScaFile, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(ScaFile::default());
    }
    serde_yaml::from_str(content)
}

/// Load a policy file from disk
pub fn load_file(path: &Path) -> Result<ScaFile, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&content).map_err(|source| LoadError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}
