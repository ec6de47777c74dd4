//! Scan configuration
//!
//! Settings come from an optional TOML file, looked up in this order:
//!
//! 1. An explicit `--config <path>`
//! 2. `hostaudit.toml` in the current directory
//! 3. `~/.config/hostaudit/config.toml` (platform config dir)
//!
//! Command-line flags override whatever the file sets.
//!
//! ```toml
//! [scan]
//! rules_dir = "./rules/windows"
//!
//! [report]
//! json = "./output/scan.json"
//! html = "./output/report.html"
//! host = "web-01"
//! os = "Windows 11"
//! benchmark = "CIS Microsoft Windows 11 Enterprise"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file name looked up in the working directory
pub const CONFIG_FILE: &str = "hostaudit.toml";

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("cannot read config {path}: {source}")]
    Read {
        /// Config path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Config path
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Scan settings
    #[serde(default)]
    pub scan: ScanConfig,
    /// Report settings
    #[serde(default)]
    pub report: ReportConfig,
}

/// Where rules come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Directory holding `.yml` policy files
    #[serde(default = "default_rules_dir")]
    pub rules_dir: PathBuf,
}

fn default_rules_dir() -> PathBuf {
    PathBuf::from("./rules")
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            rules_dir: default_rules_dir(),
        }
    }
}

/// Where reports go and what they say about the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// JSON report path
    pub json: PathBuf,
    /// HTML report path
    pub html: PathBuf,
    /// Host name shown in reports
    pub host: String,
    /// OS label shown in reports
    pub os: String,
    /// Benchmark name shown in reports
    pub benchmark: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            json: PathBuf::from("./output/scan.json"),
            html: PathBuf::from("./output/report.html"),
            host: default_host(),
            os: std::env::consts::OS.to_string(),
            benchmark: String::new(),
        }
    }
}

fn default_host() -> String {
    ["HOSTNAME", "COMPUTERNAME"]
        .into_iter()
        .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()))
        .unwrap_or_else(|| "localhost".to_string())
}

impl Config {
    /// Per-user config file path
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hostaudit").join("config.toml"))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration, falling back to defaults when no file exists
    ///
    /// An explicit path must exist; the implicit locations are optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let candidates = std::iter::once(PathBuf::from(CONFIG_FILE)).chain(Self::user_config_path());
        for path in candidates {
            if path.is_file() {
                debug!("Using config {}", path.display());
                return Self::load_from(&path);
            }
        }

        Ok(Self::default())
    }
}
