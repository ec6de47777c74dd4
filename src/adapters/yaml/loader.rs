//! Policy directory loader

use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

use super::load_file;
use crate::core::models::Rule;

/// File extensions recognised as policy files
const EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// Errors that can occur while loading rules
#[derive(Debug, Error)]
pub enum LoadError {
    /// The rules directory holds no policy files
    #[error("no .yml files found in {0}")]
    NoRuleFiles(PathBuf),

    /// Directory path could not be turned into a glob
    #[error("invalid rules directory pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// A directory entry could not be read
    #[error("cannot read rules directory entry: {0}")]
    Glob(#[from] glob::GlobError),

    /// A policy file could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// A policy file is not valid SCA YAML
    #[error("invalid policy file {path}: {source}")]
    Yaml {
        /// File being parsed
        path: PathBuf,
        /// Underlying error
        source: serde_yaml::Error,
    },
}

/// List the policy files directly inside `dir`, sorted by path
pub fn find_rule_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let mut files = Vec::new();

    for ext in EXTENSIONS {
        for entry in glob::glob(&format!("{escaped}/*.{ext}"))? {
            files.push(entry?);
        }
    }

    files.sort();
    Ok(files)
}

/// Load and concatenate the checks of every policy file in `dir`
///
/// Files are read in path order; checks keep their order within a file.
pub fn load_all_rules(dir: &Path) -> Result<Vec<Rule>, LoadError> {
    let files = find_rule_files(dir)?;
    if files.is_empty() {
        return Err(LoadError::NoRuleFiles(dir.to_path_buf()));
    }

    let mut rules = Vec::new();
    for path in &files {
        let sca = load_file(path)?;
        debug!("{}: {} check(s) from policy '{}'", path.display(), sca.checks.len(), sca.policy.id);
        rules.extend(sca.into_rules());
    }

    info!("Loaded {} rule(s) from {} file(s) in {}", rules.len(), files.len(), dir.display());
    Ok(rules)
}
