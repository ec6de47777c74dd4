//! SCA policy file loading
//!
//! Reads Wazuh-style `.yml` policy files into ordered [`Rule`](crate::core::models::Rule) lists.
//!
//! - [`parser`] - Deserialize a single policy file
//! - [`loader`] - Find and merge policy files from a directory

pub mod loader;
pub mod parser;

pub use loader::{LoadError, find_rule_files, load_all_rules};
pub use parser::{CheckEntry, PolicyBlock, RequirementsBlock, ScaFile, load_file, parse_str};
