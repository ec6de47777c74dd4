//! Report writers
//!
//! - [`json`] - Machine-readable scan report
//! - [`html`] - Standalone HTML page
//!
//! Both take the same [`ReportMeta`] describing the scanned host.

pub mod html;
pub mod json;

use std::fs;
use std::path::Path;

pub use html::{render_html, write_html_report};
pub use json::{JsonReport, write_json_report};

/// Host-level metadata shown in reports
#[derive(Debug, Clone, Default)]
pub struct ReportMeta {
    /// Host name
    pub host: String,
    /// Operating system label
    pub os: String,
    /// Benchmark name, may be empty
    pub benchmark: String,
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
