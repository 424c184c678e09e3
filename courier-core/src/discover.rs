//! Template discovery.
//!
//! Discovery runs fresh on every emission; results are never cached across
//! builds. Paths come back sorted so downstream ordering is deterministic.

use std::path::PathBuf;

use crate::config::EmitConfig;
use crate::error::ConfigError;

/// Enumerate all template files under the configured input root.
///
/// Matches `{input_root}/**/*.{template_extension}` recursively. Unreadable
/// directory entries are skipped.
pub fn discover_templates(config: &EmitConfig) -> Result<Vec<PathBuf>, ConfigError> {
    let pattern = format!(
        "{}/**/*.{}",
        config.input_root(),
        config.template_extension()
    );
    let mut files: Vec<PathBuf> = glob::glob(&pattern)?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    Ok(files)
}
