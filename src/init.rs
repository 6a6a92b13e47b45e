//!
//! Creation of new style files from the built-in default.

use crate::style::StyleError;
use std::fs;
use std::path::Path;

/// The built-in default style: everything on, four exclusions, and two-space
/// unordered list indentation.
pub const DEFAULT_STYLE: &str = include_str!("../styles/default.rb");

/// Write the default style to `path`.
///
/// Returns `true` if the file was written, or `false` if it already exists
/// and `force` was not set.
pub fn create_default_style(path: impl AsRef<Path>, force: bool) -> Result<bool, StyleError> {
    let path = path.as_ref();
    if path.exists() && !force {
        return Ok(false);
    }
    fs::write(path, DEFAULT_STYLE).map_err(|source| StyleError::Write {
        path: path.display().to_string(),
        source,
    })?;
    Ok(true)
}
