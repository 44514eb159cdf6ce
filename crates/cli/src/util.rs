//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Find the project root by walking up from cwd to the directory holding
/// the logo's parent directory (`public/images/brand` by default)
pub fn find_project_root(logo_path: &Path) -> Result<PathBuf> {
    let current = std::env::current_dir().context("Failed to get current directory")?;
    find_project_root_from(&current, logo_path)
}

/// Walk up from `start` to the first ancestor containing the logo's parent
/// directory
///
/// An absolute `logo_path` ignores the root, so `start` is returned as is.
pub fn find_project_root_from(start: &Path, logo_path: &Path) -> Result<PathBuf> {
    if logo_path.is_absolute() {
        return Ok(start.to_path_buf());
    }

    let marker = logo_path.parent().unwrap_or_else(|| Path::new(""));
    for dir in start.ancestors() {
        if dir.join(marker).is_dir() {
            return Ok(dir.to_path_buf());
        }
    }

    anyhow::bail!(
        "Not a lambari project (no {} directory found above {})",
        marker.display(),
        start.display()
    )
}
