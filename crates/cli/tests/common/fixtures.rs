//! Temporary project layouts with a logo of a chosen size

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Relative logo location used by the report
pub const LOGO_PATH: &str = "public/images/brand/lambari-logo.png";

/// A throwaway project root
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// Empty project (no logo)
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Project whose logo is `size_bytes` long
    pub fn with_logo(size_bytes: usize) -> Self {
        let project = Self::empty();
        project.write_file(LOGO_PATH, &vec![0u8; size_bytes]);
        project
    }

    /// Project root
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the root, creating parent directories
    pub fn write_file(&self, relative: &str, content: &[u8]) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }
}
