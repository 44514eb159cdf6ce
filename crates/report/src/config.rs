//! Report configuration

use crate::{ReportError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Logo location, relative to the project root
pub const DEFAULT_LOGO_PATH: &str = "public/images/brand/lambari-logo.png";

/// Sizes above this many bytes get the optimization advice
pub const DEFAULT_THRESHOLD_BYTES: u64 = 100_000;

/// Report configuration
///
/// Every field is optional in the TOML form:
///
/// ```toml
/// logo_path = "public/images/brand/lambari-logo.png"
/// threshold_bytes = 100000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Logo path, relative to the project root unless absolute
    pub logo_path: PathBuf,
    /// Byte threshold for the "too large" branch (default: 100000)
    pub threshold_bytes: u64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            logo_path: PathBuf::from(DEFAULT_LOGO_PATH),
            threshold_bytes: DEFAULT_THRESHOLD_BYTES,
        }
    }
}

impl ReportConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ReportError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ReportError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the logo path against the project root
    pub fn logo_path_in(&self, root: &Path) -> PathBuf {
        root.join(&self.logo_path)
    }
}
