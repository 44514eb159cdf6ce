//! Report error types

use std::path::PathBuf;
use thiserror::Error;

/// Report operation error
#[derive(Debug, Error)]
pub enum ReportError {
    /// The logo file is missing, unreadable, or not a regular file
    #[error("Cannot access logo file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be read
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for `ReportConfig`
    #[error("Invalid config file: {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
