//! Logo file size measurement

use crate::{ReportError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Size of one file measured against a threshold
#[derive(Debug, Clone, PartialEq)]
pub struct SizeReport {
    /// Measured file
    pub path: PathBuf,
    /// Size on disk
    pub size_bytes: u64,
    /// Size in mebibytes (unrounded)
    pub size_mb: f64,
    /// Threshold the size was compared against
    pub threshold_bytes: u64,
    /// `size_bytes > threshold_bytes`
    pub over_threshold: bool,
}

impl SizeReport {
    /// Read the size of `path` and compare it to `threshold_bytes`
    ///
    /// Fails with [`ReportError::FileAccess`] if the file is missing,
    /// unreadable, or not a regular file.
    pub fn measure(path: &Path, threshold_bytes: u64) -> Result<Self> {
        let metadata = fs::metadata(path).map_err(|source| ReportError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        if !metadata.is_file() {
            return Err(ReportError::FileAccess {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
            });
        }

        let report = Self::from_size(path, metadata.len(), threshold_bytes);
        debug!(
            path = %report.path.display(),
            size_bytes = report.size_bytes,
            over_threshold = report.over_threshold,
            "Measured logo"
        );
        Ok(report)
    }

    /// Build a report from an already known size
    pub fn from_size(path: &Path, size_bytes: u64, threshold_bytes: u64) -> Self {
        Self {
            path: path.to_path_buf(),
            size_bytes,
            size_mb: bytes_to_mb(size_bytes),
            threshold_bytes,
            over_threshold: size_bytes > threshold_bytes,
        }
    }

    /// Estimated reduction for this file, see [`estimated_reduction_percent`]
    pub fn estimated_reduction_percent(&self) -> f64 {
        estimated_reduction_percent(self.size_bytes)
    }
}

/// Convert bytes to mebibytes
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// Display heuristic for the size reduction a re-export would give
///
/// Evaluates `(1 - 100 / size_bytes * 1024) * 100` left to right. The
/// result is negative just above 102400 bytes and not finite at zero; it
/// is only shown for files over the threshold.
pub fn estimated_reduction_percent(size_bytes: u64) -> f64 {
    (1.0 - 100.0 / size_bytes as f64 * 1024.0) * 100.0
}
