//! Logo size measurement for the lambari brand assets
//!
//! This crate provides:
//! - File size measurement against a byte threshold
//! - The estimated-reduction heuristic shown in the report
//! - TOML configuration for the logo path and threshold

pub mod config;
pub mod error;
pub mod size;

// Re-exports
pub use config::{ReportConfig, DEFAULT_LOGO_PATH, DEFAULT_THRESHOLD_BYTES};
pub use error::ReportError;
pub use size::{bytes_to_mb, estimated_reduction_percent, SizeReport};

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;
