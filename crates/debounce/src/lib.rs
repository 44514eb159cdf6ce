//! Value debouncing for UI-style update loops
//!
//! This crate provides a single-cell debouncer:
//! - Delayed copy of a changing value (default 300ms)
//! - One pending commit per instance, re-armed on every change
//! - Guaranteed cancellation on drop
//! - Commit notifications over a `tokio::sync::watch` channel

pub mod config;
pub mod debounce;

// Re-exports
pub use config::{DebounceConfig, DEFAULT_DELAY_MS};
pub use debounce::Debounced;
