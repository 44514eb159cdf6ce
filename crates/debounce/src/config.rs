//! Debounce delay configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delay used when none is configured
pub const DEFAULT_DELAY_MS: u64 = 300;

/// Debounce configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebounceConfig {
    /// Quiet period before a value is committed (default: 300ms)
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl DebounceConfig {
    /// Create a config with the given delay in milliseconds
    pub fn from_millis(delay_ms: u64) -> Self {
        Self { delay_ms }
    }

    /// Create a config from a signed delay, clamping negatives to zero
    pub fn from_millis_signed(delay_ms: i64) -> Self {
        Self {
            delay_ms: delay_ms.max(0) as u64,
        }
    }

    /// Delay as a `Duration`
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
