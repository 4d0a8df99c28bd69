//! Search configuration.
//!
//! Consumers typically deserialize this from their settings store and
//! convert it into the per-layer configuration values at wiring time.

use std::time::Duration;

use serde::Deserialize;

use etour_remote::{GatewayConfig, RetryPolicy};

/// Tunables for the whole search stack.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Upper bound on one remote call, in milliseconds.
    pub deadline_ms: u64,
    /// Ceiling on repository attempts per search.
    pub max_attempts: u32,
    /// First backoff delay, in milliseconds.
    pub base_delay_ms: u64,
    /// Backoff cap, in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            deadline_ms: 5_000,
            max_attempts: 3,
            base_delay_ms: 250,
            max_delay_ms: 5_000,
        }
    }
}

impl SearchConfig {
    /// The per-call deadline as a duration.
    pub fn deadline(&self) -> Duration {
        Duration::from_millis(self.deadline_ms)
    }

    /// Gateway configuration derived from these settings.
    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig {
            deadline: self.deadline(),
        }
    }

    /// Retry policy derived from these settings.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            Duration::from_millis(self.base_delay_ms),
            Duration::from_millis(self.max_delay_ms),
        )
    }
}
