//! Pure retry decision for classified search failures.

use std::time::Duration;

use super::SearchErrorKind;

/// Retry decision for the service layer's attempt loop.
///
/// Stateless and free of I/O, so it is unit-testable without any
/// executor or network simulation. The policy answers two questions:
///
/// | Question | Answer |
/// |----------|--------|
/// | Retry after this failure? | `kind.is_retryable() && attempt < max_attempts` |
/// | How long to wait first? | `base_delay * 2^(attempt - 1)`, capped at `max_delay` |
///
/// Retrying is a service-level decision; no layer below the service
/// consults this policy.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RetryPolicy {
    base_delay: Duration,
    max_delay: Duration,
}

impl RetryPolicy {
    /// Create a policy with the given first delay and backoff cap.
    pub fn new(base_delay: Duration, max_delay: Duration) -> Self {
        Self {
            base_delay,
            max_delay,
        }
    }

    /// Whether attempt `attempt` (1-based) should be followed by another.
    pub fn should_retry(self, kind: SearchErrorKind, attempt: u32, max_attempts: u32) -> bool {
        kind.is_retryable() && attempt < max_attempts
    }

    /// The backoff delay after attempt `attempt` (1-based).
    ///
    /// Exponential and monotonically non-decreasing; saturates at the
    /// configured cap instead of overflowing.
    pub fn delay(self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1);
        let scaled = 1u32
            .checked_shl(exponent)
            .and_then(|factor| self.base_delay.checked_mul(factor));
        match scaled {
            Some(delay) => delay.min(self.max_delay),
            None => self.max_delay,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            base_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(5),
        }
    }
}
