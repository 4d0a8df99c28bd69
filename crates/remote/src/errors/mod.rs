//! Failure taxonomy and retry classification for remote search calls.
//!
//! This module provides:
//! - [`SearchErrorKind`]: the closed set of failure categories
//! - [`SearchError`]: the carried error value (kind, operation, attempts, cause chain)
//! - [`RetryPolicy`]: the pure retry decision applied by the service layer

mod retry;

pub use retry::RetryPolicy;

use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::models::InvalidQuery;

type BoxedCause = Box<dyn StdError + Send + Sync + 'static>;

/// The closed set of failure categories for a search call.
///
/// Every failure that crosses a layer boundary carries exactly one of
/// these kinds, so consumers can exhaustively match on it. Each category
/// is produced by the first layer able to detect it:
///
/// | Kind | Produced by |
/// |------|-------------|
/// | `Timeout` | BoundedExecutor |
/// | `ConnectionInterrupted` | Gateway |
/// | `Cancelled` | BoundedExecutor / caller |
/// | `Validation` | Service (pre-flight) |
/// | `Decode` | Repository |
/// | `Unknown` | any layer, as fallback |
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SearchErrorKind {
    /// The deadline elapsed before the worker completed.
    Timeout,

    /// The remote endpoint was unreachable or dropped the call mid-transfer.
    ConnectionInterrupted,

    /// The caller withdrew the request.
    Cancelled,

    /// The query failed precondition checks before any remote call.
    Validation,

    /// The raw response could not be parsed into domain objects.
    Decode,

    /// Anything not otherwise classifiable.
    Unknown,
}

impl SearchErrorKind {
    /// Whether a failure of this kind is worth another attempt.
    ///
    /// Pure function of the category: only transient conditions
    /// (`Timeout`, `ConnectionInterrupted`) are retryable. `Unknown` is
    /// conservatively not retryable.
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::Timeout | Self::ConnectionInterrupted)
    }

    /// Stable lowercase name, used in log output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::ConnectionInterrupted => "connection interrupted",
            Self::Cancelled => "cancelled",
            Self::Validation => "validation",
            Self::Decode => "decode",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SearchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified failure from a search call.
///
/// Carries the category, the operation it occurred in, how many attempts
/// the service has made so far, an optional chained cause, and the
/// errors of earlier suppressed attempts. Exactly one `SearchError` or
/// one success value is produced per call, never both.
///
/// Construction is restricted to the layer that first detects a
/// condition; everything above it forwards the value unchanged. The
/// service retry loop is the only place [`with_attempts`](Self::with_attempts)
/// and [`with_suppressed`](Self::with_suppressed) are applied.
#[derive(Error, Debug)]
#[error("{kind} during {operation}: {message}")]
pub struct SearchError {
    kind: SearchErrorKind,
    operation: String,
    message: String,
    attempts: u32,
    #[source]
    source: Option<BoxedCause>,
    suppressed: Vec<SearchError>,
}

impl SearchError {
    fn new(
        kind: SearchErrorKind,
        operation: impl Into<String>,
        message: impl Into<String>,
        attempts: u32,
        source: Option<BoxedCause>,
    ) -> Self {
        Self {
            kind,
            operation: operation.into(),
            message: message.into(),
            attempts,
            source,
            suppressed: Vec::new(),
        }
    }

    /// The deadline elapsed before the worker completed.
    pub fn timeout(operation: impl Into<String>, limit: Duration) -> Self {
        Self::new(
            SearchErrorKind::Timeout,
            operation,
            format!("deadline of {limit:?} elapsed"),
            1,
            None,
        )
    }

    /// The connection to the remote endpoint failed or was dropped.
    pub fn connection_interrupted(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::new(
            SearchErrorKind::ConnectionInterrupted,
            operation,
            "connection to the remote backend was interrupted",
            1,
            Some(Box::new(source)),
        )
    }

    /// The caller withdrew the request.
    pub fn cancelled(operation: impl Into<String>) -> Self {
        Self::new(
            SearchErrorKind::Cancelled,
            operation,
            "the caller cancelled the request",
            1,
            None,
        )
    }

    /// The query failed pre-flight validation; no remote call was made.
    pub fn validation(operation: impl Into<String>, source: InvalidQuery) -> Self {
        Self::new(
            SearchErrorKind::Validation,
            operation,
            source.to_string(),
            0,
            Some(Box::new(source)),
        )
    }

    /// The raw response body could not be decoded.
    pub fn decode(operation: impl Into<String>, source: serde_json::Error) -> Self {
        Self::new(
            SearchErrorKind::Decode,
            operation,
            "the response body could not be decoded",
            1,
            Some(Box::new(source)),
        )
    }

    /// Fallback for failures outside the defined categories.
    pub fn unknown(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: Option<BoxedCause>,
    ) -> Self {
        Self::new(SearchErrorKind::Unknown, operation, message, 1, source)
    }

    /// The failure category.
    pub fn kind(&self) -> SearchErrorKind {
        self.kind
    }

    /// The operation this failure occurred in.
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// How many attempts the service had made when this became terminal.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Whether the category is worth another attempt. See
    /// [`SearchErrorKind::is_retryable`].
    pub fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }

    /// Errors from earlier attempts, kept for diagnosability.
    pub fn suppressed(&self) -> &[SearchError] {
        &self.suppressed
    }

    /// Record the attempt count at which this failure occurred.
    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    /// Attach the errors of earlier, suppressed attempts.
    ///
    /// The last failure wins; earlier ones stay inspectable here rather
    /// than being discarded.
    pub fn with_suppressed(mut self, earlier: Vec<SearchError>) -> Self {
        self.suppressed.extend(earlier);
        self
    }

    /// Short user-facing message with no internal detail.
    ///
    /// One of only two ways a presentation layer may render a failure,
    /// the other being [`log_message`](Self::log_message).
    pub fn user_message(&self) -> &'static str {
        match self.kind {
            SearchErrorKind::Timeout => "The search took too long to complete. Please try again.",
            SearchErrorKind::ConnectionInterrupted => {
                "Unable to reach the eTour server. Check your connection and try again."
            }
            SearchErrorKind::Cancelled => "The search was cancelled.",
            SearchErrorKind::Validation => {
                "The search form contains invalid fields. Correct them and retry."
            }
            SearchErrorKind::Decode => {
                "The server returned an unexpected response. Please try again later."
            }
            SearchErrorKind::Unknown => {
                "Something went wrong while searching. Please try again later."
            }
        }
    }

    /// Terse operator message: category, operation, attempt count, and
    /// the full cause chain.
    pub fn log_message(&self) -> String {
        let mut message = format!(
            "{} in '{}' after {} attempt(s): {}",
            self.kind, self.operation, self.attempts, self.message
        );
        let mut cause = self.source();
        while let Some(inner) = cause {
            message.push_str("; caused by: ");
            message.push_str(&inner.to_string());
            cause = inner.source();
        }
        if !self.suppressed.is_empty() {
            message.push_str(&format!(
                "; {} earlier attempt(s) suppressed",
                self.suppressed.len()
            ));
        }
        message
    }
}
