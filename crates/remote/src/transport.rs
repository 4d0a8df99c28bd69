//! Raw transport abstraction for the remote backend.

use std::io;

/// The injected primitive that actually talks to the remote system.
///
/// `send` blocks until the backend answers or the connection fails;
/// connection-level problems (refused, dropped mid-transfer, name
/// resolution) surface as [`io::Error`]. The gateway is the only layer
/// that looks at these errors, classifying them as
/// `ConnectionInterrupted` with the original chained as cause.
///
/// Implementations must be idempotent from the caller's point of view:
/// one `send` per gateway call, no shared state mutated.
pub trait SearchTransport: Send + Sync {
    /// Deliver an encoded query payload and return the raw response body.
    fn send(&self, payload: &str) -> io::Result<String>;
}

/// Closures double as transports, which keeps test doubles terse.
impl<F> SearchTransport for F
where
    F: Fn(&str) -> io::Result<String> + Send + Sync,
{
    fn send(&self, payload: &str) -> io::Result<String> {
        self(payload)
    }
}
