//! Bounded execution of blocking remote work.
//!
//! The transport primitive blocks at the call boundary, so every
//! in-flight call gets its own worker on the tokio blocking pool while
//! the caller awaits completion, the deadline, or an external
//! cancellation signal, whichever comes first. The pool is the only
//! shared mutable resource and accepts concurrent submission from any
//! number of simultaneous callers.
//!
//! Cancellation is cooperative and best-effort: on an elapsed deadline
//! or an external cancel the worker is signalled and the call returns
//! immediately without waiting for the worker to stop. A late result
//! from a signalled worker is discarded, so each call produces exactly
//! one outcome.

use std::time::Duration;

use log::debug;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::errors::SearchError;

/// Time bound for a single [`BoundedExecutor::execute`] call.
///
/// Exists only for the lifetime of one call; never persisted or shared
/// across calls.
#[derive(Clone, Copy, Debug)]
pub struct Deadline(Bound);

#[derive(Clone, Copy, Debug)]
enum Bound {
    Within(Duration),
    At(Instant),
}

impl Deadline {
    /// A bound of `limit` from the moment the call starts.
    pub fn within(limit: Duration) -> Self {
        Self(Bound::Within(limit))
    }

    /// An absolute bound at `instant`.
    pub fn at(instant: Instant) -> Self {
        Self(Bound::At(instant))
    }

    /// Time left under this bound, zero if it has already passed.
    pub fn remaining(&self) -> Duration {
        match self.0 {
            Bound::Within(limit) => limit,
            Bound::At(instant) => instant.saturating_duration_since(Instant::now()),
        }
    }
}

/// Runs one unit of blocking work per call, bounded by a deadline and an
/// external cancellation signal.
///
/// One call is one attempt; retrying belongs to the service layer.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoundedExecutor;

impl BoundedExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Run `work` on a dedicated blocking worker.
    ///
    /// The worker receives a [`CancellationToken`] and must discard any
    /// partial result once it observes the token cancelled. The caller
    /// gets back exactly one of:
    ///
    /// - the worker's own `Result` if it finishes in time,
    /// - `Timeout` once `deadline` elapses,
    /// - `Cancelled` once `cancel` fires,
    /// - `Unknown` (join failure chained as cause) if the worker panics.
    ///
    /// On the timeout and cancel paths the worker is signalled and left
    /// to notice cooperatively; its eventual result is dropped.
    pub async fn execute<T, F>(
        &self,
        operation: &str,
        deadline: Deadline,
        cancel: &CancellationToken,
        work: F,
    ) -> Result<T, SearchError>
    where
        T: Send + 'static,
        F: FnOnce(CancellationToken) -> Result<T, SearchError> + Send + 'static,
    {
        if cancel.is_cancelled() {
            return Err(SearchError::cancelled(operation));
        }
        let limit = deadline.remaining();
        if limit.is_zero() {
            return Err(SearchError::timeout(operation, limit));
        }

        let worker_signal = cancel.child_token();
        let mut worker = tokio::task::spawn_blocking({
            let signal = worker_signal.clone();
            move || work(signal)
        });

        tokio::select! {
            joined = &mut worker => match joined {
                Ok(outcome) => outcome,
                Err(join_error) => Err(SearchError::unknown(
                    operation,
                    if join_error.is_panic() { "worker panicked" } else { "worker was aborted" },
                    Some(Box::new(join_error)),
                )),
            },
            () = tokio::time::sleep(limit) => {
                worker_signal.cancel();
                debug!("operation '{operation}' exceeded its {limit:?} deadline, worker signalled");
                Err(SearchError::timeout(operation, limit))
            }
            () = cancel.cancelled() => {
                worker_signal.cancel();
                debug!("operation '{operation}' cancelled by caller, worker signalled");
                Err(SearchError::cancelled(operation))
            }
        }
    }
}
