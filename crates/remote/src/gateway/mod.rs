//! Gateway to the remote eTour search backend.
//!
//! The gateway performs the actual remote call: it encodes the query,
//! hands the blocking transport to the bounded executor under the
//! configured deadline, and classifies connection-level failures. It is
//! the only layer that can genuinely detect `ConnectionInterrupted`.
//! Decoding the response is not its job; the raw body is returned
//! unchanged to the repository layer.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use tokio_util::sync::CancellationToken;

use crate::errors::SearchError;
use crate::executor::{BoundedExecutor, Deadline};
use crate::models::{RawResponse, SiteQuery};
use crate::transport::SearchTransport;

/// Operation name carried in errors and log lines for site searches.
pub const OP_SITE_SEARCH: &str = "site_search";

/// Default upper bound on one remote call.
const DEFAULT_DEADLINE: Duration = Duration::from_secs(5);

/// Caller-configurable settings for one gateway instance.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GatewayConfig {
    /// Upper bound on one remote call, enforced by the executor.
    pub deadline: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            deadline: DEFAULT_DEADLINE,
        }
    }
}

/// One bounded remote call per invocation.
///
/// Implemented by [`SiteGateway`]; the repository layer depends on this
/// trait so tests can script gateway outcomes directly.
#[async_trait]
pub trait SearchGateway: Send + Sync {
    /// Perform one remote call for `query`, bounded by the configured
    /// deadline and the caller's cancellation token.
    async fn call(
        &self,
        query: &SiteQuery,
        cancel: &CancellationToken,
    ) -> Result<RawResponse, SearchError>;
}

/// Gateway over an injected blocking [`SearchTransport`].
pub struct SiteGateway {
    transport: Arc<dyn SearchTransport>,
    executor: BoundedExecutor,
    config: GatewayConfig,
}

impl SiteGateway {
    /// Create a gateway over `transport` with the given configuration.
    pub fn new(transport: Arc<dyn SearchTransport>, config: GatewayConfig) -> Self {
        Self {
            transport,
            executor: BoundedExecutor::new(),
            config,
        }
    }
}

#[async_trait]
impl SearchGateway for SiteGateway {
    async fn call(
        &self,
        query: &SiteQuery,
        cancel: &CancellationToken,
    ) -> Result<RawResponse, SearchError> {
        let payload = serde_json::to_string(query).map_err(|e| {
            SearchError::unknown(OP_SITE_SEARCH, "query could not be encoded", Some(Box::new(e)))
        })?;

        debug!(
            "searching sites for tourist '{}' (keywords: '{}')",
            query.tourist_id(),
            query.keywords()
        );

        let transport = Arc::clone(&self.transport);
        self.executor
            .execute(
                OP_SITE_SEARCH,
                Deadline::within(self.config.deadline),
                cancel,
                move |signal| {
                    let body = transport
                        .send(&payload)
                        .map_err(|e| SearchError::connection_interrupted(OP_SITE_SEARCH, e))?;
                    if signal.is_cancelled() {
                        // The bounded call already returned on the
                        // deadline or cancel path; drop the late body.
                        return Err(SearchError::cancelled(OP_SITE_SEARCH));
                    }
                    Ok(RawResponse::new(body))
                },
            )
            .await
            .inspect_err(|e| debug!("site search failed: {}", e.log_message()))
    }
}
