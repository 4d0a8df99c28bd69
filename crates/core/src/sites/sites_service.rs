//! Retrying search service over the site repository.
//!
//! The service owns everything the layers below are forbidden to do:
//! pre-flight validation, the retry decision, and the backoff pauses.
//! Attempts are strictly sequential; attempt N+1 never starts before
//! attempt N has fully terminated. Each `search` invocation owns its
//! attempt counter and backoff state exclusively, so concurrent searches
//! are fully independent.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use tokio_util::sync::CancellationToken;

use etour_remote::{RetryPolicy, SearchError, SiteQuery, OP_SITE_SEARCH};

use super::sites_model::Site;
use super::sites_traits::{SiteRepositoryTrait, SiteSearchServiceTrait};
use crate::errors::Result;

pub struct SiteSearchService {
    repository: Arc<dyn SiteRepositoryTrait>,
    retry_policy: RetryPolicy,
}

impl SiteSearchService {
    pub fn new(repository: Arc<dyn SiteRepositoryTrait>, retry_policy: RetryPolicy) -> Self {
        Self {
            repository,
            retry_policy,
        }
    }
}

#[async_trait]
impl SiteSearchServiceTrait for SiteSearchService {
    async fn search(
        &self,
        query: &SiteQuery,
        max_attempts: u32,
        cancel: &CancellationToken,
    ) -> Result<Vec<Site>> {
        // Fast-fail before any remote resource is consumed.
        query
            .validate()
            .map_err(|e| SearchError::validation(OP_SITE_SEARCH, e))?;

        let max_attempts = max_attempts.max(1);
        let mut suppressed: Vec<SearchError> = Vec::new();
        let mut attempt: u32 = 1;

        loop {
            match self.repository.find(query, cancel).await {
                Ok(sites) => {
                    debug!(
                        "search succeeded on attempt {attempt} with {} site(s)",
                        sites.len()
                    );
                    return Ok(sites);
                }
                Err(error) => {
                    let error = error.with_attempts(attempt);
                    if !self
                        .retry_policy
                        .should_retry(error.kind(), attempt, max_attempts)
                    {
                        let terminal = error.with_suppressed(suppressed);
                        warn!("{}", terminal.log_message());
                        return Err(terminal);
                    }

                    let delay = self.retry_policy.delay(attempt);
                    debug!(
                        "attempt {attempt} failed ({}), retrying in {delay:?}",
                        error.kind()
                    );
                    suppressed.push(error);

                    // The backoff pause races the caller's cancellation:
                    // a consumer that changes its mind mid-backoff gets a
                    // Cancelled outcome with the attempt count preserved.
                    tokio::select! {
                        () = tokio::time::sleep(delay) => {}
                        () = cancel.cancelled() => {
                            let terminal = SearchError::cancelled(OP_SITE_SEARCH)
                                .with_attempts(attempt)
                                .with_suppressed(suppressed);
                            warn!("{}", terminal.log_message());
                            return Err(terminal);
                        }
                    }
                    attempt += 1;
                }
            }
        }
    }
}
