use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use etour_remote::SiteQuery;

use super::sites_model::Site;
use crate::errors::Result;

#[async_trait]
pub trait SiteRepositoryTrait: Send + Sync {
    /// Fetch and decode the sites matching `query`.
    ///
    /// Exactly one gateway call per invocation; gateway failures are
    /// forwarded unchanged and only decode failures originate here.
    async fn find(&self, query: &SiteQuery, cancel: &CancellationToken) -> Result<Vec<Site>>;
}

#[async_trait]
pub trait SiteSearchServiceTrait: Send + Sync {
    /// Run a validated, bounded, retried search.
    ///
    /// The single entry point a controller or view calls. Produces
    /// exactly one outcome: the decoded sites or a classified error
    /// whose attempt count reflects the repository calls actually made.
    async fn search(
        &self,
        query: &SiteQuery,
        max_attempts: u32,
        cancel: &CancellationToken,
    ) -> Result<Vec<Site>>;
}
