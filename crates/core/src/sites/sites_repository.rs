//! Gateway-backed repository for site queries.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use etour_remote::{RawResponse, SearchError, SearchGateway, SiteQuery, OP_SITE_SEARCH};

use super::sites_model::Site;
use super::sites_traits::SiteRepositoryTrait;
use crate::errors::Result;

/// Wire shape of a successful search response.
///
/// Private to this module: the raw representation stops here and only
/// [`Site`] values travel upward.
#[derive(Debug, Deserialize)]
struct SearchResponseBody {
    #[serde(default)]
    sites: Vec<SiteRecord>,
}

#[derive(Debug, Deserialize)]
struct SiteRecord {
    id: i64,
    name: String,
    description: String,
    category: String,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
}

impl From<SiteRecord> for Site {
    fn from(record: SiteRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            category: record.category,
            latitude: record.latitude,
            longitude: record.longitude,
        }
    }
}

/// Repository over an injected [`SearchGateway`].
pub struct SiteRepository {
    gateway: Arc<dyn SearchGateway>,
}

impl SiteRepository {
    pub fn new(gateway: Arc<dyn SearchGateway>) -> Self {
        Self { gateway }
    }

    fn decode(raw: &RawResponse) -> Result<Vec<Site>> {
        let body: SearchResponseBody = serde_json::from_str(raw.as_str())
            .map_err(|e| SearchError::decode(OP_SITE_SEARCH, e))?;
        Ok(body.sites.into_iter().map(Site::from).collect())
    }
}

#[async_trait]
impl SiteRepositoryTrait for SiteRepository {
    async fn find(&self, query: &SiteQuery, cancel: &CancellationToken) -> Result<Vec<Site>> {
        // Gateway failures pass through unchanged; this layer did not
        // create those conditions and must not hide them.
        let raw = self.gateway.call(query, cancel).await?;
        let sites = Self::decode(&raw)?;
        debug!(
            "decoded {} site(s) for tourist '{}'",
            sites.len(),
            query.tourist_id()
        );
        Ok(sites)
    }
}
