//! HTTP client for the Uniswap v3 subgraph

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::{debug, error, warn};
use crate::{
    errors::{TagError, TagResult},
    subgraph::query::{GraphQlResponse, PoolsData, PoolsRequest},
    types::Pool,
};

/// A source of pool pages ordered by creation timestamp.
#[async_trait]
pub trait PoolSource: Send + Sync {
    /// Returns up to one page of pools created strictly after `last_timestamp`,
    /// in ascending creation order.
    async fn fetch_pools(&self, last_timestamp: u64) -> anyhow::Result<Vec<Pool>>;
}

pub struct SubgraphClient {
    http: reqwest::Client,
    url: String,
}

impl SubgraphClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    pub async fn query_pools(&self, last_timestamp: u64) -> TagResult<Vec<Pool>> {
        debug!("Querying subgraph for pools after timestamp {}", last_timestamp);

        let response = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&PoolsRequest::after(last_timestamp))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("⚠️ Subgraph returned error status {}", status);
            return Err(TagError::Http {
                status: status.as_u16(),
            });
        }

        let body: GraphQlResponse<PoolsData> = response.json().await?;

        if let Some(errors) = body.errors.filter(|errors| !errors.is_empty()) {
            for graphql_error in &errors {
                error!("GraphQL error: {}", graphql_error.message);
            }
            return Err(TagError::GraphQl {
                messages: errors.into_iter().map(|e| e.message).collect(),
            });
        }

        body.data
            .and_then(|data| data.pools)
            .ok_or(TagError::NoData)
    }
}

#[async_trait]
impl PoolSource for SubgraphClient {
    async fn fetch_pools(&self, last_timestamp: u64) -> anyhow::Result<Vec<Pool>> {
        Ok(self.query_pools(last_timestamp).await?)
    }
}
