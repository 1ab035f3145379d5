//! Tag service facade over the subgraph pipeline

use async_trait::async_trait;
use tracing::{error, info};
use crate::{
    chains::ChainEndpoints,
    errors::{TagError, TagResult},
    subgraph::{PoolPager, PoolSource, SubgraphClient},
    transform::transform_pools_to_tags,
    types::ContractTag,
};

/// Contract implemented by every tag data source consumed by the indexer.
#[async_trait]
pub trait TagService: Send + Sync {
    async fn return_tags(&self, chain_id: &str, api_key: &str) -> TagResult<Vec<ContractTag>>;
}

pub struct UniswapV3TagService {
    endpoints: ChainEndpoints,
    http: reqwest::Client,
}

impl UniswapV3TagService {
    pub fn new() -> Self {
        Self::with_endpoints(ChainEndpoints::default())
    }

    pub fn with_endpoints(endpoints: ChainEndpoints) -> Self {
        Self {
            endpoints,
            http: reqwest::Client::new(),
        }
    }
}

impl Default for UniswapV3TagService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TagService for UniswapV3TagService {
    async fn return_tags(&self, chain_id: &str, api_key: &str) -> TagResult<Vec<ContractTag>> {
        let url = self.endpoints.resolve(chain_id, api_key)?;
        let client = SubgraphClient::with_client(self.http.clone(), url);

        collect_tags(chain_id, &client).await
    }
}

/// Pages through `source` from the start, tagging each page as it arrives.
/// Any failure discards everything gathered so far.
pub async fn collect_tags<S: PoolSource + ?Sized>(
    chain_id: &str,
    source: &S,
) -> TagResult<Vec<ContractTag>> {
    info!("🔍 Fetching Uniswap v3 pools for chain {}...", chain_id);

    let mut pager = PoolPager::new(source, 0);
    let mut tags = Vec::new();

    loop {
        match pager.next_page().await {
            Ok(Some(pools)) => tags.extend(transform_pools_to_tags(chain_id, &pools)),
            Ok(None) => break,
            Err(e) => return Err(wrap_fetch_error(chain_id, e)),
        }
    }

    info!(
        "✅ Built {} tags for chain {} from {} pages",
        tags.len(),
        chain_id,
        pager.pages_fetched()
    );
    Ok(tags)
}

fn wrap_fetch_error(chain_id: &str, err: anyhow::Error) -> TagError {
    match err.downcast::<TagError>() {
        Ok(known) => {
            error!("❌ Error fetching Uniswap v3 pools for chain {}: {}", chain_id, known);
            TagError::Fetch {
                chain_id: chain_id.to_string(),
                source: Box::new(known),
            }
        }
        Err(other) => {
            error!("❌ Unknown error fetching Uniswap v3 pools for chain {}: {:#}", chain_id, other);
            TagError::Unknown {
                chain_id: chain_id.to_string(),
                source: other,
            }
        }
    }
}
