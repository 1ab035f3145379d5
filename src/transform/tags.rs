//! Mapping of subgraph pools into contract tags

use tracing::warn;
use crate::{
    transform::sanitize::{is_token_flagged, rejected_label, truncate_symbols},
    types::{ContractTag, Pool, PROJECT_NAME, PROJECT_WEBSITE},
};

/// Builds tags for every pool whose tokens pass screening, preserving order.
/// Rejected tokens are logged once for the whole batch.
pub fn transform_pools_to_tags(chain_id: &str, pools: &[Pool]) -> Vec<ContractTag> {
    let mut rejected = Vec::new();

    let tags: Vec<ContractTag> = pools
        .iter()
        .filter(|pool| match rejected_token(pool) {
            Some(label) => {
                rejected.push(label);
                false
            }
            None => true,
        })
        .map(|pool| pool_to_tag(chain_id, pool))
        .collect();

    if !rejected.is_empty() {
        warn!(
            "⚠️ Rejected {} pools with HTML content in token names: {:?}",
            rejected.len(),
            rejected
        );
    }

    tags
}

fn rejected_token(pool: &Pool) -> Option<String> {
    [&pool.token0, &pool.token1]
        .into_iter()
        .find(|token| is_token_flagged(token))
        .map(rejected_label)
}

pub fn pool_to_tag(chain_id: &str, pool: &Pool) -> ContractTag {
    let (token0, token1) = (&pool.token0, &pool.token1);
    let symbols = truncate_symbols(&format!("{}/{}", token0.symbol, token1.symbol));

    ContractTag {
        contract_address: format!("eip155:{}:{}", chain_id, pool.id),
        public_name_tag: format!("{symbols} Pool"),
        project_name: PROJECT_NAME.to_string(),
        website_link: PROJECT_WEBSITE.to_string(),
        public_note: format!(
            "The liquidity pool contract on Uniswap v3 for the {} ({}) / {} ({}) pair.",
            token0.name, token0.symbol, token1.name, token1.symbol
        ),
    }
}
