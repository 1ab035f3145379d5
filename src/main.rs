//! Uniswap v3 Tags - exporter entry point
//!
//! Fetches every Uniswap v3 pool for one chain and prints the contract tags
//! as JSON on stdout.

use anyhow::{Context, Result};
use tracing::info;
use uniswap_v3_tags::{config::CONFIG, utils, TagService, UniswapV3TagService};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = CONFIG.clone();
    let _logging_guard = utils::setup_logging(config.log_dir.as_deref())?;

    let chain_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.chain_id.clone());
    let api_key = config
        .api_key
        .as_deref()
        .context("SUBGRAPH_API_KEY is required")?;

    info!("🦄 Uniswap v3 tag export");
    info!("   Chain ID: {}", chain_id);

    let service = UniswapV3TagService::new();
    let tags = service.return_tags(&chain_id, api_key).await?;

    let output = if config.pretty_output {
        serde_json::to_string_pretty(&tags)?
    } else {
        serde_json::to_string(&tags)?
    };
    println!("{output}");

    info!("✅ Exported {} tags for chain {}", tags.len(), chain_id);
    Ok(())
}
