//! Runtime configuration for the tag exporter binary

use std::env;

pub const DEFAULT_CHAIN_ID: &str = "1";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub chain_id: String,
    pub log_dir: Option<String>,
    pub pretty_output: bool,
}

impl Config {
    pub fn load() -> Self {
        Self {
            api_key: env::var("SUBGRAPH_API_KEY").ok().filter(|key| !key.is_empty()),
            chain_id: env::var("CHAIN_ID")
                .ok()
                .filter(|chain| !chain.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CHAIN_ID.to_string()),
            log_dir: env::var("LOG_DIR").ok().filter(|dir| !dir.is_empty()),
            pretty_output: env::var("OUTPUT_PRETTY")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
        }
    }
}
