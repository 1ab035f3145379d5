//! Uniswap v3 contract tags
//!
//! Pages through the Uniswap v3 subgraph for a chain, screens token names
//! for markup and renders each remaining pool as a contract tag record for
//! the tag-indexing pipeline.

pub mod config;
pub mod types;
pub mod errors;
pub mod chains;
pub mod subgraph;
pub mod transform;
pub mod service;
pub mod utils;

// Re-export commonly used items
pub use chains::{ChainEndpoints, resolve_subgraph_url};
pub use errors::{TagError, TagResult};
pub use service::{TagService, UniswapV3TagService};
pub use types::*;
