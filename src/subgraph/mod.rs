//! Uniswap v3 subgraph access

pub mod query;
pub mod client;
pub mod pager;

pub use query::*;
pub use client::*;
pub use pager::*;
