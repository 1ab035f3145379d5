//! Supported chains and their subgraph endpoints

pub mod endpoints;

pub use endpoints::*;
