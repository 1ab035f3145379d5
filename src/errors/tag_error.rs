//! Error types for subgraph fetching and tag generation

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagError {
    #[error("Unsupported Chain ID: {chain_id}. Only the following values are accepted: {}", .supported.join(", "))]
    UnsupportedChain {
        chain_id: String,
        supported: Vec<String>,
    },

    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    #[error("GraphQL errors occurred")]
    GraphQl { messages: Vec<String> },

    #[error("No data returned from GraphQL query")]
    NoData,

    #[error("Subgraph request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Error fetching Uniswap v3 pools for chain {chain_id}: {source}")]
    Fetch {
        chain_id: String,
        #[source]
        source: Box<TagError>,
    },

    #[error("An unknown error occurred while fetching Uniswap v3 pools for chain {chain_id}: {source}")]
    Unknown {
        chain_id: String,
        #[source]
        source: anyhow::Error,
    },
}

pub type TagResult<T> = Result<T, TagError>;

impl TagError {
    /// HTTP status carried by this error, looking through `Fetch` wrappers.
    pub fn status(&self) -> Option<u16> {
        match self {
            TagError::Http { status } => Some(*status),
            TagError::Fetch { source, .. } => source.status(),
            _ => None,
        }
    }
}
