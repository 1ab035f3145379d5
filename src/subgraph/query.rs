//! GraphQL query text and wire shapes for the pools query

use serde::{Deserialize, Serialize};
use crate::types::Pool;

/// Maximum number of pools requested per page.
pub const PAGE_SIZE: usize = 1000;

pub const POOLS_QUERY: &str = r#"
query GetPools($lastTimestamp: Int) {
  pools(
    first: 1000,
    orderBy: createdAtTimestamp,
    orderDirection: asc,
    where: { createdAtTimestamp_gt: $lastTimestamp }
  ) {
    id
    createdAtTimestamp
    token0 {
      id
      name
      symbol
    }
    token1 {
      id
      name
      symbol
    }
  }
}
"#;

#[derive(Debug, Clone, Serialize)]
pub struct PoolsRequest<'a> {
    pub query: &'a str,
    pub variables: PoolsVariables,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolsVariables {
    pub last_timestamp: u64,
}

impl PoolsRequest<'static> {
    pub fn after(last_timestamp: u64) -> Self {
        Self {
            query: POOLS_QUERY,
            variables: PoolsVariables { last_timestamp },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct PoolsData {
    #[serde(default)]
    pub pools: Option<Vec<Pool>>,
}
