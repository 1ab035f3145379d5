//! Contract tag output records

use serde::{Deserialize, Serialize};

pub const PROJECT_NAME: &str = "Uniswap v3";
pub const PROJECT_WEBSITE: &str = "https://uniswap.org";

/// A labeled contract address in the shape the tag-indexing pipeline ingests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractTag {
    #[serde(rename = "Contract Address")]
    pub contract_address: String,
    #[serde(rename = "Public Name Tag")]
    pub public_name_tag: String,
    #[serde(rename = "Project Name")]
    pub project_name: String,
    #[serde(rename = "UI/Website Link")]
    pub website_link: String,
    #[serde(rename = "Public Note")]
    pub public_note: String,
}
