//! Request and response types for the map capability.

use serde::{Deserialize, Serialize};

use crate::types::{Category, Depth};

/// Body of a `POST /map` request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapRequest {
    /// Root URL the mapping starts from.
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_breadth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_paths: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_paths: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_external: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract_depth: Option<Depth>,
}

/// Body of a `POST /map` response. Results are plain URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapResponse {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub results: Vec<String>,
    #[serde(default)]
    pub response_time: Option<f64>,
}
