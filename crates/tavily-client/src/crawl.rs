//! Request and response types for the crawl capability.

use serde::{Deserialize, Serialize};

use crate::types::{Category, Depth, OutputFormat};

/// Body of a `POST /crawl` request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrawlRequest {
    /// Root URL the crawl starts from.
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_breadth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Natural-language guidance for the crawler, e.g. "Python SDK".
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
    pub include_images: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract_depth: Option<Depth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_favicon: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunks_per_source: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
}

/// Content extracted from one crawled page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlResult {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub raw_content: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub favicon: Option<String>,
}

/// Body of a `POST /crawl` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlResponse {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub results: Vec<CrawlResult>,
    #[serde(default)]
    pub response_time: Option<f64>,
}
