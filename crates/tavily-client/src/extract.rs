//! Request and response types for the extract capability.

use serde::{Deserialize, Serialize};

use crate::types::{Depth, OutputFormat};

/// Body of a `POST /extract` request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractRequest {
    pub urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract_depth: Option<Depth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_images: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_favicon: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

/// Content extracted from a single URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResult {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub raw_content: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub favicon: Option<String>,
}

/// A URL the service could not extract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedResult {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of a `POST /extract` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResponse {
    #[serde(default)]
    pub results: Vec<ExtractResult>,
    #[serde(default)]
    pub failed_results: Vec<FailedResult>,
    #[serde(default)]
    pub response_time: Option<f64>,
}
