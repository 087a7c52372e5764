//! Request and response types for the research capability.
//!
//! Research is asynchronous on the service side: `POST /research` starts a
//! task and returns a request id; `GET /research/{request_id}` retrieves the
//! finished report.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Depth/thoroughness of a research task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResearchModel {
    Mini,
    Pro,
    Auto,
}

/// Citation style for sources in the research report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitationFormat {
    Numbered,
    Mla,
    Apa,
    Chicago,
}

/// An MCP server the research task may draw tools from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpServer {
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport: Option<McpTransport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools_to_include: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Value>,
}

/// Transport used to reach an MCP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum McpTransport {
    StreamableHttp,
    Sse,
}

/// Body of a `POST /research` request.
///
/// The public argument name `research_model` travels as `model` on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResearchRequest {
    /// The research task description.
    pub input: String,
    #[serde(rename = "model", skip_serializing_if = "Option::is_none")]
    pub research_model: Option<ResearchModel>,
    /// JSON Schema for structured report output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation_format: Option<CitationFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcps: Option<Vec<McpServer>>,
}

/// Body of a `POST /research` response: the task handle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchResponse {
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

/// Body of a `GET /research/{request_id}` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchResult {
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub sources: Option<Value>,
}
