//! The `tavily_extract` tool.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};
use tavily_client::extract::{ExtractRequest, ExtractResponse};
use tavily_client::types::{Depth, OutputFormat};
use tavily_client::TavilyClient;

use crate::adapter::{Capability, ToolAdapter};
use crate::schema::{DefaultValue, FieldKind, FieldSpec};

const DEPTHS: &[&str] = &["basic", "advanced"];
const FORMATS: &[&str] = &["markdown", "text"];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required(
        "urls",
        FieldKind::StringList,
        "A list of URLs to extract content from",
    ),
    FieldSpec::overridable(
        "extract_depth",
        FieldKind::Enum(DEPTHS),
        "Advanced extraction retrieves more data, including tables and embedded content, \
         with higher success but may increase latency",
        DefaultValue::Str("basic"),
    ),
    FieldSpec::locked(
        "include_images",
        FieldKind::Boolean,
        "Include a list of images extracted from each URL",
        DefaultValue::Bool(false),
    ),
    FieldSpec::locked(
        "include_favicon",
        FieldKind::Boolean,
        "Include the favicon URL for each result",
        DefaultValue::Bool(false),
    ),
    FieldSpec::locked(
        "format",
        FieldKind::Enum(FORMATS),
        "Format of the extracted content; 'text' may increase latency",
        DefaultValue::Str("markdown"),
    ),
];

/// Construction-time defaults for [`ExtractTool`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract_depth: Option<Depth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_images: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_favicon: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

/// Capability descriptor for the extract endpoint.
pub struct Extract;

#[async_trait]
impl Capability for Extract {
    const NAME: &'static str = "tavily_extract";
    const ENDPOINT: &'static str = "/extract";

    type Request = ExtractRequest;
    type Response = ExtractResponse;

    fn description() -> &'static str {
        "Extracts comprehensive content from web pages based on provided URLs. This tool \
         retrieves the raw content of a web page, with an option to extract more in-depth \
         content; it supports extracting images from the pages as well. Input should be a \
         list of one or more URLs."
    }

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    async fn call(
        client: &TavilyClient,
        request: ExtractRequest,
    ) -> tavily_client::Result<ExtractResponse> {
        client.extract(&request).await
    }

    fn no_results_hint(_effective: &Map<String, Value>, response: &Value) -> Option<String> {
        let failed: Vec<&str> = response
            .get("failed_results")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| entry.get("url").and_then(Value::as_str))
                    .collect()
            })
            .unwrap_or_default();

        if failed.is_empty() {
            Some("no content could be extracted from the provided URLs".to_string())
        } else {
            Some(format!(
                "no content could be extracted; the following URLs failed: {}",
                failed.join(", ")
            ))
        }
    }
}

/// Tool over the extract capability.
pub type ExtractTool = ToolAdapter<Extract>;
