//! The `tavily_crawl` tool.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};
use tavily_client::crawl::{CrawlRequest, CrawlResponse};
use tavily_client::types::{Category, Depth, OutputFormat};
use tavily_client::TavilyClient;

use crate::adapter::{Capability, ToolAdapter};
use crate::schema::{DefaultValue, FieldKind, FieldSpec};

const DEPTHS: &[&str] = &["basic", "advanced"];
const FORMATS: &[&str] = &["markdown", "text"];
const CATEGORIES: &[&str] = &[
    "Careers",
    "Blog",
    "Documentation",
    "About",
    "Pricing",
    "Community",
    "Developers",
    "Contact",
    "Media",
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("url", FieldKind::String, "The root URL to begin the crawl"),
    FieldSpec::overridable(
        "instructions",
        FieldKind::String,
        "Natural language instructions to guide the crawler, e.g. 'Python SDK documentation'",
        DefaultValue::Unset,
    ),
    FieldSpec::overridable(
        "max_depth",
        FieldKind::Integer,
        "Max depth of the crawl; how many hops the crawler can make from the root URL",
        DefaultValue::Int(3),
    ),
    FieldSpec::overridable(
        "max_breadth",
        FieldKind::Integer,
        "Max number of links to follow per page",
        DefaultValue::Int(20),
    ),
    FieldSpec::overridable(
        "limit",
        FieldKind::Integer,
        "Maximum number of links the crawler will return",
        DefaultValue::Int(50),
    ),
    FieldSpec::overridable(
        "select_paths",
        FieldKind::StringList,
        "Regex patterns to select only URLs with specific path patterns, e.g. ['/api/v1.*']",
        DefaultValue::Unset,
    ),
    FieldSpec::overridable(
        "select_domains",
        FieldKind::StringList,
        "Regex patterns to select only URLs from specific domains or subdomains",
        DefaultValue::Unset,
    ),
    FieldSpec::overridable(
        "exclude_paths",
        FieldKind::StringList,
        "Regex patterns to exclude URLs with specific path patterns",
        DefaultValue::Unset,
    ),
    FieldSpec::overridable(
        "exclude_domains",
        FieldKind::StringList,
        "Regex patterns to exclude specific domains or subdomains from the crawl",
        DefaultValue::Unset,
    ),
    FieldSpec::overridable(
        "allow_external",
        FieldKind::Boolean,
        "Whether to follow links that go to external domains",
        DefaultValue::Bool(false),
    ),
    FieldSpec::overridable(
        "include_images",
        FieldKind::Boolean,
        "Whether to include images in the crawl results",
        DefaultValue::Bool(false),
    ),
    FieldSpec::overridable(
        "extract_depth",
        FieldKind::Enum(DEPTHS),
        "Advanced extraction retrieves more data, including tables and embedded content, \
         with higher success but may increase latency",
        DefaultValue::Str("basic"),
    ),
    FieldSpec::overridable(
        "include_favicon",
        FieldKind::Boolean,
        "Whether to include the favicon URL for each result",
        DefaultValue::Bool(false),
    ),
    FieldSpec::overridable(
        "chunks_per_source",
        FieldKind::Integer,
        "Number of content chunks to extract from each page, between 1 and 10",
        DefaultValue::Unset,
    ),
    // Fixed at construction; both change the shape of what comes back.
    FieldSpec::locked(
        "format",
        FieldKind::Enum(FORMATS),
        "Format of the extracted content; 'text' may increase latency",
        DefaultValue::Str("markdown"),
    ),
    FieldSpec::locked(
        "categories",
        FieldKind::EnumList(CATEGORIES),
        "Direct the crawler to specific categories of a website",
        DefaultValue::Unset,
    ),
];

/// Construction-time defaults for [`CrawlTool`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct CrawlDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_breadth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
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
    pub include_favicon: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunks_per_source: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
}

/// Capability descriptor for the crawl endpoint.
pub struct Crawl;

#[async_trait]
impl Capability for Crawl {
    const NAME: &'static str = "tavily_crawl";
    const ENDPOINT: &'static str = "/crawl";

    type Request = CrawlRequest;
    type Response = CrawlResponse;

    fn description() -> &'static str {
        "An intelligent web crawler that initiates a structured web crawl starting from a \
         specified base URL. The crawler expands from that point like a tree, following \
         internal links. You can provide natural language instructions to guide the crawl."
    }

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    async fn call(
        client: &TavilyClient,
        request: CrawlRequest,
    ) -> tavily_client::Result<CrawlResponse> {
        client.crawl(&request).await
    }

    fn no_results_hint(effective: &Map<String, Value>, _response: &Value) -> Option<String> {
        Some(no_results_message(effective, "crawl"))
    }
}

/// Tool over the crawl capability.
pub type CrawlTool = ToolAdapter<Crawl>;

/// Suggest which narrowing options to relax when a crawl or map comes back
/// empty. Shared with the map tool, which uses the same option names.
pub(crate) fn no_results_message(effective: &Map<String, Value>, operation: &str) -> String {
    let url = effective
        .get("url")
        .and_then(Value::as_str)
        .unwrap_or_default();

    let is_set = |key: &str| effective.get(key).is_some_and(|value| !value.is_null());

    let mut suggestions = Vec::new();
    if is_set("instructions") {
        suggestions.push("try more concise instructions");
    }
    if is_set("select_paths") {
        suggestions.push("remove the select_paths argument");
    }
    if is_set("select_domains") {
        suggestions.push("remove the select_domains argument");
    }
    if is_set("exclude_paths") {
        suggestions.push("remove the exclude_paths argument");
    }
    if is_set("exclude_domains") {
        suggestions.push("remove the exclude_domains argument");
    }
    if is_set("categories") {
        suggestions.push("remove the categories argument");
    }
    if suggestions.is_empty() {
        suggestions.push("try a different root URL");
    }

    format!(
        "no {} results found for '{}'; {}",
        operation,
        url,
        suggestions.join(", ")
    )
}
