//! The `tavily_map` tool.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};
use tavily_client::map::{MapRequest, MapResponse};
use tavily_client::types::{Category, Depth};
use tavily_client::TavilyClient;

use crate::adapter::{Capability, ToolAdapter};
use crate::crawl::no_results_message;
use crate::schema::{DefaultValue, FieldKind, FieldSpec};

const DEPTHS: &[&str] = &["basic", "advanced"];
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
    FieldSpec::required("url", FieldKind::String, "The root URL to begin the mapping"),
    FieldSpec::overridable(
        "max_depth",
        FieldKind::Integer,
        "Max depth of the mapping; how far from the base URL the crawler can explore",
        DefaultValue::Int(1),
    ),
    FieldSpec::overridable(
        "max_breadth",
        FieldKind::Integer,
        "Max number of links to follow per level of the tree (i.e. per page)",
        DefaultValue::Int(20),
    ),
    FieldSpec::overridable(
        "limit",
        FieldKind::Integer,
        "Total number of links the crawler will process before stopping",
        DefaultValue::Int(50),
    ),
    FieldSpec::overridable(
        "instructions",
        FieldKind::String,
        "Natural language instructions for the crawler",
        DefaultValue::Unset,
    ),
    FieldSpec::overridable(
        "select_paths",
        FieldKind::StringList,
        "Regex patterns to select only URLs with specific path patterns",
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
        "Regex patterns to exclude specific domains or subdomains from the mapping",
        DefaultValue::Unset,
    ),
    FieldSpec::overridable(
        "allow_external",
        FieldKind::Boolean,
        "Allow the crawler to follow external links",
        DefaultValue::Bool(false),
    ),
    FieldSpec::overridable(
        "categories",
        FieldKind::EnumList(CATEGORIES),
        "Direct the crawler to crawl specific categories of a website",
        DefaultValue::Unset,
    ),
    FieldSpec::overridable(
        "extract_depth",
        FieldKind::Enum(DEPTHS),
        "Advanced extraction retrieves more data with higher success but may increase latency",
        DefaultValue::Str("basic"),
    ),
];

/// Construction-time defaults for [`MapTool`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct MapDefaults {
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

/// Capability descriptor for the map endpoint.
pub struct Sitemap;

#[async_trait]
impl Capability for Sitemap {
    const NAME: &'static str = "tavily_map";
    const ENDPOINT: &'static str = "/map";

    type Request = MapRequest;
    type Response = MapResponse;

    fn description() -> &'static str {
        "A powerful web mapping tool that creates a structured map of website URLs, allowing \
         you to discover and analyze site structure, content organization, and navigation \
         paths. Perfect for site audits, content discovery, and understanding website \
         architecture."
    }

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    async fn call(
        client: &TavilyClient,
        request: MapRequest,
    ) -> tavily_client::Result<MapResponse> {
        client.map(&request).await
    }

    fn no_results_hint(effective: &Map<String, Value>, _response: &Value) -> Option<String> {
        Some(no_results_message(effective, "map"))
    }
}

/// Tool over the map capability.
pub type MapTool = ToolAdapter<Sitemap>;
