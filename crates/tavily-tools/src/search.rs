//! The `tavily_search` tool.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};
use tavily_client::search::{SearchRequest, SearchResponse, TimeRange, Topic};
use tavily_client::types::Depth;
use tavily_client::TavilyClient;

use crate::adapter::{Capability, ToolAdapter};
use crate::schema::{DefaultValue, FieldKind, FieldSpec};

const DEPTHS: &[&str] = &["basic", "advanced"];
const TOPICS: &[&str] = &["general", "news"];
const TIME_RANGES: &[&str] = &["day", "week", "month", "year"];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("query", FieldKind::String, "Search query to look up"),
    FieldSpec::overridable(
        "include_domains",
        FieldKind::StringList,
        "A list of domains to specifically include in the search results",
        DefaultValue::Unset,
    ),
    FieldSpec::overridable(
        "exclude_domains",
        FieldKind::StringList,
        "A list of domains to specifically exclude from the search results",
        DefaultValue::Unset,
    ),
    FieldSpec::overridable(
        "search_depth",
        FieldKind::Enum(DEPTHS),
        "The depth of the search. It can be 'basic' or 'advanced'",
        DefaultValue::Str("advanced"),
    ),
    FieldSpec::overridable(
        "include_images",
        FieldKind::Boolean,
        "Include a list of query-related images in the response",
        DefaultValue::Bool(false),
    ),
    FieldSpec::overridable(
        "time_range",
        FieldKind::Enum(TIME_RANGES),
        "The time range back from the current date to filter results",
        DefaultValue::Unset,
    ),
    // The rest bound the size and shape of the response; they are fixed when
    // the tool is constructed.
    FieldSpec::locked(
        "max_results",
        FieldKind::Integer,
        "Max search results to return",
        DefaultValue::Int(5),
    ),
    FieldSpec::locked(
        "topic",
        FieldKind::Enum(TOPICS),
        "The category of the search, 'general' or 'news'",
        DefaultValue::Str("general"),
    ),
    FieldSpec::locked(
        "include_answer",
        FieldKind::Boolean,
        "Include a short answer to the original query in the results",
        DefaultValue::Bool(false),
    ),
    FieldSpec::locked(
        "include_raw_content",
        FieldKind::Boolean,
        "Include the cleaned and parsed HTML of each search result",
        DefaultValue::Bool(false),
    ),
    FieldSpec::locked(
        "include_image_descriptions",
        FieldKind::Boolean,
        "Include a descriptive text for each image in the results",
        DefaultValue::Bool(false),
    ),
    FieldSpec::locked(
        "include_favicon",
        FieldKind::Boolean,
        "Include the favicon URL for each result",
        DefaultValue::Bool(false),
    ),
    FieldSpec::locked(
        "country",
        FieldKind::String,
        "Boost results from a specific country",
        DefaultValue::Unset,
    ),
    FieldSpec::locked(
        "auto_parameters",
        FieldKind::Boolean,
        "Let the service tune search parameters based on the query",
        DefaultValue::Unset,
    ),
];

/// Construction-time defaults for [`SearchTool`]. Fields left `None` keep the
/// tool's built-in defaults.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_depth: Option<Depth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_answer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_raw_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_images: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_image_descriptions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_favicon: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<Topic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_parameters: Option<bool>,
}

/// Capability descriptor for the search endpoint.
pub struct Search;

#[async_trait]
impl Capability for Search {
    const NAME: &'static str = "tavily_search";
    const ENDPOINT: &'static str = "/search";

    type Request = SearchRequest;
    type Response = SearchResponse;

    fn description() -> &'static str {
        "A search engine optimized for comprehensive, accurate, and trusted results. \
         Useful for when you need to answer questions about current events. It not only \
         retrieves URLs and snippets, but offers advanced search depths, domain management, \
         time range filters, and image search; this tool delivers real-time, accurate, and \
         citation-backed results. Input should be a search query."
    }

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    async fn call(
        client: &TavilyClient,
        request: SearchRequest,
    ) -> tavily_client::Result<SearchResponse> {
        client.search(&request).await
    }

    fn no_results_hint(effective: &Map<String, Value>, _response: &Value) -> Option<String> {
        Some(no_results_message(effective))
    }
}

/// Tool over the search capability.
pub type SearchTool = ToolAdapter<Search>;

/// Suggest a parameter change when a search comes back empty, based on which
/// narrowing options the effective request carried.
fn no_results_message(effective: &Map<String, Value>) -> String {
    let query = effective
        .get("query")
        .and_then(Value::as_str)
        .unwrap_or_default();

    let is_set = |key: &str| effective.get(key).is_some_and(|value| !value.is_null());

    let suggestion = if is_set("time_range") {
        "remove the time_range argument"
    } else if is_set("include_domains") {
        "remove the include_domains argument"
    } else if is_set("exclude_domains") {
        "remove the exclude_domains argument"
    } else if effective.get("search_depth").and_then(Value::as_str) == Some("basic") {
        "try a more detailed search with search_depth 'advanced'"
    } else {
        "try alternative search terms"
    };

    format!("no search results found for '{}'; {}", query, suggestion)
}
