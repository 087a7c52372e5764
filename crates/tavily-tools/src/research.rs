//! The `tavily_research` and `tavily_get_research` tools.
//!
//! Research is asynchronous on the service side: `tavily_research` starts a
//! task and returns a request id; `tavily_get_research` retrieves the
//! finished report for that id.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};
use tavily_client::research::{CitationFormat, McpServer, ResearchModel, ResearchRequest, ResearchResponse};
use tavily_client::{ClientConfig, TavilyClient};

use crate::adapter::{Capability, ToolAdapter};
use crate::schema::{self, DefaultValue, FieldKind, FieldSpec};
use crate::tool::{Tool, ToolDefinition, ToolError};

const MODELS: &[&str] = &["mini", "pro", "auto"];
const CITATION_FORMATS: &[&str] = &["numbered", "mla", "apa", "chicago"];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required(
        "input",
        FieldKind::String,
        "The research task description; the main query describing what to research",
    ),
    FieldSpec::overridable(
        "research_model",
        FieldKind::Enum(MODELS),
        "Controls the depth of the research: 'mini' for quick surface-level research, \
         'pro' for comprehensive in-depth research, 'auto' to let the service decide",
        DefaultValue::Str("auto"),
    )
    .with_wire("model"),
    FieldSpec::overridable(
        "output_schema",
        FieldKind::Object,
        "JSON Schema for structured report output; the top level must include \
         'title' and 'description'",
        DefaultValue::Unset,
    ),
    FieldSpec::overridable(
        "citation_format",
        FieldKind::Enum(CITATION_FORMATS),
        "Citation format for sources in the research report",
        DefaultValue::Str("numbered"),
    ),
    FieldSpec::overridable(
        "mcps",
        FieldKind::ObjectList,
        "MCP servers the research task may draw tools from; each needs at least \
         'name' and 'url'",
        DefaultValue::Unset,
    ),
];

/// Construction-time defaults for [`ResearchTool`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResearchDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub research_model: Option<ResearchModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation_format: Option<CitationFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcps: Option<Vec<McpServer>>,
}

/// Capability descriptor for starting a research task.
pub struct Research;

#[async_trait]
impl Capability for Research {
    const NAME: &'static str = "tavily_research";
    const ENDPOINT: &'static str = "/research";

    type Request = ResearchRequest;
    type Response = ResearchResponse;

    fn description() -> &'static str {
        "Creates comprehensive research reports on any topic with automatic source \
         gathering, analysis, and structured output. The research task is asynchronous: \
         you receive a request_id to retrieve the results with once the research is \
         complete. Input should be a research task description."
    }

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    async fn call(
        client: &TavilyClient,
        request: ResearchRequest,
    ) -> tavily_client::Result<ResearchResponse> {
        client.research(&request).await
    }
}

/// Tool over the research capability.
pub type ResearchTool = ToolAdapter<Research>;

const GET_RESEARCH_FIELDS: &[FieldSpec] = &[FieldSpec::required(
    "request_id",
    FieldKind::String,
    "The research request ID returned from creating a research task",
)];

/// Retrieves the results of a research task by request id.
///
/// Implemented directly against [`Tool`]: the retrieval is a GET keyed by a
/// path parameter, which the POST-body adapter does not model.
pub struct GetResearchTool {
    client: TavilyClient,
}

impl GetResearchTool {
    pub const NAME: &'static str = "tavily_get_research";

    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: TavilyClient::new(config),
        }
    }
}

#[async_trait]
impl Tool for GetResearchTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: "Retrieves the results of a research task by its request_id. Use \
                          this after creating a research task to get the completed report, \
                          including the content, sources, and status."
                .to_string(),
            input_schema: schema::input_schema(GET_RESEARCH_FIELDS),
        }
    }

    async fn invoke(&self, arguments: Value) -> Result<Value, ToolError> {
        let arguments = arguments.as_object().ok_or_else(|| ToolError::Validation {
            tool: Self::NAME.to_string(),
            message: "arguments must be a JSON object".to_string(),
        })?;

        let effective = schema::merge_arguments(GET_RESEARCH_FIELDS, &Map::new(), arguments)
            .map_err(|message| ToolError::Validation {
                tool: Self::NAME.to_string(),
                message,
            })?;

        // Present and a string; merge_arguments enforced both.
        let request_id = effective
            .get("request_id")
            .and_then(Value::as_str)
            .unwrap_or_default();

        tracing::debug!(tool = Self::NAME, "invoking tavily tool");

        let result = self
            .client
            .research_result(request_id)
            .await
            .map_err(|source| ToolError::Api {
                tool: Self::NAME.to_string(),
                source,
            })?;

        // Response types are plain data structs; this cannot fail.
        Ok(serde_json::to_value(&result).expect("serialize response"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn research_schema_uses_the_public_argument_name() {
        let schema = schema::input_schema(FIELDS);
        let properties = schema["properties"].as_object().unwrap();
        assert!(properties.contains_key("research_model"));
        assert!(!properties.contains_key("model"));
        assert_eq!(properties["research_model"]["default"], "auto");
    }

    #[test]
    fn get_research_schema_requires_the_request_id() {
        let schema = schema::input_schema(GET_RESEARCH_FIELDS);
        assert_eq!(schema["required"], json!(["request_id"]));
    }
}
