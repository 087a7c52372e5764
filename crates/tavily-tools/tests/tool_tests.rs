//! Integration tests for the tool adapters, run against a mock server.

use serde_json::json;
use tavily_client::types::Depth;
use tavily_client::{ClientConfig, Error};
use tavily_tools::extract::{ExtractDefaults, ExtractTool};
use tavily_tools::map::{MapDefaults, MapTool};
use tavily_tools::search::{SearchDefaults, SearchTool};
use tavily_tools::{standard_tools, Tool, ToolError};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn search_tool_at(server: &MockServer, defaults: SearchDefaults) -> SearchTool {
    let config = ClientConfig::new(Some("test_key"), Some(&server.uri())).unwrap();
    SearchTool::new(config, defaults).unwrap()
}

const SEARCH_BODY: &str = r#"{
    "query": "q",
    "results": [{"title": "t", "url": "https://example.com", "content": "c", "score": 0.7}],
    "response_time": 0.2
}"#;

#[test]
fn effective_request_carries_key_query_and_built_in_defaults() {
    let config = ClientConfig::new(Some("k1"), None).unwrap();
    let tool = SearchTool::new(config, SearchDefaults::default()).unwrap();

    assert_eq!(
        tool.client().config().endpoint("/search"),
        "https://api.tavily.com/search"
    );
    assert_eq!(tool.client().config().api_key(), "k1");

    let effective = tool.effective_request(&json!({"query": "wimbledon"})).unwrap();
    assert_eq!(effective["query"], "wimbledon");
    assert_eq!(effective["max_results"], 5);
    assert_eq!(effective["search_depth"], "advanced");
    assert_eq!(effective["include_answer"], false);
}

#[test]
fn locked_field_keeps_the_constructor_value() {
    let config = ClientConfig::new(Some("k1"), None).unwrap();
    let tool = SearchTool::new(config, SearchDefaults::default()).unwrap();

    let effective = tool
        .effective_request(&json!({"query": "q", "include_answer": true, "max_results": 50}))
        .unwrap();
    assert_eq!(effective["include_answer"], false);
    assert_eq!(effective["max_results"], 5);
}

#[test]
fn constructor_may_set_locked_fields() {
    let config = ClientConfig::new(Some("k1"), None).unwrap();
    let tool = SearchTool::new(
        config,
        SearchDefaults {
            include_answer: Some(true),
            max_results: Some(2),
            ..Default::default()
        },
    )
    .unwrap();

    // Per-call values still lose against the configured ones.
    let effective = tool
        .effective_request(&json!({"query": "q", "include_answer": false}))
        .unwrap();
    assert_eq!(effective["include_answer"], true);
    assert_eq!(effective["max_results"], 2);
}

#[test]
fn overridable_field_prefers_the_invocation_value() {
    let config = ClientConfig::new(Some("k1"), None).unwrap();
    let tool = SearchTool::new(
        config,
        SearchDefaults {
            search_depth: Some(Depth::Basic),
            ..Default::default()
        },
    )
    .unwrap();

    let overridden = tool
        .effective_request(&json!({"query": "q", "search_depth": "advanced"}))
        .unwrap();
    assert_eq!(overridden["search_depth"], "advanced");

    let fallback = tool.effective_request(&json!({"query": "q"})).unwrap();
    assert_eq!(fallback["search_depth"], "basic");
}

#[test]
fn identical_invocations_produce_identical_effective_requests() {
    let config = ClientConfig::new(Some("k1"), None).unwrap();
    let tool = SearchTool::new(config, SearchDefaults::default()).unwrap();

    let arguments = json!({"query": "q", "include_domains": ["example.com"]});
    let first = tool.effective_request(&arguments).unwrap();
    let second = tool.effective_request(&arguments).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn invoke_sends_the_merged_body_with_locked_values() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(header("authorization", "Bearer test_key"))
        .and(body_partial_json(json!({
            "query": "current events",
            "search_depth": "advanced",
            "max_results": 5,
            "include_answer": false,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let tool = search_tool_at(&server, SearchDefaults::default());
    let output = tool
        .invoke(json!({"query": "current events", "include_answer": true}))
        .await
        .unwrap();

    assert_eq!(output["results"][0]["title"], "t");
    // The output key set is fixed; unset fields are explicit nulls.
    assert!(output["answer"].is_null());
    assert!(output["follow_up_questions"].is_null());
}

#[tokio::test]
async fn extract_tool_targets_the_configured_base_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/extract"))
        .and(body_partial_json(json!({"urls": ["https://x"]})))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"results": [{"url": "https://x", "raw_content": "text"}], "failed_results": []}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::new(Some("k1"), Some(&server.uri())).unwrap();
    let tool = ExtractTool::new(config, ExtractDefaults::default()).unwrap();

    let output = tool.invoke(json!({"urls": ["https://x"]})).await.unwrap();
    assert_eq!(output["results"][0]["raw_content"], "text");
}

#[tokio::test]
async fn validation_failures_never_reach_the_network() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_BODY))
        .expect(0)
        .mount(&server)
        .await;

    let tool = search_tool_at(&server, SearchDefaults::default());

    let unknown = tool
        .invoke(json!({"query": "q", "page_size": 10}))
        .await
        .unwrap_err();
    assert!(matches!(unknown, ToolError::Validation { .. }));
    assert!(unknown.to_string().contains("page_size"));

    // A list where a scalar belongs.
    let wrong_type = tool
        .invoke(json!({"query": ["not", "a", "string"]}))
        .await
        .unwrap_err();
    assert!(matches!(wrong_type, ToolError::Validation { .. }));

    let missing = tool.invoke(json!({})).await.unwrap_err();
    assert!(matches!(missing, ToolError::Validation { .. }));
}

#[tokio::test]
async fn empty_results_surface_a_suggestion() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"query": "q", "results": [], "response_time": 0.1}"#),
        )
        .mount(&server)
        .await;

    let tool = search_tool_at(&server, SearchDefaults::default());
    let error = tool
        .invoke(json!({"query": "q", "time_range": "day"}))
        .await
        .unwrap_err();

    match error {
        ToolError::NoResults { tool, message } => {
            assert_eq!(tool, "tavily_search");
            assert!(message.contains("time_range"));
        }
        other => panic!("expected no-results error, got {:?}", other),
    }
}

#[tokio::test]
async fn service_errors_pass_through_with_the_tool_name() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/map"))
        .respond_with(ResponseTemplate::new(401).set_body_string(
            r#"{"detail": {"error": "Unauthorized: missing or invalid API key."}}"#,
        ))
        .mount(&server)
        .await;

    let config = ClientConfig::new(Some("bad_key"), Some(&server.uri())).unwrap();
    let tool = MapTool::new(config, MapDefaults::default()).unwrap();

    let error = tool
        .invoke(json!({"url": "https://example.com"}))
        .await
        .unwrap_err();

    match error {
        ToolError::Api { tool, source } => {
            assert_eq!(tool, "tavily_map");
            match source {
                Error::Service { status, message } => {
                    assert_eq!(status, 401);
                    assert_eq!(message, "Unauthorized: missing or invalid API key.");
                }
                other => panic!("expected service error, got {:?}", other),
            }
        }
        other => panic!("expected api error, got {:?}", other),
    }
}

#[tokio::test]
async fn registry_dispatches_by_name() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::new(Some("test_key"), Some(&server.uri())).unwrap();
    let registry = standard_tools(&config).unwrap();

    let output = registry
        .invoke("tavily_search", json!({"query": "q"}))
        .await
        .unwrap();
    assert_eq!(output["results"][0]["url"], "https://example.com");
}

#[test]
fn blocking_invoke_round_trip() {
    // The mock server needs a live runtime in the background; the blocking
    // call drives its own.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .unwrap();

    let (uri, _server) = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_BODY))
            .mount(&server)
            .await;
        (server.uri(), server)
    });

    let config = ClientConfig::new(Some("test_key"), Some(&uri)).unwrap();
    let tool = SearchTool::new(config, SearchDefaults::default()).unwrap();

    let output = tool.invoke_blocking(json!({"query": "q"})).unwrap();
    assert_eq!(output["results"][0]["title"], "t");
}
