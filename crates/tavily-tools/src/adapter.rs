//! Generic tool adapter, parameterized by a capability descriptor.
//!
//! The four POST-based capabilities share one adapter type. Each capability
//! contributes a descriptor (name, endpoint, option table, typed client
//! call); the adapter contributes everything else: schema exposure, argument
//! validation, the default/override merge, and output shaping.

use std::marker::PhantomData;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tavily_client::{ClientConfig, TavilyClient};

use crate::schema::{self, FieldSpec};
use crate::tool::{Tool, ToolDefinition, ToolError};

/// One Tavily endpoint plus the descriptor data the generic adapter needs to
/// expose it as a tool.
#[async_trait]
pub trait Capability: Send + Sync + 'static {
    /// Tool name advertised to the framework.
    const NAME: &'static str;
    /// Path appended to the configured base URL.
    const ENDPOINT: &'static str;

    /// Typed request body the client call accepts.
    type Request: DeserializeOwned + Send;
    /// Typed response body the client call returns.
    type Response: Serialize + Send;

    fn description() -> &'static str;

    /// The option table; schema, validation and merge all derive from it.
    fn fields() -> &'static [FieldSpec];

    /// Issue the effective request through the typed client call.
    async fn call(
        client: &TavilyClient,
        request: Self::Request,
    ) -> tavily_client::Result<Self::Response>;

    /// A suggestion for the caller when the response carried no results.
    /// `None` means an empty response is returned as-is.
    fn no_results_hint(_effective: &Map<String, Value>, _response: &Value) -> Option<String> {
        None
    }
}

/// A [`Tool`] over a [`Capability`], holding the owned API client and the
/// construction-time default layer of the merge.
pub struct ToolAdapter<C: Capability> {
    client: TavilyClient,
    defaults: Map<String, Value>,
    _capability: PhantomData<C>,
}

impl<C: Capability> ToolAdapter<C> {
    /// Build an adapter owning its API client.
    ///
    /// `defaults` is the capability's defaults struct (or any map of option
    /// name to value); fields left unset keep the capability's built-in
    /// defaults. Unknown or ill-typed defaults are rejected here, at
    /// construction.
    pub fn new(config: ClientConfig, defaults: impl Serialize) -> Result<Self, ToolError> {
        let configured = match serde_json::to_value(defaults) {
            Ok(Value::Object(map)) => map,
            Ok(Value::Null) => Map::new(),
            _ => {
                return Err(validation::<C>(
                    "defaults must serialize to a JSON object".to_string(),
                ))
            }
        };

        let defaults =
            schema::base_defaults(C::fields(), &configured).map_err(validation::<C>)?;

        Ok(Self {
            client: TavilyClient::new(config),
            defaults,
            _capability: PhantomData,
        })
    }

    /// The merged request body for `arguments`: a pure function of the
    /// adapter's configuration and the call's arguments. Exposed so callers
    /// and tests can observe exactly what would be sent.
    pub fn effective_request(&self, arguments: &Value) -> Result<Map<String, Value>, ToolError> {
        let arguments = arguments.as_object().ok_or_else(|| {
            validation::<C>("arguments must be a JSON object".to_string())
        })?;
        schema::merge_arguments(C::fields(), &self.defaults, arguments).map_err(validation::<C>)
    }

    /// The API client this adapter issues requests through.
    pub fn client(&self) -> &TavilyClient {
        &self.client
    }
}

#[async_trait]
impl<C: Capability> Tool for ToolAdapter<C> {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: C::NAME.to_string(),
            description: C::description().to_string(),
            input_schema: schema::input_schema(C::fields()),
        }
    }

    async fn invoke(&self, arguments: Value) -> Result<Value, ToolError> {
        let effective = self.effective_request(&arguments)?;
        tracing::debug!(tool = C::NAME, endpoint = C::ENDPOINT, "invoking tavily tool");

        let request: C::Request = serde_json::from_value(Value::Object(effective.clone()))
            .map_err(|e| validation::<C>(e.to_string()))?;

        let response = C::call(&self.client, request)
            .await
            .map_err(|source| ToolError::Api {
                tool: C::NAME.to_string(),
                source,
            })?;

        // Response types are plain data structs; this cannot fail.
        let output = serde_json::to_value(&response).expect("serialize response");

        if results_are_empty(&output) {
            if let Some(hint) = C::no_results_hint(&effective, &output) {
                return Err(ToolError::NoResults {
                    tool: C::NAME.to_string(),
                    message: hint,
                });
            }
        }

        Ok(output)
    }
}

fn validation<C: Capability>(message: String) -> ToolError {
    ToolError::Validation {
        tool: C::NAME.to_string(),
        message,
    }
}

/// True when the response's `results` key holds an empty array.
fn results_are_empty(response: &Value) -> bool {
    response
        .get("results")
        .and_then(Value::as_array)
        .is_some_and(|results| results.is_empty())
}
