//! The framework-facing tool contract.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// What an orchestration framework needs to advertise a tool: a fixed name,
/// a human-readable description, and a JSON schema for its arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// Errors surfaced from a tool invocation.
#[derive(Error, Debug)]
pub enum ToolError {
    /// An argument fell outside the declared schema, or had the wrong type.
    /// Raised before any network call is made.
    #[error("{tool}: invalid arguments: {message}")]
    Validation { tool: String, message: String },

    /// The underlying API call failed. The client error passes through with
    /// its content unchanged, tagged with the tool that raised it.
    #[error("{tool}: {source}")]
    Api {
        tool: String,
        #[source]
        source: tavily_client::Error,
    },

    /// The call succeeded but came back empty; `message` suggests what to
    /// change.
    #[error("{tool}: {message}")]
    NoResults { tool: String, message: String },

    /// No tool with the requested name is registered.
    #[error("unknown tool '{name}'")]
    UnknownTool { name: String },
}

/// A callable, schema-described operation an agent framework can dispatch to.
///
/// Implementations are stateless beyond the configuration captured at
/// construction; concurrent invocations are independent.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The name, description and argument schema advertised to the framework.
    fn definition(&self) -> ToolDefinition;

    /// Invoke the tool with a JSON object of arguments.
    async fn invoke(&self, arguments: Value) -> Result<Value, ToolError>;

    /// Blocking variant of [`invoke`](Tool::invoke) for synchronous callers.
    ///
    /// Drives the async path on a private current-thread runtime; must not be
    /// called from within an async runtime.
    fn invoke_blocking(&self, arguments: Value) -> Result<Value, ToolError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ToolError::Api {
                tool: self.definition().name,
                source: tavily_client::Error::Runtime(e),
            })?;
        runtime.block_on(self.invoke(arguments))
    }
}
