//! Registry handing a set of tools to an orchestration framework.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tavily_client::ClientConfig;

use crate::crawl::{CrawlDefaults, CrawlTool};
use crate::extract::{ExtractDefaults, ExtractTool};
use crate::map::{MapDefaults, MapTool};
use crate::research::{GetResearchTool, ResearchDefaults, ResearchTool};
use crate::search::{SearchDefaults, SearchTool};
use crate::tool::{Tool, ToolDefinition, ToolError};

/// Name-keyed collection of tools, the unit a framework consumes.
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under its declared name, replacing any previous tool
    /// with the same name.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.definition().name, tool);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Registered tool names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// The definitions of every registered tool, sorted by name.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut definitions: Vec<ToolDefinition> =
            self.tools.values().map(|tool| tool.definition()).collect();
        definitions.sort_by(|a, b| a.name.cmp(&b.name));
        definitions
    }

    /// Invoke a registered tool by name.
    pub async fn invoke(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
        let tool = self.get(name).ok_or_else(|| ToolError::UnknownTool {
            name: name.to_string(),
        })?;
        tool.invoke(arguments).await
    }
}

/// Build a registry containing every Tavily tool with built-in defaults.
///
/// Each tool owns its API client over a clone of `config`.
pub fn standard_tools(config: &ClientConfig) -> Result<ToolRegistry, ToolError> {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(SearchTool::new(
        config.clone(),
        SearchDefaults::default(),
    )?));
    registry.register(Arc::new(ExtractTool::new(
        config.clone(),
        ExtractDefaults::default(),
    )?));
    registry.register(Arc::new(CrawlTool::new(
        config.clone(),
        CrawlDefaults::default(),
    )?));
    registry.register(Arc::new(MapTool::new(
        config.clone(),
        MapDefaults::default(),
    )?));
    registry.register(Arc::new(ResearchTool::new(
        config.clone(),
        ResearchDefaults::default(),
    )?));
    registry.register(Arc::new(GetResearchTool::new(config.clone())));
    Ok(registry)
}
