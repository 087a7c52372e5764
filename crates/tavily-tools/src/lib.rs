//! Tavily tools for agent frameworks.
//!
//! Exposes the Tavily search, extract, crawl, map and research capabilities
//! as schema-described [`Tool`]s an orchestration framework can advertise and
//! dispatch to. Each tool merges construction-time defaults with per-call
//! arguments (locked fields always keep their configured value), issues a
//! single request through `tavily-client`, and returns the response with its
//! full fixed key set.
//!
//! ```no_run
//! use serde_json::json;
//! use tavily_client::ClientConfig;
//! use tavily_tools::search::{SearchDefaults, SearchTool};
//! use tavily_tools::Tool;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::new(Some("tvly-..."), None)?;
//!
//! let tool = SearchTool::new(
//!     config,
//!     SearchDefaults {
//!         max_results: Some(3),
//!         ..Default::default()
//!     },
//! )?;
//!
//! let results = tool
//!     .invoke(json!({"query": "what happened at the last wimbledon"}))
//!     .await?;
//! println!("{}", results);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod crawl;
pub mod extract;
pub mod map;
pub mod registry;
pub mod research;
pub mod schema;
pub mod search;
pub mod tool;

pub use adapter::{Capability, ToolAdapter};
pub use crawl::{CrawlDefaults, CrawlTool};
pub use extract::{ExtractDefaults, ExtractTool};
pub use map::{MapDefaults, MapTool};
pub use registry::{standard_tools, ToolRegistry};
pub use research::{GetResearchTool, ResearchDefaults, ResearchTool};
pub use search::{SearchDefaults, SearchTool};
pub use tool::{Tool, ToolDefinition, ToolError};
