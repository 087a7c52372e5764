//! Client for the Tavily web search, extract, crawl, map and research APIs.
//!
//! This crate owns the connection configuration (API key, base URL) and the
//! HTTP exchange; it knows nothing about tools or agent frameworks. The
//! companion `tavily-tools` crate layers the framework-facing tool surface on
//! top of it.
//!
//! ```no_run
//! use tavily_client::search::SearchRequest;
//! use tavily_client::{ClientConfig, TavilyClient};
//!
//! # async fn run() -> tavily_client::Result<()> {
//! let config = ClientConfig::new(Some("tvly-..."), None)?;
//! let client = TavilyClient::new(config);
//!
//! let response = client
//!     .search(&SearchRequest {
//!         query: "what happened at the last wimbledon".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! for result in response.results {
//!     println!("{}: {}", result.title, result.url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod crawl;
pub mod error;
pub mod extract;
pub mod map;
pub mod research;
pub mod search;
pub mod types;

pub use client::TavilyClient;
pub use config::{ClientConfig, API_KEY_ENV_VAR, DEFAULT_API_BASE_URL};
pub use error::{Error, Result};
