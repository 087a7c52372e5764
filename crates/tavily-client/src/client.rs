//! HTTP client for the Tavily API.

use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::crawl::{CrawlRequest, CrawlResponse};
use crate::error::{Error, Result};
use crate::extract::{ExtractRequest, ExtractResponse};
use crate::map::{MapRequest, MapResponse};
use crate::research::{ResearchRequest, ResearchResponse, ResearchResult};
use crate::search::{SearchRequest, SearchResponse};

/// Maximum number of characters of the body quoted in a decode error.
const DECODE_SNIPPET_LEN: usize = 200;

/// Client for the Tavily search, extract, crawl, map and research endpoints.
///
/// One request per call: no retries, no backoff, no caching. The client adds
/// no timeout of its own; cancellation and deadlines belong to the caller.
/// Shared state is limited to the immutable configuration, so a single client
/// can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct TavilyClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl TavilyClient {
    /// Create a client over the given connection configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// The connection configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `POST /search`
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        self.post("/search", request).await
    }

    /// Blocking variant of [`search`](Self::search).
    pub fn search_blocking(&self, request: &SearchRequest) -> Result<SearchResponse> {
        block_on(self.search(request))
    }

    /// `POST /extract`
    pub async fn extract(&self, request: &ExtractRequest) -> Result<ExtractResponse> {
        self.post("/extract", request).await
    }

    /// Blocking variant of [`extract`](Self::extract).
    pub fn extract_blocking(&self, request: &ExtractRequest) -> Result<ExtractResponse> {
        block_on(self.extract(request))
    }

    /// `POST /crawl`
    pub async fn crawl(&self, request: &CrawlRequest) -> Result<CrawlResponse> {
        self.post("/crawl", request).await
    }

    /// Blocking variant of [`crawl`](Self::crawl).
    pub fn crawl_blocking(&self, request: &CrawlRequest) -> Result<CrawlResponse> {
        block_on(self.crawl(request))
    }

    /// `POST /map`
    pub async fn map(&self, request: &MapRequest) -> Result<MapResponse> {
        self.post("/map", request).await
    }

    /// Blocking variant of [`map`](Self::map).
    pub fn map_blocking(&self, request: &MapRequest) -> Result<MapResponse> {
        block_on(self.map(request))
    }

    /// `POST /research` — start a research task.
    pub async fn research(&self, request: &ResearchRequest) -> Result<ResearchResponse> {
        self.post("/research", request).await
    }

    /// Blocking variant of [`research`](Self::research).
    pub fn research_blocking(&self, request: &ResearchRequest) -> Result<ResearchResponse> {
        block_on(self.research(request))
    }

    /// `GET /research/{request_id}` — fetch the results of a research task.
    pub async fn research_result(&self, request_id: &str) -> Result<ResearchResult> {
        self.get(&format!("/research/{}", request_id)).await
    }

    /// Blocking variant of [`research_result`](Self::research_result).
    pub fn research_result_blocking(&self, request_id: &str) -> Result<ResearchResult> {
        block_on(self.research_result(request_id))
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let target = self.config.endpoint(path);
        tracing::debug!(%target, "issuing tavily request");

        let response = self
            .http
            .post(&target)
            .bearer_auth(self.config.api_key())
            .json(body)
            .send()
            .await?;

        decode(response).await
    }

    async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let target = self.config.endpoint(path);
        tracing::debug!(%target, "issuing tavily request");

        let response = self
            .http
            .get(&target)
            .bearer_auth(self.config.api_key())
            .send()
            .await?;

        decode(response).await
    }
}

async fn decode<R: DeserializeOwned>(response: reqwest::Response) -> Result<R> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "tavily api returned an error");
        return Err(Error::Service {
            status: status.as_u16(),
            message: service_message(&body),
        });
    }

    serde_json::from_str(&body).map_err(|_| Error::Decode {
        length: body.len(),
        snippet: body.chars().take(DECODE_SNIPPET_LEN).collect(),
    })
}

/// Pull the message out of a Tavily error body.
///
/// Error bodies look like `{"detail": {"error": "..."}}`; anything else is
/// passed through whole so the caller still sees what the service said.
fn service_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")?
                .get("error")?
                .as_str()
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

/// Drive a client future to completion on a private current-thread runtime.
///
/// Must not be called from within an async runtime.
fn block_on<T>(future: impl Future<Output = Result<T>>) -> Result<T> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(future)
}
