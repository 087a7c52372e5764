//! Error types for the Tavily API client.

use thiserror::Error;

/// Errors that can occur while configuring or calling the Tavily API.
///
/// Every failure is surfaced to the caller; nothing is retried or silently
/// replaced with a default.
#[derive(Error, Debug)]
pub enum Error {
    /// API key or base URL could not be resolved at construction time.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Network-level failure (DNS, connection refused, timed out).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status. `message` is the error
    /// body's own message, unmodified.
    #[error("tavily api error (status {status}): {message}")]
    Service { status: u16, message: String },

    /// The response body was not valid JSON. Carries the body size and a
    /// bounded snippet for diagnosis.
    #[error("invalid json in response body ({length} bytes): {snippet}")]
    Decode { length: usize, snippet: String },

    /// A blocking entry point failed to start its runtime.
    #[error("failed to start blocking runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Convenience alias used throughout the client.
pub type Result<T> = std::result::Result<T, Error>;
