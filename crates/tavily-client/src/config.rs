//! Connection configuration for the Tavily API.

use std::env;
use std::fmt;

use url::Url;

use crate::error::{Error, Result};

/// Well-known public endpoint of the Tavily API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.tavily.com";

/// Environment variable consulted when no explicit API key is given.
pub const API_KEY_ENV_VAR: &str = "TAVILY_API_KEY";

/// Connection parameters shared by every capability.
///
/// Immutable once constructed. The API key is resolved exactly once, at
/// construction: an explicit value wins, otherwise `TAVILY_API_KEY` is read,
/// otherwise construction fails. It is never re-resolved at call time.
#[derive(Clone)]
pub struct ClientConfig {
    api_key: String,
    base_url: Url,
}

impl ClientConfig {
    /// Resolve connection parameters.
    ///
    /// An empty `api_key` or `base_url` is treated the same as `None`.
    ///
    /// # Errors
    /// Returns [`Error::Configuration`] if no API key can be resolved or the
    /// base URL does not parse.
    pub fn new(api_key: Option<&str>, base_url: Option<&str>) -> Result<Self> {
        let api_key = match api_key {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => env::var(API_KEY_ENV_VAR)
                .ok()
                .filter(|key| !key.is_empty())
                .ok_or_else(|| {
                    Error::Configuration(format!(
                        "no Tavily API key was provided and {} is not set",
                        API_KEY_ENV_VAR
                    ))
                })?,
        };

        let base_url = match base_url {
            Some(raw) if !raw.is_empty() => Url::parse(raw)
                .map_err(|e| Error::Configuration(format!("invalid base url '{}': {}", raw, e)))?,
            // The default is a compile-time constant and always parses.
            _ => Url::parse(DEFAULT_API_BASE_URL).expect("default base url"),
        };

        Ok(Self { api_key, base_url })
    }

    /// The resolved API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The resolved base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full target for an endpoint path such as `/search`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}

// The API key is a secret; keep it out of logs and debug output.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}
