//! Option types shared across capabilities.

use serde::{Deserialize, Serialize};

/// Extraction/search thoroughness. `Advanced` retrieves more data with
/// higher success but may increase latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Depth {
    Basic,
    Advanced,
}

/// Format of extracted page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Markdown,
    Text,
}

/// Predefined page categories recognized by the crawl and map endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Careers,
    Blog,
    Documentation,
    About,
    Pricing,
    Community,
    Developers,
    Contact,
    Media,
}
