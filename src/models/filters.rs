use serde::{Deserialize, Serialize};

/// Sort order accepted by the everything endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    Relevancy,
    Popularity,
    PublishedAt,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Relevancy => "relevancy",
            SortBy::Popularity => "popularity",
            SortBy::PublishedAt => "publishedAt",
        }
    }
}

/// Caller-supplied request filters. Every field is optional; the client
/// fills in configured defaults where the remote API requires a value.
///
/// `sources` and `country` are mutually exclusive per the remote API:
/// supplying `sources` suppresses `country`, including an explicit one.
#[derive(Debug, Clone, Default)]
pub struct NewsFilters {
    pub category: Option<String>,
    pub country: Option<String>,
    pub language: Option<String>,
    /// Full-text search term (`q` on the wire).
    pub query: Option<String>,
    /// Comma-separated source identifiers.
    pub sources: Option<String>,
    /// Effective range (0,100]; anything else falls back to the default.
    pub page_size: Option<u32>,
    /// 1-based page number; 0 is treated as absent.
    pub page: Option<u32>,
    pub sort_by: Option<SortBy>,
}
