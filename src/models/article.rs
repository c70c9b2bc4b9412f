use serde::{Deserialize, Serialize};

/// Publication a normalized article came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    pub id: Option<String>,
    pub name: String,
}

/// One normalized news item. `url` is the deduplication key and is never
/// empty after normalization. Articles are value objects: materialized per
/// response and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub source: ArticleSource,
    pub author: String,
    pub title: String,
    pub description: String,
    pub url: String,
    /// `None` when the API supplied no image; placeholder substitution is a
    /// presentation concern, not this layer's.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// RFC 3339 timestamp string as returned by the API.
    pub published_at: String,
    pub content: String,
}

/// One deduplicated, normalized page of results. Article order is whatever
/// the remote API returned; the client never re-sorts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsPage {
    pub total_results: u32,
    pub articles: Vec<Article>,
}
