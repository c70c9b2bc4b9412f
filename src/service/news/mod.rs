use std::time::Duration as StdDuration;

use reqwest::header::ACCEPT;
use tracing::{info, warn};

use crate::config::{self, ConfigError, NewsConfig};
use crate::models::{NewsFilters, NewsPage, SortBy, SourceInfo};

mod everything;
mod headlines;
mod response;
pub mod session;
mod sources;
mod transform;

pub use session::{NewsSession, RequestToken};
pub use transform::format_date;

use response::NewsResponse;

#[derive(Debug, thiserror::Error)]
pub enum NewsServiceError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Transport failure, non-success HTTP status, or undecodable body.
    #[error("failed to fetch news: {0}")]
    Fetch(String),
    /// Well-formed response whose embedded status signals failure.
    #[error("news API returned error status: {code}: {message}")]
    ApiStatus { code: String, message: String },
    /// Embedded status failure on the sources endpoint.
    #[error("failed to fetch sources: {0}")]
    SourcesFetch(String),
}

/// Single point of contact with the remote news API. Owns request
/// construction, response validation, deduplication, and field
/// normalization. Stateless aside from configuration: session state is
/// owned by the caller and passed into each operation.
pub struct NewsService {
    http: reqwest::Client,
    config: NewsConfig,
}

impl NewsService {
    pub fn new(config: NewsConfig) -> Result<Self, NewsServiceError> {
        let http = reqwest::Client::builder()
            .timeout(StdDuration::from_secs(15))
            .build()
            .map_err(|e| NewsServiceError::Fetch(format!("failed to build http client: {e}")))?;
        Ok(Self { http, config })
    }

    pub fn from_env() -> Result<Self, NewsServiceError> {
        Self::new(NewsConfig::from_env()?)
    }

    pub fn config(&self) -> &NewsConfig {
        &self.config
    }

    /// Fetch a page of top headlines. The default country applies only
    /// when the filters carry neither a country nor a sources value.
    pub async fn fetch_top_headlines(
        &self,
        session: &mut NewsSession,
        filters: &NewsFilters,
    ) -> Result<NewsPage, NewsServiceError> {
        let params = headlines::headline_params(&self.config, filters);
        self.fetch_page("top-headlines", params, session).await
    }

    /// Fetch a page from the full-text corpus endpoint.
    pub async fn fetch_everything(
        &self,
        session: &mut NewsSession,
        filters: &NewsFilters,
    ) -> Result<NewsPage, NewsServiceError> {
        let params = everything::everything_params(&self.config, filters);
        self.fetch_page("everything", params, session).await
    }

    /// General listing entry point: a non-blank search term routes to the
    /// full-text endpoint with the trimmed query, anything else to top
    /// headlines.
    pub async fn fetch_news(
        &self,
        session: &mut NewsSession,
        filters: &NewsFilters,
    ) -> Result<NewsPage, NewsServiceError> {
        match effective_search(filters) {
            Some(query) => {
                let mut filters = filters.clone();
                filters.query = Some(query.to_string());
                self.fetch_everything(session, &filters).await
            }
            None => self.fetch_top_headlines(session, filters).await,
        }
    }

    /// Explicit search: always the full-text endpoint, trimmed query,
    /// relevancy ordering forced. A blank query is not rejected here; it
    /// falls through to the endpoint's generic default term.
    pub async fn search_news(
        &self,
        session: &mut NewsSession,
        query: &str,
        filters: &NewsFilters,
    ) -> Result<NewsPage, NewsServiceError> {
        let filters = search_filters(query, filters);
        self.fetch_everything(session, &filters).await
    }

    /// Top headlines with the category forced from the argument,
    /// overriding any category in the filters.
    pub async fn fetch_news_by_category(
        &self,
        session: &mut NewsSession,
        category: &str,
        filters: &NewsFilters,
    ) -> Result<NewsPage, NewsServiceError> {
        let mut filters = filters.clone();
        filters.category = Some(category.to_string());
        self.fetch_top_headlines(session, &filters).await
    }

    /// Catalogue of available sources.
    pub async fn fetch_sources(&self) -> Result<Vec<SourceInfo>, NewsServiceError> {
        sources::fetch_sources(&self.http, &self.config).await
    }

    pub fn available_categories(&self) -> &'static [&'static str] {
        config::CATEGORIES
    }

    pub fn available_countries(&self) -> &'static [&'static str] {
        config::COUNTRIES
    }

    pub fn available_languages(&self) -> &'static [&'static str] {
        config::LANGUAGES
    }

    /// Shared flow for both article endpoints: send, validate transport
    /// and HTTP status, parse the tagged body, then deduplicate against
    /// the session before normalizing. All-or-nothing: no partial results
    /// on failure, no internal retries.
    async fn fetch_page(
        &self,
        endpoint: &str,
        params: Vec<(&'static str, String)>,
        session: &mut NewsSession,
    ) -> Result<NewsPage, NewsServiceError> {
        let url = format!("{}/{}", self.config.base_url, endpoint);

        info!(endpoint, "fetching news");

        let response = self
            .http
            .get(&url)
            .query(&params)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                warn!(endpoint, "news request failed: {e}");
                NewsServiceError::Fetch(format!("news request failed: {e}"))
            })?;

        let status = response.status();
        info!(endpoint, status = %status, "news API responded");

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read body".to_string());
            warn!(endpoint, %status, body, "news API returned error status");
            return Err(NewsServiceError::Fetch(format!(
                "{} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let raw_bytes = response.bytes().await.map_err(|e| {
            warn!(endpoint, "failed to read news body: {e}");
            NewsServiceError::Fetch(format!("news body read failed: {e}"))
        })?;

        let parsed: NewsResponse = serde_json::from_slice(&raw_bytes).map_err(|e| {
            let preview = String::from_utf8_lossy(&raw_bytes[..raw_bytes.len().min(500)]);
            warn!(endpoint, body = %preview, "failed to decode news response: {e}");
            NewsServiceError::Fetch(format!("news decode failed: {e}"))
        })?;

        match parsed {
            NewsResponse::Ok {
                total_results,
                articles,
            } => {
                let received = articles.len();
                let kept = transform::dedup_articles(session, articles);
                let articles = transform::normalize_articles(kept);
                info!(
                    endpoint,
                    total_results,
                    received,
                    unique = articles.len(),
                    "news page ready"
                );
                Ok(NewsPage {
                    total_results,
                    articles,
                })
            }
            NewsResponse::Error { code, message } => {
                let code = code.unwrap_or_else(|| "unknown".to_string());
                let message = message.unwrap_or_else(|| "Unknown error".to_string());
                warn!(endpoint, code, message, "news API returned error status");
                Err(NewsServiceError::ApiStatus { code, message })
            }
        }
    }
}

/// Trimmed, non-blank search text, if any. Decides which endpoint backs a
/// general listing.
fn effective_search(filters: &NewsFilters) -> Option<&str> {
    filters
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
}

/// Everything-request filters for an explicit search.
fn search_filters(query: &str, filters: &NewsFilters) -> NewsFilters {
    let mut filters = filters.clone();
    filters.query = Some(query.trim().to_string());
    filters.sort_by = Some(SortBy::Relevancy);
    filters
}

/// Caller page size in (0,100] is used verbatim; anything else falls back
/// to the configured default rather than being capped.
pub(crate) fn effective_page_size(config: &NewsConfig, requested: Option<u32>) -> u32 {
    match requested {
        Some(size) if (1..=100).contains(&size) => size,
        _ => config.default_page_size,
    }
}

pub use NewsServiceError as Error;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_search_routes_to_headlines() {
        assert_eq!(effective_search(&NewsFilters::default()), None);

        let filters = NewsFilters {
            query: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(effective_search(&filters), None);
    }

    #[test]
    fn search_text_is_trimmed_before_routing() {
        let filters = NewsFilters {
            query: Some("  climate  ".to_string()),
            ..Default::default()
        };
        assert_eq!(effective_search(&filters), Some("climate"));
    }

    #[test]
    fn search_filters_force_relevancy_and_trim() {
        let base = NewsFilters {
            sort_by: Some(SortBy::Popularity),
            page: Some(2),
            ..Default::default()
        };
        let filters = search_filters("  rust language  ", &base);
        assert_eq!(filters.query.as_deref(), Some("rust language"));
        assert_eq!(filters.sort_by, Some(SortBy::Relevancy));
        assert_eq!(filters.page, Some(2));
    }

    #[test]
    fn fetch_error_message_carries_status_and_reason() {
        let err = NewsServiceError::Fetch("429 Too Many Requests".to_string());
        assert_eq!(
            err.to_string(),
            "failed to fetch news: 429 Too Many Requests"
        );
    }

    #[test]
    fn api_status_error_carries_code_and_message() {
        let err = NewsServiceError::ApiStatus {
            code: "rateLimited".to_string(),
            message: "You have been rate limited.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "news API returned error status: rateLimited: You have been rate limited."
        );
    }
}
