//! Typed client for the NewsAPI.org HTTP API: request construction,
//! response validation, session-scoped deduplication and field
//! normalization for paging/search/category listings.

pub mod config;
pub mod models;
pub mod service;

pub use config::{ConfigError, NewsConfig};
pub use models::{Article, ArticleSource, NewsFilters, NewsPage, SortBy, SourceInfo};
pub use service::news::{format_date, NewsService, NewsServiceError, NewsSession, RequestToken};
