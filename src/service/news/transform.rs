//! Deduplication and normalization of fetched articles, plus the date
//! formatting helper used when presenting `published_at` values.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::{Article, ArticleSource};
use crate::service::news::response::{RawArticle, RawSource};
use crate::service::news::session::NewsSession;

const FALLBACK_TITLE: &str = "Untitled Article";
const FALLBACK_DESCRIPTION: &str = "No description available.";
const FALLBACK_CONTENT: &str = "No content available.";
const FALLBACK_AUTHOR: &str = "Unknown Author";
const FALLBACK_SOURCE_NAME: &str = "Unknown Source";
const FALLBACK_URL: &str = "#";
const FALLBACK_DATE: &str = "Unknown date";

/// Drop articles whose URL was already returned during this session,
/// recording fresh ones, in response order. Runs before normalization, so
/// an article with no URL is never keyed into the set: such articles are
/// always kept, even when several appear in one response.
pub(crate) fn dedup_articles(
    session: &mut NewsSession,
    articles: Vec<RawArticle>,
) -> Vec<RawArticle> {
    articles
        .into_iter()
        .filter(|article| match article.url.as_deref() {
            None => true,
            Some(url) => {
                let fresh = session.mark_seen(url);
                if !fresh {
                    debug!(title = ?article.title, "skipping duplicate article");
                }
                fresh
            }
        })
        .collect()
}

/// Replace missing or empty fields with their fixed fallbacks. Content
/// falls back to the raw description before its own literal.
pub(crate) fn normalize_articles(articles: Vec<RawArticle>) -> Vec<Article> {
    articles.into_iter().map(normalize_article).collect()
}

fn normalize_article(raw: RawArticle) -> Article {
    let content = non_empty(raw.content)
        .or_else(|| non_empty(raw.description.clone()))
        .unwrap_or_else(|| FALLBACK_CONTENT.to_string());

    Article {
        source: normalize_source(raw.source),
        author: or_fallback(raw.author, FALLBACK_AUTHOR),
        title: or_fallback(raw.title, FALLBACK_TITLE),
        description: or_fallback(raw.description, FALLBACK_DESCRIPTION),
        url: or_fallback(raw.url, FALLBACK_URL),
        image_url: non_empty(raw.url_to_image),
        published_at: non_empty(raw.published_at).unwrap_or_else(|| Utc::now().to_rfc3339()),
        content,
    }
}

fn normalize_source(source: Option<RawSource>) -> ArticleSource {
    match source {
        Some(source) => ArticleSource {
            id: source.id,
            name: or_fallback(source.name, FALLBACK_SOURCE_NAME),
        },
        None => ArticleSource {
            id: None,
            name: FALLBACK_SOURCE_NAME.to_string(),
        },
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn or_fallback(value: Option<String>, fallback: &str) -> String {
    non_empty(value).unwrap_or_else(|| fallback.to_string())
}

/// Render an RFC 3339 timestamp as a short human-readable date, e.g.
/// `"Jan 15, 2024, 10:00 AM"`. Returns `"Unknown date"` on any parse
/// failure; never panics.
pub fn format_date(value: &str) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(date) => date.format("%b %-d, %Y, %I:%M %p").to_string(),
        Err(_) => FALLBACK_DATE.to_string(),
    }
}
