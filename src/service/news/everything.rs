use crate::config::NewsConfig;
use crate::models::{NewsFilters, SortBy};

use super::effective_page_size;

/// Search term used when the caller supplied none, so an everything
/// request is never parameter-less.
const DEFAULT_QUERY: &str = "news";

/// Query parameters for an everything (full-text corpus) request.
pub(crate) fn everything_params(
    config: &NewsConfig,
    filters: &NewsFilters,
) -> Vec<(&'static str, String)> {
    let mut params = vec![("apiKey", config.api_key.clone())];

    let query = match &filters.query {
        Some(q) if !q.is_empty() => q.clone(),
        _ => DEFAULT_QUERY.to_string(),
    };
    params.push(("q", query));

    if let Some(sources) = &filters.sources {
        params.push(("sources", sources.clone()));
    }

    let language = filters
        .language
        .clone()
        .unwrap_or_else(|| config.default_language.clone());
    params.push(("language", language));

    let sort_by = filters.sort_by.unwrap_or(SortBy::PublishedAt);
    params.push(("sortBy", sort_by.as_str().to_string()));

    params.push((
        "pageSize",
        effective_page_size(config, filters.page_size).to_string(),
    ));

    if let Some(page) = filters.page.filter(|p| *p >= 1) {
        params.push(("page", page.to_string()));
    }

    params
}
