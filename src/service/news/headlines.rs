use crate::config::NewsConfig;
use crate::models::NewsFilters;

use super::effective_page_size;

/// Query parameters for a top-headlines request.
///
/// The default country applies only when the caller gave neither a country
/// nor a sources filter; `sources` suppresses `country` entirely, explicit
/// or defaulted, per the remote API's mutual-exclusion rule.
pub(crate) fn headline_params(
    config: &NewsConfig,
    filters: &NewsFilters,
) -> Vec<(&'static str, String)> {
    let mut params = vec![("apiKey", config.api_key.clone())];

    if filters.sources.is_none() {
        let country = filters
            .country
            .clone()
            .unwrap_or_else(|| config.default_country.clone());
        params.push(("country", country));
    }

    if let Some(category) = &filters.category {
        params.push(("category", category.clone()));
    }

    if let Some(sources) = &filters.sources {
        params.push(("sources", sources.clone()));
    }

    if let Some(query) = &filters.query {
        params.push(("q", query.clone()));
    }

    params.push((
        "pageSize",
        effective_page_size(config, filters.page_size).to_string(),
    ));

    if let Some(page) = filters.page.filter(|p| *p >= 1) {
        params.push(("page", page.to_string()));
    }

    params
}
