use reqwest::Client;
use tracing::{info, warn};

use crate::config::NewsConfig;
use crate::models::SourceInfo;

use super::response::SourcesResponse;
use super::NewsServiceError;

/// Fetch the catalogue of available sources. Transport and decode
/// failures map to `Fetch`; an embedded error status maps to
/// `SourcesFetch`.
pub(crate) async fn fetch_sources(
    http: &Client,
    config: &NewsConfig,
) -> Result<Vec<SourceInfo>, NewsServiceError> {
    let url = format!("{}/sources", config.base_url);

    info!("fetching news sources");

    let response = http
        .get(&url)
        .query(&[("apiKey", config.api_key.as_str())])
        .send()
        .await
        .map_err(|e| {
            warn!("sources request failed: {e}");
            NewsServiceError::Fetch(format!("sources request failed: {e}"))
        })?;

    let parsed: SourcesResponse = response.json().await.map_err(|e| {
        warn!("failed to decode sources response: {e}");
        NewsServiceError::Fetch(format!("sources decode failed: {e}"))
    })?;

    match parsed {
        SourcesResponse::Ok { sources } => {
            info!(count = sources.len(), "fetched news sources");
            Ok(sources)
        }
        SourcesResponse::Error { code, message } => {
            let code = code.unwrap_or_else(|| "unknown".to_string());
            let message = message.unwrap_or_else(|| "Unknown error".to_string());
            warn!(code, message, "sources endpoint returned error status");
            Err(NewsServiceError::SourcesFetch(format!("{code}: {message}")))
        }
    }
}
