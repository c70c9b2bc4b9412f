//! Wire shapes for the news API. Responses are parsed strictly at this
//! boundary: a body either matches one of the tagged variants or the call
//! fails, so no loose JSON travels deeper into the crate.

use serde::Deserialize;

use crate::models::SourceInfo;

/// Body of the top-headlines and everything endpoints, tagged on the
/// embedded `status` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub(crate) enum NewsResponse {
    Ok {
        #[serde(rename = "totalResults")]
        total_results: u32,
        articles: Vec<RawArticle>,
    },
    Error {
        code: Option<String>,
        message: Option<String>,
    },
}

/// Body of the sources endpoint.
#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub(crate) enum SourcesResponse {
    Ok { sources: Vec<SourceInfo> },
    Error {
        code: Option<String>,
        message: Option<String>,
    },
}

/// Article exactly as the API sends it. Every field may be absent or null;
/// normalization happens after deduplication, in `transform`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawArticle {
    pub source: Option<RawSource>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "urlToImage")]
    pub url_to_image: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawSource {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ok_body() {
        let json = r#"{
            "status": "ok",
            "totalResults": 2,
            "articles": [{
                "source": {"id": null, "name": "BBC News"},
                "author": "Jane Doe",
                "title": "Markets rally",
                "description": "Stocks climbed on Tuesday",
                "url": "https://bbc.co.uk/markets-rally",
                "urlToImage": "https://bbc.co.uk/image.jpg",
                "publishedAt": "2024-01-15T10:00:00Z",
                "content": "Full article content here..."
            }]
        }"#;

        let parsed: NewsResponse = serde_json::from_str(json).unwrap();
        match parsed {
            NewsResponse::Ok {
                total_results,
                articles,
            } => {
                assert_eq!(total_results, 2);
                assert_eq!(articles.len(), 1);
                let article = &articles[0];
                assert_eq!(article.title.as_deref(), Some("Markets rally"));
                assert_eq!(
                    article.url_to_image.as_deref(),
                    Some("https://bbc.co.uk/image.jpg")
                );
                assert_eq!(
                    article.source.as_ref().unwrap().name.as_deref(),
                    Some("BBC News")
                );
            }
            NewsResponse::Error { .. } => panic!("expected ok variant"),
        }
    }

    #[test]
    fn parses_error_body() {
        let json = r#"{
            "status": "error",
            "code": "apiKeyInvalid",
            "message": "Your API key is invalid or incorrect."
        }"#;

        let parsed: NewsResponse = serde_json::from_str(json).unwrap();
        match parsed {
            NewsResponse::Error { code, message } => {
                assert_eq!(code.as_deref(), Some("apiKeyInvalid"));
                assert!(message.unwrap().contains("invalid"));
            }
            NewsResponse::Ok { .. } => panic!("expected error variant"),
        }
    }

    #[test]
    fn article_tolerates_missing_fields() {
        let json = r#"{"title": "Bare minimum"}"#;
        let article: RawArticle = serde_json::from_str(json).unwrap();
        assert_eq!(article.title.as_deref(), Some("Bare minimum"));
        assert!(article.source.is_none());
        assert!(article.url.is_none());
        assert!(article.published_at.is_none());
    }

    #[test]
    fn parses_sources_body() {
        let json = r#"{
            "status": "ok",
            "sources": [{
                "id": "bbc-news",
                "name": "BBC News",
                "description": "BBC news coverage",
                "url": "https://www.bbc.co.uk/news",
                "category": "general",
                "language": "en",
                "country": "gb"
            }]
        }"#;

        let parsed: SourcesResponse = serde_json::from_str(json).unwrap();
        match parsed {
            SourcesResponse::Ok { sources } => {
                assert_eq!(sources.len(), 1);
                assert_eq!(sources[0].id, "bbc-news");
                assert_eq!(sources[0].country.as_deref(), Some("gb"));
            }
            SourcesResponse::Error { .. } => panic!("expected ok variant"),
        }
    }
}
