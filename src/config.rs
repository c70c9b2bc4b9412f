use std::env;

use thiserror::Error;

/// Categories accepted by the top-headlines endpoint.
pub const CATEGORIES: &[&str] = &[
    "business",
    "entertainment",
    "general",
    "health",
    "science",
    "sports",
    "technology",
];

/// Countries with a supported headline feed.
pub const COUNTRIES: &[&str] = &[
    "us", "gb", "ca", "au", "de", "fr", "it", "jp", "kr", "nl", "no", "se",
];

/// Languages accepted by the everything endpoint.
pub const LANGUAGES: &[&str] = &["en", "de", "fr", "it", "nl", "no", "se"];

const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("news api key not set (NEWS_API_KEY)")]
    MissingApiKey,
}

/// Static configuration for the news client. The client holds no other
/// state; session state lives with the caller.
#[derive(Debug, Clone)]
pub struct NewsConfig {
    pub api_key: String,
    pub base_url: String,
    pub default_country: String,
    pub default_category: String,
    pub default_page_size: u32,
    pub default_language: String,
}

impl NewsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            default_country: "us".to_string(),
            default_category: "general".to_string(),
            default_page_size: 20,
            default_language: "en".to_string(),
        }
    }

    /// Build a config from the environment. `NEWS_API_KEY` is required;
    /// `NEWS_API_BASE_URL` optionally overrides the production endpoint.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("NEWS_API_KEY").map_err(|_| ConfigError::MissingApiKey)?;
        let mut config = Self::new(api_key);
        if let Ok(base_url) = env::var("NEWS_API_BASE_URL") {
            config.base_url = base_url;
        }
        Ok(config)
    }
}
