// News source trait: the seam in front of the search API.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// A raw search hit. Every field may be missing or null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Why a search produced no usable items.
#[derive(Debug, Error)]
pub enum NewsError {
    #[error("News API key is missing or invalid.")]
    MissingApiKey,
    /// The API answered but reported an application-level error.
    #[error("News API error: {0}")]
    Api(String),
    #[error("Failed to fetch articles: {0:#}")]
    Transport(#[source] anyhow::Error),
}

/// Trait for searching news by free-text query.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Return at most `max` items matching `query`.
    async fn search(&self, query: &str, max: usize) -> Result<Vec<NewsItem>, NewsError>;
}
