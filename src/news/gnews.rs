// GNews search API client.
//
// API docs: https://gnews.io/docs/v4#search-endpoint
//
// The API returns 200 with an `errors` array for some failures (bad key,
// quota), so both the HTTP status and the body are checked.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use super::traits::{NewsError, NewsItem, NewsSource};

/// Default GNews API base URL.
pub const DEFAULT_GNEWS_API_URL: &str = "https://gnews.io/api/v4";

/// Outbound request timeout for a single search.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Thin reqwest wrapper around the GNews search endpoint.
pub struct GNewsClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    language: String,
}

impl GNewsClient {
    /// Create a client for `base_url` authenticated with `api_key`.
    ///
    /// `language` filters results (e.g. "en"). An empty key is accepted here
    /// and reported on the first search, so the server can still start.
    pub fn new(base_url: &str, api_key: &str, language: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("newscast/0.1")
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            language: language.to_string(),
        })
    }
}

#[async_trait]
impl NewsSource for GNewsClient {
    async fn search(&self, query: &str, max: usize) -> Result<Vec<NewsItem>, NewsError> {
        if self.api_key.trim().is_empty() {
            return Err(NewsError::MissingApiKey);
        }

        let url = format!("{}/search", self.base_url);
        let max = max.to_string();

        debug!(query = query, "GNews search request");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("lang", self.language.as_str()),
                ("max", max.as_str()),
                ("token", self.api_key.as_str()),
            ])
            .send()
            .await
            .context("GNews request failed")
            .map_err(NewsError::Transport)?;

        let status = response.status();
        let body: SearchResponse = response
            .json()
            .await
            .with_context(|| format!("Failed to parse GNews response (status {status})"))
            .map_err(NewsError::Transport)?;

        if let Some(first) = body.errors.first() {
            warn!(error = %first, "GNews reported an error");
            return Err(NewsError::Api(first.clone()));
        }

        if !status.is_success() {
            return Err(NewsError::Transport(anyhow::anyhow!(
                "GNews returned {status}"
            )));
        }

        Ok(body.articles)
    }
}

// -- Serde types for the search endpoint --

/// Response body of `/search`. `errors` is only present on failure.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub articles: Vec<NewsItem>,
    #[serde(default)]
    pub errors: Vec<String>,
}
