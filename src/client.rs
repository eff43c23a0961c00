// HTTP client for the /analyze endpoint, used by the terminal front end.
//
// The front end runs as its own process. A request that times out or cannot
// connect is reported once as a connectivity error; there is no retry.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

use crate::models::{AnalyzeReply, AnalyzeRequest};

/// How long the front end waits for a complete analysis.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct AnalysisClient {
    client: reqwest::Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("newscast-cli/0.1")
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/analyze", self.base_url)
    }

    /// Request an analysis. A user-facing `{error}` reply is returned as
    /// `AnalyzeReply::Error`, not as an Err.
    pub async fn analyze(&self, company: &str, language: &str) -> Result<AnalyzeReply> {
        let request = AnalyzeRequest::new(company.trim(), language);
        let url = self.endpoint();

        debug!(url = %url, company = %request.company(), "Sending analysis request");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .with_context(|| format!("Error connecting to the API at {url}"))?
            .error_for_status()
            .with_context(|| format!("Error connecting to the API at {url}"))?;

        response
            .json::<AnalyzeReply>()
            .await
            .context("Failed to parse analysis response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = AnalysisClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8000/analyze");
    }
}
