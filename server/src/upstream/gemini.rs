//! `generateContent` HTTP client.
//!
//! Thin wrapper: one POST per request, API key in a header (never in the
//! URL, so it cannot leak through error messages that echo the URL).

use std::time::Duration;

use axum::body::Bytes;
use reqwest::header::CONTENT_TYPE;

use super::config::UpstreamConfig;
use super::types::{Upstream, UpstreamError, UpstreamReply};

const API_KEY_HEADER: &str = "x-goog-api-key";

// =============================================================================
// CLIENT
// =============================================================================

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
    model: String,
}

impl GeminiClient {
    /// # Errors
    ///
    /// Returns [`UpstreamError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| UpstreamError::HttpClientBuild(e.to_string()))?;
        let endpoint = endpoint_url(&config.base_url, &config.model);
        Ok(Self { http, api_key: config.api_key, endpoint, model: config.model })
    }

    /// Build a client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, UpstreamError> {
        Self::new(UpstreamConfig::from_env()?)
    }
}

#[async_trait::async_trait]
impl Upstream for GeminiClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, body: Bytes) -> Result<UpstreamReply, UpstreamError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| UpstreamError::Request(e.without_url().to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::Request(e.without_url().to_string()))?;

        Ok(UpstreamReply { status, body })
    }
}

fn endpoint_url(base_url: &str, model: &str) -> String {
    format!("{}/models/{model}:generateContent", base_url.trim_end_matches('/'))
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
