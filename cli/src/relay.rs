//! HTTP client for the relay.

use std::time::Duration;

use serde_json::Value;
use wire::relay::{GENERATE_PATH, HEALTH_PATH, INFO_PATH, InfoResponse};
use wire::{ErrorBody, GenerateContentRequest, GenerateContentResponse, gemini};

use crate::error::CliError;

#[cfg(test)]
#[path = "relay_test.rs"]
mod tests;

/// Anything that can turn a `generateContent` request into a response.
///
/// The relay is the production implementation; tests substitute canned
/// responses.
#[async_trait::async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, request: &GenerateContentRequest) -> Result<GenerateContentResponse, CliError>;
}

pub struct RelayClient {
    http: reqwest::Client,
    base_url: String,
}

impl RelayClient {
    /// # Errors
    ///
    /// Returns [`CliError::Http`] if the HTTP client fails to build.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CliError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// # Errors
    ///
    /// Fails when the relay is unreachable or unhealthy.
    pub async fn ping(&self) -> Result<(), CliError> {
        let response = self.http.get(self.url(HEALTH_PATH)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CliError::Relay {
                status: status.as_u16(),
                code: "E_UNHEALTHY".to_owned(),
                message: "health check failed".to_owned(),
            });
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Fails when the relay is unreachable or answers with unexpected JSON.
    pub async fn info(&self) -> Result<InfoResponse, CliError> {
        let text = self.http.get(self.url(INFO_PATH)).send().await?.error_for_status()?.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait::async_trait]
impl ImageGenerator for RelayClient {
    async fn generate(&self, request: &GenerateContentRequest) -> Result<GenerateContentResponse, CliError> {
        tracing::debug!(parts = request.part_count(), url = %self.url(GENERATE_PATH), "sending generate request");
        let response = self.http.post(self.url(GENERATE_PATH)).json(request).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        tracing::debug!(status, bytes = text.len(), "relay answered");

        if !(200..300).contains(&status) {
            return Err(classify_failure(status, &text));
        }
        Ok(gemini::parse_response(&text)?)
    }
}

/// Tell a relay-originated error from an upstream error passed through.
fn classify_failure(status: u16, body: &str) -> CliError {
    if let Ok(err) = serde_json::from_str::<ErrorBody>(body) {
        return CliError::Relay { status, code: err.code, message: err.message };
    }
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.pointer("/error/message").and_then(Value::as_str).map(str::to_owned))
        .unwrap_or_else(|| body.trim().chars().take(300).collect());
    CliError::Upstream { status, message }
}
