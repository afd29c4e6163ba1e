//! Upstream configuration parsed from environment variables.

use super::types::UpstreamError;

pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeouts: UpstreamTimeouts,
}

impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeouts", &self.timeouts)
            .finish()
    }
}

impl UpstreamConfig {
    /// Build typed upstream config from environment variables.
    ///
    /// - `RELAY_API_KEY_ENV`: names the env var holding the key (default `GEMINI_API_KEY`)
    /// - `RELAY_MODEL`: default `gemini-2.5-flash-image-preview`
    /// - `RELAY_UPSTREAM_BASE_URL`: default public API base, trailing `/` trimmed
    /// - `RELAY_REQUEST_TIMEOUT_SECS`: default 120
    /// - `RELAY_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::MissingApiKey`] if the key variable is unset
    /// or blank, and [`UpstreamError::ConfigParse`] for an unusable base URL.
    pub fn from_env() -> Result<Self, UpstreamError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`UpstreamConfig::from_env`], reading through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`UpstreamConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, UpstreamError> {
        let key_var = lookup("RELAY_API_KEY_ENV").unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string());
        let api_key = lookup(&key_var)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| UpstreamError::MissingApiKey { var: key_var.clone() })?;

        let base_url = lookup("RELAY_UPSTREAM_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(UpstreamError::ConfigParse(format!(
                "RELAY_UPSTREAM_BASE_URL must be an http(s) URL, got '{base_url}'"
            )));
        }

        let timeouts = UpstreamTimeouts {
            request_secs: parse_u64(&lookup, "RELAY_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64(&lookup, "RELAY_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { api_key, model: model_from(&lookup), base_url, timeouts })
    }
}

/// Model name from `RELAY_MODEL`, even when no key is configured.
#[must_use]
pub fn model_from_env() -> String {
    model_from(&|key: &str| std::env::var(key).ok())
}

fn model_from(lookup: &impl Fn(&str) -> Option<String>) -> String {
    lookup("RELAY_MODEL")
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}

fn parse_u64(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> u64 {
    lookup(key)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
