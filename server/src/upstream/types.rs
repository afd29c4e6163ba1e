//! Upstream seam and its error type.

use axum::body::Bytes;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while configuring or calling the upstream API.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The env var that should hold the API key is unset or empty.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the upstream failed before a status was received.
    #[error("upstream request failed: {0}")]
    Request(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl crate::error::ErrorCode for UpstreamError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::MissingApiKey { .. } => "E_MISSING_API_KEY",
            Self::Request(_) => "E_UPSTREAM_REQUEST",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Request(_))
    }
}

// =============================================================================
// REPLY
// =============================================================================

/// Raw upstream answer, forwarded to the caller verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    pub status: u16,
    /// Response bytes exactly as received; never re-decoded.
    pub body: Bytes,
}

// =============================================================================
// UPSTREAM TRAIT
// =============================================================================

/// Async seam over the generative API. Enables mocking in tests.
#[async_trait::async_trait]
pub trait Upstream: Send + Sync {
    /// Model name requests are routed to.
    fn model(&self) -> &str;

    /// Forward a validated `generateContent` body.
    ///
    /// Non-success HTTP statuses are not errors: they come back as an
    /// [`UpstreamReply`] so the caller sees exactly what the API said.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Request`] when no response was received.
    async fn generate(&self, body: Bytes) -> Result<UpstreamReply, UpstreamError>;
}
