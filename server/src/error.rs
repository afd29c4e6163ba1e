//! Relay errors and their HTTP rendering.
//!
//! Every error the relay itself originates is rendered as a JSON
//! [`ErrorBody`] carrying a grepable code and a retryable flag. Upstream
//! HTTP errors are not `RelayError`s; they are forwarded as-is.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use wire::ErrorBody;

use crate::rate_limit::RateLimitError;
use crate::upstream::UpstreamError;

/// Grepable error code and retryable flag for structured error bodies.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("relay has no upstream API key configured")]
    NotConfigured,

    #[error("request body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error("request body is not a generateContent request: {0}")]
    InvalidBody(String),

    #[error("request has no content parts")]
    EmptyRequest,

    #[error(transparent)]
    RateLimited(#[from] RateLimitError),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl ErrorCode for RelayError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotConfigured => "E_NOT_CONFIGURED",
            Self::PayloadTooLarge { .. } => "E_PAYLOAD_TOO_LARGE",
            Self::InvalidBody(_) => "E_INVALID_BODY",
            Self::EmptyRequest => "E_EMPTY_REQUEST",
            Self::RateLimited(_) => "E_RATE_LIMITED",
            Self::Upstream(e) => e.error_code(),
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::RateLimited(_) => true,
            Self::Upstream(e) => e.retryable(),
            _ => false,
        }
    }
}

impl RelayError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::InvalidBody(_) | Self::EmptyRequest => StatusCode::BAD_REQUEST,
            Self::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            Self::Upstream(UpstreamError::Request(_)) => StatusCode::BAD_GATEWAY,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody { code: self.error_code().to_owned(), message: self.to_string(), retryable: self.retryable() }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(error = %self, code = self.error_code(), "relay request failed");
        } else {
            tracing::debug!(error = %self, code = self.error_code(), "relay request rejected");
        }
        (status, Json(self.to_body())).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
