//! Relay route paths and the relay's own JSON bodies.
//!
//! Upstream responses pass through the relay untouched. [`ErrorBody`] is only
//! used for failures the relay itself originates (bad request, rate limit,
//! missing credential, unreachable upstream).

use serde::{Deserialize, Serialize};

pub const GENERATE_PATH: &str = "/api/generate";
pub const INFO_PATH: &str = "/api/info";
pub const HEALTH_PATH: &str = "/healthz";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable machine-readable code, e.g. `E_RATE_LIMITED`.
    pub code: String,
    pub message: String,
    /// Whether the same request may succeed if retried later.
    pub retryable: bool,
}

/// `GET /api/info` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoResponse {
    pub model: String,
    /// `false` when the relay has no API key and cannot forward requests.
    pub configured: bool,
}
