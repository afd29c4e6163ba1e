//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the optional upstream client (absent when no API key is
//! configured), the model name reported to clients, and the rate limiter.

use std::sync::Arc;

use crate::rate_limit::RateLimiter;
use crate::upstream::Upstream;

/// Largest request body accepted by default (32 MiB): a few base64 images.
pub const DEFAULT_MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    /// `None` if the upstream API key is not configured.
    pub upstream: Option<Arc<dyn Upstream>>,
    pub model: String,
    pub rate_limiter: RateLimiter,
    pub max_body_bytes: usize,
}

impl AppState {
    #[must_use]
    pub fn new(upstream: Option<Arc<dyn Upstream>>, model: String, rate_limiter: RateLimiter) -> Self {
        Self { upstream, model, rate_limiter, max_body_bytes: DEFAULT_MAX_BODY_BYTES }
    }

    #[must_use]
    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
