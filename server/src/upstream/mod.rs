//! Upstream: the generative image API the relay forwards to.
//!
//! DESIGN
//! ======
//! The relay never interprets model output. It validates the request shape,
//! attaches the credential, and hands the raw body to an [`Upstream`]. The
//! trait exists so routes can be exercised against a mock in tests; the only
//! production implementation is [`gemini::GeminiClient`].

pub mod config;
pub mod gemini;
pub mod types;

pub use gemini::GeminiClient;
pub use types::{Upstream, UpstreamError, UpstreamReply};
