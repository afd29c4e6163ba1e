//! Shared wire model between the relay and the editing client.
//!
//! This crate owns the JSON shapes that cross the network: the generative
//! API's `generateContent` request/response ([`gemini`]), the edit requests
//! the client builds from user intent ([`edit`]), and the relay's own error
//! body and route paths ([`relay`]). The relay forwards `gemini` payloads
//! without interpreting them beyond basic validation.

pub mod edit;
pub mod gemini;
pub mod relay;

pub use edit::{EditError, EditKind, EditRequest, Hotspot};
pub use gemini::{Blob, GenerateContentRequest, GenerateContentResponse, GenerationError, Part};
pub use relay::ErrorBody;
