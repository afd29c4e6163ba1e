//! `generateContent` wire types for the generative image API.
//!
//! Field names follow the API's camelCase JSON. Only the fields the client
//! reads or writes are modelled; unknown part shapes survive a round trip
//! through [`Part::Other`] so the relay never drops data it cannot interpret.

use serde::{Deserialize, Serialize};

/// Finish reason reported by a candidate that completed normally.
pub const FINISH_STOP: &str = "STOP";

// =============================================================================
// ERROR
// =============================================================================

/// Why a `generateContent` response did not yield an image.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The prompt was rejected before generation started.
    #[error("request was blocked: {reason}{}", suffix(.message))]
    Blocked { reason: String, message: Option<String> },

    /// Generation ended early (safety, recitation, token limit, ...).
    #[error("image generation stopped: {reason}")]
    Stopped { reason: String },

    /// The model answered without an image, possibly with an explanation.
    #[error("model returned no image{}", suffix(.text))]
    NoImage { text: Option<String> },

    /// The response body was not a valid `generateContent` response.
    #[error("response parse failed: {0}")]
    Parse(String),
}

#[allow(clippy::ref_option)]
fn suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

// =============================================================================
// REQUEST
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Total number of parts across all contents.
    #[must_use]
    pub fn part_count(&self) -> usize {
        self.contents.iter().map(|c| c.parts.len()).sum()
    }
}

/// One turn of the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    #[must_use]
    pub fn user(parts: Vec<Part>) -> Self {
        Self { role: Some("user".into()), parts }
    }
}

/// A piece of content. Variant order matters for untagged decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: Blob,
    },
    Text {
        text: String,
    },
    Other(serde_json::Value),
}

impl Part {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    #[must_use]
    pub fn inline(blob: Blob) -> Self {
        Self::InlineData { inline_data: blob }
    }
}

/// Base64-encoded binary payload with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(default)]
    pub response_modalities: Vec<String>,
}

impl GenerationConfig {
    /// Ask for an image, allowing a text explanation alongside it.
    #[must_use]
    pub fn image_and_text() -> Self {
        Self { response_modalities: vec!["IMAGE".into(), "TEXT".into()] }
    }
}

// =============================================================================
// RESPONSE
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_feedback: Option<PromptFeedback>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_reason_message: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u64,
    #[serde(default)]
    pub candidates_token_count: u64,
    #[serde(default)]
    pub total_token_count: u64,
}

// =============================================================================
// PARSING
// =============================================================================

/// Parse a raw response body.
///
/// # Errors
///
/// Returns [`GenerationError::Parse`] for malformed JSON.
pub fn parse_response(json: &str) -> Result<GenerateContentResponse, GenerationError> {
    serde_json::from_str(json).map_err(|e| GenerationError::Parse(e.to_string()))
}

/// Pull the first generated image out of a response.
///
/// Checked in order: a blocked prompt, any inline image part, a candidate
/// that stopped for a reason other than [`FINISH_STOP`], and finally a
/// text-only answer.
///
/// # Errors
///
/// Returns the matching [`GenerationError`] when no image is present.
pub fn extract_image(response: &GenerateContentResponse) -> Result<Blob, GenerationError> {
    if let Some(feedback) = &response.prompt_feedback {
        if let Some(reason) = &feedback.block_reason {
            return Err(GenerationError::Blocked {
                reason: reason.clone(),
                message: feedback.block_reason_message.clone(),
            });
        }
    }

    let parts = || {
        response
            .candidates
            .iter()
            .filter_map(|c| c.content.as_ref())
            .flat_map(|c| c.parts.iter())
    };

    if let Some(blob) = parts().find_map(|part| match part {
        Part::InlineData { inline_data } => Some(inline_data.clone()),
        _ => None,
    }) {
        return Ok(blob);
    }

    if let Some(reason) = response
        .candidates
        .iter()
        .filter_map(|c| c.finish_reason.as_deref())
        .find(|reason| *reason != FINISH_STOP)
    {
        return Err(GenerationError::Stopped { reason: reason.to_owned() });
    }

    let text = parts()
        .filter_map(|part| match part {
            Part::Text { text } => Some(text.trim()),
            _ => None,
        })
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    Err(GenerationError::NoImage { text: (!text.is_empty()).then_some(text) })
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
