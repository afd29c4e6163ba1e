//! Edit requests: user intent turned into a `generateContent` call.
//!
//! The client decides *what* to ask for (kind, instruction, marker position,
//! which images); this module decides *how* to phrase it for the model. All
//! coordinates are in the pixel space of the first image as sent, i.e. after
//! square padding.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::gemini::{Blob, Content, GenerateContentRequest, GenerationConfig, Part};

/// Upper bound on mood-board tiles in one composition request.
pub const MAX_MOODBOARD_IMAGES: usize = 6;

const KEEP_FRAMING: &str = "Keep the image dimensions and framing exactly as they are. \
    Flat padding bars along the edges are not part of the photo; leave them untouched.";

const REMOVE_MARKER: &str = "The red circle with a white ring only marks the location. \
    It is not part of the photo and must not appear in the result.";

const RETURN_IMAGE: &str = "Return only the final image.";

// =============================================================================
// KIND
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditKind {
    /// Localized change around a marked hotspot.
    Retouch,
    /// Stylistic look applied to the whole photo.
    Filter,
    /// Global photographic adjustment (light, colour, depth of field).
    Adjust,
    /// Insert a separately supplied object at a marked hotspot.
    Place,
    /// Generate a new scene from a set of mood-board images.
    Compose,
    /// Fill newly added canvas around the photo.
    Expand,
}

impl EditKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Retouch => "retouch",
            Self::Filter => "filter",
            Self::Adjust => "adjust",
            Self::Place => "place",
            Self::Compose => "compose",
            Self::Expand => "expand",
        }
    }

    #[must_use]
    pub fn needs_hotspot(self) -> bool {
        matches!(self, Self::Retouch | Self::Place)
    }

    /// Instruction used when the caller gives none. `None` means one is required.
    #[must_use]
    pub fn default_instruction(self) -> Option<&'static str> {
        match self {
            Self::Place => Some("Place the object so it looks like it was photographed in the scene."),
            Self::Expand => Some("Continue the existing scene naturally."),
            _ => None,
        }
    }

    fn accepts_image_count(self, n: usize) -> bool {
        match self {
            Self::Place => n == 2,
            Self::Compose => (1..=MAX_MOODBOARD_IMAGES).contains(&n),
            _ => n == 1,
        }
    }

    fn expected_images(self) -> &'static str {
        match self {
            Self::Place => "exactly 2 (scene, object)",
            Self::Compose => "between 1 and 6",
            _ => "exactly 1",
        }
    }
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// ERROR
// =============================================================================

/// An edit request that cannot be turned into a model call.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EditError {
    #[error("{0} needs an instruction")]
    EmptyInstruction(EditKind),
    #[error("{0} needs a hotspot")]
    MissingHotspot(EditKind),
    #[error("{kind} takes {expected} image(s), got {got}")]
    ImageCount { kind: EditKind, expected: &'static str, got: usize },
}

// =============================================================================
// REQUEST
// =============================================================================

/// Pixel position of the location marker in the first image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotspot {
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditRequest {
    pub kind: EditKind,
    pub instruction: String,
    pub hotspot: Option<Hotspot>,
    /// Primary image first, then supplementary images in prompt order.
    pub images: Vec<Blob>,
}

impl EditRequest {
    #[must_use]
    pub fn new(kind: EditKind, instruction: impl Into<String>) -> Self {
        Self { kind, instruction: instruction.into(), hotspot: None, images: Vec::new() }
    }

    #[must_use]
    pub fn with_hotspot(mut self, hotspot: Hotspot) -> Self {
        self.hotspot = Some(hotspot);
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: Blob) -> Self {
        self.images.push(image);
        self
    }

    /// Check instruction, hotspot, and image count against the kind.
    ///
    /// # Errors
    ///
    /// Returns the first [`EditError`] found.
    pub fn validate(&self) -> Result<(), EditError> {
        if self.instruction.trim().is_empty() && self.kind.default_instruction().is_none() {
            return Err(EditError::EmptyInstruction(self.kind));
        }
        if self.kind.needs_hotspot() && self.hotspot.is_none() {
            return Err(EditError::MissingHotspot(self.kind));
        }
        if !self.kind.accepts_image_count(self.images.len()) {
            return Err(EditError::ImageCount {
                kind: self.kind,
                expected: self.kind.expected_images(),
                got: self.images.len(),
            });
        }
        Ok(())
    }

    fn instruction_or_default(&self) -> &str {
        let trimmed = self.instruction.trim();
        if trimmed.is_empty() {
            return self.kind.default_instruction().unwrap_or_default();
        }
        trimmed
    }

    /// The text part sent after the images.
    #[must_use]
    pub fn prompt(&self) -> String {
        let instruction = self.instruction_or_default();
        let at = self
            .hotspot
            .map(|h| format!("pixel ({}, {})", h.x, h.y))
            .unwrap_or_default();

        match self.kind {
            EditKind::Retouch => format!(
                "You are an expert photo retoucher. Make a localized edit to the photo at {at}, \
                 where the red marker is. Edit request: {instruction}\n\
                 Blend the change into the surrounding lighting, texture, and perspective. \
                 Everything away from the edited area must stay identical. \
                 {REMOVE_MARKER} {KEEP_FRAMING} {RETURN_IMAGE}"
            ),
            EditKind::Filter => format!(
                "Apply this stylistic filter to the whole photo: {instruction}\n\
                 Change only the look. Do not add, remove, or move anything in the scene. \
                 {KEEP_FRAMING} {RETURN_IMAGE}"
            ),
            EditKind::Adjust => format!(
                "Apply this global photographic adjustment to the whole photo: {instruction}\n\
                 The result must stay photorealistic. Do not add, remove, or move anything in the scene. \
                 {KEEP_FRAMING} {RETURN_IMAGE}"
            ),
            EditKind::Place => format!(
                "The first image is a scene. The second image is an object. Insert the object into the \
                 scene at {at}, where the red marker is. {instruction}\n\
                 Match the scene's scale, perspective, lighting, and shadows. \
                 Leave the rest of the scene unchanged. {REMOVE_MARKER} {KEEP_FRAMING} {RETURN_IMAGE}"
            ),
            EditKind::Compose => format!(
                "These {n} image(s) are a mood-board. Create one new photorealistic scene that draws on \
                 their subjects, colour palette, and atmosphere. Direction: {instruction}\n\
                 The scene must be a single coherent photograph, not a collage. {RETURN_IMAGE}",
                n = self.images.len()
            ),
            EditKind::Expand => format!(
                "The photo is surrounded by empty flat-colour canvas. Fill the empty canvas by extending \
                 the scene outward so the result reads as one continuous photograph. {instruction}\n\
                 Do not alter the existing photo area or change the canvas size. {RETURN_IMAGE}"
            ),
        }
    }

    /// Validate and build the `generateContent` body: images, then the prompt.
    ///
    /// # Errors
    ///
    /// Propagates [`EditRequest::validate`] failures.
    pub fn into_generate_request(self) -> Result<GenerateContentRequest, EditError> {
        self.validate()?;
        let prompt = self.prompt();
        let mut parts: Vec<Part> = self.images.into_iter().map(Part::inline).collect();
        parts.push(Part::text(prompt));
        Ok(GenerateContentRequest {
            contents: vec![Content::user(parts)],
            generation_config: Some(GenerationConfig::image_and_text()),
        })
    }
}

#[cfg(test)]
#[path = "edit_test.rs"]
mod tests;
