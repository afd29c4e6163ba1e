//! Image codec helpers: decode/encode, MIME sniffing, base64.

use std::io::Cursor;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, RgbaImage};

use crate::error::CanvasError;

#[cfg(test)]
#[path = "codec_test.rs"]
mod codec_test;

pub const PNG_MIME: &str = "image/png";

/// Decode any supported format (sniffed from the bytes) into RGBA.
///
/// # Errors
///
/// Returns [`CanvasError::Decode`] when the format is unknown or corrupt.
pub fn decode(bytes: &[u8]) -> Result<RgbaImage, CanvasError> {
    image::load_from_memory(bytes)
        .map(|img| img.to_rgba8())
        .map_err(CanvasError::Decode)
}

/// Encode as PNG.
///
/// # Errors
///
/// Returns [`CanvasError::Encode`] if the encoder rejects the buffer.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, CanvasError> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).map_err(CanvasError::Encode)?;
    Ok(out.into_inner())
}

/// MIME type of the image encoded in `bytes`, if it is one we can decode.
#[must_use]
pub fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    match image::guess_format(bytes) {
        Ok(ImageFormat::Png) => Some(PNG_MIME),
        Ok(ImageFormat::Jpeg) => Some("image/jpeg"),
        Ok(ImageFormat::WebP) => Some("image/webp"),
        _ => None,
    }
}

#[must_use]
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// # Errors
///
/// Returns [`CanvasError::Base64`] on invalid input.
pub fn decode_base64(data: &str) -> Result<Vec<u8>, CanvasError> {
    Ok(STANDARD.decode(data.trim())?)
}
