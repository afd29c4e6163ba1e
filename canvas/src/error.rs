//! Error type shared by the raster and codec modules.

/// Errors produced by canvas geometry, raster, and codec operations.
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    /// The bytes could not be decoded as a supported image format.
    #[error("image decode failed: {0}")]
    Decode(#[source] image::ImageError),

    /// The image could not be encoded.
    #[error("image encode failed: {0}")]
    Encode(#[source] image::ImageError),

    /// An operation received an image with zero width or height.
    #[error("image is empty ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    /// A point fell outside the image it was meant to annotate.
    #[error("point ({x:.1}, {y:.1}) is outside the {width}x{height} image")]
    PointOutOfBounds { x: f64, y: f64, width: u32, height: u32 },

    /// A rectangle collapsed to zero area after clamping or scaling.
    #[error("rectangle has no area inside the {width}x{height} image")]
    DegenerateRect { width: u32, height: u32 },

    /// A canvas expansion that adds no pixels on any edge.
    #[error("expansion adds no pixels")]
    EmptyExpansion,

    /// Base64 payload failed to decode.
    #[error("base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),
}
