//! Pixel operations on RGBA images.
//!
//! Every edit that goes through the model takes the same path: pad the
//! source onto a square ([`pad_to_square`]), optionally drop a location
//! marker on the square ([`mark_hotspot`]), and once the model answers,
//! recover the original region ([`crop_to_frame`]). Padding then cropping
//! with the same frame returns the original pixels exactly.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::consts::{MARKER_FILL, MARKER_MIN_RADIUS_PX, MARKER_RADIUS_RATIO, MARKER_RING, MARKER_RING_PX};
use crate::error::CanvasError;
use crate::geometry::{Expansion, Point, Rect, Size, SquareFrame};

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

/// Dimensions of an image as a [`Size`].
#[must_use]
pub fn size_of(img: &RgbaImage) -> Size {
    Size::new(img.width(), img.height())
}

fn ensure_not_empty(img: &RgbaImage) -> Result<Size, CanvasError> {
    let size = size_of(img);
    if size.is_empty() {
        return Err(CanvasError::EmptyImage { width: size.width, height: size.height });
    }
    Ok(size)
}

// =============================================================================
// SQUARE ROUND TRIP
// =============================================================================

/// Centre `img` on a square canvas filled with `fill`.
///
/// # Errors
///
/// Returns [`CanvasError::EmptyImage`] for a zero-sized input.
pub fn pad_to_square(img: &RgbaImage, fill: Rgba<u8>) -> Result<(RgbaImage, SquareFrame), CanvasError> {
    let size = ensure_not_empty(img)?;
    let frame = SquareFrame::for_size(size);
    if frame.is_identity() {
        return Ok((img.clone(), frame));
    }

    let mut square = RgbaImage::from_pixel(frame.side, frame.side, fill);
    imageops::replace(&mut square, img, i64::from(frame.offset_x), i64::from(frame.offset_y));
    Ok((square, frame))
}

/// Recover the original region of `frame` from a square the model returned.
///
/// A result at the frame's own side is cropped exactly. Any other resolution
/// is cropped at the scaled content rect and resampled back to the original
/// dimensions.
///
/// # Errors
///
/// Returns [`CanvasError::EmptyImage`] for a zero-sized input and
/// [`CanvasError::DegenerateRect`] when scaling collapses the content rect.
pub fn crop_to_frame(img: &RgbaImage, frame: &SquareFrame) -> Result<RgbaImage, CanvasError> {
    let returned = ensure_not_empty(img)?;

    if returned == frame.square_size() {
        let r = frame.content_rect();
        return Ok(imageops::crop_imm(img, r.x, r.y, r.width, r.height).to_image());
    }

    let rect = frame.content_rect_in(returned);
    if rect.is_empty() {
        return Err(CanvasError::DegenerateRect { width: returned.width, height: returned.height });
    }
    let cropped = imageops::crop_imm(img, rect.x, rect.y, rect.width, rect.height).to_image();
    if rect.size() == frame.original_size() {
        return Ok(cropped);
    }
    Ok(imageops::resize(&cropped, frame.width, frame.height, FilterType::Lanczos3))
}

// =============================================================================
// HOTSPOT MARKER
// =============================================================================

/// Appearance of the location marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub radius: f64,
    pub ring: f64,
    pub fill: Rgba<u8>,
    pub ring_color: Rgba<u8>,
}

impl MarkerStyle {
    /// Default marker sized for a square of `side` pixels.
    #[must_use]
    pub fn for_side(side: u32) -> Self {
        Self {
            radius: (f64::from(side) * MARKER_RADIUS_RATIO).max(MARKER_MIN_RADIUS_PX),
            ring: MARKER_RING_PX,
            fill: Rgba(MARKER_FILL),
            ring_color: Rgba(MARKER_RING),
        }
    }
}

/// Draw a filled disc with a contrasting ring centred on `p`.
///
/// Parts of the marker that fall off the image edge are clipped.
///
/// # Errors
///
/// Returns [`CanvasError::PointOutOfBounds`] when `p` itself is not inside
/// the image.
pub fn mark_hotspot(img: &mut RgbaImage, p: Point, style: MarkerStyle) -> Result<(), CanvasError> {
    let size = size_of(img);
    if !size.contains(p) {
        return Err(CanvasError::PointOutOfBounds { x: p.x, y: p.y, width: size.width, height: size.height });
    }

    let outer = style.radius + style.ring.max(0.0);
    let x_min = (p.x - outer).floor().max(0.0) as u32;
    let y_min = (p.y - outer).floor().max(0.0) as u32;
    let x_max = ((p.x + outer).ceil() as u32).min(size.width - 1);
    let y_max = ((p.y + outer).ceil() as u32).min(size.height - 1);

    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let dx = f64::from(x) + 0.5 - p.x;
            let dy = f64::from(y) + 0.5 - p.y;
            let dist = dx.hypot(dy);
            if dist <= style.radius {
                img.put_pixel(x, y, style.fill);
            } else if dist <= outer {
                img.put_pixel(x, y, style.ring_color);
            }
        }
    }
    Ok(())
}

// =============================================================================
// CANVAS EDITS
// =============================================================================

/// Grow the canvas by `expansion`, filling new area with `fill`.
///
/// Returns the expanded image and the rect the original now occupies.
///
/// # Errors
///
/// Returns [`CanvasError::EmptyExpansion`] if no edge grows, or
/// [`CanvasError::EmptyImage`] for a zero-sized input.
pub fn expand(img: &RgbaImage, expansion: Expansion, fill: Rgba<u8>) -> Result<(RgbaImage, Rect), CanvasError> {
    if expansion.is_empty() {
        return Err(CanvasError::EmptyExpansion);
    }
    let size = ensure_not_empty(img)?;
    let (grown, placed) = expansion.apply(size);
    let mut canvas = RgbaImage::from_pixel(grown.width, grown.height, fill);
    imageops::replace(&mut canvas, img, i64::from(placed.x), i64::from(placed.y));
    Ok((canvas, placed))
}

/// Crop to `rect`, clamped to the image bounds.
///
/// # Errors
///
/// Returns [`CanvasError::DegenerateRect`] when the rect misses the image.
pub fn crop(img: &RgbaImage, rect: Rect) -> Result<RgbaImage, CanvasError> {
    let size = size_of(img);
    let Some(r) = rect.clamp_to(size) else {
        return Err(CanvasError::DegenerateRect { width: size.width, height: size.height });
    };
    Ok(imageops::crop_imm(img, r.x, r.y, r.width, r.height).to_image())
}

/// Resample to exactly `size`. A no-op copy when the size already matches.
///
/// # Errors
///
/// Returns [`CanvasError::EmptyImage`] when either the input or the target
/// size is empty.
pub fn resize_to(img: &RgbaImage, size: Size) -> Result<RgbaImage, CanvasError> {
    ensure_not_empty(img)?;
    if size.is_empty() {
        return Err(CanvasError::EmptyImage { width: size.width, height: size.height });
    }
    if size_of(img) == size {
        return Ok(img.clone());
    }
    Ok(imageops::resize(img, size.width, size.height, FilterType::Lanczos3))
}
