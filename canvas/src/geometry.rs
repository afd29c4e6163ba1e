//! Pixel-space geometry: points, rects, square framing, canvas expansion.
//!
//! Nothing in here touches pixels. [`crate::raster`] applies these shapes to
//! real images, and the client uses them to translate hotspots between the
//! displayed image, the original, and the padded square sent to the model.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A location in pixel space. Fractional values address sub-pixel positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Image dimensions in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether `p` addresses a pixel inside these bounds.
    #[must_use]
    pub fn contains(self, p: Point) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x < f64::from(self.width) && p.y < f64::from(self.height)
    }
}

/// Axis-aligned rectangle in whole pixels, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    #[must_use]
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.size().is_empty()
    }

    /// Intersect with `0..size.width × 0..size.height`.
    ///
    /// Returns `None` when nothing of the rect lies inside the bounds.
    #[must_use]
    pub fn clamp_to(self, size: Size) -> Option<Self> {
        let x0 = self.x.min(size.width);
        let y0 = self.y.min(size.height);
        let x1 = self.x.saturating_add(self.width).min(size.width);
        let y1 = self.y.saturating_add(self.height).min(size.height);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Self::new(x0, y0, x1 - x0, y1 - y0))
    }
}

// =============================================================================
// SQUARE FRAME
// =============================================================================

/// Placement of a `width × height` image centred on a `side × side` square.
///
/// `side` is the longer edge, so exactly one axis carries padding. Odd
/// padding leaves the extra pixel on the right/bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareFrame {
    pub side: u32,
    pub offset_x: u32,
    pub offset_y: u32,
    pub width: u32,
    pub height: u32,
}

impl SquareFrame {
    #[must_use]
    pub fn for_size(size: Size) -> Self {
        let side = size.width.max(size.height);
        Self {
            side,
            offset_x: (side - size.width) / 2,
            offset_y: (side - size.height) / 2,
            width: size.width,
            height: size.height,
        }
    }

    #[must_use]
    pub fn original_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    #[must_use]
    pub fn square_size(&self) -> Size {
        Size::new(self.side, self.side)
    }

    /// True when the original already was square and no padding is added.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.offset_x == 0 && self.offset_y == 0 && self.width == self.side && self.height == self.side
    }

    /// Where the original sits inside the square.
    #[must_use]
    pub fn content_rect(&self) -> Rect {
        Rect::new(self.offset_x, self.offset_y, self.width, self.height)
    }

    /// Original-image coordinates to square coordinates.
    #[must_use]
    pub fn to_square(&self, p: Point) -> Point {
        Point::new(p.x + f64::from(self.offset_x), p.y + f64::from(self.offset_y))
    }

    /// Square coordinates back to original-image coordinates.
    #[must_use]
    pub fn from_square(&self, p: Point) -> Point {
        Point::new(p.x - f64::from(self.offset_x), p.y - f64::from(self.offset_y))
    }

    /// The content rect scaled into an image returned at another resolution.
    ///
    /// Each axis scales on its own, so a model that answers with a non-square
    /// image still maps back onto the original region. The result is clamped
    /// to `returned` and may be empty; callers decide whether that is fatal.
    #[must_use]
    pub fn content_rect_in(&self, returned: Size) -> Rect {
        if self.side == 0 || returned.is_empty() {
            return Rect::new(0, 0, 0, 0);
        }
        if returned == self.square_size() {
            return self.content_rect();
        }

        let side = f64::from(self.side);
        let sx = f64::from(returned.width) / side;
        let sy = f64::from(returned.height) / side;

        let x0 = scale_edge(self.offset_x, sx, returned.width);
        let y0 = scale_edge(self.offset_y, sy, returned.height);
        let x1 = scale_edge(self.offset_x + self.width, sx, returned.width);
        let y1 = scale_edge(self.offset_y + self.height, sy, returned.height);

        Rect::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0))
    }
}

fn scale_edge(edge: u32, scale: f64, limit: u32) -> u32 {
    let scaled = (f64::from(edge) * scale).round().max(0.0);
    (scaled as u32).min(limit)
}

// =============================================================================
// DISPLAY MAPPING
// =============================================================================

/// Map a click on a scaled rendition of an image to natural pixel coordinates.
///
/// `displayed_width`/`displayed_height` are the on-screen dimensions of the
/// rendition. Returns `None` for non-positive display sizes, empty images, or
/// clicks outside the displayed area. The result is floored to a pixel and
/// clamped to the last valid row/column.
#[must_use]
pub fn display_to_natural(p: Point, displayed_width: f64, displayed_height: f64, natural: Size) -> Option<Point> {
    if displayed_width <= 0.0 || displayed_height <= 0.0 || natural.is_empty() {
        return None;
    }
    if p.x < 0.0 || p.y < 0.0 || p.x > displayed_width || p.y > displayed_height {
        return None;
    }

    let max_x = f64::from(natural.width - 1);
    let max_y = f64::from(natural.height - 1);
    let x = (p.x * f64::from(natural.width) / displayed_width).floor().clamp(0.0, max_x);
    let y = (p.y * f64::from(natural.height) / displayed_height).floor().clamp(0.0, max_y);
    Some(Point::new(x, y))
}

// =============================================================================
// EXPANSION
// =============================================================================

/// Pixels of new canvas to add on each edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expansion {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Expansion {
    #[must_use]
    pub fn uniform(px: u32) -> Self {
        Self { top: px, right: px, bottom: px, left: px }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top == 0 && self.right == 0 && self.bottom == 0 && self.left == 0
    }

    /// Expanded canvas size and the rect the original occupies inside it.
    #[must_use]
    pub fn apply(&self, size: Size) -> (Size, Rect) {
        let width = self.left.saturating_add(size.width).saturating_add(self.right);
        let height = self.top.saturating_add(size.height).saturating_add(self.bottom);
        (Size::new(width, height), Rect::new(self.left, self.top, size.width, size.height))
    }
}
