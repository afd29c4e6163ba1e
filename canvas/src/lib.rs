//! Canvas geometry and raster operations for image edits.
//!
//! Generative image models work best on square inputs, so every edit starts
//! by padding the source onto a square canvas and ends by cropping the
//! model's answer back to the original region. This crate owns that round
//! trip, plus the location marker drawn on the square before it is sent and
//! the small codec helpers needed to move pixels over JSON.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | Points, rects, square frames, canvas expansion math |
//! | [`raster`] | Pixel ops: pad, crop, mark, expand, resize |
//! | [`codec`] | Decode/encode, MIME sniffing, base64 |
//! | [`consts`] | Marker and padding constants |
//! | [`error`] | [`CanvasError`] |

pub mod codec;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod raster;

pub use error::CanvasError;
pub use geometry::{Expansion, Point, Rect, Size, SquareFrame};
