//! Edit pipeline: geometry around a generate call.
//!
//! Every edit pads its primary image to a square, optionally marks a
//! hotspot on the square, sends it with an instruction, and crops the
//! answer back to the original region. Expansion grows the canvas first;
//! composition has no primary image and returns a square of the requested
//! side.

use image::{Rgba, RgbaImage};
use serde::Serialize;
use wire::gemini::{self, Blob};
use wire::{EditKind, EditRequest, Hotspot};

use canvas::codec::{self, PNG_MIME};
use canvas::raster::{self, MarkerStyle};
use canvas::{CanvasError, Expansion, Point, Rect, Size, SquareFrame};

use crate::error::CliError;
use crate::relay::ImageGenerator;

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;

/// What an edit did, printed as JSON after the image is written.
#[derive(Debug, Clone, Serialize)]
pub struct EditSummary {
    pub kind: EditKind,
    pub input: Size,
    pub output: Size,
    /// Square framing used for the request, absent for compositions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame: Option<SquareFrame>,
    /// Marker position in the square that was sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotspot: Option<Hotspot>,
    /// Where the original sits in an expanded canvas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placed: Option<Rect>,
}

#[derive(Debug)]
pub struct EditOutcome {
    pub image: RgbaImage,
    pub summary: EditSummary,
}

pub struct Editor<G> {
    generator: G,
    fill: Rgba<u8>,
}

impl<G: ImageGenerator> Editor<G> {
    pub fn new(generator: G, fill: Rgba<u8>) -> Self {
        Self { generator, fill }
    }

    /// Localized edit at `at` (original-image coordinates).
    pub async fn retouch(&self, img: &RgbaImage, at: Point, instruction: &str) -> Result<EditOutcome, CliError> {
        self.framed(EditKind::Retouch, img, Some(at), Vec::new(), instruction).await
    }

    pub async fn filter(&self, img: &RgbaImage, instruction: &str) -> Result<EditOutcome, CliError> {
        self.framed(EditKind::Filter, img, None, Vec::new(), instruction).await
    }

    pub async fn adjust(&self, img: &RgbaImage, instruction: &str) -> Result<EditOutcome, CliError> {
        self.framed(EditKind::Adjust, img, None, Vec::new(), instruction).await
    }

    /// Insert `object` into `scene` at `at` (scene coordinates).
    pub async fn place(
        &self,
        scene: &RgbaImage,
        object: &RgbaImage,
        at: Point,
        instruction: &str,
    ) -> Result<EditOutcome, CliError> {
        let object = to_blob(object)?;
        self.framed(EditKind::Place, scene, Some(at), vec![object], instruction).await
    }

    /// Grow the canvas by `expansion` and let the model fill the new area.
    pub async fn expand(
        &self,
        img: &RgbaImage,
        expansion: Expansion,
        instruction: &str,
    ) -> Result<EditOutcome, CliError> {
        let (grown, placed) = raster::expand(img, expansion, self.fill)?;
        let mut outcome = self.framed(EditKind::Expand, &grown, None, Vec::new(), instruction).await?;
        outcome.summary.input = raster::size_of(img);
        outcome.summary.placed = Some(placed);
        Ok(outcome)
    }

    /// Generate a `side × side` scene from mood-board tiles.
    pub async fn compose(&self, tiles: &[RgbaImage], instruction: &str, side: u32) -> Result<EditOutcome, CliError> {
        let mut request = EditRequest::new(EditKind::Compose, instruction);
        for tile in tiles {
            let (square, _) = raster::pad_to_square(tile, self.fill)?;
            request = request.with_image(to_blob(&square)?);
        }

        let answer = self.generate(request).await?;
        let image = raster::resize_to(&answer, Size::new(side, side))?;
        let summary = EditSummary {
            kind: EditKind::Compose,
            input: tiles.first().map_or(Size::new(0, 0), raster::size_of),
            output: raster::size_of(&image),
            frame: None,
            hotspot: None,
            placed: None,
        };
        Ok(EditOutcome { image, summary })
    }

    async fn framed(
        &self,
        kind: EditKind,
        img: &RgbaImage,
        at: Option<Point>,
        extras: Vec<Blob>,
        instruction: &str,
    ) -> Result<EditOutcome, CliError> {
        let (mut square, frame) = raster::pad_to_square(img, self.fill)?;

        let mut request = EditRequest::new(kind, instruction);
        let mut hotspot = None;
        if let Some(at) = at {
            let size = raster::size_of(img);
            if !size.contains(at) {
                return Err(CanvasError::PointOutOfBounds { x: at.x, y: at.y, width: size.width, height: size.height }
                    .into());
            }
            let on_square = frame.to_square(at);
            raster::mark_hotspot(&mut square, on_square, MarkerStyle::for_side(frame.side))?;
            let spot = Hotspot { x: on_square.x.floor() as u32, y: on_square.y.floor() as u32 };
            request = request.with_hotspot(spot);
            hotspot = Some(spot);
        }

        request = request.with_image(to_blob(&square)?);
        for extra in extras {
            request = request.with_image(extra);
        }

        let answer = self.generate(request).await?;
        let image = raster::crop_to_frame(&answer, &frame)?;
        tracing::debug!(
            %kind,
            returned_w = answer.width(),
            returned_h = answer.height(),
            side = frame.side,
            "cropped answer back to original region"
        );

        let summary = EditSummary {
            kind,
            input: raster::size_of(img),
            output: raster::size_of(&image),
            frame: Some(frame),
            hotspot,
            placed: None,
        };
        Ok(EditOutcome { image, summary })
    }

    async fn generate(&self, request: EditRequest) -> Result<RgbaImage, CliError> {
        let kind = request.kind;
        let body = request.into_generate_request()?;
        let response = self.generator.generate(&body).await?;
        if let Some(usage) = response.usage_metadata {
            tracing::info!(%kind, tokens = usage.total_token_count, "generation finished");
        }
        let blob = gemini::extract_image(&response)?;
        Ok(codec::decode(&codec::decode_base64(&blob.data)?)?)
    }
}

/// PNG-encode into an inline blob.
fn to_blob(img: &RgbaImage) -> Result<Blob, CanvasError> {
    let png = codec::encode_png(img)?;
    Ok(Blob { mime_type: PNG_MIME.to_owned(), data: codec::encode_base64(&png) })
}
