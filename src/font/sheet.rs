//! Sample-sheet PNG rendering.
//!
//! Writes a one-line strip of the whole charset next to each generated
//! header, so a font/size combination can be eyeballed without flashing
//! firmware.

use std::path::Path;

use image::{GrayImage, Luma};

use super::{CanvasSpec, FontFace, raster};
use crate::error::BitsmithError;
use raster::GlyphRaster;

/// Extra rows below the glyph line, matching the generated sheets this
/// format has always shipped with.
const SHEET_PADDING: usize = 10;

/// Lay pre-rasterized glyphs out as a single-line strip, one slot of
/// `slot_width` pixels per glyph.
pub fn compose_sheet(glyphs: &[GlyphRaster], slot_width: usize, slot_height: usize) -> GrayImage {
    let width = (glyphs.len() * slot_width).max(1) as u32;
    let height = (slot_height + SHEET_PADDING) as u32;
    let mut img = GrayImage::from_pixel(width, height, Luma([255]));

    for (slot, glyph) in glyphs.iter().enumerate() {
        for y in 0..glyph.height.min(slot_height) {
            for x in 0..glyph.width.min(slot_width) {
                img.put_pixel(
                    (slot * slot_width + x) as u32,
                    y as u32,
                    Luma([glyph.luma(x, y)]),
                );
            }
        }
    }
    img
}

/// Rasterize the charset and render it as a strip.
pub fn render_sheet(face: &FontFace, spec: &CanvasSpec, chars: &[char]) -> GrayImage {
    let glyphs: Vec<GlyphRaster> = chars
        .iter()
        .map(|&ch| {
            raster::rasterize(
                &face.font,
                ch,
                spec.width,
                spec.height,
                spec.scale,
                spec.y_offset,
            )
        })
        .collect();
    compose_sheet(&glyphs, spec.width, spec.height)
}

/// Render and save the sheet as a PNG.
pub fn save_sheet(
    path: &Path,
    face: &FontFace,
    spec: &CanvasSpec,
    chars: &[char],
) -> Result<(), BitsmithError> {
    render_sheet(face, spec, chars)
        .save(path)
        .map_err(|e| BitsmithError::Source(format!("failed to save {}: {}", path.display(), e)))
}
