//! # Font Handling
//!
//! Everything between a `.ttf` file on disk and the binarized glyph
//! rasters the encoding engine consumes: face loading, the size presets
//! the supported displays use, character-set selection, font discovery,
//! and the sample-sheet PNG written next to each header.

pub mod charset;
pub mod discover;
pub mod raster;
pub mod sheet;

use std::path::Path;

use ab_glyph::FontArc;

use crate::error::BitsmithError;
use raster::GlyphRaster;

/// Supported glyph canvas heights, in pixels. All are multiples of 8 so
/// column-chunk packing never truncates rows.
pub const FONT_HEIGHTS: [usize; 7] = [8, 24, 32, 40, 48, 56, 64];

/// Baseline shift paired with each entry of [`FONT_HEIGHTS`].
pub const FONT_Y_OFFSETS: [i32; 7] = [0, 6, 5, 7, 8, 9, 10];

/// Baseline shift for a preset height; 0 for non-preset heights.
pub fn y_offset_for(height: usize) -> i32 {
    FONT_HEIGHTS
        .iter()
        .position(|&h| h == height)
        .map_or(0, |i| FONT_Y_OFFSETS[i])
}

/// A loaded TTF face with a display name.
pub struct FontFace {
    pub name: String,
    pub font: FontArc,
}

impl FontFace {
    /// Load a face from a `.ttf` file. The display name is the file stem.
    pub fn load(path: &Path) -> Result<Self, BitsmithError> {
        let bytes = std::fs::read(path)
            .map_err(|e| BitsmithError::Font(format!("{}: {}", path.display(), e)))?;
        let font = FontArc::try_from_vec(bytes)
            .map_err(|e| BitsmithError::Font(format!("{}: {}", path.display(), e)))?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "font".to_string());
        Ok(Self { name, font })
    }
}

/// Canvas geometry for rendering one font size.
#[derive(Debug, Clone, Copy)]
pub struct CanvasSpec {
    pub width: usize,
    pub height: usize,
    /// ab_glyph pixel scale. Slightly larger than the canvas so ascenders
    /// and descenders fill the height.
    pub scale: f32,
    pub y_offset: i32,
}

impl CanvasSpec {
    /// Geometry for a canvas height: width defaults to 3/4 of the height
    /// (or the full height for square canvases), render scale to 1.1×.
    pub fn for_height(
        height: usize,
        square: bool,
        forced_width: Option<usize>,
        forced_offset: Option<i32>,
    ) -> Self {
        let width = forced_width.unwrap_or(if square { height } else { height * 3 / 4 });
        Self {
            width,
            height,
            scale: height as f32 * 1.1,
            y_offset: forced_offset.unwrap_or_else(|| y_offset_for(height)),
        }
    }
}

/// Rasterize every character of a charset onto the given canvas, in order.
pub fn rasterize_charset(face: &FontFace, spec: &CanvasSpec, chars: &[char]) -> Vec<(u32, GlyphRaster)> {
    chars
        .iter()
        .map(|&ch| {
            (
                ch as u32,
                raster::rasterize(
                    &face.font,
                    ch,
                    spec.width,
                    spec.height,
                    spec.scale,
                    spec.y_offset,
                ),
            )
        })
        .collect()
}
