//! Glyph rasterization onto a fixed-size binarized canvas.
//!
//! Renders one character with ab_glyph into a width×height luma buffer:
//! white (255) background, black (0) ink, no intermediate values. The
//! engine's glyph sampler expects an already-binarized buffer, so coverage
//! is snapped at 50% here rather than preserved for dithering.

use ab_glyph::{Font, FontArc, ScaleFont, point};

/// A rasterized glyph: fixed canvas, 8-bit luma per pixel.
#[derive(Debug, Clone)]
pub struct GlyphRaster {
    pub width: usize,
    pub height: usize,
    /// Row-major luma values: 0 = ink, 255 = background.
    data: Vec<u8>,
}

impl GlyphRaster {
    /// All-background canvas.
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![255; width * height],
        }
    }

    /// Build a raster from an intensity accessor, for callers whose glyphs
    /// come from somewhere other than a TTF outline.
    pub fn from_fn(width: usize, height: usize, mut luma: impl FnMut(usize, usize) -> u8) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(luma(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn luma(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }
}

/// Rasterize one character onto a `width`×`height` canvas.
///
/// `scale` is the ab_glyph pixel scale (conventionally a little larger
/// than the canvas height so ascenders fill it); `y_offset` shifts the
/// glyph upward to account for per-size baseline placement. Pixels outside
/// the canvas are clipped.
pub fn rasterize(
    font: &FontArc,
    ch: char,
    width: usize,
    height: usize,
    scale: f32,
    y_offset: i32,
) -> GlyphRaster {
    let mut raster = GlyphRaster::blank(width, height);

    let scaled = font.as_scaled(scale);
    let baseline_y = scaled.ascent() - y_offset as f32;

    let glyph = font
        .glyph_id(ch)
        .with_scale_and_position(scale, point(0.0, baseline_y));

    if let Some(outlined) = font.outline_glyph(glyph) {
        let bounds = outlined.px_bounds();
        outlined.draw(|px, py, coverage| {
            let x = px as i32 + bounds.min.x as i32;
            let y = py as i32 + bounds.min.y as i32;

            if x >= 0 && x < width as i32 && y >= 0 && y < height as i32 && coverage >= 0.5 {
                raster.data[y as usize * width + x as usize] = 0;
            }
        });
    }

    raster
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_raster() {
        let r = GlyphRaster::blank(6, 8);
        assert_eq!(r.width, 6);
        assert_eq!(r.height, 8);
        for y in 0..8 {
            for x in 0..6 {
                assert_eq!(r.luma(x, y), 255);
            }
        }
    }

    #[test]
    fn test_raster_is_binary() {
        // Any rendered output must contain only 0 and 255.
        let r = GlyphRaster::blank(4, 4);
        assert!((0..4).all(|y| (0..4).all(|x| matches!(r.luma(x, y), 0 | 255))));
    }
}
