//! # Threshold Sampler
//!
//! Classifies pixels and pixel regions as lit or unlit.
//!
//! Two sampling modes exist, matching the two encoding pipelines:
//!
//! - **Region sampling** (grid mode): reduce a rectangular RGB crop to one
//!   grayscale value by taking the median of each color channel and
//!   averaging the three medians. Robust against speckle inside a cell,
//!   which is why a median is used rather than a mean.
//! - **Pixel sampling** (glyph mode): the glyph raster is already
//!   binarized, so a single pixel's luma is compared directly.
//!
//! Both classify "lit" when the sampled value is strictly below the
//! threshold; a value exactly equal to the threshold is unlit. Dark pixels
//! are lit because the sources render black-on-white.

use image::RgbImage;

/// Default threshold for grid (region) sampling.
pub const GRID_THRESHOLD: u8 = 125;

/// Default threshold for glyph (pixel) sampling.
pub const GLYPH_THRESHOLD: u8 = 127;

/// Classify a single pixel's luma. Lit iff strictly below the threshold.
#[inline]
pub fn pixel_lit(luma: u8, threshold: u8) -> bool {
    luma < threshold
}

/// Classify a rectangular region of an RGB image. Lit iff the averaged
/// per-channel medians fall strictly below the threshold.
pub fn region_lit(img: &RgbImage, x0: u32, y0: u32, w: u32, h: u32, threshold: u8) -> bool {
    region_grayscale(img, x0, y0, w, h) < threshold as f32
}

/// Reduce a region to one grayscale value: median of each RGB channel over
/// the region, averaged across the three channels.
///
/// For even sample counts the lower median is taken.
pub fn region_grayscale(img: &RgbImage, x0: u32, y0: u32, w: u32, h: u32) -> f32 {
    let mut channels: [Vec<u8>; 3] = [Vec::new(), Vec::new(), Vec::new()];
    for ch in &mut channels {
        ch.reserve((w * h) as usize);
    }

    for y in y0..y0 + h {
        for x in x0..x0 + w {
            let pixel = img.get_pixel(x, y);
            for (ch, &value) in channels.iter_mut().zip(pixel.0.iter()) {
                ch.push(value);
            }
        }
    }

    let sum: u32 = channels.iter_mut().map(|ch| median(ch) as u32).sum();
    sum as f32 / 3.0
}

/// Lower median of a non-empty sample set.
fn median(samples: &mut [u8]) -> u8 {
    samples.sort_unstable();
    samples[(samples.len() - 1) / 2]
}
