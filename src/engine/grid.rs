//! # Grid Segmenter
//!
//! Partitions a pixel buffer into rectangular regions by floor division.
//! Applied at two granularities: [`carve_tiles`] splits a source image into
//! independent macro-block tiles, and [`segment_cells`] subdivides one tile
//! into square cells and classifies each through the threshold sampler.
//!
//! Floor division means trailing pixels that do not fill a whole tile or
//! cell are dropped, never padded. Counts that would produce a zero-sized
//! region are rejected up front as [`BitsmithError::InvalidParameter`].

use image::{RgbImage, imageops};

use super::{BitMatrix, sampler};
use crate::error::BitsmithError;

/// Carve an image into `tiles_x` × `tiles_y` macro-block tiles.
///
/// Returns tiles in row-major order: `result[ty][tx]` is the tile at
/// vertical index `ty`, horizontal index `tx`. Tile size is
/// `floor(dimension / count)` on each axis; remainder pixels on the right
/// and bottom edges are dropped.
pub fn carve_tiles(
    img: &RgbImage,
    tiles_x: u32,
    tiles_y: u32,
) -> Result<Vec<Vec<RgbImage>>, BitsmithError> {
    if tiles_x == 0 || tiles_y == 0 {
        return Err(BitsmithError::InvalidParameter(
            "tile counts must be positive".to_string(),
        ));
    }
    if tiles_x > img.width() || tiles_y > img.height() {
        return Err(BitsmithError::InvalidParameter(format!(
            "{}x{} tiles exceed the {}x{} image (tile size would be zero)",
            tiles_x,
            tiles_y,
            img.width(),
            img.height()
        )));
    }

    let tile_w = img.width() / tiles_x;
    let tile_h = img.height() / tiles_y;

    let mut tiles = Vec::with_capacity(tiles_y as usize);
    for ty in 0..tiles_y {
        let mut row = Vec::with_capacity(tiles_x as usize);
        for tx in 0..tiles_x {
            let tile = imageops::crop_imm(img, tx * tile_w, ty * tile_h, tile_w, tile_h);
            row.push(tile.to_image());
        }
        tiles.push(row);
    }
    Ok(tiles)
}

/// Validate that `columns` cells fit the tile with a non-zero square cell
/// size and at least one full row of cells.
pub fn check_cell_layout(tile: &RgbImage, columns: u32) -> Result<(), BitsmithError> {
    if columns == 0 {
        return Err(BitsmithError::InvalidParameter(
            "cell count must be positive".to_string(),
        ));
    }
    if columns > tile.width() {
        return Err(BitsmithError::InvalidParameter(format!(
            "{} cells exceed the {}px tile width (cell size would be zero)",
            columns,
            tile.width()
        )));
    }
    let cell = tile.width() / columns;
    if tile.height() < cell {
        return Err(BitsmithError::InvalidParameter(format!(
            "tile height {}px holds no full row of {}px cells",
            tile.height(),
            cell
        )));
    }
    Ok(())
}

/// Subdivide one tile into square cells and classify each as lit/unlit.
///
/// Cell size is `floor(tile_width / columns)`; the row count follows as
/// `floor(tile_height / cell_size)`. The result has rows = vertical cell
/// index, columns = horizontal cell index.
pub fn segment_cells(
    tile: &RgbImage,
    columns: u32,
    threshold: u8,
) -> Result<BitMatrix, BitsmithError> {
    check_cell_layout(tile, columns)?;

    let cell = tile.width() / columns;
    let rows = tile.height() / cell;

    Ok(BitMatrix::from_fn(
        rows as usize,
        columns as usize,
        |row, col| {
            sampler::region_lit(
                tile,
                col as u32 * cell,
                row as u32 * cell,
                cell,
                cell,
                threshold,
            )
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn checkerboard(w: u32, h: u32, square: u32) -> RgbImage {
        RgbImage::from_fn(w, h, |x, y| {
            if ((x / square) + (y / square)) % 2 == 0 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        })
    }

    #[test]
    fn test_carve_tiles_dimensions() {
        let img = RgbImage::new(100, 60);
        let tiles = carve_tiles(&img, 4, 3).unwrap();
        assert_eq!(tiles.len(), 3);
        assert_eq!(tiles[0].len(), 4);
        assert_eq!(tiles[0][0].dimensions(), (25, 20));
    }

    #[test]
    fn test_carve_tiles_drops_remainder() {
        // 10 / 3 = 3px tiles, 1px dropped on each axis
        let img = RgbImage::new(10, 10);
        let tiles = carve_tiles(&img, 3, 3).unwrap();
        assert_eq!(tiles[2][2].dimensions(), (3, 3));
    }

    #[test]
    fn test_carve_tiles_zero_count_rejected() {
        let img = RgbImage::new(10, 10);
        assert!(carve_tiles(&img, 0, 1).is_err());
        assert!(carve_tiles(&img, 1, 0).is_err());
    }

    #[test]
    fn test_carve_tiles_oversized_count_rejected() {
        let img = RgbImage::new(10, 10);
        assert!(carve_tiles(&img, 11, 1).is_err());
        assert!(carve_tiles(&img, 1, 11).is_err());
    }

    #[test]
    fn test_segment_cells_checkerboard() {
        let img = checkerboard(8, 8, 2);
        let m = segment_cells(&img, 4, sampler::GRID_THRESHOLD).unwrap();
        assert_eq!(m.width(), 4);
        assert_eq!(m.height(), 4);
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(m.get(row, col), (row + col) % 2 == 0);
            }
        }
    }

    #[test]
    fn test_segment_cells_remainder_truncated() {
        // 10px wide / 4 columns = 2px cells; 10px tall / 2 = 5 rows,
        // with 2px of width left unsampled.
        let img = checkerboard(10, 10, 2);
        let m = segment_cells(&img, 4, sampler::GRID_THRESHOLD).unwrap();
        assert_eq!(m.width(), 4);
        assert_eq!(m.height(), 5);
    }

    #[test]
    fn test_segment_cells_validation() {
        let img = RgbImage::new(8, 8);
        assert!(segment_cells(&img, 0, 125).is_err());
        assert!(segment_cells(&img, 9, 125).is_err());
    }

    #[test]
    fn test_segment_cells_flat_tile_rejected() {
        // 16px wide / 2 columns = 8px cells, but only 4px of height
        let img = RgbImage::new(16, 4);
        assert!(segment_cells(&img, 2, 125).is_err());
    }
}
