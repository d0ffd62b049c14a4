//! # Bitmap Encoding Engine
//!
//! The pipeline that turns a pixel source into packed 1-bit bitmap data:
//!
//! ```text
//! segment → sample → (trim) → rotate → pack
//! ```
//!
//! Every stage is a pure transform over in-memory data. The drivers in this
//! module wire the stages together for the two operating modes:
//!
//! - [`encode_grid`]: carve an image into macro-block tiles, subdivide each
//!   tile into square cells, classify the cells, rotate, and pack each tile
//!   row-major into one integer per row. Used for LED matrix art.
//! - [`encode_glyph`] / [`encode_glyphs`]: classify a rasterized glyph
//!   pixel-per-cell, optionally trim blank margins for variable-width
//!   layout, and pack column-chunk (8 rows per byte). Used for OLED fonts.
//!
//! Tiles and glyphs are independent of each other, so both drivers run their
//! outer loop on a rayon pool. Collection preserves iteration order, so the
//! output is identical to a sequential run.

pub mod grid;
pub mod pack;
pub mod rotate;
pub mod sampler;
pub mod trim;

use rayon::prelude::*;

use crate::error::BitsmithError;
use crate::font::raster::GlyphRaster;
use image::RgbImage;

pub use pack::{PackMode, PackedBitmap, pack};
pub use rotate::Orientation;

/// Rectangular matrix of lit/unlit cells.
///
/// Row order is vertical position (row 0 = top), column order is horizontal
/// position (column 0 = left). The constructor rejects jagged input, so
/// every row is guaranteed to have the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    rows: Vec<Vec<bool>>,
}

impl BitMatrix {
    /// Build a matrix from rows, rejecting jagged input.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, BitsmithError> {
        if let Some(first) = rows.first()
            && rows.iter().any(|r| r.len() != first.len())
        {
            return Err(BitsmithError::InvalidParameter(
                "matrix rows must all have the same length".to_string(),
            ));
        }
        Ok(Self { rows })
    }

    /// Build a matrix from a cell predicate. `f(row, col)` returns lit.
    pub fn from_fn(height: usize, width: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let rows = (0..height)
            .map(|r| (0..width).map(|c| f(r, c)).collect())
            .collect();
        Self { rows }
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |r| r.len())
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.rows[row][col]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.rows.iter().map(|r| r.as_slice())
    }
}

/// Options for grid (LED tile) encoding.
#[derive(Debug, Clone)]
pub struct GridOptions {
    /// Macro-block tile count along the horizontal axis.
    pub tiles_x: u32,
    /// Macro-block tile count along the vertical axis.
    pub tiles_y: u32,
    /// Cells per tile along the horizontal axis; cells are square, so the
    /// vertical count follows from the tile height.
    pub cells_per_tile: u32,
    /// Rotation applied to every tile's cell matrix before packing.
    pub rotation: Orientation,
    /// Lit/unlit threshold for the median sampler.
    pub threshold: u8,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            tiles_x: 1,
            tiles_y: 1,
            cells_per_tile: 1,
            rotation: Orientation::Deg180,
            threshold: sampler::GRID_THRESHOLD,
        }
    }
}

/// One encoded macro-block: its position among siblings, the post-rotation
/// cell matrix (kept for previews), and the packed row values.
#[derive(Debug, Clone)]
pub struct Tile {
    pub row: usize,
    pub col: usize,
    pub matrix: BitMatrix,
    pub packed: PackedBitmap,
}

/// Encode an image as a grid of independently packed tiles.
///
/// Tiles are returned in row-major order (top row left to right first),
/// matching the order the header formatter emits them in.
pub fn encode_grid(img: &RgbImage, opts: &GridOptions) -> Result<Vec<Tile>, BitsmithError> {
    let tiles = grid::carve_tiles(img, opts.tiles_x, opts.tiles_y)?;

    // Validate the cell subdivision against the first tile before spawning
    // any sampling work. All tiles share dimensions, so one check covers
    // them all and a bad cell count never yields partial output.
    if let Some(first) = tiles.first().and_then(|row| row.first()) {
        grid::check_cell_layout(first, opts.cells_per_tile)?;
    }

    let indexed: Vec<(usize, usize, &RgbImage)> = tiles
        .iter()
        .enumerate()
        .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, img)| (r, c, img)))
        .collect();

    indexed
        .par_iter()
        .map(|&(row, col, tile_img)| {
            let cells = grid::segment_cells(tile_img, opts.cells_per_tile, opts.threshold)?;
            let rotated = rotate::rotate(&cells, opts.rotation);
            let packed = pack::pack(&rotated, PackMode::RowMajor)?;
            Ok(Tile {
                row,
                col,
                matrix: rotated,
                packed,
            })
        })
        .collect()
}

/// Options for glyph encoding.
#[derive(Debug, Clone)]
pub struct GlyphOptions {
    /// Lit/unlit threshold applied to each pixel's luma.
    pub threshold: u8,
    /// Trim blank columns from both edges for variable-width layout.
    pub variable_width: bool,
}

impl Default for GlyphOptions {
    fn default() -> Self {
        Self {
            threshold: sampler::GLYPH_THRESHOLD,
            variable_width: false,
        }
    }
}

/// One encoded glyph with its trim metadata.
///
/// `matrix` is the post-trim cell matrix (kept for ASCII previews);
/// `effective_width` is the nominal width minus both margins. An entirely
/// blank glyph legitimately has effective width 0 and no packed bytes.
#[derive(Debug, Clone)]
pub struct EncodedGlyph {
    pub codepoint: u32,
    pub nominal_width: usize,
    pub left_margin: usize,
    pub effective_width: usize,
    pub matrix: BitMatrix,
    pub packed: PackedBitmap,
}

/// Encode a single rasterized glyph.
pub fn encode_glyph(
    raster: &GlyphRaster,
    codepoint: u32,
    opts: &GlyphOptions,
) -> Result<EncodedGlyph, BitsmithError> {
    let full = BitMatrix::from_fn(raster.height, raster.width, |row, col| {
        sampler::pixel_lit(raster.luma(col, row), opts.threshold)
    });

    let (matrix, left_margin) = if opts.variable_width {
        let margins = trim::blank_margins(&full);
        (trim::crop_columns(&full, &margins), margins.left)
    } else {
        (full, 0)
    };

    let packed = pack::pack(&matrix, PackMode::ColumnChunk)?;
    Ok(EncodedGlyph {
        codepoint,
        nominal_width: raster.width,
        left_margin,
        effective_width: matrix.width(),
        matrix,
        packed,
    })
}

/// Encode a batch of glyphs in parallel, preserving input order.
pub fn encode_glyphs(
    rasters: &[(u32, GlyphRaster)],
    opts: &GlyphOptions,
) -> Result<Vec<EncodedGlyph>, BitsmithError> {
    rasters
        .par_iter()
        .map(|(codepoint, raster)| encode_glyph(raster, *codepoint, opts))
        .collect()
}
