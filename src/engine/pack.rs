//! # Bit Packer
//!
//! Serializes a [`BitMatrix`] into integer values, in one of two
//! orientations selected by [`PackMode`]:
//!
//! - **Row-major** (LED tiles): each row is read left to right into one
//!   unsigned value, MSB = leftmost column. A display driver shifts the
//!   value out across one physical row. Rows wider than 32 cells do not
//!   fit the output word and are rejected.
//! - **Column-chunk** (OLED glyphs): rows are grouped into chunks of 8;
//!   within a chunk, each column becomes one byte where bit k is the cell
//!   k rows below the chunk top. This matches SSD1306-style page memory,
//!   where one byte spans 8 vertical pixels.
//!
//! A height that is not a multiple of 8 truncates the remainder rows in
//! column-chunk mode. This is a known limitation carried over from the
//! format this tool targets; the preset font heights are all multiples
//! of 8.

use super::BitMatrix;
use crate::error::BitsmithError;

/// Widest row that fits a row-major output word.
pub const MAX_ROW_BITS: usize = 32;

/// Rows per column-chunk byte.
pub const CHUNK_ROWS: usize = 8;

/// Packing orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackMode {
    /// One value per row, MSB = leftmost column.
    RowMajor,
    /// One byte per (chunk, column), bit k = row k within the chunk.
    ColumnChunk,
}

/// Packed bitmap values plus the matrix dimensions they were produced from.
///
/// Row-major values may use up to 32 bits; column-chunk values are always
/// bytes (0–255). Values are immutable once packed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBitmap {
    pub values: Vec<u32>,
    pub width: usize,
    pub height: usize,
}

/// Pack a matrix in the given mode.
pub fn pack(m: &BitMatrix, mode: PackMode) -> Result<PackedBitmap, BitsmithError> {
    let values = match mode {
        PackMode::RowMajor => pack_rows(m)?,
        PackMode::ColumnChunk => pack_column_chunks(m),
    };
    Ok(PackedBitmap {
        values,
        width: m.width(),
        height: m.height(),
    })
}

/// Pack each row into one u32, leftmost cell in the most significant bit.
fn pack_rows(m: &BitMatrix) -> Result<Vec<u32>, BitsmithError> {
    let width = m.width();
    if width > MAX_ROW_BITS {
        return Err(BitsmithError::InvalidParameter(format!(
            "row of {width} cells exceeds the {MAX_ROW_BITS}-bit output word; \
             reduce the cell count"
        )));
    }

    Ok(m.rows()
        .map(|row| {
            row.iter()
                .fold(0u32, |acc, &lit| (acc << 1) | u32::from(lit))
        })
        .collect())
}

/// Re-expand row-major values back into a matrix of the given width.
///
/// Inverse of row-major packing; used for debug binary printouts and the
/// round-trip law in tests.
pub fn unpack_rows(values: &[u32], width: usize) -> Result<BitMatrix, BitsmithError> {
    if width > MAX_ROW_BITS {
        return Err(BitsmithError::InvalidParameter(format!(
            "cannot expand rows wider than {MAX_ROW_BITS} bits"
        )));
    }
    Ok(BitMatrix::from_fn(values.len(), width, |r, c| {
        (values[r] >> (width - 1 - c)) & 1 == 1
    }))
}

/// Pack columns in 8-row chunks, one byte per (chunk, column).
///
/// Emission order is chunk-major: all columns of chunk 0 left to right,
/// then chunk 1, and so on. Bit 0 of each byte is the top row of its
/// chunk. Remainder rows beyond the last full chunk are dropped.
fn pack_column_chunks(m: &BitMatrix) -> Vec<u32> {
    let chunks = m.height() / CHUNK_ROWS;
    let width = m.width();
    let mut values = Vec::with_capacity(chunks * width);

    for chunk in 0..chunks {
        for col in 0..width {
            let mut byte = 0u32;
            for k in 0..CHUNK_ROWS {
                if m.get(chunk * CHUNK_ROWS + k, col) {
                    byte |= 1 << k;
                }
            }
            values.push(byte);
        }
    }
    values
}
