//! # Margin Trimmer
//!
//! Finds the blank columns on either edge of a glyph's cell matrix so
//! variable-width layout can store only the columns that carry ink.
//!
//! The left scan walks columns from column 0 until one contains a lit
//! cell; the right scan walks from the last column down to the left
//! margin boundary. An entirely blank glyph therefore reports
//! `left == width`, `right == 0`, and an effective width of 0: a valid,
//! representable result rather than an error.

use super::BitMatrix;

/// Blank column counts on each edge of a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
    pub left: usize,
    pub right: usize,
}

impl Margins {
    /// Glyph width after trimming both margins from the nominal width.
    pub fn effective_width(&self, nominal: usize) -> usize {
        nominal - self.left - self.right
    }
}

/// Scan both edges of the matrix for columns containing no lit cell.
pub fn blank_margins(m: &BitMatrix) -> Margins {
    let width = m.width();

    let left = (0..width)
        .take_while(|&col| column_blank(m, col))
        .count();

    let right = (left..width)
        .rev()
        .take_while(|&col| column_blank(m, col))
        .count();

    Margins { left, right }
}

/// Drop the given margins, keeping the columns `[left, width - right)`.
pub fn crop_columns(m: &BitMatrix, margins: &Margins) -> BitMatrix {
    let kept = m.width() - margins.left - margins.right;
    BitMatrix::from_fn(m.height(), kept, |r, c| m.get(r, margins.left + c))
}

fn column_blank(m: &BitMatrix, col: usize) -> bool {
    (0..m.height()).all(|row| !m.get(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Glyph of the given width/height, lit only in the listed columns.
    fn glyph_with_lit_columns(width: usize, height: usize, lit: &[usize]) -> BitMatrix {
        BitMatrix::from_fn(height, width, |_, c| lit.contains(&c))
    }

    #[test]
    fn test_blank_glyph_effective_width_zero() {
        let m = glyph_with_lit_columns(7, 8, &[]);
        let margins = blank_margins(&m);
        assert_eq!(margins.left + margins.right, 7);
        assert_eq!(margins.effective_width(7), 0);

        let cropped = crop_columns(&m, &margins);
        assert_eq!(cropped.width(), 0);
        assert_eq!(cropped.height(), 8);
    }

    #[test]
    fn test_single_middle_column() {
        // Width 7, only column 3 lit: left = right = (7-1)/2 = 3.
        let m = glyph_with_lit_columns(7, 8, &[3]);
        let margins = blank_margins(&m);
        assert_eq!(margins, Margins { left: 3, right: 3 });
        assert_eq!(margins.effective_width(7), 1);
    }

    #[test]
    fn test_asymmetric_margins() {
        let m = glyph_with_lit_columns(8, 8, &[1, 2, 5]);
        let margins = blank_margins(&m);
        assert_eq!(margins, Margins { left: 1, right: 2 });
        assert_eq!(margins.effective_width(8), 5);
    }

    #[test]
    fn test_ink_at_both_edges() {
        let m = glyph_with_lit_columns(6, 8, &[0, 5]);
        let margins = blank_margins(&m);
        assert_eq!(margins, Margins { left: 0, right: 0 });
        assert_eq!(margins.effective_width(6), 6);
    }

    #[test]
    fn test_interior_blank_columns_kept() {
        // A blank gap between lit columns is inside the glyph, not margin.
        let m = glyph_with_lit_columns(8, 8, &[2, 5]);
        let margins = blank_margins(&m);
        assert_eq!(margins, Margins { left: 2, right: 2 });

        let cropped = crop_columns(&m, &margins);
        assert_eq!(cropped.width(), 4);
        assert!(cropped.get(0, 0));
        assert!(!cropped.get(0, 1));
        assert!(!cropped.get(0, 2));
        assert!(cropped.get(0, 3));
    }

    #[test]
    fn test_single_lit_cell_is_enough() {
        // One lit cell anywhere in a column makes it non-blank.
        let m = BitMatrix::from_fn(8, 5, |r, c| (r, c) == (7, 2));
        let margins = blank_margins(&m);
        assert_eq!(margins, Margins { left: 2, right: 2 });
    }
}
