//! # ASCII Previews
//!
//! Text renderings of a [`BitMatrix`] for terminals and header comments.
//! Grid tiles use double-width block characters so a cell is roughly
//! square in a terminal; glyphs use the compact `#`/`.` form.

use crate::engine::BitMatrix;

/// Render a matrix as block art: `██` for lit cells, `░░` for unlit.
/// Lines are newline-terminated.
pub fn block_art(m: &BitMatrix) -> String {
    let mut out = String::with_capacity(m.height() * (m.width() * 6 + 1));
    for row in m.rows() {
        for &lit in row {
            out.push_str(if lit { "██" } else { "░░" });
        }
        out.push('\n');
    }
    out
}

/// Render a matrix as dot art: `#` for lit cells, `.` for unlit.
/// Lines are newline-terminated.
pub fn dot_art(m: &BitMatrix) -> String {
    let mut out = String::with_capacity(m.height() * (m.width() + 1));
    for row in m.rows() {
        for &lit in row {
            out.push(if lit { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}
