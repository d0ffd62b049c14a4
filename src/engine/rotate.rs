//! # 2D Matrix Rotation
//!
//! Fixed-angle rotation of a [`BitMatrix`], used to match physical display
//! wiring orientation. The angle is a closed enum; anything else is
//! rejected at [`Orientation::from_degrees`] before the engine runs.

use super::BitMatrix;
use crate::error::BitsmithError;

/// Rotation angle, clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Orientation {
    /// Parse a degree count. Only the four canonical angles are valid.
    pub fn from_degrees(degrees: u32) -> Result<Self, BitsmithError> {
        match degrees {
            0 => Ok(Self::Deg0),
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 => Ok(Self::Deg270),
            other => Err(BitsmithError::InvalidParameter(format!(
                "invalid rotation {other}; must be 0, 90, 180 or 270"
            ))),
        }
    }

    pub fn degrees(self) -> u32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }
}

/// Rotate a matrix clockwise by the given orientation.
///
/// An R×C matrix rotated by 90° or 270° yields a C×R matrix.
pub fn rotate(m: &BitMatrix, orientation: Orientation) -> BitMatrix {
    let (h, w) = (m.height(), m.width());
    match orientation {
        Orientation::Deg0 => m.clone(),
        // new[r][c] = old[H-1-c][r]
        Orientation::Deg90 => BitMatrix::from_fn(w, h, |r, c| m.get(h - 1 - c, r)),
        // reverse row order, then reverse each row
        Orientation::Deg180 => BitMatrix::from_fn(h, w, |r, c| m.get(h - 1 - r, w - 1 - c)),
        // transpose, then reverse row order
        Orientation::Deg270 => BitMatrix::from_fn(w, h, |r, c| m.get(c, w - 1 - r)),
    }
}
