//! Re-anchoring piece extents at any of the four corners
//!
//! Extents are always stored relative to the piece's upper left cell. When a solver
//! works inwards from the right or bottom edge it needs the same footprint expressed
//! relative to another corner, and afterwards it needs the canonical upper left
//! origin back so that stored placements stay comparable.

use std::fmt;

use crate::geometry::Piece;
use crate::spatial::Location;

/// Corner of a piece used as the translation origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorPoint {
    /// Upper left corner; the canonical anchor
    UpperLeft,
    /// Upper right corner; the piece extends leftwards
    UpperRight,
    /// Lower right corner; the piece extends leftwards and upwards
    LowerRight,
    /// Lower left corner; the piece extends upwards
    LowerLeft,
}

impl AnchorPoint {
    /// All anchor points, clockwise from the upper left
    pub const ALL: [Self; 4] = [
        Self::UpperLeft,
        Self::UpperRight,
        Self::LowerRight,
        Self::LowerLeft,
    ];

    /// Anchor for a cell reached from the top or bottom edge and the left or right edge
    pub const fn from_edges(from_top: bool, from_left: bool) -> Self {
        match (from_top, from_left) {
            (true, true) => Self::UpperLeft,
            (false, true) => Self::LowerLeft,
            (true, false) => Self::UpperRight,
            (false, false) => Self::LowerRight,
        }
    }

    const fn negates_rows(self) -> bool {
        matches!(self, Self::LowerRight | Self::LowerLeft)
    }

    const fn negates_cols(self) -> bool {
        matches!(self, Self::UpperRight | Self::LowerRight)
    }

    /// Offset from a piece's upper left cell to this corner cell
    ///
    /// For a `rows` x `cols` piece the corner sits `rows - 1` rows down and/or
    /// `cols - 1` columns across.
    pub const fn corner_offset(self, rows: usize, cols: usize) -> Location {
        let row = if self.negates_rows() { rows as i32 - 1 } else { 0 };
        let col = if self.negates_cols() { cols as i32 - 1 } else { 0 };
        Location::new(row, col)
    }
}

impl fmt::Display for AnchorPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UpperLeft => "UpperLeft",
            Self::UpperRight => "UpperRight",
            Self::LowerRight => "LowerRight",
            Self::LowerLeft => "LowerLeft",
        };
        f.write_str(name)
    }
}

/// Express an upper-left-relative extent relative to `anchor`
///
/// `UpperLeft` is the identity, `UpperRight` negates columns, `LowerRight` negates
/// both axes and `LowerLeft` negates rows.
pub fn translate(extent: &[Location], anchor: AnchorPoint) -> Vec<Location> {
    let row_sign = if anchor.negates_rows() { -1 } else { 1 };
    let col_sign = if anchor.negates_cols() { -1 } else { 1 };
    extent
        .iter()
        .map(|loc| Location::new(loc.row * row_sign, loc.col * col_sign))
        .collect()
}

/// Recover the upper left origin of a piece placed with its `anchor` corner at `absolute`
pub fn translate_absolute_origin<P: Piece + ?Sized>(
    absolute: Location,
    piece: &P,
    anchor: AnchorPoint,
) -> Location {
    absolute - anchor.corner_offset(piece.rows(), piece.cols())
}
