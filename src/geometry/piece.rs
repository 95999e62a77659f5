//! Piece footprints expressed as relative grid cells
//!
//! A piece knows nothing about bricks, colors or orientation. It is only the set of
//! cells it covers relative to an implicit `(0, 0)` anchor, which is the piece's upper
//! left cell. Orientation is baked into the extent by whoever builds the piece, so the
//! solvers can treat every mosaic as the same abstract grid.

use crate::spatial::Location;

/// Anything that occupies a fixed set of grid cells
pub trait Piece {
    /// Relative cells covered by the piece, anchored at its upper left cell
    ///
    /// The result must be identical across calls for the same piece.
    fn extent(&self) -> &[Location];

    /// Number of rows spanned by the extent
    fn rows(&self) -> usize {
        span(self.extent().iter().map(|loc| loc.row))
    }

    /// Number of columns spanned by the extent
    fn cols(&self) -> usize {
        span(self.extent().iter().map(|loc| loc.col))
    }

    /// Number of cells covered
    fn area(&self) -> usize {
        self.extent().len()
    }
}

fn span(values: impl Iterator<Item = i32>) -> usize {
    let (min, max) = values.fold((i32::MAX, i32::MIN), |(min, max), value| {
        (min.min(value), max.max(value))
    });
    if min > max {
        0
    } else {
        (max - min + 1) as usize
    }
}

/// Solid rectangle of `rows` x `cols` cells
///
/// The extent is the full cross product `{(r, c) : 0 <= r < rows, 0 <= c < cols}` in
/// row-major order, computed once at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RectPiece {
    rows: usize,
    cols: usize,
    cells: Vec<Location>,
}

impl RectPiece {
    /// Create a rectangle; zero in either dimension yields a piece with no cells
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Location::from_indices(row, col));
            }
        }
        Self { rows, cols, cells }
    }

    /// The same rectangle turned a quarter turn
    #[must_use]
    pub fn transposed(&self) -> Self {
        Self::new(self.cols, self.rows)
    }
}

impl Piece for RectPiece {
    fn extent(&self) -> &[Location] {
        &self.cells
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }
}
