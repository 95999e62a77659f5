//! Solver output: which piece goes where in one color region

use bitvec::prelude::*;
use std::collections::BTreeMap;
use std::fmt;

use crate::geometry::{MosaicPiece, Piece};
use crate::io::error::{MosaicError, Result};
use crate::spatial::{CellState, Grid, Location};

/// Letters cycled through when drawing a solution as text
const PIECE_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The grid a solver was asked to fill, plus the pieces it placed
///
/// Placements are keyed by the piece's upper left cell regardless of which corner
/// drove the placement, and iterate in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    original: Grid,
    pieces: BTreeMap<Location, MosaicPiece>,
}

impl Solution {
    /// Bundle an unsolved grid with its placements
    pub const fn new(original: Grid, pieces: BTreeMap<Location, MosaicPiece>) -> Self {
        Self { original, pieces }
    }

    /// Finish a solver pass over `solved`
    ///
    /// # Errors
    ///
    /// Returns `UnsolvableRegion` carrying this solution when `solved` still has
    /// `ToBeFilled` cells.
    pub(crate) fn finish(
        solved: &Grid,
        original: Grid,
        pieces: BTreeMap<Location, MosaicPiece>,
    ) -> Result<Self> {
        let solution = Self::new(original, pieces);
        if solved.any(CellState::ToBeFilled) {
            return Err(MosaicError::UnsolvableRegion {
                remaining: solved.find(CellState::ToBeFilled),
                partial: Box::new(solution),
            });
        }
        Ok(solution)
    }

    /// The grid as it was before solving
    pub const fn original(&self) -> &Grid {
        &self.original
    }

    /// Placed pieces keyed by upper left location
    pub const fn pieces(&self) -> &BTreeMap<Location, MosaicPiece> {
        &self.pieces
    }

    /// Piece whose upper left cell is `origin`
    pub fn piece_at(&self, origin: Location) -> Option<&MosaicPiece> {
        self.pieces.get(&origin)
    }

    /// Number of placed pieces
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Whether nothing was placed
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Consume the solution, returning the original grid and the placements
    pub fn into_parts(self) -> (Grid, BTreeMap<Location, MosaicPiece>) {
        (self.original, self.pieces)
    }

    fn cell_index(&self, loc: Location) -> Option<usize> {
        let (rows, cols) = self.original.dimensions();
        loc.to_indices()
            .filter(|&(row, col)| row < rows && col < cols)
            .map(|(row, col)| row * cols + col)
    }

    /// Row-major mask of in-bounds cells covered by at least one placed piece
    pub fn coverage(&self) -> BitVec {
        let (rows, cols) = self.original.dimensions();
        let mut covered = bitvec![0; rows * cols];
        for (&origin, piece) in &self.pieces {
            for &offset in piece.extent() {
                if let Some(index) = origin.checked_add(offset).and_then(|loc| self.cell_index(loc)) {
                    covered.set(index, true);
                }
            }
        }
        covered
    }

    /// Whether every originally `ToBeFilled` cell is covered exactly once and
    /// nothing else is covered
    pub fn is_exact_cover(&self) -> bool {
        let (rows, cols) = self.original.dimensions();
        let mut covered = bitvec![0; rows * cols];
        for (&origin, piece) in &self.pieces {
            for &offset in piece.extent() {
                let Some(loc) = origin.checked_add(offset) else {
                    return false;
                };
                if self.original.state_at(loc) != CellState::ToBeFilled {
                    return false;
                }
                let Some(index) = self.cell_index(loc) else {
                    return false;
                };
                if covered.get(index).as_deref() == Some(&true) {
                    return false;
                }
                covered.set(index, true);
            }
        }
        covered.count_ones() == self.original.count(CellState::ToBeFilled)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.original.dimensions();
        let mut cells = vec![vec!['_'; cols]; rows];

        for (index, (&origin, piece)) in self.pieces.iter().enumerate() {
            let letter = PIECE_LETTERS
                .get(index % PIECE_LETTERS.len())
                .map_or('?', |&byte| char::from(byte));
            for &offset in piece.extent() {
                let cell = origin
                    .checked_add(offset)
                    .and_then(Location::to_indices)
                    .and_then(|(row, col)| cells.get_mut(row).and_then(|line| line.get_mut(col)));
                if let Some(cell) = cell {
                    *cell = letter;
                }
            }
        }

        for line in &cells {
            let text: String = line.iter().collect();
            writeln!(f, "{text}")?;
        }
        Ok(())
    }
}
