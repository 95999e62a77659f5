//! First-fit greedy tiling in column-major scan order

use std::collections::BTreeMap;

use crate::algorithm::Solution;
use crate::geometry::{MosaicPiece, Piece};
use crate::io::error::Result;
use crate::spatial::{CellState, Grid, Location};

/// Tile every `ToBeFilled` cell of `grid` with the first fitting piece
///
/// Cells are visited column by column, top to bottom within a column. At each cell
/// still waiting for a piece, `pieces` is scanned in order and the first one whose
/// footprint fits with its upper left corner on that cell is placed. Cells that no
/// candidate fits are left as they are and reported at the end.
///
/// `grid` is mutated in place: placed cells become `Filled`.
///
/// # Errors
///
/// Returns `UnsolvableRegion` with the partial placement when cells remain
/// `ToBeFilled` after the pass, which always happens for a non-empty region and an
/// empty candidate list.
pub fn greedy_solve(grid: &mut Grid, pieces: &[MosaicPiece]) -> Result<Solution> {
    let original = grid.clone();
    let mut placed = BTreeMap::new();

    for col in 0..grid.cols() {
        for row in 0..grid.rows() {
            let loc = Location::from_indices(row, col);
            if grid.state_at(loc) != CellState::ToBeFilled {
                continue;
            }
            if let Some(piece) = pieces.iter().find(|piece| grid.piece_fits(*piece, loc)) {
                grid.mark(piece.extent(), loc, CellState::Filled);
                placed.insert(loc, piece.clone());
            }
        }
    }

    Solution::finish(grid, original, placed)
}
