//! Greedy tiling that works inwards from all four edges
//!
//! Plain greedy tiling sweeps from the upper left, so leftover small pieces pile up
//! along the bottom and right edges. This solver visits rows and columns in an
//! interleaved order (first, last, second, second to last, ...) and anchors each
//! candidate at the corner nearest the edges the cell was reached from. Symmetric
//! inputs therefore get roughly symmetric tilings.

use std::collections::BTreeMap;

use crate::algorithm::Solution;
use crate::geometry::{MosaicPiece, Piece};
use crate::io::error::Result;
use crate::spatial::{AnchorPoint, CellState, Grid, Location, translate, translate_absolute_origin};

/// Map the `step`th visit onto an index of a dimension of length `size`
///
/// Even steps walk forward from the start, odd steps walk backward from the end:
/// `0, size - 1, 1, size - 2, ...`. Every index in `0..size` is produced exactly
/// once as `step` runs over `0..size`.
pub const fn interleaved_index(step: usize, size: usize) -> usize {
    if step % 2 == 0 {
        step / 2
    } else {
        size - step / 2 - 1
    }
}

/// Tile every `ToBeFilled` cell of `grid`, working inwards from all edges
///
/// Columns are visited in interleaved order on the outside, rows in interleaved order
/// inside. The step parity on each axis decides whether the cell was reached from
/// the top or bottom and from the left or right, which selects the anchor corner.
/// Each candidate is tested with its footprint translated to that corner; the first
/// fit is placed and recorded under its recovered upper left origin.
///
/// `grid` is mutated in place: placed cells become `Filled`.
///
/// # Errors
///
/// Returns `UnsolvableRegion` with the partial placement when cells remain
/// `ToBeFilled` after the pass.
pub fn symmetrical_greedy_solve(grid: &mut Grid, pieces: &[MosaicPiece]) -> Result<Solution> {
    let original = grid.clone();
    let mut placed = BTreeMap::new();
    let (rows, cols) = grid.dimensions();

    for col_step in 0..cols {
        let col = interleaved_index(col_step, cols);
        for row_step in 0..rows {
            let row = interleaved_index(row_step, rows);
            let loc = Location::from_indices(row, col);
            if grid.state_at(loc) != CellState::ToBeFilled {
                continue;
            }

            let anchor = AnchorPoint::from_edges(row_step % 2 == 0, col_step % 2 == 0);
            let fitting = pieces
                .iter()
                .find(|piece| grid.extent_fits(&translate(piece.extent(), anchor), loc));

            if let Some(piece) = fitting {
                let origin = translate_absolute_origin(loc, piece, anchor);
                grid.mark(piece.extent(), origin, CellState::Filled);
                placed.insert(origin, piece.clone());
            }
        }
    }

    Solution::finish(grid, original, placed)
}
