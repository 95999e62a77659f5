//! Split an ideal image into color regions, tile each and merge the results
//!
//! Every distinct color gets its own full-size grid whose `ToBeFilled` cells are
//! exactly the cells of that color. Regions are tiled independently with the same
//! candidate list; a region the solver cannot finish is recorded as a failure and
//! its partial placement is still merged, so the other colors are unaffected.

use std::collections::BTreeMap;

use crate::algorithm::{GridSolver, Solution};
use crate::geometry::Catalog;
use crate::io::error::{MosaicError, Result, invalid_source};
use crate::mosaic::ideal::Ideal;
use crate::mosaic::palette::BrickColor;
use crate::mosaic::plan::{Plan, UnsolvedRegion};
use crate::spatial::{CellState, Grid, Location};

/// Outcome of tiling one color region, handed to assembly observers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionReport {
    /// Region color
    pub color: BrickColor,
    /// Zero-based position of the region in solving order
    pub index: usize,
    /// Number of regions in the mosaic
    pub total: usize,
    /// Bricks placed in the region
    pub placed: usize,
    /// Cells the solver could not cover
    pub remaining: usize,
}

impl RegionReport {
    /// Whether the region was covered completely
    pub const fn is_solved(&self) -> bool {
        self.remaining == 0
    }
}

/// One grid per distinct color, with that color's cells marked `ToBeFilled`
///
/// # Errors
///
/// Returns `InvalidSourceData` if the ideal reports no color for a cell inside its
/// own bounds.
pub fn make_grids<I: Ideal + ?Sized>(ideal: &I) -> Result<BTreeMap<BrickColor, Grid>> {
    let (rows, cols) = (ideal.num_rows(), ideal.num_cols());
    let mut grids = BTreeMap::new();
    for row in 0..rows {
        for col in 0..cols {
            let color = ideal.color(row, col).ok_or_else(|| {
                invalid_source(&format!("no color for cell ({row}, {col}) of a {rows}x{cols} ideal"))
            })?;
            grids
                .entry(color)
                .or_insert_with(|| Grid::new(rows, cols))
                .set_state_at(Location::from_indices(row, col), CellState::ToBeFilled);
        }
    }
    Ok(grids)
}

/// Tile every color region of `ideal` and assemble the plan
///
/// # Errors
///
/// Returns `InvalidSourceData` for an inconsistent ideal, or any solver error other
/// than `UnsolvableRegion` (which is recorded in [`Plan::failures`] instead).
pub fn create_grid_mosaic<I: Ideal + ?Sized>(
    ideal: &I,
    catalog: &Catalog,
    solver: GridSolver,
) -> Result<Plan> {
    create_grid_mosaic_observed(ideal, catalog, solver, |_| {})
}

/// [`create_grid_mosaic`] that reports each finished region to `observer`
///
/// # Errors
///
/// Same as [`create_grid_mosaic`].
pub fn create_grid_mosaic_observed<I, F>(
    ideal: &I,
    catalog: &Catalog,
    solver: GridSolver,
    mut observer: F,
) -> Result<Plan>
where
    I: Ideal + ?Sized,
    F: FnMut(&RegionReport),
{
    let orientation = ideal.orientation();
    let pieces = catalog.pieces_for(orientation);
    let grids = make_grids(ideal)?;
    let total = grids.len();

    let mut solutions: BTreeMap<BrickColor, Solution> = BTreeMap::new();
    let mut failures = Vec::new();

    for (index, (color, mut grid)) in grids.into_iter().enumerate() {
        let (solution, remaining) = match solver(&mut grid, &pieces) {
            Ok(solution) => (solution, Vec::new()),
            Err(MosaicError::UnsolvableRegion { remaining, partial }) => (*partial, remaining),
            Err(err) => return Err(err),
        };

        observer(&RegionReport {
            color,
            index,
            total,
            placed: solution.len(),
            remaining: remaining.len(),
        });

        if !remaining.is_empty() {
            failures.push(UnsolvedRegion { color, remaining });
        }
        solutions.insert(color, solution);
    }

    Ok(Plan::from_solutions(
        orientation,
        (ideal.num_rows(), ideal.num_cols()),
        solutions,
        failures,
    ))
}
