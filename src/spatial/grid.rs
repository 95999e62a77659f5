//! Occupancy grid tracking which cells still need a piece
//!
//! Each color region of a mosaic gets its own grid of the full mosaic size. Cells
//! outside the region are `Empty` and are never touched by a solver; cells inside
//! start as `ToBeFilled` and become `Filled` as pieces are placed. Reads outside the
//! grid answer `Empty` and writes outside the grid are ignored, which lets piece
//! extents hang over the edge without special casing.

use ndarray::Array2;
use std::fmt;

use crate::geometry::Piece;
use crate::spatial::Location;

/// State of a single grid cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Outside the region being tiled; nothing may be placed here
    #[default]
    Empty,
    /// Inside the region and still waiting for a piece
    ToBeFilled,
    /// Covered by a placed piece
    Filled,
}

impl CellState {
    const fn symbol(self) -> char {
        match self {
            Self::Empty => '0',
            Self::ToBeFilled => '1',
            Self::Filled => '2',
        }
    }
}

/// Fixed-size matrix of cell states, indexed `[row, col]` from the upper left
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<CellState>,
}

impl Grid {
    /// Create a grid with every cell `Empty`
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_state(rows, cols, CellState::Empty)
    }

    /// Create a grid with every cell set to `state`
    pub fn with_state(rows: usize, cols: usize, state: CellState) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), state),
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Set every cell to `state`
    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
    }

    /// State at `(row, col)`, `Empty` when out of bounds
    pub fn get(&self, row: i32, col: i32) -> CellState {
        self.state_at(Location::new(row, col))
    }

    /// Set the state at `(row, col)`; out of bounds writes are ignored
    pub fn set(&mut self, row: i32, col: i32, state: CellState) {
        self.set_state_at(Location::new(row, col), state);
    }

    /// State at `loc`, `Empty` when out of bounds
    pub fn state_at(&self, loc: Location) -> CellState {
        loc.to_indices()
            .and_then(|index| self.cells.get(index))
            .copied()
            .unwrap_or_default()
    }

    /// Set the state at `loc`; out of bounds writes are ignored
    pub fn set_state_at(&mut self, loc: Location, state: CellState) {
        if let Some(cell) = loc.to_indices().and_then(|index| self.cells.get_mut(index)) {
            *cell = state;
        }
    }

    /// All locations holding `state`, in row-major order
    pub fn find(&self, state: CellState) -> Vec<Location> {
        self.cells
            .indexed_iter()
            .filter(|&(_, &cell)| cell == state)
            .map(|((row, col), _)| Location::from_indices(row, col))
            .collect()
    }

    /// Whether any cell holds `state`
    pub fn any(&self, state: CellState) -> bool {
        self.cells.iter().any(|&cell| cell == state)
    }

    /// Number of cells holding `state`
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// Whether `piece` can be placed with its upper left cell at `origin`
    ///
    /// True iff every covered cell is inside the grid and currently `ToBeFilled`.
    /// A piece without cells never fits.
    pub fn piece_fits<P: Piece + ?Sized>(&self, piece: &P, origin: Location) -> bool {
        self.extent_fits(piece.extent(), origin)
    }

    /// Whether the relative cells in `extent`, offset by `origin`, are all `ToBeFilled`
    pub fn extent_fits(&self, extent: &[Location], origin: Location) -> bool {
        !extent.is_empty()
            && extent
                .iter()
                .all(|&offset| {
                    origin
                        .checked_add(offset)
                        .is_some_and(|loc| self.state_at(loc) == CellState::ToBeFilled)
                })
    }

    /// Set every cell of `extent`, offset by `origin`, to `state`
    ///
    /// Cells outside the grid, including offsets that overflow, are skipped.
    pub fn mark(&mut self, extent: &[Location], origin: Location, state: CellState) {
        for loc in extent.iter().filter_map(|&offset| origin.checked_add(offset)) {
            self.set_state_at(loc, state);
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for row in self.cells.rows() {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        write!(f, "]")
    }
}
