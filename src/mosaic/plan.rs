//! The build plan: every placed brick across all colors

use ndarray::Array2;
use std::collections::BTreeMap;

use crate::algorithm::Solution;
use crate::geometry::{BrickPiece, MosaicPiece, Orientation, Piece};
use crate::mosaic::inventory::Inventory;
use crate::mosaic::palette::BrickColor;
use crate::spatial::Location;

/// One physical brick at its final position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedBrick {
    /// Sequential id, unique within the plan
    pub id: usize,
    /// Upper left cell of the brick
    pub origin: Location,
    /// Absolute cells covered by the brick
    pub extent: Vec<Location>,
    /// Brick color
    pub color: BrickColor,
    /// Catalog part and footprint
    pub shape: MosaicPiece,
    /// Orientation of the mosaic the brick belongs to
    pub orientation: Orientation,
}

impl PlacedBrick {
    /// The catalog part
    pub const fn brick(&self) -> &BrickPiece {
        self.shape.brick()
    }

    /// Whether the brick covers `loc`
    pub fn covers(&self, loc: Location) -> bool {
        self.extent.contains(&loc)
    }
}

/// A color region the solver could not cover completely
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsolvedRegion {
    /// Region color
    pub color: BrickColor,
    /// Cells left without a brick, row-major
    pub remaining: Vec<Location>,
}

/// Assembled mosaic, queryable by cell
#[derive(Debug, Clone)]
pub struct Plan {
    orientation: Orientation,
    bricks: Vec<PlacedBrick>,
    cell_index: Array2<Option<usize>>,
    solutions: BTreeMap<BrickColor, Solution>,
    failures: Vec<UnsolvedRegion>,
    inventory: Inventory,
}

impl Plan {
    /// Flatten per-color solutions into one plan
    ///
    /// Bricks are numbered from zero, colors in id order and placements row-major
    /// within a color.
    pub fn from_solutions(
        orientation: Orientation,
        (rows, cols): (usize, usize),
        solutions: BTreeMap<BrickColor, Solution>,
        failures: Vec<UnsolvedRegion>,
    ) -> Self {
        let mut bricks = Vec::new();
        let mut cell_index = Array2::from_elem((rows, cols), None);
        let mut inventory = Inventory::new();

        for (&color, solution) in &solutions {
            for (&origin, piece) in solution.pieces() {
                let id = bricks.len();
                let extent: Vec<Location> =
                    piece.extent().iter().filter_map(|&offset| origin.checked_add(offset)).collect();
                for loc in &extent {
                    if let Some(cell) = loc.to_indices().and_then(|index| cell_index.get_mut(index)) {
                        *cell = Some(id);
                    }
                }
                inventory.add(color, piece.clone());
                bricks.push(PlacedBrick {
                    id,
                    origin,
                    extent,
                    color,
                    shape: piece.clone(),
                    orientation,
                });
            }
        }

        Self {
            orientation,
            bricks,
            cell_index,
            solutions,
            failures,
            inventory,
        }
    }

    /// Orientation shared by every brick
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of grid rows
    pub fn num_rows(&self) -> usize {
        self.cell_index.nrows()
    }

    /// Number of grid columns
    pub fn num_cols(&self) -> usize {
        self.cell_index.ncols()
    }

    /// All placed bricks ordered by id
    pub fn pieces(&self) -> &[PlacedBrick] {
        &self.bricks
    }

    /// Brick covering `(row, col)`, if any
    pub fn piece(&self, row: usize, col: usize) -> Option<&PlacedBrick> {
        self.cell_index
            .get((row, col))
            .copied()
            .flatten()
            .and_then(|id| self.bricks.get(id))
    }

    /// Per-color parts list
    pub const fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Solver output for one color region
    pub fn solution(&self, color: &BrickColor) -> Option<&Solution> {
        self.solutions.get(color)
    }

    /// Colors present in the plan, ordered by id
    pub fn colors(&self) -> impl Iterator<Item = &BrickColor> {
        self.solutions.keys()
    }

    /// Regions left with uncovered cells
    pub fn failures(&self) -> &[UnsolvedRegion] {
        &self.failures
    }

    /// Whether every region was fully covered
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
