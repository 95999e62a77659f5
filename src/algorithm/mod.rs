//! Grid tiling solvers
//!
//! This module contains:
//! - The `Solution` type shared by every solver
//! - Column-major first-fit greedy tiling
//! - Edge-inwards symmetric greedy tiling

use std::fmt;
use std::str::FromStr;

/// First-fit greedy solver
pub mod greedy;
/// Placement results and coverage checks
pub mod solution;
/// Symmetric greedy solver
pub mod symmetric;

pub use greedy::greedy_solve;
pub use solution::Solution;
pub use symmetric::symmetrical_greedy_solve;

use crate::geometry::MosaicPiece;
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::spatial::Grid;

/// Signature shared by every tiling strategy
///
/// A solver receives a grid whose region cells are `ToBeFilled` and an ordered
/// candidate list, fills the grid in place and returns the placements.
pub type GridSolver = fn(&mut Grid, &[MosaicPiece]) -> Result<Solution>;

/// Selectable tiling strategies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SolverKind {
    /// Column-major first fit from the upper left
    #[default]
    Greedy,
    /// Interleaved first fit from all four edges
    Symmetrical,
}

impl SolverKind {
    /// All strategies
    pub const ALL: [Self; 2] = [Self::Greedy, Self::Symmetrical];

    /// Solver function for this strategy
    pub const fn solver(self) -> GridSolver {
        match self {
            Self::Greedy => greedy_solve,
            Self::Symmetrical => symmetrical_greedy_solve,
        }
    }

    /// Command line spelling of the strategy
    pub const fn name(self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
            Self::Symmetrical => "symmetric",
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolverKind {
    type Err = MosaicError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| invalid_parameter("solver", &value, &"expected greedy or symmetric"))
    }
}
