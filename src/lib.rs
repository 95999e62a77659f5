//! Brick mosaic planning through greedy rectangle tiling
//!
//! An image is reduced to a brick color palette on a fixed grid. Each color region
//! then gets its own occupancy grid, which a greedy solver tiles with rectangular
//! bricks or plates in one of three viewing orientations. The per-color placements
//! are merged into a build plan with a parts inventory.

#![forbid(unsafe_code)]

/// Greedy tiling solvers and their solutions
pub mod algorithm;
/// Piece footprints, the brick catalog and orientations
pub mod geometry;
/// Input/output operations and error handling
pub mod io;
/// Palettes, ideal images and plan assembly
pub mod mosaic;
/// Grid coordinates, occupancy grids and corner anchoring
pub mod spatial;

pub use io::error::{MosaicError, Result};
