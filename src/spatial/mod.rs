//! Spatial data structures for the tiling engine
//!
//! This module contains:
//! - Grid coordinates and vector arithmetic
//! - The per-color occupancy grid
//! - Corner re-anchoring used by the symmetric solver

/// Corner re-anchoring of piece extents
pub mod anchor;
/// Occupancy grid state management
pub mod grid;
/// Grid coordinates
pub mod location;

pub use anchor::{AnchorPoint, translate, translate_absolute_origin};
pub use grid::{CellState, Grid};
pub use location::Location;
