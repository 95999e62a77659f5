//! From image to build plan
//!
//! This module contains:
//! - Brick colors and palettes
//! - The color-classified ideal image and posterization onto it
//! - Per-color region assembly into a single plan
//! - Plan queries and the derived parts inventory

/// Region partitioning and plan assembly
pub mod assembly;
/// Color-classified target grids
pub mod ideal;
/// Per-color parts lists
pub mod inventory;
/// Brick colors and palettes
pub mod palette;
/// Placed bricks and plan queries
pub mod plan;
/// Image to ideal grid reduction
pub mod posterize;

pub use assembly::{RegionReport, create_grid_mosaic, create_grid_mosaic_observed, make_grids};
pub use ideal::{Ideal, IdealGrid};
pub use inventory::{Inventory, Usage};
pub use palette::{BrickColor, PaletteKind, nearest_color};
pub use plan::{Plan, PlacedBrick, UnsolvedRegion};
pub use posterize::{posterize, posterize_dithered};
