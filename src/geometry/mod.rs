//! Piece shapes and the brick catalog
//!
//! This module contains:
//! - The `Piece` abstraction over relative grid footprints
//! - Rectangular pieces
//! - The static brick/plate catalog and orientation mapping

/// Brick catalog, orientations and oriented mosaic pieces
pub mod catalog;
/// Piece footprint abstraction
pub mod piece;

pub use catalog::{BrickPiece, Catalog, MosaicPiece, Orientation, pieces_for_orientation};
pub use piece::{Piece, RectPiece};
