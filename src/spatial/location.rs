//! Integer grid coordinates with vector arithmetic
//!
//! Rows grow downwards and columns grow to the right, so `(0, 0)` is the upper
//! left cell of every grid. Relative offsets (piece extents) use the same type
//! and may be negative once re-anchored.

use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A cell coordinate or a relative offset between cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    /// Row index, increasing downwards
    pub row: i32,
    /// Column index, increasing to the right
    pub col: i32,
}

impl Location {
    /// The origin `(0, 0)`
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a location from signed coordinates
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Create a location from grid indices
    ///
    /// Grid dimensions are capped well below `i32::MAX`, so the conversion is lossless
    /// for every index of a valid grid.
    pub const fn from_indices(row: usize, col: usize) -> Self {
        Self::new(row as i32, col as i32)
    }

    /// Grid indices for this location, or `None` when either coordinate is negative
    pub fn to_indices(self) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        Some((row, col))
    }

    /// Offset this location by `offset`, or `None` when a coordinate overflows
    pub const fn checked_add(self, offset: Self) -> Option<Self> {
        match (self.row.checked_add(offset.row), self.col.checked_add(offset.col)) {
            (Some(row), Some(col)) => Some(Self::new(row, col)),
            _ => None,
        }
    }
}

impl Add for Location {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.row + other.row, self.col + other.col)
    }
}

impl Sub for Location {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.row - other.row, self.col - other.col)
    }
}

impl Neg for Location {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.row, -self.col)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Location {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}
