//! Color-classified target images

use ndarray::Array2;

use crate::geometry::Orientation;
use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_parameter, invalid_source};
use crate::mosaic::palette::BrickColor;

/// An already quantized mosaic: one brick color per grid cell
pub trait Ideal {
    /// How the finished mosaic faces the viewer
    fn orientation(&self) -> Orientation;

    /// Number of grid rows
    fn num_rows(&self) -> usize;

    /// Number of grid columns
    fn num_cols(&self) -> usize;

    /// Color assigned to `(row, col)`, `None` outside the grid
    fn color(&self, row: usize, col: usize) -> Option<BrickColor>;
}

/// In-memory [`Ideal`] backed by a color matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdealGrid {
    orientation: Orientation,
    colors: Array2<BrickColor>,
}

impl IdealGrid {
    /// Wrap an existing color matrix
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` for a matrix with no cells and
    /// `InvalidParameter` when a dimension exceeds `MAX_GRID_DIMENSION`.
    pub fn new(orientation: Orientation, colors: Array2<BrickColor>) -> Result<Self> {
        let (rows, cols) = colors.dim();
        if rows == 0 || cols == 0 {
            return Err(invalid_source(&format!(
                "ideal image must have at least one cell, got {rows}x{cols}"
            )));
        }
        if rows > MAX_GRID_DIMENSION || cols > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "dimensions",
                &format!("{rows}x{cols}"),
                &format!("each dimension must be at most {MAX_GRID_DIMENSION}"),
            ));
        }
        Ok(Self {
            orientation,
            colors,
        })
    }

    /// Build from row vectors
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` when rows differ in length or there are no cells.
    pub fn from_rows(orientation: Orientation, rows: &[Vec<BrickColor>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(index) = rows.iter().position(|row| row.len() != cols) {
            return Err(invalid_source(&format!(
                "row {index} has a different length than row 0 ({cols} cells)"
            )));
        }
        let flat: Vec<BrickColor> = rows.iter().flatten().copied().collect();
        let colors = Array2::from_shape_vec((rows.len(), cols), flat)
            .map_err(|err| invalid_source(&err))?;
        Self::new(orientation, colors)
    }

    /// A single-color ideal
    ///
    /// # Errors
    ///
    /// Same as [`IdealGrid::new`].
    pub fn uniform(
        orientation: Orientation,
        rows: usize,
        cols: usize,
        color: BrickColor,
    ) -> Result<Self> {
        Self::new(orientation, Array2::from_elem((rows, cols), color))
    }

    /// Borrow the underlying color matrix
    pub const fn colors(&self) -> &Array2<BrickColor> {
        &self.colors
    }
}

impl Ideal for IdealGrid {
    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn num_rows(&self) -> usize {
        self.colors.nrows()
    }

    fn num_cols(&self) -> usize {
        self.colors.ncols()
    }

    fn color(&self, row: usize, col: usize) -> Option<BrickColor> {
        self.colors.get((row, col)).copied()
    }
}
