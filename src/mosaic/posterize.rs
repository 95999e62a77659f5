//! Reduce a raster image to a color-classified mosaic grid
//!
//! The image is divided into `rows` x `cols` blocks by linear interpolation of cell
//! indices onto pixel coordinates. Each block's arithmetic RGB mean is replaced by
//! the nearest palette color. The dithered variant carries each cell's quantization
//! error on to its unvisited neighbours with Floyd-Steinberg weights.

use image::RgbaImage;
use ndarray::Array2;
use std::ops::Range;

use crate::geometry::Orientation;
use crate::io::error::{Result, invalid_parameter, invalid_source};
use crate::mosaic::ideal::IdealGrid;
use crate::mosaic::palette::{BrickColor, nearest_color};

/// Pixel span covered by cell `index` when `pixels` are split into `cells` parts
///
/// Every cell covers at least one pixel as long as `pixels > 0`, so tiny images still
/// produce a color for every cell.
pub fn cell_bounds(index: usize, cells: usize, pixels: u32) -> Range<u32> {
    let bound = |i: usize| -> u32 {
        if cells == 0 {
            0
        } else {
            (i as u64 * u64::from(pixels) / cells as u64) as u32
        }
    };
    let start = bound(index).min(pixels.saturating_sub(1));
    let end = bound(index + 1).max(start + 1).min(pixels);
    start..end
}

/// Arithmetic mean of the RGB channels over a pixel block
///
/// Pixels outside the image are skipped; `None` when the block holds no pixels.
pub fn average_color(image: &RgbaImage, xs: Range<u32>, ys: Range<u32>) -> Option<[u8; 3]> {
    let mut sums = [0_u64; 3];
    let mut count = 0_u64;
    for y in ys {
        for x in xs.clone() {
            if let Some(pixel) = image.get_pixel_checked(x, y) {
                let [r, g, b, _] = pixel.0;
                sums[0] += u64::from(r);
                sums[1] += u64::from(g);
                sums[2] += u64::from(b);
                count += 1;
            }
        }
    }
    (count > 0).then(|| sums.map(|sum| (sum / count) as u8))
}

// Floyd-Steinberg neighbours as (row offset, column offset, weight)
const DIFFUSION: [(usize, isize, f32); 4] = [
    (0, 1, 7.0 / 16.0),
    (1, -1, 3.0 / 16.0),
    (1, 0, 5.0 / 16.0),
    (1, 1, 1.0 / 16.0),
];

/// Classify `image` onto a `rows` x `cols` grid of `palette` colors
///
/// # Errors
///
/// Returns `InvalidParameter` for a zero dimension or an empty palette and
/// `InvalidSourceData` for an image without pixels.
pub fn posterize(
    image: &RgbaImage,
    rows: usize,
    cols: usize,
    palette: &[BrickColor],
    orientation: Orientation,
) -> Result<IdealGrid> {
    posterize_dithered(image, rows, cols, palette, orientation, 0.0)
}

/// Classify `image` like [`posterize`], diffusing quantization error between cells
///
/// Cells are visited in row-major order. The difference between a cell's value and
/// its chosen color, multiplied by `error_scale`, is spread over the cell to the right
/// and the three cells below. A scale of `0.0` gives plain posterization and `1.0`
/// classic Floyd-Steinberg dithering.
///
/// # Errors
///
/// Returns `InvalidParameter` for a zero dimension, an empty palette or a negative or
/// non-finite `error_scale`, and `InvalidSourceData` for an image without pixels.
pub fn posterize_dithered(
    image: &RgbaImage,
    rows: usize,
    cols: usize,
    palette: &[BrickColor],
    orientation: Orientation,
    error_scale: f32,
) -> Result<IdealGrid> {
    if rows == 0 || cols == 0 {
        return Err(invalid_parameter(
            "dimensions",
            &format!("{rows}x{cols}"),
            &"rows and columns must be positive",
        ));
    }
    if palette.is_empty() {
        return Err(invalid_parameter(
            "palette",
            &"[]",
            &"palette must contain at least one color",
        ));
    }
    if !error_scale.is_finite() || error_scale < 0.0 {
        return Err(invalid_parameter(
            "error_scale",
            &error_scale,
            &"error scale must be a finite non-negative number",
        ));
    }

    let mut values = cell_averages(image, rows, cols)?;
    let mut colors = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let [r, g, b] = values
                .get((row, col))
                .copied()
                .ok_or_else(|| invalid_source(&format!("cell ({row}, {col}) is missing")))?;
            let target = [r, g, b].map(|channel| channel.round().clamp(0.0, 255.0) as u8);
            let color = nearest_color(palette, target)
                .ok_or_else(|| invalid_source(&"palette must contain at least one color"))?;

            let [cr, cg, cb] = color.rgb.map(f32::from);
            let error = [r - cr, g - cg, b - cb];
            for (row_offset, col_offset, weight) in DIFFUSION {
                let neighbour = col
                    .checked_add_signed(col_offset)
                    .and_then(|next_col| values.get_mut((row + row_offset, next_col)));
                if let Some(cell) = neighbour {
                    for (channel, delta) in cell.iter_mut().zip(error) {
                        *channel = delta.mul_add(weight * error_scale, *channel);
                    }
                }
            }
            colors.push(color);
        }
    }

    let colors =
        Array2::from_shape_vec((rows, cols), colors).map_err(|err| invalid_source(&err))?;
    IdealGrid::new(orientation, colors)
}

// Mean color of every cell, as floats so diffused error can accumulate
fn cell_averages(image: &RgbaImage, rows: usize, cols: usize) -> Result<Array2<[f32; 3]>> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(invalid_source(&"image has no pixels"));
    }

    let mut averages = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        let ys = cell_bounds(row, rows, height);
        for col in 0..cols {
            let xs = cell_bounds(col, cols, width);
            let average = average_color(image, xs, ys.clone())
                .ok_or_else(|| invalid_source(&format!("cell ({row}, {col}) covers no pixels")))?;
            averages.push(average.map(f32::from));
        }
    }
    Array2::from_shape_vec((rows, cols), averages).map_err(|err| invalid_source(&err))
}
