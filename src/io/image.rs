//! PNG loading into ideal grids and plan export with brick outlines

use image::{Rgba, RgbaImage};
use std::path::Path;

use crate::geometry::Orientation;
use crate::geometry::catalog::TWO_BY_FOUR;
use crate::io::configuration::{
    BRICK_WIDTH_LDU, GUIDE_RGBA, OUTLINE_RGBA, PIXELS_PER_LDU, PLATE_HEIGHT_LDU, UNFILLED_RGBA,
};
use crate::io::error::{MosaicError, Result};
use crate::mosaic::palette::BrickColor;
use crate::mosaic::{IdealGrid, Plan, posterize, posterize_dithered};

/// Load any supported image file as 8-bit RGBA
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgba8())
}

/// Load an image and posterize it onto a `rows` x `cols` grid
///
/// # Errors
///
/// Returns an error if the image cannot be loaded or posterization rejects the input.
pub fn load_ideal(
    path: &Path,
    rows: usize,
    cols: usize,
    palette: &[BrickColor],
    orientation: Orientation,
) -> Result<IdealGrid> {
    let img = load_rgba(path)?;
    posterize(&img, rows, cols, palette, orientation)
}

/// Load an image and posterize it with error diffusion scaled by `error_scale`
///
/// # Errors
///
/// Returns an error if the image cannot be loaded or posterization rejects the input.
pub fn load_ideal_dithered(
    path: &Path,
    rows: usize,
    cols: usize,
    palette: &[BrickColor],
    orientation: Orientation,
    error_scale: f32,
) -> Result<IdealGrid> {
    let img = load_rgba(path)?;
    posterize_dithered(&img, rows, cols, palette, orientation, error_scale)
}

/// Pixel size (width, height) of one grid cell in `orientation`
///
/// Stud-wide axes are one brick width across; plate-high axes are one plate.
pub const fn cell_size(orientation: Orientation) -> (u32, u32) {
    let stud = BRICK_WIDTH_LDU * PIXELS_PER_LDU;
    let plate = PLATE_HEIGHT_LDU * PIXELS_PER_LDU;
    match orientation {
        Orientation::StudsOut => (stud, stud),
        Orientation::StudsTop => (stud, plate),
        Orientation::StudsRight => (plate, stud),
    }
}

fn brick_id(plan: &Plan, row: Option<usize>, col: Option<usize>) -> Option<usize> {
    plan.piece(row?, col?).map(|brick| brick.id)
}

// Interior cell boundaries only; the image border is never a guide
fn is_guide_boundary(boundary: usize, spacing: usize, cells: usize) -> bool {
    boundary > 0 && boundary < cells && boundary.checked_rem(spacing) == Some(0)
}

/// Draw the plan, one colored block per cell with outlines between bricks
///
/// Every boundary where a 2x4 brick in the plan's orientation would end is drawn
/// as a guide line through the bricks it crosses. Brick outlines take precedence.
pub fn render_plan_image(plan: &Plan) -> RgbaImage {
    let (cell_width, cell_height) = cell_size(plan.orientation());
    let (guide_rows, guide_cols) = plan.orientation().footprint(&TWO_BY_FOUR);
    let (rows, cols) = (plan.num_rows(), plan.num_cols());
    let width = cols as u32 * cell_width;
    let height = rows as u32 * cell_height;

    RgbaImage::from_fn(width, height, |x, y| {
        let (row, col) = ((y / cell_height) as usize, (x / cell_width) as usize);
        let (px, py) = (x % cell_width, y % cell_height);

        let Some(brick) = plan.piece(row, col) else {
            return Rgba(UNFILLED_RGBA);
        };

        let here = Some(brick.id);
        let on_boundary = (px == 0 && brick_id(plan, Some(row), col.checked_sub(1)) != here)
            || (px + 1 == cell_width && brick_id(plan, Some(row), Some(col + 1)) != here)
            || (py == 0 && brick_id(plan, row.checked_sub(1), Some(col)) != here)
            || (py + 1 == cell_height && brick_id(plan, Some(row + 1), Some(col)) != here);

        let on_guide = (px == 0 && is_guide_boundary(col, guide_cols, cols))
            || (px + 1 == cell_width && is_guide_boundary(col + 1, guide_cols, cols))
            || (py == 0 && is_guide_boundary(row, guide_rows, rows))
            || (py + 1 == cell_height && is_guide_boundary(row + 1, guide_rows, rows));

        if on_boundary {
            Rgba(OUTLINE_RGBA)
        } else if on_guide {
            Rgba(GUIDE_RGBA)
        } else {
            let [r, g, b] = brick.color.rgb;
            Rgba([r, g, b, 255])
        }
    })
}

/// Export the plan as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_plan_as_png(plan: &Plan, output_path: &Path) -> Result<()> {
    let img = render_plan_image(plan);

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| MosaicError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })
}
