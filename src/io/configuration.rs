//! Mosaic constants and runtime configuration defaults

// Default mosaic size when none is given on the command line
/// Default number of grid rows
pub const DEFAULT_ROWS: usize = 10;
/// Default number of grid columns
pub const DEFAULT_COLS: usize = 25;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Physical dimensions in LDraw units
/// Width of one stud
pub const BRICK_WIDTH_LDU: u32 = 20;
/// Height of a full brick
pub const BRICK_HEIGHT_LDU: u32 = 24;
/// Height of a plate
pub const PLATE_HEIGHT_LDU: u32 = 8;

// Rendering
/// Output pixels per LDraw unit
pub const PIXELS_PER_LDU: u32 = 1;
/// Color of the line drawn between neighbouring bricks
pub const OUTLINE_RGBA: [u8; 4] = [32, 32, 32, 255];
/// Color of the guide lines marking where a 2x4 brick would fit
pub const GUIDE_RGBA: [u8; 4] = [200, 40, 40, 255];
/// Color of cells no brick covers
pub const UNFILLED_RGBA: [u8; 4] = [0, 0, 0, 0];

// Posterization
/// Share of each cell's quantization error passed on when dithering
pub const DEFAULT_DITHER_SCALE: f32 = 1.0;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to output image filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";
/// Suffix and extension of the text plan written next to the image
pub const TEXT_PLAN_SUFFIX: &str = "_plan.txt";
