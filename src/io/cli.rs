//! Command-line interface for batch converting PNG files into mosaic plans

use crate::algorithm::SolverKind;
use crate::geometry::{Catalog, Orientation};
use crate::io::configuration::{
    DEFAULT_COLS, DEFAULT_DITHER_SCALE, DEFAULT_ROWS, MAX_GRID_DIMENSION, OUTPUT_SUFFIX,
    TEXT_PLAN_SUFFIX,
};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::io::image::{export_plan_as_png, load_ideal_dithered};
use crate::io::progress::ProgressManager;
use crate::io::render::{format_inventory, render_text};
use crate::mosaic::{PaletteKind, create_grid_mosaic_observed};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "brickmosaic")]
#[command(
    author,
    version,
    about = "Turn images into brick mosaic build plans using greedy tiling"
)]
/// Command-line arguments for the mosaic tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Number of mosaic rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Number of mosaic columns
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// How the bricks face the viewer (studs-out, studs-top, studs-right)
    #[arg(short, long, default_value_t = Orientation::StudsOut)]
    pub orientation: Orientation,

    /// Tiling strategy (greedy, symmetric)
    #[arg(short, long, default_value_t = SolverKind::Greedy)]
    pub solver: SolverKind,

    /// Color palette (full, limited, gray-plus)
    #[arg(short, long, default_value_t = PaletteKind::Limited)]
    pub palette: PaletteKind,

    /// Also offer every non-square part turned a quarter turn
    #[arg(short = 'R', long)]
    pub rotate: bool,

    /// Try parts by descending area instead of catalog order
    #[arg(short, long)]
    pub largest_first: bool,

    /// Dither colors by diffusing each cell's error to its neighbours
    #[arg(short, long)]
    pub dither: bool,

    /// Also write a text plan with the parts list
    #[arg(short, long)]
    pub text: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Error diffusion scale for posterization, zero unless dithering
    pub const fn error_scale(&self) -> f32 {
        if self.dither { DEFAULT_DITHER_SCALE } else { 0.0 }
    }

    /// Piece catalog selected by the flags
    pub fn catalog(&self) -> Catalog {
        Catalog {
            include_rotations: self.rotate,
            largest_first: self.largest_first,
            ..Catalog::standard()
        }
    }

    /// Validate the mosaic dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when rows or columns are zero or exceed
    /// `MAX_GRID_DIMENSION`.
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("rows", self.rows), ("cols", self.cols)] {
            if value == 0 || value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        Ok(())
    }
}

/// Orchestrates batch processing of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, target validation or file
    /// processing fails
    pub fn process(&mut self) -> Result<()> {
        self.cli.validate()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_png(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"target file must be a PNG image",
                ));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            let read_error = |source| MosaicError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source,
            };
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).map_err(read_error)? {
                let path = entry.map_err(read_error)?.path();
                if is_png(&path)
                    && !is_generated_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let ideal = load_ideal_dithered(
            input_path,
            self.cli.rows,
            self.cli.cols,
            self.cli.palette.colors(),
            self.cli.orientation,
            self.cli.error_scale(),
        )?;
        let catalog = self.cli.catalog();

        let progress = &mut self.progress_manager;
        let plan =
            create_grid_mosaic_observed(&ideal, &catalog, self.cli.solver.solver(), |report| {
                if let Some(pm) = progress.as_mut() {
                    pm.update_region(index, report);
                }
            })?;

        export_plan_as_png(&plan, &Self::get_output_path(input_path))?;

        if self.cli.text {
            let text_path = Self::get_text_path(input_path);
            let contents = format!(
                "{}\n{}",
                render_text(&plan),
                format_inventory(plan.inventory())
            );
            std::fs::write(&text_path, contents).map_err(|e| MosaicError::FileSystem {
                path: text_path,
                operation: "write text plan",
                source: e,
            })?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            for failure in plan.failures() {
                pm.println(&format!(
                    "{}: {} cells of {} left unfilled",
                    input_path.display(),
                    failure.remaining.len(),
                    failure.color
                ));
            }
            pm.complete_file(index);
        }

        Ok(())
    }

    fn sibling_path(input_path: &Path, file_name: String) -> PathBuf {
        if let Some(parent) = input_path.parent() {
            parent.join(file_name)
        } else {
            PathBuf::from(file_name)
        }
    }

    fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );
        Self::sibling_path(input_path, output_name)
    }

    fn get_text_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let text_name = format!("{}{}", stem.to_string_lossy(), TEXT_PLAN_SUFFIX);
        Self::sibling_path(input_path, text_name)
    }
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

fn is_generated_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}
