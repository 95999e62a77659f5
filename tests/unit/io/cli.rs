//! Tests for command-line interface parsing and file processing

#[cfg(test)]
mod tests {
    use brickmosaic::algorithm::SolverKind;
    use brickmosaic::geometry::Orientation;
    use brickmosaic::io::cli::{Cli, FileProcessor};
    use brickmosaic::io::configuration::{
        DEFAULT_COLS, DEFAULT_DITHER_SCALE, DEFAULT_ROWS, MAX_GRID_DIMENSION,
    };
    use brickmosaic::mosaic::PaletteKind;
    use brickmosaic::{MosaicError, Result};
    use clap::Parser;
    use image::{Rgba, RgbaImage};
    use std::ffi::OsString;
    use std::fs;
    use std::path::{Path, PathBuf};

    fn cli_for(target: &Path, flags: &[&str]) -> Cli {
        let mut args = vec![OsString::from("program"), target.as_os_str().to_owned()];
        args.extend(flags.iter().map(OsString::from));
        Cli::parse_from(args)
    }

    fn write_test_png(path: &Path) -> Result<()> {
        let img = RgbaImage::from_fn(8, 4, |x, _| {
            if x < 4 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([200, 30, 20, 255])
            }
        });
        img.save(path).map_err(|e| MosaicError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
    }

    // Tests CLI parsing with only required target file argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "test.png"]);

        assert_eq!(cli.target, PathBuf::from("test.png"));
        assert_eq!(cli.rows, DEFAULT_ROWS);
        assert_eq!(cli.cols, DEFAULT_COLS);
        assert_eq!(cli.orientation, Orientation::StudsOut);
        assert_eq!(cli.solver, SolverKind::Greedy);
        assert_eq!(cli.palette, PaletteKind::Limited);
        assert!(!cli.rotate);
        assert!(!cli.largest_first);
        assert!(!cli.text);
        assert!(!cli.quiet);
        assert!(!cli.dither);
    }

    // Tests CLI parsing with all available arguments
    // Verified by modifying custom parsers to ensure they're invoked
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "input.png",
            "--rows",
            "12",
            "--cols",
            "30",
            "--orientation",
            "studs-top",
            "--solver",
            "symmetric",
            "--palette",
            "gray-plus",
            "--rotate",
            "--largest-first",
            "--dither",
            "--text",
            "--quiet",
            "--no-skip",
        ]);

        assert_eq!((cli.rows, cli.cols), (12, 30));
        assert_eq!(cli.orientation, Orientation::StudsTop);
        assert_eq!(cli.solver, SolverKind::Symmetrical);
        assert_eq!(cli.palette, PaletteKind::GrayPlus);
        assert!(cli.rotate && cli.largest_first && cli.text && cli.quiet);
        assert!(cli.dither);
        assert!(!cli.skip_existing());
    }

    // Tests dithering selects the default error scale and plain runs diffuse nothing
    // Verified by always returning the default scale
    #[test]
    fn test_error_scale_from_flags() {
        let plain = Cli::parse_from(["program", "test.png"]);
        let dithered = Cli::parse_from(["program", "test.png", "-d"]);

        assert!(plain.error_scale().abs() < f32::EPSILON);
        assert!((dithered.error_scale() - DEFAULT_DITHER_SCALE).abs() < f32::EPSILON);
    }

    // Tests short flag parsing
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["program", "test.png", "-r", "4", "-c", "6", "-R", "-l", "-t"]);

        assert_eq!((cli.rows, cli.cols), (4, 6));
        assert!(cli.rotate);
        assert!(cli.largest_first);
        assert!(cli.text);
    }

    // Tests unknown enum values are rejected by the parser
    // Verified by falling back to defaults on parse failure
    #[test]
    fn test_cli_rejects_unknown_values() {
        assert!(Cli::try_parse_from(["program", "a.png", "-o", "studs-down"]).is_err());
        assert!(Cli::try_parse_from(["program", "a.png", "-s", "random"]).is_err());
        assert!(Cli::try_parse_from(["program", "a.png", "-p", "neon"]).is_err());
    }

    // Tests file skip behavior and progress display flags
    // Verified by inverting boolean logic in skip_existing method
    #[test]
    fn test_skip_and_progress_flags() {
        let cli = Cli::parse_from(["program", "test.png"]);
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());

        let cli = Cli::parse_from(["program", "test.png", "--no-skip", "--quiet"]);
        assert!(!cli.skip_existing());
        assert!(!cli.should_show_progress());
    }

    // Tests catalog flags reach the candidate list
    // Verified by ignoring the rotate flag
    #[test]
    fn test_catalog_from_flags() {
        let plain = Cli::parse_from(["program", "test.png"]).catalog();
        let rotated = Cli::parse_from(["program", "test.png", "-R", "-l"]).catalog();

        assert!(!plain.include_rotations && !plain.largest_first);
        assert!(rotated.include_rotations && rotated.largest_first);
        assert!(
            rotated.pieces_for(Orientation::StudsOut).len()
                > plain.pieces_for(Orientation::StudsOut).len()
        );
    }

    // Tests dimension validation bounds
    // Verified by allowing zero rows
    #[test]
    fn test_validate_dimensions() {
        assert!(Cli::parse_from(["program", "a.png"]).validate().is_ok());

        let zero_rows = Cli::parse_from(["program", "a.png", "-r", "0"]);
        assert!(matches!(
            zero_rows.validate(),
            Err(MosaicError::InvalidParameter { parameter: "rows", .. })
        ));

        let too_wide = MAX_GRID_DIMENSION + 1;
        let wide = Cli::parse_from(["program", "a.png", "-c", &too_wide.to_string()]);
        assert!(matches!(
            wide.validate(),
            Err(MosaicError::InvalidParameter { parameter: "cols", .. })
        ));
    }

    // Tests error handling for missing files
    // Verified by removing error return for nonexistent files
    #[test]
    fn test_process_nonexistent_file() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let cli = cli_for(&temp_dir.path().join("nonexistent.png"), &["-q"]);

        let result = FileProcessor::new(cli).process();

        assert!(matches!(result, Err(MosaicError::InvalidParameter { parameter: "target", .. })));
        Ok(())
    }

    // Tests error handling for non-PNG files
    // Verified by removing file type validation
    #[test]
    fn test_process_invalid_file_type() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let txt_file = temp_dir.path().join("test.txt");
        fs::write(&txt_file, "not a png")?;

        let result = FileProcessor::new(cli_for(&txt_file, &["-q"])).process();

        assert!(result.is_err());
        Ok(())
    }

    // Tests a PNG becomes a mosaic image and a text plan
    // Verified by skipping the text plan export
    #[test]
    fn test_process_file_writes_outputs() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let input = temp_dir.path().join("logo.png");
        write_test_png(&input)?;

        let cli = cli_for(&input, &["-q", "-t", "-r", "2", "-c", "4"]);
        FileProcessor::new(cli).process()?;

        let output = temp_dir.path().join("logo_mosaic.png");
        let text = fs::read_to_string(temp_dir.path().join("logo_plan.txt"))?;
        assert!(output.exists());
        assert!(text.starts_with("000 000 001 001 \n000 000 001 001 \n"));
        assert!(text.contains("Total: 2 pieces"));
        Ok(())
    }

    // Tests a dithered run still covers the whole grid
    // Verified by ignoring the dither flag
    #[test]
    fn test_process_file_with_dithering() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let input = temp_dir.path().join("gradient.png");
        RgbaImage::from_fn(8, 4, |x, _| {
            let level = 100 + 4 * x as u8;
            Rgba([level, level, level, 255])
        })
        .save(&input)
        .map_err(|e| MosaicError::ImageExport {
            path: input.clone(),
            source: e,
        })?;

        let cli = cli_for(&input, &["-q", "-d", "-t", "-p", "gray-plus", "-r", "2", "-c", "8"]);
        FileProcessor::new(cli).process()?;

        let text = fs::read_to_string(temp_dir.path().join("gradient_plan.txt"))?;
        assert!(temp_dir.path().join("gradient_mosaic.png").exists());
        assert!(text.starts_with("000 "));
        assert!(!text.lines().take(2).any(|line| line.contains("---")));
        Ok(())
    }

    // Tests skip logic when output file exists
    // Verified by removing skip check
    #[test]
    fn test_skip_existing_file() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let input = temp_dir.path().join("test.png");
        let output = temp_dir.path().join("test_mosaic.png");
        fs::write(&input, "fake png")?;
        fs::write(&output, "existing")?;

        FileProcessor::new(cli_for(&input, &["-q"])).process()?;

        assert_eq!(fs::read_to_string(&output)?, "existing");

        let forced = FileProcessor::new(cli_for(&input, &["-q", "--no-skip"])).process();
        assert!(matches!(forced, Err(MosaicError::ImageLoad { .. })));
        Ok(())
    }

    // Tests directories are scanned for PNGs, skipping generated mosaics
    // Verified by processing files with the output suffix
    #[test]
    fn test_process_directory() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        write_test_png(&temp_dir.path().join("a.png"))?;
        write_test_png(&temp_dir.path().join("b.PNG"))?;
        fs::write(temp_dir.path().join("notes.txt"), "ignored")?;

        FileProcessor::new(cli_for(temp_dir.path(), &["-q", "-r", "2", "-c", "4"])).process()?;

        assert!(temp_dir.path().join("a_mosaic.png").exists());
        assert!(temp_dir.path().join("b_mosaic.PNG").exists());
        assert!(!temp_dir.path().join("a_mosaic_mosaic.png").exists());

        // A second pass finds every output in place and does nothing
        FileProcessor::new(cli_for(temp_dir.path(), &["-q"])).process()?;
        assert!(!temp_dir.path().join("a_mosaic_mosaic.png").exists());
        Ok(())
    }

    // Tests processing empty directories
    // Verified by adding error for empty directories
    #[test]
    fn test_process_empty_directory() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;

        FileProcessor::new(cli_for(temp_dir.path(), &["-q"])).process()?;
        Ok(())
    }
}
