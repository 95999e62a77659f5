//! Tests for cell averaging and palette classification of images

#[cfg(test)]
mod tests {
    use brickmosaic::MosaicError;
    use brickmosaic::geometry::Orientation;
    use brickmosaic::mosaic::palette::{BLACK, LIMITED_PALETTE, WHITE};
    use brickmosaic::mosaic::posterize::{average_color, cell_bounds};
    use brickmosaic::mosaic::{BrickColor, Ideal, IdealGrid, posterize, posterize_dithered};
    use image::{Rgba, RgbaImage};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    // Two rows of single-pixel cells shading from gray 100 to gray 128, all of them
    // closer to black than to white
    fn gray_ramp() -> RgbaImage {
        RgbaImage::from_fn(8, 2, |x, _| {
            let level = 100 + 4 * x as u8;
            Rgba([level, level, level, 255])
        })
    }

    fn count(ideal: &IdealGrid, color: BrickColor) -> usize {
        (0..ideal.num_rows())
            .flat_map(|row| (0..ideal.num_cols()).map(move |col| (row, col)))
            .filter(|&(row, col)| ideal.color(row, col) == Some(color))
            .count()
    }

    // Tests cells split pixels evenly when the sizes divide
    // Verified by rounding cell boundaries up
    #[test]
    fn test_cell_bounds_even_split() {
        let bounds: Vec<_> = (0..5).map(|i| cell_bounds(i, 5, 10)).collect();

        assert_eq!(bounds, vec![0..2, 2..4, 4..6, 6..8, 8..10]);
    }

    // Tests every cell covers at least one pixel when cells outnumber pixels
    // Verified by allowing empty pixel ranges
    #[test]
    fn test_cell_bounds_never_empty() {
        for cells in 1..12 {
            for pixels in 1..8 {
                for index in 0..cells {
                    let range = cell_bounds(index, cells, pixels);
                    assert!(range.start < range.end, "{cells} cells over {pixels} pixels");
                    assert!(range.end <= pixels);
                }
            }
        }
    }

    // Tests averaging is an arithmetic mean that ignores alpha
    // Verified by including alpha in the average
    #[test]
    fn test_average_color() {
        let mut img = RgbaImage::from_pixel(2, 1, Rgba([0, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([255, 100, 10, 0]));

        assert_eq!(average_color(&img, 0..2, 0..1), Some([127, 50, 5]));
        assert_eq!(average_color(&img, 1..2, 0..1), Some([255, 100, 10]));
        assert_eq!(average_color(&img, 0..0, 0..1), None);
        assert_eq!(average_color(&img, 5..6, 0..1), None);
    }

    // Tests a half white, half black image posterizes to two cells
    // Verified by classifying with the first palette entry
    #[test]
    fn test_posterize_two_halves() -> brickmosaic::Result<()> {
        let img = RgbaImage::from_fn(4, 2, |x, _| {
            if x < 2 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 255])
            }
        });

        let ideal = posterize(&img, 1, 2, &LIMITED_PALETTE, Orientation::StudsTop)?;

        assert_eq!((ideal.num_rows(), ideal.num_cols()), (1, 2));
        assert_eq!(ideal.color(0, 0), Some(WHITE));
        assert_eq!(ideal.color(0, 1), Some(BLACK));
        assert_eq!(ideal.orientation(), Orientation::StudsTop);
        Ok(())
    }

    // Tests upscaling a tiny image still assigns every cell
    // Verified by sampling only the top left pixel
    #[test]
    fn test_posterize_upscales() -> brickmosaic::Result<()> {
        let img = RgbaImage::from_pixel(1, 1, Rgba([250, 250, 250, 255]));
        let ideal = posterize(&img, 3, 4, &LIMITED_PALETTE, Orientation::StudsOut)?;

        for row in 0..3 {
            for col in 0..4 {
                assert_eq!(ideal.color(row, col), Some(WHITE));
            }
        }
        Ok(())
    }

    // Tests invalid arguments are rejected
    // Verified by ignoring the palette length check
    #[test]
    fn test_posterize_rejects_bad_input() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));

        assert!(matches!(
            posterize(&img, 0, 2, &LIMITED_PALETTE, Orientation::StudsOut),
            Err(MosaicError::InvalidParameter { .. })
        ));
        assert!(matches!(
            posterize(&img, 2, 2, &[], Orientation::StudsOut),
            Err(MosaicError::InvalidParameter { parameter: "palette", .. })
        ));
        assert!(matches!(
            posterize(&RgbaImage::new(0, 0), 2, 2, &LIMITED_PALETTE, Orientation::StudsOut),
            Err(MosaicError::InvalidSourceData { .. })
        ));
    }

    // Tests diffusing the error mixes both tones where plain averaging picks one
    // Verified by discarding the error instead of carrying it to the neighbours
    #[test]
    fn test_dithering_mixes_tones() -> brickmosaic::Result<()> {
        let img = gray_ramp();
        let palette = [WHITE, BLACK];

        let plain = posterize(&img, 2, 8, &palette, Orientation::StudsOut)?;
        let dithered = posterize_dithered(&img, 2, 8, &palette, Orientation::StudsOut, 1.0)?;

        assert_eq!(count(&plain, BLACK), 16);
        assert_eq!(dithered.color(0, 0), Some(BLACK));
        assert!(count(&dithered, WHITE) > 0);
        assert!(count(&dithered, BLACK) > count(&dithered, WHITE));
        Ok(())
    }

    // Tests a smaller error scale diffuses less
    // Verified by ignoring the error scale
    #[test]
    fn test_dithering_scale() -> brickmosaic::Result<()> {
        let img = gray_ramp();
        let palette = [WHITE, BLACK];

        let full = posterize_dithered(&img, 2, 8, &palette, Orientation::StudsOut, 1.0)?;
        let half = posterize_dithered(&img, 2, 8, &palette, Orientation::StudsOut, 0.5)?;

        assert!(count(&half, WHITE) < count(&full, WHITE));
        Ok(())
    }

    // Tests a zero error scale reproduces plain posterization
    // Verified by always applying full error diffusion
    #[test]
    fn test_zero_scale_matches_plain() -> brickmosaic::Result<()> {
        let mut rng = StdRng::seed_from_u64(11);
        let img =
            RgbaImage::from_fn(12, 9, |_, _| Rgba([rng.random(), rng.random(), rng.random(), 255]));

        let plain = posterize(&img, 3, 4, &LIMITED_PALETTE, Orientation::StudsOut)?;
        let dithered = posterize_dithered(&img, 3, 4, &LIMITED_PALETTE, Orientation::StudsOut, 0.0)?;

        assert_eq!(plain, dithered);
        Ok(())
    }

    // Tests negative and non-finite error scales are rejected
    // Verified by clamping the scale instead of rejecting it
    #[test]
    fn test_dithering_rejects_bad_scale() {
        let img = gray_ramp();

        for scale in [-0.5, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                posterize_dithered(&img, 2, 2, &LIMITED_PALETTE, Orientation::StudsOut, scale),
                Err(MosaicError::InvalidParameter { parameter: "error_scale", .. })
            ));
        }
    }
}
