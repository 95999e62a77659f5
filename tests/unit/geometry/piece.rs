//! Tests for piece footprints and rectangular extents

#[cfg(test)]
mod tests {
    use brickmosaic::geometry::{Piece, RectPiece};
    use brickmosaic::spatial::Location;

    struct Corner {
        cells: Vec<Location>,
    }

    impl Piece for Corner {
        fn extent(&self) -> &[Location] {
            &self.cells
        }
    }

    // Tests a rectangle covers the full cross product in row-major order
    // Verified by iterating columns first
    #[test]
    fn test_rect_extent_is_full_cross_product() {
        let piece = RectPiece::new(2, 3);

        assert_eq!(
            piece.extent(),
            [
                Location::new(0, 0),
                Location::new(0, 1),
                Location::new(0, 2),
                Location::new(1, 0),
                Location::new(1, 1),
                Location::new(1, 2),
            ]
        );
        assert_eq!(piece.rows(), 2);
        assert_eq!(piece.cols(), 3);
        assert_eq!(piece.area(), 6);
    }

    // Tests the extent is stable across calls
    // Verified by rebuilding the extent with a different order
    #[test]
    fn test_rect_extent_is_stable() {
        let piece = RectPiece::new(4, 1);

        assert_eq!(piece.extent(), piece.extent());
        assert_eq!(piece.clone().extent(), piece.extent());
    }

    // Tests a zero dimension yields an empty extent
    // Verified by producing a single origin cell
    #[test]
    fn test_degenerate_rect_is_empty() {
        let piece = RectPiece::new(0, 5);

        assert!(piece.extent().is_empty());
        assert_eq!(piece.area(), 0);
    }

    // Tests transposing swaps rows and columns
    // Verified by transposing only the rows
    #[test]
    fn test_transposed() {
        let piece = RectPiece::new(1, 4).transposed();

        assert_eq!((piece.rows(), piece.cols()), (4, 1));
        assert!(piece.extent().contains(&Location::new(3, 0)));
    }

    // Tests default spans are derived from the extent of non-rectangular shapes
    // Verified by using the constructor spans
    #[test]
    fn test_default_spans_for_custom_pieces() {
        let corner = Corner {
            cells: vec![Location::new(0, 0), Location::new(1, 0), Location::new(1, 2)],
        };

        assert_eq!(corner.rows(), 2);
        assert_eq!(corner.cols(), 3);
        assert_eq!(corner.area(), 3);

        let empty = Corner { cells: Vec::new() };
        assert_eq!((empty.rows(), empty.cols()), (0, 0));
    }
}
