//! Tests for occupancy grid state, bounds handling and fit testing

#[cfg(test)]
mod tests {
    use brickmosaic::geometry::RectPiece;
    use brickmosaic::spatial::{CellState, Grid, Location};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    // Tests a fresh grid is entirely empty with the requested dimensions
    // Verified by initializing cells as ToBeFilled
    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(3, 4);

        assert_eq!(grid.dimensions(), (3, 4));
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.count(CellState::Empty), 12);
        assert!(!grid.any(CellState::ToBeFilled));
    }

    // Tests out of bounds reads answer Empty and writes are ignored
    // Verified by clamping out of bounds writes onto the border
    #[test]
    fn test_out_of_bounds_access_is_safe() {
        let mut grid = Grid::with_state(2, 2, CellState::ToBeFilled);
        let before = grid.clone();

        grid.set(-1, 0, CellState::Filled);
        grid.set(0, 2, CellState::Filled);
        grid.set(5, 5, CellState::Filled);

        assert_eq!(grid, before);
        assert_eq!(grid.get(-1, 0), CellState::Empty);
        assert_eq!(grid.get(2, 0), CellState::Empty);
        assert_eq!(grid.get(0, 1), CellState::ToBeFilled);
    }

    // Tests find returns matches in row-major order
    // Verified by scanning columns first
    #[test]
    fn test_find_is_row_major() {
        let mut grid = Grid::new(3, 3);
        grid.set(2, 0, CellState::ToBeFilled);
        grid.set(0, 2, CellState::ToBeFilled);
        grid.set(1, 1, CellState::ToBeFilled);

        assert_eq!(
            grid.find(CellState::ToBeFilled),
            vec![Location::new(0, 2), Location::new(1, 1), Location::new(2, 0)]
        );
    }

    // Tests fill overwrites every cell
    // Verified by skipping the last row in fill
    #[test]
    fn test_fill_sets_every_cell() {
        let mut grid = Grid::new(2, 3);
        grid.fill(CellState::Filled);

        assert_eq!(grid.count(CellState::Filled), 6);
        assert!(!grid.any(CellState::Empty));
    }

    // Tests clones never share state with the grid they came from
    // Verified by sharing the cell matrix between clones
    #[test]
    fn test_clone_is_independent() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut original = Grid::with_state(6, 5, CellState::ToBeFilled);
        let snapshot = original.clone();
        let mut copy = original.clone();

        for _ in 0..40 {
            let row = rng.random_range(0..6);
            let col = rng.random_range(0..5);
            copy.set(row, col, CellState::Filled);
        }
        assert_eq!(original, snapshot);

        let copy_snapshot = copy.clone();
        original.fill(CellState::Empty);
        assert_eq!(copy, copy_snapshot);
    }

    // Tests a piece fits only when every covered cell is in bounds and ToBeFilled
    // Verified by accepting Filled cells in the fit test
    #[test]
    fn test_piece_fits_requires_to_be_filled_cells() {
        let mut grid = Grid::with_state(3, 3, CellState::ToBeFilled);
        let square = RectPiece::new(2, 2);

        assert!(grid.piece_fits(&square, Location::new(0, 0)));
        assert!(grid.piece_fits(&square, Location::new(1, 1)));
        assert!(!grid.piece_fits(&square, Location::new(2, 2)));
        assert!(!grid.piece_fits(&square, Location::new(-1, 0)));

        grid.set(1, 1, CellState::Filled);
        assert!(!grid.piece_fits(&square, Location::new(0, 0)));

        grid.set(1, 1, CellState::Empty);
        assert!(!grid.piece_fits(&square, Location::new(0, 0)));
        assert!(grid.piece_fits(&RectPiece::new(1, 3), Location::new(2, 0)));
    }

    // Tests fit testing leaves the grid untouched
    // Verified by marking cells while fit testing
    #[test]
    fn test_piece_fits_does_not_mutate() {
        let grid = Grid::with_state(2, 2, CellState::ToBeFilled);
        let before = grid.clone();

        let _ = grid.piece_fits(&RectPiece::new(2, 2), Location::ORIGIN);

        assert_eq!(grid, before);
    }

    // Tests a piece with no cells never fits
    // Verified by treating an empty extent as fitting
    #[test]
    fn test_empty_extent_never_fits() {
        let grid = Grid::with_state(2, 2, CellState::ToBeFilled);

        assert!(!grid.piece_fits(&RectPiece::new(0, 3), Location::ORIGIN));
        assert!(!grid.extent_fits(&[], Location::ORIGIN));
    }

    // Tests marking writes every covered cell and clips at the border
    // Verified by stopping at the first out of bounds cell
    #[test]
    fn test_mark_sets_covered_cells() {
        let mut grid = Grid::with_state(2, 3, CellState::ToBeFilled);
        let extent = [Location::new(0, 0), Location::new(0, 1), Location::new(0, 5)];

        grid.mark(&extent, Location::new(1, 1), CellState::Filled);

        assert_eq!(grid.get(1, 1), CellState::Filled);
        assert_eq!(grid.get(1, 2), CellState::Filled);
        assert_eq!(grid.count(CellState::Filled), 2);
    }

    // Tests the text dump uses one digit per state
    // Verified by printing state names instead of digits
    #[test]
    fn test_display_format() {
        let mut grid = Grid::new(2, 3);
        grid.set(0, 1, CellState::ToBeFilled);
        grid.set(1, 2, CellState::Filled);

        assert_eq!(grid.to_string(), "[\n010\n002\n]");
    }

    // Tests offsets that overflow the coordinate range neither fit nor get marked
    // Verified by wrapping around to the opposite edge
    #[test]
    fn test_overflowing_origin_is_skipped() {
        let mut grid = Grid::with_state(2, 2, CellState::ToBeFilled);
        let before = grid.clone();
        let extent = [Location::new(1, 0)];

        grid.mark(&extent, Location::new(i32::MAX, 0), CellState::Filled);
        assert_eq!(grid, before);

        grid.mark(&extent, Location::new(i32::MIN, 0), CellState::Filled);
        assert_eq!(grid, before);

        assert!(!grid.extent_fits(&extent, Location::new(i32::MAX, 0)));
        assert!(!grid.piece_fits(&RectPiece::new(1, 2), Location::new(0, i32::MAX)));
    }
}
