//! Tests for grid storage, bounds-safe access, resizing and element moves

#[cfg(test)]
mod tests {
    use crate::io::error::GridError;
    use crate::spatial::grid::Grid;
    use crate::spatial::position::{Position, Region};
    use ndarray::Array2;

    fn numbered(width: i32, height: i32) -> Grid<i32> {
        Grid::from_fn(width, height, |p| p.y * 100 + p.x)
    }

    // Tests validity matches the bounds for every nearby position
    // Verified by using <= for the width comparison
    #[test]
    fn test_is_valid_position_matches_bounds() {
        let grid: Grid<u8> = Grid::new(4, 3);
        for y in -2..6 {
            for x in -2..7 {
                let expected = (0..4).contains(&x) && (0..3).contains(&y);
                assert_eq!(grid.is_valid_position(Position::new(x, y)), expected);
            }
        }
    }

    // Tests negative or zero sizes produce an empty grid
    // Verified by casting negative sizes directly to usize
    #[test]
    fn test_negative_size_is_empty() {
        let grid: Grid<u8> = Grid::new(-3, 5);
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.height(), 5);
        assert!(grid.is_empty());
        assert!(grid.is_data_valid());
        assert!(!grid.is_valid_position(Position::ZERO));
    }

    // Tests set followed by get returns the written value
    // Verified by writing to the transposed index
    #[test]
    fn test_set_get_round_trip() {
        let mut grid: Grid<u32> = Grid::new(5, 4);
        for p in grid.positions().collect::<Vec<_>>() {
            let value = (p.x * 10 + p.y) as u32 + 1;
            assert!(grid.set(p, value));
            assert_eq!(grid.get(p), Some(&value));
            assert_eq!(grid[p], value);
        }
    }

    // Tests safe access degrades for invalid positions
    // Verified by removing the bounds check from index_of
    #[test]
    fn test_safe_access_out_of_bounds() {
        let mut grid = numbered(3, 3);
        let outside = Position::new(3, 0);
        assert_eq!(grid.get(outside), None);
        assert_eq!(grid.element(outside), 0);
        assert!(!grid.set(outside, 7));
        assert!(!grid.set(Position::new(-1, 1), 7));
        assert_eq!(grid, numbered(3, 3));
        assert!(grid.is_position_empty(outside));
    }

    // Tests resize keeps the overlapping sub-rectangle in place
    // Verified by copying rows with the new width as stride
    #[test]
    fn test_resize_preserves_overlap() {
        let before = numbered(5, 4);
        for (w2, h2) in [(7, 6), (3, 2), (2, 6), (6, 1), (5, 4)] {
            let mut grid = before.clone();
            grid.resize(w2, h2);
            assert!(grid.is_data_valid());
            assert_eq!((grid.width(), grid.height()), (w2 as usize, h2 as usize));
            for y in 0..h2 {
                for x in 0..w2 {
                    let p = Position::new(x, y);
                    let expected = if x < 5 && y < 4 { before[p] } else { 0 };
                    assert_eq!(grid[p], expected, "cell {p} after resize to {w2}x{h2}");
                }
            }
        }
    }

    // Tests resize to a non-positive size empties the grid
    // Verified by skipping dimension normalisation
    #[test]
    fn test_resize_to_zero() {
        let mut grid = numbered(3, 3);
        grid.resize(0, -4);
        assert!(grid.is_empty());
        assert!(grid.is_data_valid());
        grid.resize(2, 2);
        assert_eq!(grid.cells(), &[0, 0, 0, 0]);
    }

    // Tests clear releases storage and shrinks to 0x0
    // Verified by only truncating the cell vector
    #[test]
    fn test_clear() {
        let mut grid = numbered(4, 4);
        grid.clear();
        assert_eq!((grid.width(), grid.height(), grid.len()), (0, 0, 0));
        assert_eq!(grid.area(), Region::from_size(0, 0));
    }

    // Tests shape validation on construction from raw cells
    // Verified by skipping the length comparison
    #[test]
    fn test_from_vec_rejects_wrong_length() {
        assert!(Grid::from_vec(2, 2, vec![1, 2, 3, 4]).is_ok());
        match Grid::from_vec(2, 3, vec![1, 2, 3]) {
            Err(GridError::ShapeMismatch { expected, actual }) => {
                assert_eq!((expected, actual), (6, 3));
            }
            other => unreachable!("Expected ShapeMismatch, got {other:?}"),
        }
    }

    // Tests dimensions beyond the coordinate range are rejected
    // Verified by casting the width to i32 in area
    #[test]
    fn test_oversized_dimensions_rejected() {
        let too_wide = i32::MAX.unsigned_abs() as usize + 1;
        match Grid::<u8>::from_vec(too_wide, 0, Vec::new()) {
            Err(GridError::InvalidParameter { parameter, .. }) => assert_eq!(parameter, "width"),
            other => unreachable!("Expected InvalidParameter, got {other:?}"),
        }
        match Grid::<u8>::from_vec(0, too_wide, Vec::new()) {
            Err(GridError::InvalidParameter { parameter, .. }) => assert_eq!(parameter, "height"),
            other => unreachable!("Expected InvalidParameter, got {other:?}"),
        }
        assert!(Grid::<u8>::from_array2(&Array2::zeros((0, too_wide))).is_err());

        let widest = Grid::<u8>::from_vec(i32::MAX.unsigned_abs() as usize, 0, Vec::new())
            .expect("Largest addressable width is accepted");
        assert_eq!(widest.area().width, i32::MAX);
    }

    // Tests ndarray conversion keeps (row, column) placement
    // Verified by transposing the shape in to_array2
    #[test]
    fn test_array2_conversion() {
        let grid = numbered(3, 2);
        let array = grid.to_array2().expect("Failed to convert grid");
        assert_eq!(array.dim(), (2, 3));
        assert_eq!(array.get((1, 2)), Some(&102));

        let back = Grid::from_array2(&array).expect("Failed to convert array");
        assert_eq!(back, grid);

        let transposed = Array2::from_shape_vec((2, 2), vec![1, 2, 3, 4])
            .expect("Failed to build array")
            .reversed_axes();
        let from_view = Grid::from_array2(&transposed).expect("Failed to convert array");
        assert_eq!(from_view.cells(), &[1, 3, 2, 4]);
    }

    // Tests move leaves the sentinel behind and copy does not
    // Verified by cloning instead of taking in move_element
    #[test]
    fn test_move_and_copy_element() {
        let mut grid = numbered(3, 3);
        assert!(grid.move_element(Position::new(1, 1), Position::new(2, 2)));
        assert_eq!(grid[Position::new(2, 2)], 101);
        assert_eq!(grid[Position::new(1, 1)], 0);

        assert!(grid.copy_element_by(Position::new(2, 2), Position::new(-2, 0)));
        assert_eq!(grid[Position::new(0, 2)], 101);
        assert_eq!(grid[Position::new(2, 2)], 101);

        assert!(!grid.move_element(Position::new(0, 0), Position::new(5, 5)));
        assert!(!grid.copy_element(Position::new(-1, 0), Position::new(0, 0)));
        assert_eq!(grid[Position::ZERO], 0);
    }

    // Tests bulk writes pair positions with values and skip on mismatch
    // Verified by truncating to the shorter slice instead of ignoring
    #[test]
    fn test_set_elements() {
        let mut grid: Grid<u8> = Grid::new(3, 1);
        let positions = [Position::new(0, 0), Position::new(2, 0)];
        grid.set_elements(&positions, &[4, 5]);
        assert_eq!(grid.cells(), &[4, 0, 5]);

        grid.set_elements(&positions, &[9]);
        assert_eq!(grid.cells(), &[4, 0, 5]);

        grid.set_all(&[Position::new(1, 0), Position::new(7, 7)], &1);
        assert_eq!(grid.cells(), &[4, 1, 5]);
        assert_eq!(grid.elements_at(&[Position::new(1, 0), Position::new(9, 0)]), vec![1, 0]);
    }

    // Tests rows and index conversion agree with row-major layout
    // Verified by computing the index as x * height + y
    #[test]
    fn test_row_major_layout() {
        let grid = numbered(3, 2);
        assert_eq!(grid.row(1), Some(&[100, 101, 102][..]));
        assert_eq!(grid.row(2), None);
        assert_eq!(grid.rows().count(), 2);
        assert_eq!(grid.index_of(Position::new(2, 1)), Some(5));
        assert_eq!(grid.position_from_index(4), Position::new(1, 1));
        assert_eq!(grid.max_valid_position(), Position::new(2, 1));
        let visited: Vec<i32> = grid.iter().map(|(_, &cell)| cell).collect();
        assert_eq!(visited, grid.cells());
    }
}
