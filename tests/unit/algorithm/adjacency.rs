//! Tests for neighbour enumeration order and filtering

#[cfg(test)]
mod tests {
    use crate::algorithm::adjacency::Connectivity;
    use crate::spatial::grid::Grid;
    use crate::spatial::position::Position;

    // Tests neighbours follow left, right, up, down, then the diagonals
    // Verified by swapping the up and down offsets
    #[test]
    fn test_neighbour_order() {
        let grid: Grid<u8> = Grid::new(3, 3);
        let centre = Position::new(1, 1);
        assert_eq!(
            grid.adjacent_positions(centre, Connectivity::Four),
            vec![
                Position::new(0, 1),
                Position::new(2, 1),
                Position::new(1, 0),
                Position::new(1, 2),
            ]
        );
        assert_eq!(
            grid.adjacent_positions(centre, Connectivity::Eight),
            vec![
                Position::new(0, 1),
                Position::new(2, 1),
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(0, 0),
                Position::new(2, 0),
                Position::new(0, 2),
                Position::new(2, 2),
            ]
        );
    }

    // Tests positions outside the grid are dropped at corners
    // Verified by returning all offsets unfiltered
    #[test]
    fn test_corner_neighbours_are_clipped() {
        let grid: Grid<u8> = Grid::new(3, 3);
        assert_eq!(grid.adjacent_positions(Position::ZERO, Connectivity::Four).len(), 2);
        assert_eq!(grid.adjacent_positions(Position::ZERO, Connectivity::Eight).len(), 3);
        assert!(grid.adjacent_positions(Position::new(5, 5), Connectivity::Eight).is_empty());
    }

    // Tests filtered neighbour queries
    // Verified by inverting the empty filter
    #[test]
    fn test_filtered_neighbours() {
        let grid = Grid::from_fn(3, 3, |p| if p.x == 0 { 2_u8 } else { 0 });
        let centre = Position::new(1, 1);
        assert_eq!(
            grid.adjacent_non_empty_positions(centre, Connectivity::Eight),
            vec![Position::new(0, 1), Position::new(0, 0), Position::new(0, 2)]
        );
        assert_eq!(grid.adjacent_empty_positions(centre, Connectivity::Four).len(), 3);
        assert_eq!(grid.adjacent_positions_of_type(centre, Connectivity::Four, &2).len(), 1);
        assert_eq!(
            grid.adjacent_positions_not_of_type(centre, Connectivity::Eight, &2).len(),
            5
        );
        assert_eq!(
            grid.adjacent_non_empty_elements(centre, Connectivity::Eight),
            vec![2, 2, 2]
        );
        assert_eq!(grid.adjacent_elements(centre, Connectivity::Four), vec![2, 0, 0, 0]);
    }

    // Tests the diagonal flag maps onto connectivity
    // Verified by inverting from_diagonals
    #[test]
    fn test_from_diagonals() {
        assert_eq!(Connectivity::from_diagonals(true), Connectivity::Eight);
        assert_eq!(Connectivity::from_diagonals(false), Connectivity::Four);
        assert_eq!(Connectivity::default(), Connectivity::Four);
        assert_eq!(Connectivity::Eight.offsets().count(), 8);
    }
}
