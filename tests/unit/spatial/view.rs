//! Tests for borrowed grid windows

#[cfg(test)]
mod tests {
    use crate::spatial::grid::Grid;
    use crate::spatial::position::{Position, Region};

    // Tests local coordinates map onto the clamped region
    // Verified by ignoring the region origin in get
    #[test]
    fn test_view_local_coordinates() {
        let grid = Grid::from_fn(5, 5, |p| p.y * 10 + p.x);
        let view = grid.view(Region::new(2, 1, 2, 3));
        assert_eq!((view.width(), view.height()), (2, 3));
        assert_eq!(view.get(Position::ZERO), Some(&12));
        assert_eq!(view.get(Position::new(1, 2)), Some(&33));
        assert_eq!(view.get(Position::new(2, 0)), None);
        assert_eq!(view.get(Position::new(-1, 0)), None);
        assert_eq!(view.to_grid(Position::new(1, 1)), Position::new(3, 2));
    }

    // Tests views are clamped to the grid bounds
    // Verified by storing the unclamped region
    #[test]
    fn test_view_clamps_region() {
        let grid: Grid<u8> = Grid::new(4, 4);
        let view = grid.view(Region::new(2, 2, 10, 10));
        assert_eq!(view.region(), Region::new(2, 2, 2, 2));
        assert_eq!(view.iter().count(), 4);
        assert!(grid.view(Region::new(9, 9, 2, 2)).is_empty());
    }

    // Tests iteration yields local positions with the underlying cells
    // Verified by yielding grid positions instead of local ones
    #[test]
    fn test_view_iter() {
        let grid = Grid::from_fn(3, 3, |p| p.x + p.y);
        let view = grid.view(Region::new(1, 1, 2, 2));
        let cells: Vec<(Position, i32)> = view.iter().map(|(p, &v)| (p, v)).collect();
        assert_eq!(
            cells,
            vec![
                (Position::new(0, 0), 2),
                (Position::new(1, 0), 3),
                (Position::new(0, 1), 3),
                (Position::new(1, 1), 4),
            ]
        );
    }
}
