//! Tests for region queries, fills and copies

#[cfg(test)]
mod tests {
    use crate::spatial::filter::CellFilter;
    use crate::spatial::grid::Grid;
    use crate::spatial::position::{Position, Region};

    fn checker(width: i32, height: i32) -> Grid<u8> {
        Grid::from_fn(width, height, |p| ((p.x + p.y) % 3) as u8)
    }

    // Tests a region hanging off the grid equals the query on its intersection
    // Verified by iterating the unclamped region without bounds checks
    #[test]
    fn test_region_query_clamp_equivalence() {
        let grid = checker(6, 5);
        let regions = [
            Region::new(-3, -2, 5, 5),
            Region::new(4, 3, 10, 10),
            Region::new(-5, 2, 20, 1),
            Region::new(2, 2, 2, 2),
        ];
        for region in regions {
            let clamped = region.clamp(&grid.area());
            assert_eq!(
                grid.positions_in_region(region),
                grid.positions_in_region(clamped)
            );
            assert_eq!(
                grid.elements_in_region(region),
                grid.elements_in_region(clamped)
            );
            assert!(
                grid.positions_in_region(region)
                    .iter()
                    .all(|&p| grid.is_valid_position(p))
            );
        }
    }

    // Tests degenerate and disjoint regions select nothing
    // Verified by treating zero width as one column
    #[test]
    fn test_degenerate_region_is_empty() {
        let grid = checker(4, 4);
        assert!(grid.positions_in_region(Region::new(1, 1, 0, 3)).is_empty());
        assert!(grid.elements_in_region(Region::new(1, 1, 2, -1)).is_empty());
        assert!(grid.positions_in_region(Region::new(10, 10, 3, 3)).is_empty());
    }

    // Tests filtered queries keep row-major order
    // Verified by collecting columns first
    #[test]
    fn test_filtered_queries() {
        let grid = checker(3, 3);
        assert_eq!(
            grid.positions_in_region_of_type(grid.area(), &1),
            vec![Position::new(1, 0), Position::new(0, 1), Position::new(2, 2)]
        );
        assert_eq!(grid.elements_in_region_in_mask(grid.area(), &[1, 2]).len(), 6);
        assert_eq!(
            grid.positions_in_region_not_in_mask(Region::new(0, 0, 2, 2), &[1, 2]),
            vec![Position::new(0, 0)]
        );
        assert_eq!(grid.empty_positions(), grid.positions_of_type(&0));
        assert_eq!(grid.non_empty_elements().len(), 6);
        assert_eq!(grid.elements_of_type(&2), vec![2, 2, 2]);
        assert_eq!(grid.elements_in_mask(&[0, 1]).len(), 6);
        assert_eq!(grid.elements_not_in_mask(&[0, 1]), vec![2, 2, 2]);
        assert_eq!(grid.positions_in_mask(&[2]).len(), grid.positions_not_in_mask(&[0, 1]).len());
        assert_eq!(
            grid.positions_where(&CellFilter::NotOfType(&0)),
            grid.non_empty_positions()
        );
    }

    // Tests fill writes every clamped cell and reports the count
    // Verified by filling the unclamped area
    #[test]
    fn test_fill_region() {
        let mut grid: Grid<u8> = Grid::new(4, 3);
        assert_eq!(grid.fill_region(Region::new(2, 1, 5, 5), &7), 4);
        assert_eq!(grid.positions_of_type(&7).len(), 4);
        assert_eq!(grid.fill_region(Region::new(0, 0, 0, 0), &9), 0);
        assert!(grid.positions_of_type(&9).is_empty());
    }

    // Tests mask fills only touch matching cells
    // Verified by swapping the mask filters
    #[test]
    fn test_fill_with_masks() {
        let mut grid = checker(3, 3);
        assert_eq!(grid.fill_where_in_mask(grid.area(), &[1], &5), 3);
        assert!(grid.positions_of_type(&1).is_empty());
        assert_eq!(grid.fill_where_not_in_mask(grid.area(), &[5, 0], &6), 3);
        assert_eq!(grid.positions_of_type(&6).len(), 3);
        assert_eq!(grid.positions_of_type(&0).len(), 3);
    }

    // Tests edge fill writes only the outer ring of the clamped region
    // Verified by using the unclamped region for the ring test
    #[test]
    fn test_fill_edge() {
        let mut grid: Grid<u8> = Grid::new(5, 5);
        assert_eq!(grid.fill_edge(Region::new(1, 1, 3, 3), &1), 8);
        assert_eq!(grid[Position::new(2, 2)], 0);
        assert_eq!(grid[Position::new(1, 3)], 1);

        let mut clipped: Grid<u8> = Grid::new(4, 4);
        assert_eq!(clipped.fill_edge(Region::new(1, 1, 10, 10), &1), 8);
        assert_eq!(clipped[Position::new(3, 3)], 1);
        assert_eq!(clipped[Position::new(2, 2)], 0);
        assert_eq!(clipped[Position::new(0, 0)], 0);
    }

    // Tests copies use the smaller of the two clamped blocks
    // Verified by using the source size for the block
    #[test]
    fn test_copy_region_between_grids() {
        let source = Grid::from_fn(4, 4, |p| (p.y * 4 + p.x) as u8 + 1);
        let mut dest: Grid<u8> = Grid::new(3, 3);
        let copied = dest.copy_region(&source, Region::new(1, 1, 3, 3), Region::new(1, 0, 5, 5));
        assert_eq!(copied, 6);
        assert_eq!(dest.cells(), &[0, 6, 7, 0, 10, 11, 0, 14, 15]);
        assert_eq!(source[Position::new(1, 1)], 6);
    }

    // Tests overlapping copies within a grid read the original values
    // Verified by writing while reading
    #[test]
    fn test_copy_region_within_overlapping() {
        let mut grid = Grid::from_fn(4, 1, |p| p.x as u8 + 1);
        let copied = grid.copy_region_within(Region::new(0, 0, 3, 1), Region::new(1, 0, 3, 1));
        assert_eq!(copied, 3);
        assert_eq!(grid.cells(), &[1, 1, 2, 3]);
    }
}
