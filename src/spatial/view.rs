//! Borrowed read-only windows over a grid
//!
//! A view exposes a clamped sub-rectangle of a grid in local coordinates
//! without copying. Sharing cells between two grids is expressed this way
//! rather than by aliasing storage; the borrow keeps the source grid
//! immutable for the lifetime of the view.

use crate::spatial::grid::Grid;
use crate::spatial::position::{Position, Region};

/// Read-only window into a grid
#[derive(Debug)]
pub struct GridView<'a, T> {
    grid: &'a Grid<T>,
    region: Region,
}

impl<T> Clone for GridView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for GridView<'_, T> {}

impl<'a, T> GridView<'a, T> {
    /// Window over `region`, clamped to the grid bounds
    pub fn new(grid: &'a Grid<T>, region: Region) -> Self {
        Self {
            grid,
            region: region.clamp(&grid.area()),
        }
    }

    /// The clamped region in grid coordinates
    pub const fn region(&self) -> Region {
        self.region
    }

    /// Number of columns visible through the view
    pub const fn width(&self) -> usize {
        self.region.width as usize
    }

    /// Number of rows visible through the view
    pub const fn height(&self) -> usize {
        self.region.height as usize
    }

    /// Whether the view covers no cells
    pub const fn is_empty(&self) -> bool {
        !self.region.is_valid()
    }

    /// Grid coordinates of a local position
    pub const fn to_grid(&self, local: Position) -> Position {
        local.offset(self.region.x, self.region.y)
    }

    /// Cell at a local position, `None` outside the view
    pub fn get(&self, local: Position) -> Option<&'a T> {
        let inside = local.x >= 0
            && local.y >= 0
            && local.x < self.region.width
            && local.y < self.region.height;
        if inside {
            self.grid.get(self.to_grid(local))
        } else {
            None
        }
    }

    /// Visible cells with their local positions in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Position, &'a T)> + use<'a, T> {
        let grid = self.grid;
        let origin = self.region.origin();
        self.region
            .positions()
            .filter_map(move |p| grid.get(p).map(|cell| (p - origin, cell)))
    }
}

impl<T> Grid<T> {
    /// Borrow a read-only window over `region`
    pub fn view(&self, region: Region) -> GridView<'_, T> {
        GridView::new(self, region)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spatial/view.rs"]
mod unit;
