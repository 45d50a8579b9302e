//! Breadth-first flood fill bounded by a set of boundary values

use std::collections::VecDeque;

use crate::algorithm::adjacency::Connectivity;
use crate::algorithm::bitset::PositionSet;
use crate::spatial::filter::CellFilter;
use crate::spatial::grid::Grid;
use crate::spatial::position::Position;

impl<T: Clone + Default + PartialEq> Grid<T> {
    /// Positions reachable from `start` without entering a boundary cell
    ///
    /// The start is included. Positions appear in breadth-first order and
    /// each appears once. Returns `None` when `start` is outside the grid
    /// or its own value is in `boundary`.
    pub fn flood_positions(
        &self,
        start: Position,
        boundary: &[T],
        connectivity: Connectivity,
    ) -> Option<Vec<Position>> {
        let Some(origin) = self.get(start) else {
            log::debug!("flood fill aborted: start {start} outside grid");
            return None;
        };
        if boundary.contains(origin) {
            log::debug!("flood fill aborted: start {start} is a boundary cell");
            return None;
        }

        let passable = CellFilter::NotInMask(boundary);
        let mut seen = PositionSet::new(self.width(), self.height());
        let mut queue = VecDeque::from([start]);
        let mut reached = Vec::new();
        seen.insert(start);

        while let Some(current) = queue.pop_front() {
            reached.push(current);
            for next in self.adjacent_positions_where(current, connectivity, &passable) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        log::trace!("flood fill from {start} reached {} cells", reached.len());
        Some(reached)
    }

    /// Values of the flooded cells, in the same order as [`Self::flood_positions`]
    pub fn flood_elements(
        &self,
        start: Position,
        boundary: &[T],
        connectivity: Connectivity,
    ) -> Option<Vec<T>> {
        self.flood_positions(start, boundary, connectivity)
            .map(|positions| self.elements_at(&positions))
    }

    /// Overwrite every flooded cell with `value`
    ///
    /// The flooded set is computed against the unmodified grid before any
    /// write, so a fill value that is also a boundary value does not cut
    /// the fill short. Returns the number of cells written.
    pub fn flood_fill(
        &mut self,
        start: Position,
        boundary: &[T],
        connectivity: Connectivity,
        value: &T,
    ) -> Option<usize> {
        let positions = self.flood_positions(start, boundary, connectivity)?;
        self.set_all(&positions, value);
        Some(positions.len())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/algorithm/flood.rs"]
mod unit;
