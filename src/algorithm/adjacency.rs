//! Neighbour enumeration over a grid
//!
//! Neighbours are produced in a fixed order (left, right, up, down, then
//! top-left, top-right, bottom-left, bottom-right) and positions outside
//! the grid are dropped silently.

use crate::spatial::filter::CellFilter;
use crate::spatial::grid::Grid;
use crate::spatial::position::Position;

/// Orthogonal offsets: left, right, up, down
pub const ORTHOGONAL_OFFSETS: [Position; 4] = [
    Position::new(-1, 0),
    Position::new(1, 0),
    Position::new(0, -1),
    Position::new(0, 1),
];

/// Diagonal offsets: top-left, top-right, bottom-left, bottom-right
pub const DIAGONAL_OFFSETS: [Position; 4] = [
    Position::new(-1, -1),
    Position::new(1, -1),
    Position::new(-1, 1),
    Position::new(1, 1),
];

/// Neighbourhood used for adjacency, flood fill and path search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Connectivity {
    /// Von Neumann neighbourhood (edges only)
    #[default]
    Four,
    /// Moore neighbourhood (edges and corners)
    Eight,
}

impl Connectivity {
    /// Eight-way when diagonals are included, four-way otherwise
    pub const fn from_diagonals(include_diagonals: bool) -> Self {
        if include_diagonals {
            Self::Eight
        } else {
            Self::Four
        }
    }

    /// Whether corner neighbours are included
    pub const fn includes_diagonals(self) -> bool {
        matches!(self, Self::Eight)
    }

    /// Neighbour offsets in enumeration order
    pub fn offsets(self) -> impl Iterator<Item = Position> {
        let diagonals: &[Position] = if self.includes_diagonals() {
            &DIAGONAL_OFFSETS
        } else {
            &[]
        };
        ORTHOGONAL_OFFSETS.iter().chain(diagonals).copied()
    }
}

impl<T: Clone + Default + PartialEq> Grid<T> {
    /// In-grid neighbours of `position` whose cells match the filter
    ///
    /// Returns an empty list when `position` itself is outside the grid.
    pub fn adjacent_positions_where(
        &self,
        position: Position,
        connectivity: Connectivity,
        filter: &CellFilter<'_, T>,
    ) -> Vec<Position> {
        if !self.is_valid_position(position) {
            return Vec::new();
        }

        connectivity
            .offsets()
            .map(|offset| position + offset)
            .filter(|&p| self.get(p).is_some_and(|cell| filter.matches(cell)))
            .collect()
    }

    /// Neighbouring cells matching the filter
    pub fn adjacent_elements_where(
        &self,
        position: Position,
        connectivity: Connectivity,
        filter: &CellFilter<'_, T>,
    ) -> Vec<T> {
        self.adjacent_positions_where(position, connectivity, filter)
            .into_iter()
            .map(|p| self.element(p))
            .collect()
    }

    /// In-grid neighbours of `position`
    pub fn adjacent_positions(&self, position: Position, connectivity: Connectivity) -> Vec<Position> {
        self.adjacent_positions_where(position, connectivity, &CellFilter::Any)
    }

    /// Neighbouring cells
    pub fn adjacent_elements(&self, position: Position, connectivity: Connectivity) -> Vec<T> {
        self.adjacent_elements_where(position, connectivity, &CellFilter::Any)
    }

    /// Neighbours holding the empty sentinel
    pub fn adjacent_empty_positions(
        &self,
        position: Position,
        connectivity: Connectivity,
    ) -> Vec<Position> {
        self.adjacent_positions_where(position, connectivity, &CellFilter::Empty)
    }

    /// Neighbours holding anything but the empty sentinel
    pub fn adjacent_non_empty_positions(
        &self,
        position: Position,
        connectivity: Connectivity,
    ) -> Vec<Position> {
        self.adjacent_positions_where(position, connectivity, &CellFilter::NonEmpty)
    }

    /// Neighbouring non-empty cells
    pub fn adjacent_non_empty_elements(
        &self,
        position: Position,
        connectivity: Connectivity,
    ) -> Vec<T> {
        self.adjacent_elements_where(position, connectivity, &CellFilter::NonEmpty)
    }

    /// Neighbours holding `kind`
    pub fn adjacent_positions_of_type(
        &self,
        position: Position,
        connectivity: Connectivity,
        kind: &T,
    ) -> Vec<Position> {
        self.adjacent_positions_where(position, connectivity, &CellFilter::OfType(kind))
    }

    /// Neighbours holding anything but `kind`
    pub fn adjacent_positions_not_of_type(
        &self,
        position: Position,
        connectivity: Connectivity,
        kind: &T,
    ) -> Vec<Position> {
        self.adjacent_positions_where(position, connectivity, &CellFilter::NotOfType(kind))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/algorithm/adjacency.rs"]
mod unit;
