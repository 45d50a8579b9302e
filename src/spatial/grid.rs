//! Row-major 2D grid with bounds-safe and direct cell access
//!
//! The grid owns a single contiguous backing store addressed by (x, y).
//! Every safe accessor is total: out-of-range positions produce `None`,
//! the empty sentinel or a no-op, so neighbour probing never needs a
//! pre-check. Direct indexing (`grid[position]`) skips the bounds test on
//! the x axis in release builds and must only be used with valid positions.

use std::ops::{Index, IndexMut};

use ndarray::Array2;

use crate::io::error::{GridError, Result, invalid_parameter};
use crate::spatial::position::{Position, Region};

/// Rectangular grid of cells stored in row-major order
///
/// `T::default()` is the empty sentinel: it fills newly exposed cells and
/// marks traversable cells for path search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self {
            cells: Vec::new(),
            width: 0,
            height: 0,
        }
    }
}

// Negative sizes collapse to an empty axis
const fn dimension(value: i32) -> usize {
    if value > 0 { value as usize } else { 0 }
}

// Every cell must stay addressable by an i32 position
fn check_dimensions(width: usize, height: usize) -> Result<()> {
    let limit = i32::MAX.unsigned_abs() as usize;
    if width > limit {
        return Err(invalid_parameter("width", &width, &"exceeds the i32 coordinate range"));
    }
    if height > limit {
        return Err(invalid_parameter("height", &height, &"exceeds the i32 coordinate range"));
    }
    Ok(())
}

impl<T> Grid<T> {
    /// Build a grid from row-major cells
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidParameter` if either dimension exceeds
    /// `i32::MAX`, or `GridError::ShapeMismatch` if
    /// `cells.len() != width * height`
    pub fn from_vec(width: usize, height: usize, cells: Vec<T>) -> Result<Self> {
        check_dimensions(width, height)?;
        let expected = width.checked_mul(height).ok_or(GridError::ShapeMismatch {
            expected: usize::MAX,
            actual: cells.len(),
        })?;

        if cells.len() != expected {
            return Err(GridError::ShapeMismatch {
                expected,
                actual: cells.len(),
            });
        }

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Build a grid by evaluating `f` at every position in row-major order
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(Position) -> T) -> Self {
        let area = Region::from_size(width, height);
        let cells = area.positions().map(&mut f).collect();
        Self {
            cells,
            width: dimension(width),
            height: dimension(height),
        }
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Raw element count of the backing store
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid holds no cells
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The full grid rectangle
    pub const fn area(&self) -> Region {
        Region::from_size(self.width as i32, self.height as i32)
    }

    /// Check the backing store still matches the dimensions
    ///
    /// A mismatch means the storage is corrupt; it is logged as a warning.
    pub fn is_data_valid(&self) -> bool {
        let expected = self.width * self.height;
        if expected == self.cells.len() {
            return true;
        }

        log::warn!(
            "grid size {}x{} ({expected}) != data size {}; possible data corruption",
            self.width,
            self.height,
            self.cells.len()
        );
        false
    }

    /// Drop every cell and shrink to 0x0, releasing the backing store
    pub fn clear(&mut self) {
        self.cells = Vec::new();
        self.width = 0;
        self.height = 0;
    }

    /// Whether `0 <= x < width` and `0 <= y < height`
    pub const fn is_valid_position(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as usize) < self.width
            && (position.y as usize) < self.height
    }

    /// Backing-store index of a valid position
    pub const fn index_of(&self, position: Position) -> Option<usize> {
        if self.is_valid_position(position) {
            Some(position.y as usize * self.width + position.x as usize)
        } else {
            None
        }
    }

    /// Position of a backing-store index
    ///
    /// Indices past the end map to positions outside the grid.
    pub const fn position_from_index(&self, index: usize) -> Position {
        if self.width == 0 {
            return Position::ZERO;
        }
        Position::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Largest valid position, or the origin for an empty grid
    pub const fn max_valid_position(&self) -> Position {
        Position::new(
            self.width.saturating_sub(1) as i32,
            self.height.saturating_sub(1) as i32,
        )
    }

    /// Bounds-checked shared access
    pub fn get(&self, position: Position) -> Option<&T> {
        self.index_of(position).and_then(|i| self.cells.get(i))
    }

    /// Bounds-checked mutable access
    pub fn get_mut(&mut self, position: Position) -> Option<&mut T> {
        self.index_of(position).and_then(|i| self.cells.get_mut(i))
    }

    /// Bounds-checked write
    ///
    /// Returns whether the cell was written; invalid positions are ignored.
    pub fn set(&mut self, position: Position, value: T) -> bool {
        if let Some(cell) = self.get_mut(position) {
            *cell = value;
            true
        } else {
            false
        }
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// All cells in row-major order, mutably
    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// One row as a slice
    pub fn row(&self, y: usize) -> Option<&[T]> {
        let start = y.checked_mul(self.width)?;
        if y >= self.height {
            return None;
        }
        self.cells.get(start..start + self.width)
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<T> {
        self.area().positions()
    }

    /// Cells paired with their positions in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (self.position_from_index(index), cell))
    }

    // Release builds only catch overruns of the whole store; an x outside
    // the row is caught by the debug assertion.
    fn direct_index(&self, position: Position) -> usize {
        debug_assert!(
            self.is_valid_position(position),
            "position {position} outside {}x{} grid",
            self.width,
            self.height
        );
        (position.y as usize)
            .wrapping_mul(self.width)
            .wrapping_add(position.x as usize)
    }
}

impl<T: Clone + Default> Grid<T> {
    /// Create a grid filled with the empty sentinel
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, T::default())
    }

    /// Create a grid with every cell set to `value`
    pub fn filled(width: i32, height: i32, value: T) -> Self {
        let width = dimension(width);
        let height = dimension(height);
        Self {
            cells: vec![value; width * height],
            width,
            height,
        }
    }

    /// Copy an ndarray matrix with shape `(rows, cols)` = `(height, width)`
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidParameter` if either dimension exceeds
    /// `i32::MAX`
    pub fn from_array2(array: &Array2<T>) -> Result<Self> {
        let (height, width) = array.dim();
        check_dimensions(width, height)?;
        Ok(Self {
            cells: array.iter().cloned().collect(),
            width,
            height,
        })
    }

    /// Copy into an ndarray matrix with shape `(height, width)`
    ///
    /// # Errors
    ///
    /// Returns `GridError::ShapeMismatch` if the backing store is corrupt
    pub fn to_array2(&self) -> Result<Array2<T>> {
        Array2::from_shape_vec((self.height, self.width), self.cells.clone()).map_err(|e| {
            log::warn!("grid to matrix conversion failed: {e}");
            GridError::ShapeMismatch {
                expected: self.width * self.height,
                actual: self.cells.len(),
            }
        })
    }

    /// Change the dimensions in place
    ///
    /// The overlapping top-left sub-rectangle keeps its (x, y) placement,
    /// newly exposed cells take the empty sentinel and cells outside the
    /// new bounds are dropped. Negative sizes produce an empty axis.
    pub fn resize(&mut self, width: i32, height: i32) {
        let new_width = dimension(width);
        let new_height = dimension(height);
        if new_width == self.width && new_height == self.height {
            return;
        }

        let mut cells = vec![T::default(); new_width * new_height];
        let old_width = self.width;
        let old = std::mem::take(&mut self.cells);

        for (index, value) in old.into_iter().enumerate() {
            let x = index % old_width;
            let y = index / old_width;
            if x < new_width
                && y < new_height
                && let Some(slot) = cells.get_mut(y * new_width + x)
            {
                *slot = value;
            }
        }

        self.cells = cells;
        self.width = new_width;
        self.height = new_height;
    }

    /// Clone of the cell, or the empty sentinel when the position is invalid
    pub fn element(&self, position: Position) -> T {
        self.get(position).cloned().unwrap_or_default()
    }

    /// Clone the cells at the given positions, substituting the sentinel for invalid ones
    pub fn elements_at(&self, positions: &[Position]) -> Vec<T> {
        positions.iter().map(|&p| self.element(p)).collect()
    }

    /// Move a cell to another position, leaving the empty sentinel behind
    ///
    /// Returns `false` without touching the grid unless both positions are valid.
    pub fn move_element(&mut self, from: Position, to: Position) -> bool {
        let (Some(src), Some(dst)) = (self.index_of(from), self.index_of(to)) else {
            return false;
        };
        if src == dst {
            return true;
        }

        let value = self.cells.get_mut(src).map(std::mem::take);
        match (value, self.cells.get_mut(dst)) {
            (Some(value), Some(slot)) => {
                *slot = value;
                true
            }
            _ => false,
        }
    }

    /// Move a cell by a delta
    pub fn move_element_by(&mut self, from: Position, delta: Position) -> bool {
        self.move_element(from, from + delta)
    }

    /// Copy a cell to another position
    ///
    /// Returns `false` without touching the grid unless both positions are valid.
    pub fn copy_element(&mut self, from: Position, to: Position) -> bool {
        if !self.is_valid_position(to) {
            return false;
        }
        match self.get(from).cloned() {
            Some(value) => self.set(to, value),
            None => false,
        }
    }

    /// Copy a cell by a delta
    pub fn copy_element_by(&mut self, from: Position, delta: Position) -> bool {
        self.copy_element(from, from + delta)
    }

    /// Write `elements[i]` to `positions[i]`
    ///
    /// Ignored entirely when the two slices differ in length; invalid
    /// positions are skipped.
    pub fn set_elements(&mut self, positions: &[Position], elements: &[T]) {
        if positions.len() != elements.len() {
            log::debug!(
                "set_elements ignored: {} positions for {} elements",
                positions.len(),
                elements.len()
            );
            return;
        }

        for (&position, value) in positions.iter().zip(elements) {
            self.set(position, value.clone());
        }
    }

    /// Write the same value to every listed position
    pub fn set_all(&mut self, positions: &[Position], value: &T) {
        for &position in positions {
            self.set(position, value.clone());
        }
    }
}

impl<T: Default + PartialEq> Grid<T> {
    /// Whether the cell holds the empty sentinel
    ///
    /// Positions outside the grid count as empty.
    pub fn is_position_empty(&self, position: Position) -> bool {
        self.get(position).is_none_or(|cell| *cell == T::default())
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    /// Direct access; panics when the position is outside the backing store
    #[allow(clippy::indexing_slicing)]
    fn index(&self, position: Position) -> &Self::Output {
        &self.cells[self.direct_index(position)]
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    /// Direct access; panics when the position is outside the backing store
    #[allow(clippy::indexing_slicing)]
    fn index_mut(&mut self, position: Position) -> &mut Self::Output {
        let index = self.direct_index(position);
        &mut self.cells[index]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spatial/grid.rs"]
mod unit;
