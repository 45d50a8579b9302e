use bitvec::prelude::*;
use std::fmt;

use crate::spatial::position::Position;

/// Fixed-size bitset over the cells of a `width` x `height` grid
///
/// Parallel boolean grid used for visited/queued and closed sets. Provides
/// O(1) membership testing; positions outside the dimensions are never members.
#[derive(Clone, Debug)]
pub struct PositionSet {
    bits: BitVec,
    width: usize,
    height: usize,
}

impl PositionSet {
    /// Create a set with no positions present
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bits: bitvec![0; width * height],
            width,
            height,
        }
    }

    const fn index_of(&self, position: Position) -> Option<usize> {
        if position.x >= 0
            && position.y >= 0
            && (position.x as usize) < self.width
            && (position.y as usize) < self.height
        {
            Some(position.y as usize * self.width + position.x as usize)
        } else {
            None
        }
    }

    /// Insert a position
    ///
    /// Returns `true` if the position was newly added, `false` if it was
    /// already present or lies outside the dimensions
    pub fn insert(&mut self, position: Position) -> bool {
        let Some(index) = self.index_of(position) else {
            return false;
        };
        let was_set = self.bits.replace(index, true);
        !was_set
    }

    /// Remove a position, returning whether it was present
    pub fn remove(&mut self, position: Position) -> bool {
        self.index_of(position)
            .is_some_and(|index| self.bits.replace(index, false))
    }

    /// Test position membership
    pub fn contains(&self, position: Position) -> bool {
        self.index_of(position)
            .and_then(|index| self.bits.get(index).as_deref().copied())
            .unwrap_or(false)
    }

    /// Remove every position
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Test if no positions are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count positions in the set
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Members in row-major order
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width;
        self.bits
            .iter_ones()
            .map(move |index| Position::new((index % width) as i32, (index / width) as i32))
    }
}

impl fmt::Display for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PositionSet({} of {}x{})",
            self.len(),
            self.width,
            self.height
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/algorithm/bitset.rs"]
mod unit;
