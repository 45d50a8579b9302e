//! Uniform random sampling over grid cells
//!
//! Samplers take the random source from the caller so runs can be seeded
//! and replayed. Every sampler returns `None` when nothing qualifies.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::spatial::filter::CellFilter;
use crate::spatial::grid::Grid;
use crate::spatial::position::{Position, Region};

impl<T: Clone + Default + PartialEq> Grid<T> {
    /// Any position of the grid
    pub fn random_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Position> {
        self.random_position_in_region(self.area(), rng)
    }

    /// Any cell of the grid
    pub fn random_element<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        self.random_position(rng).and_then(|p| self.get(p))
    }

    /// Any position inside the clamped region
    ///
    /// Draws coordinates directly, without collecting the candidates.
    pub fn random_position_in_region<R: Rng + ?Sized>(
        &self,
        region: Region,
        rng: &mut R,
    ) -> Option<Position> {
        let clamped = self.clamp_region(region);
        if !clamped.is_valid() {
            return None;
        }

        let x = rng.random_range(clamped.x..clamped.right());
        let y = rng.random_range(clamped.y..clamped.bottom());
        Some(Position::new(x, y))
    }

    /// Any cell inside the clamped region
    pub fn random_element_in_region<R: Rng + ?Sized>(
        &self,
        region: Region,
        rng: &mut R,
    ) -> Option<&T> {
        self.random_position_in_region(region, rng)
            .and_then(|p| self.get(p))
    }

    /// Uniform choice among positions in the region matching the filter
    pub fn random_position_in_region_where<R: Rng + ?Sized>(
        &self,
        region: Region,
        filter: &CellFilter<'_, T>,
        rng: &mut R,
    ) -> Option<Position> {
        self.positions_in_region_where(region, filter)
            .choose(rng)
            .copied()
    }

    /// Uniform choice among cells in the region matching the filter
    pub fn random_element_in_region_where<R: Rng + ?Sized>(
        &self,
        region: Region,
        filter: &CellFilter<'_, T>,
        rng: &mut R,
    ) -> Option<&T> {
        self.random_position_in_region_where(region, filter, rng)
            .and_then(|p| self.get(p))
    }

    /// Uniform choice among all positions matching the filter
    pub fn random_position_where<R: Rng + ?Sized>(
        &self,
        filter: &CellFilter<'_, T>,
        rng: &mut R,
    ) -> Option<Position> {
        self.random_position_in_region_where(self.area(), filter, rng)
    }

    /// Uniform choice among all cells matching the filter
    pub fn random_element_where<R: Rng + ?Sized>(
        &self,
        filter: &CellFilter<'_, T>,
        rng: &mut R,
    ) -> Option<&T> {
        self.random_position_where(filter, rng)
            .and_then(|p| self.get(p))
    }

    /// Random position holding the empty sentinel
    pub fn random_empty_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Position> {
        self.random_position_where(&CellFilter::Empty, rng)
    }

    /// Random position holding anything but the empty sentinel
    pub fn random_non_empty_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Position> {
        self.random_position_where(&CellFilter::NonEmpty, rng)
    }

    /// Random non-empty cell
    pub fn random_non_empty_element<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        self.random_element_where(&CellFilter::NonEmpty, rng)
    }

    /// Random position holding `kind`
    pub fn random_position_of_type<R: Rng + ?Sized>(
        &self,
        kind: &T,
        rng: &mut R,
    ) -> Option<Position> {
        self.random_position_where(&CellFilter::OfType(kind), rng)
    }

    /// Random position in the region whose value is in the mask
    pub fn random_position_in_region_in_mask<R: Rng + ?Sized>(
        &self,
        region: Region,
        mask: &[T],
        rng: &mut R,
    ) -> Option<Position> {
        self.random_position_in_region_where(region, &CellFilter::InMask(mask), rng)
    }

    /// Random position in the region whose value is not in the mask
    pub fn random_position_in_region_not_in_mask<R: Rng + ?Sized>(
        &self,
        region: Region,
        mask: &[T],
        rng: &mut R,
    ) -> Option<Position> {
        self.random_position_in_region_where(region, &CellFilter::NotInMask(mask), rng)
    }

    /// Random `width` x `height` region that fits inside the grid
    ///
    /// A requested size larger than the grid on either axis yields the
    /// whole grid area; a non-positive size yields `None`.
    pub fn random_region<R: Rng + ?Sized>(
        &self,
        width: i32,
        height: i32,
        rng: &mut R,
    ) -> Option<Region> {
        let area = self.area();
        if width <= 0 || height <= 0 || !area.is_valid() {
            return None;
        }
        if width > area.width || height > area.height {
            return Some(area);
        }

        let x = rng.random_range(0..=area.width - width);
        let y = rng.random_range(0..=area.height - height);
        Some(Region::new(x, y, width, height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spatial/sampling.rs"]
mod unit;
