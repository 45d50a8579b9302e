//! Region queries, bulk fills and region copies
//!
//! Every operation intersects its region with the grid area first and
//! treats an empty intersection as "nothing selected": queries return an
//! empty list and fills do nothing. Results are in row-major order.

use crate::spatial::filter::CellFilter;
use crate::spatial::grid::Grid;
use crate::spatial::position::{Position, Region};

impl<T: Clone + Default + PartialEq> Grid<T> {
    /// Intersect a region with the grid bounds
    pub fn clamp_region(&self, region: Region) -> Region {
        region.clamp(&self.area())
    }

    /// Positions in the clamped region whose cells match the filter
    pub fn positions_in_region_where(
        &self,
        region: Region,
        filter: &CellFilter<'_, T>,
    ) -> Vec<Position> {
        self.clamp_region(region)
            .positions()
            .filter(|&p| self.get(p).is_some_and(|cell| filter.matches(cell)))
            .collect()
    }

    /// Cells in the clamped region that match the filter
    pub fn elements_in_region_where(&self, region: Region, filter: &CellFilter<'_, T>) -> Vec<T> {
        self.clamp_region(region)
            .positions()
            .filter_map(|p| self.get(p))
            .filter(|cell| filter.matches(cell))
            .cloned()
            .collect()
    }

    /// Positions in the clamped region
    pub fn positions_in_region(&self, region: Region) -> Vec<Position> {
        self.positions_in_region_where(region, &CellFilter::Any)
    }

    /// Cells in the clamped region
    pub fn elements_in_region(&self, region: Region) -> Vec<T> {
        self.elements_in_region_where(region, &CellFilter::Any)
    }

    /// Positions in the region holding `kind`
    pub fn positions_in_region_of_type(&self, region: Region, kind: &T) -> Vec<Position> {
        self.positions_in_region_where(region, &CellFilter::OfType(kind))
    }

    /// Cells in the region equal to `kind`
    pub fn elements_in_region_of_type(&self, region: Region, kind: &T) -> Vec<T> {
        self.elements_in_region_where(region, &CellFilter::OfType(kind))
    }

    /// Positions in the region whose value is in the mask
    pub fn positions_in_region_in_mask(&self, region: Region, mask: &[T]) -> Vec<Position> {
        self.positions_in_region_where(region, &CellFilter::InMask(mask))
    }

    /// Cells in the region whose value is in the mask
    pub fn elements_in_region_in_mask(&self, region: Region, mask: &[T]) -> Vec<T> {
        self.elements_in_region_where(region, &CellFilter::InMask(mask))
    }

    /// Positions in the region whose value is not in the mask
    pub fn positions_in_region_not_in_mask(&self, region: Region, mask: &[T]) -> Vec<Position> {
        self.positions_in_region_where(region, &CellFilter::NotInMask(mask))
    }

    /// Cells in the region whose value is not in the mask
    pub fn elements_in_region_not_in_mask(&self, region: Region, mask: &[T]) -> Vec<T> {
        self.elements_in_region_where(region, &CellFilter::NotInMask(mask))
    }

    /// Every position whose cell matches the filter
    pub fn positions_where(&self, filter: &CellFilter<'_, T>) -> Vec<Position> {
        self.iter()
            .filter(|(_, cell)| filter.matches(cell))
            .map(|(p, _)| p)
            .collect()
    }

    /// Every cell matching the filter
    pub fn elements_where(&self, filter: &CellFilter<'_, T>) -> Vec<T> {
        self.cells()
            .iter()
            .filter(|cell| filter.matches(cell))
            .cloned()
            .collect()
    }

    /// Positions holding the empty sentinel
    pub fn empty_positions(&self) -> Vec<Position> {
        self.positions_where(&CellFilter::Empty)
    }

    /// Positions holding anything but the empty sentinel
    pub fn non_empty_positions(&self) -> Vec<Position> {
        self.positions_where(&CellFilter::NonEmpty)
    }

    /// Cells different from the empty sentinel
    pub fn non_empty_elements(&self) -> Vec<T> {
        self.elements_where(&CellFilter::NonEmpty)
    }

    /// Positions holding `kind`
    pub fn positions_of_type(&self, kind: &T) -> Vec<Position> {
        self.positions_where(&CellFilter::OfType(kind))
    }

    /// Positions whose value is in the mask
    pub fn positions_in_mask(&self, mask: &[T]) -> Vec<Position> {
        self.positions_where(&CellFilter::InMask(mask))
    }

    /// Positions whose value is not in the mask
    pub fn positions_not_in_mask(&self, mask: &[T]) -> Vec<Position> {
        self.positions_where(&CellFilter::NotInMask(mask))
    }

    /// Cells equal to `kind`
    pub fn elements_of_type(&self, kind: &T) -> Vec<T> {
        self.elements_where(&CellFilter::OfType(kind))
    }

    /// Cells whose value is in the mask
    pub fn elements_in_mask(&self, mask: &[T]) -> Vec<T> {
        self.elements_where(&CellFilter::InMask(mask))
    }

    /// Cells whose value is not in the mask
    pub fn elements_not_in_mask(&self, mask: &[T]) -> Vec<T> {
        self.elements_where(&CellFilter::NotInMask(mask))
    }

    /// Overwrite matching cells in the clamped region
    ///
    /// Returns the number of cells written.
    pub fn fill_region_where(
        &mut self,
        region: Region,
        filter: &CellFilter<'_, T>,
        value: &T,
    ) -> usize {
        let mut written = 0;
        for p in self.clamp_region(region).positions() {
            if let Some(cell) = self.get_mut(p)
                && filter.matches(cell)
            {
                cell.clone_from(value);
                written += 1;
            }
        }
        written
    }

    /// Overwrite every cell in the clamped region
    pub fn fill_region(&mut self, region: Region, value: &T) -> usize {
        self.fill_region_where(region, &CellFilter::Any, value)
    }

    /// Overwrite cells in the region whose value is in the mask
    pub fn fill_where_in_mask(&mut self, region: Region, mask: &[T], value: &T) -> usize {
        self.fill_region_where(region, &CellFilter::InMask(mask), value)
    }

    /// Overwrite cells in the region whose value is not in the mask
    pub fn fill_where_not_in_mask(&mut self, region: Region, mask: &[T], value: &T) -> usize {
        self.fill_region_where(region, &CellFilter::NotInMask(mask), value)
    }

    /// Overwrite matching cells on the outermost ring of the clamped region
    pub fn fill_edge_where(
        &mut self,
        region: Region,
        filter: &CellFilter<'_, T>,
        value: &T,
    ) -> usize {
        let clamped = self.clamp_region(region);
        let mut written = 0;
        for p in clamped.positions().filter(|&p| clamped.is_on_edge(p)) {
            if let Some(cell) = self.get_mut(p)
                && filter.matches(cell)
            {
                cell.clone_from(value);
                written += 1;
            }
        }
        written
    }

    /// Overwrite the outermost ring of the clamped region
    pub fn fill_edge(&mut self, region: Region, value: &T) -> usize {
        self.fill_edge_where(region, &CellFilter::Any, value)
    }

    /// Copy cells from another grid by value
    ///
    /// Both regions are clamped to their own grid; the copied block is the
    /// overlap of the two clamped sizes, anchored at each region's origin.
    /// Returns the number of cells copied.
    pub fn copy_region(&mut self, source: &Self, source_region: Region, dest_region: Region) -> usize {
        let src = source.clamp_region(source_region);
        let dst = self.clamp_region(dest_region);
        let block = Region::new(0, 0, src.width.min(dst.width), src.height.min(dst.height));

        let mut copied = 0;
        for offset in block.positions() {
            if let Some(value) = source.get(src.origin() + offset)
                && self.set(dst.origin() + offset, value.clone())
            {
                copied += 1;
            }
        }
        copied
    }

    /// Copy a block within this grid
    ///
    /// The source block is read in full before anything is written, so
    /// overlapping regions copy the original values.
    pub fn copy_region_within(&mut self, source_region: Region, dest_region: Region) -> usize {
        let src = self.clamp_region(source_region);
        let dst = self.clamp_region(dest_region);
        let block = Region::new(0, 0, src.width.min(dst.width), src.height.min(dst.height));

        let staged: Vec<(Position, T)> = block
            .positions()
            .filter_map(|offset| {
                self.get(src.origin() + offset)
                    .map(|value| (dst.origin() + offset, value.clone()))
            })
            .collect();

        let mut copied = 0;
        for (p, value) in staged {
            if self.set(p, value) {
                copied += 1;
            }
        }
        copied
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spatial/region.rs"]
mod unit;
