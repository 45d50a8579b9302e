//! Cell predicates shared by region queries, fills, adjacency and sampling

/// Predicate selecting cells by value
///
/// The empty sentinel is `T::default()`. Masks are plain slices compared
/// by equality, so membership is linear in the mask length; masks are
/// expected to hold a handful of values.
#[derive(Debug)]
pub enum CellFilter<'a, T> {
    /// Every cell
    Any,
    /// Cells equal to the empty sentinel
    Empty,
    /// Cells different from the empty sentinel
    NonEmpty,
    /// Cells equal to the given value
    OfType(&'a T),
    /// Cells different from the given value
    NotOfType(&'a T),
    /// Cells whose value appears in the mask
    InMask(&'a [T]),
    /// Cells whose value does not appear in the mask
    NotInMask(&'a [T]),
}

impl<T> Clone for CellFilter<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CellFilter<'_, T> {}

impl<T: Default + PartialEq> CellFilter<'_, T> {
    /// Test a cell value against the filter
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::Any => true,
            Self::Empty => *value == T::default(),
            Self::NonEmpty => *value != T::default(),
            Self::OfType(kind) => value == *kind,
            Self::NotOfType(kind) => value != *kind,
            Self::InMask(mask) => mask.contains(value),
            Self::NotInMask(mask) => !mask.contains(value),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spatial/filter.rs"]
mod unit;
