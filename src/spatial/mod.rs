//! Spatial data structures
//!
//! This module contains the grid container and everything that selects
//! cells from it:
//! - Positions and regions
//! - The row-major grid and borrowed views over it
//! - Cell filters, region queries, fills and random sampling

/// Cell predicates (type and mask membership)
pub mod filter;
/// Row-major grid storage and cell access
pub mod grid;
/// Coordinates and rectangles
pub mod position;
/// Region queries, fills and copies
pub mod region;
/// Random sampling over cells and regions
pub mod sampling;
/// Borrowed read-only windows
pub mod view;

pub use filter::CellFilter;
pub use grid::Grid;
pub use position::{Position, Region};
pub use view::GridView;
