//! Generic 2D grid with region queries, flood fill and resumable A* search
//!
//! Cells equal to `T::default()` are empty. Every grid operation is total:
//! out-of-range positions and degenerate regions yield `None`, empty
//! results or no-ops instead of errors, so callers can probe neighbours
//! freely. Path search is an explicit step machine that can be resumed
//! across ticks or run to completion.

#![forbid(unsafe_code)]

/// Adjacency, flood fill and A* search
pub mod algorithm;
/// Map loading, rendering, command-line front end and error handling
pub mod io;
/// Grid storage, positions, regions and cell selection
pub mod spatial;

pub use algorithm::{
    Connectivity, PathResult, PathSearch, SearchConfig, SearchOutcome, SearchStep, find_path,
};
pub use io::error::{GridError, Result};
pub use spatial::{CellFilter, Grid, GridView, Position, Region};
