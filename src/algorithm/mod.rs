//! Grid algorithms
//!
//! Neighbour enumeration, connected-region discovery and shortest paths
//! over a [`Grid`](crate::spatial::grid::Grid).

/// Neighbourhoods and neighbour queries
pub mod adjacency;
/// Bitset over grid positions for visited and closed sets
pub mod bitset;
/// Breadth-first flood fill
pub mod flood;
/// Resumable A* search
pub mod pathfind;

pub use adjacency::Connectivity;
pub use bitset::PositionSet;
pub use pathfind::{PathResult, PathSearch, SearchConfig, SearchOutcome, SearchStep, find_path};
