//! Resumable A* search over the empty cells of a grid
//!
//! The search is an explicit state machine: [`PathSearch::step`] expands
//! at most one node, so a caller can spread a long search over several
//! ticks with [`PathSearch::resume`] or drive it to completion with
//! [`PathSearch::run`]. Cells equal to `T::default()` are traversable and
//! everything else is a wall. Step cost and heuristic are both Euclidean.
//!
//! The open set is a binary heap keyed by f-score and then by insertion
//! order, so two runs over the same grid expand nodes in the same order
//! and return identical paths.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ndarray::Array2;

use crate::algorithm::adjacency::Connectivity;
use crate::algorithm::bitset::PositionSet;
use crate::io::configuration::DEFAULT_THROTTLE;
use crate::spatial::grid::Grid;
use crate::spatial::position::Position;

/// Tuning for a single search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Neighbourhood used for expansion
    pub connectivity: Connectivity,
    /// Expansions performed per [`PathSearch::resume`] call
    pub throttle: usize,
    /// Keep the order in which nodes were expanded
    pub record_expansions: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            connectivity: Connectivity::Four,
            throttle: DEFAULT_THROTTLE,
            record_expansions: false,
        }
    }
}

impl SearchConfig {
    /// Default configuration with the given neighbourhood
    #[must_use]
    pub const fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }
}

/// A found path
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Positions from goal back to start, both included
    pub path: Vec<Position>,
    /// Sum of Euclidean step lengths along the path
    pub cost: f64,
    /// Nodes closed before the goal was reached
    pub nodes_expanded: usize,
}

impl PathResult {
    /// Positions from start to goal
    pub fn forward(&self) -> Vec<Position> {
        self.path.iter().rev().copied().collect()
    }

    /// Number of positions on the path
    pub const fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path holds no positions
    pub const fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// Result of a single expansion step
#[derive(Debug, Clone, PartialEq)]
pub enum SearchStep {
    /// The frontier is not empty and the goal has not been reached
    Continue,
    /// The goal was reached
    Found(PathResult),
    /// The frontier emptied: no path exists
    Exhausted,
}

/// Result of a budgeted synchronous search
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The goal was reached within the budget
    Found(PathResult),
    /// The whole reachable area was explored without meeting the goal
    NoPath,
    /// The budget ran out before the search finished
    BudgetExceeded {
        /// Nodes closed when the search stopped
        nodes_expanded: usize,
    },
}

// Heap entry ordered so the max-heap pops the lowest f-score first and,
// among equal scores, the earliest insertion.
#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    f: f64,
    sequence: u64,
    position: Position,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

#[derive(Debug, Clone)]
enum Status {
    Running,
    Found(PathResult),
    Exhausted,
}

/// In-progress A* search borrowing its grid
///
/// The grid cannot change while the search is alive. Dropping the search
/// cancels it.
#[derive(Debug)]
pub struct PathSearch<'g, T> {
    grid: &'g Grid<T>,
    start: Position,
    goal: Position,
    config: SearchConfig,
    open: BinaryHeap<OpenEntry>,
    closed: PositionSet,
    g_scores: Array2<f64>,
    came_from: Array2<Option<Position>>,
    sequence: u64,
    nodes_expanded: usize,
    expanded: Vec<Position>,
    status: Status,
}

impl<'g, T: Clone + Default + PartialEq> PathSearch<'g, T> {
    /// Prepare a search from `start` to `goal`
    ///
    /// The start cell may hold anything; the goal must be empty unless it
    /// is the start. Searches with an invalid endpoint or a blocked goal
    /// are exhausted from the outset.
    pub fn new(grid: &'g Grid<T>, start: Position, goal: Position, config: SearchConfig) -> Self {
        let shape = (grid.height(), grid.width());
        let mut search = Self {
            grid,
            start,
            goal,
            config,
            open: BinaryHeap::new(),
            closed: PositionSet::new(grid.width(), grid.height()),
            g_scores: Array2::from_elem(shape, f64::INFINITY),
            came_from: Array2::from_elem(shape, None),
            sequence: 0,
            nodes_expanded: 0,
            expanded: Vec::new(),
            status: Status::Running,
        };

        if !grid.is_valid_position(start) || !grid.is_valid_position(goal) {
            log::debug!("search {start} -> {goal} has an endpoint outside the grid");
            search.status = Status::Exhausted;
        } else if goal != start && !grid.is_position_empty(goal) {
            log::debug!("search {start} -> {goal} targets a blocked cell");
            search.status = Status::Exhausted;
        } else {
            search.set_g(start, 0.0);
            search.push(start, start.distance(goal));
        }
        search
    }

    /// Expand at most one node
    ///
    /// Once the search has finished every further call returns the same
    /// terminal step.
    pub fn step(&mut self) -> SearchStep {
        match &self.status {
            Status::Found(result) => return SearchStep::Found(result.clone()),
            Status::Exhausted => return SearchStep::Exhausted,
            Status::Running => {}
        }

        let Some(current) = self.pop_open() else {
            log::debug!(
                "search {} -> {} exhausted after {} expansions",
                self.start,
                self.goal,
                self.nodes_expanded
            );
            self.status = Status::Exhausted;
            return SearchStep::Exhausted;
        };

        if current == self.goal {
            let result = self.reconstruct();
            log::debug!(
                "search {} -> {} found {} positions at cost {:.3} after {} expansions",
                self.start,
                self.goal,
                result.len(),
                result.cost,
                result.nodes_expanded
            );
            self.status = Status::Found(result.clone());
            return SearchStep::Found(result);
        }

        self.closed.insert(current);
        self.nodes_expanded += 1;
        if self.config.record_expansions {
            self.expanded.push(current);
        }

        let g_current = self.g(current);
        for next in self
            .grid
            .adjacent_empty_positions(current, self.config.connectivity)
        {
            if self.closed.contains(next) {
                continue;
            }
            let tentative = g_current + current.distance(next);
            if tentative < self.g(next) {
                self.set_g(next, tentative);
                self.set_came_from(next, current);
                self.push(next, tentative + next.distance(self.goal));
            }
        }

        SearchStep::Continue
    }

    /// Advance by up to `throttle` expansions
    ///
    /// Returns `Continue` if the search is still running afterwards.
    pub fn resume(&mut self) -> SearchStep {
        for _ in 0..self.config.throttle.max(1) {
            match self.step() {
                SearchStep::Continue => {}
                finished => return finished,
            }
        }
        log::trace!(
            "search {} -> {} paused at {} expansions, {} open",
            self.start,
            self.goal,
            self.nodes_expanded,
            self.open.len()
        );
        SearchStep::Continue
    }

    /// Run to completion; `None` means no path exists
    pub fn run(&mut self) -> Option<PathResult> {
        loop {
            match self.step() {
                SearchStep::Continue => {}
                SearchStep::Found(result) => return Some(result),
                SearchStep::Exhausted => return None,
            }
        }
    }

    /// Run until finished or until `max_expansions` nodes have been closed
    ///
    /// Popping the goal or finding the frontier empty closes nothing, so a
    /// search that needs exactly `max_expansions` expansions still reports
    /// its result.
    pub fn run_with_budget(&mut self, max_expansions: usize) -> SearchOutcome {
        loop {
            if matches!(self.status, Status::Running)
                && self.nodes_expanded >= max_expansions
                && self.peek_open().is_some_and(|next| next != self.goal)
            {
                log::debug!(
                    "search {} -> {} stopped at budget of {max_expansions} expansions",
                    self.start,
                    self.goal
                );
                return SearchOutcome::BudgetExceeded {
                    nodes_expanded: self.nodes_expanded,
                };
            }
            match self.step() {
                SearchStep::Continue => {}
                SearchStep::Found(result) => return SearchOutcome::Found(result),
                SearchStep::Exhausted => return SearchOutcome::NoPath,
            }
        }
    }

    /// Whether the search has found a path or run out of frontier
    pub const fn is_finished(&self) -> bool {
        !matches!(self.status, Status::Running)
    }

    /// Nodes closed so far
    pub const fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    /// Entries currently on the frontier, stale ones included
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    /// Expanded nodes in order, when recording is enabled
    pub const fn expanded(&self) -> &[Position] {
        self.expanded.as_slice()
    }

    /// Start position
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Goal position
    pub const fn goal(&self) -> Position {
        self.goal
    }

    fn push(&mut self, position: Position, f: f64) {
        self.open.push(OpenEntry {
            f,
            sequence: self.sequence,
            position,
        });
        self.sequence += 1;
    }

    // Entries for already closed positions are stale and skipped
    // Drops stale entries so the top of the heap is the next expansion
    fn peek_open(&mut self) -> Option<Position> {
        while let Some(entry) = self.open.peek() {
            if !self.closed.contains(entry.position) {
                return Some(entry.position);
            }
            self.open.pop();
        }
        None
    }

    fn pop_open(&mut self) -> Option<Position> {
        while let Some(entry) = self.open.pop() {
            if !self.closed.contains(entry.position) {
                return Some(entry.position);
            }
        }
        None
    }

    fn slot(&self, position: Position) -> Option<(usize, usize)> {
        self.grid
            .is_valid_position(position)
            .then_some((position.y as usize, position.x as usize))
    }

    fn g(&self, position: Position) -> f64 {
        self.slot(position)
            .and_then(|slot| self.g_scores.get(slot).copied())
            .unwrap_or(f64::INFINITY)
    }

    fn set_g(&mut self, position: Position, score: f64) {
        if let Some(slot) = self.slot(position)
            && let Some(cell) = self.g_scores.get_mut(slot)
        {
            *cell = score;
        }
    }

    fn set_came_from(&mut self, position: Position, previous: Position) {
        if let Some(slot) = self.slot(position)
            && let Some(cell) = self.came_from.get_mut(slot)
        {
            *cell = Some(previous);
        }
    }

    // Back-pointers only ever point at closed nodes, so the chain is
    // acyclic; the length cap guards against a corrupted table.
    fn reconstruct(&self) -> PathResult {
        let mut path = vec![self.goal];
        let mut current = self.goal;
        while let Some(previous) = self
            .slot(current)
            .and_then(|slot| self.came_from.get(slot).copied().flatten())
        {
            if path.len() > self.grid.len() {
                log::warn!("path reconstruction exceeded grid area; truncating");
                break;
            }
            path.push(previous);
            current = previous;
        }

        PathResult {
            path,
            cost: self.g(self.goal),
            nodes_expanded: self.nodes_expanded,
        }
    }
}

/// Run a search to completion with default settings and the given neighbourhood
pub fn find_path<T: Clone + Default + PartialEq>(
    grid: &Grid<T>,
    start: Position,
    goal: Position,
    connectivity: Connectivity,
) -> Option<PathResult> {
    let config = SearchConfig::default().with_connectivity(connectivity);
    PathSearch::new(grid, start, goal, config).run()
}

#[cfg(test)]
#[path = "../../tests/unit/algorithm/pathfind.rs"]
mod unit;
