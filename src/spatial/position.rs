//! Integer grid coordinates and axis-aligned regions
//!
//! Positions are signed so callers can probe arbitrary neighbour offsets
//! (including negative ones) without pre-checking bounds. Regions are
//! half-open rectangles that get intersected with the grid area before use.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::io::error::{GridError, invalid_parameter};

/// Integer (x, y) coordinate in grid space
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column, growing to the right
    pub x: i32,
    /// Row, growing downwards
    pub y: i32,
}

impl Position {
    /// The origin
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a position
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by a delta, saturating at the `i32` limits
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Euclidean distance to another position
    pub fn distance(self, other: Self) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        dx.hypot(dy)
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.offset(rhs.x, rhs.y)
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Position {
    type Err = GridError;

    /// Parse `x,y` (whitespace around either component is ignored)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| invalid_parameter("position", &s, &"expected the form x,y"))?;

        let x = x
            .trim()
            .parse::<i32>()
            .map_err(|e| invalid_parameter("position", &s, &e))?;
        let y = y
            .trim()
            .parse::<i32>()
            .map_err(|e| invalid_parameter("position", &s, &e))?;

        Ok(Self::new(x, y))
    }
}

/// Axis-aligned rectangle in grid coordinates
///
/// Covers columns `x..x + width` and rows `y..y + height`. A region with a
/// non-positive width or height is invalid and selects nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Region {
    /// Left column (inclusive)
    pub x: i32,
    /// Top row (inclusive)
    pub y: i32,
    /// Number of columns
    pub width: i32,
    /// Number of rows
    pub height: i32,
}

impl Region {
    /// Create a region from its origin and size
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Region anchored at the origin
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Smallest region covering both corners (inclusive)
    pub fn from_corners(a: Position, b: Position) -> Self {
        let left = a.x.min(b.x);
        let top = a.y.min(b.y);
        let right = a.x.max(b.x);
        let bottom = a.y.max(b.y);
        Self::new(
            left,
            top,
            right.saturating_sub(left).saturating_add(1),
            bottom.saturating_sub(top).saturating_add(1),
        )
    }

    /// Top-left corner
    pub const fn origin(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// One past the rightmost column
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// One past the bottom row
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Whether the region selects at least one cell
    pub const fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Number of cells covered (zero for invalid regions)
    pub const fn area(&self) -> usize {
        if self.is_valid() {
            self.width as usize * self.height as usize
        } else {
            0
        }
    }

    /// Whether the position lies inside the region
    pub const fn contains(&self, position: Position) -> bool {
        position.x >= self.x
            && position.y >= self.y
            && position.x < self.right()
            && position.y < self.bottom()
    }

    /// Whether the position lies on the outermost ring of the region
    pub const fn is_on_edge(&self, position: Position) -> bool {
        self.contains(position)
            && (position.x == self.x
                || position.y == self.y
                || position.x == self.right().saturating_sub(1)
                || position.y == self.bottom().saturating_sub(1))
    }

    /// Intersection with `bounds`
    ///
    /// Disjoint rectangles produce a zero-sized region at the clamped origin.
    #[must_use]
    pub fn clamp(&self, bounds: &Self) -> Self {
        let left = self.x.max(bounds.x);
        let top = self.y.max(bounds.y);
        let right = self.right().min(bounds.right());
        let bottom = self.bottom().min(bounds.bottom());
        Self::new(
            left,
            top,
            right.saturating_sub(left).max(0),
            bottom.saturating_sub(top).max(0),
        )
    }

    /// Positions inside the region in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let (x0, x1) = (self.x, self.right());
        (self.y..self.bottom()).flat_map(move |y| (x0..x1).map(move |x| Position::new(x, y)))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} at {},{}",
            self.width, self.height, self.x, self.y
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spatial/position.rs"]
mod unit;
