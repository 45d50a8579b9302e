//! Text maps: parsing, loading and rendering with overlays
//!
//! A map is one row per line. `.` is open floor, `#` is a wall and any
//! other printable character is an impassable marker that keeps its glyph.
//! Rows must all have the same length; trailing blank lines are ignored.

use std::fmt;
use std::path::Path;

use crate::io::configuration::{
    EXPANDED_CHAR, GOAL_CHAR, MAX_MAP_DIMENSION, OPEN_CHAR, PATH_CHAR, START_CHAR, WALL_CHAR,
};
use crate::io::error::{Result, WithPath, invalid_map, invalid_parameter};
use crate::io::image::load_image_map;
use crate::spatial::grid::Grid;
use crate::spatial::position::Position;

/// Cell of a loaded map
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Traversable floor, the empty sentinel
    #[default]
    Open,
    /// Impassable wall
    Wall,
    /// Impassable cell carrying its own glyph
    Marker(char),
}

impl Tile {
    /// Classify a map character
    pub const fn from_char(c: char) -> Self {
        match c {
            OPEN_CHAR => Self::Open,
            WALL_CHAR => Self::Wall,
            other => Self::Marker(other),
        }
    }

    /// Character used when rendering
    pub const fn to_char(self) -> char {
        match self {
            Self::Open => OPEN_CHAR,
            Self::Wall => WALL_CHAR,
            Self::Marker(c) => c,
        }
    }

    /// Whether the tile can be walked on
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Parse a text map
///
/// # Errors
///
/// Returns `GridError::InvalidMap` if rows differ in length or contain
/// whitespace or control characters, and `GridError::InvalidParameter` if
/// the map exceeds the dimension limit
pub fn parse_map(text: &str) -> Result<Grid<Tile>> {
    let mut rows: Vec<&str> = text.lines().map(|line| line.trim_end_matches('\r')).collect();
    while rows.last().is_some_and(|row| row.trim().is_empty()) {
        rows.pop();
    }

    let Some(first) = rows.first() else {
        return Ok(Grid::default());
    };
    let width = first.chars().count();
    if width > MAX_MAP_DIMENSION || rows.len() > MAX_MAP_DIMENSION {
        return Err(invalid_parameter(
            "map",
            &format!("{width}x{}", rows.len()),
            &format!("dimensions must not exceed {MAX_MAP_DIMENSION}"),
        ));
    }

    let mut cells = Vec::with_capacity(width * rows.len());
    for (index, row) in rows.iter().enumerate() {
        let line = index + 1;
        let count = row.chars().count();
        if count != width {
            return Err(invalid_map(
                line,
                &format!("expected {width} cells, found {count}"),
            ));
        }
        for c in row.chars() {
            if c.is_whitespace() || c.is_control() {
                return Err(invalid_map(line, &format!("unexpected character {c:?}")));
            }
            cells.push(Tile::from_char(c));
        }
    }

    Grid::from_vec(width, rows.len(), cells)
}

/// Load a map from disk; `.png` files are read as images
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn load_map(path: &Path) -> Result<Grid<Tile>> {
    let is_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if is_png {
        return load_image_map(path);
    }

    let text = std::fs::read_to_string(path).with_path(path, "read map")?;
    parse_map(&text)
}

/// Overlay glyphs for a search result
///
/// Later entries win: expanded nodes, then the path, then start and goal.
pub fn path_overlay(forward_path: &[Position], expanded: &[Position]) -> Vec<(Position, char)> {
    let mut overlay: Vec<(Position, char)> = expanded.iter().map(|&p| (p, EXPANDED_CHAR)).collect();
    overlay.extend(forward_path.iter().map(|&p| (p, PATH_CHAR)));
    if let Some(&start) = forward_path.first() {
        overlay.push((start, START_CHAR));
    }
    if let Some(&goal) = forward_path.last() {
        overlay.push((goal, GOAL_CHAR));
    }
    overlay
}

/// Render a map as text, drawing overlay glyphs on top
///
/// Overlay positions outside the map are ignored.
pub fn render_map(grid: &Grid<Tile>, overlay: &[(Position, char)]) -> String {
    let mut glyphs = Grid::from_fn(grid.width() as i32, grid.height() as i32, |p| {
        grid.element(p).to_char()
    });
    for &(position, glyph) in overlay {
        glyphs.set(position, glyph);
    }

    let mut text = String::with_capacity((grid.width() + 1) * grid.height());
    for row in glyphs.rows() {
        text.extend(row.iter());
        text.push('\n');
    }
    text
}

#[cfg(test)]
#[path = "../../tests/unit/io/map.rs"]
mod unit;
