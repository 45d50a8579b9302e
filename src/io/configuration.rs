//! Search defaults, map characters and output settings

// Search settings
/// Node expansions per cooperative resume call
pub const DEFAULT_THROTTLE: usize = 100;

/// Upper bound accepted for a map dimension when loading from disk
pub const MAX_MAP_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible sampling
pub const DEFAULT_SEED: u64 = 42;

/// Default number of positions drawn by the sample command
pub const DEFAULT_SAMPLE_COUNT: usize = 5;

// Text map characters
/// Traversable cell
pub const OPEN_CHAR: char = '.';
/// Impassable cell
pub const WALL_CHAR: char = '#';
/// Path overlay
pub const PATH_CHAR: char = '*';
/// Start overlay
pub const START_CHAR: char = 'S';
/// Goal overlay
pub const GOAL_CHAR: char = 'G';
/// Expanded node overlay when tracing
pub const EXPANDED_CHAR: char = '+';

// Image map settings
/// Channel value at or above which an opaque pixel counts as open
pub const OPEN_PIXEL_THRESHOLD: u8 = 200;
/// Alpha at or below which a pixel counts as open
pub const TRANSPARENT_ALPHA: u8 = 16;

// Overlay colours (RGBA)
/// Open cell colour
pub const OPEN_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Wall colour
pub const WALL_COLOR: [u8; 4] = [32, 32, 32, 255];
/// Marker colour
pub const MARKER_COLOR: [u8; 4] = [120, 120, 200, 255];
/// Path colour
pub const PATH_COLOR: [u8; 4] = [220, 60, 60, 255];
/// Start colour
pub const START_COLOR: [u8; 4] = [40, 180, 70, 255];
/// Goal colour
pub const GOAL_COLOR: [u8; 4] = [40, 90, 220, 255];
/// Expanded node colour
pub const EXPANDED_COLOR: [u8; 4] = [250, 210, 120, 255];

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// Spinner refresh interval in milliseconds
pub const SPINNER_TICK_MS: u64 = 80;

#[cfg(test)]
#[path = "../../tests/unit/io/configuration.rs"]
mod unit;
