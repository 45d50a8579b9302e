//! Error types for the fallible edges: file I/O, map parsing and argument validation
//!
//! Grid, region and search operations never fail; they report "nothing"
//! through `Option`, empty collections or `false`. Only loading, saving
//! and validating outside input produce a [`GridError`].

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for map loading, export and parameter validation
#[derive(Debug)]
pub enum GridError {
    /// Failed to load a map image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered map image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Text map could not be parsed
    InvalidMap {
        /// One-based line number of the offending row
        line: usize,
        /// Explanation of what is wrong with the row
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Cell count does not match the requested dimensions
    ShapeMismatch {
        /// Cells required by the dimensions
        expected: usize,
        /// Cells supplied
        actual: usize,
    },

    /// Position lies outside the grid it was used with
    PositionOutOfBounds {
        /// Offending position as `x,y`
        position: String,
        /// Grid width
        width: usize,
        /// Grid height
        height: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidMap { line, reason } => {
                write!(f, "Invalid map at line {line}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "Expected {expected} cells, got {actual}")
            }
            Self::PositionOutOfBounds {
                position,
                width,
                height,
            } => {
                write!(f, "Position {position} is outside the {width}x{height} grid")
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for fallible operations
pub type Result<T> = std::result::Result<T, GridError>;

/// Attaches the file involved to I/O and image errors
pub trait WithPath<T> {
    /// Record the path and the operation that failed
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<GridError>,
{
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|e| match e.into() {
            GridError::ImageLoad { source, .. } => GridError::ImageLoad {
                path: path.to_path_buf(),
                source,
            },
            GridError::ImageExport { source, .. } => GridError::ImageExport {
                path: path.to_path_buf(),
                source,
            },
            GridError::FileSystem { source, .. } => GridError::FileSystem {
                path: path.to_path_buf(),
                operation,
                source,
            },
            other => other,
        })
    }
}

impl From<image::ImageError> for GridError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a map parsing error
pub fn invalid_map(line: usize, reason: &impl ToString) -> GridError {
    GridError::InvalidMap {
        line,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/io/error.rs"]
mod unit;
