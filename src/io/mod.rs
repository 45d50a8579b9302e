//! Input/output around the grid core
//!
//! Map files in and rendered maps out, plus the command-line front end,
//! its progress display and the crate's error type.

/// Command-line interface and command dispatch
pub mod cli;
/// Defaults and map characters
pub mod configuration;
/// Error type for the fallible edges
pub mod error;
/// PNG map loading and export
pub mod image;
/// Text map parsing and rendering
pub mod map;
/// Search progress display
pub mod progress;
