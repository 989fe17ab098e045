//! Error types for the simulation.
//!
//! Uses `thiserror` for typed errors. Grid construction is the only checked
//! precondition of the simulation itself; everything else that can fail is
//! configuration loading at startup.

use crate::config::ConfigError;

/// Errors raised when constructing a grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Width or height was zero.
    #[error("invalid grid dimensions {width}x{height}: both sides must be non-zero")]
    InvalidDimensions {
        /// Requested width in cells.
        width: usize,
        /// Requested height in cells.
        height: usize,
    },

    /// A text pattern had no rows or an empty first row.
    #[error("pattern is empty")]
    EmptyPattern,

    /// A text pattern row did not match the width of the first row.
    #[error("pattern row {row} has {found} cells, expected {expected}")]
    RaggedPattern {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
}

/// Top-level application error surfaced from `main`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration could not be loaded or failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The configured grid could not be built.
    #[error(transparent)]
    Grid(#[from] GridError),
}
