//! Error type shared by the grid, engine, and session layers.

use thiserror::Error;

use super::position::Position;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors raised when a caller hands the engine something it cannot use.
#[derive(Debug, Error)]
pub enum GridError {
    /// Grid shape is not a non-degenerate square.
    #[error("invalid grid dimension: {rows} rows x {cols} columns")]
    InvalidDimension { rows: usize, cols: usize },

    /// Position lies outside the grid.
    #[error("position {position} is outside a {size}x{size} grid")]
    InvalidPosition { position: Position, size: usize },

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}

impl GridError {
    #[must_use]
    pub fn dimension(rows: usize, cols: usize) -> Self {
        Self::InvalidDimension { rows, cols }
    }

    #[must_use]
    pub fn position(position: Position, size: usize) -> Self {
        Self::InvalidPosition { position, size }
    }
}
