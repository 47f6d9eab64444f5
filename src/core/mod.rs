//! Core types: positions, the board, configuration, RNG, and errors.
//!
//! Nothing here knows about win conditions or sessions; see `rules` and
//! `session` for those.

pub mod config;
pub mod error;
pub mod grid;
pub mod position;
pub mod rng;

pub use config::{GameConfig, DEFAULT_DIFFICULTY, DEFAULT_SIZE};
pub use error::{GridError, Result};
pub use grid::Grid;
pub use position::Position;
pub use rng::{draw_lit, GameRng, GameRngState};
