//! # lights-out
//!
//! Engine for the Lights Out puzzle: an N×N board of lights where clicking
//! a cell flips it and its up/down/left/right neighbours. The game is won
//! once every light is off.
//!
//! ## Design Principles
//!
//! 1. **Derived Status**: Win state is always computed from the board,
//!    never cached next to it.
//!
//! 2. **No Shared Cells**: Boards are flat vectors; cloning copies cells,
//!    so a toggled copy never aliases the original.
//!
//! 3. **Seeded Randomness**: Board generation takes any `rand::Rng`;
//!    `GameRng` gives reproducible boards from a seed.
//!
//! ## Modules
//!
//! - `core`: Positions, boards, configuration, RNG, errors
//! - `rules`: Board generation, toggles, win detection
//! - `session`: One game's board, click history, and snapshots
//!
//! ```
//! use lights_out::{GameConfig, GameSession, GameStatus, Position};
//!
//! let mut session = GameSession::new(GameConfig::new().with_size(3).with_seed(42)).unwrap();
//! let status = session.click(Position::new(1, 1)).unwrap();
//! assert_eq!(status, GameStatus::of(session.grid()));
//! ```

pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameRngState, Grid, GridError, Position, Result};

pub use crate::rules::{create_initial_grid, is_won, toggle, GameStatus, GridEngine};

pub use crate::session::{GameSession, SessionSnapshot};
