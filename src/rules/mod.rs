//! Lights Out rules.
//!
//! - Board generation from size and difficulty
//! - Plus-shaped toggles
//! - Win detection, always recomputed from the board

pub mod engine;

pub use engine::{create_initial_grid, is_won, toggle, GameStatus, GridEngine};
