//! Game sessions.
//!
//! A session owns exactly one board and applies clicks serially. Each click
//! runs a toggle and then recomputes the status:
//!
//! ```text
//! Playing --click clears board--> Won
//! Won     --click relights-----> Playing
//! ```

mod game;

pub use game::{GameSession, SessionSnapshot};
