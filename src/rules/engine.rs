//! Grid engine: board generation, toggles, and win detection.
//!
//! The free functions are the whole rule set. `GridEngine` bundles them with
//! a validated config and a seeded RNG for callers that want one handle.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::GameConfig;
use crate::core::error::{GridError, Result};
use crate::core::grid::Grid;
use crate::core::position::Position;
use crate::core::rng::{GameRng, GameRngState};

/// Whether a board is still being played or has been cleared.
///
/// Always derived from the board; never stored alongside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// At least one light is on.
    Playing,
    /// Every light is off.
    Won,
}

impl GameStatus {
    /// Status of `grid`.
    #[must_use]
    pub fn of(grid: &Grid) -> Self {
        if is_won(grid) {
            Self::Won
        } else {
            Self::Playing
        }
    }

    #[must_use]
    pub fn is_won(self) -> bool {
        self == Self::Won
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Playing => f.write_str("Playing"),
            Self::Won => f.write_str("Won"),
        }
    }
}

/// Generate a starting board, lighting each cell with probability
/// `difficulty`.
///
/// Fails with `InvalidDimension` for `size == 0` or when N² cells cannot
/// be addressed. `difficulty` is not validated.
pub fn create_initial_grid<R: Rng + ?Sized>(
    size: usize,
    difficulty: f64,
    rng: &mut R,
) -> Result<Grid> {
    if size == 0 {
        return Err(GridError::dimension(0, 0));
    }
    let grid = Grid::random(size, difficulty, rng)?;
    tracing::debug!(size, difficulty, lit = grid.lit_count(), "created initial grid");
    Ok(grid)
}

/// Flip `pos` and its in-bounds orthogonal neighbours in place.
pub fn toggle(grid: &mut Grid, pos: Position) -> Result<()> {
    grid.toggle(pos)?;
    tracing::debug!(%pos, lit = grid.lit_count(), "toggled");
    Ok(())
}

/// True iff every cell is unlit.
#[must_use]
pub fn is_won(grid: &Grid) -> bool {
    grid.is_won()
}

/// Config plus RNG, producing and evolving boards.
#[derive(Clone, Debug)]
pub struct GridEngine {
    config: GameConfig,
    rng: GameRng,
}

impl GridEngine {
    /// Create an engine. Seeds from `config.seed`, or from entropy when unset.
    pub fn new(config: GameConfig) -> Result<Self> {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::with_rng(config, rng)
    }

    /// Create an engine with an explicit random source.
    pub fn with_rng(config: GameConfig, rng: GameRng) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Resume an engine from a saved RNG state.
    ///
    /// The next board it generates is the one the saved engine would have
    /// generated next.
    pub fn from_state(config: GameConfig, state: &GameRngState) -> Result<Self> {
        Self::with_rng(config, GameRng::from_state(state))
    }

    /// Get the RNG, e.g. to read back an entropy-drawn seed.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// Capture the RNG position for a later [`GridEngine::from_state`].
    #[must_use]
    pub fn state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Generate a fresh board from the configured size and difficulty.
    ///
    /// Each board draws from its own fork of the engine RNG, so successive
    /// boards differ and board k depends only on the seed and k.
    pub fn create_initial_grid(&mut self) -> Result<Grid> {
        let mut board_rng = self.rng.fork();
        create_initial_grid(self.config.size, self.config.difficulty, &mut board_rng)
    }

    /// Return a toggled copy of `grid`; the input is left unchanged.
    pub fn toggle(&self, grid: &Grid, pos: Position) -> Result<Grid> {
        let mut next = grid.clone();
        toggle(&mut next, pos)?;
        Ok(next)
    }

    #[must_use]
    pub fn is_won(&self, grid: &Grid) -> bool {
        is_won(grid)
    }

    #[must_use]
    pub fn status(&self, grid: &Grid) -> GameStatus {
        GameStatus::of(grid)
    }
}
