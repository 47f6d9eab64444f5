//! A single game session: one board, its clicks, and its derived status.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::grid::Grid;
use crate::core::position::Position;
use crate::core::rng::{GameRng, GameRngState};
use crate::rules::{GameStatus, GridEngine};

/// Owns the board for one game.
///
/// Clicks are applied one at a time; status is recomputed after each.
/// Clicking after a win is allowed and may relight the board.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    grid: Grid,
    /// Clicks in order. Persistent vector so snapshots clone in O(1).
    moves: Vector<Position>,
    /// Engine RNG after this board was generated.
    rng: GameRngState,
}

impl GameSession {
    /// Start a session on a freshly generated board.
    pub fn new(config: GameConfig) -> Result<Self> {
        let mut engine = GridEngine::new(config)?;
        let grid = engine.create_initial_grid()?;
        Ok(Self {
            config: engine.config().clone(),
            grid,
            moves: Vector::new(),
            rng: engine.state(),
        })
    }

    /// Start a session on a prepared board.
    ///
    /// The board's own dimension wins over `config.size`. The RNG is
    /// seeded from `config.seed`, or from entropy when unset.
    #[must_use]
    pub fn with_grid(mut config: GameConfig, grid: Grid) -> Self {
        config.size = grid.size();
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self {
            config,
            grid,
            moves: Vector::new(),
            rng: rng.state(),
        }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the current board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Clicks applied so far.
    #[must_use]
    pub fn moves(&self) -> &Vector<Position> {
        &self.moves
    }

    /// RNG position to resume board generation from.
    #[must_use]
    pub fn rng_state(&self) -> &GameRngState {
        &self.rng
    }

    /// An engine that continues this session's RNG stream.
    ///
    /// Its next board is the one that would have followed this session's.
    pub fn engine(&self) -> Result<GridEngine> {
        GridEngine::from_state(self.config.clone(), &self.rng)
    }

    #[must_use]
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        GameStatus::of(&self.grid)
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status().is_won()
    }

    /// Toggle `pos` and report the resulting status.
    ///
    /// An out-of-bounds click is rejected and not recorded.
    pub fn click(&mut self, pos: Position) -> Result<GameStatus> {
        let before = self.status();
        crate::rules::toggle(&mut self.grid, pos)?;
        self.moves.push_back(pos);

        let after = self.status();
        if after != before {
            tracing::info!(from = %before, to = %after, moves = self.moves.len(), "status changed");
        }
        Ok(after)
    }

    /// Capture the session for later restore.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            config: self.config.clone(),
            grid: self.grid.clone(),
            moves: self.moves.clone(),
            rng: self.rng.clone(),
        }
    }

    /// Rebuild a session from a snapshot.
    ///
    /// Fails with `InvalidDimension` when the snapshot board is empty, since
    /// no config can describe it.
    pub fn restore(snapshot: SessionSnapshot) -> Result<Self> {
        let SessionSnapshot { mut config, grid, moves, rng } = snapshot;
        config.size = grid.size();
        config.validate()?;
        Ok(Self { config, grid, moves, rng })
    }
}

/// Serializable session state.
///
/// The grid is shape-checked when deserialized, so a restored session
/// always holds a square board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub config: GameConfig,
    pub grid: Grid,
    pub moves: Vector<Position>,
    pub rng: GameRngState,
}

impl SessionSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
