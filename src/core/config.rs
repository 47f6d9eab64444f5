//! Session configuration.
//!
//! A game is configured once at startup with:
//! - `size`: board dimension N (N×N cells, at least 1)
//! - `difficulty`: probability that each cell starts lit
//! - `seed`: optional RNG seed; `None` draws one from OS entropy
//!
//! Values are fixed for the lifetime of a session.

use serde::{Deserialize, Serialize};

use super::error::{GridError, Result};
use super::grid::Grid;

/// Default board dimension.
pub const DEFAULT_SIZE: usize = 3;

/// Default initial lit-probability.
pub const DEFAULT_DIFFICULTY: f64 = 0.3;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board dimension N.
    pub size: usize,

    /// Chance each cell starts lit.
    ///
    /// Not range checked: values `<= 0` light nothing, values `>= 1`
    /// light everything.
    pub difficulty: f64,

    /// RNG seed for reproducible boards.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            difficulty: DEFAULT_DIFFICULTY,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board dimension.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the initial lit-probability.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: f64) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse a configuration from TOML. Missing keys take default values.
    ///
    /// ```
    /// use lights_out::core::GameConfig;
    ///
    /// let config = GameConfig::from_toml_str("size = 5\nseed = 7").unwrap();
    /// assert_eq!(config.size, 5);
    /// assert_eq!(config.seed, Some(7));
    /// assert_eq!(config.difficulty, 0.3);
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration can produce a board.
    ///
    /// Rejects `size == 0` and sizes whose N² cell count overflows.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(GridError::dimension(0, 0));
        }
        Grid::cell_count_for(self.size)?;
        if !(0.0..=1.0).contains(&self.difficulty) {
            tracing::warn!(
                difficulty = self.difficulty,
                "difficulty outside [0, 1]; lit probability will saturate"
            );
        }
        Ok(())
    }
}
