//! Match configuration.

use serde::{Deserialize, Serialize};

use crate::core::GameConfig;

/// Configuration for a series of bot-vs-bot games.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play.
    pub num_games: usize,

    /// Board and player setup used for every game.
    pub game: GameConfig,

    /// Master seed. Each game forks its own stream from it.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 100,
            game: GameConfig::othello(),
            seed: 42,
        }
    }
}

impl MatchConfig {
    /// Create a new match config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    pub fn with_games(mut self, num_games: usize) -> Self {
        self.num_games = num_games;
        self
    }

    /// Set the board and player setup.
    pub fn with_game_config(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }

    /// Set the master seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Upper bound on moves in one game. Every move fills an empty cell.
    #[must_use]
    pub fn max_moves(&self) -> usize {
        self.game.cell_count()
    }
}
