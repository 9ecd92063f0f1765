//! Game configuration.
//!
//! A game is fully described by three parameters:
//! - `side`: squares per board edge
//! - `num_players`: how many piece identities take turns
//! - `othello`: whether to seed the classic 2-player starting cross
//!
//! `side` and `num_players` must share parity so that the center block is
//! symmetric around the board's midpoint.

use serde::{Deserialize, Serialize};

use super::error::{Result, ReversiError};

/// Side length of the classic Othello board.
pub const CLASSIC_SIDE: usize = 8;

/// Complete game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of squares on each side of the board.
    pub side: usize,

    /// Number of players (1-255).
    pub num_players: usize,

    /// Seed the board with the 4-piece Othello cross (2 players only).
    pub othello: bool,
}

impl Default for GameConfig {
    /// The classic 8×8 two-player Othello start.
    fn default() -> Self {
        Self::othello()
    }
}

impl GameConfig {
    /// Create a configuration with an empty starting board.
    #[must_use]
    pub const fn new(side: usize, num_players: usize) -> Self {
        Self {
            side,
            num_players,
            othello: false,
        }
    }

    /// The classic 8×8 two-player Othello configuration.
    #[must_use]
    pub const fn othello() -> Self {
        Self {
            side: CLASSIC_SIDE,
            num_players: 2,
            othello: true,
        }
    }

    /// Enable or disable the Othello starting cross.
    #[must_use]
    pub fn with_othello(mut self, othello: bool) -> Self {
        self.othello = othello;
        self
    }

    /// Check the construction invariants.
    pub fn validate(&self) -> Result<()> {
        if self.side == 0 {
            return Err(ReversiError::InvalidConstruction(
                "board side must be at least 1".into(),
            ));
        }
        if self.num_players == 0 {
            return Err(ReversiError::InvalidConstruction(
                "must have at least 1 player".into(),
            ));
        }
        if self.num_players > 255 {
            return Err(ReversiError::InvalidConstruction(
                "at most 255 players supported".into(),
            ));
        }
        if self.side % 2 != self.num_players % 2 {
            return Err(ReversiError::InvalidConstruction(format!(
                "side {} and {} players must both be even or both be odd",
                self.side, self.num_players
            )));
        }
        if self.othello && self.num_players != 2 {
            return Err(ReversiError::InvalidConstruction(format!(
                "othello start requires 2 players, got {}",
                self.num_players
            )));
        }
        Ok(())
    }

    /// Number of squares on the board.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.side * self.side
    }
}
