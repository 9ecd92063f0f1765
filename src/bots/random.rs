//! Uniformly random move selection.

use crate::core::{GameRng, PlayerId, Pos};
use crate::rules::ReversiEngine;

use super::strategy::Strategy;

/// Plays a uniformly random legal move.
#[derive(Clone, Debug)]
pub struct RandomBot {
    player: PlayerId,
    rng: GameRng,
}

impl RandomBot {
    pub fn new(player: PlayerId, seed: u64) -> Self {
        Self {
            player,
            rng: GameRng::new(seed),
        }
    }

    /// Use an existing RNG stream.
    pub fn with_rng(player: PlayerId, rng: GameRng) -> Self {
        Self { player, rng }
    }
}

impl Strategy for RandomBot {
    fn player(&self) -> PlayerId {
        self.player
    }

    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&mut self, engine: &ReversiEngine) -> Option<Pos> {
        let moves = engine.available_moves();
        self.rng.choose(&moves).copied()
    }
}
