//! Single-ply greedy selection: maximise own piece count after the move.

use crate::core::{PlayerId, Pos};
use crate::rules::ReversiEngine;

use super::strategy::Strategy;

/// Plays the move that leaves the mover with the most pieces.
///
/// Ties go to the earliest move in row-major order.
#[derive(Clone, Debug)]
pub struct GreedyBot {
    player: PlayerId,
}

impl GreedyBot {
    pub fn new(player: PlayerId) -> Self {
        Self { player }
    }
}

impl Strategy for GreedyBot {
    fn player(&self) -> PlayerId {
        self.player
    }

    fn name(&self) -> &'static str {
        "greedy"
    }

    fn choose(&mut self, engine: &ReversiEngine) -> Option<Pos> {
        let mover = engine.turn();
        let moves = engine.available_moves();

        let mut best = *moves.first()?;
        let mut best_count = engine.count(mover);
        for mv in moves {
            let Ok(next) = engine.simulate(&[mv]) else {
                continue;
            };
            let count = next.count(mover);
            if count > best_count {
                best = mv;
                best_count = count;
            }
        }
        Some(best)
    }
}
