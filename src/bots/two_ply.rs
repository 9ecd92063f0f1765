//! Two-ply lookahead: score each move by the average position after the reply.

use log::trace;

use crate::core::{PlayerId, Pos};
use crate::rules::ReversiEngine;

use super::strategy::Strategy;

/// Looks one reply ahead.
///
/// For each candidate move, in order:
/// 1. If the move ends the game with the mover as sole leader, play it.
/// 2. If nobody can reply, play it.
/// 3. Otherwise score it as the mover's piece count averaged (integer
///    division) over every reply of whoever moves next.
///
/// The highest score wins; a later candidate must score strictly higher to
/// displace an earlier one.
#[derive(Clone, Debug)]
pub struct TwoPlyBot {
    player: PlayerId,
}

impl TwoPlyBot {
    pub fn new(player: PlayerId) -> Self {
        Self { player }
    }

    /// Mean piece count for `mover` across every reply available in `position`.
    fn reply_average(position: &ReversiEngine, replies: &[Pos], mover: PlayerId) -> usize {
        let total: usize = replies
            .iter()
            .filter_map(|reply| position.simulate(&[*reply]).ok())
            .map(|after| after.count(mover))
            .sum();
        total / replies.len()
    }
}

impl Strategy for TwoPlyBot {
    fn player(&self) -> PlayerId {
        self.player
    }

    fn name(&self) -> &'static str {
        "two-ply"
    }

    fn choose(&mut self, engine: &ReversiEngine) -> Option<Pos> {
        let mover = engine.turn();
        let moves = engine.available_moves();
        if moves.is_empty() {
            return None;
        }

        let mut best_index = 0;
        let mut best_score = 0;
        for (index, mv) in moves.iter().enumerate() {
            let Ok(position) = engine.simulate(&[*mv]) else {
                continue;
            };

            if position.outcome().as_slice() == [mover] {
                trace!("{} takes winning move {}", mover, mv);
                return Some(*mv);
            }

            let replies = position.available_moves();
            if replies.is_empty() {
                trace!("{} takes {} leaving no replies", mover, mv);
                return Some(*mv);
            }

            let score = Self::reply_average(&position, &replies, mover);
            if score > best_score {
                best_score = score;
                best_index = index;
            }
        }

        moves.get(best_index).copied()
    }
}
