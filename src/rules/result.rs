//! Game status and final results.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlayerId;

/// Player ids tied for the most pieces at the end of a game.
///
/// SmallVec keeps the common 1-4 leader case off the heap.
pub type Outcome = SmallVec<[PlayerId; 4]>;

/// Where a game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Some player has a legal move; `turn` names one of them.
    InProgress,
    /// No player has a legal move. Terminal.
    Done,
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single player holds the most pieces.
    Winner(PlayerId),
    /// Several players share the most pieces.
    Tie(Outcome),
}

impl GameResult {
    /// Classify an outcome set. `None` for an empty set (game not over).
    #[must_use]
    pub fn from_outcome(outcome: &[PlayerId]) -> Option<Self> {
        match outcome {
            [] => None,
            [winner] => Some(GameResult::Winner(*winner)),
            tied => Some(GameResult::Tie(tied.iter().copied().collect())),
        }
    }

    /// Check if a player won outright.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Check if a player shared a tie.
    #[must_use]
    pub fn is_tied(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Tie(players) => players.contains(&player),
            GameResult::Winner(_) => false,
        }
    }

    /// Every player in the outcome set.
    #[must_use]
    pub fn players(&self) -> &[PlayerId] {
        match self {
            GameResult::Winner(p) => std::slice::from_ref(p),
            GameResult::Tie(players) => players,
        }
    }
}
