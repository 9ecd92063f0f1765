//! The decision interface every bot implements.

use crate::core::{PlayerId, Pos};
use crate::rules::ReversiEngine;

/// Picks a move for whoever's turn it is.
///
/// Strategies only read the engine; any lookahead goes through
/// [`ReversiEngine::simulate`], which never touches the live game.
pub trait Strategy {
    /// The seat this bot was assigned.
    fn player(&self) -> PlayerId;

    /// Short name for reports and logs.
    fn name(&self) -> &'static str;

    /// Choose one of `engine.available_moves()`.
    ///
    /// Returns `None` if the current player has no legal move (including
    /// when the game is over).
    fn choose(&mut self, engine: &ReversiEngine) -> Option<Pos>;
}
