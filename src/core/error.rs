//! Error type shared by the board, engine, bots, and match runner.
//!
//! Every error is reported synchronously at the offending call. Validation
//! always runs before any write, so a returned error means the receiver is
//! unchanged.

use super::player::PlayerId;
use super::position::Pos;

/// Errors raised by the Reversi engine and its collaborators.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ReversiError {
    /// Position outside `[0, side)²`.
    #[error("position {pos} is outside a {side}x{side} board")]
    OutOfBounds { pos: Pos, side: usize },

    /// Position on the board but not legal for the acting player.
    #[error("{player} cannot move at {pos}")]
    IllegalMove { pos: Pos, player: PlayerId },

    /// Bad construction parameters (parity mismatch, Othello for != 2 players, ...).
    #[error("invalid game construction: {0}")]
    InvalidConstruction(String),

    /// A loaded turn or grid is inconsistent with the game.
    #[error("invalid game state: {0}")]
    InvalidState(String),

    /// A snapshot could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ReversiError {
    fn from(err: serde_json::Error) -> Self {
        ReversiError::Serialization(err.to_string())
    }
}

impl From<bincode::Error> for ReversiError {
    fn from(err: bincode::Error) -> Self {
        ReversiError::Serialization(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ReversiError>;
