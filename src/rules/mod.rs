//! Reversi rules: the game state machine and its results.
//!
//! - `ReversiEngine`: legality, move application, turn skipping,
//!   termination, loading, and side-effect-free simulation
//! - `GameStatus` / `GameResult` / `Outcome`: where a game stands and who won
//! - `GameSnapshot`: serializable board + turn for persistence and transport

pub mod engine;
pub mod result;
pub mod snapshot;

pub use engine::ReversiEngine;
pub use result::{GameResult, GameStatus, Outcome};
pub use snapshot::GameSnapshot;
