//! Core types: players, positions, configuration, errors, RNG.
//!
//! These are the game-agnostic building blocks shared by the board, the
//! rules engine, the bots, and the match runner.

pub mod config;
pub mod error;
pub mod player;
pub mod position;
pub mod rng;

pub use config::{GameConfig, CLASSIC_SIDE};
pub use error::{Result, ReversiError};
pub use player::{PlayerId, PlayerMap};
pub use position::{ParsePosError, Pos};
pub use rng::GameRng;
