//! Bot-vs-bot matches.
//!
//! - `MatchConfig`: game count, board setup, master seed
//! - `MatchRunner`: seats one bot per player and plays the games
//! - `MatchReport` / `BotRecord`: wins and ties per seat

pub mod config;
pub mod runner;
pub mod stats;

pub use config::MatchConfig;
pub use runner::{run_match, MatchRunner};
pub use stats::{BotRecord, MatchReport};
