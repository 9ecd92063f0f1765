//! # reversi-arena
//!
//! A generalised Reversi engine for any square board and any number of
//! players, with simple bots and a match runner for evaluating them.
//!
//! ## Design Principles
//!
//! 1. **N-Player First**: Every rule is stated for `num_players` players.
//!    Classic Othello is just the 8×8, two-player configuration.
//!
//! 2. **Validate Before Write**: Rejected moves and loads leave the engine
//!    exactly as it was.
//!
//! 3. **Lookahead Without Mutation**: Bots explore through
//!    `ReversiEngine::simulate`, which returns an independent copy.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: the board is an `im::Vector`, so the
//!   copies made by `simulate` are O(1) until written.
//!
//! - **Center Rule**: the cells nearest the middle must all be filled before
//!   any move elsewhere, and placing into one flips nothing.
//!
//! ## Modules
//!
//! - `core`: players, positions, configuration, errors, RNG
//! - `board`: the grid, piece counts, and direction walks
//! - `rules`: `ReversiEngine`, results, snapshots
//! - `bots`: random, greedy, and two-ply strategies
//! - `arena`: bot-vs-bot matches and win/tie statistics
//!
//! ```
//! use reversi_arena::{GameConfig, Pos, ReversiEngine};
//!
//! let mut engine = ReversiEngine::new(GameConfig::othello()).unwrap();
//! engine.apply_move(Pos::new(2, 3)).unwrap();
//! assert_eq!(engine.count(reversi_arena::PlayerId::new(1)), 4);
//! ```

pub mod arena;
pub mod board;
pub mod bots;
pub mod core;
pub mod rules;

pub use crate::core::{
    GameConfig, GameRng, ParsePosError, PlayerId, PlayerMap, Pos, Result, ReversiError,
    CLASSIC_SIDE,
};

pub use crate::board::{Board, Direction, Grid};

pub use crate::rules::{GameResult, GameSnapshot, GameStatus, Outcome, ReversiEngine};

pub use crate::bots::{Bot, BotKind, GreedyBot, RandomBot, Strategy, TwoPlyBot};

pub use crate::arena::{run_match, BotRecord, MatchConfig, MatchReport, MatchRunner};
