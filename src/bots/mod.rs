//! Bot strategies.
//!
//! Every bot implements [`Strategy`]: given a read-only engine, pick one of
//! the current player's legal moves. Lookahead goes through
//! `ReversiEngine::simulate`, so the live game is never touched.
//!
//! - [`RandomBot`]: uniform over legal moves
//! - [`GreedyBot`]: most pieces after the move
//! - [`TwoPlyBot`]: immediate wins first, then best average after the reply
//!
//! [`Bot`] wraps all three for runtime selection via [`BotKind`].

pub mod bot;
pub mod greedy;
pub mod random;
pub mod strategy;
pub mod two_ply;

pub use bot::{Bot, BotKind, ParseBotKindError};
pub use greedy::GreedyBot;
pub use random::RandomBot;
pub use strategy::Strategy;
pub use two_ply::TwoPlyBot;
