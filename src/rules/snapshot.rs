//! Serializable game snapshots.
//!
//! A snapshot is the canonical grid-of-optional-ids plus the turn and the
//! parameters needed to rebuild the game. JSON is the exchange format for
//! GUI and network collaborators (`null` for empty cells, player numbers
//! otherwise); bincode is the compact on-disk form.

use serde::{Deserialize, Serialize};

use crate::board::Grid;
use crate::core::{PlayerId, Result};

/// Everything needed to resume a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub side: usize,
    pub num_players: usize,
    #[serde(default)]
    pub othello: bool,
    pub turn: PlayerId,
    pub grid: Grid,
}

impl GameSnapshot {
    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON. Only the shape is checked here; game-level
    /// validation happens when the snapshot is loaded into an engine.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
