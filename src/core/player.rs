//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe, 1-based player identifier supporting 1-255 players.
//! Player ids double as the piece tags written into board cells.
//!
//! ## PlayerMap
//!
//! Efficient per-player data storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Player identifier supporting 1-255 players.
///
/// Player ids are 1-based: the first player is `PlayerId(1)`.
/// `PlayerId(0)` is never a valid player; use [`PlayerId::is_valid_for`]
/// before trusting ids that come from outside the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The player who moves first in every new game.
    pub const FIRST: PlayerId = PlayerId(1);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw 1-based player number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Get the 0-based storage index of this player.
    ///
    /// Only meaningful for valid ids (`self.0 >= 1`).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Check whether this id names a player in a game of `player_count` players.
    #[must_use]
    pub const fn is_valid_for(self, player_count: usize) -> bool {
        self.0 >= 1 && (self.0 as usize) <= player_count
    }

    /// The player after this one in cyclic turn order.
    ///
    /// ```
    /// use reversi_arena::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(1).next(3), PlayerId::new(2));
    /// assert_eq!(PlayerId::new(3).next(3), PlayerId::new(1));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> PlayerId {
        if self.0 as usize >= player_count {
            PlayerId::FIRST
        } else {
            PlayerId(self.0 + 1)
        }
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use reversi_arena::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(1));
    /// assert_eq!(players[3], PlayerId::new(4));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (1..=player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player.
/// Use `PlayerMap::new()` to create with a factory function,
/// or `PlayerMap::with_value()` to initialize all entries to the same value.
///
/// ## Example
///
/// ```
/// use reversi_arena::core::{PlayerId, PlayerMap};
///
/// let mut pieces: PlayerMap<usize> = PlayerMap::with_value(4, 0);
/// pieces[PlayerId::new(2)] += 3;
/// assert_eq!(pieces[PlayerId::new(2)], 3);
/// assert_eq!(pieces[PlayerId::new(1)], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = PlayerId::all(player_count).map(factory).collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data, or `None` for unknown players.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        if player.is_valid_for(self.data.len()) {
            self.data.get(player.index())
        } else {
            None
        }
    }

    /// Get a mutable reference to a player's data, or `None` for unknown players.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        if player.is_valid_for(self.data.len()) {
            self.data.get_mut(player.index())
        } else {
            None
        }
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8 + 1), v))
    }
}

impl<T> PlayerMap<Option<T>> {
    /// `Some` only if every player has a value.
    pub fn transpose(self) -> Option<PlayerMap<T>> {
        let data = self.data.into_iter().collect::<Option<Vec<T>>>()?;
        Some(PlayerMap { data })
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
