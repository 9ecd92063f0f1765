//! Square grid of player-tagged pieces with per-player occupancy counts.
//!
//! The board knows nothing about rules: it stores pieces, answers "who is
//! here", and keeps every player's piece count in step with the grid.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{PlayerId, PlayerMap, Pos, Result, ReversiError};

/// Grid-of-optional-ids shape used to exchange board contents with
/// collaborators (GUI, network, persistence).
pub type Grid = Vec<Vec<Option<PlayerId>>>;

/// A `side × side` grid of optional pieces.
///
/// Cells live in an `im::Vector`, so cloning a board for a simulated branch
/// is O(1) and writes to the clone never reach the original.
///
/// Invariant: `counts[p]` equals the number of cells holding `p`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    side: usize,
    cells: Vector<Option<PlayerId>>,
    counts: PlayerMap<usize>,
}

impl Board {
    /// Create an empty board for `num_players` players.
    ///
    /// # Panics
    ///
    /// Panics if `num_players` is 0 or above 255.
    #[must_use]
    pub fn new(side: usize, num_players: usize) -> Self {
        Self {
            side,
            cells: std::iter::repeat(None).take(side * side).collect(),
            counts: PlayerMap::with_value(num_players, 0),
        }
    }

    /// Build a board from a grid, recounting every piece.
    ///
    /// Fails with `InvalidState` if the grid is not `side × side` or holds a
    /// player id outside `[1, num_players]`.
    pub fn from_grid(
        side: usize,
        num_players: usize,
        grid: &[Vec<Option<PlayerId>>],
    ) -> Result<Self> {
        if grid.len() != side {
            return Err(ReversiError::InvalidState(format!(
                "grid has {} rows, expected {}",
                grid.len(),
                side
            )));
        }

        let mut board = Self::new(side, num_players);
        for (row, cells) in grid.iter().enumerate() {
            if cells.len() != side {
                return Err(ReversiError::InvalidState(format!(
                    "grid row {} has {} cells, expected {}",
                    row,
                    cells.len(),
                    side
                )));
            }
            for (col, cell) in cells.iter().enumerate() {
                if let Some(player) = *cell {
                    if !player.is_valid_for(num_players) {
                        return Err(ReversiError::InvalidState(format!(
                            "cell ({}, {}) holds player {} in a {}-player game",
                            row, col, player.0, num_players
                        )));
                    }
                    board.place(Pos::new(row, col), player)?;
                }
            }
        }

        Ok(board)
    }

    /// Squares per side.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of players this board keeps counts for.
    #[must_use]
    pub fn num_players(&self) -> usize {
        self.counts.player_count()
    }

    /// Check whether `pos` lies on this board.
    #[must_use]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.within(self.side)
    }

    fn check_bounds(&self, pos: Pos) -> Result<()> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(ReversiError::OutOfBounds {
                pos,
                side: self.side,
            })
        }
    }

    /// The piece at `pos`, if any.
    pub fn piece_at(&self, pos: Pos) -> Result<Option<PlayerId>> {
        self.check_bounds(pos)?;
        Ok(self.cells[pos.to_index(self.side)])
    }

    /// Unchecked read for callers that already know `pos` is on the board.
    #[inline]
    pub(crate) fn get(&self, pos: Pos) -> Option<PlayerId> {
        self.cells[pos.to_index(self.side)]
    }

    /// Write `player`'s piece at `pos`, replacing any previous occupant.
    ///
    /// No legality check: that is the engine's job. Counts are updated in the
    /// same step as the cell.
    pub fn place(&mut self, pos: Pos, player: PlayerId) -> Result<()> {
        self.check_bounds(pos)?;
        if !player.is_valid_for(self.num_players()) {
            return Err(ReversiError::InvalidState(format!(
                "{} is not part of a {}-player game",
                player,
                self.num_players()
            )));
        }

        let index = pos.to_index(self.side);
        if let Some(previous) = self.cells[index] {
            let count = &mut self.counts[previous];
            debug_assert!(*count > 0, "occupancy count out of sync");
            *count = count.saturating_sub(1);
        }
        self.counts[player] += 1;
        self.cells.set(index, Some(player));
        Ok(())
    }

    /// Every position currently holding one of `player`'s pieces, row-major.
    #[must_use]
    pub fn locations(&self, player: PlayerId) -> Vec<Pos> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Some(player))
            .map(|(i, _)| Pos::from_index(i, self.side))
            .collect()
    }

    /// How many pieces `player` has on the board (0 for unknown players).
    #[must_use]
    pub fn count(&self, player: PlayerId) -> usize {
        self.counts.get(player).copied().unwrap_or(0)
    }

    /// Per-player piece counts.
    #[must_use]
    pub fn counts(&self) -> &PlayerMap<usize> {
        &self.counts
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empties(&self) -> usize {
        self.cells.len() - self.occupied()
    }

    /// Copy out the board as rows of optional player ids.
    #[must_use]
    pub fn grid(&self) -> Grid {
        (0..self.side)
            .map(|row| {
                (0..self.side)
                    .map(|col| self.get(Pos::new(row, col)))
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.side {
            write!(f, "{:>2}", col % 100)?;
        }
        for row in 0..self.side {
            write!(f, "\n{:>3}", row % 1000)?;
            for col in 0..self.side {
                match self.get(Pos::new(row, col)) {
                    Some(player) if player.0 < 10 => write!(f, " {}", player.0)?,
                    Some(player) => write!(f, "{:>2}", (b'a' + (player.0 - 10) % 26) as char)?,
                    None => write!(f, " .")?,
                }
            }
        }
        writeln!(f)
    }
}
