//! Board coordinates.
//!
//! A [`Pos`] is a 0-indexed `(row, col)` pair. Positions are not tied to a
//! board size; bounds are checked by whoever owns the board.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A square on the board, 0-indexed by row then column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    /// Create a position from row and column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether this position lies on a `side × side` board.
    #[must_use]
    pub const fn within(self, side: usize) -> bool {
        self.row < side && self.col < side
    }

    /// Move one square by `(d_row, d_col)`, returning `None` when the step
    /// leaves a `side × side` board.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize, side: usize) -> Option<Pos> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        let next = Pos { row, col };
        next.within(side).then_some(next)
    }

    /// Row-major index of this position on a `side × side` board.
    #[must_use]
    pub const fn to_index(self, side: usize) -> usize {
        self.row * side + self.col
    }

    /// Inverse of [`Pos::to_index`].
    #[must_use]
    pub const fn from_index(index: usize, side: usize) -> Self {
        Self {
            row: index / side,
            col: index % side,
        }
    }

    /// Iterate over every position of a `side × side` board in row-major order.
    pub fn all(side: usize) -> impl Iterator<Item = Pos> {
        (0..side).flat_map(move |row| (0..side).map(move |col| Pos { row, col }))
    }
}

impl From<(usize, usize)> for Pos {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Pos> for (usize, usize) {
    fn from(pos: Pos) -> Self {
        (pos.row, pos.col)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParsePosError;

impl fmt::Display for ParsePosError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid position string")
    }
}

impl std::error::Error for ParsePosError {}

/// Parse `"row,col"`, optionally wrapped in parentheses (`"(2, 3)"`).
impl FromStr for Pos {
    type Err = ParsePosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')');
        let mut parts = inner.split(',');

        let row = parts
            .next()
            .ok_or(ParsePosError)?
            .trim()
            .parse()
            .map_err(|_| ParsePosError)?;
        let col = parts
            .next()
            .ok_or(ParsePosError)?
            .trim()
            .parse()
            .map_err(|_| ParsePosError)?;

        if parts.next().is_some() {
            return Err(ParsePosError);
        }

        Ok(Self { row, col })
    }
}
