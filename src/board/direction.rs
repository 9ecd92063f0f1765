//! Compass directions and bounded rays across the board.

use crate::core::Pos;

/// One of the eight compass directions a capture can run along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All eight directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// `(d_row, d_col)` step for one square in this direction.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }
}

/// The squares met walking from `origin` (exclusive) in one direction until
/// the edge of a `side × side` board.
///
/// A ray never yields more than `side - 1` squares.
#[derive(Clone, Debug)]
pub struct Ray {
    current: Pos,
    delta: (isize, isize),
    side: usize,
    remaining: usize,
}

impl Ray {
    #[must_use]
    pub fn new(origin: Pos, direction: Direction, side: usize) -> Self {
        Self {
            current: origin,
            delta: direction.delta(),
            side,
            remaining: side.saturating_sub(1),
        }
    }
}

impl Iterator for Ray {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        if self.remaining == 0 {
            return None;
        }
        let next = self.current.offset(self.delta.0, self.delta.1, self.side)?;
        self.current = next;
        self.remaining -= 1;
        Some(next)
    }
}
