//! Board storage and geometry.
//!
//! - `Board`: the grid of optional pieces plus per-player counts
//! - `Direction` / `Ray`: compass steps and bounded walks used for captures

pub mod direction;
pub mod grid;

pub use direction::{Direction, Ray};
pub use grid::{Board, Grid};
