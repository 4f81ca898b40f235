use std::time::Duration;

use crate::config::GridSize;
use crate::game::{DeathReason, GameStatus};
use crate::input::Direction;
use crate::snake::Position;

/// Owned, read-only view of the engine after a step or transition.
///
/// Holds no references into the engine, so a renderer may keep it across
/// ticks and restarts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub grid_size: GridSize,
    /// Head first.
    pub snake: Vec<Position>,
    /// `None` only once the snake and obstacles fill the whole grid.
    pub food: Option<Position>,
    pub obstacles: Vec<Position>,
    pub score: u32,
    pub speed: Duration,
    pub direction: Direction,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    pub tick_count: u64,
}

impl Snapshot {
    /// Returns the head cell, if the snapshot carries a snake.
    #[must_use]
    pub fn head(&self) -> Option<Position> {
        self.snake.first().copied()
    }
}
