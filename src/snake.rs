use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        let side = i32::from(bounds.side());
        self.x >= 0 && self.y >= 0 && self.x < side && self.y < side
    }

    /// Returns the neighbouring position one cell towards `direction`.
    ///
    /// No wraparound: the result may lie outside the grid.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns the center cell of the grid.
    #[must_use]
    pub fn center(bounds: GridSize) -> Self {
        let half = i32::from(bounds.side() / 2);
        Self { x: half, y: half }
    }
}

/// Snake body, head first.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Pushes a new head cell. The tail stays until [`Snake::pop_tail`].
    pub fn push_head(&mut self, head: Position) {
        self.body.push_front(head);
    }

    /// Removes and returns the tail cell.
    pub fn pop_tail(&mut self) -> Option<Position> {
        if self.body.len() <= 1 {
            return None;
        }
        self.body.pop_back()
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`, tail included.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    #[test]
    fn positions_compare_by_value() {
        assert_eq!(Position::new(3, 4), Position { x: 3, y: 4 });
        assert_ne!(Position::new(3, 4), Position::new(4, 3));
    }

    #[test]
    fn bounds_have_no_wraparound() {
        let bounds = GridSize(10);

        assert!(Position::new(0, 0).is_within_bounds(bounds));
        assert!(Position::new(9, 9).is_within_bounds(bounds));
        assert!(!Position::new(-1, 5).is_within_bounds(bounds));
        assert!(!Position::new(5, 10).is_within_bounds(bounds));
        assert!(!Position::new(0, 5).stepped(Direction::Left).is_within_bounds(bounds));
    }

    #[test]
    fn stepping_moves_one_cell() {
        let start = Position::new(5, 5);

        assert_eq!(start.stepped(Direction::Up), Position::new(5, 4));
        assert_eq!(start.stepped(Direction::Down), Position::new(5, 6));
        assert_eq!(start.stepped(Direction::Left), Position::new(4, 5));
        assert_eq!(start.stepped(Direction::Right), Position::new(6, 5));
    }

    #[test]
    fn center_of_grid() {
        assert_eq!(Position::center(GridSize(10)), Position::new(5, 5));
        assert_eq!(Position::center(GridSize(7)), Position::new(3, 3));
    }

    #[test]
    fn push_then_pop_moves_without_growth() {
        let mut snake = Snake::from_segments(vec![Position::new(5, 5), Position::new(4, 5)]);

        snake.push_head(Position::new(6, 5));
        assert_eq!(snake.pop_tail(), Some(Position::new(4, 5)));

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Position::new(6, 5));
        assert_eq!(snake.segments().last(), Some(&Position::new(5, 5)));
    }

    #[test]
    fn pop_never_empties_the_body() {
        let mut snake = Snake::new(Position::new(1, 1));

        assert_eq!(snake.pop_tail(), None);
        assert_eq!(snake.len(), 1);
    }
}
