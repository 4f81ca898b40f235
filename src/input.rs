/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the `(dx, dy)` unit step; y grows downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Quit,
    Confirm,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Single-slot direction buffer consumed once per tick.
///
/// Requests are validated against the committed direction, not the pending
/// one, and overwrite each other until the next [`DirectionBuffer::commit`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DirectionBuffer {
    committed: Direction,
    pending: Direction,
}

impl DirectionBuffer {
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        Self {
            committed: direction,
            pending: direction,
        }
    }

    /// Stores `direction` as pending unless it reverses the committed heading.
    ///
    /// Returns whether the request was accepted.
    pub fn request(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.committed, direction) {
            return false;
        }

        self.pending = direction;
        true
    }

    /// Promotes the pending direction and returns it.
    pub fn commit(&mut self) -> Direction {
        self.committed = self.pending;
        self.committed
    }

    #[must_use]
    pub fn committed(&self) -> Direction {
        self.committed
    }

    #[must_use]
    pub fn pending(&self) -> Direction {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::{direction_change_is_valid, Direction, DirectionBuffer};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn direction_change_rejects_reverse() {
        assert!(!direction_change_is_valid(Direction::Up, Direction::Down));
        assert!(!direction_change_is_valid(Direction::Down, Direction::Up));
        assert!(!direction_change_is_valid(
            Direction::Left,
            Direction::Right
        ));
        assert!(!direction_change_is_valid(
            Direction::Right,
            Direction::Left
        ));

        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Up, Direction::Up));
    }

    #[test]
    fn buffer_rejects_reversal_of_committed_direction() {
        let mut buffer = DirectionBuffer::new(Direction::Right);

        assert!(!buffer.request(Direction::Left));
        assert_eq!(buffer.commit(), Direction::Right);
    }

    #[test]
    fn buffer_is_last_write_wins() {
        let mut buffer = DirectionBuffer::new(Direction::Right);

        assert!(buffer.request(Direction::Up));
        assert!(buffer.request(Direction::Down));

        assert_eq!(buffer.pending(), Direction::Down);
        assert_eq!(buffer.commit(), Direction::Down);
    }

    #[test]
    fn buffer_validates_against_committed_not_pending() {
        let mut buffer = DirectionBuffer::new(Direction::Right);

        // Up is pending, but Down only reverses Up, not the committed Right.
        assert!(buffer.request(Direction::Up));
        assert!(buffer.request(Direction::Down));
        // Left still reverses the committed heading.
        assert!(!buffer.request(Direction::Left));

        assert_eq!(buffer.committed(), Direction::Right);
        assert_eq!(buffer.commit(), Direction::Down);
    }
}
