/// Cardinal direction intent, independent of the input device that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true for Up and Down
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Returns the delta (dx, dy) for moving in this direction.
    /// Rows grow downwards, so Up is negative y.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn velocity(&self) -> Velocity {
        let (dx, dy) = self.delta();
        Velocity { dx, dy }
    }
}

/// Per-tick head displacement.
///
/// Always a unit vector along one axis, or [`Velocity::ZERO`] while paused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Velocity {
    pub dx: i32,
    pub dy: i32,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { dx: 0, dy: 0 };

    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

impl From<Direction> for Velocity {
    fn from(direction: Direction) -> Self {
        direction.velocity()
    }
}

/// Mutating entry points available to input sources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Request a turn; ignored unless orthogonal to the current heading
    Move(Direction),
    /// Pause, or resume with the saved heading
    TogglePause,
    /// Discard the current game and start a fresh one
    NewGame,
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Action::Move(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_velocity_from_direction() {
        assert_eq!(Velocity::from(Direction::Right), Velocity::new(1, 0));
        assert_eq!(Velocity::from(Direction::Up), Velocity::new(0, -1));
        assert_eq!(Velocity::default(), Velocity::ZERO);
    }

    #[test]
    fn test_vertical() {
        assert!(Direction::Up.is_vertical());
        assert!(Direction::Down.is_vertical());
        assert!(!Direction::Left.is_vertical());
        assert!(!Direction::Right.is_vertical());
    }
}
