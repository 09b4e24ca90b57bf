use std::time::Duration;

use super::action::Velocity;

/// A cell on the game grid. Coordinates are 1-indexed: `1..=grid_size` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn moved_by_velocity(&self, velocity: Velocity) -> Self {
        self.moved_by(velocity.dx, velocity.dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0. Never empty.
    body: Vec<Position>,
}

impl Snake {
    /// A one-segment snake
    pub fn new(head: Position) -> Self {
        Self { body: vec![head] }
    }

    /// Build a snake from explicit segments, head first.
    /// Returns `None` for an empty list.
    pub fn from_segments(segments: Vec<Position>) -> Option<Self> {
        if segments.is_empty() {
            None
        } else {
            Some(Self { body: segments })
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn head_mut(&mut self) -> &mut Position {
        &mut self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// All segments, head first
    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    pub(crate) fn segments_mut(&mut self) -> &mut [Position] {
        &mut self.body
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Every non-head segment takes the position its head-ward neighbour had
    /// before this call. The head itself is left untouched.
    pub fn trail(&mut self) {
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
    }

    /// Append a segment on top of the current tail
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.body.push(tail);
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake has at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    /// Head displacement applied every tick
    pub direction: Velocity,
    /// Heading saved when pausing, restored on resume
    pub persisted_direction: Velocity,
    /// Ticks per second
    pub speed: f32,
    pub score: u32,
    pub food_eaten: u32,
    pub ticks: u64,
    pub grid_size: i32,
    pub game_over: bool,
    pub paused: bool,
}

impl GameState {
    /// Create a new game state
    pub fn new(
        snake: Snake,
        food: Position,
        direction: Velocity,
        speed: f32,
        grid_size: i32,
    ) -> Self {
        Self {
            snake,
            food,
            direction,
            persisted_direction: direction,
            speed,
            score: 0,
            food_eaten: 0,
            ticks: 0,
            grid_size,
            game_over: false,
            paused: false,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        (1..=self.grid_size).contains(&pos.x) && (1..=self.grid_size).contains(&pos.y)
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.occupies(pos)
    }

    /// Delay until the next tick at the current speed: `1000 / speed` ms
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.speed))
    }
}

/// Score shown to the player: `food_eaten * (speed - 0.5) * 2`
pub fn score_for(food_eaten: u32, speed: f32) -> u32 {
    let score = f64::from(food_eaten) * (f64::from(speed) - 0.5) * 2.0;
    score.round().max(0.0) as u32
}
