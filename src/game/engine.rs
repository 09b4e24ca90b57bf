use super::{
    action::{Action, Direction, Velocity},
    config::GameConfig,
    state::{GameState, Position, Snake, score_for},
};
use log::{debug, info};
use rand::Rng;
use rand::rngs::ThreadRng;

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Whether the head landed on the food this tick
    pub ate_food: bool,
    /// Whether the game is over after this tick
    pub game_over: bool,
}

/// The game engine that handles all game logic
pub struct GameEngine<R = ThreadRng> {
    config: GameConfig,
    rng: R,
}

impl GameEngine<ThreadRng> {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine drawing food positions from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Start a new game: one-segment snake in the middle of the board heading right
    pub fn reset(&mut self) -> GameState {
        let center = self.config.grid_size / 2;
        let snake = Snake::new(Position::new(center, center));
        let food = self.place_food(&snake);

        info!(
            "New game on a {0}x{0} grid, speed {1}",
            self.config.grid_size, self.config.initial_speed
        );

        GameState::new(
            snake,
            food,
            Direction::Right.velocity(),
            self.config.initial_speed,
            self.config.grid_size,
        )
    }

    /// Advance the simulation by one tick.
    ///
    /// The order is fixed: the body trails the head (skipped while paused),
    /// the head moves by `direction` (applied even while paused), every
    /// segment is wrapped back onto the board, the head is checked against the
    /// rest of the body, and finally food is consumed.
    ///
    /// A state that is already over is left untouched.
    pub fn advance_tick(&mut self, state: &mut GameState) -> TickOutcome {
        if state.game_over {
            return TickOutcome {
                ate_food: false,
                game_over: true,
            };
        }

        if !state.paused {
            state.snake.trail();
        }

        let direction = state.direction;
        let head = state.snake.head_mut();
        *head = head.moved_by_velocity(direction);

        let grid_size = state.grid_size;
        for segment in state.snake.segments_mut() {
            *segment = wrap_position(*segment, grid_size);
        }

        if detect_collision(&state.snake) {
            info!(
                "Game over after {} ticks, score {}",
                state.ticks + 1,
                state.score
            );
            state.game_over = true;
        }

        let ate_food = state.snake.head() == state.food;
        if ate_food {
            state.snake.grow();
            state.speed += self.config.speed_increment;
            state.food_eaten += 1;
            state.score = score_for(state.food_eaten, state.speed);
            state.food = self.place_food(&state.snake);
            debug!(
                "Food eaten ({} total), speed now {}, next food at ({}, {})",
                state.food_eaten, state.speed, state.food.x, state.food.y
            );
        }

        state.ticks += 1;

        TickOutcome {
            ate_food,
            game_over: state.game_over,
        }
    }

    /// Pick a free cell uniformly at random by rejection sampling.
    ///
    /// Never returns a cell occupied by `snake`. Does not terminate if the
    /// snake covers every cell of the board.
    pub fn place_food(&mut self, snake: &Snake) -> Position {
        let size = self.config.grid_size;
        loop {
            let pos = Position::new(self.rng.gen_range(1..=size), self.rng.gen_range(1..=size));
            if !snake.occupies(pos) {
                return pos;
            }
        }
    }

    /// Request a turn. Only accepted when the request is orthogonal to the
    /// axis the snake is currently moving along; while the heading is zero
    /// (paused) any turn is accepted. An accepted turn also resumes play.
    pub fn set_direction(&self, state: &mut GameState, requested: Direction) {
        let current = state.direction;
        let blocked = if requested.is_vertical() {
            current.dy != 0
        } else {
            current.dx != 0
        };
        if blocked {
            return;
        }

        state.direction = requested.velocity();
        state.paused = false;
    }

    /// Pause (saving and zeroing the heading) or resume (restoring it)
    pub fn toggle_pause(&self, state: &mut GameState) {
        if state.paused {
            state.direction = state.persisted_direction;
            state.paused = false;
            debug!("Resumed");
        } else {
            state.persisted_direction = state.direction;
            state.direction = Velocity::ZERO;
            state.paused = true;
            debug!("Paused");
        }
    }

    /// Apply an input action to `state`
    pub fn apply(&mut self, state: &mut GameState, action: Action) {
        match action {
            Action::Move(direction) => self.set_direction(state, direction),
            Action::TogglePause => self.toggle_pause(state),
            Action::NewGame => *state = self.reset(),
        }
    }
}

/// True when the head shares a cell with any other segment
pub fn detect_collision(snake: &Snake) -> bool {
    snake.collides_with_body(snake.head())
}

/// Map a position back onto the `1..=grid_size` torus
pub fn wrap_position(pos: Position, grid_size: i32) -> Position {
    Position::new(wrap_axis(pos.x, grid_size), wrap_axis(pos.y, grid_size))
}

fn wrap_axis(value: i32, grid_size: i32) -> i32 {
    (value - 1).rem_euclid(grid_size) + 1
}
