use anyhow::Result;
use log::info;
use rand::Rng;
use rand::rngs::ThreadRng;
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};

use crate::game::{Action, GameEngine, GameState};
use crate::metrics::GameMetrics;

/// Messages from input sources to the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(Action),
    Quit,
}

impl From<Action> for Command {
    fn from(action: Action) -> Self {
        Command::Play(action)
    }
}

/// Anything that can present a snapshot of the game
pub trait Frontend {
    fn draw(&mut self, state: &GameState, metrics: &GameMetrics) -> Result<()>;
}

/// Totals reported when the driver stops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub games_played: u32,
    pub best_score: u32,
    pub ticks: u64,
}

/// Owns the game and runs the tick loop.
///
/// Ticks are scheduled one at a time, `1000 / speed` ms after the previous
/// one, so a speed change takes effect on the very next tick. Commands are
/// applied between ticks, never during one. Once the game is over no further
/// ticks are scheduled until a new game is started.
pub struct GameDriver<R = ThreadRng> {
    engine: GameEngine<R>,
    state: GameState,
    metrics: GameMetrics,
    ticks: u64,
}

impl<R: Rng> GameDriver<R> {
    pub fn new(mut engine: GameEngine<R>) -> Self {
        let state = engine.reset();
        Self::with_state(engine, state)
    }

    /// Drive an existing state instead of a freshly reset one
    pub fn with_state(engine: GameEngine<R>, state: GameState) -> Self {
        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            ticks: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }

    /// Run until `Command::Quit` arrives or every sender is dropped
    pub async fn run<F: Frontend>(
        &mut self,
        mut commands: mpsc::Receiver<Command>,
        frontend: &mut F,
    ) -> Result<SessionSummary> {
        self.redraw(frontend)?;
        let mut next_tick = Instant::now() + self.state.tick_interval();

        loop {
            tokio::select! {
                _ = sleep_until(next_tick), if !self.state.game_over => {
                    self.tick();
                    next_tick = Instant::now() + self.state.tick_interval();
                    self.redraw(frontend)?;
                }

                command = commands.recv() => {
                    match command {
                        Some(Command::Play(action)) => {
                            self.handle_action(action);
                            if action == Action::NewGame {
                                next_tick = Instant::now() + self.state.tick_interval();
                            }
                            self.redraw(frontend)?;
                        }
                        Some(Command::Quit) | None => break,
                    }
                }
            }
        }

        let summary = SessionSummary {
            games_played: self.metrics.games_played,
            best_score: self.metrics.best_score,
            ticks: self.ticks,
        };
        info!(
            "Session ended: {} games, best score {}, {} ticks",
            summary.games_played, summary.best_score, summary.ticks
        );
        Ok(summary)
    }

    fn tick(&mut self) {
        let outcome = self.engine.advance_tick(&mut self.state);
        self.ticks += 1;
        if outcome.game_over {
            self.metrics.on_game_over(self.state.score);
        }
    }

    fn handle_action(&mut self, action: Action) {
        let was_paused = self.state.paused;
        self.engine.apply(&mut self.state, action);
        if action == Action::NewGame {
            self.metrics.on_game_start();
        } else if self.state.paused != was_paused {
            self.metrics.set_paused(self.state.paused);
        }
    }

    fn redraw<F: Frontend>(&mut self, frontend: &mut F) -> Result<()> {
        if !self.state.game_over {
            self.metrics.update();
        }
        frontend.draw(&self.state, &self.metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, GameConfig, Position, Snake, Velocity};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Duration;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<GameState>,
    }

    impl Frontend for Recorder {
        fn draw(&mut self, state: &GameState, _metrics: &GameMetrics) -> Result<()> {
            self.frames.push(state.clone());
            Ok(())
        }
    }

    fn engine() -> GameEngine<StdRng> {
        GameEngine::with_rng(GameConfig::default(), StdRng::seed_from_u64(42))
    }

    /// Fresh game with the food parked in a corner the snake never reaches,
    /// so the speed stays at 8 ticks/sec
    fn steady_driver() -> GameDriver<StdRng> {
        let mut engine = engine();
        let mut state = engine.reset();
        state.food = Position::new(1, 1);
        GameDriver::with_state(engine, state)
    }

    fn send_after(tx: &mpsc::Sender<Command>, millis: u64, command: Command) {
        let tx = tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(millis)).await;
            let _ = tx.send(command).await;
        });
    }

    /// Heading right into its own body on the first tick
    fn doomed_state() -> GameState {
        let cells = [(5, 5), (5, 6), (6, 6), (6, 5), (6, 4)];
        let snake = Snake::from_segments(cells.iter().map(|&(x, y)| Position::new(x, y)).collect())
            .unwrap();
        GameState::new(snake, Position::new(20, 20), Velocity::new(1, 0), 8.0, 32)
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_follow_speed() {
        let (tx, rx) = mpsc::channel(16);
        let mut driver = steady_driver();
        let mut recorder = Recorder::default();

        send_after(&tx, 1060, Command::Quit);
        let summary = driver.run(rx, &mut recorder).await.unwrap();

        assert_eq!(summary.ticks, 8);
        assert_eq!(driver.state().ticks, 8);
        assert_eq!(driver.state().speed, 8.0);
        assert_eq!(driver.state().snake.head(), Position::new(24, 16));
        // Initial frame plus one per tick
        assert_eq!(recorder.frames.len(), 9);
    }

    #[tokio::test(start_paused = true)]
    async fn test_faster_speed_shortens_interval() {
        let (tx, rx) = mpsc::channel(16);
        let mut driver = steady_driver();
        driver.state.speed = 20.0;
        let mut recorder = Recorder::default();

        send_after(&tx, 1025, Command::Quit);
        let summary = driver.run(rx, &mut recorder).await.unwrap();

        assert_eq!(summary.ticks, 20);
    }

    #[tokio::test(start_paused = true)]
    async fn test_eating_speeds_up_following_ticks() {
        let (tx, rx) = mpsc::channel(16);
        let mut driver = steady_driver();
        driver.state.food = Position::new(17, 16);
        let mut recorder = Recorder::default();

        send_after(&tx, 1060, Command::Quit);
        let summary = driver.run(rx, &mut recorder).await.unwrap();

        // The first tick eats; every later interval is shorter than 125 ms
        assert!(driver.state().food_eaten >= 1);
        assert!(driver.state().speed > 8.0);
        assert!(summary.ticks > 8);
    }

    #[tokio::test(start_paused = true)]
    async fn test_game_over_stops_ticking() {
        let (tx, rx) = mpsc::channel(16);
        let mut driver = GameDriver::with_state(engine(), doomed_state());
        let mut recorder = Recorder::default();

        send_after(&tx, 2000, Command::Quit);
        let summary = driver.run(rx, &mut recorder).await.unwrap();

        assert!(driver.state().game_over);
        assert_eq!(driver.state().ticks, 1);
        assert_eq!(summary.ticks, 1);
        assert_eq!(summary.games_played, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_game_rearms_clock() {
        let (tx, rx) = mpsc::channel(16);
        let mut driver = GameDriver::with_state(engine(), doomed_state());
        let mut recorder = Recorder::default();

        send_after(&tx, 500, Command::Play(Action::NewGame));
        send_after(&tx, 1060, Command::Quit);
        let summary = driver.run(rx, &mut recorder).await.unwrap();

        // One fatal tick, then at least the ticks at 625, 750, 875 and 1000 ms.
        // The new food may land on the path and shorten later intervals.
        let state = driver.state();
        assert!(!state.game_over);
        assert!(state.ticks >= 4);
        assert_eq!(summary.ticks, state.ticks + 1);
        assert_eq!(summary.games_played, 1);
        assert_eq!(state.snake.head(), Position::new(16 + state.ticks as i32, 16));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_freezes_snake() {
        let (tx, rx) = mpsc::channel(16);
        let mut driver = steady_driver();
        let mut recorder = Recorder::default();

        send_after(&tx, 300, Command::Play(Action::TogglePause));
        send_after(&tx, 1060, Command::Quit);
        driver.run(rx, &mut recorder).await.unwrap();

        let state = driver.state();
        assert!(state.paused);
        assert_eq!(state.ticks, 8);
        assert_eq!(state.snake.head(), Position::new(18, 16));
        assert!(driver.metrics().is_paused());
    }

    #[tokio::test(start_paused = true)]
    async fn test_turn_resumes_game_clock() {
        let (tx, rx) = mpsc::channel(16);
        let mut driver = steady_driver();
        let mut recorder = Recorder::default();

        send_after(&tx, 300, Command::Play(Action::TogglePause));
        send_after(&tx, 400, Command::Play(Action::Move(Direction::Up)));
        send_after(&tx, 460, Command::Quit);
        driver.run(rx, &mut recorder).await.unwrap();

        assert!(!driver.state().paused);
        assert!(!driver.metrics().is_paused());
    }

    #[tokio::test(start_paused = true)]
    async fn test_turn_applies_before_next_tick() {
        let (tx, rx) = mpsc::channel(16);
        let mut driver = steady_driver();
        let mut recorder = Recorder::default();

        send_after(&tx, 130, Command::Play(Action::Move(Direction::Down)));
        send_after(&tx, 310, Command::Quit);
        driver.run(rx, &mut recorder).await.unwrap();

        // Right at 125 ms, down at 250 ms
        assert_eq!(driver.state().snake.head(), Position::new(17, 17));
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_channel_ends_session() {
        let (tx, rx) = mpsc::channel::<Command>(1);
        drop(tx);
        let mut driver = steady_driver();
        let mut recorder = Recorder::default();

        let summary = driver.run(rx, &mut recorder).await.unwrap();

        assert_eq!(summary, SessionSummary::default());
        assert_eq!(recorder.frames.len(), 1);
    }
}
