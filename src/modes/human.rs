use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{info, warn};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use tokio::sync::mpsc;

use crate::driver::{Command, Frontend, GameDriver, SessionSummary};
use crate::game::{GameEngine, GameState};
use crate::input::InputHandler;
use crate::metrics::GameMetrics;
use crate::render::Renderer;

const COMMAND_QUEUE: usize = 64;

struct TerminalFrontend {
    terminal: Terminal<CrosstermBackend<Stderr>>,
    renderer: Renderer,
}

impl Frontend for TerminalFrontend {
    fn draw(&mut self, state: &GameState, metrics: &GameMetrics) -> Result<()> {
        self.terminal
            .draw(|frame| self.renderer.render(frame, state, metrics))
            .context("Failed to draw frame")?;
        Ok(())
    }
}

/// Interactive play in the terminal
pub struct HumanMode<R> {
    driver: GameDriver<R>,
}

impl<R: Rng> HumanMode<R> {
    pub fn new(engine: GameEngine<R>) -> Self {
        Self {
            driver: GameDriver::new(engine),
        }
    }

    pub async fn run(&mut self) -> Result<SessionSummary> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let mut frontend = TerminalFrontend {
            terminal,
            renderer: Renderer::new(),
        };

        let (tx, rx) = mpsc::channel(COMMAND_QUEUE);
        let input_task = tokio::spawn(forward_input(tx));

        let result = self.driver.run(rx, &mut frontend).await;
        input_task.abort();

        // Restore the terminal even if the loop failed
        cleanup_terminal(&mut frontend.terminal)?;

        let summary = result?;
        info!("Played {} games", summary.games_played);
        Ok(summary)
    }
}

/// Read terminal events until quit, forwarding them to the driver
async fn forward_input(tx: mpsc::Sender<Command>) {
    let mut events = EventStream::new();
    let mut handler = InputHandler::new();

    loop {
        let command = tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => translate(&mut handler, event),
                Some(Err(err)) => {
                    warn!("Failed to read terminal event: {err}");
                    None
                }
                None => Some(Command::Quit),
            },

            // Handle Ctrl+C
            _ = tokio::signal::ctrl_c() => Some(Command::Quit),
        };

        if let Some(command) = command {
            if tx.send(command).await.is_err() || command == Command::Quit {
                break;
            }
        }
    }
}

fn translate(handler: &mut InputHandler, event: Event) -> Option<Command> {
    match event {
        // Only process key press events, not release
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            handler.handle_key_event(key).into_command()
        }
        Event::Mouse(mouse) => handler.handle_mouse_event(mouse).into_command(),
        _ => None,
    }
}

fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}
