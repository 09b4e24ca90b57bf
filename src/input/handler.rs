use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::driver::Command;
use crate::game::{Action, Direction, Point, classify_swipe};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    GameAction(Action),
    Quit,
    None,
}

impl InputAction {
    /// The driver command for this input, if any
    pub fn into_command(self) -> Option<Command> {
        match self {
            InputAction::GameAction(action) => Some(Command::Play(action)),
            InputAction::Quit => Some(Command::Quit),
            InputAction::None => None,
        }
    }
}

/// Translates terminal events into game actions.
///
/// Mouse drags stand in for touch swipes: the press position is remembered
/// and the release position decides the direction.
#[derive(Debug, Default)]
pub struct InputHandler {
    drag_start: Option<Point>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self { drag_start: None }
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> InputAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return InputAction::Quit;
        }

        let turn = |direction| InputAction::GameAction(Action::Move(direction));

        match key.code {
            KeyCode::Up | KeyCode::Char('w' | 'W' | '8') => turn(Direction::Up),
            KeyCode::Down | KeyCode::Char('s' | 'S' | '2') => turn(Direction::Down),
            KeyCode::Left | KeyCode::Char('a' | 'A' | '4') => turn(Direction::Left),
            KeyCode::Right | KeyCode::Char('d' | 'D' | '6') => turn(Direction::Right),

            KeyCode::Esc | KeyCode::Char(' ') => InputAction::GameAction(Action::TogglePause),
            KeyCode::Enter | KeyCode::Char('r' | 'R') => InputAction::GameAction(Action::NewGame),
            KeyCode::Char('q' | 'Q') => InputAction::Quit,

            _ => InputAction::None,
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) -> InputAction {
        let here = Point::new(f32::from(mouse.column), f32::from(mouse.row));

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.drag_start = Some(here);
                InputAction::None
            }
            MouseEventKind::Up(MouseButton::Left) => match self.drag_start.take() {
                Some(start) if start != here => {
                    InputAction::GameAction(Action::Move(classify_swipe(start, here)))
                }
                _ => InputAction::None,
            },
            _ => InputAction::None,
        }
    }
}
