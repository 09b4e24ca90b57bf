//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Everything here is synchronous and infallible: death is a flag on the state and
//! requests that do not apply are ignored.

pub mod action;
pub mod config;
pub mod engine;
pub mod gesture;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction, Velocity};
pub use config::{DEFAULT_GRID_SIZE, GameConfig, Variant};
pub use engine::{GameEngine, TickOutcome, detect_collision, wrap_position};
pub use gesture::{Point, classify_swipe};
pub use state::{GameState, Position, Snake, score_for};
