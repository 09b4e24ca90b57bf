//! The clock side of the game: a single-threaded loop that fires ticks at a
//! speed-dependent interval and applies input commands in between.

pub mod game_driver;

pub use game_driver::{Command, Frontend, GameDriver, SessionSummary};
