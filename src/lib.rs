//! Torus Snake - a terminal Snake game on a wrap-around grid
//!
//! This library provides:
//! - Core simulation (game module): state, tick algorithm, input rules
//! - The variable-rate tick driver (driver module)
//! - Terminal input mapping and rendering (input, render modules)
//! - Interactive terminal play (modes module)

pub mod driver;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
