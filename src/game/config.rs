use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Side length of the square board
pub const DEFAULT_GRID_SIZE: i32 = 32;

/// Speed and growth presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Starts at 8 ticks/sec, +1 per food
    #[default]
    Classic,
    /// Starts at 14 ticks/sec, +0.5 per food
    Fast,
}

impl Variant {
    pub fn initial_speed(&self) -> f32 {
        match self {
            Variant::Classic => 8.0,
            Variant::Fast => 14.0,
        }
    }

    pub fn speed_increment(&self) -> f32 {
        match self {
            Variant::Classic => 1.0,
            Variant::Fast => 0.5,
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width and height of the toroidal grid, in cells
    pub grid_size: i32,
    /// Ticks per second at the start of a game
    pub initial_speed: f32,
    /// Added to the speed every time food is eaten
    pub speed_increment: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::for_variant(Variant::default())
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(grid_size: i32) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    pub fn for_variant(variant: Variant) -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            initial_speed: variant.initial_speed(),
            speed_increment: variant.speed_increment(),
        }
    }

    /// Small board for tests
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Read a JSON config file. Missing fields fall back to the classic preset.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: GameConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_size < 2 {
            bail!("grid_size must be at least 2, got {}", self.grid_size);
        }
        if !self.initial_speed.is_finite() || self.initial_speed <= 0.0 {
            bail!(
                "initial_speed must be a positive number, got {}",
                self.initial_speed
            );
        }
        // Eating must always speed the snake up
        if !self.speed_increment.is_finite() || self.speed_increment <= 0.0 {
            bail!(
                "speed_increment must be a positive number, got {}",
                self.speed_increment
            );
        }
        Ok(())
    }
}
