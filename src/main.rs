use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::path::{Path, PathBuf};
use torus_snake::game::{GameConfig, GameEngine, Variant};
use torus_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "torus-snake")]
#[command(version, about = "Snake on a wrap-around grid")]
struct Cli {
    /// Speed preset
    #[arg(long, value_enum)]
    variant: Option<Variant>,

    /// Grid width and height in cells
    #[arg(long)]
    grid_size: Option<i32>,

    /// JSON config file; command line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for food placement, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(variant) = self.variant {
            let preset = GameConfig::for_variant(variant);
            config.initial_speed = preset.initial_speed;
            config.speed_increment = preset.speed_increment;
        }
        if let Some(grid_size) = self.grid_size {
            config.grid_size = grid_size;
        }

        config.validate()?;
        Ok(config)
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create log file {:?}", path))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("Failed to initialise logger")?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = cli.game_config()?;

    let summary = match cli.seed {
        Some(seed) => {
            let engine = GameEngine::with_rng(config, StdRng::seed_from_u64(seed));
            HumanMode::new(engine).run().await?
        }
        None => HumanMode::new(GameEngine::new(config)).run().await?,
    };

    if summary.games_played > 0 {
        println!(
            "Games played: {}  Best score: {}",
            summary.games_played, summary.best_score
        );
    }

    Ok(())
}
