use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use terrastep_runtime::{ConfigError, GameConfig};

mod app;
mod input;

/// Walk an endless, noise-colored tile world.
#[derive(Parser, Debug)]
#[command(name = "terrastep", version, about)]
struct Args {
    /// TOML config file; built-in defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// World noise seed (overrides the config).
    #[arg(long)]
    seed: Option<i32>,

    /// Seed for biome colors. Without one, colors change every run.
    #[arg(long)]
    color_seed: Option<u64>,

    /// Show position, tile count and FPS.
    #[arg(long)]
    hud: bool,
}

fn load_config(args: &Args) -> Result<GameConfig, ConfigError> {
    let mut cfg = match &args.config {
        Some(path) => {
            log::info!("loading config from {}", path.display());
            GameConfig::load(path)?
        }
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        cfg.world.seed = seed;
    }
    if args.color_seed.is_some() {
        cfg.world.color_seed = args.color_seed;
    }
    if args.hud {
        cfg.view.show_hud = true;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    match load_config(&args) {
        Ok(cfg) => {
            app::run(cfg);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
