mod cli;
mod color;
mod config;
mod display;
mod error;
mod frame_loop;
mod pendulum;
mod util;

use clap::Parser;
use cli::Cli;
use config::Config;
use display::{Display, RenderTarget, Screen};
use error::Result;
use frame_loop::FrameLoop;
use log::{info, warn};
use std::path::Path;

const DEFAULT_CONFIG: &str = "pendulum.json";

/// Config file named on the command line, else `pendulum.json` if present,
/// else built-in defaults
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => Config::load(DEFAULT_CONFIG)?,
        None => {
            warn!("No {} found, using built-in defaults", DEFAULT_CONFIG);
            Config::default()
        },
    };
    cli.apply(&mut config);
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if let Some(path) = &cli.write_config {
        config.save(path)?;
        info!("Config written to {}", path.display());
        return Ok(());
    }

    // Allocate before opening the window so a failure never shows one
    let mut frame_loop = FrameLoop::new(&config)?.with_frame_limit(cli.frames);

    let (display, texture_creator) =
        Display::with_options("Pendulum", config.width, config.height, cli.vsync)?;
    let target = RenderTarget::with_size(&texture_creator, config.width, config.height)?;
    let mut screen = Screen { display, target };

    info!("=== pendulum ===");
    info!("Resolution: {}x{}", screen.display.width(), screen.display.height());
    if cli.vsync {
        info!("VSync: ON");
    } else {
        info!("VSync: OFF (uncapped framerate). Use --vsync to lock.");
    }
    let p = frame_loop.pendulum();
    info!(
        "Arm length {} angle {:.4} rad gravity {} pivot ({}, {})",
        p.arm_length, p.angle, p.gravity, p.pivot.0, p.pivot.1
    );
    info!("Close the window or press Escape to quit. RUST_LOG=debug shows FPS.");

    let frames = frame_loop.run(&mut screen)?;
    info!("Rendered {} frames", frames);
    Ok(())
}
