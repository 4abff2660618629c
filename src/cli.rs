// cli.rs - Command-line interface configuration
use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "pendulum")]
#[command(about = "Software-rasterized pendulum", long_about = None)]
pub struct Cli {
    /// Window width in pixels
    #[arg(long, short = 'W')]
    pub width: Option<u32>,

    /// Window height in pixels
    #[arg(long, short = 'H')]
    pub height: Option<u32>,

    /// Resolution as WxH (e.g. 1280x720), overrides --width/--height
    #[arg(long, short = 'r', value_parser = parse_resolution)]
    pub resolution: Option<(u32, u32)>,

    /// JSON config file with physical parameters and colors
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Lock presentation to the monitor refresh (uncapped by default)
    #[arg(long)]
    pub vsync: bool,

    /// Quit after this many frames
    #[arg(long)]
    pub frames: Option<u64>,

    /// Write the effective config to this path and exit
    #[arg(long)]
    pub write_config: Option<PathBuf>,
}

impl Cli {
    /// Command-line values win over whatever the config file said
    pub fn apply(&self, config: &mut Config) {
        if let Some(w) = self.width {
            config.width = w;
        }
        if let Some(h) = self.height {
            config.height = h;
        }
        if let Some((w, h)) = self.resolution {
            config.width = w;
            config.height = h;
        }
    }
}

fn parse_resolution(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{}'", s))?;
    let w = w.trim().parse().map_err(|e| format!("bad width: {}", e))?;
    let h = h.trim().parse().map_err(|e| format!("bad height: {}", e))?;
    Ok((w, h))
}
