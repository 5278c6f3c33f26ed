//! Runtime configuration: defaults, then an optional JSON file, then the
//! command line.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::display::{Rgb, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::{Error, Result};

/// Largest vertex marker half-size accepted from a config file
pub const MAX_MARKER_RADIUS: u32 = 64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    pub background: Rgb,
    pub fill_color: Rgb,
    pub outline_color: Rgb,
    /// Half-size of the square drawn on each vertex
    pub marker_radius: u32,
    pub show_outline: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "scanfill".to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            vsync: true,
            background: Rgb::WHITE,
            fill_color: Rgb::GREEN,
            outline_color: Rgb::RED,
            marker_radius: 2,
            show_outline: true,
        }
    }
}

impl Config {
    /// Load config from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overlay values given on the command line
    pub fn apply_args(&mut self, args: &Args) -> Result<()> {
        if let Some((w, h)) = args.resolution {
            self.width = w;
            self.height = h;
        }
        if let Some(w) = args.width {
            self.width = w;
        }
        if let Some(h) = args.height {
            self.height = h;
        }
        if args.no_vsync {
            self.vsync = false;
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.marker_radius > MAX_MARKER_RADIUS {
            return Err(Error::InvalidConfig(format!(
                "marker_radius must be at most {}, got {}",
                MAX_MARKER_RADIUS, self.marker_radius
            )));
        }
        Ok(())
    }

    /// Resolve the full configuration for a run. A config file that fails to
    /// load is reported and replaced by defaults.
    pub fn from_args(args: &Args) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path).unwrap_or_else(|e| {
                log::warn!("{}; using defaults", e);
                Self::default()
            }),
            None => Self::default(),
        };
        config.apply_args(args)?;
        Ok(config)
    }
}

/// Command line options
#[derive(Debug, Default, Parser)]
#[command(name = "scanfill", about = "Click to place vertices, Enter to fill")]
pub struct Args {
    /// JSON config file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Window width
    #[arg(long, short)]
    pub width: Option<u32>,

    /// Window height
    #[arg(long, short = 'H')]
    pub height: Option<u32>,

    /// Window size as WxH (e.g. 1024x768)
    #[arg(long, short, value_parser = parse_resolution)]
    pub resolution: Option<(u32, u32)>,

    /// Disable VSync for uncapped framerate
    #[arg(long)]
    pub no_vsync: bool,
}

fn parse_resolution(s: &str) -> std::result::Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{}'", s))?;
    let w = w.trim().parse::<u32>().map_err(|e| format!("bad width '{}': {}", w, e))?;
    let h = h.trim().parse::<u32>().map_err(|e| format!("bad height '{}': {}", h, e))?;
    Ok((w, h))
}
