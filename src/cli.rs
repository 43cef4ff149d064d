//! Command-line argument parsing for the grid window
//!
//! Supports:
//! - Loading a config file from a custom path
//! - Overriding any grid setting for this run
//! - Disabling live config reload

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Direction, GridConfig};
use crate::theme::Color;

/// An animated background grid
#[derive(Parser, Debug, Default)]
#[command(name = "squaregrid", version, about = "An animated background grid")]
pub struct CliArgs {
    /// Config file to load instead of ~/.config/squaregrid/config.yaml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Scroll direction: none, left, right, up, down or diagonal
    #[arg(long)]
    pub direction: Option<String>,

    /// Scroll speed in pixels per frame (minimum 0.1)
    #[arg(long)]
    pub speed: Option<f64>,

    /// Cell edge in logical pixels
    #[arg(long)]
    pub square_size: Option<f64>,

    /// Cell border color, e.g. "#333"
    #[arg(long, value_name = "COLOR")]
    pub border_color: Option<String>,

    /// Cell fill color
    #[arg(long, value_name = "COLOR")]
    pub fill_color: Option<String>,

    /// Fill color of the cell under the pointer
    #[arg(long = "hover-color", value_name = "COLOR")]
    pub hover_color: Option<String>,

    /// Color behind the cells
    #[arg(long, value_name = "COLOR")]
    pub background_color: Option<String>,

    /// Don't reload the config file when it changes
    #[arg(long)]
    pub no_watch: bool,
}

/// Settings given on the command line, applied on top of the config file
///
/// Kept separately so they can be reapplied after a config reload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridOverrides {
    pub direction: Option<Direction>,
    pub speed: Option<f64>,
    pub square_size: Option<f64>,
    pub border_color: Option<Color>,
    pub fill_color: Option<Color>,
    pub hover_fill_color: Option<Color>,
    pub background_color: Option<Color>,
}

impl GridOverrides {
    /// Return `base` with every given override applied
    pub fn apply(&self, base: &GridConfig) -> GridConfig {
        let mut config = base.clone();
        if let Some(direction) = self.direction {
            config.direction = direction;
        }
        if let Some(speed) = self.speed {
            config.speed = speed;
        }
        if let Some(square_size) = self.square_size {
            config.square_size = square_size;
        }
        if let Some(color) = self.border_color {
            config.border_color = color;
        }
        if let Some(color) = self.fill_color {
            config.fill_color = color;
        }
        if let Some(color) = self.hover_fill_color {
            config.hover_fill_color = color;
        }
        if let Some(color) = self.background_color {
            config.background_color = color;
        }
        config
    }
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Config file to load and watch, if any directory is available
    pub config_path: Option<PathBuf>,
    pub overrides: GridOverrides,
    pub watch_config: bool,
}

impl StartupConfig {
    /// Config file contents with the CLI overrides applied
    pub fn load_grid_config(&self) -> GridConfig {
        let base = match &self.config_path {
            Some(path) => GridConfig::load_from(path),
            None => GridConfig::default(),
        };
        self.overrides.apply(&base)
    }
}

fn parse_color(flag: &str, value: Option<&String>) -> Result<Option<Color>, String> {
    value
        .map(|raw| Color::from_hex(raw).map_err(|e| format!("--{}: {}", flag, e)))
        .transpose()
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let overrides = GridOverrides {
            direction: self.direction.as_deref().map(Direction::parse_lenient),
            speed: self.speed,
            square_size: self.square_size,
            border_color: parse_color("border-color", self.border_color.as_ref())?,
            fill_color: parse_color("fill-color", self.fill_color.as_ref())?,
            hover_fill_color: parse_color("hover-color", self.hover_color.as_ref())?,
            background_color: parse_color("background-color", self.background_color.as_ref())?,
        };

        if let Some(size) = overrides.square_size {
            if !(size > 0.0) {
                return Err(format!("--square-size must be positive, got {}", size));
            }
        }

        let config_path = self.config.or_else(crate::config_paths::config_file);

        Ok(StartupConfig {
            config_path,
            overrides,
            watch_config: !self.no_watch,
        })
    }
}
