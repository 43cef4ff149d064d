//! Grid configuration persistence
//!
//! Stores user preferences in `~/.config/squaregrid/config.yaml`

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::theme::Color;

/// Slowest speed a session will actually scroll at, in pixels per frame
pub const MIN_SPEED: f64 = 0.1;

/// Smallest cell edge the renderer accepts, in logical pixels
pub const MIN_SQUARE_SIZE: f64 = 1.0;

/// Direction the grid scrolls in
///
/// Config files and the CLI both parse through [`Direction::parse_lenient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
    #[default]
    Diagonal,
    /// No movement. Unrecognized values in config files also land here.
    None,
}

impl Direction {
    /// Parse a direction name, treating anything unrecognized as `None`
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Direction::Left,
            "right" => Direction::Right,
            "up" => Direction::Up,
            "down" => Direction::Down,
            "diagonal" => Direction::Diagonal,
            "none" => Direction::None,
            other => {
                tracing::warn!("Unrecognized grid direction {:?}, grid will not move", other);
                Direction::None
            }
        }
    }
}

impl FromStr for Direction {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Direction::parse_lenient(s))
    }
}

impl From<String> for Direction {
    fn from(s: String) -> Self {
        Direction::parse_lenient(&s)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Diagonal => "diagonal",
            Direction::None => "none",
        };
        f.write_str(name)
    }
}

/// Configuration for one render session
///
/// A running session never sees this change; a new value means a new session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub direction: Direction,
    /// Pixels per frame. Values below [`MIN_SPEED`] scroll at [`MIN_SPEED`].
    pub speed: f64,
    /// Cell edge in logical pixels
    pub square_size: f64,
    pub border_color: Color,
    pub fill_color: Color,
    pub hover_fill_color: Color,
    pub background_color: Color,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Diagonal,
            speed: 0.5,
            square_size: 40.0,
            border_color: Color::rgb(0x33, 0x33, 0x33),
            fill_color: Color::rgb(0x1a, 0x1a, 0x1a),
            hover_fill_color: Color::rgb(0x0b, 0x1f, 0x3a),
            background_color: Color::rgb(0x0d, 0x0d, 0x0d),
        }
    }
}

impl GridConfig {
    /// Speed actually applied per frame
    ///
    /// `f64::max` drops NaN, so a NaN speed also becomes [`MIN_SPEED`].
    pub fn effective_speed(&self) -> f64 {
        let speed = if self.speed.is_finite() { self.speed } else { MIN_SPEED };
        speed.max(MIN_SPEED)
    }

    /// Cell size actually used for layout, never below [`MIN_SQUARE_SIZE`]
    pub fn effective_square_size(&self) -> f64 {
        if self.square_size.is_finite() {
            self.square_size.max(MIN_SQUARE_SIZE)
        } else {
            MIN_SQUARE_SIZE
        }
    }

    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        // An empty file is a valid "all defaults" config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
