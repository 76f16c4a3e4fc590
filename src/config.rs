//! Tuning configuration
//!
//! One explicit struct for every constant the game used to scatter around:
//! tile size, movement speed, gravity, jump impulse, the collision epsilon
//! and the window setup. Loaded from a RON file when present, otherwise the
//! built-in defaults apply. The config is passed by reference into map
//! loading and the player update; nothing reads tuning from globals.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

/// Window setup (outside the gameplay core)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "hopper".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

/// Movement tuning in tile-normalized units: speeds and accelerations are
/// expressed in tiles per second and scaled by the tile size where applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Physics {
    /// Horizontal run speed, tiles per second
    pub speed: f32,
    /// Downward acceleration, tiles per second squared
    pub gravity: f32,
    /// Initial upward velocity of a jump, tiles per second
    pub jump_impulse: f32,
    /// Gap left after a horizontal or ceiling resolve, world units.
    /// Keeps a resolved hitbox from re-touching the same tile next frame.
    pub epsilon: f32,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            speed: 3.75,
            gravity: 32.0,
            jump_impulse: 14.0,
            epsilon: 1.0,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub physics: Physics,
    /// Side length of a grid cell in world units
    #[serde(default = "default_tile_size")]
    pub tile_size: f32,
}

fn default_tile_size() -> f32 {
    32.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            physics: Physics::default(),
            tile_size: default_tile_size(),
        }
    }
}

impl Config {
    /// Load a config from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = ron::from_str(&contents)?;
        Ok(config)
    }

    /// Load a config, falling back to defaults if the file is missing or
    /// malformed. A malformed file is reported, not fatal.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Config {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(ConfigError::Io(_)) => Config::default(),
            Err(e) => {
                eprintln!("Failed to parse {}: {}, using defaults", path.display(), e);
                Config::default()
            }
        }
    }
}
