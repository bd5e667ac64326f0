//! Scene Configuration Module
//!
//! All scene tunables in one JSON-loadable struct. Every field has a
//! default, so a partial file overrides only what it names and a missing
//! file falls back to defaults with a logged warning.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::camera::OrbitConfig;
use crate::game::ui_effects::HoverClickConfig;
use crate::game::viewport_split::SplitConfig;

/// Settings for the placement exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivationConfig {
    /// How many draggable items start active.
    pub initial_active: usize,
    /// Y height of the world plane dropped items snap onto.
    pub drop_plane_height: f32,
}

impl Default for ActivationConfig {
    fn default() -> Self {
        Self {
            initial_active: 3,
            drop_plane_height: 0.0,
        }
    }
}

/// Top-level scene configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub camera: OrbitConfig,
    pub split: SplitConfig,
    pub effects: HoverClickConfig,
    pub activation: ActivationConfig,
}

impl SceneConfig {
    /// Load from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&text).map_err(ConfigError::Parse)
    }

    /// Load from a JSON file, falling back to defaults if it is missing
    /// or malformed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("config {}: {} (using defaults)", path.display(), err);
                Self::default()
            }
        }
    }
}

/// Failure to read or parse the scene config.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "could not read config: {}", err),
            ConfigError::Parse(err) => write!(f, "could not parse config: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
        }
    }
}
