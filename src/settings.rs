//! Driver settings
//!
//! Loaded from an optional JSON file. Missing fields fall back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::platform::Screen;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Visible play area
    pub screen: Screen,
    /// Seed for the single RNG stream
    pub seed: u64,
    /// Simulated milliseconds per frame
    pub frame_ms: u32,
    /// Stop after this many frames even if the game is still going
    pub max_frames: u64,
    /// Let the demo autopilot play instead of an idle player
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen: Screen::default(),
            seed: 1,
            frame_ms: 16,
            max_frames: 36_000,
            autopilot: true,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, LoadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
