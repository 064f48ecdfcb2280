//! Player settings from ~/.yaiba/settings.json.
//!
//! ```json
//! {
//!   "difficulty": "easy",
//!   "profiles": {
//!     "hard": { "gravity": 12, "obstacle_speed": 7, "gap_size": 150, "jump_impulse": 45 }
//!   }
//! }
//! ```
//!
//! Both fields are optional. Profiles not listed keep their built-in tuning.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::minigame::{DifficultyProfile, ProfileTable, YaibaDifficulty, PLAYFIELD_HEIGHT};
use crate::utils::persistence::save_path;

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid {difficulty} profile: {reason}")]
    InvalidProfile {
        difficulty: &'static str,
        reason: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Level selected when the game opens.
    pub difficulty: YaibaDifficulty,
    /// Per-level overrides.
    pub profiles: HashMap<YaibaDifficulty, DifficultyProfile>,
}

impl Settings {
    /// Parse and validate settings from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.profile_table()?;
        Ok(settings)
    }

    /// Load from a path. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Load ~/.yaiba/settings.json, falling back to defaults on any error.
    pub fn load_or_default() -> Self {
        let result = save_path(SETTINGS_FILE)
            .map_err(ConfigError::from)
            .and_then(|path| Self::load(&path));
        match result {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(error = %e, "using default settings");
                Self::default()
            }
        }
    }

    /// Built-in tuning with this file's overrides applied.
    pub fn profile_table(&self) -> Result<ProfileTable, ConfigError> {
        let mut table = ProfileTable::default();
        for difficulty in YaibaDifficulty::ALL {
            if let Some(profile) = self.profiles.get(&difficulty) {
                profile
                    .validate(PLAYFIELD_HEIGHT)
                    .map_err(|reason| ConfigError::InvalidProfile {
                        difficulty: difficulty.key(),
                        reason,
                    })?;
                table.set(difficulty, *profile);
            }
        }
        Ok(table)
    }
}
