//! Cycle settings, loaded from a JSON file in the user's config directory.

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::game_clock::{MAX_TICK_SPEED, START_HOUR, START_MINUTE, TICK_SPEED};

/// Default file name for cycle settings.
const CONFIG_FILE_NAME: &str = "cycle.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Settings applied when the clock and weather resources are created.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleConfig {
    /// Clock speed multiplier, 1..=`MAX_TICK_SPEED`.
    pub tick_speed: u32,
    /// Hour the clock starts at (0-23).
    pub start_hour: u32,
    /// Minute the clock starts at (0-59).
    pub start_minute: u32,
    /// Seed for the weather roll. `None` seeds from entropy.
    pub weather_seed: Option<u64>,
    /// Log the clock every time the hour changes.
    pub log_hour_changes: bool,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            tick_speed: TICK_SPEED,
            start_hour: START_HOUR,
            start_minute: START_MINUTE,
            weather_seed: None,
            log_hour_changes: false,
        }
    }
}

impl CycleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_TICK_SPEED).contains(&self.tick_speed) {
            return Err(ConfigError::Invalid(format!(
                "tick_speed {} is not in 1..={}",
                self.tick_speed, MAX_TICK_SPEED
            )));
        }
        if self.start_hour >= 24 {
            return Err(ConfigError::Invalid(format!(
                "start_hour {} is not in 0..24",
                self.start_hour
            )));
        }
        if self.start_minute >= 60 {
            return Err(ConfigError::Invalid(format!(
                "start_minute {} is not in 0..60",
                self.start_minute
            )));
        }
        Ok(())
    }

    /// Parses and validates settings from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: CycleConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Loads settings from `path`, or from the default location when `None`.
    ///
    /// A missing default file is not an error. Any other failure is logged
    /// and the defaults are used.
    ///
    /// Default location is platform-specific:
    /// - macOS: ~/Library/Application Support/daycycle/
    /// - Linux: ~/.config/daycycle/
    /// - Windows: %APPDATA%/daycycle/
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let Some(path) = Self::default_path() else {
                    warn!("Could not determine config directory, using default cycle settings");
                    return Self::default();
                };
                if !path.exists() {
                    debug!("No cycle config at {:?}, using defaults", path);
                    return Self::default();
                }
                path
            }
        };

        match Self::load_from_path(&path) {
            Ok(config) => {
                info!("Loaded cycle config from {:?}", path);
                config
            }
            Err(e) => {
                error!("{}", e);
                Self::default()
            }
        }
    }

    /// Returns the platform-specific path for the config file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("daycycle");
            path.push(CONFIG_FILE_NAME);
            path
        })
    }
}
