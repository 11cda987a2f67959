//! Application configuration loaded from TOML

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::board::{BOARD_SIZE, RUN_LENGTH};
use crate::error::ConfigError;
use crate::eval::LineWeights;
use crate::lines::check_geometry;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub scoring: ScoringConfig,
    pub window: WindowConfig,
}

/// Board geometry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub size: usize,
    pub run_length: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            size: BOARD_SIZE,
            run_length: RUN_LENGTH,
        }
    }
}

/// Line weights for the computer, indexed by stones already on the line.
/// Each table needs at least `run_length` entries and entry 0 must be 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub attack: Vec<i32>,
    pub block: Vec<i32>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            attack: LineWeights::ATTACK.to_vec(),
            block: LineWeights::BLOCK.to_vec(),
        }
    }
}

/// Initial window size in logical pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 900.0,
            height: 640.0,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board: BoardConfig::default(),
            scoring: ScoringConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Check the geometry can be built and the weight tables fit it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let BoardConfig { size, run_length } = self.board;
        check_geometry(size, run_length)?;

        for (name, table) in [("attack", &self.scoring.attack), ("block", &self.scoring.block)] {
            if table.len() < run_length {
                return Err(ConfigError::Validation(format!(
                    "scoring.{name} needs at least {run_length} entries, found {}",
                    table.len()
                )));
            }
            if table.first() != Some(&0) {
                return Err(ConfigError::Validation(format!(
                    "scoring.{name}[0] must be 0"
                )));
            }
            if table.iter().any(|&w| w < 0) {
                return Err(ConfigError::Validation(format!(
                    "scoring.{name} weights must be non-negative"
                )));
            }
            // A cell sums one weight per line through it, at most 4 * run_length lines
            let max_weight = i32::MAX / (4 * run_length as i32);
            if table.iter().any(|&w| w > max_weight) {
                return Err(ConfigError::Validation(format!(
                    "scoring.{name} weights must not exceed {max_weight}"
                )));
            }
        }

        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(ConfigError::Validation(
                "window size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
