//! Engine configuration.
//!
//! Every section falls back to its defaults, so a partial JSON document
//! only needs the values it changes.

use crate::camera::ViewSettings;
use crate::history::HistorySettings;
use crate::snap::SnapSettings;
use crate::tools::ToolDefaults;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// All engine tunables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub snap: SnapSettings,
    pub tools: ToolDefaults,
    pub view: ViewSettings,
    pub history: HistorySettings,
}

impl EngineConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        let config = Self::from_json(&json)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check value ranges the engine relies on.
    pub fn validate(&self) -> ConfigResult<()> {
        let snap = &self.snap;
        non_negative("snap.base_radius", snap.base_radius)?;
        non_negative("snap.min_radius", snap.min_radius)?;
        non_negative("snap.angle_threshold_degrees", snap.angle_threshold_degrees)?;
        non_negative("snap.min_angle_reach", snap.min_angle_reach)?;
        if snap.angle_increments.is_empty() {
            return Err(invalid("snap.angle_increments must not be empty"));
        }
        if snap.angle_increments.iter().any(|a| !a.is_finite()) {
            return Err(invalid("snap.angle_increments must be finite"));
        }

        let tools = &self.tools;
        non_negative("tools.ruler_length", tools.ruler_length)?;
        non_negative("tools.ruler_thickness", tools.ruler_thickness)?;
        positive("tools.set_square_size", tools.set_square_size)?;

        let view = &self.view;
        positive("view.min_zoom", view.min_zoom)?;
        positive("view.grid_spacing", view.grid_spacing)?;
        if view.min_zoom > view.max_zoom {
            return Err(invalid(format!(
                "view.min_zoom ({}) exceeds view.max_zoom ({})",
                view.min_zoom, view.max_zoom
            )));
        }

        if self.history.limit == 0 {
            return Err(invalid("history.limit must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(message.into())
}

fn non_negative(name: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be a non-negative number, got {value}")))
    }
}

fn positive(name: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be a positive number, got {value}")))
    }
}
