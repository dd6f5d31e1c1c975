//! Headless shell: replays a recorded event script against a canvas.

use serde::{Deserialize, Serialize};
use snapruler_core::{Canvas, ConfigError, EngineConfig, InputEvent};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Replay errors.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A recorded session: optional configuration plus the events to feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub config: Option<EngineConfig>,
    #[serde(default)]
    pub events: Vec<InputEvent>,
}

impl Script {
    /// Parse a script and validate its configuration.
    pub fn from_json(json: &str) -> Result<Self, ReplayError> {
        let script: Self = serde_json::from_str(json)?;
        if let Some(config) = &script.config {
            config.validate()?;
        }
        Ok(script)
    }

    /// Read and parse a script file.
    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let json = fs::read_to_string(path)
            .map_err(|e| ReplayError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }
}

/// Feed every event of `script` to a fresh canvas.
pub fn replay(script: &Script) -> Canvas {
    let mut canvas = Canvas::with_config(script.config.clone().unwrap_or_default());
    for event in &script.events {
        canvas.handle_event(event);
    }
    log::info!(
        "replayed {} events, {} shapes committed",
        script.events.len(),
        canvas.shapes().len()
    );
    canvas
}

/// Load a script, replay it and render the final state as pretty JSON.
pub fn run(path: &Path) -> Result<String, ReplayError> {
    let script = Script::load(path)?;
    let canvas = replay(&script);
    Ok(serde_json::to_string_pretty(&canvas.renderable_state())?)
}
