//! Configuration management for the gesture recognition application

use crate::constants::DEFAULT_MOVEMENT_MARGIN;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Movement detection configuration
    pub movement: MovementConfig,

    /// Replay output configuration
    pub display: DisplayConfig,
}

/// Movement detection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementConfig {
    /// Minimum summed fingertip displacement between consecutive frames to
    /// report movement (normalized units)
    pub margin: f32,
}

/// Replay output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Log the per-frame raised finger total
    pub show_finger_count: bool,

    /// Log detected gestures
    pub show_gestures: bool,

    /// Log the movement flag
    pub show_movement: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            movement: MovementConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MOVEMENT_MARGIN,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_finger_count: true,
            show_gestures: true,
            show_movement: true,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the write fails.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns an error when a setting is outside its valid range.
    pub fn validate(&self) -> Result<()> {
        if !self.movement.margin.is_finite() || self.movement.margin <= 0.0 {
            return Err(Error::ConfigError(
                "Movement margin must be a positive finite number".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r"# Hand Gesture Recognition Configuration

# Movement detection
movement:
  margin: 0.025

# Replay output
display:
  show_finger_count: true
  show_gestures: true
  show_movement: true
";
