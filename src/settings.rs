//! Session settings
//!
//! Field dimensions are supplied once at session start. Settings can be read
//! from a JSON file; missing fields take their defaults.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Field;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("field {width}x{height} is not finite")]
    NonFiniteField { width: f32, height: f32 },
    #[error("field {width}x{height} is smaller than the player ({min}x{min})")]
    FieldTooSmall { width: f32, height: f32, min: f32 },
    #[error("frame interval must be positive, got {0}ms")]
    FrameInterval(f64),
    #[error("move speed must be positive and finite, got {0}")]
    MoveSpeed(f32),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Play area width
    pub field_width: f32,
    /// Play area height
    pub field_height: f32,
    /// Player start point, clamped into the field
    pub start_x: f32,
    pub start_y: f32,
    /// Spawn RNG seed
    pub seed: u64,
    /// Motion tick cadence
    pub frame_interval_ms: f64,
    /// Displacement per applied tick
    pub move_speed: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: 1280.0,
            field_height: 800.0,
            start_x: DEFAULT_START_X,
            start_y: DEFAULT_START_Y,
            seed: 0x5EED_6A55,
            frame_interval_ms: FRAME_INTERVAL_MS,
            move_speed: MOVE_SPEED,
        }
    }
}

impl Settings {
    pub fn field(&self) -> Field {
        Field::new(self.field_width, self.field_height)
    }

    pub fn start(&self) -> Vec2 {
        Vec2::new(self.start_x, self.start_y)
    }

    /// Check that a session can be built from these settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.field_width, self.field_height);
        if !width.is_finite() || !height.is_finite() {
            return Err(ConfigError::NonFiniteField { width, height });
        }
        let min = PLAYER_HALF_SIZE * 2.0;
        if width < min || height < min {
            return Err(ConfigError::FieldTooSmall { width, height, min });
        }
        if self.frame_interval_ms.is_nan() || self.frame_interval_ms <= 0.0 {
            return Err(ConfigError::FrameInterval(self.frame_interval_ms));
        }
        if !(self.move_speed.is_finite() && self.move_speed > 0.0) {
            return Err(ConfigError::MoveSpeed(self.move_speed));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from `path`, falling back to defaults on any problem
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "field_width": 1920.0, "seed": 9 }"#).unwrap();
        assert_eq!(settings.field_width, 1920.0);
        assert_eq!(settings.field_height, 800.0);
        assert_eq!(settings.seed, 9);
        assert_eq!(settings.move_speed, MOVE_SPEED);
    }

    #[test]
    fn test_field_too_small_rejected() {
        let err = Settings::from_json(r#"{ "field_width": 300.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::FieldTooSmall { .. }));
    }

    #[test]
    fn test_bad_json_rejected() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_bad_frame_interval_rejected() {
        let settings = Settings {
            frame_interval_ms: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::FrameInterval(_))
        ));
    }

    #[test]
    fn test_bad_move_speed_rejected() {
        let err = Settings::from_json(r#"{ "move_speed": -8.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::MoveSpeed(_)));
        for move_speed in [0.0, f32::NAN, f32::INFINITY] {
            let settings = Settings {
                move_speed,
                ..Default::default()
            };
            assert!(matches!(settings.validate(), Err(ConfigError::MoveSpeed(_))));
        }
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings =
            Settings::load_or_default(Some(Path::new("/nonexistent/grass-grazer.json")));
        assert_eq!(settings.field_width, Settings::default().field_width);
    }
}
