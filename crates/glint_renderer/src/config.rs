//! Render configuration.

use std::path::Path;

use glint_math::{colors, Color};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest accepted image side, in pixels.
pub const MAX_DIMENSION: u32 = 16_384;

/// Errors that can occur while loading or validating a render configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid render config: {0}")]
    Invalid(String),
}

/// Render configuration.
///
/// Every field has a default, so a config file only needs the values it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Bounce budget handed to the shading engine. Each shaded surface
    /// spends one, so a budget of `n` allows `n - 1` reflections.
    pub bounce_limit: u32,
    /// Jittered samples averaged per pixel
    pub sample_count: u32,
    /// Light floor added before clamping the diffuse term
    pub ambient_light: f32,
    /// Color of rays that miss or are fogged out
    pub fog_color: Color,
    /// Distance at which geometry is fully fogged. `None` disables fog.
    pub fog_max_distance: Option<f32>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            bounce_limit: 5,
            sample_count: 4,
            ambient_light: 0.5,
            fog_color: colors::GREY,
            fog_max_distance: Some(6000.0),
        }
    }
}

impl RenderConfig {
    /// Cheaper settings for quick iteration.
    pub fn preview() -> Self {
        Self {
            bounce_limit: 2,
            sample_count: 2,
            ..Default::default()
        }
    }

    /// Fog falloff per unit of distance (0 when fog is disabled).
    pub fn fog_intensity(&self) -> f32 {
        self.fog_max_distance.map_or(0.0, |distance| 1.0 / distance)
    }

    /// Parse a configuration from a JSON string and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration from a JSON file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Check the values the renderer relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "resolution must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(ConfigError::Invalid(format!(
                "resolution must be at most {}x{}, got {}x{}",
                MAX_DIMENSION, MAX_DIMENSION, self.width, self.height
            )));
        }
        if self.sample_count == 0 {
            return Err(ConfigError::Invalid(
                "sample_count must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.ambient_light) {
            return Err(ConfigError::Invalid(format!(
                "ambient_light must be within [0, 1], got {}",
                self.ambient_light
            )));
        }
        if let Some(distance) = self.fog_max_distance {
            if distance.is_nan() || distance <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "fog_max_distance must be positive, got {}",
                    distance
                )));
            }
        }
        Ok(())
    }
}
