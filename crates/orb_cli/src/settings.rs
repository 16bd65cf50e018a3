//! Render settings with optional JSON overrides.
//!
//! Defaults live in code; a settings file only needs the fields it wants
//! to change. Validation happens at load time so bad parameters fail fast
//! instead of mid-render.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors surfaced while loading render settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Camera placement and lens parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub look_from: [f32; 3],
    pub look_at: [f32; 3],
    pub vup: [f32; 3],
    /// Vertical field of view in degrees
    pub vfov: f32,
    /// Lens diameter; 0 is a pinhole camera
    pub aperture: f32,
    pub focus_dist: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            look_from: [13.0, 2.0, 3.0],
            look_at: [0.0, 0.0, 0.0],
            vup: [0.0, 1.0, 0.0],
            vfov: 20.0,
            aperture: 0.1,
            focus_dist: 10.0,
        }
    }
}

/// Full render settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub samples_per_pixel: u32,
    pub max_depth: u32,
    pub seed: u64,
    /// Output path; `.png` selects PNG, anything else writes plain PPM
    pub output: String,
    pub camera: CameraSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 450,
            samples_per_pixel: 100,
            max_depth: 50,
            seed: 0,
            output: "out.ppm".to_string(),
            camera: CameraSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file and validate them.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.width == 0 || self.height == 0 {
            return Err(SettingsError::Invalid(format!(
                "image dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(SettingsError::Invalid(
                "samples_per_pixel must be at least 1".to_string(),
            ));
        }
        if self.camera.focus_dist <= 0.0 {
            return Err(SettingsError::Invalid(format!(
                "focus_dist must be positive, got {}",
                self.camera.focus_dist
            )));
        }
        Ok(())
    }
}
