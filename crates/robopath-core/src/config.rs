//! Configuration for a drawing session.
//!
//! All options are fixed at process start; there is no runtime
//! reconfiguration. Files are JSON, and any omitted section or field falls
//! back to its default.

use crate::error::{ConfigError, Result};
use crate::pose::Pose;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Drawing-surface settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Quantization step: pointer coordinates snap to multiples of this
    /// grid size before any geometry runs
    pub grid_size: u32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
            grid_size: 1,
        }
    }
}

/// Robot body and starting-pose settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotSettings {
    /// Body width in pixels, along the heading axis
    pub width: u32,
    /// Body height in pixels, across the heading axis
    pub height: u32,
    /// Starting x position
    pub start_x: f64,
    /// Starting y position
    pub start_y: f64,
    /// Starting heading in degrees
    pub start_heading_deg: i32,
}

impl Default for RobotSettings {
    fn default() -> Self {
        Self {
            width: 30,
            height: 40,
            start_x: 30.0,
            start_y: 30.0,
            start_heading_deg: 0,
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Drawing-surface settings
    pub canvas: CanvasSettings,
    /// Robot settings
    pub robot: RobotSettings,
}

impl AppConfig {
    /// Loads and validates configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: AppConfig =
            serde_json::from_str(&text).map_err(|e| ConfigError::Parse {
                reason: e.to_string(),
            })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Validates option ranges.
    pub fn validate(&self) -> Result<()> {
        if self.canvas.grid_size == 0 {
            return Err(ConfigError::ZeroGridSize.into());
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ConfigError::InvalidCanvasSize {
                width: self.canvas.width,
                height: self.canvas.height,
            }
            .into());
        }
        if self.robot.width == 0 || self.robot.height == 0 {
            return Err(ConfigError::InvalidRobotSize {
                width: self.robot.width,
                height: self.robot.height,
            }
            .into());
        }
        let on_canvas = self.robot.start_x >= 0.0
            && self.robot.start_x <= f64::from(self.canvas.width)
            && self.robot.start_y >= 0.0
            && self.robot.start_y <= f64::from(self.canvas.height);
        if !on_canvas {
            return Err(ConfigError::StartOutsideCanvas {
                x: self.robot.start_x,
                y: self.robot.start_y,
                width: self.canvas.width,
                height: self.canvas.height,
            }
            .into());
        }
        Ok(())
    }

    /// The configured starting pose.
    pub fn start_pose(&self) -> Pose {
        Pose::new(
            self.robot.start_x,
            self.robot.start_y,
            self.robot.start_heading_deg,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_reference_setup() {
        let config = AppConfig::default();
        assert_eq!(config.canvas.width, 900);
        assert_eq!(config.canvas.height, 600);
        assert_eq!(config.canvas.grid_size, 1);
        assert_eq!(config.robot.width, 30);
        assert_eq!(config.robot.height, 40);
        assert_eq!(config.start_pose(), Pose::new(30.0, 30.0, 0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"canvas": {"grid_size": 10}}"#).unwrap();
        assert_eq!(config.canvas.grid_size, 10);
        assert_eq!(config.canvas.width, 900);
        assert_eq!(config.robot.height, 40);
    }

    #[test]
    fn test_zero_grid_size_rejected() {
        let mut config = AppConfig::default();
        config.canvas.grid_size = 0;
        let err = config.validate().unwrap_err();
        assert!(err.is_config_error());
        assert_eq!(
            err.to_string(),
            "Quantization grid size must be at least 1"
        );
    }

    #[test]
    fn test_zero_robot_size_rejected() {
        let mut config = AppConfig::default();
        config.robot.width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_start_outside_canvas_rejected() {
        let mut config = AppConfig::default();
        config.robot.start_x = 1200.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"canvas": {{"width": 400, "height": 300, "grid_size": 5}},
                "robot": {{"start_x": 50.0, "start_y": 60.0, "start_heading_deg": 270}}}}"#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.canvas.width, 400);
        assert_eq!(config.canvas.grid_size, 5);
        // Heading normalizes into (-180, 180].
        assert_eq!(config.start_pose(), Pose::new(50.0, 60.0, -90));
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(AppConfig::load(file.path()).is_err());
    }
}
