//! Error handling for Robopath.
//!
//! Geometric operation never fails: division by zero in the heading
//! computation is prevented structurally by the zero-distance
//! short-circuit, and invalid gestures are ignored rather than reported.
//! What remains are configuration problems and file I/O, modeled with
//! `thiserror` and unified into a single [`Error`].

use thiserror::Error;

/// Configuration error type
///
/// Produced when loading or validating the fixed start-of-process
/// configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Quantization grid size of zero would collapse every pointer
    /// position onto the origin
    #[error("Quantization grid size must be at least 1")]
    ZeroGridSize,

    /// Canvas dimensions must be positive
    #[error("Canvas dimensions must be positive, got {width}x{height}")]
    InvalidCanvasSize {
        /// Configured canvas width in pixels.
        width: u32,
        /// Configured canvas height in pixels.
        height: u32,
    },

    /// Robot body dimensions must be positive
    #[error("Robot dimensions must be positive, got {width}x{height}")]
    InvalidRobotSize {
        /// Configured body width in pixels.
        width: u32,
        /// Configured body height in pixels.
        height: u32,
    },

    /// Starting position must lie on the canvas
    #[error("Starting position ({x}, {y}) is outside the {width}x{height} canvas")]
    StartOutsideCanvas {
        /// Configured starting x coordinate.
        x: f64,
        /// Configured starting y coordinate.
        y: f64,
        /// Configured canvas width in pixels.
        width: u32,
        /// Configured canvas height in pixels.
        height: u32,
    },

    /// Configuration file did not parse
    #[error("Failed to parse configuration: {reason}")]
    Parse {
        /// The underlying parse failure.
        reason: String,
    },
}

/// Main error type for Robopath
///
/// A unified error type covering every failure the engine can surface.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
