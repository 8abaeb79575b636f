//! # Robopath Core
//!
//! Core types, traits, and utilities for Robopath: planar geometry, the
//! robot pose, motor-control commands, session configuration, and the
//! interfaces a host frontend implements.

pub mod command;
pub mod config;
pub mod error;
pub mod geometry;
pub mod pose;
pub mod surface;

pub use command::{Command, GripperAction, GripperSide};
pub use config::{AppConfig, CanvasSettings, RobotSettings};
pub use error::{ConfigError, Error, Result};
pub use geometry::{heading_between, normalize_deg, rotate_point, snap_to_grid, Point};
pub use pose::Pose;
pub use surface::{RenderSurface, ShapeHandle, StatusSink};
