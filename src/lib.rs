//! # Robopath
//!
//! Converts mouse-drawn path segments on a 2D canvas into motor-control
//! command sequences (forward/backward distance, rotation angle, gripper
//! up/down) for a small wheeled robot.
//!
//! ## Architecture
//!
//! Robopath is organized as a workspace with multiple crates:
//!
//! 1. **robopath-core** - Geometry, pose, commands, configuration, and the
//!    collaborator traits a host frontend implements
//! 2. **robopath-planner** - Drag-to-command translation, command log,
//!    history/undo ledger
//! 3. **robopath-canvas** - Render projection: footprint polygons, drag
//!    preview, gesture state
//! 4. **robopath** - The session wiring the members together behind the
//!    host's pointer and button callbacks
//!
//! The engine draws nothing and opens no windows: the host supplies a
//! [`RenderSurface`] and a [`StatusSink`], feeds pointer events to a
//! [`Session`], and receives opaque shape handles back.

pub mod session;

pub use robopath_canvas::{drag_preview, hit_test, DragGesture, DragPreview, Footprint};
pub use robopath_core::{
    heading_between, normalize_deg, rotate_point, snap_to_grid, AppConfig, CanvasSettings,
    Command, ConfigError, Error, GripperAction, GripperSide, Point, Pose, RenderSurface, Result,
    RobotSettings, ShapeHandle, StatusSink,
};
pub use robopath_planner::{
    plan, translate, CommandLog, HistoryEntry, HistoryLedger, PlannedMove, Translation, Travel,
    UndoStep,
};
pub use session::{SaveOutcome, Session};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and `RUST_LOG`
/// environment variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
