//! # Robopath Canvas
//!
//! Render projection for Robopath: the polygon and line coordinates an
//! external drawing surface needs for the robot footprint and the live
//! drag preview, plus the per-drag gesture state.
//!
//! Nothing here draws. The session feeds these coordinates to the host's
//! [`RenderSurface`](robopath_core::RenderSurface) implementation.

pub mod footprint;
pub mod gesture;
pub mod preview;

pub use footprint::{hit_test, Footprint};
pub use gesture::DragGesture;
pub use preview::{drag_preview, DragPreview};
