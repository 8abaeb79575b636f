//! External collaborator interfaces.
//!
//! The engine owns no drawing-surface or widget state. A host frontend
//! implements these traits; the session calls into them and keeps only the
//! opaque handles it needs to erase shapes later.

use crate::geometry::Point;
use crate::pose::Pose;

/// Opaque identifier for a shape drawn on the render surface.
pub type ShapeHandle = u64;

/// Drawing surface provided by the host frontend.
pub trait RenderSurface {
    /// Draws a filled polygon and returns its handle.
    fn draw_polygon(&mut self, points: &[Point], fill: &str) -> ShapeHandle;

    /// Draws a line segment and returns its handle.
    fn draw_line(&mut self, from: Point, to: Point, fill: &str, width: f64) -> ShapeHandle;

    /// Erases a single shape.
    fn erase(&mut self, handle: ShapeHandle);

    /// Erases every shape on the surface.
    fn erase_all(&mut self);
}

/// Status display provided by the host frontend.
pub trait StatusSink {
    /// Called with the authoritative pose after every committed change.
    fn report(&mut self, pose: &Pose);
}
