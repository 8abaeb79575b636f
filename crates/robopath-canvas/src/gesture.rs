//! Per-drag gesture state.

use robopath_core::geometry::Point;
use robopath_core::ShapeHandle;

/// State for one press-move-release interaction.
///
/// Created at a valid press and dropped when the gesture ends; holds the
/// handles of the ephemeral preview shapes so each frame can erase the
/// previous one. Replaces ambient "current line" widget state with a value
/// scoped to the gesture's lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    /// Quantized press position.
    pub origin: Point,
    /// Guideline handle from the last preview frame.
    pub guideline: Option<ShapeHandle>,
    /// Stop-edge indicator handle from the last preview frame.
    pub stop_edge: Option<ShapeHandle>,
}

impl DragGesture {
    /// Starts a gesture at the quantized press position.
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            guideline: None,
            stop_edge: None,
        }
    }

    /// Takes both preview handles, leaving the gesture with none.
    pub fn take_preview(&mut self) -> (Option<ShapeHandle>, Option<ShapeHandle>) {
        (self.guideline.take(), self.stop_edge.take())
    }
}
