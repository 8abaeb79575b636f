//! Live drag preview geometry.

use robopath_core::config::RobotSettings;
use robopath_core::geometry::{rotate_point, Point};
use robopath_core::Pose;
use robopath_planner::translator::{plan, Travel};

/// Screen geometry for one preview frame of an in-progress drag.
///
/// Both lines are ephemeral: the session erases them before drawing the
/// next frame and on gesture end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragPreview {
    /// Straight guideline from the robot to the live target.
    pub guideline: (Point, Point),
    /// The robot's leading edge at the prospective stop point,
    /// perpendicular to the direction of travel.
    pub stop_edge: (Point, Point),
}

/// Computes the preview for a drag currently over `target` (already
/// quantized).
///
/// The stop edge is oriented by the same plan the release will commit:
/// the front edge of the footprint when the move drives forward, the rear
/// edge when rotation minimization turns it into a backward move. `None`
/// when the target coincides with the pose.
pub fn drag_preview(
    pose: &Pose,
    target: Point,
    robot: &RobotSettings,
    minimize_rotation: bool,
) -> Option<DragPreview> {
    let planned = plan(pose, target, minimize_rotation)?;

    let w = f64::from(robot.width);
    let h = f64::from(robot.height);
    let leading_x = match planned.travel {
        Travel::Forward => target.x + w / 2.0,
        Travel::Backward => target.x - w / 2.0,
    };
    let top = Point::new(leading_x, target.y - h / 2.0);
    let bottom = Point::new(leading_x, target.y + h / 2.0);

    Some(DragPreview {
        guideline: (pose.position(), target),
        stop_edge: (
            rotate_point(top, planned.heading_deg, target),
            rotate_point(bottom, planned.heading_deg, target),
        ),
    })
}
