//! Robot footprint projection.

use robopath_core::config::RobotSettings;
use robopath_core::geometry::{rotate_point, Point};
use robopath_core::Pose;

/// Corner points of the robot's two rendered rectangles at a pose.
///
/// Both rectangles are built axis-aligned around the pose position and
/// then rotated by the pose heading about that position. Corners run
/// clockwise from the top-left of the unrotated rectangle. A footprint is
/// a projection of one pose: it is recomputed, and the previous one
/// discarded, on every pose change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    /// Body rectangle, centered on the pose position.
    pub body: [Point; 4],
    /// Arm rectangle, the leading quarter of the body on the heading side.
    pub arm: [Point; 4],
}

impl Footprint {
    /// Computes the footprint for `pose`.
    pub fn at(pose: &Pose, robot: &RobotSettings) -> Self {
        let center = pose.position();
        let w = f64::from(robot.width);
        let h = f64::from(robot.height);

        let body = rect_corners(center.x - w / 2.0, center.x + w / 2.0, center.y, h);
        let arm = rect_corners(center.x + w / 4.0, center.x + w / 2.0, center.y, h);

        Self {
            body: body.map(|p| rotate_point(p, pose.heading_deg(), center)),
            arm: arm.map(|p| rotate_point(p, pose.heading_deg(), center)),
        }
    }
}

fn rect_corners(x1: f64, x2: f64, center_y: f64, height: f64) -> [Point; 4] {
    let y1 = center_y - height / 2.0;
    let y2 = center_y + height / 2.0;
    [
        Point::new(x1, y1),
        Point::new(x2, y1),
        Point::new(x2, y2),
        Point::new(x1, y2),
    ]
}

/// Whether a press at `point` starts a valid gesture.
///
/// The accepting region is an axis-aligned box extending a full body width
/// and height on each side of the pose position, so presses near the robot
/// still begin a drag regardless of its rotation.
pub fn hit_test(pose: &Pose, robot: &RobotSettings, point: Point) -> bool {
    let w = f64::from(robot.width);
    let h = f64::from(robot.height);
    point.x > pose.x() - w
        && point.x < pose.x() + w
        && point.y > pose.y() - h
        && point.y < pose.y() + h
}
