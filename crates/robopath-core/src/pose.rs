//! The robot's position and heading at a point in time.

use crate::geometry::{normalize_deg, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position and heading of the robot on the drawing surface.
///
/// The heading is kept canonically normalized into `(-180, 180]`: 0 points
/// along +x (screen-right) and positive values turn clockwise. Exactly one
/// authoritative pose exists at a time; every other `Pose` value is a
/// historical snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    x: f64,
    y: f64,
    heading_deg: i32,
}

impl Pose {
    /// Creates a pose, normalizing the heading.
    pub fn new(x: f64, y: f64, heading_deg: i32) -> Self {
        Self {
            x,
            y,
            heading_deg: normalize_deg(heading_deg),
        }
    }

    /// Creates a pose at `position` with the given heading.
    pub fn at(position: Point, heading_deg: i32) -> Self {
        Self::new(position.x, position.y, heading_deg)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Heading in degrees, always in `(-180, 180]`.
    pub fn heading_deg(&self) -> i32 {
        self.heading_deg
    }

    /// The pose position as a point.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) @ {}°", self.x, self.y, self.heading_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_is_normalized_on_construction() {
        assert_eq!(Pose::new(0.0, 0.0, 270).heading_deg(), -90);
        assert_eq!(Pose::new(0.0, 0.0, -180).heading_deg(), 180);
        assert_eq!(Pose::new(0.0, 0.0, 720).heading_deg(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Pose::new(30.0, 30.0, 0).to_string(), "(30, 30) @ 0°");
    }
}
