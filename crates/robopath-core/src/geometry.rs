//! Planar geometry for the drawing surface.
//!
//! Screen coordinates: x grows to the right, y grows downward. Angles are
//! integer degrees with 0 pointing along +x; positive angles turn clockwise
//! on screen (a consequence of the downward y axis).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Normalizes an angle in degrees into the canonical `(-180, 180]` range.
///
/// Every heading stored in a pose and every rotation delta goes through
/// this one function; all translator branches are derived from it.
pub fn normalize_deg(angle: i32) -> i32 {
    let wrapped = angle.rem_euclid(360);
    if wrapped > 180 {
        wrapped - 360
    } else {
        wrapped
    }
}

/// Rotates `point` about `center` by `angle_deg` degrees, clockwise on
/// screen.
///
/// Angle-additive: rotating by `a` then `b` equals rotating by `a + b`
/// within floating-point rounding, so applying the inverse angle returns
/// the original point.
pub fn rotate_point(point: Point, angle_deg: i32, center: Point) -> Point {
    let theta = f64::from(normalize_deg(angle_deg)).to_radians();
    let (sin, cos) = theta.sin_cos();
    let xt = point.x - center.x;
    let yt = point.y - center.y;
    Point::new(xt * cos - yt * sin + center.x, xt * sin + yt * cos + center.y)
}

/// Heading of the vector from `from` to `to`, in integer degrees in
/// `(-180, 180]`.
///
/// Computed from the arc cosine of the normalized x component and rounded
/// to whole degrees; targets above `from` (smaller screen y) take the
/// negative branch. The two points must be distinct.
pub fn heading_between(from: Point, to: Point) -> i32 {
    let distance = from.distance_to(to);
    debug_assert!(distance > 0.0, "heading_between requires distinct points");
    let cosine = ((to.x - from.x) / distance).clamp(-1.0, 1.0);
    let degrees = cosine.acos().to_degrees().round() as i32;
    if to.y < from.y {
        normalize_deg(-degrees)
    } else {
        normalize_deg(degrees)
    }
}

/// Snaps a pointer position to the quantization grid.
///
/// Each coordinate floors to the next lower multiple of `grid`, so every
/// position inside a cell maps to the cell's top-left corner.
pub fn snap_to_grid(p: Point, grid: u32) -> Point {
    debug_assert!(grid > 0, "grid size is validated at configuration time");
    let step = f64::from(grid);
    Point::new((p.x / step).floor() * step, (p.y / step).floor() * step)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS,
            "{} != {}",
            a,
            b
        );
    }

    #[test]
    fn test_normalize_deg_canonical_range() {
        assert_eq!(normalize_deg(0), 0);
        assert_eq!(normalize_deg(180), 180);
        assert_eq!(normalize_deg(-180), 180);
        assert_eq!(normalize_deg(181), -179);
        assert_eq!(normalize_deg(-181), 179);
        assert_eq!(normalize_deg(360), 0);
        assert_eq!(normalize_deg(540), 180);
        assert_eq!(normalize_deg(-90), -90);
        assert_eq!(normalize_deg(270), -90);
        assert_eq!(normalize_deg(-270), 90);
        assert_eq!(normalize_deg(725), 5);
    }

    #[test]
    fn test_rotate_point_quarter_turn() {
        let center = Point::new(10.0, 10.0);
        // Clockwise on screen: +x rotates toward +y.
        let rotated = rotate_point(Point::new(20.0, 10.0), 90, center);
        assert_close(rotated, Point::new(10.0, 20.0));

        let rotated = rotate_point(Point::new(20.0, 10.0), -90, center);
        assert_close(rotated, Point::new(10.0, 0.0));
    }

    #[test]
    fn test_rotate_point_inverse_returns_original() {
        let center = Point::new(3.0, -7.0);
        let original = Point::new(42.5, 13.25);
        for angle in [1, 17, 45, 90, 133, 179, 180] {
            let there = rotate_point(original, angle, center);
            let back = rotate_point(there, -angle, center);
            assert_close(back, original);
        }
    }

    #[test]
    fn test_rotate_point_is_angle_additive() {
        let center = Point::new(0.0, 0.0);
        let p = Point::new(5.0, 2.0);
        for (a, b) in [(30, 60), (-45, 120), (170, 170), (15, -90)] {
            let stepped = rotate_point(rotate_point(p, a, center), b, center);
            let direct = rotate_point(p, a + b, center);
            assert_close(stepped, direct);
        }
    }

    #[test]
    fn test_heading_between_axes() {
        let origin = Point::new(0.0, 0.0);
        assert_eq!(heading_between(origin, Point::new(100.0, 0.0)), 0);
        // Screen-down is the positive quarter turn.
        assert_eq!(heading_between(origin, Point::new(0.0, 100.0)), 90);
        assert_eq!(heading_between(origin, Point::new(0.0, -100.0)), -90);
        assert_eq!(heading_between(origin, Point::new(-100.0, 0.0)), 180);
    }

    #[test]
    fn test_heading_between_diagonals() {
        let origin = Point::new(0.0, 0.0);
        assert_eq!(heading_between(origin, Point::new(100.0, 100.0)), 45);
        assert_eq!(heading_between(origin, Point::new(-100.0, 100.0)), 135);
        assert_eq!(heading_between(origin, Point::new(-100.0, -100.0)), -135);
        assert_eq!(heading_between(origin, Point::new(100.0, -100.0)), -45);
    }

    #[test]
    fn test_heading_between_rounds_to_whole_degrees() {
        let origin = Point::new(0.0, 0.0);
        // atan(1/3) = 18.43 degrees.
        assert_eq!(heading_between(origin, Point::new(300.0, 100.0)), 18);
        // Just shy of straight left, below the axis.
        assert_eq!(heading_between(origin, Point::new(-1000.0, -1.0)), 180);
    }

    #[test]
    fn test_distance() {
        let a = Point::new(30.0, 30.0);
        assert_eq!(a.distance_to(Point::new(130.0, 30.0)), 100.0);
        assert_eq!(a.distance_to(Point::new(33.0, 34.0)), 5.0);
        assert_eq!(a.distance_to(a), 0.0);
    }

    #[test]
    fn test_snap_to_grid_floors() {
        assert_close(snap_to_grid(Point::new(17.0, 23.0), 10), Point::new(10.0, 20.0));
        assert_close(snap_to_grid(Point::new(20.0, 29.9), 10), Point::new(20.0, 20.0));
        assert_close(snap_to_grid(Point::new(-3.0, -0.5), 10), Point::new(-10.0, -10.0));
        assert_close(snap_to_grid(Point::new(7.7, 4.2), 1), Point::new(7.0, 4.0));
    }
}
