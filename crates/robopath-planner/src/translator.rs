//! Drag-to-command translation.
//!
//! Given the robot's current pose and a quantized target point, computes
//! the rotation + translation command pair reproducing the drawn
//! displacement. With rotation minimization enabled, a turn larger than
//! 90° is reflected to its complement and the robot drives backward
//! instead, halving the worst-case rotation at the cost of travel
//! direction.

use robopath_core::geometry::{heading_between, normalize_deg, Point};
use robopath_core::{Command, Pose};

/// Direction of travel for a planned move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Travel {
    Forward,
    Backward,
}

/// Geometric plan for one committed drag.
///
/// Shared between the live drag preview and the final translation so the
/// preview always shows the move the release will commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedMove {
    /// In-place rotation before driving, degrees clockwise. Always within
    /// `(-180, 180)`; zero means no rotation command is emitted.
    pub rotation_deg: i32,
    /// Driving direction after the rotation.
    pub travel: Travel,
    /// Driving distance in grid units.
    pub distance: u32,
    /// Heading after the move completes, in `(-180, 180]`.
    pub heading_deg: i32,
}

/// Commands emitted for a drag plus the pose the robot ends in.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub commands: Vec<Command>,
    pub pose: Pose,
}

/// Plans the move from `current` to `target` (already quantized).
///
/// Returns `None` when the rounded displacement is zero. The rotation
/// delta is the normalized difference between the target heading and the
/// current heading; the tie at exactly 180° always becomes a pure backward
/// move with no turn, leaving the heading unchanged.
pub fn plan(current: &Pose, target: Point, minimize_rotation: bool) -> Option<PlannedMove> {
    // Distances encode as integers; halfway values round away from zero.
    let distance = current.position().distance_to(target).round() as u32;
    if distance == 0 {
        return None;
    }

    let target_heading = heading_between(current.position(), target);
    let raw_delta = normalize_deg(target_heading - current.heading_deg());

    let planned = if raw_delta == 180 {
        // The minimization reflection degenerates to zero rotation here:
        // drive straight back.
        PlannedMove {
            rotation_deg: 0,
            travel: Travel::Backward,
            distance,
            heading_deg: current.heading_deg(),
        }
    } else if raw_delta.abs() <= 90 || !minimize_rotation {
        PlannedMove {
            rotation_deg: raw_delta,
            travel: Travel::Forward,
            distance,
            heading_deg: target_heading,
        }
    } else {
        // Reflect the turn to its complement: magnitude 180 - |raw_delta|,
        // opposite sign.
        let adjusted = raw_delta - 180 * raw_delta.signum();
        PlannedMove {
            rotation_deg: adjusted,
            travel: Travel::Backward,
            distance,
            heading_deg: normalize_deg(current.heading_deg() + adjusted),
        }
    };
    Some(planned)
}

/// Translates a drag into commands and the resulting pose.
///
/// The new position is always the quantized target point; the heading
/// follows the planned move. A zero displacement produces no commands and
/// leaves the pose untouched.
pub fn translate(current: &Pose, target: Point, minimize_rotation: bool) -> Translation {
    let Some(planned) = plan(current, target, minimize_rotation) else {
        return Translation {
            commands: Vec::new(),
            pose: *current,
        };
    };

    let mut commands = Vec::with_capacity(2);
    if planned.rotation_deg != 0 {
        commands.push(Command::Rotate(planned.rotation_deg));
    }
    commands.push(match planned.travel {
        Travel::Forward => Command::Forward(planned.distance),
        Travel::Backward => Command::Backward(planned.distance),
    });

    tracing::debug!(
        rotation = planned.rotation_deg,
        distance = planned.distance,
        heading = planned.heading_deg,
        "translated drag"
    );

    Translation {
        commands,
        pose: Pose::at(target, planned.heading_deg),
    }
}
