//! Motor-control commands and their wire tokens.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which gripper a gripper command operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GripperSide {
    Left,
    Right,
    Both,
}

/// Raise or lower motion for a gripper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GripperAction {
    Raise,
    Lower,
}

/// A single motor-control command, one line of the saved command file.
///
/// `Display` renders the wire token understood by the robot firmware:
/// `F120`, `B45`, `R-90`, or a two-letter gripper token (`H`/`L` for
/// raise/lower, followed by `R`/`L`/`A` for right/left/both).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Drive forward by a distance in grid units.
    Forward(u32),
    /// Drive backward by a distance in grid units.
    Backward(u32),
    /// Rotate in place by a signed angle in degrees, clockwise positive.
    /// Emitted values always lie in `[-180, 180]`.
    Rotate(i32),
    /// Raise or lower one or both grippers.
    Gripper {
        side: GripperSide,
        action: GripperAction,
    },
}

impl Command {
    /// The wire token for this command.
    pub fn token(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward(distance) => write!(f, "F{}", distance),
            Self::Backward(distance) => write!(f, "B{}", distance),
            Self::Rotate(angle) => write!(f, "R{}", angle),
            Self::Gripper { side, action } => {
                let action = match action {
                    GripperAction::Lower => 'L',
                    GripperAction::Raise => 'H',
                };
                let side = match side {
                    GripperSide::Right => 'R',
                    GripperSide::Left => 'L',
                    GripperSide::Both => 'A',
                };
                write!(f, "{}{}", action, side)
            }
        }
    }
}
