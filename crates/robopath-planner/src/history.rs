//! Append-only history of committed poses with pop-based undo.

use robopath_core::{Pose, ShapeHandle};
use serde::{Deserialize, Serialize};

/// One committed gesture: the pose the robot reached and the handle of the
/// path segment drawn for it. The initial sentinel entry has no artifact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub pose: Pose,
    pub artifact: Option<ShapeHandle>,
}

/// Result of a successful undo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UndoStep {
    /// The removed entry; its artifact must be erased from the surface.
    pub popped: HistoryEntry,
    /// The pose now at the tail of the ledger. Position and heading are
    /// restored together from this one entry.
    pub restored_pose: Pose,
}

/// Append-only ledger of pose transitions.
///
/// Always holds at least the sentinel entry for the starting pose; undo at
/// that floor is a no-op.
#[derive(Debug, Clone)]
pub struct HistoryLedger {
    entries: Vec<HistoryEntry>,
}

impl HistoryLedger {
    /// Creates a ledger holding only the sentinel for `start_pose`.
    pub fn new(start_pose: Pose) -> Self {
        Self {
            entries: vec![HistoryEntry {
                pose: start_pose,
                artifact: None,
            }],
        }
    }

    /// Records a committed gesture.
    pub fn record(&mut self, pose: Pose, artifact: Option<ShapeHandle>) {
        self.entries.push(HistoryEntry { pose, artifact });
    }

    /// Pops the most recent entry and reports the pose now at the tail.
    ///
    /// Returns `None` when only the sentinel remains.
    pub fn undo(&mut self) -> Option<UndoStep> {
        if self.entries.len() <= 1 {
            return None;
        }
        let popped = self.entries.pop()?;
        let restored_pose = self.entries.last()?.pose;
        Some(UndoStep {
            popped,
            restored_pose,
        })
    }

    /// Resets the ledger to the single sentinel for `start_pose`.
    pub fn clear(&mut self, start_pose: Pose) {
        self.entries.clear();
        self.entries.push(HistoryEntry {
            pose: start_pose,
            artifact: None,
        });
    }

    /// Number of entries, sentinel included. Never less than 1.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pose at the tail of the ledger: the most recently committed pose.
    pub fn current_pose(&self) -> Pose {
        self.entries
            .last()
            .expect("history ledger always holds the sentinel")
            .pose
    }

    /// Entries oldest-first, sentinel included.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}
