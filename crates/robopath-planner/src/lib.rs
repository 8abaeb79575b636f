//! # Robopath Planner
//!
//! Drag-to-command translation, the emitted command log, and the
//! history/undo ledger.
//!
//! The planner is pure state-machine logic: it owns no drawing-surface or
//! widget state and is driven synchronously by the session's event
//! callbacks.

pub mod command_log;
pub mod history;
pub mod translator;

pub use command_log::CommandLog;
pub use history::{HistoryEntry, HistoryLedger, UndoStep};
pub use translator::{plan, translate, PlannedMove, Translation, Travel};
