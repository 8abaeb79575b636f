//! Interactive drawing session.
//!
//! The session owns the authoritative pose, the command log, and the
//! history ledger, and drives the injected render surface and status sink
//! from pointer-event and button callbacks. Everything runs synchronously
//! on the caller's thread, in event-delivery order: a release is only
//! meaningful after a press validated the gesture, and the gesture flag is
//! consumed at every press.

use anyhow::Context;
use robopath_canvas::{drag_preview, hit_test, DragGesture, Footprint};
use robopath_core::geometry::snap_to_grid;
use robopath_core::{
    AppConfig, Command, GripperAction, GripperSide, Point, Pose, RenderSurface, ShapeHandle,
    StatusSink,
};
use robopath_planner::{translate, CommandLog, HistoryLedger, Translation};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const BODY_FILL: &str = "green";
const ARM_FILL: &str = "blue";
const PATH_FILL: &str = "cyan";
const STOP_EDGE_FILL: &str = "orange";
const PATH_WIDTH: f64 = 2.0;

/// Outcome of a save request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Commands were written; the count feeds the host's notification.
    Saved(usize),
    /// The log was empty and nothing was written. A user-visible warning,
    /// not an error.
    NothingToSave,
}

/// One interactive drawing session over an external render surface and
/// status display.
pub struct Session<S: RenderSurface, D: StatusSink> {
    config: AppConfig,
    surface: S,
    status: D,
    pose: Pose,
    command_log: CommandLog,
    history: HistoryLedger,
    gesture: Option<DragGesture>,
    footprint_shapes: Vec<ShapeHandle>,
    /// Prefer the smaller rotation by allowing backward travel.
    pub minimize_rotation: bool,
}

impl<S: RenderSurface, D: StatusSink> Session<S, D> {
    /// Creates a session at the configured starting pose and draws the
    /// initial footprint.
    pub fn new(config: AppConfig, surface: S, status: D) -> Self {
        let pose = config.start_pose();
        let mut session = Self {
            surface,
            status,
            pose,
            command_log: CommandLog::new(),
            history: HistoryLedger::new(pose),
            gesture: None,
            footprint_shapes: Vec::new(),
            minimize_rotation: true,
            config,
        };
        session.redraw_footprint();
        session
    }

    /// The authoritative pose.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn command_log(&self) -> &CommandLog {
        &self.command_log
    }

    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The injected render surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The injected status sink.
    pub fn status(&self) -> &D {
        &self.status
    }

    /// Whether a drag gesture is currently active.
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    fn quantize(&self, x: f64, y: f64) -> Point {
        snap_to_grid(Point::new(x, y), self.config.canvas.grid_size)
    }

    /// Pointer press. Starts a gesture when the quantized press lands on
    /// the robot; otherwise the whole gesture is silently ignored until
    /// the next press.
    pub fn pointer_pressed(&mut self, x: f64, y: f64) {
        // A press consumes whatever gesture state was left over.
        self.clear_preview();
        let point = self.quantize(x, y);
        self.gesture = if hit_test(&self.pose, &self.config.robot, point) {
            Some(DragGesture::new(point))
        } else {
            None
        };
    }

    /// Pointer move. Redraws the live preview for an active gesture; the
    /// previous frame's shapes are erased first.
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        if self.gesture.is_none() {
            return;
        }
        let target = self.quantize(x, y);
        self.clear_preview();

        let Some(preview) =
            drag_preview(&self.pose, target, &self.config.robot, self.minimize_rotation)
        else {
            return;
        };
        let guideline = self.surface.draw_line(
            preview.guideline.0,
            preview.guideline.1,
            PATH_FILL,
            PATH_WIDTH,
        );
        let stop_edge = self.surface.draw_line(
            preview.stop_edge.0,
            preview.stop_edge.1,
            STOP_EDGE_FILL,
            PATH_WIDTH,
        );
        if let Some(gesture) = self.gesture.as_mut() {
            gesture.guideline = Some(guideline);
            gesture.stop_edge = Some(stop_edge);
        }
    }

    /// Pointer release. Commits the gesture: translates the drawn
    /// displacement into commands, moves the pose, records history, and
    /// redraws the footprint. A drag that returns to its start point ends
    /// with no effect.
    pub fn pointer_released(&mut self, x: f64, y: f64) {
        if self.gesture.is_none() {
            return;
        }
        let target = self.quantize(x, y);
        self.clear_preview();
        self.gesture = None;

        let Translation { commands, pose } =
            translate(&self.pose, target, self.minimize_rotation);
        if commands.is_empty() {
            return;
        }

        let segment = self
            .surface
            .draw_line(self.pose.position(), target, PATH_FILL, PATH_WIDTH);
        self.command_log.extend(commands);
        self.pose = pose;
        self.history.record(self.pose, Some(segment));
        self.redraw_footprint();
        self.status.report(&self.pose);
    }

    /// Undoes the last committed gesture: erases its path segment and
    /// restores position and heading together from the previous entry.
    /// The command log is left untouched.
    pub fn undo(&mut self) {
        let Some(step) = self.history.undo() else {
            return;
        };
        if let Some(handle) = step.popped.artifact {
            self.surface.erase(handle);
        }
        self.pose = step.restored_pose;
        self.redraw_footprint();
        self.status.report(&self.pose);
    }

    /// Clears the surface, the command log, and the history, and restores
    /// the configured starting pose.
    pub fn reset(&mut self) {
        self.gesture = None;
        self.surface.erase_all();
        self.footprint_shapes.clear();
        self.command_log.clear();
        self.pose = self.config.start_pose();
        self.history.clear(self.pose);
        self.redraw_footprint();
        self.status.report(&self.pose);
    }

    /// Appends a manual gripper command. No geometric effect and no
    /// history entry; undo cannot remove it.
    pub fn push_gripper(&mut self, side: GripperSide, action: GripperAction) {
        self.command_log.push(Command::Gripper { side, action });
    }

    /// Saves the command log as newline-delimited tokens, one per line.
    ///
    /// An empty log is a warning outcome, not an error. Write failures are
    /// surfaced to the caller; the in-memory log is untouched either way.
    pub fn save_commands(&self, path: impl AsRef<Path>) -> anyhow::Result<SaveOutcome> {
        if self.command_log.is_empty() {
            tracing::warn!("no commands to save");
            return Ok(SaveOutcome::NothingToSave);
        }

        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        self.command_log.write_to(&mut writer)?;
        writer.flush()?;

        tracing::info!(
            count = self.command_log.len(),
            path = %path.display(),
            "saved command list"
        );
        Ok(SaveOutcome::Saved(self.command_log.len()))
    }

    fn clear_preview(&mut self) {
        if let Some(gesture) = self.gesture.as_mut() {
            let (guideline, stop_edge) = gesture.take_preview();
            if let Some(handle) = guideline {
                self.surface.erase(handle);
            }
            if let Some(handle) = stop_edge {
                self.surface.erase(handle);
            }
        }
    }

    fn redraw_footprint(&mut self) {
        for handle in self.footprint_shapes.drain(..) {
            self.surface.erase(handle);
        }
        let footprint = Footprint::at(&self.pose, &self.config.robot);
        let body = self.surface.draw_polygon(&footprint.body, BODY_FILL);
        let arm = self.surface.draw_polygon(&footprint.arm, ARM_FILL);
        self.footprint_shapes.push(body);
        self.footprint_shapes.push(arm);
    }
}
