//! Editor session: owns the path, the viewport and the generated program.
//!
//! This module is split into submodules for better organization:
//! - `input`: Pointer handling (add, select, drag, bulk delete, pan)
//! - `code`: Program regeneration, output sinks and notifications
//! - `slots`: Save slots and auto-save of the loaded slot
//! - `file_io`: Save/load of path files
//!
//! Every accepted mutation regenerates the program before returning, so
//! readers always observe the code for the path as it is after the mutation.

mod code;
mod file_io;
mod input;
mod slots;

pub use code::{CodeSink, Notification, NotificationLevel, TextBuffer};
pub use input::{InputOutcome, PointerButton};

use std::path::PathBuf;

use fieldpath_core::{CodegenError, PathError};

use crate::codegen::{CodeFormat, PathCodeGenerator, NO_WAYPOINTS_PLACEHOLDER};
use crate::geometry::Point;
use crate::overlay::{place_robot, RobotDimensions, RobotPlacement};
use crate::path::WaypointPath;
use crate::slots::{SaveSlots, SlotId};
use crate::viewport::Viewport;
use crate::waypoint::{WaypointEdit, WaypointId};

/// Pointer interaction in progress.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PointerState {
    pub(crate) panning: bool,
    pub(crate) last_device: Option<Point>,
}

/// One editing session over a single path.
pub struct EditorSession {
    pub(crate) path: WaypointPath,
    pub(crate) viewport: Viewport,
    pub(crate) generator: PathCodeGenerator,
    pub(crate) robot: RobotDimensions,
    pub(crate) generated_code: String,
    pub(crate) sinks: Vec<Box<dyn CodeSink>>,
    pub(crate) notifications: Vec<Notification>,
    pub(crate) slots: SaveSlots,
    pub(crate) loaded_slot: Option<SlotId>,
    pub(crate) editing: Option<WaypointId>,
    pub(crate) pointer: PointerState,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
}

impl EditorSession {
    /// Creates a session on the default square canvas.
    pub fn new() -> Self {
        Self::with_viewport(Viewport::default())
    }

    /// Creates a session for a given viewport. An unusable canvas size falls
    /// back to the default one.
    pub fn with_viewport(viewport: Viewport) -> Self {
        let (viewport, generator) =
            match PathCodeGenerator::new(CodeFormat::default(), viewport.canvas_size()) {
                Ok(generator) => (viewport, generator),
                Err(e) => {
                    tracing::warn!("{}, using default canvas", e);
                    (Viewport::default(), PathCodeGenerator::default())
                }
            };

        Self {
            path: WaypointPath::new(),
            viewport,
            generator,
            robot: RobotDimensions::default(),
            generated_code: NO_WAYPOINTS_PLACEHOLDER.to_string(),
            sinks: Vec::new(),
            notifications: Vec::new(),
            slots: SaveSlots::new(),
            loaded_slot: None,
            editing: None,
            pointer: PointerState::default(),
            current_file_path: None,
            is_modified: false,
        }
    }

    pub fn path(&self) -> &WaypointPath {
        &self.path
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn robot_dimensions(&self) -> RobotDimensions {
        self.robot
    }

    pub fn set_robot_dimensions(&mut self, robot: RobotDimensions) {
        self.robot = robot;
    }

    /// Changes the grid density. Existing waypoints are not re-snapped.
    pub fn set_grid_size(&mut self, grid_size: u32) {
        self.viewport.set_grid_size(grid_size);
    }

    /// Resizes the canvas and regenerates the program for the new scale.
    pub fn set_canvas_size(&mut self, canvas_size: f64) -> Result<(), CodegenError> {
        let generator = PathCodeGenerator::new(self.generator.format(), canvas_size)?;
        self.generator = generator;
        self.viewport.set_canvas_size(canvas_size, canvas_size);
        self.regenerate();
        Ok(())
    }

    /// Selects the output format by name.
    pub fn set_format(&mut self, name: &str) -> Result<(), CodegenError> {
        let format: CodeFormat = name.parse()?;
        self.generator = PathCodeGenerator::new(format, self.generator.canvas_size())?;
        self.regenerate();
        Ok(())
    }

    pub fn format(&self) -> CodeFormat {
        self.generator.format()
    }

    /// Waypoint currently open in the editor dialog, if any.
    pub fn editing(&self) -> Option<WaypointId> {
        self.editing
    }

    /// Applies the editor dialog's fields to the waypoint being edited and
    /// closes the dialog.
    pub fn apply_edit(&mut self, edit: &WaypointEdit) -> Result<(), PathError> {
        let index = self
            .editing
            .and_then(|id| self.path.index_of(id))
            .ok_or(PathError::UnknownWaypoint {
                index: self.path.len(),
            })?;
        self.edit_waypoint(index, edit)?;
        self.editing = None;
        Ok(())
    }

    /// Closes the editor dialog without changes.
    pub fn close_editor(&mut self) {
        self.editing = None;
    }

    pub fn edit_waypoint(&mut self, index: usize, edit: &WaypointEdit) -> Result<(), PathError> {
        self.path.edit_waypoint(index, edit)?;
        self.mark_modified();
        Ok(())
    }

    /// Empties the path. Undoable.
    pub fn clear(&mut self) {
        self.editing = None;
        self.path.clear();
        self.mark_modified();
    }

    /// Mirrors the path across the canvas midline. Undoable.
    pub fn reflect_vertically(&mut self) -> Result<(), PathError> {
        self.path.reflect_vertically(&self.viewport)?;
        self.mark_modified();
        Ok(())
    }

    /// Reverts the last accepted mutation. Returns `false` with no history.
    pub fn undo(&mut self) -> bool {
        if !self.path.undo() {
            tracing::debug!("Nothing to undo");
            return false;
        }
        if let Some(id) = self.editing {
            if self.path.index_of(id).is_none() {
                self.editing = None;
            }
        }
        self.mark_modified();
        true
    }

    /// Robot placement for a pointer at a device position.
    pub fn robot_overlay(&self, device_x: f64, device_y: f64) -> Option<RobotPlacement> {
        let pointer = self.viewport.device_to_canvas(device_x, device_y);
        place_robot(self.path.waypoints(), pointer, &self.viewport, self.robot)
    }

    pub(crate) fn mark_modified(&mut self) {
        self.is_modified = true;
        self.regenerate();
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
