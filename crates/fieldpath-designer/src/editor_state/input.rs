//! Pointer input for the editor session.

use fieldpath_core::PathError;

use super::EditorSession;
use crate::geometry::Point;
use crate::path::HIT_RADIUS;
use crate::waypoint::WaypointId;

/// Pointer buttons and what they do on press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Add a waypoint, or select and start dragging an existing one
    Primary,
    /// Delete every waypoint under the pointer
    Secondary,
    /// Start panning the view
    Tertiary,
}

/// What a pointer event did.
#[derive(Debug, Clone, PartialEq)]
pub enum InputOutcome {
    Added(WaypointId),
    /// An existing waypoint was hit; it is open for editing and dragging.
    Selected(WaypointId),
    Removed(usize),
    Moved,
    PanStarted,
    Panned,
    /// A drag ended and was committed to history.
    DragCommitted,
    Rejected(PathError),
    Ignored,
}

impl EditorSession {
    /// Handles a button press at a device position.
    pub fn pointer_down(&mut self, button: PointerButton, device_x: f64, device_y: f64) -> InputOutcome {
        if self.editing.is_some() && self.path.dragging().is_none() {
            // The editor dialog is modal.
            return InputOutcome::Ignored;
        }

        let pointer = self.viewport.device_to_canvas(device_x, device_y);
        match button {
            PointerButton::Primary => {
                if self.pointer.panning {
                    return InputOutcome::Ignored;
                }
                let snapped = self.viewport.snap(device_x, device_y);
                if !self.viewport.contains(&snapped) {
                    tracing::debug!("Ignoring press outside the field at ({}, {})", snapped.x, snapped.y);
                    return InputOutcome::Rejected(PathError::OutOfBounds {
                        x: snapped.x,
                        y: snapped.y,
                    });
                }

                if let Some(index) = self.path.waypoint_near(pointer) {
                    return match self.path.begin_drag(index) {
                        Ok(id) => {
                            self.editing = Some(id);
                            InputOutcome::Selected(id)
                        }
                        Err(e) => InputOutcome::Rejected(e),
                    };
                }

                match self.path.add_waypoint(snapped, &self.viewport) {
                    Ok(id) => {
                        self.mark_modified();
                        InputOutcome::Added(id)
                    }
                    Err(e) => {
                        tracing::debug!("Add rejected: {}", e);
                        InputOutcome::Rejected(e)
                    }
                }
            }
            PointerButton::Secondary => {
                let removed = self.path.remove_waypoints_near(pointer, HIT_RADIUS);
                self.mark_modified();
                InputOutcome::Removed(removed)
            }
            PointerButton::Tertiary => {
                self.pointer.panning = true;
                self.pointer.last_device = Some(Point::new(device_x, device_y));
                InputOutcome::PanStarted
            }
        }
    }

    /// Handles pointer movement while a button is held.
    pub fn pointer_move(&mut self, device_x: f64, device_y: f64) -> InputOutcome {
        let device = Point::new(device_x, device_y);
        let last = self.pointer.last_device.replace(device);

        if self.pointer.panning {
            if let Some(last) = last {
                self.viewport.pan_by(device.x - last.x, device.y - last.y);
            }
            return InputOutcome::Panned;
        }

        if self.path.dragging().is_none() {
            return InputOutcome::Ignored;
        }

        let snapped = self.viewport.snap(device_x, device_y);
        match self.path.drag_to(snapped, &self.viewport) {
            Ok(()) => {
                self.is_modified = true;
                self.regenerate();
                InputOutcome::Moved
            }
            Err(e) => {
                tracing::debug!("Drag step rejected: {}", e);
                InputOutcome::Rejected(e)
            }
        }
    }

    /// Handles a button release: commits any drag and ends panning.
    pub fn pointer_up(&mut self) -> InputOutcome {
        let was_panning = std::mem::take(&mut self.pointer.panning);
        self.pointer.last_device = None;

        if self.path.end_drag() {
            self.regenerate();
            InputOutcome::DragCommitted
        } else if was_panning {
            InputOutcome::Panned
        } else {
            InputOutcome::Ignored
        }
    }

    /// Returns the view to the unpanned origin.
    pub fn reset_view(&mut self) {
        self.viewport.reset_pan();
    }
}
