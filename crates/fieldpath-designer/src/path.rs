//! Path model: the ordered waypoint sequence and its mutation rules.
//!
//! Every mutator either applies completely and records exactly one undo
//! snapshot, or returns a [`PathError`] and leaves both the waypoints and the
//! history untouched.

use fieldpath_core::PathError;

use crate::geometry::Point;
use crate::history::UndoHistory;
use crate::viewport::Viewport;
use crate::waypoint::{reflect_heading, Waypoint, WaypointEdit, WaypointId};

/// Hit-test radius around a waypoint in canvas pixels. Matches the radius of
/// the halo drawn around each waypoint.
pub const HIT_RADIUS: f64 = 20.0;

/// In-progress drag: which waypoint moves and the path before it started.
#[derive(Debug, Clone)]
struct DragState {
    id: WaypointId,
    before: Vec<Waypoint>,
}

/// Ordered waypoint sequence with undo history.
///
/// Index 0 is the origin waypoint. Indices are a derived view; use
/// [`WaypointId`] to track a waypoint across deletions.
#[derive(Debug, Clone, Default)]
pub struct WaypointPath {
    waypoints: Vec<Waypoint>,
    history: UndoHistory,
    drag: Option<DragState>,
}

impl WaypointPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    /// The first waypoint, which defines the generated program's frame.
    pub fn origin(&self) -> Option<&Waypoint> {
        self.waypoints.first()
    }

    /// Current index of the waypoint with the given id.
    pub fn index_of(&self, id: WaypointId) -> Option<usize> {
        self.waypoints.iter().position(|wp| wp.id == id)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    /// Index of the first waypoint strictly within [`HIT_RADIUS`] of `point`.
    pub fn waypoint_near(&self, point: Point) -> Option<usize> {
        self.waypoints
            .iter()
            .position(|wp| wp.position().distance_to(&point) < HIT_RADIUS)
    }

    /// Appends a waypoint with default motion fields at a snapped position.
    pub fn add_waypoint(
        &mut self,
        position: Point,
        viewport: &Viewport,
    ) -> Result<WaypointId, PathError> {
        if !viewport.contains(&position) {
            return Err(PathError::OutOfBounds {
                x: position.x,
                y: position.y,
            });
        }
        if let Some(index) = self.waypoint_near(position) {
            return Err(PathError::NearExisting { index });
        }

        self.history.record(&self.waypoints);
        let waypoint = Waypoint::at(position);
        let id = waypoint.id;
        self.waypoints.push(waypoint);
        tracing::debug!(
            "Added waypoint {} at ({}, {})",
            self.waypoints.len(),
            position.x,
            position.y
        );
        Ok(id)
    }

    /// Removes every waypoint strictly closer than `radius` to `point`.
    ///
    /// Always records a snapshot, even when nothing was removed. Returns the
    /// number of waypoints removed.
    pub fn remove_waypoints_near(&mut self, point: Point, radius: f64) -> usize {
        self.cancel_drag();
        self.history.record(&self.waypoints);
        let before = self.waypoints.len();
        self.waypoints
            .retain(|wp| wp.position().distance_to(&point) >= radius);
        let removed = before - self.waypoints.len();
        tracing::debug!("Removed {} waypoint(s) near ({}, {})", removed, point.x, point.y);
        removed
    }

    /// Starts dragging the waypoint at `index`. Moves made during the drag
    /// are committed to history as one step by [`end_drag`](Self::end_drag).
    pub fn begin_drag(&mut self, index: usize) -> Result<WaypointId, PathError> {
        let id = self
            .waypoints
            .get(index)
            .map(|wp| wp.id)
            .ok_or(PathError::UnknownWaypoint { index })?;
        self.drag = Some(DragState {
            id,
            before: self.waypoints.clone(),
        });
        Ok(id)
    }

    /// Id of the waypoint being dragged, if any.
    pub fn dragging(&self) -> Option<WaypointId> {
        self.drag.as_ref().map(|drag| drag.id)
    }

    /// Moves the waypoint at `index` to a snapped position.
    ///
    /// Moving the dragged waypoint is not recorded; the drag commit records
    /// it. Any other move commits an open drag first and records a snapshot
    /// itself.
    pub fn move_waypoint(
        &mut self,
        index: usize,
        position: Point,
        viewport: &Viewport,
    ) -> Result<(), PathError> {
        if index >= self.waypoints.len() {
            return Err(PathError::UnknownWaypoint { index });
        }
        if !viewport.contains(&position) {
            return Err(PathError::OutOfBounds {
                x: position.x,
                y: position.y,
            });
        }

        let dragged = self.drag.as_ref().and_then(|drag| self.index_of(drag.id));
        if dragged != Some(index) {
            self.cancel_drag();
            self.history.record(&self.waypoints);
        }
        self.waypoints[index].set_position(position);
        Ok(())
    }

    /// Moves the dragged waypoint. Errors with `UnknownWaypoint` when no drag
    /// is active or the dragged waypoint no longer exists.
    pub fn drag_to(&mut self, position: Point, viewport: &Viewport) -> Result<(), PathError> {
        let index = self
            .drag
            .as_ref()
            .and_then(|drag| self.index_of(drag.id))
            .ok_or(PathError::UnknownWaypoint {
                index: self.waypoints.len(),
            })?;
        self.move_waypoint(index, position, viewport)
    }

    /// Finishes a drag. Records one snapshot of the pre-drag path when the
    /// waypoint actually moved. Returns whether anything was committed.
    pub fn end_drag(&mut self) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };

        let start = drag.before.iter().find(|wp| wp.id == drag.id).map(Waypoint::position);
        let end = self
            .waypoints
            .iter()
            .find(|wp| wp.id == drag.id)
            .map(Waypoint::position);

        if start != end {
            self.history.record(&drag.before);
            tracing::info!("Committed drag of waypoint {}", drag.id);
            true
        } else {
            false
        }
    }

    /// Overwrites the non-positional fields named by `edit`.
    pub fn edit_waypoint(&mut self, index: usize, edit: &WaypointEdit) -> Result<(), PathError> {
        let current = self
            .waypoints
            .get(index)
            .ok_or(PathError::UnknownWaypoint { index })?;
        let updated = edit.applied_to(current);
        updated.validate()?;

        self.cancel_drag();
        self.history.record(&self.waypoints);
        self.waypoints[index] = updated;
        tracing::debug!("Edited waypoint {}", index + 1);
        Ok(())
    }

    /// Removes all waypoints. Undo restores them.
    pub fn clear(&mut self) {
        self.cancel_drag();
        self.history.record(&self.waypoints);
        self.waypoints.clear();
        tracing::info!("Cleared path");
    }

    /// Mirrors the path across the vertical midline of the canvas.
    ///
    /// `x' = mid - (x - (mid - grid))`, `angle' = (360 - angle) mod 360`.
    /// The reflection is all-or-nothing: if any mirrored waypoint would leave
    /// the field, nothing changes.
    pub fn reflect_vertically(&mut self, viewport: &Viewport) -> Result<(), PathError> {
        if self.waypoints.is_empty() {
            return Err(PathError::EmptyPath);
        }

        let mid = viewport.canvas_width() / 2.0;
        let grid = f64::from(viewport.grid_size());
        let mut reflected = self.waypoints.clone();
        for wp in &mut reflected {
            let x = mid - (wp.x - (mid - grid));
            if !viewport.contains(&Point::new(x, wp.y)) {
                return Err(PathError::OutOfBounds { x, y: wp.y });
            }
            wp.x = x;
            wp.angle = reflect_heading(wp.angle);
        }

        self.cancel_drag();
        self.history.record(&self.waypoints);
        self.waypoints = reflected;
        tracing::info!("Reflected {} waypoint(s)", self.waypoints.len());
        Ok(())
    }

    /// Replaces the whole path, e.g. when loading a slot or file. Undoable.
    ///
    /// Every waypoint must lie within `viewport`'s field and pass
    /// [`Waypoint::validate`]; otherwise nothing changes.
    pub fn replace_all(
        &mut self,
        waypoints: Vec<Waypoint>,
        viewport: &Viewport,
    ) -> Result<(), PathError> {
        for wp in &waypoints {
            if !viewport.contains(&wp.position()) {
                return Err(PathError::OutOfBounds { x: wp.x, y: wp.y });
            }
            wp.validate()?;
        }
        self.cancel_drag();
        self.history.record(&self.waypoints);
        self.waypoints = waypoints;
        Ok(())
    }

    /// Restores the most recent snapshot. Returns `false` when history is empty.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.drag = None;
                self.waypoints = snapshot;
                tracing::debug!("Undo (remaining depth {})", self.history.undo_depth());
                true
            }
            None => false,
        }
    }

    fn cancel_drag(&mut self) {
        // An open drag whose waypoint moved is committed before the path is
        // replaced, so the move stays undoable.
        self.end_drag();
    }
}
