//! Undo history for waypoint paths.
//!
//! Every accepted mutation pushes a deep copy of the path as it was *before*
//! the change. Undo pops the newest copy and restores it wholesale. There is
//! no redo stack.

use crate::waypoint::Waypoint;

/// Snapshot-based undo stack.
///
/// The stack is unbounded; snapshots are cheap relative to the number of
/// edits a user makes in one session.
#[derive(Debug, Clone, Default)]
pub struct UndoHistory {
    snapshots: Vec<Vec<Waypoint>>,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the pre-mutation state of a path.
    pub fn record(&mut self, waypoints: &[Waypoint]) {
        self.snapshots.push(waypoints.to_vec());
        tracing::trace!("Recorded undo snapshot (depth {})", self.snapshots.len());
    }

    /// Pops the newest snapshot, or `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<Vec<Waypoint>> {
        self.snapshots.pop()
    }

    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.snapshots.len()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
