//! Save slot operations for the editor session.

use std::path::Path;

use anyhow::Context;

use super::{EditorSession, Notification};
use crate::slots::{SaveSlots, SlotId};

impl EditorSession {
    pub fn slots(&self) -> &SaveSlots {
        &self.slots
    }

    /// Slot that receives the path on every regeneration, if any.
    pub fn loaded_slot(&self) -> Option<SlotId> {
        self.loaded_slot
    }

    /// Stores the current path in a new slot.
    pub fn save_slot(&mut self, name: impl Into<String>) -> SlotId {
        let id = self.slots.create(name, self.path.waypoints());
        self.notify(Notification::info("Path saved to slot"));
        id
    }

    /// Replaces the path with a slot's waypoints (undoable) and makes the
    /// slot the auto-save target.
    pub fn load_slot(&mut self, id: SlotId) -> anyhow::Result<()> {
        let slot = self
            .slots
            .get(id)
            .with_context(|| format!("No save slot with id {}", id))?;
        let name = slot.name.clone();
        let waypoints = slot.waypoints.clone();

        self.path.replace_all(waypoints, &self.viewport)?;
        self.editing = None;
        self.loaded_slot = Some(id);
        self.mark_modified();
        tracing::info!("Loaded slot '{}'", name);
        Ok(())
    }

    /// Stops writing the path back into the loaded slot.
    pub fn unload_slot(&mut self) {
        self.loaded_slot = None;
    }

    pub fn rename_slot(&mut self, id: SlotId, name: impl Into<String>) -> bool {
        self.slots.rename(id, name)
    }

    /// Deletes a slot. Deleting the loaded slot also unloads it.
    pub fn delete_slot(&mut self, id: SlotId) -> bool {
        if self.loaded_slot == Some(id) {
            self.loaded_slot = None;
        }
        self.slots.remove(id).is_some()
    }

    pub fn save_slots_to_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        self.slots.save_to_file(path)
    }

    /// Replaces the slot collection from a file. The loaded slot is cleared.
    pub fn load_slots_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        self.slots = SaveSlots::load_from_file(path)?;
        self.loaded_slot = None;
        Ok(())
    }

    /// Writes a non-empty path back into the loaded slot. An empty path is
    /// never written, so clearing or undoing past a load keeps the slot.
    pub(crate) fn auto_save_loaded_slot(&mut self) {
        let Some(id) = self.loaded_slot else {
            return;
        };
        if self.path.is_empty() {
            return;
        }
        match self.slots.get_mut(id) {
            Some(slot) => slot.overwrite(self.path.waypoints()),
            None => {
                tracing::warn!("Loaded slot {} no longer exists", id);
                self.loaded_slot = None;
            }
        }
    }
}
