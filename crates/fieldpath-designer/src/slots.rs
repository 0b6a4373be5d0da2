//! Named save slots.
//!
//! A slot is a titled copy of a path with creation and modification times.
//! Slots are addressed by a stable [`SlotId`], so deleting one never shifts
//! the identity of another.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use uuid::Uuid;

use crate::serialization::SlotFile;
use crate::waypoint::Waypoint;

/// Stable identity of a save slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(Uuid);

impl SlotId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SlotId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveSlot {
    pub id: SlotId,
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub waypoints: Vec<Waypoint>,
}

impl SaveSlot {
    pub fn new(name: impl Into<String>, waypoints: Vec<Waypoint>) -> Self {
        let now = Utc::now();
        Self {
            id: SlotId::new(),
            name: name.into(),
            created: now,
            modified: now,
            waypoints,
        }
    }

    /// Overwrites the stored waypoints and bumps the modified time.
    pub fn overwrite(&mut self, waypoints: &[Waypoint]) {
        self.waypoints = waypoints.to_vec();
        self.modified = Utc::now();
    }
}

/// Ordered collection of save slots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaveSlots {
    slots: Vec<SaveSlot>,
}

impl SaveSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SaveSlot> {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, id: SlotId) -> Option<&SaveSlot> {
        self.slots.iter().find(|slot| slot.id == id)
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut SaveSlot> {
        self.slots.iter_mut().find(|slot| slot.id == id)
    }

    /// Stores a new slot and returns its id.
    pub fn create(&mut self, name: impl Into<String>, waypoints: &[Waypoint]) -> SlotId {
        let slot = SaveSlot::new(name, waypoints.to_vec());
        let id = slot.id;
        tracing::info!("Saved slot '{}' ({} waypoints)", slot.name, slot.waypoints.len());
        self.slots.push(slot);
        id
    }

    pub fn rename(&mut self, id: SlotId, name: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(slot) => {
                slot.name = name.into();
                slot.modified = Utc::now();
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: SlotId) -> Option<SaveSlot> {
        let index = self.slots.iter().position(|slot| slot.id == id)?;
        Some(self.slots.remove(index))
    }

    /// Save all slots to a JSON file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        SlotFile::new(self.slots.clone()).save_to_file(path)
    }

    /// Load slots from a JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file = SlotFile::load_from_file(path)?;
        Ok(Self { slots: file.slots })
    }
}
