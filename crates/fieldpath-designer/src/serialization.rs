//! Serialization and deserialization for path and slot files.
//!
//! Both files are pretty-printed JSON carrying a format version so older
//! files can be recognised later.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::slots::SaveSlot;
use crate::viewport::{DEFAULT_CANVAS_SIZE, DEFAULT_GRID_SIZE};
use crate::waypoint::Waypoint;

/// Path file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// A saved path together with the canvas it was authored on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathFile {
    pub version: String,
    pub metadata: PathMetadata,
    #[serde(default = "default_canvas_size")]
    pub canvas_size: f64,
    #[serde(default = "default_grid_size")]
    pub grid_size: u32,
    pub waypoints: Vec<Waypoint>,
}

/// Path metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
}

fn default_canvas_size() -> f64 {
    DEFAULT_CANVAS_SIZE
}

fn default_grid_size() -> u32 {
    DEFAULT_GRID_SIZE
}

impl PathFile {
    /// Create an empty path file
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: PathMetadata {
                name: name.into(),
                created: now,
                modified: now,
                description: String::new(),
            },
            canvas_size: DEFAULT_CANVAS_SIZE,
            grid_size: DEFAULT_GRID_SIZE,
            waypoints: Vec::new(),
        }
    }

    /// Save path to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize path")?;
        std::fs::write(path.as_ref(), json).context("Failed to write path file")?;
        Ok(())
    }

    /// Load path from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read path file")?;
        let file: PathFile =
            serde_json::from_str(&content).context("Failed to parse path file")?;

        if file.grid_size == 0 {
            bail!("Path file has a zero grid size");
        }
        if !fieldpath_core::is_valid_canvas_size(file.canvas_size) {
            bail!("Path file has an invalid canvas size {}", file.canvas_size);
        }
        Ok(file)
    }
}

/// Collection of save slots as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotFile {
    pub version: String,
    #[serde(default)]
    pub slots: Vec<SaveSlot>,
}

impl SlotFile {
    pub fn new(slots: Vec<SaveSlot>) -> Self {
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            slots,
        }
    }

    /// Save slots to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize save slots")?;
        std::fs::write(path.as_ref(), json).context("Failed to write slot file")?;
        Ok(())
    }

    /// Load slots from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read slot file")?;
        serde_json::from_str(&content).context("Failed to parse slot file")
    }
}
