//! File I/O operations (save, load, new) for the editor session.

use super::EditorSession;
use crate::viewport::Viewport;

impl EditorSession {
    /// Save the path to a file.
    pub fn save_to_file(&mut self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        use crate::serialization::PathFile;

        let name = path
            .as_ref()
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string());

        let mut file = PathFile::new(name);
        file.canvas_size = self.viewport.canvas_size();
        file.grid_size = self.viewport.grid_size();
        file.waypoints = self.path.waypoints().to_vec();
        file.save_to_file(&path)?;

        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        tracing::info!("Saved path to {}", path.as_ref().display());
        Ok(())
    }

    /// Load a path file, replacing the current path (undoable) and adopting
    /// the file's canvas and grid size.
    pub fn load_from_file(&mut self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        use crate::serialization::PathFile;

        let file = PathFile::load_from_file(&path)?;

        // Waypoints are checked against the field they were saved on.
        let mut field = Viewport::square(file.canvas_size);
        field.set_grid_size(file.grid_size);
        self.path.replace_all(file.waypoints, &field)?;
        self.viewport.set_grid_size(file.grid_size);
        self.editing = None;
        self.loaded_slot = None;
        self.set_canvas_size(file.canvas_size)?;

        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        tracing::info!("Loaded path from {}", path.as_ref().display());
        Ok(())
    }

    /// Start a new, empty path. Undo history is kept so the old path can
    /// be restored.
    pub fn new_path(&mut self) {
        self.loaded_slot = None;
        self.clear();
        self.current_file_path = None;
        self.is_modified = false;
    }
}
