//! Grid and coordinate transformation for the field canvas.
//!
//! Handles conversion from device (pointer) coordinates to pan-adjusted canvas
//! coordinates, snapping to the grid, and the field boundary check. The pure
//! functions at the top of the module carry the math; [`Viewport`] bundles
//! them with the current configuration.

use std::fmt;

use crate::geometry::Point;
use fieldpath_core::units;

/// Default grid spacing in pixels per cell.
pub const DEFAULT_GRID_SIZE: u32 = 10;

/// Default edge length of the square canvas in pixels.
pub const DEFAULT_CANVAS_SIZE: f64 = 2000.0;

/// Snaps a device position to the nearest grid intersection.
///
/// Formula:
/// ```text
/// x = floor((device_x - pan_x) / grid_size + 0.5) * grid_size
/// y = floor((device_y - pan_y) / grid_size + 0.5) * grid_size
/// ```
///
/// Halves round towards positive infinity, so the result never depends on
/// which side of the origin the pointer is.
pub fn snap_to_grid(device_x: f64, device_y: f64, pan_x: f64, pan_y: f64, grid_size: u32) -> Point {
    let grid = f64::from(grid_size.max(1));
    let x = ((device_x - pan_x) / grid + 0.5).floor() * grid;
    let y = ((device_y - pan_y) / grid + 0.5).floor() * grid;
    Point::new(x, y)
}

/// Inclusive bounds check against the field extent `[0, width] × [0, height]`.
pub fn is_within_field(x: f64, y: f64, width: f64, height: f64) -> bool {
    x >= 0.0 && x <= width && y >= 0.0 && y <= height
}

/// Grid configuration, pan offset and canvas extent.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    grid_size: u32,
    pan_x: f64,
    pan_y: f64,
    canvas_width: f64,
    canvas_height: f64,
}

impl Viewport {
    /// Creates a new viewport with no pan and the default grid.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            pan_x: 0.0,
            pan_y: 0.0,
            canvas_width,
            canvas_height,
        }
    }

    /// Creates a viewport for a square canvas.
    pub fn square(canvas_size: f64) -> Self {
        Self::new(canvas_size, canvas_size)
    }

    /// Gets the canvas width.
    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    /// Gets the canvas height.
    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Edge length used for unit conversion. The field is square, so the
    /// smaller canvas dimension is the one the image is drawn into.
    pub fn canvas_size(&self) -> f64 {
        self.canvas_width.min(self.canvas_height)
    }

    /// Sets the canvas dimensions (typically called when the window resizes).
    /// Existing waypoints keep their pixel positions.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Gets the grid spacing in pixels.
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// Sets the grid spacing. Zero is ignored.
    ///
    /// Waypoints placed under the previous spacing are not re-snapped.
    pub fn set_grid_size(&mut self, grid_size: u32) {
        if grid_size == 0 {
            tracing::debug!("Ignoring zero grid size");
            return;
        }
        self.grid_size = grid_size;
    }

    /// Half a grid cell, the offset at which waypoints are drawn.
    pub fn half_cell(&self) -> f64 {
        f64::from(self.grid_size) / 2.0
    }

    /// Gets the pan offset (X coordinate).
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    /// Gets the pan offset (Y coordinate).
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Sets the pan offset.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Pans by a delta amount.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Resets pan to origin (0, 0).
    pub fn reset_pan(&mut self) {
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    /// Converts a device position to canvas coordinates by removing the pan.
    pub fn device_to_canvas(&self, device_x: f64, device_y: f64) -> Point {
        Point::new(device_x - self.pan_x, device_y - self.pan_y)
    }

    /// Snaps a device position to the grid in canvas coordinates.
    pub fn snap(&self, device_x: f64, device_y: f64) -> Point {
        snap_to_grid(device_x, device_y, self.pan_x, self.pan_y, self.grid_size)
    }

    /// Checks whether a canvas position lies on the field.
    pub fn contains(&self, point: &Point) -> bool {
        is_within_field(point.x, point.y, self.canvas_width, self.canvas_height)
    }

    /// Pixel-to-inch scale factor for the current canvas size.
    pub fn pixels_to_inches(&self) -> f64 {
        units::pixels_to_inches(self.canvas_size())
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Grid: {}px | Pan: ({:.1}, {:.1}) | Canvas: {:.0}x{:.0}",
            self.grid_size, self.pan_x, self.pan_y, self.canvas_width, self.canvas_height
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::square(DEFAULT_CANVAS_SIZE)
    }
}
