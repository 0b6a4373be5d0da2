//! Error handling for fieldpath
//!
//! Provides error types for the editing core:
//! - Path errors (rejected waypoint mutations)
//! - Code generation errors (output format and scale problems)
//!
//! The editor treats every path rejection as a silent no-op; the typed
//! variants exist so callers and tests can tell *why* nothing changed.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Path error type
///
/// A rejected mutation never changes the path and never records undo history.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// Target position lies outside the field extent
    #[error("Position ({x}, {y}) is outside the field")]
    OutOfBounds {
        /// The rejected X coordinate in canvas pixels.
        x: f64,
        /// The rejected Y coordinate in canvas pixels.
        y: f64,
    },

    /// A waypoint already sits within the hit radius of the target
    #[error("Waypoint {} already occupies this position", .index + 1)]
    NearExisting {
        /// Index of the waypoint that was hit.
        index: usize,
    },

    /// The referenced waypoint does not exist
    #[error("No waypoint at index {index}")]
    UnknownWaypoint {
        /// The index that was referenced.
        index: usize,
    },

    /// A field edit would break a waypoint invariant
    #[error("Invalid waypoint: {reason}")]
    InvalidWaypoint {
        /// The invariant that would be broken.
        reason: String,
    },

    /// The operation needs at least one waypoint
    #[error("Path has no waypoints")]
    EmptyPath,
}

/// Code generation error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodegenError {
    /// The requested output format is not supported
    #[error("Unsupported output format: {name}")]
    UnsupportedFormat {
        /// The format name that was requested.
        name: String,
    },

    /// The canvas size cannot produce a pixel-to-inch scale
    #[error("Invalid canvas size {size}: must be positive and finite")]
    InvalidCanvasSize {
        /// The rejected canvas size in pixels.
        size: f64,
    },
}
