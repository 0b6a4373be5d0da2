//! # fieldpath Designer
//!
//! Visual authoring of robot waypoint paths on a competition field image and
//! generation of the motion program that drives the robot along them.
//!
//! ## Core Components
//!
//! - **Viewport**: grid snapping, pan offset and the field boundary
//! - **Waypoint / Path**: the ordered waypoint sequence and its mutation rules
//! - **History**: snapshot-based undo
//! - **Geometry**: segment projection for hit-testing and the robot overlay
//! - **Codegen**: the waypoint → program transform
//! - **Editor state**: a session that wires pointer input to the path and
//!   republishes the program after every change
//!
//! ## Architecture
//!
//! ```text
//! Pointer events
//!   └── Viewport (snap, bounds)
//!         └── WaypointPath (mutate + undo snapshot)
//!               └── PathCodeGenerator (program text)
//!                     └── CodeSinks (display, clipboard) + save slot
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fieldpath_designer::{EditorSession, PointerButton};
//!
//! let mut session = EditorSession::new();
//! session.pointer_down(PointerButton::Primary, 120.0, 340.0);
//! session.pointer_up();
//! println!("{}", session.generated_code());
//! ```

pub mod codegen;
pub mod editor_state;
pub mod geometry;
pub mod history;
pub mod overlay;
pub mod path;
pub mod serialization;
pub mod slots;
pub mod viewport;
pub mod waypoint;

pub use codegen::{generate_code, relative_position, CodeFormat, PathCodeGenerator, NO_WAYPOINTS_PLACEHOLDER};
pub use editor_state::{
    CodeSink, EditorSession, InputOutcome, Notification, NotificationLevel, PointerButton, TextBuffer,
};
pub use geometry::{closest_point_on_segment, distance_to_segment, Point};
pub use history::UndoHistory;
pub use overlay::{place_robot, RobotDimensions, RobotPlacement, OVERLAY_SNAP_DISTANCE};
pub use path::{WaypointPath, HIT_RADIUS};
pub use serialization::{PathFile, PathMetadata, SlotFile};
pub use slots::{SaveSlot, SaveSlots, SlotId};
pub use viewport::{is_within_field, snap_to_grid, Viewport, DEFAULT_CANVAS_SIZE, DEFAULT_GRID_SIZE};
pub use waypoint::{reflect_heading, AngularDirection, Waypoint, WaypointEdit, WaypointId, DEFAULT_TIMEOUT_MS, MAX_SPEED};
