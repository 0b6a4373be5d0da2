//! Robot footprint placement along the path.
//!
//! Computes where a robot-sized rectangle would sit when the pointer hovers
//! near the path. Drawing is left to the host.

use fieldpath_core::units;

use crate::geometry::{closest_point_on_segment, Point};
use crate::viewport::Viewport;
use crate::waypoint::Waypoint;

/// Maximum pointer distance from the path, in pixels, for the overlay to show.
pub const OVERLAY_SNAP_DISTANCE: f64 = 30.0;

/// Physical robot footprint in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RobotDimensions {
    pub width_in: f64,
    pub height_in: f64,
}

impl Default for RobotDimensions {
    fn default() -> Self {
        Self {
            width_in: 15.0,
            height_in: 15.0,
        }
    }
}

/// Where and how to draw the robot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RobotPlacement {
    /// Rectangle centre in canvas pixels
    pub center: Point,
    /// Segment direction in radians, `atan2(dy, dx)` in screen space
    pub heading: f64,
    pub width_px: f64,
    pub height_px: f64,
}

/// Places the robot on the path segment nearest to `pointer` (canvas space).
///
/// Segments join waypoint centres, which sit half a grid cell from the stored
/// positions. Returns `None` with fewer than two waypoints or when the pointer
/// is not within [`OVERLAY_SNAP_DISTANCE`] of any segment.
pub fn place_robot(
    waypoints: &[Waypoint],
    pointer: Point,
    viewport: &Viewport,
    robot: RobotDimensions,
) -> Option<RobotPlacement> {
    if waypoints.len() < 2 {
        return None;
    }

    let half = viewport.half_cell();
    let mut best: Option<(f64, Point, f64)> = None;
    for pair in waypoints.windows(2) {
        let p1 = pair[0].position().offset(half, half);
        let p2 = pair[1].position().offset(half, half);
        let closest = closest_point_on_segment(p1, p2, pointer);
        let distance = closest.distance_to(&pointer);
        let heading = (p2.y - p1.y).atan2(p2.x - p1.x);
        if best.is_none_or(|(d, _, _)| distance < d) {
            best = Some((distance, closest, heading));
        }
    }

    let (distance, center, heading) = best?;
    if distance >= OVERLAY_SNAP_DISTANCE {
        return None;
    }

    let px_per_inch = units::inches_to_pixels(viewport.canvas_size());
    Some(RobotPlacement {
        center,
        heading,
        width_px: robot.width_in * px_per_inch,
        height_px: robot.height_in * px_per_inch,
    })
}
