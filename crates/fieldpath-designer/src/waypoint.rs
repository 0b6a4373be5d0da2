//! Waypoints: the atomic unit of an authored path.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::geometry::Point;
use fieldpath_core::PathError;

/// Default time allowed to reach a waypoint, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u32 = 2000;

/// Upper bound of the motor speed scale.
pub const MAX_SPEED: u8 = 127;

/// Stable identity of a waypoint, assigned at creation.
///
/// Indices change whenever an earlier waypoint is deleted; ids never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WaypointId(Uuid);

impl WaypointId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WaypointId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WaypointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Turn direction requested when rotating to a waypoint's heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AngularDirection {
    /// Let the controller choose the shortest turn
    #[default]
    Auto,
    /// Always turn clockwise
    Clockwise,
    /// Always turn counter-clockwise
    CounterClockwise,
}

impl fmt::Display for AngularDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Clockwise => write!(f, "clockwise"),
            Self::CounterClockwise => write!(f, "counter-clockwise"),
        }
    }
}

impl FromStr for AngularDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "clockwise" | "cw" => Ok(Self::Clockwise),
            "counter-clockwise" | "counterclockwise" | "ccw" => Ok(Self::CounterClockwise),
            _ => Err(format!("Unknown angular direction: {}", s)),
        }
    }
}

/// One point on the authored path.
///
/// `x`/`y` are canvas pixels on the grid. `angle` is a compass heading in
/// degrees: 0 points up, angles grow clockwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    #[serde(default)]
    pub id: WaypointId,
    pub x: f64,
    pub y: f64,
    pub angle: f64,
    pub forwards: bool,
    pub min_speed: u8,
    pub max_speed: u8,
    pub timeout: u32,
    pub angular_direction: AngularDirection,
}

impl Waypoint {
    /// Creates a waypoint at a snapped position with default motion fields.
    pub(crate) fn at(position: Point) -> Self {
        Self {
            id: WaypointId::new(),
            x: position.x,
            y: position.y,
            angle: 0.0,
            forwards: true,
            min_speed: 0,
            max_speed: MAX_SPEED,
            timeout: DEFAULT_TIMEOUT_MS,
            angular_direction: AngularDirection::Auto,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.x = position.x;
        self.y = position.y;
    }

    /// Checks the motion-field invariants.
    pub fn validate(&self) -> Result<(), PathError> {
        if !self.angle.is_finite() || !(0.0..360.0).contains(&self.angle) {
            return Err(PathError::InvalidWaypoint {
                reason: format!("heading {} is outside [0, 360)", self.angle),
            });
        }
        if self.max_speed > MAX_SPEED {
            return Err(PathError::InvalidWaypoint {
                reason: format!("max speed {} exceeds {}", self.max_speed, MAX_SPEED),
            });
        }
        if self.min_speed > self.max_speed {
            return Err(PathError::InvalidWaypoint {
                reason: format!(
                    "min speed {} exceeds max speed {}",
                    self.min_speed, self.max_speed
                ),
            });
        }
        if self.timeout == 0 {
            return Err(PathError::InvalidWaypoint {
                reason: "timeout must be positive".to_string(),
            });
        }
        Ok(())
    }
}

/// Partial overwrite of a waypoint's non-positional fields, as produced by
/// the waypoint editor dialog. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WaypointEdit {
    pub angle: Option<f64>,
    pub forwards: Option<bool>,
    pub min_speed: Option<u8>,
    pub max_speed: Option<u8>,
    pub timeout: Option<u32>,
    pub angular_direction: Option<AngularDirection>,
}

impl WaypointEdit {
    pub fn angle(mut self, angle: f64) -> Self {
        self.angle = Some(angle);
        self
    }

    pub fn forwards(mut self, forwards: bool) -> Self {
        self.forwards = Some(forwards);
        self
    }

    pub fn speeds(mut self, min_speed: u8, max_speed: u8) -> Self {
        self.min_speed = Some(min_speed);
        self.max_speed = Some(max_speed);
        self
    }

    pub fn timeout(mut self, timeout: u32) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn angular_direction(mut self, direction: AngularDirection) -> Self {
        self.angular_direction = Some(direction);
        self
    }

    /// Returns a copy of `waypoint` with this edit applied.
    pub fn applied_to(&self, waypoint: &Waypoint) -> Waypoint {
        let mut updated = waypoint.clone();
        if let Some(angle) = self.angle {
            updated.angle = angle;
        }
        if let Some(forwards) = self.forwards {
            updated.forwards = forwards;
        }
        if let Some(min_speed) = self.min_speed {
            updated.min_speed = min_speed;
        }
        if let Some(max_speed) = self.max_speed {
            updated.max_speed = max_speed;
        }
        if let Some(timeout) = self.timeout {
            updated.timeout = timeout;
        }
        if let Some(direction) = self.angular_direction {
            updated.angular_direction = direction;
        }
        updated
    }
}

/// Mirrors a compass heading across the vertical axis.
pub fn reflect_heading(angle: f64) -> f64 {
    (360.0 - angle).rem_euclid(360.0)
}
