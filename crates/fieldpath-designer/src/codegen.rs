//! Motion-program generation from waypoint paths.
//!
//! The first waypoint defines the frame: its position is the translation
//! origin and its heading the rotation origin. Every waypoint becomes a
//! heading command followed by a move command in the target DSL.

use std::fmt;
use std::str::FromStr;

use fieldpath_core::{format_fixed, format_heading, format_inches, units, CodegenError};

use crate::viewport::DEFAULT_CANVAS_SIZE;
use crate::waypoint::{AngularDirection, Waypoint};

/// Text produced for an empty path.
pub const NO_WAYPOINTS_PLACEHOLDER: &str = "// No waypoints set.";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeFormat {
    /// libKS `chassis.turnToHeading` / `chassis.moveToPoint` statements
    #[default]
    LibKsMtPoint,
}

impl CodeFormat {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LibKsMtPoint => "libks-mtpoint",
        }
    }

    fn header(&self) -> &'static str {
        match self {
            Self::LibKsMtPoint => "// libKS MTPoint v0.1",
        }
    }
}

impl fmt::Display for CodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CodeFormat {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "libks-mtpoint" => Ok(Self::LibKsMtPoint),
            other => Err(CodegenError::UnsupportedFormat {
                name: other.to_string(),
            }),
        }
    }
}

/// Position of a waypoint relative to the origin waypoint, in field inches,
/// rotated into the origin's frame with field Y pointing up.
pub fn relative_position(origin: &Waypoint, waypoint: &Waypoint, scale: f64) -> (f64, f64) {
    let dx = (waypoint.x - origin.x) * scale;
    let dy = (waypoint.y - origin.y) * scale;
    let theta = origin.angle.to_radians();
    let (sin, cos) = theta.sin_cos();
    let x = dx * cos - dy * sin;
    let y = -(dx * sin + dy * cos);
    (x, y)
}

/// Converts waypoint paths into program text.
#[derive(Debug, Clone)]
pub struct PathCodeGenerator {
    format: CodeFormat,
    canvas_size: f64,
}

impl PathCodeGenerator {
    /// Creates a generator for a square canvas of `canvas_size` pixels.
    pub fn new(format: CodeFormat, canvas_size: f64) -> Result<Self, CodegenError> {
        if !units::is_valid_canvas_size(canvas_size) {
            return Err(CodegenError::InvalidCanvasSize { size: canvas_size });
        }
        Ok(Self {
            format,
            canvas_size,
        })
    }

    pub fn format(&self) -> CodeFormat {
        self.format
    }

    pub fn canvas_size(&self) -> f64 {
        self.canvas_size
    }

    /// Pixel-to-inch factor for the configured canvas.
    pub fn scale(&self) -> f64 {
        units::pixels_to_inches(self.canvas_size)
    }

    /// Generates the program for `waypoints`.
    ///
    /// The output only depends on the arguments: equal input always yields
    /// byte-identical text.
    pub fn generate(&self, waypoints: &[Waypoint]) -> String {
        let Some(origin) = waypoints.first() else {
            return NO_WAYPOINTS_PLACEHOLDER.to_string();
        };

        let mut code = self.generate_header(origin);
        for (i, waypoint) in waypoints.iter().enumerate() {
            let ordinal = i + 1;
            code.push_str(&self.heading_command(waypoint, ordinal));
            code.push_str(&self.move_command(origin, waypoint, ordinal));
        }
        code
    }

    /// Format banner plus the origin's absolute field position.
    pub fn generate_header(&self, origin: &Waypoint) -> String {
        let half = self.canvas_size / 2.0;
        let scale = self.scale();
        let mut code = String::new();
        code.push_str(self.format.header());
        code.push('\n');
        code.push_str(&format!(
            "// Starting point: ({}, {})\n",
            format_inches((origin.x - half) * scale),
            format_inches((origin.y - half) * scale)
        ));
        code
    }

    fn heading_command(&self, waypoint: &Waypoint, ordinal: usize) -> String {
        let direction = match waypoint.angular_direction {
            AngularDirection::Auto => "",
            AngularDirection::Clockwise => ", {.direction = AngularDirection::CW_CLOCKWISE}",
            AngularDirection::CounterClockwise => {
                ", {.direction = AngularDirection::CCW_COUNTERCLOCKWISE}"
            }
        };
        format!(
            "chassis.turnToHeading({}, {}{}); // Point {}\n",
            format_heading(waypoint.angle),
            waypoint.timeout,
            direction,
            ordinal
        )
    }

    fn move_command(&self, origin: &Waypoint, waypoint: &Waypoint, ordinal: usize) -> String {
        let (x, y) = relative_position(origin, waypoint, self.scale());
        format!(
            "chassis.moveToPoint({}, {}, {}, {{.forwards = {}, .maxSpeed = {}, .minSpeed = {}}}); // Point {}\n",
            format_fixed(x, 2),
            format_fixed(y, 2),
            waypoint.timeout,
            waypoint.forwards,
            waypoint.max_speed,
            waypoint.min_speed,
            ordinal
        )
    }
}

impl Default for PathCodeGenerator {
    fn default() -> Self {
        Self {
            format: CodeFormat::default(),
            canvas_size: DEFAULT_CANVAS_SIZE,
        }
    }
}

/// Generates a program in the default format.
pub fn generate_code(waypoints: &[Waypoint], canvas_size: f64) -> Result<String, CodegenError> {
    Ok(PathCodeGenerator::new(CodeFormat::default(), canvas_size)?.generate(waypoints))
}
