//! # fieldpath
//!
//! Author autonomous robot paths on a competition field image and generate
//! the motion-control program that drives the robot along them.
//!
//! ## Architecture
//!
//! fieldpath is organized as a workspace with multiple crates:
//!
//! 1. **fieldpath-core** - Errors, field units and shared-state aliases
//! 2. **fieldpath-designer** - Viewport, waypoint path, undo, code generation,
//!    robot overlay, save slots and the editor session
//! 3. **fieldpath-settings** - Editor configuration (TOML/JSON)
//! 4. **fieldpath** - Command-line front end that integrates all crates
//!
//! ## Features
//!
//! - **Grid-snapped editing**: add, drag, bulk delete and pan
//! - **Undo**: every accepted mutation is reversible
//! - **Code generation**: field-relative `turnToHeading`/`moveToPoint` program
//! - **Save slots**: named paths with auto-save of the loaded slot

pub use fieldpath_designer as designer;

pub use fieldpath_core::{
    format_inches, pixels_to_inches, thread_safe, CodegenError, PathError, ThreadSafe,
    FIELD_SIZE_INCHES,
};

pub use fieldpath_designer::{
    generate_code, AngularDirection, CodeFormat, CodeSink, EditorSession, InputOutcome,
    Notification, NotificationLevel, PathCodeGenerator, PathFile, Point, PointerButton,
    RobotDimensions, SaveSlot, SaveSlots, SlotFile, SlotId, TextBuffer, Viewport, Waypoint,
    WaypointEdit, WaypointId, WaypointPath,
};

pub use fieldpath_settings::{Config, FieldImage, SettingsError};

use anyhow::Context;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Builds an editor session configured from `config`.
///
/// The grid, canvas, robot footprint and output format are taken from the
/// configuration; the path starts empty.
pub fn session_from_config(config: &Config) -> anyhow::Result<EditorSession> {
    config.validate().context("Invalid configuration")?;

    let canvas = config.canvas.size;
    let mut viewport = Viewport::square(canvas);
    viewport.set_grid_size(config.grid.size);

    let mut session = EditorSession::with_viewport(viewport);
    session
        .set_canvas_size(canvas)
        .context("Invalid canvas size in configuration")?;
    session
        .set_format(&config.output.format)
        .with_context(|| format!("Unsupported output format '{}'", config.output.format))?;
    session.set_robot_dimensions(RobotDimensions {
        width_in: config.robot.width_in,
        height_in: config.robot.height_in,
    });

    tracing::debug!(
        "Session configured: grid {} px, canvas {} px, format {}",
        config.grid.size,
        canvas,
        session.format()
    );
    Ok(session)
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
///
/// Output goes to stderr so generated programs on stdout stay clean.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}
