//! Unit conversion utilities
//!
//! Waypoints live in canvas pixels; generated programs speak field inches.
//! The field is square and its physical edge length is fixed, so the scale
//! only depends on the current canvas size.

/// Physical edge length of the competition field in inches.
pub const FIELD_SIZE_INCHES: f64 = 148.625;

/// Scale factor converting canvas pixels to field inches.
///
/// * `canvas_size` - Edge length of the square canvas in pixels
pub fn pixels_to_inches(canvas_size: f64) -> f64 {
    FIELD_SIZE_INCHES / canvas_size
}

/// Scale factor converting field inches to canvas pixels.
///
/// * `canvas_size` - Edge length of the square canvas in pixels
pub fn inches_to_pixels(canvas_size: f64) -> f64 {
    canvas_size / FIELD_SIZE_INCHES
}

/// Returns true when `canvas_size` can produce a usable scale factor.
pub fn is_valid_canvas_size(canvas_size: f64) -> bool {
    canvas_size.is_finite() && canvas_size > 0.0
}

/// Format a value with a fixed number of decimals.
///
/// Rounds half away from zero on the decimal value and never prints a
/// negative zero, so `-0.001` at two decimals is `0.00`. This deliberately
/// differs from sign-preserving formatters (plain `{:.2}` prints `-0.00`
/// there), so a program generated here can differ from one produced by such
/// a formatter only in the sign of a zero coordinate.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    let mut rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        rounded = 0.0;
    }
    format!("{:.*}", decimals, rounded)
}

/// Format a heading in degrees with the shortest exact representation
/// (`90`, `45.5`).
pub fn format_heading(degrees: f64) -> String {
    if degrees == 0.0 {
        return "0".to_string();
    }
    format!("{}", degrees)
}

/// Format a length in inches for human-readable comments (`-74.31 in`).
pub fn format_inches(value: f64) -> String {
    format!("{} in", format_fixed(value, 2))
}
