//! # fieldpath Core
//!
//! Core types, errors, and utilities shared by the fieldpath crates.
//! Provides the error taxonomy for rejected path edits, the pixel-to-inch
//! scale of the competition field, and shared-state aliases.

pub mod error;
pub mod types;
pub mod units;

pub use error::{CodegenError, PathError};

pub use types::{thread_safe, ThreadSafe};

pub use units::{
    format_fixed, format_heading, format_inches, inches_to_pixels, is_valid_canvas_size,
    pixels_to_inches, FIELD_SIZE_INCHES,
};
