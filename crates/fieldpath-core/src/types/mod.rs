//! Type system utilities and aliases.
//!
//! ## Modules
//!
//! - [`aliases`]: The `Arc<Mutex<T>>` alias for sharing a session across threads.

pub mod aliases;

pub use aliases::*;
