//! Type aliases for shared editor state.
//!
//! The editor is single-threaded: every mutation and the regeneration that
//! follows it run to completion inside one input handler. Hosts that drive a
//! session from several threads or tasks must funnel all access through one
//! exclusive-access point, which is what [`ThreadSafe`] provides.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fieldpath_core::types::*;
//!
//! let session: ThreadSafe<EditorSession> = thread_safe(EditorSession::new());
//! session.lock().undo();
//! ```

use parking_lot::Mutex;
use std::sync::Arc;

/// A thread-safe, mutex-protected wrapper for cross-thread sharing.
///
/// Uses `parking_lot::Mutex` for better performance than `std::sync::Mutex`.
pub type ThreadSafe<T> = Arc<Mutex<T>>;

/// Creates a new [`ThreadSafe`] value.
#[inline]
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}
