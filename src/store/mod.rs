//! Observable state cells.
//!
//! Provides the reactive primitive the rest of the crate is built on:
//! - [`Store`] - A named, writable cell with get/set/observe
//! - [`Subscription`] - Deregistration handle returned by [`Store::observe`]
//! - [`Derived`] - A read-only cell computed from another store
//!
//! # Notification contract
//!
//! Observers run synchronously inside `set`, in registration order. A set
//! issued from inside an observer is queued and delivered once the current
//! round has reached every observer, so all observers see values in the
//! order they were set. No lock is held while an observer runs.

mod derived;
mod subscription;
mod writable;

pub use derived::Derived;
pub use subscription::Subscription;
pub use writable::Store;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Locks a mutex, recovering the guard if a previous holder panicked.
///
/// Store operations never fail, so a panicking observer must not poison
/// the cell for everyone else.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
