//! Bounded-wait mutual exclusion
//!
//! A reusable primitive for handlers that need a critical section with an
//! upper bound on how long they will wait for it. Acquisition past the bound
//! fails with the distinguished [`LockTimeout`] error instead of blocking
//! forever; the returned guard releases exactly once on every exit path,
//! normal return or unwind alike.
//!
//! The dispatcher itself never takes one of these; it is offered to command
//! handlers as a convenience.

use parking_lot::{Mutex, MutexGuard};
use std::time::Duration;

/// Acquisition of a [`TimedLock`] exceeded its bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("lock acquisition timed out after {timeout:?}")]
pub struct LockTimeout {
    /// The bound that elapsed
    pub timeout: Duration,
}

/// A mutex whose acquisition is bounded in time
#[derive(Debug, Default)]
pub struct TimedLock<T> {
    inner: Mutex<T>,
}

impl<T> TimedLock<T> {
    /// Wrap a value in a timed lock
    pub fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(value),
        }
    }

    /// Acquire the lock, waiting at most `timeout`
    ///
    /// The guard releases the lock on drop, regardless of how the critical
    /// section exits.
    pub fn lock_for(&self, timeout: Duration) -> Result<MutexGuard<'_, T>, LockTimeout> {
        self.inner.try_lock_for(timeout).ok_or(LockTimeout { timeout })
    }

    /// Consume the lock, returning the inner value
    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }
}
