// SPDX-License-Identifier: MPL-2.0
//! Background scroll suspension while the project modal is open.
//!
//! The selection model holds a [`ScrollGuard`] for as long as a project is
//! open. Dropping the guard releases the suspension, whichever path closes
//! the modal.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Surface whose scrolling can be suspended.
pub trait ScrollHost: fmt::Debug + Send + Sync {
    /// Suspends scrolling. Calls nest.
    fn suspend(&self);

    /// Undoes one [`ScrollHost::suspend`].
    fn resume(&self);
}

/// Scoped scroll suspension; resumes the host on drop.
#[must_use = "scrolling resumes as soon as the guard is dropped"]
pub struct ScrollGuard {
    host: Arc<dyn ScrollHost>,
}

impl ScrollGuard {
    /// Suspends scrolling on `host` until the returned guard is dropped.
    pub fn acquire(host: Arc<dyn ScrollHost>) -> Self {
        host.suspend();
        Self { host }
    }
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        self.host.resume();
    }
}

impl fmt::Debug for ScrollGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollGuard")
            .field("host", &self.host)
            .finish()
    }
}

/// Nesting counter backing the gallery grid.
///
/// While [`ScrollLock::is_locked`], grid cards ignore input and the modal
/// layer captures scrolling.
#[derive(Debug, Default)]
pub struct ScrollLock {
    depth: AtomicUsize,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.depth.load(Ordering::Acquire) > 0
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth.load(Ordering::Acquire)
    }
}

impl ScrollHost for ScrollLock {
    fn suspend(&self) {
        self.depth.fetch_add(1, Ordering::AcqRel);
    }

    fn resume(&self) {
        // Saturate instead of wrapping on an unbalanced resume.
        let _ = self
            .depth
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |depth| {
                Some(depth.saturating_sub(1))
            });
    }
}
