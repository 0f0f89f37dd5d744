// SPDX-License-Identifier: MPL-2.0
//! Single-claim background scroll suppression.
//!
//! The application owns one [`ScrollLock`] and hands clones to every viewer.
//! Only one [`ScrollGuard`] can exist at a time; the lock is released when the
//! guard is dropped, whichever path the viewer takes to close.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    held: Arc<AtomicBool>,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the lock, or returns `None` if someone already holds it.
    #[must_use]
    pub fn try_acquire(&self) -> Option<ScrollGuard> {
        self.held
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| ScrollGuard {
                held: Arc::clone(&self.held),
            })
    }

    /// Whether page scrolling is currently suppressed.
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::Acquire)
    }
}

/// Active claim on a [`ScrollLock`].
#[derive(Debug)]
pub struct ScrollGuard {
    held: Arc<AtomicBool>,
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        self.held.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_claim_at_a_time() {
        let lock = ScrollLock::new();
        let shared = lock.clone();

        let guard = lock.try_acquire().expect("first claim");
        assert!(shared.is_held());
        assert!(shared.try_acquire().is_none());

        drop(guard);
        assert!(!lock.is_held());
        assert!(shared.try_acquire().is_some());
    }

    #[test]
    fn dropping_the_guard_releases_even_on_unwind() {
        let lock = ScrollLock::new();
        let shared = lock.clone();
        let result = std::panic::catch_unwind(move || {
            let _guard = shared.try_acquire().expect("claim");
            panic!("viewer torn down");
        });
        assert!(result.is_err());
        assert!(!lock.is_held());
    }
}
