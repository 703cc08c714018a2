//! Component lifetime tracking for async work.
//!
//! Futures spawned from a component outlive it if the user navigates away
//! before they resolve. A [`MountGuard`] is released in `on_cleanup`, and
//! the future checks it before touching component state.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct MountGuard {
    alive: Arc<AtomicBool>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    pub fn is_mounted(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Mark the owning component as gone. Every clone observes it.
    pub fn release(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}
