//! Page-level loading indicator capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! Child forms signal in-flight requests through a [`LoadingReporter`]
//! instead of receiving the page's raw signal setter, so the page does not
//! need to know when or why loading toggles.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

use leptos::prelude::*;

/// Copyable handle to the page's loading flag.
#[derive(Clone, Copy, Debug)]
pub struct LoadingReporter {
    flag: RwSignal<bool>,
}

impl LoadingReporter {
    pub fn new() -> Self {
        Self { flag: RwSignal::new(false) }
    }

    /// Set the flag directly.
    pub fn report(&self, loading: bool) {
        self.flag.set(loading);
    }

    pub fn begin(&self) {
        self.report(true);
    }

    pub fn finish(&self) {
        self.report(false);
    }

    /// Reactive read, for use inside views.
    pub fn is_loading(&self) -> bool {
        self.flag.get()
    }

    pub fn is_loading_untracked(&self) -> bool {
        self.flag.get_untracked()
    }
}

impl Default for LoadingReporter {
    fn default() -> Self {
        Self::new()
    }
}
