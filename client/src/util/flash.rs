//! One-shot success message passed through router navigation state.
//!
//! Pages that redirect to the landing route (e.g. after logout or account
//! deletion) navigate with `NavigateOptions { state: { "message": "..." } }`.
//! The landing page reads it once on mount from `use_location().state` and
//! shows it as a dismissable banner. Child forms post their own banners
//! through the [`FlashMessage`] context.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

use leptos::prelude::*;
use leptos_router::location::State;

/// Field name inside the navigation state object.
pub const MESSAGE_FIELD: &str = "message";

/// Banner text shared between the landing page and its overlays.
#[derive(Clone, Copy, Debug)]
pub struct FlashMessage(pub RwSignal<Option<String>>);

impl FlashMessage {
    pub fn new() -> Self {
        Self(RwSignal::new(None))
    }

    /// Show `text`; blank text clears the banner.
    pub fn show(&self, text: &str) {
        self.0.set(normalize_message(Some(text.to_owned())));
    }

    pub fn dismiss(&self) {
        self.0.set(None);
    }

    pub fn current(&self) -> Option<String> {
        self.0.get_untracked()
    }
}

impl Default for FlashMessage {
    fn default() -> Self {
        Self::new()
    }
}

/// Trim the raw message; blank or missing means no banner.
pub fn normalize_message(raw: Option<String>) -> Option<String> {
    raw.map(|m| m.trim().to_owned()).filter(|m| !m.is_empty())
}

/// Extract the banner message from the router's navigation state.
pub fn navigation_message(state: &State) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let value = state.to_js_value();
        if !value.is_object() {
            return None;
        }
        let message = js_sys::Reflect::get(&value, &wasm_bindgen::JsValue::from_str(MESSAGE_FIELD)).ok()?;
        normalize_message(message.as_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = state;
        None
    }
}
