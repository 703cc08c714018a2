//! Fullscreen spinner shown while a form request is in flight.

use leptos::prelude::*;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-screen__spinner"></div>
            <span class="loading-screen__label">"Loading..."</span>
        </div>
    }
}
