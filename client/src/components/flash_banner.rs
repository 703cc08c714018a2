//! Dismissable success banner for navigation and form messages.

use leptos::prelude::*;

use crate::util::flash::FlashMessage;

#[component]
pub fn FlashBanner(flash: FlashMessage) -> impl IntoView {
    let message = flash.0;
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class="alert alert-success flash-banner" role="alert">
                <span>{move || message.get().unwrap_or_default()}</span>
                <button class="flash-banner__close" on:click=move |_| flash.dismiss() title="Dismiss">
                    "✕"
                </button>
            </div>
        </Show>
    }
}
