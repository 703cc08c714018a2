//! Overlay container used by the login and register dialogs.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use leptos::prelude::*;

/// Keys that dismiss an open modal.
fn is_close_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Backdrop + dialog shell. Children render only while `is_open` is true.
///
/// The dialog takes keyboard focus when it opens, so Escape closes it
/// without the user clicking inside first. Backdrop clicks and the close
/// button close it too.
#[component]
pub fn Modal(#[prop(into)] is_open: Signal<bool>, on_close: Callback<()>, children: ChildrenFn) -> impl IntoView {
    let children = StoredValue::new(children);
    let dialog_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if !is_open.get() {
            return;
        }
        if let Some(dialog) = dialog_ref.get() {
            let _ = dialog.focus();
        }
    });

    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if is_close_key(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    });

    view! {
        <Show when=move || is_open.get()>
            <div class="modal-overlay" on:click=move |_| on_close.run(())>
                <div
                    class="modal-content"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    node_ref=dialog_ref
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev| on_keydown.run(ev)
                >
                    <button class="modal-close" on:click=move |_| on_close.run(()) title="Close">
                        "✕"
                    </button>
                    {move || children.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}
