//! Username + password login form shown inside the login overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the token and username are written to the session store, the
//! page-level auth flag flips to authenticated, and the user lands on the
//! blog. Failures are shown inline and leave the overlay open.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use leptos::prelude::*;

use crate::net::types::LoginRequest;
use crate::state::loading::LoadingReporter;

const MISSING_FIELDS: &str = "Enter both username and password.";

/// Trim the username and require both fields.
fn validate_login_input(username: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginForm(on_switch_to_register: Callback<()>, loading: LoadingReporter) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let (config, auth, navigate) = (
        use_context::<crate::net::api::ApiConfig>().unwrap_or_default(),
        use_context::<RwSignal<crate::state::auth::AuthState>>(),
        leptos_router::hooks::use_navigate(),
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login_input(&username.get(), &password.get()) {
            Ok(request) => request,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            loading.begin();
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                use crate::session::store::{BrowserStore, Credential, save_credential};
                use crate::state::overlay::POSTS_ROUTE;

                match crate::net::api::login(&config, &request).await {
                    Ok(resp) => {
                        let credential = Credential {
                            token: resp.access_token,
                            username: resp.username.or(Some(request.username)),
                        };
                        save_credential(&BrowserStore, &credential);
                        if let Some(auth) = auth {
                            auth.update(crate::state::auth::AuthState::sign_in);
                        }
                        loading.finish();
                        busy.set(false);
                        navigate(POSTS_ROUTE, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        error.set(Some(e.to_string()));
                        loading.finish();
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, loading);
    };

    view! {
        <div class="auth-form">
            <h2 class="auth-form__title">"Log In"</h2>
            <form on:submit=on_submit>
                <input
                    class="form-control mb-3"
                    type="text"
                    placeholder="Username"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    class="form-control mb-3"
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn custom-btn w-100" type="submit" disabled=move || busy.get()>
                    "Log In"
                </button>
            </form>
            <Show when=move || error.with(Option::is_some)>
                <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <p class="auth-form__switch">
                "Don't have an account? "
                <button class="btn btn-link p-0" type="button" on:click=move |_| on_switch_to_register.run(())>
                    "Register"
                </button>
            </p>
        </div>
    }
}
