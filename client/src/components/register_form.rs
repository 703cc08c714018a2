//! Account registration form shown inside the register overlay.

#[cfg(test)]
#[path = "register_form_test.rs"]
mod register_form_test;

use leptos::prelude::*;

use crate::net::types::RegisterRequest;
use crate::state::loading::LoadingReporter;
use crate::util::flash::FlashMessage;

pub const MIN_PASSWORD_LEN: usize = 8;
pub const REGISTERED_MESSAGE: &str = "Account created. You can log in now.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RegisterInputError {
    MissingFields,
    InvalidEmail,
    PasswordTooShort,
    PasswordMismatch,
}

impl RegisterInputError {
    fn message(self) -> &'static str {
        match self {
            Self::MissingFields => "Fill in every field.",
            Self::InvalidEmail => "Enter a valid email address.",
            Self::PasswordTooShort => "Password must be at least 8 characters.",
            Self::PasswordMismatch => "Passwords do not match.",
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.'),
        None => false,
    }
}

fn validate_register_input(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<RegisterRequest, RegisterInputError> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(RegisterInputError::MissingFields);
    }
    if !looks_like_email(email) {
        return Err(RegisterInputError::InvalidEmail);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(RegisterInputError::PasswordTooShort);
    }
    if password != confirm {
        return Err(RegisterInputError::PasswordMismatch);
    }
    Ok(RegisterRequest { username: username.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

/// Confirm the new account on the page banner and hand over to the login
/// overlay. Runs last: the switch unmounts this form.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn complete_registration(flash: Option<FlashMessage>, on_switch_to_login: Callback<()>) {
    if let Some(flash) = flash {
        flash.show(REGISTERED_MESSAGE);
    }
    on_switch_to_login.run(());
}

#[component]
pub fn RegisterForm(on_switch_to_login: Callback<()>, loading: LoadingReporter) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let (config, flash) = (
        use_context::<crate::net::api::ApiConfig>().unwrap_or_default(),
        use_context::<FlashMessage>(),
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_register_input(&username.get(), &email.get(), &password.get(), &confirm.get()) {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e.message().to_owned()));
                return;
            }
        };
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            loading.begin();
            let config = config.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&config, &request).await {
                    Ok(()) => {
                        loading.finish();
                        busy.set(false);
                        complete_registration(flash, on_switch_to_login);
                    }
                    Err(e) => {
                        log::warn!("registration failed: {e}");
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
            <h2 class="auth-form__title">"Register"</h2>
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
                    type="email"
                    placeholder="Email"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="form-control mb-3"
                    type="password"
                    placeholder="Password"
                    autocomplete="new-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <input
                    class="form-control mb-3"
                    type="password"
                    placeholder="Confirm password"
                    autocomplete="new-password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                <button class="btn custom-btn w-100" type="submit" disabled=move || busy.get()>
                    "Create Account"
                </button>
            </form>
            <Show when=move || error.with(Option::is_some)>
                <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <p class="auth-form__switch">
                "Already have an account? "
                <button class="btn btn-link p-0" type="button" on:click=move |_| on_switch_to_login.run(())>
                    "Log In"
                </button>
            </p>
        </div>
    }
}
