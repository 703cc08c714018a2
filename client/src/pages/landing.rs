//! Landing page: marketing sections plus the blog login gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the public root route. On mount it validates any stored session
//! credential; the "Tech Blog" button then either navigates to the blog or
//! opens the login overlay. Login and register overlays hand off to each
//! other without ever both being open.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::flash_banner::FlashBanner;
use crate::components::loading_screen::LoadingScreen;
use crate::components::login_form::LoginForm;
use crate::components::modal::Modal;
use crate::components::register_form::RegisterForm;
use crate::pages::landing_content::*;
use crate::state::auth::AuthState;
use crate::state::loading::LoadingReporter;
use crate::state::overlay::{OverlayState, apply_blog_action, blog_action};
use crate::util::flash::FlashMessage;
use crate::util::lifecycle::MountGuard;

#[component]
pub fn LandingPage() -> impl IntoView {
    // Page-local: rebuilt from the stored credential on every mount.
    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    let overlay = RwSignal::new(OverlayState::Closed);
    let loading = LoadingReporter::new();
    let flash = FlashMessage::new();
    provide_context(flash);
    let navigate = use_navigate();

    let guard = MountGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.release()
    });

    #[cfg(feature = "hydrate")]
    {
        use crate::state::auth::settle;
        use crate::util::flash::navigation_message;

        let config = use_context::<crate::net::api::ApiConfig>().unwrap_or_default();
        let location = leptos_router::hooks::use_location();
        let navigate_home = navigate.clone();
        let guard = guard.clone();
        Effect::new(move |_| {
            flash.0.set(navigation_message(&location.state.get_untracked()));

            let config = config.clone();
            let navigate_home = navigate_home.clone();
            let guard = guard.clone();
            leptos::task::spawn_local(async move {
                use crate::net::api::HttpProfileCheck;
                use crate::session::store::BrowserStore;
                use crate::session::validator::validate_session;

                let outcome = validate_session(&BrowserStore, &HttpProfileCheck::new(config)).await;
                let mut redirect = None;
                // The signal is disposed once the page unmounts.
                auth.try_update(|state| settle(&outcome, &guard, state, |route| redirect = Some(route)));
                if let Some(route) = redirect {
                    navigate_home(route, NavigateOptions { replace: true, ..NavigateOptions::default() });
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = guard;

    let on_blog = move |_| {
        let action = blog_action(auth.get_untracked().authenticated);
        let mut route = None;
        overlay.update(|state| route = apply_blog_action(action, state));
        if let Some(route) = route {
            navigate(route, NavigateOptions::default());
        }
    };

    let close = Callback::new(move |()| overlay.update(OverlayState::close));
    let switch_to_register = Callback::new(move |()| overlay.update(OverlayState::switch_to_register));
    let switch_to_login = Callback::new(move |()| overlay.update(OverlayState::switch_to_login));
    let login_open = Signal::derive(move || overlay.get().is_login_open());
    let register_open = Signal::derive(move || overlay.get().is_register_open());

    view! {
        <FlashBanner flash=flash/>
        <Show when=move || loading.is_loading()>
            <LoadingScreen/>
        </Show>

        <div class="d-flex flex-column h-100 landing-page">
            <section id="home">
                <header class="bg-dark py-5">
                    <div class="container px-5">
                        <div class="row gx-5 align-items-center justify-content-center">
                            <div class="col-lg-8 col-xl-7 col-xxl-6">
                                <div class="my-2 text-center text-xl-start">
                                    <h1 class="display-5 fw-bolder text-white mb-2">{HERO_TITLE}</h1>
                                    <p class="lead fw-normal text-white-50 mb-4">{HERO_LEAD}</p>
                                    <div class="d-grid gap-3 d-sm-flex justify-content-sm-center justify-content-xl-start">
                                        <button class="btn custom-btn btn-lg px-4 me-sm-3" on:click=on_blog>
                                            {BLOG_LABEL}
                                        </button>
                                        <a
                                            class="btn custom-btn btn-lg px-4 me-sm-3"
                                            href=ABOUT_URL
                                            target=link_target(ABOUT_URL).map(|t| t.0)
                                            rel=link_target(ABOUT_URL).map(|t| t.1)
                                        >
                                            {ABOUT_LABEL}
                                        </a>
                                    </div>
                                </div>
                            </div>
                            <div class="col-xl-5 col-xxl-6 d-none d-xl-block text-center">
                                <img class="img-fluid rounded-3 my-3" src=HERO_IMAGE alt=COMPANY/>
                            </div>
                        </div>
                    </div>
                </header>
            </section>

            <section class="py-2" id="features">
                <div class="container px-3 my-3">
                    <div class="row gx-5">
                        <div class="col-lg-4 mb-5 mb-lg-0">
                            <h2 class="fw-bolder mb-0">{FEATURES_HEADING}</h2>
                        </div>
                        <div class="col-lg-8">
                            <div class="row gx-5 row-cols-1 row-cols-md-2">
                                {FEATURES
                                    .iter()
                                    .map(|feature| {
                                        view! {
                                            <div class="col mb-5 h-100">
                                                <div class="feature bg-primary bg-gradient text-white rounded-3 mb-3">
                                                    <i class=format!("bi {}", feature.icon)></i>
                                                </div>
                                                <h2 class="h5">{feature.title}</h2>
                                                <p class="mb-0">{feature.body}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="pt-0 pb-5" id="contact">
                <div class="container px-2">
                    <div class="bg-dark rounded-3 py-3 px-4 mb-2">
                        <div class="text-center mb-2">
                            <h1 class="text-white">"Contact"</h1>
                            <p class="contact-us-pgraph lead fw-normal">{CONTACT_BLURB}</p>
                        </div>
                    </div>
                    <div class="row gx-5 row-cols-1 row-cols-md-4 justify-content-center py-2">
                        {CONTACTS
                            .iter()
                            .map(|card| {
                                view! {
                                    <div class="col mb-4 mb-md-0 d-flex flex-column align-items-center">
                                        <a
                                            href=card.href
                                            class="text-decoration-none"
                                            target=link_target(card.href).map(|t| t.0)
                                            rel=link_target(card.href).map(|t| t.1)
                                        >
                                            <div class="feature bg-primary bg-gradient text-white rounded-3 mb-3">
                                                <i class=format!("bi {}", card.icon)></i>
                                            </div>
                                        </a>
                                        <div class="h5 mb-2">{card.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section id="reference-clients">
                <div class="py-5">
                    <div class="container mb-5">
                        <h1 class="text-center mb-4">"Reference Clients"</h1>
                        {REFERENCE_CLIENTS
                            .iter()
                            .map(|client| {
                                view! {
                                    <div class="text-center mb-4 reference-client">
                                        <a
                                            href=client.url
                                            target=link_target(client.url).map(|t| t.0)
                                            rel=link_target(client.url).map(|t| t.1)
                                        >
                                            <img
                                                src=client.logo
                                                class="d-block mx-auto rounded reference-client__logo"
                                                alt=client.name
                                            />
                                        </a>
                                        <div class="fs-4 mb-4 mt-4">{client.summary}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section id="testimonials">
                <div class="container my-5">
                    <h1 class="text-center mb-4">"Testimonials"</h1>
                    {TESTIMONIALS
                        .iter()
                        .map(|t| {
                            view! {
                                <div class="text-center mb-4">
                                    <div class="fs-4 mb-4 fst-italic mt-4">{format!("\"{}\"", t.quote)}</div>
                                    <div class="d-flex align-items-center justify-content-center">
                                        <img class="rounded-circle me-1 testimonial__logo" src=t.logo alt=t.client/>
                                        <div class="fw-bold">
                                            <a
                                                href=t.url
                                                target=link_target(t.url).map(|x| x.0)
                                                rel=link_target(t.url).map(|x| x.1)
                                            >
                                                {t.client}
                                            </a>
                                            <span class="fw-bold text-primary mx-1">"/"</span>
                                            {format!("Personal Client of {COMPANY}")}
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="other-apps">
                <div class="container my-5">
                    <h1 class="text-center mb-4">"Other Apps"</h1>
                    <div class="text-center mb-4">
                        "Check out some of our other apps:"
                        <div class="d-flex justify-content-center flex-wrap">
                            {OTHER_APPS
                                .iter()
                                .map(|app| {
                                    view! {
                                        <a
                                            href=app.url
                                            class="m-2"
                                            target=link_target(app.url).map(|t| t.0)
                                            rel=link_target(app.url).map(|t| t.1)
                                        >
                                            <img class="other-app__image" src=app.image alt=app.name/>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </section>

            <Modal is_open=login_open on_close=close>
                <LoginForm on_switch_to_register=switch_to_register loading=loading/>
            </Modal>
            <Modal is_open=register_open on_close=close>
                <RegisterForm on_switch_to_login=switch_to_login loading=loading/>
            </Modal>
        </div>
    }
}
