//! Login / registration page with Google sign-in entry.
//!
//! Google is a redirect flow: the button leaves the app, and the
//! callback returns as a one-time `#token=` fragment consumed by
//! router startup.

use leptos::prelude::*;

use crate::app::{handle_api_error, refresh_current_user};
use crate::net::api::Api;
use crate::net::types::RegisterRequest;
use crate::state::auth::AuthState;
use crate::state::notify::{NoticeLevel, NotifyState, notify};

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NotifyState>>();

    let registering = RwSignal::new(false);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit_login = {
        let api = api.clone();
        move || {
            let username = email.get_untracked();
            let secret = password.get_untracked();
            if username.trim().is_empty() || secret.is_empty() {
                notify(notices, NoticeLevel::Warning, "Email and password are required");
                return;
            }
            busy.set(true);
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.login(username.trim(), &secret).await {
                    Ok(token) => {
                        auth.update(|a| a.apply_token(token.access_token));
                        notify(notices, NoticeLevel::Success, "Signed in");
                        refresh_current_user(api, auth, notices);
                    }
                    Err(err) => handle_api_error(auth, notices, &err),
                }
                busy.set(false);
            });
        }
    };

    let submit_register = {
        let api = api.clone();
        move || {
            let req = RegisterRequest {
                email: email.get_untracked().trim().to_owned(),
                password: password.get_untracked(),
                full_name: {
                    let name = full_name.get_untracked();
                    let name = name.trim();
                    if name.is_empty() { None } else { Some(name.to_owned()) }
                },
            };
            if req.email.is_empty() || req.password.is_empty() {
                notify(notices, NoticeLevel::Warning, "Email and password are required");
                return;
            }
            busy.set(true);
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.register(&req).await {
                    Ok(_) => {
                        notify(notices, NoticeLevel::Success, "Account created, please sign in");
                        registering.set(false);
                        password.set(String::new());
                    }
                    Err(err) => handle_api_error(auth, notices, &err),
                }
                busy.set(false);
            });
        }
    };

    let submit = move || {
        if registering.get_untracked() {
            submit_register();
        } else {
            submit_login();
        }
    };
    let on_submit_click = {
        let submit = submit.clone();
        move |_| submit()
    };
    let on_enter = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            submit();
        }
    };

    let google_url = api.google_login_url();

    view! {
        <section class="login-page">
            <h1>"Storefront"</h1>

            <label class="login-page__label">
                "Email"
                <input
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                    on:keydown=on_enter.clone()
                />
            </label>
            <Show when=move || registering.get()>
                <label class="login-page__label">
                    "Full name"
                    <input
                        type="text"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                </label>
            </Show>
            <label class="login-page__label">
                "Password"
                <input
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:keydown=on_enter
                />
            </label>

            <button class="btn btn--primary" disabled=move || busy.get() on:click=on_submit_click>
                {move || if registering.get() { "Create account" } else { "Sign in" }}
            </button>

            <button
                class="btn btn--link"
                on:click=move |_| registering.update(|r| *r = !*r)
            >
                {move || {
                    if registering.get() {
                        "Have an account? Sign in"
                    } else {
                        "New here? Create an account"
                    }
                }}
            </button>

            <a class="login-page__google btn" href=google_url>
                "Sign in with Google"
            </a>
        </section>
    }
}
