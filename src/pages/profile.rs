//! Profile page: profile edit, password change, avatar upload, and the
//! TOTP enrollment flow.

use leptos::prelude::*;

use crate::app::handle_api_error;
use crate::net::api::Api;
use crate::net::types::UserUpdate;
use crate::state::auth::AuthState;
use crate::state::notify::{NoticeLevel, NotifyState, notify};
use crate::state::profile::ProfileState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let email = move || {
        auth.with(|a| a.user.as_ref().and_then(|u| u.email.clone()).unwrap_or_default())
    };
    let avatar = move || auth.with(|a| a.user.as_ref().and_then(|u| u.avatar_url.clone()));

    view! {
        <section class="profile-page">
            <h1>"Profile"</h1>
            <p class="profile-page__email">{email}</p>
            {move || {
                avatar()
                    .map(|url| view! { <img class="profile-page__avatar" src=url alt="avatar"/> })
            }}

            <ProfileForm/>
            <PasswordForm/>
            <AvatarForm/>
            <TotpSection/>
        </section>
    }
}

#[component]
fn ProfileForm() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NotifyState>>();
    let profile = expect_context::<RwSignal<ProfileState>>();

    let full_name = RwSignal::new(String::new());

    // Prefill once the profile fetch lands.
    Effect::new(move || {
        let loaded = auth.with(|a| {
            a.user.as_ref().and_then(|u| u.full_name.clone()).unwrap_or_default()
        });
        full_name.set(loaded);
    });

    let save = move |_| {
        let token = auth.with_untracked(|a| a.token.clone());
        let update = UserUpdate {
            full_name: Some(full_name.get_untracked().trim().to_owned()),
            ..UserUpdate::default()
        };
        profile.update(|p| p.saving = true);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.update_profile(&token, &update).await {
                Ok(user) => {
                    auth.update(|a| a.user = Some(user));
                    notify(notices, NoticeLevel::Success, "Profile updated");
                }
                Err(err) => handle_api_error(auth, notices, &err),
            }
            profile.update(|p| p.saving = false);
        });
    };

    view! {
        <div class="profile-form">
            <label>
                "Full name"
                <input
                    type="text"
                    prop:value=move || full_name.get()
                    on:input=move |ev| full_name.set(event_target_value(&ev))
                />
            </label>
            <button
                class="btn btn--primary"
                disabled=move || profile.get().saving
                on:click=save
            >
                "Save"
            </button>
        </div>
    }
}

#[component]
fn PasswordForm() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NotifyState>>();

    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());

    let change = move |_| {
        let old = old_password.get_untracked();
        let new = new_password.get_untracked();
        if old.is_empty() || new.is_empty() {
            notify(notices, NoticeLevel::Warning, "Both passwords are required");
            return;
        }
        let token = auth.with_untracked(|a| a.token.clone());
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.change_password(&token, &old, &new).await {
                Ok(()) => {
                    old_password.set(String::new());
                    new_password.set(String::new());
                    notify(notices, NoticeLevel::Success, "Password changed");
                }
                Err(err) => handle_api_error(auth, notices, &err),
            }
        });
    };

    view! {
        <div class="password-form">
            <h2>"Change password"</h2>
            <label>
                "Current password"
                <input
                    type="password"
                    prop:value=move || old_password.get()
                    on:input=move |ev| old_password.set(event_target_value(&ev))
                />
            </label>
            <label>
                "New password"
                <input
                    type="password"
                    prop:value=move || new_password.get()
                    on:input=move |ev| new_password.set(event_target_value(&ev))
                />
            </label>
            <button class="btn" on:click=change>"Change password"</button>
        </div>
    }
}

#[component]
fn AvatarForm() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NotifyState>>();

    let on_file = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let token = auth.with_untracked(|a| a.token.clone());
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.upload_avatar(&token, &file).await {
                Ok(user) => {
                    auth.update(|a| a.user = Some(user));
                    notify(notices, NoticeLevel::Success, "Avatar updated");
                }
                Err(err) => handle_api_error(auth, notices, &err),
            }
        });
    };

    view! {
        <div class="avatar-form">
            <h2>"Avatar"</h2>
            <input type="file" accept="image/*" on:change=on_file/>
        </div>
    }
}

/// TOTP enrollment: setup issues a secret, enable verifies a code
/// against it, disable verifies a code against the stored secret.
#[component]
fn TotpSection() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NotifyState>>();
    let profile = expect_context::<RwSignal<ProfileState>>();

    let code = RwSignal::new(String::new());

    let enabled = Memo::new(move |_| {
        auth.with(|a| a.user.as_ref().is_some_and(|u| u.is_totp_enabled))
    });
    let pending = Memo::new(move |_| profile.with(|p| p.totp_pending.clone()));

    let start_setup = {
        let api = api.clone();
        move |_| {
            let token = auth.with_untracked(|a| a.token.clone());
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.totp_setup(&token).await {
                    Ok(setup) => profile.update(|p| p.start_totp_enrollment(setup)),
                    Err(err) => handle_api_error(auth, notices, &err),
                }
            });
        }
    };

    let enable = {
        let api = api.clone();
        move |_| {
            let Some(setup) = pending.get_untracked() else {
                return;
            };
            let verification = code.get_untracked();
            if verification.trim().is_empty() {
                notify(notices, NoticeLevel::Warning, "Enter the code from your app");
                return;
            }
            let token = auth.with_untracked(|a| a.token.clone());
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.totp_enable(&token, verification.trim(), &setup.secret).await {
                    Ok(user) => {
                        auth.update(|a| a.user = Some(user));
                        profile.update(ProfileState::clear_totp_enrollment);
                        code.set(String::new());
                        notify(notices, NoticeLevel::Success, "Two-factor auth enabled");
                    }
                    Err(err) => handle_api_error(auth, notices, &err),
                }
            });
        }
    };

    let disable = move |_| {
        let verification = code.get_untracked();
        if verification.trim().is_empty() {
            notify(notices, NoticeLevel::Warning, "Enter the code from your app");
            return;
        }
        let token = auth.with_untracked(|a| a.token.clone());
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.totp_disable(&token, verification.trim()).await {
                Ok(user) => {
                    auth.update(|a| a.user = Some(user));
                    code.set(String::new());
                    notify(notices, NoticeLevel::Success, "Two-factor auth disabled");
                }
                Err(err) => handle_api_error(auth, notices, &err),
            }
        });
    };

    view! {
        <div class="totp-section">
            <h2>"Two-factor authentication"</h2>

            <Show
                when=move || enabled.get()
                fallback=move || {
                    let start_setup = start_setup.clone();
                    let enable = enable.clone();
                    view! {
                        <Show
                            when=move || pending.get().is_some()
                            fallback=move || {
                                let start_setup = start_setup.clone();
                                view! {
                                    <button class="btn" on:click=start_setup>
                                        "Set up two-factor auth"
                                    </button>
                                }
                            }
                        >
                            <div class="totp-section__pending">
                                <p>
                                    "Secret: "
                                    <code>
                                        {move || {
                                            pending.get().map(|s| s.secret).unwrap_or_default()
                                        }}
                                    </code>
                                </p>
                                <p>
                                    <a href=move || {
                                        pending.get().map(|s| s.otpauth_url).unwrap_or_default()
                                    }>
                                        "Open in authenticator"
                                    </a>
                                </p>
                                <label>
                                    "Verification code"
                                    <input
                                        type="text"
                                        prop:value=move || code.get()
                                        on:input=move |ev| code.set(event_target_value(&ev))
                                    />
                                </label>
                                <button class="btn btn--primary" on:click=enable.clone()>
                                    "Verify and enable"
                                </button>
                                <button
                                    class="btn"
                                    on:click=move |_| {
                                        profile.update(ProfileState::clear_totp_enrollment)
                                    }
                                >
                                    "Cancel"
                                </button>
                            </div>
                        </Show>
                    }
                }
            >
                <label>
                    "Verification code"
                    <input
                        type="text"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn" on:click=disable.clone()>
                    "Disable two-factor auth"
                </button>
            </Show>
        </div>
    }
}
