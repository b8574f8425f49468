//! API keys page: every key issued to the user, across all orders.

use leptos::prelude::*;

use crate::app::handle_api_error;
use crate::net::api::Api;
use crate::state::auth::AuthState;
use crate::state::keys::ApiKeysState;
use crate::state::notify::NotifyState;

#[component]
pub fn ApiKeysPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let keys = expect_context::<RwSignal<ApiKeysState>>();
    let notices = expect_context::<RwSignal<NotifyState>>();

    let token = Memo::new(move |_| auth.with(|a| a.token.clone()));
    // The key listing is keyed by user id, which arrives with the
    // profile fetch; the effect waits for it.
    let user_id = Memo::new(move |_| auth.with(AuthState::user_id));

    Effect::new(move || {
        let token = token.get();
        let Some(user_id) = user_id.get() else {
            return;
        };
        if token.is_empty() {
            return;
        }
        let Some(ticket) = keys.try_update(ApiKeysState::begin) else {
            return;
        };
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.user_keys(&token, user_id).await {
                Ok(list) => {
                    keys.update(|k| {
                        k.apply(ticket, list);
                    });
                }
                Err(err) => {
                    let current = keys.try_update(|k| k.fail(ticket)).unwrap_or(false);
                    if current {
                        handle_api_error(auth, notices, &err);
                    }
                }
            }
        });
    });

    view! {
        <section class="keys-page">
            <h1>"API Keys"</h1>
            <Show
                when=move || !keys.get().loading
                fallback=|| view! { <p>"Loading keys..."</p> }
            >
                <Show
                    when=move || !keys.get().keys.is_empty()
                    fallback=|| view! { <p class="keys-page__empty">"No API keys yet."</p> }
                >
                    <table class="keys-page__table">
                        <thead>
                            <tr>
                                <th>"Key"</th>
                                <th>"Quota"</th>
                                <th>"Active"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || keys.get().keys
                                key=|key| key.id
                                children=|key| {
                                    view! {
                                        <tr>
                                            <td><code>{key.key.clone()}</code></td>
                                            <td>{format!("{}/{}", key.quota_used, key.quota_limit)}</td>
                                            <td>{if key.is_active { "yes" } else { "no" }}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>
        </section>
    }
}
