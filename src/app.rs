//! Root application component: context providers, persistence wiring,
//! router startup, and the route -> page switch.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::notices::NoticeList;
use crate::config::AppConfig;
use crate::net::api::Api;
use crate::net::error::ApiError;
use crate::pages::admin::{AdminInventoryPage, AdminOrdersPage, AdminProductsPage};
use crate::pages::keys::ApiKeysPage;
use crate::pages::login::LoginPage;
use crate::pages::order_detail::OrderDetailPage;
use crate::pages::orders::OrdersPage;
use crate::pages::products::ProductsPage;
use crate::pages::profile::ProfilePage;
use crate::router::{self, Route};
use crate::state::auth::AuthState;
use crate::state::cart::{CartItem, CartState};
use crate::state::catalog::CatalogState;
use crate::state::keys::ApiKeysState;
use crate::state::notify::{NoticeLevel, NotifyState, notify};
use crate::state::orders::OrdersState;
use crate::state::profile::ProfileState;
use crate::state::ui::{Language, Theme, UiState};
use crate::util::{storage, theme};

/// Root component. Provides all shared state contexts, rehydrates
/// persisted state, and wires the hash router.
#[component]
pub fn App() -> impl IntoView {
    let api = Api::new(AppConfig::from_window().api_base_url);
    provide_context(api.clone());

    // Rehydrate persisted state before the first render.
    let auth = RwSignal::new(load_auth());
    let cart = RwSignal::new(load_cart());
    let ui = RwSignal::new(load_ui());
    let catalog = RwSignal::new(CatalogState::default());
    let orders = RwSignal::new(OrdersState::default());
    let keys = RwSignal::new(ApiKeysState::default());
    let profile = RwSignal::new(ProfileState::default());
    let notices = RwSignal::new(NotifyState::default());
    let route = RwSignal::new(Route::default());

    provide_context(auth);
    provide_context(cart);
    provide_context(ui);
    provide_context(catalog);
    provide_context(orders);
    provide_context(keys);
    provide_context(profile);
    provide_context(notices);
    provide_context(route);

    // Write persisted state back on every mutation.
    Effect::new(move || {
        let state = auth.get();
        storage::save_string(storage::TOKEN_KEY, &state.token);
        match &state.user {
            Some(user) => storage::save_json(storage::USER_KEY, user),
            None => storage::remove(storage::USER_KEY),
        }
    });
    Effect::new(move || {
        storage::save_json(storage::CART_KEY, &cart.get().items);
    });
    Effect::new(move || {
        let state = ui.get();
        storage::save_string(storage::THEME_KEY, state.theme.as_str());
        storage::save_string(storage::LANG_KEY, state.lang.as_str());
        theme::apply(state.theme);
        theme::apply_lang(state.lang);
    });

    // Ending the session drops everything fetched under it.
    let authed = Memo::new(move |_| auth.with(AuthState::is_authenticated));
    Effect::new(move || {
        if !authed.get() {
            catalog.update(CatalogState::clear);
            orders.update(OrdersState::clear);
            keys.update(ApiKeysState::clear);
            profile.update(ProfileState::clear_totp_enrollment);
        }
    });

    // Router startup: consume a one-time OAuth token, parse the
    // current fragment, then follow hashchange for the session.
    {
        let api = api.clone();
        router::init(route, move |token| {
            auth.update(|a| a.apply_token(token));
            notify(notices, NoticeLevel::Success, "Signed in with Google");
            refresh_current_user(api.clone(), auth, notices);
        });
    }

    // A rehydrated session may have a token but no (or stale) profile.
    if auth.with_untracked(AuthState::is_authenticated) {
        refresh_current_user(api, auth, notices);
    }

    let page = move || match route.get() {
        Route::Products => view! { <ProductsPage/> }.into_any(),
        Route::Orders => view! { <OrdersPage/> }.into_any(),
        Route::OrderDetail { id } => view! { <OrderDetailPage id=id/> }.into_any(),
        Route::ApiKeys => view! { <ApiKeysPage/> }.into_any(),
        Route::Profile => view! { <ProfilePage/> }.into_any(),
        Route::AdminProducts => view! { <AdminProductsPage/> }.into_any(),
        Route::AdminOrders => view! { <AdminOrdersPage/> }.into_any(),
        Route::AdminInventory => view! { <AdminInventoryPage/> }.into_any(),
    };

    view! {
        <Header/>
        <NoticeList/>
        <main class="app-main">
            <Show when=move || authed.get() fallback=|| view! { <LoginPage/> }>
                {page}
            </Show>
        </main>
    }
}

/// Fetch `/users/me` into the auth store. Fire-and-forget; failures go
/// through the shared error path.
pub(crate) fn refresh_current_user(
    api: Api,
    auth: RwSignal<AuthState>,
    notices: RwSignal<NotifyState>,
) {
    let token = auth.with_untracked(|a| a.token.clone());
    if token.is_empty() {
        return;
    }
    leptos::task::spawn_local(async move {
        match api.current_user(&token).await {
            Ok(user) => auth.update(|a| a.user = Some(user)),
            Err(err) => handle_api_error(auth, notices, &err),
        }
    });
}

/// Shared failure path: a 401 anywhere ends the session; everything
/// else surfaces as a transient notice.
pub(crate) fn handle_api_error(
    auth: RwSignal<AuthState>,
    notices: RwSignal<NotifyState>,
    err: &ApiError,
) {
    if err.is_unauthorized() {
        auth.update(AuthState::logout);
        notify(notices, NoticeLevel::Warning, "Session expired, please sign in again");
    } else {
        log::warn!("request failed: {err}");
        notify(notices, NoticeLevel::Error, err.to_string());
    }
}

fn load_auth() -> AuthState {
    AuthState {
        token: storage::load_string(storage::TOKEN_KEY).unwrap_or_default(),
        user: storage::load_json(storage::USER_KEY),
    }
}

fn load_cart() -> CartState {
    CartState {
        items: storage::load_json::<Vec<CartItem>>(storage::CART_KEY).unwrap_or_default(),
    }
}

fn load_ui() -> UiState {
    UiState {
        theme: storage::load_string(storage::THEME_KEY)
            .map(|v| Theme::from_str_or_default(&v))
            .unwrap_or_default(),
        lang: storage::load_string(storage::LANG_KEY)
            .map(|v| Language::from_str_or_default(&v))
            .unwrap_or_default(),
    }
}
