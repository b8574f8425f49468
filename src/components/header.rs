//! Top navigation bar: route links, cart badge, preference toggles.

use leptos::prelude::*;

use crate::router::{self, Route};
use crate::state::auth::AuthState;
use crate::state::cart::CartState;
use crate::state::ui::UiState;

/// Header with navigation, cart badge, theme/language toggles, and
/// the logout action.
#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cart = expect_context::<RwSignal<CartState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let route = expect_context::<RwSignal<Route>>();

    let theme_label = move || ui.get().theme.as_str().to_owned();
    let lang_label = move || ui.get().lang.as_str().to_uppercase();
    let cart_count = move || cart.get().len();

    view! {
        <header class="app-header">
            <span class="app-header__brand">"Storefront"</span>

            <Show when=move || auth.get().is_authenticated()>
                <nav class="app-header__nav">
                    <NavLink route=Route::Products label="Products" current=route/>
                    <NavLink route=Route::Orders label="Orders" current=route/>
                    <NavLink route=Route::ApiKeys label="API Keys" current=route/>
                    <NavLink route=Route::Profile label="Profile" current=route/>
                    <Show when=move || auth.get().is_admin()>
                        <NavLink route=Route::AdminProducts label="Admin: Products" current=route/>
                        <NavLink route=Route::AdminOrders label="Admin: Orders" current=route/>
                        <NavLink route=Route::AdminInventory label="Admin: Inventory" current=route/>
                    </Show>
                </nav>
            </Show>

            <span class="app-header__spacer"></span>

            <Show when=move || auth.get().is_authenticated()>
                <span class="app-header__cart">{move || format!("Cart ({})", cart_count())}</span>
            </Show>

            <button class="btn" on:click=move |_| ui.update(UiState::cycle_theme)>
                {theme_label}
            </button>
            <button class="btn" on:click=move |_| ui.update(UiState::toggle_lang)>
                {lang_label}
            </button>

            <Show when=move || auth.get().is_authenticated()>
                <button class="btn" on:click=move |_| auth.update(AuthState::logout)>
                    "Log out"
                </button>
            </Show>
        </header>
    }
}

/// One navigation entry; highlights when its route is active.
#[component]
fn NavLink(route: Route, label: &'static str, current: RwSignal<Route>) -> impl IntoView {
    let target = route.clone();
    let active = move || {
        // Order detail belongs to the orders section.
        match (&route, &current.get()) {
            (Route::Orders, Route::OrderDetail { .. }) => true,
            (r, c) => r == c,
        }
    };

    view! {
        <button
            class="app-header__link"
            class:app-header__link--active=active
            on:click=move |_| router::navigate(&target)
        >
            {label}
        </button>
    }
}
