//! Hash-fragment router.
//!
//! Routes are a closed enum with typed parameter payloads. `parse`
//! checks patterns most-specific-first (`#/orders/{id}` before
//! `#/orders`) and anything unrecognized falls back to the default
//! route, so a bad deep link can never strand the UI.
//!
//! A fragment of the form `#token={jwt}` is the OAuth redirect
//! callback. It is not a route: startup consumes the token once,
//! strips it from history, and parsing treats it as the default route.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use leptos::prelude::*;

/// One-time OAuth redirect marker.
const TOKEN_MARKER: &str = "#token=";

/// Application routes, one variant per addressable page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Products,
    Orders,
    OrderDetail {
        id: String,
    },
    ApiKeys,
    Profile,
    AdminProducts,
    AdminOrders,
    AdminInventory,
}

impl Route {
    /// Parse a URL fragment into a route.
    ///
    /// The order-detail capture is tested before the bare `#/orders`
    /// pattern; the id must be non-empty and must not contain `/`.
    #[must_use]
    pub fn parse(fragment: &str) -> Route {
        if fragment.is_empty() || fragment.starts_with(TOKEN_MARKER) {
            return Route::default();
        }

        if let Some(id) = fragment.strip_prefix("#/orders/") {
            if !id.is_empty() && !id.contains('/') {
                return Route::OrderDetail { id: id.to_owned() };
            }
        }

        match fragment {
            "#/orders" => Route::Orders,
            "#/products" => Route::Products,
            "#/keys" => Route::ApiKeys,
            "#/profile" => Route::Profile,
            "#/admin/products" => Route::AdminProducts,
            "#/admin/orders" => Route::AdminOrders,
            "#/admin/inventory" => Route::AdminInventory,
            _ => Route::default(),
        }
    }

    /// Reverse mapping back to the fragment `parse` would accept.
    #[must_use]
    pub fn fragment(&self) -> String {
        match self {
            Route::Products => "#/products".to_owned(),
            Route::Orders => "#/orders".to_owned(),
            Route::OrderDetail { id } => format!("#/orders/{id}"),
            Route::ApiKeys => "#/keys".to_owned(),
            Route::Profile => "#/profile".to_owned(),
            Route::AdminProducts => "#/admin/products".to_owned(),
            Route::AdminOrders => "#/admin/orders".to_owned(),
            Route::AdminInventory => "#/admin/inventory".to_owned(),
        }
    }
}

/// Extract the one-time OAuth token from a fragment, if present.
#[must_use]
pub fn oauth_token(fragment: &str) -> Option<&str> {
    let token = fragment.strip_prefix(TOKEN_MARKER)?;
    if token.is_empty() { None } else { Some(token) }
}

/// Set the browser fragment for `route`. The resulting `hashchange`
/// event re-parses the fragment and updates the router signal.
pub fn navigate(route: &Route) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(&route.fragment());
    }
}

/// Read the current fragment, `""` when absent.
#[must_use]
pub fn current_fragment() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Remove the fragment from the address bar without navigating, so a
/// consumed OAuth token does not survive in history.
pub fn strip_fragment_from_history() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let (Ok(path), Ok(search)) = (location.pathname(), location.search()) else {
        return;
    };
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(
            &wasm_bindgen::JsValue::NULL,
            "",
            Some(&format!("{path}{search}")),
        );
    }
}

/// Initialize routing for the page session.
///
/// Consumes a one-time OAuth token if the page loaded with one, then
/// applies `parse` once for deep links and subscribes to `hashchange`
/// for the rest of the session.
pub fn init(route: RwSignal<Route>, on_oauth_token: impl Fn(String) + 'static) {
    let fragment = current_fragment();
    if let Some(token) = oauth_token(&fragment) {
        on_oauth_token(token.to_owned());
        strip_fragment_from_history();
    }

    route.set(Route::parse(&current_fragment()));

    window_event_listener(leptos::ev::hashchange, move |_| {
        route.set(Route::parse(&current_fragment()));
    });
}
