//! # storefront-client
//!
//! Leptos + WASM frontend for the storefront application: reactive
//! stores for auth, cart, catalog, orders, and profile/MFA, a
//! hash-fragment router, and a REST client for the backend gateway.
//!
//! State lives in plain per-domain structs (`state/`) wrapped in
//! `RwSignal`s provided via context, so the mutation logic stays
//! testable without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

/// Mount the application onto `<body>`. Called once from the binary.
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::mount_to_body(app::App);
}
