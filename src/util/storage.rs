//! localStorage persistence.
//!
//! Each piece of persisted state lives under its own key, loaded once
//! at startup and written back on every mutation. All helpers degrade
//! to no-ops outside a browser (or with storage disabled).

/// Storage keys. Stable across releases: changing one silently drops
/// the user's persisted state.
pub const THEME_KEY: &str = "app_theme";
pub const LANG_KEY: &str = "app_lang";
pub const TOKEN_KEY: &str = "auth_token";
pub const USER_KEY: &str = "auth_user";
pub const CART_KEY: &str = "cart_items";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn load_string(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

pub fn save_string(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Load and decode a JSON value; `None` on absence or decode failure
/// (a corrupt entry reads as unset rather than wedging startup).
pub fn load_json<T: serde::de::DeserializeOwned>(key: &str) -> Option<T> {
    let raw = load_string(key)?;
    serde_json::from_str(&raw).ok()
}

pub fn save_json<T: serde::Serialize>(key: &str, value: &T) {
    if let Ok(raw) = serde_json::to_string(value) {
        save_string(key, &raw);
    }
}
