//! Runtime configuration supplied by the host page.
//!
//! The deployment injects a `window.APP_CONFIG` object before the WASM
//! bundle loads; the client reads the API base URL from it and falls
//! back to the local development gateway.

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Configuration resolved once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
        }
    }
}

impl AppConfig {
    /// Read `window.APP_CONFIG.API_BASE_URL`, falling back to the default
    /// when the global or the field is absent.
    pub fn from_window() -> Self {
        let base = web_sys::window()
            .map(wasm_bindgen::JsValue::from)
            .and_then(|w| js_sys::Reflect::get(&w, &"APP_CONFIG".into()).ok())
            .and_then(|cfg| js_sys::Reflect::get(&cfg, &"API_BASE_URL".into()).ok())
            .and_then(|v| v.as_string())
            .filter(|s| !s.is_empty());

        match base {
            Some(api_base_url) => Self { api_base_url },
            None => Self::default(),
        }
    }
}
