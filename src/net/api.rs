//! REST API client for the storefront gateway.
//!
//! Centralizes the base URL, attaches a bearer header when a token is
//! present, serializes bodies (form-encoded for login, JSON otherwise,
//! multipart passthrough for the avatar upload), and classifies
//! failures via [`ApiError`].

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::net::error::ApiError;
use crate::net::types::{
    ApiKey, Category, CategoryCreate, GoogleLogin, Inventory, InventoryCreate, Order, OrderCreate,
    OrderStatusUpdate, PasswordChange, Product, ProductCreate, RegisterRequest, Token, TotpSetup,
    TotpVerify, User, UserUpdate,
};
use crate::state::catalog::ProductQuery;

const API_PREFIX: &str = "/api/v1";

/// Client bound to one gateway base URL. Cheap to clone; provided via
/// context so pages share a single configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Api {
    base_url: String,
}

impl Api {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{API_PREFIX}{path}", self.base_url)
    }

    /// Browser entry point for the Google sign-in redirect flow; the
    /// callback returns to the app as a one-time `#token=` fragment.
    #[must_use]
    pub fn google_login_url(&self) -> String {
        self.url("/auth/google")
    }

    // ---------------------------------------------------------
    // Auth
    // ---------------------------------------------------------

    /// Password login. The gateway expects an OAuth2 form body.
    pub async fn login(&self, username: &str, password: &str) -> Result<Token, ApiError> {
        let body = form_encode(&[("username", username), ("password", password)]);
        let req = Request::post(&self.url("/auth/login"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(net_err)?;
        read_json(req.send().await.map_err(net_err)?).await
    }

    /// Login with a Google id token (non-redirect flow).
    pub async fn login_google(&self, id_token: &str) -> Result<Token, ApiError> {
        let payload = GoogleLogin { id_token: id_token.to_owned() };
        self.post_json("/auth/login/google", None, &payload).await
    }

    pub async fn register(&self, req: &RegisterRequest) -> Result<User, ApiError> {
        self.post_json("/auth/register", None, req).await
    }

    // ---------------------------------------------------------
    // Current user / profile / MFA
    // ---------------------------------------------------------

    pub async fn current_user(&self, token: &str) -> Result<User, ApiError> {
        self.get("/users/me", token).await
    }

    pub async fn update_profile(&self, token: &str, update: &UserUpdate) -> Result<User, ApiError> {
        let req = authorize(Request::patch(&self.url("/users/me")), token)
            .json(update)
            .map_err(net_err)?;
        read_json(req.send().await.map_err(net_err)?).await
    }

    pub async fn change_password(
        &self,
        token: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        let payload = PasswordChange {
            old_password: old_password.to_owned(),
            new_password: new_password.to_owned(),
        };
        let req = authorize(Request::post(&self.url("/users/me/password")), token)
            .json(&payload)
            .map_err(net_err)?;
        read_ok(req.send().await.map_err(net_err)?).await
    }

    /// Multipart avatar upload; the browser sets the boundary header.
    pub async fn upload_avatar(&self, token: &str, file: &web_sys::File) -> Result<User, ApiError> {
        let form = web_sys::FormData::new().map_err(js_err)?;
        form.append_with_blob("file", file).map_err(js_err)?;
        let req = authorize(Request::post(&self.url("/users/me/avatar")), token)
            .body(form)
            .map_err(net_err)?;
        read_json(req.send().await.map_err(net_err)?).await
    }

    pub async fn totp_setup(&self, token: &str) -> Result<TotpSetup, ApiError> {
        self.post_empty("/users/me/totp/setup", token).await
    }

    pub async fn totp_enable(&self, token: &str, code: &str, secret: &str) -> Result<User, ApiError> {
        let payload = TotpVerify {
            code: code.to_owned(),
            secret: Some(secret.to_owned()),
        };
        self.post_json("/users/me/totp/enable", Some(token), &payload).await
    }

    pub async fn totp_disable(&self, token: &str, code: &str) -> Result<User, ApiError> {
        let payload = TotpVerify { code: code.to_owned(), secret: None };
        self.post_json("/users/me/totp/disable", Some(token), &payload).await
    }

    // ---------------------------------------------------------
    // Catalog
    // ---------------------------------------------------------

    pub async fn list_products(&self, token: &str, query: &ProductQuery) -> Result<Vec<Product>, ApiError> {
        let path = format!("/products{}", query.to_query_string());
        self.get(&path, token).await
    }

    pub async fn list_categories(&self, token: &str) -> Result<Vec<Category>, ApiError> {
        self.get("/categories", token).await
    }

    pub async fn create_product(&self, token: &str, product: &ProductCreate) -> Result<Product, ApiError> {
        self.post_json("/products", Some(token), product).await
    }

    pub async fn create_category(
        &self,
        token: &str,
        category: &CategoryCreate,
    ) -> Result<Category, ApiError> {
        self.post_json("/categories", Some(token), category).await
    }

    // ---------------------------------------------------------
    // Orders
    // ---------------------------------------------------------

    pub async fn create_order(&self, token: &str, order: &OrderCreate) -> Result<Order, ApiError> {
        self.post_json("/orders", Some(token), order).await
    }

    pub async fn list_orders(&self, token: &str, user_id: Uuid) -> Result<Vec<Order>, ApiError> {
        self.get(&format!("/orders/user/{user_id}"), token).await
    }

    pub async fn order_detail(&self, token: &str, order_id: Uuid) -> Result<Order, ApiError> {
        self.get(&format!("/orders/{order_id}"), token).await
    }

    pub async fn update_order_status(
        &self,
        token: &str,
        order_id: Uuid,
        status: &str,
    ) -> Result<Order, ApiError> {
        let payload = OrderStatusUpdate { status: status.to_owned() };
        let req = authorize(Request::patch(&self.url(&format!("/orders/{order_id}"))), token)
            .json(&payload)
            .map_err(net_err)?;
        read_json(req.send().await.map_err(net_err)?).await
    }

    // ---------------------------------------------------------
    // Inventory / API keys
    // ---------------------------------------------------------

    pub async fn user_keys(&self, token: &str, user_id: Uuid) -> Result<Vec<ApiKey>, ApiError> {
        self.get(&format!("/inventory/keys/user/{user_id}"), token).await
    }

    pub async fn inventory(&self, token: &str, product_id: Uuid) -> Result<Inventory, ApiError> {
        self.get(&format!("/inventory/{product_id}"), token).await
    }

    pub async fn create_inventory(
        &self,
        token: &str,
        inventory: &InventoryCreate,
    ) -> Result<Inventory, ApiError> {
        self.post_json("/inventory", Some(token), inventory).await
    }

    // ---------------------------------------------------------
    // Request plumbing
    // ---------------------------------------------------------

    async fn get<T: DeserializeOwned>(&self, path: &str, token: &str) -> Result<T, ApiError> {
        let req = authorize(Request::get(&self.url(path)), token);
        read_json(req.send().await.map_err(net_err)?).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T, ApiError> {
        let req = authorize(Request::post(&self.url(path)), token.unwrap_or_default())
            .json(body)
            .map_err(net_err)?;
        read_json(req.send().await.map_err(net_err)?).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str, token: &str) -> Result<T, ApiError> {
        let req = authorize(Request::post(&self.url(path)), token);
        read_json(req.send().await.map_err(net_err)?).await
    }
}

fn authorize(req: RequestBuilder, token: &str) -> RequestBuilder {
    if token.is_empty() {
        req
    } else {
        req.header("Authorization", &format!("Bearer {token}"))
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    check_status(&resp).await?;
    resp.json::<T>().await.map_err(net_err)
}

/// For endpoints whose success body carries nothing the client needs
/// (including 204 responses).
async fn read_ok(resp: Response) -> Result<(), ApiError> {
    check_status(&resp).await
}

async fn check_status(resp: &Response) -> Result<(), ApiError> {
    if resp.ok() {
        return Ok(());
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::from_response_parts(status, &body))
}

fn net_err(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn js_err(err: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(format!("{err:?}"))
}

/// Encode key/value pairs as `application/x-www-form-urlencoded`.
fn form_encode(pairs: &[(&str, &str)]) -> String {
    let mut out = String::new();
    for (key, value) in pairs {
        if !out.is_empty() {
            out.push('&');
        }
        form_encode_component(&mut out, key);
        out.push('=');
        form_encode_component(&mut out, value);
    }
    out
}

fn form_encode_component(out: &mut String, raw: &str) {
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'*' | b'-' | b'.' | b'_' => {
                out.push(byte as char);
            }
            b' ' => out.push('+'),
            _ => {
                out.push('%');
                out.push(char::from_digit(u32::from(byte >> 4), 16).unwrap_or('0').to_ascii_uppercase());
                out.push(char::from_digit(u32::from(byte & 0xf), 16).unwrap_or('0').to_ascii_uppercase());
            }
        }
    }
}
