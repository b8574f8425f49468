//! Shared client-side state modules.
//!
//! State is split by domain (`auth`, `cart`, `catalog`, etc.) so
//! individual pages can depend on small focused models. Each struct is
//! plain data with mutator methods; `app.rs` wraps them in `RwSignal`s
//! provided via context.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod keys;
pub mod notify;
pub mod orders;
pub mod profile;
pub mod request_gen;
pub mod ui;
