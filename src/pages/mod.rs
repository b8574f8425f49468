//! Data-bearing pages. Each page watches the auth token and its
//! route/query inputs and re-fetches on change; results are gated by
//! request-generation tickets so superseded fetches never apply.

pub mod admin;
pub mod keys;
pub mod login;
pub mod order_detail;
pub mod orders;
pub mod products;
pub mod profile;
