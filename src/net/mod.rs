//! Network layer: REST client, error classification, and wire types.

pub mod api;
pub mod error;
pub mod types;
