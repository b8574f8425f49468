//! Shared UI components.

pub mod header;
pub mod notices;
