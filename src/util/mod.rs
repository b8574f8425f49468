//! Browser utilities: localStorage persistence and theme application.

pub mod storage;
pub mod theme;
