//! Cross-module integration tests.

pub mod concurrency;
pub mod properties;
