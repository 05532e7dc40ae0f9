//! Provides integrations with third-party crates.

pub mod serde;
