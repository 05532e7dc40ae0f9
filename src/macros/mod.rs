//! Declarative macros used internally by this crate.

#[macro_use]
mod tracing;
