//! Schema graph: the named types and directives of a schema, and the ways to
//! build and extend one.

mod build;
pub(crate) mod builder;
pub mod error;
mod extend;
pub mod meta;
pub mod model;

pub use self::{build::build_ast_schema, builder::BuildOptions, extend::extend_schema};
