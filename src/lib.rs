#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

#[doc(hidden)]
#[macro_use]
pub mod macros;
pub mod ast;
pub mod integrations;
pub mod parser;
pub mod schema;
pub mod validation;

#[cfg(test)]
mod tests;

// Needed by the `__sdl_*` tracing macros.
#[cfg(feature = "tracing")]
#[doc(hidden)]
pub use tracing;

pub use crate::{
    ast::{Definition, Document, OwnedDocument, Type},
    parser::{ParseError, SourcePosition, Span, Spanning, parse_document_source},
    schema::{
        BuildOptions, build_ast_schema,
        error::SchemaError,
        extend_schema,
        meta::{
            Argument, DeprecationStatus, EnumMeta, EnumValue, Field, InputObjectMeta,
            InterfaceMeta, MetaType, ObjectMeta, Resolver, ScalarMeta, UnionMeta,
        },
        model::{DirectiveLocation, DirectiveType, SchemaConfig, SchemaType, TypeType},
    },
    validation::{DirectiveRegistry, RuleError, validate_document},
};
