//! Errors raised while building or extending a schema

use arcstr::ArcStr;
use derive_more::with_trait::{Display, Error};

use crate::{
    ast::OperationType,
    parser::{SourcePosition, Span},
};

/// Error while building or extending a [`SchemaType`].
///
/// Building fails fast: the first conflict found aborts the whole operation,
/// so no partially built schema is ever observable.
///
/// [`SchemaType`]: crate::SchemaType
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum SchemaError {
    /// A new type definition reuses the name of an existing type.
    #[display(
        "Type \"{name}\" already exists in the schema. \
         It cannot also be defined in this type definition."
    )]
    DuplicateType {
        /// Name of the type.
        name: ArcStr,
        /// Location of the offending type definition.
        span: Span,
    },

    /// A type extension targets a type the schema doesn't contain.
    #[display(
        "Cannot extend type \"{name}\" because it does not exist in the existing schema."
    )]
    UnknownExtensionTarget {
        /// Name of the extended type.
        name: ArcStr,
        /// Location of the offending type extension.
        span: Span,
    },

    /// A type extension targets a type which is not an object.
    #[display("Cannot extend non-object type \"{name}\".")]
    InvalidExtensionTarget {
        /// Name of the extended type.
        name: ArcStr,
        /// Location of the offending type extension.
        span: Span,
    },

    /// A new directive definition reuses the name of an existing directive.
    #[display("Directive \"{name}\" already exists in the schema. It cannot be redefined.")]
    DuplicateDirective {
        /// Name of the directive.
        name: ArcStr,
        /// Location of the offending directive definition.
        span: Span,
    },

    /// A type extension adds a field the extended type already has.
    #[display(
        "Field \"{type_name}.{field_name}\" already exists in the schema. \
         It cannot also be defined in this type extension."
    )]
    DuplicateField {
        /// Name of the extended type.
        type_name: ArcStr,
        /// Name of the field.
        field_name: ArcStr,
        /// Location of the offending field definition.
        span: Span,
    },

    /// A type extension adds an interface the extended type already
    /// implements.
    #[display(
        "Type \"{type_name}\" already implements \"{interface_name}\". \
         It cannot also be implemented in this type extension."
    )]
    DuplicateInterface {
        /// Name of the extended type.
        type_name: ArcStr,
        /// Name of the interface.
        interface_name: ArcStr,
        /// Location of the offending interface name.
        span: Span,
    },

    /// A type reference doesn't resolve to any type.
    #[display(
        "Unknown type: \"{name}\". Ensure that this type exists either in the original \
         schema, or is added in a type definition."
    )]
    UnknownType {
        /// Name of the referenced type.
        name: ArcStr,
        /// Location of the reference, if it comes from a document.
        span: Option<Span>,
    },

    /// No definition is reachable for a type the builder was asked for.
    ///
    /// This signals a defect of the builder rather than a problem of its input.
    #[display("Missing type from schema")]
    MissingType,

    /// The same type name is defined twice within one document or
    /// configuration.
    #[display("Type \"{name}\" was defined more than once.")]
    TypeDefinedMoreThanOnce {
        /// Name of the type.
        name: ArcStr,
        /// Location of the second definition, if it comes from a document.
        span: Option<Span>,
    },

    /// The same directive name is defined twice within one document or
    /// configuration.
    #[display("Directive \"{name}\" was defined more than once.")]
    DirectiveDefinedMoreThanOnce {
        /// Name of the directive.
        name: ArcStr,
        /// Location of the second definition, if it comes from a document.
        span: Option<Span>,
    },

    /// A document contains more than one `schema` definition.
    #[display("Must provide only one schema definition.")]
    MultipleSchemaDefinitions {
        /// Location of the second `schema` definition.
        span: Span,
    },

    /// A `schema` definition lists the same operation twice.
    #[display("Must provide only one {operation} type in schema.")]
    DuplicateOperationType {
        /// The repeated operation.
        operation: OperationType,
        /// Location of the repeated entry.
        span: Span,
    },

    /// Neither a `schema` definition nor a type named `Query` provides the
    /// query root.
    #[display("Must provide schema definition with query type or a type named Query.")]
    MissingQueryType,

    /// A type is referenced somewhere only types of another kind may appear.
    #[display("Type \"{name}\" must be of kind {expected}, found {found}.")]
    WrongTypeKind {
        /// Name of the type.
        name: ArcStr,
        /// Kind required at the referencing position.
        expected: &'static str,
        /// Kind of the referenced type.
        found: &'static str,
        /// Location of the reference, if it comes from a document.
        span: Option<Span>,
    },
}

impl SchemaError {
    /// Returns the location of the offending node, if any.
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::DuplicateType { span, .. }
            | Self::UnknownExtensionTarget { span, .. }
            | Self::InvalidExtensionTarget { span, .. }
            | Self::DuplicateDirective { span, .. }
            | Self::DuplicateField { span, .. }
            | Self::DuplicateInterface { span, .. }
            | Self::MultipleSchemaDefinitions { span }
            | Self::DuplicateOperationType { span, .. } => Some(*span),
            Self::UnknownType { span, .. }
            | Self::TypeDefinedMoreThanOnce { span, .. }
            | Self::DirectiveDefinedMoreThanOnce { span, .. }
            | Self::WrongTypeKind { span, .. } => *span,
            Self::MissingType | Self::MissingQueryType => None,
        }
    }

    /// Returns the start positions of the offending nodes.
    pub fn locations(&self) -> Vec<SourcePosition> {
        self.span()
            .filter(|s| *s != Span::unlocated())
            .map(|s| s.start)
            .into_iter()
            .collect()
    }
}
