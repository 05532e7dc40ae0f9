//! Mapping of AST nodes to the [`DirectiveLocation`] of the directives they
//! carry.

use crate::{
    ast::{OperationType, TypeDefinition},
    schema::model::DirectiveLocation,
};

/// Syntactic kind of an AST node, as seen while walking a document.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[expect(missing_docs, reason = "self-explanatory")]
pub enum NodeKind {
    Document,
    Operation(OperationType),
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
    Directive,
    Argument,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl NodeKind {
    /// Kind of a type definition or extension node.
    pub fn of_type_definition(def: &TypeDefinition<'_>) -> Self {
        match def {
            TypeDefinition::Scalar(_) => Self::Scalar,
            TypeDefinition::Object(_) => Self::Object,
            TypeDefinition::Interface(_) => Self::Interface,
            TypeDefinition::Union(_) => Self::Union,
            TypeDefinition::Enum(_) => Self::Enum,
            TypeDefinition::InputObject(_) => Self::InputObject,
        }
    }
}

/// Returns the location a directive is used at when attached to a node of the
/// given `kind`.
///
/// # Panics
///
/// If nodes of this `kind` never carry directives.
pub fn directive_location(kind: NodeKind) -> DirectiveLocation {
    match kind {
        NodeKind::Operation(OperationType::Query) => DirectiveLocation::Query,
        NodeKind::Operation(OperationType::Mutation) => DirectiveLocation::Mutation,
        NodeKind::Operation(OperationType::Subscription) => DirectiveLocation::Subscription,
        NodeKind::Field => DirectiveLocation::Field,
        NodeKind::FragmentDefinition => DirectiveLocation::FragmentDefinition,
        NodeKind::FragmentSpread => DirectiveLocation::FragmentSpread,
        NodeKind::InlineFragment => DirectiveLocation::InlineFragment,
        NodeKind::VariableDefinition => DirectiveLocation::VariableDefinition,
        NodeKind::Schema => DirectiveLocation::Schema,
        NodeKind::Scalar => DirectiveLocation::Scalar,
        NodeKind::Object => DirectiveLocation::Object,
        NodeKind::FieldDefinition => DirectiveLocation::FieldDefinition,
        NodeKind::ArgumentDefinition => DirectiveLocation::ArgumentDefinition,
        NodeKind::Interface => DirectiveLocation::Interface,
        NodeKind::Union => DirectiveLocation::Union,
        NodeKind::Enum => DirectiveLocation::Enum,
        NodeKind::EnumValue => DirectiveLocation::EnumValue,
        NodeKind::InputObject => DirectiveLocation::InputObject,
        NodeKind::InputFieldDefinition => DirectiveLocation::InputFieldDefinition,
        NodeKind::Document | NodeKind::Directive | NodeKind::Argument => {
            panic!("internal error: no directive location for {kind:?} nodes")
        }
    }
}
