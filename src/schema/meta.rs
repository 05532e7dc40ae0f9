//! Types used to describe a GraphQL schema

use std::{any::Any, fmt, sync::Arc};

use arcstr::{ArcStr, literal};

use crate::{
    ast::{
        EnumValueDefinition, FieldDefinition, InputValue, InputValueDefinition, Type,
        TypeDefinition,
    },
    parser::Spanning,
};

/// Opaque handle attached to schema elements by the code that executes
/// queries against the schema (field resolvers, `isTypeOf` and `resolveType`
/// functions).
///
/// This crate never calls into it: extending a schema hands the very same
/// handle over to the new schema.
pub type Resolver = Arc<dyn Any + Send + Sync>;

/// Whether an item is deprecated, with context.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum DeprecationStatus {
    /// The field/variant is not deprecated.
    Current,
    /// The field/variant is deprecated, with an optional reason
    Deprecated(Option<ArcStr>),
}

impl DeprecationStatus {
    /// If this deprecation status indicates the item is deprecated.
    pub fn is_deprecated(&self) -> bool {
        match self {
            Self::Current => false,
            Self::Deprecated(_) => true,
        }
    }

    /// An optional reason for the deprecation, or none if `Current`.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Current => None,
            Self::Deprecated(rsn) => rsn.as_deref(),
        }
    }
}

/// Scalar type metadata
#[derive(Clone, Debug)]
pub struct ScalarMeta<'a> {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub ast_node: Option<&'a Spanning<TypeDefinition<'a>>>,
}

/// Object type metadata
#[derive(Clone, Debug)]
pub struct ObjectMeta<'a> {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub fields: Vec<Field<'a>>,
    #[doc(hidden)]
    pub interface_names: Vec<ArcStr>,
    #[doc(hidden)]
    pub is_type_of: Option<Resolver>,
    #[doc(hidden)]
    pub ast_node: Option<&'a Spanning<TypeDefinition<'a>>>,
    /// `extend type` nodes applied to this type, in the order they were applied.
    pub extension_ast_nodes: Vec<&'a Spanning<TypeDefinition<'a>>>,
}

/// Enum type metadata
#[derive(Clone, Debug)]
pub struct EnumMeta<'a> {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub values: Vec<EnumValue<'a>>,
    #[doc(hidden)]
    pub ast_node: Option<&'a Spanning<TypeDefinition<'a>>>,
}

/// Interface type metadata
#[derive(Clone, Debug)]
pub struct InterfaceMeta<'a> {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub fields: Vec<Field<'a>>,
    #[doc(hidden)]
    pub resolve_type: Option<Resolver>,
    #[doc(hidden)]
    pub ast_node: Option<&'a Spanning<TypeDefinition<'a>>>,
}

/// Union type metadata
#[derive(Clone, Debug)]
pub struct UnionMeta<'a> {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub of_type_names: Vec<ArcStr>,
    #[doc(hidden)]
    pub resolve_type: Option<Resolver>,
    #[doc(hidden)]
    pub ast_node: Option<&'a Spanning<TypeDefinition<'a>>>,
}

/// Input object metadata
#[derive(Clone, Debug)]
pub struct InputObjectMeta<'a> {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub input_fields: Vec<Argument<'a>>,
    #[doc(hidden)]
    pub ast_node: Option<&'a Spanning<TypeDefinition<'a>>>,
}

/// Generic type metadata
///
/// Every variant is a named type. List and non-null wrappers only appear in
/// [`Type`] literals referencing these by name.
#[derive(Clone, Debug)]
pub enum MetaType<'a> {
    #[doc(hidden)]
    Scalar(ScalarMeta<'a>),
    #[doc(hidden)]
    Object(ObjectMeta<'a>),
    #[doc(hidden)]
    Enum(EnumMeta<'a>),
    #[doc(hidden)]
    Interface(InterfaceMeta<'a>),
    #[doc(hidden)]
    Union(UnionMeta<'a>),
    #[doc(hidden)]
    InputObject(InputObjectMeta<'a>),
}

/// Metadata for a field
#[derive(Clone, Debug)]
pub struct Field<'a> {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub arguments: Vec<Argument<'a>>,
    #[doc(hidden)]
    pub field_type: Type,
    #[doc(hidden)]
    pub deprecation_status: DeprecationStatus,
    #[doc(hidden)]
    pub resolver: Option<Resolver>,
    #[doc(hidden)]
    pub ast_node: Option<&'a Spanning<FieldDefinition<'a>>>,
}

/// Metadata for an argument to a field or a directive, or for a field of an
/// input object
#[derive(Clone, Debug)]
pub struct Argument<'a> {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub arg_type: Type,
    #[doc(hidden)]
    pub default_value: Option<InputValue>,
    #[doc(hidden)]
    pub ast_node: Option<&'a Spanning<InputValueDefinition<'a>>>,
}

/// Metadata for a single value in an enum
#[derive(Clone, Debug)]
pub struct EnumValue<'a> {
    /// The name of the enum value
    pub name: ArcStr,
    /// The optional description of the enum value.
    ///
    /// Note: this is not the description of the enum itself; it's the
    /// description of this enum _value_.
    pub description: Option<ArcStr>,
    /// Whether the value is deprecated or not, with an optional reason.
    pub deprecation_status: DeprecationStatus,
    #[doc(hidden)]
    pub ast_node: Option<&'a Spanning<EnumValueDefinition<'a>>>,
}

impl<'a> MetaType<'a> {
    /// Access the name of the type
    pub fn name(&self) -> &ArcStr {
        match self {
            Self::Scalar(ScalarMeta { name, .. })
            | Self::Object(ObjectMeta { name, .. })
            | Self::Enum(EnumMeta { name, .. })
            | Self::Interface(InterfaceMeta { name, .. })
            | Self::Union(UnionMeta { name, .. })
            | Self::InputObject(InputObjectMeta { name, .. }) => name,
        }
    }

    /// Access the description of the type, if any
    pub fn description(&self) -> Option<&ArcStr> {
        match self {
            Self::Scalar(ScalarMeta { description, .. })
            | Self::Object(ObjectMeta { description, .. })
            | Self::Enum(EnumMeta { description, .. })
            | Self::Interface(InterfaceMeta { description, .. })
            | Self::Union(UnionMeta { description, .. })
            | Self::InputObject(InputObjectMeta { description, .. }) => description.as_ref(),
        }
    }

    /// Access the type definition this type was built from, if any
    pub fn ast_node(&self) -> Option<&'a Spanning<TypeDefinition<'a>>> {
        match self {
            Self::Scalar(ScalarMeta { ast_node, .. })
            | Self::Object(ObjectMeta { ast_node, .. })
            | Self::Enum(EnumMeta { ast_node, .. })
            | Self::Interface(InterfaceMeta { ast_node, .. })
            | Self::Union(UnionMeta { ast_node, .. })
            | Self::InputObject(InputObjectMeta { ast_node, .. }) => *ast_node,
        }
    }

    /// Human readable kind of the type, as used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Object(_) => "object",
            Self::Enum(_) => "enum",
            Self::Interface(_) => "interface",
            Self::Union(_) => "union",
            Self::InputObject(_) => "input object",
        }
    }

    /// Access the fields of an object or an interface
    ///
    /// Other types have no fields. This method returns an empty slice for them.
    pub fn fields(&self) -> &[Field<'a>] {
        match self {
            Self::Object(ObjectMeta { fields, .. }) | Self::Interface(InterfaceMeta { fields, .. }) => {
                fields
            }
            _ => &[],
        }
    }

    /// Access a field's meta data given its name
    ///
    /// Only objects and interfaces have fields. This method always returns `None` for other types.
    pub fn field_by_name(&self, name: &str) -> Option<&Field<'a>> {
        self.fields().iter().find(|f| f.name == name)
    }

    /// Access an input field's meta data given its name
    ///
    /// Only input objects have input fields. This method always returns `None` for other types.
    pub fn input_field_by_name(&self, name: &str) -> Option<&Argument<'a>> {
        match self {
            Self::InputObject(InputObjectMeta { input_fields, .. }) => {
                input_fields.iter().find(|f| f.name == name)
            }
            _ => None,
        }
    }

    /// Construct a non-null `Type` literal referencing this type
    pub fn as_type(&self) -> Type {
        Type::NonNullNamed(self.name().clone())
    }

    /// Returns true if the type is a composite type
    ///
    /// Objects, interfaces, and unions are composite.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Object(_) | Self::Interface(_) | Self::Union(_))
    }

    /// Returns true if the type can be used in input positions, e.g. arguments or variables
    ///
    /// Only scalars, enums, and input objects are input types.
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Scalar(_) | Self::Enum(_) | Self::InputObject(_))
    }

    /// Returns true if the type is one of the scalars every schema contains.
    pub fn is_builtin(&self) -> bool {
        matches!(
            self.name().as_str(),
            "Boolean" | "String" | "Int" | "Float" | "ID",
        ) || self.name().starts_with("__")
    }
}

impl fmt::Display for MetaType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<'a> ScalarMeta<'a> {
    /// Builds a new [`ScalarMeta`] type with the specified `name`.
    pub fn new(name: impl Into<ArcStr>) -> Self {
        Self {
            name: name.into(),
            description: None,
            ast_node: None,
        }
    }

    /// The scalars every schema contains: `String`, `Int`, `Float`, `Boolean`
    /// and `ID`.
    pub fn specified() -> [Self; 5] {
        [
            Self::new(literal!("String")),
            Self::new(literal!("Int")),
            Self::new(literal!("Float")),
            Self::new(literal!("Boolean")),
            Self::new(literal!("ID")),
        ]
    }

    /// Sets the `description` of this [`ScalarMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Wraps this [`ScalarMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType<'a> {
        MetaType::Scalar(self)
    }
}

impl<'a> ObjectMeta<'a> {
    /// Build a new [`ObjectMeta`] type with the specified `name` and `fields`.
    pub fn new(name: impl Into<ArcStr>, fields: &[Field<'a>]) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: fields.to_vec(),
            interface_names: vec![],
            is_type_of: None,
            ast_node: None,
            extension_ast_nodes: vec![],
        }
    }

    /// Sets the `description` of this [`ObjectMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the `interfaces` this [`ObjectMeta`] type implements.
    ///
    /// Overwrites any previously set list of interfaces.
    #[must_use]
    pub fn interfaces(mut self, interfaces: &[&str]) -> Self {
        self.interface_names = interfaces.iter().map(|&n| n.into()).collect();
        self
    }

    /// Attaches the opaque `isTypeOf` handle of this [`ObjectMeta`] type.
    #[must_use]
    pub fn is_type_of(mut self, is_type_of: Resolver) -> Self {
        self.is_type_of = Some(is_type_of);
        self
    }

    /// Wraps this [`ObjectMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType<'a> {
        MetaType::Object(self)
    }
}

impl<'a> EnumMeta<'a> {
    /// Build a new [`EnumMeta`] type with the specified `name` and possible
    /// `values`.
    pub fn new(name: impl Into<ArcStr>, values: &[EnumValue<'a>]) -> Self {
        Self {
            name: name.into(),
            description: None,
            values: values.to_vec(),
            ast_node: None,
        }
    }

    /// Sets the `description` of this [`EnumMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Wraps this [`EnumMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType<'a> {
        MetaType::Enum(self)
    }
}

impl<'a> InterfaceMeta<'a> {
    /// Builds a new [`InterfaceMeta`] type with the specified `name` and
    /// `fields`.
    pub fn new(name: impl Into<ArcStr>, fields: &[Field<'a>]) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: fields.to_vec(),
            resolve_type: None,
            ast_node: None,
        }
    }

    /// Sets the `description` of this [`InterfaceMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches the opaque `resolveType` handle of this [`InterfaceMeta`] type.
    #[must_use]
    pub fn resolve_type(mut self, resolve_type: Resolver) -> Self {
        self.resolve_type = Some(resolve_type);
        self
    }

    /// Wraps this [`InterfaceMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType<'a> {
        MetaType::Interface(self)
    }
}

impl<'a> UnionMeta<'a> {
    /// Build a new [`UnionMeta`] type with the specified `name` and possible
    /// member types.
    pub fn new(name: impl Into<ArcStr>, of_types: &[&str]) -> Self {
        Self {
            name: name.into(),
            description: None,
            of_type_names: of_types.iter().map(|&n| n.into()).collect(),
            resolve_type: None,
            ast_node: None,
        }
    }

    /// Sets the `description` of this [`UnionMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches the opaque `resolveType` handle of this [`UnionMeta`] type.
    #[must_use]
    pub fn resolve_type(mut self, resolve_type: Resolver) -> Self {
        self.resolve_type = Some(resolve_type);
        self
    }

    /// Wraps this [`UnionMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType<'a> {
        MetaType::Union(self)
    }
}

impl<'a> InputObjectMeta<'a> {
    /// Builds a new [`InputObjectMeta`] type with the specified `name` and
    /// `input_fields`.
    pub fn new(name: impl Into<ArcStr>, input_fields: &[Argument<'a>]) -> Self {
        Self {
            name: name.into(),
            description: None,
            input_fields: input_fields.to_vec(),
            ast_node: None,
        }
    }

    /// Set the `description` of this [`InputObjectMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Wraps this [`InputObjectMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType<'a> {
        MetaType::InputObject(self)
    }
}

impl<'a> Field<'a> {
    /// Builds a new [`Field`] with the specified `name` and `field_type`.
    pub fn new(name: impl Into<ArcStr>, field_type: Type) -> Self {
        Self {
            name: name.into(),
            description: None,
            arguments: vec![],
            field_type,
            deprecation_status: DeprecationStatus::Current,
            resolver: None,
            ast_node: None,
        }
    }

    /// Set the `description` of this [`Field`].
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds an `argument` to this [`Field`].
    ///
    /// Arguments are unordered and can't contain duplicates by name.
    #[must_use]
    pub fn argument(mut self, argument: Argument<'a>) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Sets this [`Field`] as deprecated with an optional `reason`.
    ///
    /// Overwrites any previously set deprecation reason.
    #[must_use]
    pub fn deprecated(mut self, reason: Option<&str>) -> Self {
        self.deprecation_status = DeprecationStatus::Deprecated(reason.map(Into::into));
        self
    }

    /// Attaches the opaque resolver handle of this [`Field`].
    #[must_use]
    pub fn resolver(mut self, resolver: Resolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Returns true if the field is built-in to GraphQL.
    pub fn is_builtin(&self) -> bool {
        // "used exclusively by GraphQL’s introspection system"
        self.name.starts_with("__")
    }
}

impl<'a> Argument<'a> {
    /// Builds a new [`Argument`] of the given [`Type`] with the given `name`.
    pub fn new(name: impl Into<ArcStr>, arg_type: Type) -> Self {
        Self {
            name: name.into(),
            description: None,
            arg_type,
            default_value: None,
            ast_node: None,
        }
    }

    /// Sets the `description` of this [`Argument`].
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the default value of this [`Argument`].
    ///
    /// Overwrites any previously set default value.
    #[must_use]
    pub fn default_value(mut self, val: InputValue) -> Self {
        self.default_value = Some(val);
        self
    }
}

impl EnumValue<'_> {
    /// Constructs a new [`EnumValue`] with the provided `name`.
    pub fn new(name: impl Into<ArcStr>) -> Self {
        Self {
            name: name.into(),
            description: None,
            deprecation_status: DeprecationStatus::Current,
            ast_node: None,
        }
    }

    /// Sets the `description` of this [`EnumValue`].
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets this [`EnumValue`] as deprecated with an optional `reason`.
    ///
    /// Overwrites any previously set deprecation reason.
    #[must_use]
    pub fn deprecated(mut self, reason: Option<&str>) -> Self {
        self.deprecation_status = DeprecationStatus::Deprecated(reason.map(Into::into));
        self
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arcstr::ArcStr;

    use super::{Argument, DeprecationStatus, EnumValue, Field, MetaType, ObjectMeta, Resolver};
    use crate::ast::Type;

    fn named(name: &str) -> Type {
        Type::Named(ArcStr::from(name))
    }

    #[test]
    fn builder_methods_compose() {
        let resolver: Resolver = Arc::new(42_u8);

        let obj = ObjectMeta::new(
            "Query",
            &[Field::new("hello", named("String"))
                .description("Greets")
                .argument(Argument::new("name", named("String")))
                .deprecated(Some("use greet"))
                .resolver(resolver.clone())],
        )
        .description("Root")
        .interfaces(&["Node"])
        .into_meta();

        assert_eq!(obj.name(), "Query");
        assert_eq!(obj.description().map(ArcStr::as_str), Some("Root"));
        assert_eq!(obj.kind_name(), "object");
        assert!(obj.is_composite());
        assert!(!obj.is_input());

        let field = obj.field_by_name("hello").expect("field");
        assert_eq!(field.arguments.len(), 1);
        assert_eq!(field.deprecation_status.reason(), Some("use greet"));
        assert!(Arc::ptr_eq(field.resolver.as_ref().unwrap(), &resolver));

        let MetaType::Object(obj) = obj else {
            unreachable!();
        };
        assert_eq!(obj.interface_names, vec![ArcStr::from("Node")]);
    }

    #[test]
    fn deprecation_status() {
        assert!(!DeprecationStatus::Current.is_deprecated());
        assert_eq!(DeprecationStatus::Current.reason(), None);

        let value = EnumValue::new("OLD").deprecated(None);
        assert!(value.deprecation_status.is_deprecated());
        assert_eq!(value.deprecation_status.reason(), None);
    }
}
