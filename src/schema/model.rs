//! The schema graph and its directives

use std::fmt;

use arcstr::{ArcStr, literal};
use fnv::FnvBuildHasher;
use indexmap::IndexMap;

use crate::{
    ast::{DirectiveDefinition, InputValue, SchemaDefinition, Type},
    parser::{Span, Spanning},
    schema::{
        error::SchemaError,
        meta::{Argument, Field, InterfaceMeta, MetaType, ObjectMeta, ScalarMeta, UnionMeta},
    },
};

/// [`IndexMap`] keyed by type or directive name, iterating in insertion order.
pub type FnvIndexMap<K, V> = IndexMap<K, V, FnvBuildHasher>;

/// Deprecation reason used when `@deprecated` is applied without one.
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// Metadata for a schema
///
/// A schema is immutable once constructed: building or extending one always
/// produces a new [`SchemaType`], leaving its source untouched. Types are
/// owned by a single name-keyed arena; every reference from one type to
/// another is a name looked up in it.
#[derive(Clone, Debug)]
pub struct SchemaType<'a> {
    pub(crate) types: FnvIndexMap<ArcStr, MetaType<'a>>,
    pub(crate) query_type_name: ArcStr,
    pub(crate) mutation_type_name: Option<ArcStr>,
    pub(crate) subscription_type_name: Option<ArcStr>,
    pub(crate) directives: FnvIndexMap<ArcStr, DirectiveType<'a>>,
    pub(crate) ast_node: Option<&'a Spanning<SchemaDefinition<'a>>>,
}

static_assertions::assert_impl_all!(SchemaType<'static>: Send, Sync);

/// Parts to assemble a [`SchemaType`] from with [`SchemaType::new`].
#[derive(Clone, Debug)]
pub struct SchemaConfig<'a> {
    /// Name of the query root type.
    pub query: ArcStr,
    /// Name of the mutation root type, if any.
    pub mutation: Option<ArcStr>,
    /// Name of the subscription root type, if any.
    pub subscription: Option<ArcStr>,
    /// All the named types of the schema, roots included.
    ///
    /// The specified scalars are added when missing.
    pub types: Vec<MetaType<'a>>,
    /// Directives of the schema.
    ///
    /// The specified directives are added when missing.
    pub directives: Vec<DirectiveType<'a>>,
    /// `schema` definition the schema was built from, if any.
    pub ast_node: Option<&'a Spanning<SchemaDefinition<'a>>>,
}

/// Resolved view of a [`Type`] literal, with every named type looked up in a
/// [`SchemaType`].
///
/// Two [`TypeType::Concrete`]s reached from the same schema refer to the same
/// type if and only if they point to the same [`MetaType`].
#[derive(Clone, Debug)]
pub enum TypeType<'a> {
    #[expect(missing_docs, reason = "self-explanatory")]
    Concrete(&'a MetaType<'a>),
    #[expect(missing_docs, reason = "self-explanatory")]
    NonNull(Box<TypeType<'a>>),
    #[expect(missing_docs, reason = "self-explanatory")]
    List(Box<TypeType<'a>>),
}

/// Metadata for a directive definition
#[derive(Clone, Debug)]
pub struct DirectiveType<'a> {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub locations: Vec<DirectiveLocation>,
    #[doc(hidden)]
    pub arguments: Vec<Argument<'a>>,
    #[doc(hidden)]
    pub ast_node: Option<&'a Spanning<DirectiveDefinition<'a>>>,
}

/// Place of a document a directive may be used at.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[expect(missing_docs, reason = "self-explanatory")]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
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

impl<'a> SchemaType<'a> {
    /// Assembles a new [`SchemaType`] out of the provided [`SchemaConfig`].
    ///
    /// # Errors
    ///
    /// If a type or a directive name is used twice, a root type is missing
    /// or isn't an object, or any type reference doesn't resolve.
    pub fn new(config: SchemaConfig<'a>) -> Result<Self, SchemaError> {
        let mut types = FnvIndexMap::default();
        for ty in config.types {
            let name = ty.name().clone();
            if types.contains_key(&name) {
                return Err(SchemaError::TypeDefinedMoreThanOnce {
                    span: ty.ast_node().map(|n| n.span),
                    name,
                });
            }
            types.insert(name, ty);
        }
        for scalar in ScalarMeta::specified() {
            types
                .entry(scalar.name.clone())
                .or_insert_with(|| scalar.into_meta());
        }

        let mut directives = FnvIndexMap::default();
        for directive in config.directives {
            let name = directive.name.clone();
            if directives.contains_key(&name) {
                return Err(SchemaError::DirectiveDefinedMoreThanOnce {
                    span: directive.ast_node.map(|n| n.span),
                    name,
                });
            }
            directives.insert(name, directive);
        }
        for directive in DirectiveType::specified() {
            directives
                .entry(directive.name.clone())
                .or_insert(directive);
        }

        let schema = Self {
            query_type_name: intern(&types, config.query),
            mutation_type_name: config.mutation.map(|n| intern(&types, n)),
            subscription_type_name: config.subscription.map(|n| intern(&types, n)),
            types,
            directives,
            ast_node: config.ast_node,
        };
        schema.validate()?;

        Ok(schema)
    }

    fn validate(&self) -> Result<(), SchemaError> {
        let roots = [
            Some(&self.query_type_name),
            self.mutation_type_name.as_ref(),
            self.subscription_type_name.as_ref(),
        ];
        for name in roots.into_iter().flatten() {
            self.expect_kind(name, "object", None, |t| matches!(t, MetaType::Object(_)))?;
        }

        for ty in self.types.values() {
            match ty {
                MetaType::Object(ObjectMeta {
                    fields,
                    interface_names,
                    ..
                }) => {
                    self.validate_fields(fields)?;
                    for name in interface_names {
                        self.expect_kind(name, "interface", None, |t| {
                            matches!(t, MetaType::Interface(_))
                        })?;
                    }
                }
                MetaType::Interface(InterfaceMeta { fields, .. }) => {
                    self.validate_fields(fields)?;
                }
                MetaType::Union(UnionMeta { of_type_names, .. }) => {
                    for name in of_type_names {
                        self.expect_kind(name, "object", None, |t| {
                            matches!(t, MetaType::Object(_))
                        })?;
                    }
                }
                MetaType::InputObject(meta) => self.validate_arguments(&meta.input_fields)?,
                MetaType::Scalar(_) | MetaType::Enum(_) => {}
            }
        }

        for directive in self.directives.values() {
            self.validate_arguments(&directive.arguments)?;
        }

        Ok(())
    }

    fn validate_fields(&self, fields: &[Field<'a>]) -> Result<(), SchemaError> {
        for field in fields {
            let span = field.ast_node.map(|n| n.item.field_type.span);
            self.expect_type(&field.field_type, span)?;
            self.validate_arguments(&field.arguments)?;
        }
        Ok(())
    }

    fn validate_arguments(&self, arguments: &[Argument<'a>]) -> Result<(), SchemaError> {
        for arg in arguments {
            let span = arg.ast_node.map(|n| n.item.value_type.span);
            self.expect_type(&arg.arg_type, span)?;
        }
        Ok(())
    }

    fn expect_type(&self, ty: &Type, span: Option<Span>) -> Result<&MetaType<'a>, SchemaError> {
        let name = ty.innermost_name();
        self.types
            .get(name)
            .ok_or_else(|| SchemaError::UnknownType {
                name: name.clone(),
                span,
            })
    }

    fn expect_kind(
        &self,
        name: &ArcStr,
        expected: &'static str,
        span: Option<Span>,
        is_expected: impl FnOnce(&MetaType<'a>) -> bool,
    ) -> Result<(), SchemaError> {
        let ty = self.expect_type(&Type::Named(name.clone()), span)?;
        if is_expected(ty) {
            Ok(())
        } else {
            Err(SchemaError::WrongTypeKind {
                name: name.clone(),
                expected,
                found: ty.kind_name(),
                span,
            })
        }
    }

    /// Get a type by name.
    pub fn type_by_name(&self, name: &str) -> Option<&MetaType<'a>> {
        self.types.get(name)
    }

    /// Get the query type from the schema.
    pub fn query_type(&self) -> &MetaType<'a> {
        self.types
            .get(&self.query_type_name)
            .expect("Query type does not exist in schema")
    }

    /// Get the mutation type from the schema.
    pub fn mutation_type(&self) -> Option<&MetaType<'a>> {
        self.mutation_type_name.as_ref().map(|name| {
            self.type_by_name(name)
                .expect("Mutation type does not exist in schema")
        })
    }

    /// Get the subscription type.
    pub fn subscription_type(&self) -> Option<&MetaType<'a>> {
        self.subscription_type_name.as_ref().map(|name| {
            self.type_by_name(name)
                .expect("Subscription type does not exist in schema")
        })
    }

    /// Get a list of types, in the order they were registered.
    pub fn type_list(&self) -> Vec<&MetaType<'a>> {
        self.types.values().collect()
    }

    /// Make a type.
    ///
    /// Returns `None` if the innermost named type isn't part of this schema.
    pub fn make_type<N: AsRef<str>>(&self, t: &Type<N>) -> Option<TypeType<'_>> {
        Some(match t {
            Type::NonNullNamed(n) => {
                TypeType::NonNull(Box::new(TypeType::Concrete(self.type_by_name(n.as_ref())?)))
            }
            Type::NonNullList(inner) => {
                TypeType::NonNull(Box::new(TypeType::List(Box::new(self.make_type(inner)?))))
            }
            Type::Named(n) => TypeType::Concrete(self.type_by_name(n.as_ref())?),
            Type::List(inner) => TypeType::List(Box::new(self.make_type(inner)?)),
        })
    }

    /// Get a list of directives, in the order they were registered.
    pub fn directive_list(&self) -> Vec<&DirectiveType<'a>> {
        self.directives.values().collect()
    }

    /// Get directive by name.
    pub fn directive_by_name(&self, name: &str) -> Option<&DirectiveType<'a>> {
        self.directives.get(name)
    }

    /// `schema` definition this schema was built from, if any.
    pub fn ast_node(&self) -> Option<&'a Spanning<SchemaDefinition<'a>>> {
        self.ast_node
    }

    /// Returns the types that may appear where the abstract type `t` is
    /// expected: the members of a union, or the implementors of an interface.
    pub fn possible_types(&self, t: &MetaType<'a>) -> Vec<&MetaType<'a>> {
        match t {
            MetaType::Union(UnionMeta { of_type_names, .. }) => of_type_names
                .iter()
                .filter_map(|t| self.type_by_name(t))
                .collect(),
            MetaType::Interface(InterfaceMeta { name, .. }) => self
                .types
                .values()
                .filter(|t| match t {
                    MetaType::Object(ObjectMeta {
                        interface_names, ..
                    }) => interface_names.iter().any(|iname| iname == name),
                    _ => false,
                })
                .collect(),
            _ => vec![],
        }
    }
}

/// Swaps `name` for the key it is stored under, so that they share an
/// allocation.
fn intern(types: &FnvIndexMap<ArcStr, MetaType<'_>>, name: ArcStr) -> ArcStr {
    types
        .get_key_value(&name)
        .map_or(name, |(key, _)| key.clone())
}

impl<'a> TypeType<'a> {
    /// Returns the named type, if this isn't a wrapper.
    #[inline]
    pub fn to_concrete(&self) -> Option<&'a MetaType<'a>> {
        match self {
            Self::Concrete(t) => Some(t),
            Self::List(..) | Self::NonNull(..) => None,
        }
    }

    /// Returns the named type inside all the list and non-null wrappers.
    #[inline]
    pub fn innermost_concrete(&self) -> &'a MetaType<'a> {
        match self {
            Self::Concrete(t) => t,
            Self::NonNull(n) | Self::List(n) => n.innermost_concrete(),
        }
    }

    /// Returns the item type, if this is a (possibly non-null) list.
    #[inline]
    pub fn list_contents(&self) -> Option<&TypeType<'a>> {
        match self {
            Self::List(n) => Some(n),
            Self::NonNull(n) => n.list_contents(),
            Self::Concrete(..) => None,
        }
    }

    /// Determines if this type only can represent non-null values.
    #[inline]
    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }
}

impl fmt::Display for TypeType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Concrete(t) => f.write_str(t.name()),
            Self::List(i) => write!(f, "[{i}]"),
            Self::NonNull(i) => write!(f, "{i}!"),
        }
    }
}

impl<'a> SchemaConfig<'a> {
    /// Starts a [`SchemaConfig`] with the name of its query root type and no
    /// types.
    pub fn new(query: impl Into<ArcStr>) -> Self {
        Self {
            query: query.into(),
            mutation: None,
            subscription: None,
            types: vec![],
            directives: vec![],
            ast_node: None,
        }
    }

    /// Sets the name of the mutation root type.
    #[must_use]
    pub fn mutation(mut self, name: impl Into<ArcStr>) -> Self {
        self.mutation = Some(name.into());
        self
    }

    /// Sets the name of the subscription root type.
    #[must_use]
    pub fn subscription(mut self, name: impl Into<ArcStr>) -> Self {
        self.subscription = Some(name.into());
        self
    }

    /// Adds a named type.
    #[must_use]
    pub fn r#type(mut self, ty: MetaType<'a>) -> Self {
        self.types.push(ty);
        self
    }

    /// Adds a directive.
    #[must_use]
    pub fn directive(mut self, directive: DirectiveType<'a>) -> Self {
        self.directives.push(directive);
        self
    }
}

impl<'a> DirectiveType<'a> {
    /// Builds a new [`DirectiveType`] usable at the given `locations`.
    pub fn new(
        name: impl Into<ArcStr>,
        locations: &[DirectiveLocation],
        arguments: &[Argument<'a>],
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            locations: locations.to_vec(),
            arguments: arguments.to_vec(),
            ast_node: None,
        }
    }

    /// The `@skip(if: Boolean!)` directive.
    pub fn new_skip() -> Self {
        Self::new(
            literal!("skip"),
            &[
                DirectiveLocation::Field,
                DirectiveLocation::FragmentSpread,
                DirectiveLocation::InlineFragment,
            ],
            &[Argument::new("if", Type::NonNullNamed(literal!("Boolean")))
                .description("Skipped when true.")],
        )
        .description(
            "Directs the executor to skip this field or fragment when the `if` argument is true.",
        )
    }

    /// The `@include(if: Boolean!)` directive.
    pub fn new_include() -> Self {
        Self::new(
            literal!("include"),
            &[
                DirectiveLocation::Field,
                DirectiveLocation::FragmentSpread,
                DirectiveLocation::InlineFragment,
            ],
            &[Argument::new("if", Type::NonNullNamed(literal!("Boolean")))
                .description("Included when true.")],
        )
        .description(
            "Directs the executor to include this field or fragment only when the `if` argument \
             is true.",
        )
    }

    /// The `@deprecated(reason: String = "No longer supported")` directive.
    pub fn new_deprecated() -> Self {
        Self::new(
            literal!("deprecated"),
            &[
                DirectiveLocation::FieldDefinition,
                DirectiveLocation::EnumValue,
            ],
            &[Argument::new("reason", Type::Named(literal!("String")))
                .description(
                    "Explains why this element was deprecated, usually also including a \
                     suggestion for how to access supported similar data.",
                )
                .default_value(InputValue::String(DEFAULT_DEPRECATION_REASON.into()))],
        )
        .description("Marks an element of a GraphQL schema as no longer supported.")
    }

    /// The directives every schema supports: `@skip`, `@include` and
    /// `@deprecated`.
    pub fn specified() -> [Self; 3] {
        [Self::new_skip(), Self::new_include(), Self::new_deprecated()]
    }

    /// Sets the `description` of this [`DirectiveType`].
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Checks whether this directive may be used at `location`.
    pub fn is_allowed_at(&self, location: DirectiveLocation) -> bool {
        self.locations.contains(&location)
    }
}

impl DirectiveLocation {
    /// Every location, executable ones first.
    pub const ALL: [Self; 19] = [
        Self::Query,
        Self::Mutation,
        Self::Subscription,
        Self::Field,
        Self::FragmentDefinition,
        Self::FragmentSpread,
        Self::InlineFragment,
        Self::VariableDefinition,
        Self::Schema,
        Self::Scalar,
        Self::Object,
        Self::FieldDefinition,
        Self::ArgumentDefinition,
        Self::Interface,
        Self::Union,
        Self::Enum,
        Self::EnumValue,
        Self::InputObject,
        Self::InputFieldDefinition,
    ];

    /// Name of the location, as written in a directive definition.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "QUERY",
            Self::Mutation => "MUTATION",
            Self::Subscription => "SUBSCRIPTION",
            Self::Field => "FIELD",
            Self::FragmentDefinition => "FRAGMENT_DEFINITION",
            Self::FragmentSpread => "FRAGMENT_SPREAD",
            Self::InlineFragment => "INLINE_FRAGMENT",
            Self::VariableDefinition => "VARIABLE_DEFINITION",
            Self::Schema => "SCHEMA",
            Self::Scalar => "SCALAR",
            Self::Object => "OBJECT",
            Self::FieldDefinition => "FIELD_DEFINITION",
            Self::ArgumentDefinition => "ARGUMENT_DEFINITION",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
            Self::Enum => "ENUM",
            Self::EnumValue => "ENUM_VALUE",
            Self::InputObject => "INPUT_OBJECT",
            Self::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }

    /// Looks a location up by the name a directive definition uses for it.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == name)
    }

    /// Whether the location is part of an executable document, as opposed to
    /// a type system one.
    pub fn is_executable(&self) -> bool {
        matches!(
            self,
            Self::Query
                | Self::Mutation
                | Self::Subscription
                | Self::Field
                | Self::FragmentDefinition
                | Self::FragmentSpread
                | Self::InlineFragment
                | Self::VariableDefinition,
        )
    }
}

impl fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use arcstr::{ArcStr, literal};

    use super::{DirectiveLocation, DirectiveType, SchemaConfig, SchemaType, TypeType};
    use crate::{
        ast::Type,
        schema::{
            error::SchemaError,
            meta::{Field, InterfaceMeta, ObjectMeta, UnionMeta},
        },
    };

    fn query_with_field(ty: Type) -> ObjectMeta<'static> {
        ObjectMeta::new("Query", &[Field::new("f", ty)])
    }

    #[test]
    fn directive_location_names() {
        assert_eq!(DirectiveLocation::ALL.len(), 19);
        for loc in DirectiveLocation::ALL {
            assert_eq!(DirectiveLocation::from_name(&loc.to_string()), Some(loc));
        }
        assert_eq!(
            DirectiveLocation::from_name("INPUT_FIELD_DEFINITION"),
            Some(DirectiveLocation::InputFieldDefinition),
        );
        assert_eq!(DirectiveLocation::from_name("field"), None);
        assert!(DirectiveLocation::VariableDefinition.is_executable());
        assert!(!DirectiveLocation::Schema.is_executable());
    }

    #[test]
    fn new_adds_specified_scalars_and_directives() {
        let schema = SchemaType::new(
            SchemaConfig::new("Query")
                .r#type(query_with_field(Type::Named(literal!("String"))).into_meta()),
        )
        .unwrap();

        let names = schema
            .type_list()
            .into_iter()
            .map(|t| t.name().as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, ["Query", "String", "Int", "Float", "Boolean", "ID"]);

        let directives = schema
            .directive_list()
            .into_iter()
            .map(|d| d.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(directives, ["skip", "include", "deprecated"]);
        assert_eq!(schema.query_type().name(), "Query");
        assert!(schema.mutation_type().is_none());
    }

    #[test]
    fn new_keeps_redefined_directive() {
        let custom = DirectiveType::new("skip", &[DirectiveLocation::Object], &[]);
        let schema = SchemaType::new(
            SchemaConfig::new("Query")
                .r#type(query_with_field(Type::Named(literal!("Int"))).into_meta())
                .directive(custom),
        )
        .unwrap();

        let skip = schema.directive_by_name("skip").unwrap();
        assert_eq!(skip.locations, [DirectiveLocation::Object]);
        assert_eq!(schema.directive_list().len(), 3);
    }

    #[test]
    fn new_rejects_invalid_configs() {
        let err = SchemaType::new(SchemaConfig::new("Query")).unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnknownType {
                name: literal!("Query"),
                span: None,
            },
        );

        let err = SchemaType::new(
            SchemaConfig::new("Query")
                .r#type(query_with_field(Type::Named(literal!("Missing"))).into_meta()),
        )
        .unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnknownType {
                name: literal!("Missing"),
                span: None,
            },
        );

        let err = SchemaType::new(
            SchemaConfig::new("Query")
                .r#type(query_with_field(Type::Named(literal!("Int"))).into_meta())
                .r#type(ObjectMeta::new("Query", &[]).into_meta()),
        )
        .unwrap_err();
        assert_eq!(
            err,
            SchemaError::TypeDefinedMoreThanOnce {
                name: literal!("Query"),
                span: None,
            },
        );

        let err = SchemaType::new(
            SchemaConfig::new("Query")
                .r#type(query_with_field(Type::Named(literal!("Int"))).into_meta())
                .r#type(UnionMeta::new("U", &["Int"]).into_meta()),
        )
        .unwrap_err();
        assert_eq!(
            err,
            SchemaError::WrongTypeKind {
                name: literal!("Int"),
                expected: "object",
                found: "scalar",
                span: None,
            },
        );
    }

    #[test]
    fn make_type_resolves_to_arena_entries() {
        let schema = SchemaType::new(
            SchemaConfig::new("Query")
                .r#type(
                    ObjectMeta::new(
                        "Query",
                        &[
                            Field::new(
                                "nodes",
                                Type::NonNullList(Box::new(Type::NonNullNamed(literal!("Node")))),
                            ),
                            Field::new("node", Type::Named(literal!("Node"))),
                        ],
                    )
                    .interfaces(&[])
                    .into_meta(),
                )
                .r#type(
                    InterfaceMeta::new("Node", &[Field::new("id", Type::Named(literal!("ID")))])
                        .into_meta(),
                ),
        )
        .unwrap();

        let query = schema.query_type();
        let nodes = schema
            .make_type(&query.field_by_name("nodes").unwrap().field_type)
            .unwrap();
        let node = schema
            .make_type(&query.field_by_name("node").unwrap().field_type)
            .unwrap();

        assert_eq!(nodes.to_string(), "[Node!]!");
        assert!(nodes.is_non_null());
        assert!(nodes.list_contents().is_some());
        assert!(matches!(node, TypeType::Concrete(_)));
        assert!(std::ptr::eq(
            nodes.innermost_concrete(),
            node.innermost_concrete(),
        ));
        assert!(schema.make_type(&Type::Named("Nope")).is_none());
    }

    #[test]
    fn root_names_share_type_map_keys() {
        let schema = SchemaType::new(
            SchemaConfig::new(ArcStr::from("Query"))
                .r#type(query_with_field(Type::Named(literal!("Int"))).into_meta()),
        )
        .unwrap();

        let (key, _) = schema.types.get_key_value("Query").unwrap();
        assert!(ArcStr::ptr_eq(key, &schema.query_type_name));
    }
}
