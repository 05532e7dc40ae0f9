use std::{convert::Infallible, fmt};

use arcstr::ArcStr;

use crate::{parser::Spanning, schema::model::DirectiveLocation};

/// A type literal in the syntax tree
///
/// This enum carries no semantic information and might refer to types that do
/// not exist.
///
/// Parsed documents use `Type<&str>` borrowing from the source, while a
/// [`SchemaType`] stores `Type<ArcStr>` sharing the name of its type map key.
///
/// [`SchemaType`]: crate::SchemaType
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub enum Type<N = ArcStr> {
    /// A nullable named type, e.g. `String`
    Named(N),
    /// A nullable list type, e.g. `[String]`
    ///
    /// The list itself is what's nullable, the containing type might be non-null.
    List(Box<Type<N>>),
    /// A non-null named type, e.g. `String!`
    NonNullNamed(N),
    /// A non-null list type, e.g. `[String]!`.
    ///
    /// The list itself is what's non-null, the containing type might be null.
    NonNullList(Box<Type<N>>),
}

/// A JSON-like value appearing as a literal in a document: an argument, a
/// default value of a variable, an argument or an input field.
///
/// Lists and objects variants are _spanned_, i.e. they contain a reference to
/// their position in the source file, if available.
#[derive(Clone, Debug, PartialEq)]
#[expect(missing_docs, reason = "self-explanatory")]
pub enum InputValue {
    Null,
    Int(i32),
    Float(f64),
    String(String),
    Boolean(bool),
    Enum(String),
    Variable(String),
    List(Vec<Spanning<InputValue>>),
    Object(Vec<(Spanning<String>, Spanning<InputValue>)>),
}

#[expect(missing_docs, reason = "self-explanatory")]
#[derive(Clone, PartialEq, Debug)]
pub struct VariableDefinition<'a> {
    pub var_type: Spanning<Type<&'a str>>,
    pub default_value: Option<Spanning<InputValue>>,
    pub directives: Option<Vec<Spanning<Directive<'a>>>>,
}

#[expect(missing_docs, reason = "self-explanatory")]
#[derive(Clone, PartialEq, Debug)]
pub struct Arguments<'a> {
    pub items: Vec<(Spanning<&'a str>, Spanning<InputValue>)>,
}

#[expect(missing_docs, reason = "self-explanatory")]
#[derive(Clone, PartialEq, Debug)]
pub struct VariableDefinitions<'a> {
    pub items: Vec<(Spanning<&'a str>, VariableDefinition<'a>)>,
}

#[expect(missing_docs, reason = "self-explanatory")]
#[derive(Clone, PartialEq, Debug)]
pub struct Field<'a> {
    pub alias: Option<Spanning<&'a str>>,
    pub name: Spanning<&'a str>,
    pub arguments: Option<Spanning<Arguments<'a>>>,
    pub directives: Option<Vec<Spanning<Directive<'a>>>>,
    pub selection_set: Option<Vec<Selection<'a>>>,
}

#[expect(missing_docs, reason = "self-explanatory")]
#[derive(Clone, PartialEq, Debug)]
pub struct FragmentSpread<'a> {
    pub name: Spanning<&'a str>,
    pub directives: Option<Vec<Spanning<Directive<'a>>>>,
}

#[expect(missing_docs, reason = "self-explanatory")]
#[derive(Clone, PartialEq, Debug)]
pub struct InlineFragment<'a> {
    pub type_condition: Option<Spanning<&'a str>>,
    pub directives: Option<Vec<Spanning<Directive<'a>>>>,
    pub selection_set: Vec<Selection<'a>>,
}

/// Entry in a GraphQL selection set
///
/// This enum represents one of the three variants of a selection that exists
/// in GraphQL: a field, a fragment spread, or an inline fragment. Each of the
/// variants references their location in the query source.
///
/// ```text
/// {
///   field(withArg: 123) { subField }
///   ...fragmentSpread
///   ...on User {
///     inlineFragmentField
///   }
/// }
/// ```
#[derive(Clone, PartialEq, Debug)]
#[expect(missing_docs, reason = "self-explanatory")]
pub enum Selection<'a> {
    Field(Spanning<Field<'a>>),
    FragmentSpread(Spanning<FragmentSpread<'a>>),
    InlineFragment(Spanning<InlineFragment<'a>>),
}

/// Usage of a directive, e.g. `@include(if: $foo)`.
#[expect(missing_docs, reason = "self-explanatory")]
#[derive(Clone, PartialEq, Debug)]
pub struct Directive<'a> {
    pub name: Spanning<&'a str>,
    pub arguments: Option<Spanning<Arguments<'a>>>,
}

#[expect(missing_docs, reason = "self-explanatory")]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

#[expect(missing_docs, reason = "self-explanatory")]
#[derive(Clone, PartialEq, Debug)]
pub struct Operation<'a> {
    pub operation_type: OperationType,
    pub name: Option<Spanning<&'a str>>,
    pub variable_definitions: Option<Spanning<VariableDefinitions<'a>>>,
    pub directives: Option<Vec<Spanning<Directive<'a>>>>,
    pub selection_set: Vec<Selection<'a>>,
}

#[expect(missing_docs, reason = "self-explanatory")]
#[derive(Clone, PartialEq, Debug)]
pub struct Fragment<'a> {
    pub name: Spanning<&'a str>,
    pub type_condition: Spanning<&'a str>,
    pub directives: Option<Vec<Spanning<Directive<'a>>>>,
    pub selection_set: Vec<Selection<'a>>,
}

/// `schema { ... }` definition, or an `extend schema` extension.
#[expect(missing_docs, reason = "self-explanatory")]
#[derive(Clone, PartialEq, Debug)]
pub struct SchemaDefinition<'a> {
    pub directives: Option<Vec<Spanning<Directive<'a>>>>,
    pub operation_types: Vec<Spanning<OperationTypeDefinition<'a>>>,
}

/// Root operation type entry of a [`SchemaDefinition`], e.g. `query: Query`.
#[expect(missing_docs, reason = "self-explanatory")]
#[derive(Clone, PartialEq, Debug)]
pub struct OperationTypeDefinition<'a> {
    pub operation_type: Spanning<OperationType>,
    pub type_name: Spanning<&'a str>,
}

/// Documentation attached to a type system definition.
///
/// A string (or block string) literal preceding the definition always wins.
/// The leading `#` comment block is kept aside and only consulted when
/// descriptions are built from comments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Description {
    /// Value of the string literal description, if any.
    pub literal: Option<Spanning<String>>,

    /// Dedented content of the `#` comment lines directly above the definition.
    pub comment: Option<String>,
}

#[expect(missing_docs, reason = "self-explanatory")]
#[derive(Clone, PartialEq, Debug)]
pub struct ScalarTypeDefinition<'a> {
    pub description: Description,
    pub name: Spanning<&'a str>,
    pub directives: Option<Vec<Spanning<Directive<'a>>>>,
}

#[expect(missing_docs, reason = "self-explanatory")]
#[derive(Clone, PartialEq, Debug)]
pub struct ObjectTypeDefinition<'a> {
    pub description: Description,
    pub name: Spanning<&'a str>,
    pub interfaces: Vec<Spanning<&'a str>>,
    pub directives: Option<Vec<Spanning<Directive<'a>>>>,
    pub fields: Vec<Spanning<FieldDefinition<'a>>>,
}

#[expect(missing_docs, reason = "self-explanatory")]
#[derive(Clone, PartialEq, Debug)]
pub struct InterfaceTypeDefinition<'a> {
    pub description: Description,
    pub name: Spanning<&'a str>,
    pub directives: Option<Vec<Spanning<Directive<'a>>>>,
    pub fields: Vec<Spanning<FieldDefinition<'a>>>,
}

#[expect(missing_docs, reason = "self-explanatory")]
#[derive(Clone, PartialEq, Debug)]
pub struct UnionTypeDefinition<'a> {
    pub description: Description,
    pub name: Spanning<&'a str>,
    pub directives: Option<Vec<Spanning<Directive<'a>>>>,
    pub members: Vec<Spanning<&'a str>>,
}

#[expect(missing_docs, reason = "self-explanatory")]
#[derive(Clone, PartialEq, Debug)]
pub struct EnumTypeDefinition<'a> {
    pub description: Description,
    pub name: Spanning<&'a str>,
    pub directives: Option<Vec<Spanning<Directive<'a>>>>,
    pub values: Vec<Spanning<EnumValueDefinition<'a>>>,
}

#[expect(missing_docs, reason = "self-explanatory")]
#[derive(Clone, PartialEq, Debug)]
pub struct InputObjectTypeDefinition<'a> {
    pub description: Description,
    pub name: Spanning<&'a str>,
    pub directives: Option<Vec<Spanning<Directive<'a>>>>,
    pub fields: Vec<Spanning<InputValueDefinition<'a>>>,
}

/// Field of an object or interface type definition.
#[expect(missing_docs, reason = "self-explanatory")]
#[derive(Clone, PartialEq, Debug)]
pub struct FieldDefinition<'a> {
    pub description: Description,
    pub name: Spanning<&'a str>,
    pub arguments: Vec<Spanning<InputValueDefinition<'a>>>,
    pub field_type: Spanning<Type<&'a str>>,
    pub directives: Option<Vec<Spanning<Directive<'a>>>>,
}

/// Argument definition of a field or a directive, or a field of an input
/// object type definition.
#[expect(missing_docs, reason = "self-explanatory")]
#[derive(Clone, PartialEq, Debug)]
pub struct InputValueDefinition<'a> {
    pub description: Description,
    pub name: Spanning<&'a str>,
    pub value_type: Spanning<Type<&'a str>>,
    pub default_value: Option<Spanning<InputValue>>,
    pub directives: Option<Vec<Spanning<Directive<'a>>>>,
}

#[expect(missing_docs, reason = "self-explanatory")]
#[derive(Clone, PartialEq, Debug)]
pub struct EnumValueDefinition<'a> {
    pub description: Description,
    pub name: Spanning<&'a str>,
    pub directives: Option<Vec<Spanning<Directive<'a>>>>,
}

/// `directive @name(...) on LOCATION | ...` definition.
#[expect(missing_docs, reason = "self-explanatory")]
#[derive(Clone, PartialEq, Debug)]
pub struct DirectiveDefinition<'a> {
    pub description: Description,
    pub name: Spanning<&'a str>,
    pub arguments: Vec<Spanning<InputValueDefinition<'a>>>,
    pub locations: Vec<Spanning<DirectiveLocation>>,
}

/// Named type definition of a type system document.
///
/// The same node shape is used for `extend <kind> ...` extensions, which are
/// told apart by the enclosing [`Definition`] variant.
#[expect(missing_docs, reason = "self-explanatory")]
#[derive(Clone, PartialEq, Debug)]
pub enum TypeDefinition<'a> {
    Scalar(ScalarTypeDefinition<'a>),
    Object(ObjectTypeDefinition<'a>),
    Interface(InterfaceTypeDefinition<'a>),
    Union(UnionTypeDefinition<'a>),
    Enum(EnumTypeDefinition<'a>),
    InputObject(InputObjectTypeDefinition<'a>),
}

/// Top-level definition of a document.
#[expect(missing_docs, reason = "self-explanatory")]
#[derive(Clone, PartialEq, Debug)]
pub enum Definition<'a> {
    Operation(Spanning<Operation<'a>>),
    Fragment(Spanning<Fragment<'a>>),
    Schema(Spanning<SchemaDefinition<'a>>),
    SchemaExtension(Spanning<SchemaDefinition<'a>>),
    Type(Spanning<TypeDefinition<'a>>),
    TypeExtension(Spanning<TypeDefinition<'a>>),
    Directive(Spanning<DirectiveDefinition<'a>>),
}

/// Parsed document, borrowed.
pub type Document<'a> = [Definition<'a>];
/// Parsed document, owned.
pub type OwnedDocument<'a> = Vec<Definition<'a>>;

impl<N> Type<N> {
    /// Get the name of a named type.
    ///
    /// Only applies to named types; lists will return `None`.
    pub fn name(&self) -> Option<&N> {
        match self {
            Self::Named(n) | Self::NonNullNamed(n) => Some(n),
            Self::List(_) | Self::NonNullList(_) => None,
        }
    }

    /// Get the innermost name by unpacking lists
    ///
    /// All type literals contain exactly one named type.
    pub fn innermost_name(&self) -> &N {
        match self {
            Self::Named(n) | Self::NonNullNamed(n) => n,
            Self::List(l) | Self::NonNullList(l) => l.innermost_name(),
        }
    }

    /// Determines if a type only can represent non-null values.
    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNullNamed(_) | Self::NonNullList(_))
    }

    /// Rebuilds this type literal keeping all its list and non-null wrappers,
    /// replacing the innermost name with the one returned by `f`.
    pub fn try_map_name<M, E>(&self, f: impl FnOnce(&N) -> Result<M, E>) -> Result<Type<M>, E> {
        Ok(match self {
            Self::Named(n) => Type::Named(f(n)?),
            Self::NonNullNamed(n) => Type::NonNullNamed(f(n)?),
            Self::List(l) => Type::List(Box::new(l.try_map_name(f)?)),
            Self::NonNullList(l) => Type::NonNullList(Box::new(l.try_map_name(f)?)),
        })
    }

    /// Infallible version of [`Type::try_map_name()`].
    pub fn map_name<M>(&self, f: impl FnOnce(&N) -> M) -> Type<M> {
        match self.try_map_name(|n| Ok::<_, Infallible>(f(n))) {
            Ok(t) => t,
            Err(e) => match e {},
        }
    }
}

impl<N: fmt::Display> fmt::Display for Type<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(n) => write!(f, "{n}"),
            Self::NonNullNamed(n) => write!(f, "{n}!"),
            Self::List(t) => write!(f, "[{t}]"),
            Self::NonNullList(t) => write!(f, "[{t}]!"),
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        })
    }
}

impl InputValue {
    /// Construct a `null` value.
    pub fn null() -> Self {
        Self::Null
    }

    /// Construct an enum value.
    pub fn enum_value<T: AsRef<str>>(s: T) -> Self {
        Self::Enum(s.as_ref().into())
    }

    /// Construct a variable value.
    pub fn variable<T: AsRef<str>>(v: T) -> Self {
        Self::Variable(v.as_ref().into())
    }

    /// Construct a [`Spanning::unlocated`] list.
    pub fn list(l: Vec<Self>) -> Self {
        Self::List(l.into_iter().map(Spanning::unlocated).collect())
    }

    /// Does the value represent a `null`?
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// View the underlying string value, if present.
    pub fn as_string_value(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Enum(v) => write!(f, "{v}"),
            Self::Variable(v) => write!(f, "${v}"),
            Self::List(v) => {
                write!(f, "[")?;
                for (i, spanning) in v.iter().enumerate() {
                    spanning.item.fmt(f)?;
                    if i < v.len() - 1 {
                        write!(f, ", ")?;
                    }
                }
                write!(f, "]")
            }
            Self::Object(o) => {
                write!(f, "{{")?;
                for (i, (k, v)) in o.iter().enumerate() {
                    write!(f, "{}: ", k.item)?;
                    v.item.fmt(f)?;
                    if i < o.len() - 1 {
                        write!(f, ", ")?;
                    }
                }
                write!(f, "}}")
            }
        }
    }
}

impl<'a> Arguments<'a> {
    #[doc(hidden)]
    pub fn iter(&self) -> std::slice::Iter<'_, (Spanning<&'a str>, Spanning<InputValue>)> {
        self.items.iter()
    }

    #[doc(hidden)]
    pub fn get(&self, key: &str) -> Option<&Spanning<InputValue>> {
        self.items
            .iter()
            .filter(|&(k, _)| k.item == key)
            .map(|(_, v)| v)
            .next()
    }
}

impl<'a> VariableDefinitions<'a> {
    #[doc(hidden)]
    pub fn iter(&self) -> std::slice::Iter<'_, (Spanning<&'a str>, VariableDefinition<'a>)> {
        self.items.iter()
    }
}

impl<'a> TypeDefinition<'a> {
    /// Name of the defined (or extended) type.
    pub fn name(&self) -> &Spanning<&'a str> {
        match self {
            Self::Scalar(d) => &d.name,
            Self::Object(d) => &d.name,
            Self::Interface(d) => &d.name,
            Self::Union(d) => &d.name,
            Self::Enum(d) => &d.name,
            Self::InputObject(d) => &d.name,
        }
    }

    /// Directives applied to the definition.
    pub fn directives(&self) -> Option<&Vec<Spanning<Directive<'a>>>> {
        match self {
            Self::Scalar(d) => d.directives.as_ref(),
            Self::Object(d) => d.directives.as_ref(),
            Self::Interface(d) => d.directives.as_ref(),
            Self::Union(d) => d.directives.as_ref(),
            Self::Enum(d) => d.directives.as_ref(),
            Self::InputObject(d) => d.directives.as_ref(),
        }
    }

    /// Description attached to the definition.
    pub fn description(&self) -> &Description {
        match self {
            Self::Scalar(d) => &d.description,
            Self::Object(d) => &d.description,
            Self::Interface(d) => &d.description,
            Self::Union(d) => &d.description,
            Self::Enum(d) => &d.description,
            Self::InputObject(d) => &d.description,
        }
    }

    /// Human readable kind of the definition, as used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Object(_) => "object",
            Self::Interface(_) => "interface",
            Self::Union(_) => "union",
            Self::Enum(_) => "enum",
            Self::InputObject(_) => "input object",
        }
    }
}

impl Description {
    /// Picks the text to use as a description.
    ///
    /// The string literal wins; the `#` comment block is only used when
    /// `use_comments` is set.
    pub fn resolve(&self, use_comments: bool) -> Option<&str> {
        self.literal
            .as_ref()
            .map(|s| s.item.as_str())
            .or_else(|| use_comments.then_some(self.comment.as_deref()).flatten())
    }
}
