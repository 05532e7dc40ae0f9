use std::collections::VecDeque;

use arcstr::ArcStr;
use fnv::FnvHashMap;
use serde::Deserialize;

use crate::{
    ast::{
        Description, Directive, DirectiveDefinition, EnumValueDefinition, FieldDefinition,
        InputValueDefinition, Type, TypeDefinition,
    },
    parser::{Span, Spanning},
    schema::{
        error::SchemaError,
        meta::{
            Argument, DeprecationStatus, EnumMeta, EnumValue, Field, InputObjectMeta,
            InterfaceMeta, MetaType, ObjectMeta, ScalarMeta, UnionMeta,
        },
        model::{DEFAULT_DEPRECATION_REASON, DirectiveType, FnvIndexMap},
    },
};

/// Options shared by [`build_ast_schema`] and [`extend_schema`].
///
/// [`build_ast_schema`]: crate::build_ast_schema
/// [`extend_schema`]: crate::extend_schema
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildOptions {
    /// Use the `#` comment block directly above a definition as its
    /// description when it has no string literal description.
    pub comment_descriptions: bool,
}

impl BuildOptions {
    /// Sets whether leading `#` comments are used as descriptions.
    #[must_use]
    pub fn comment_descriptions(mut self, value: bool) -> Self {
        self.comment_descriptions = value;
        self
    }
}

/// Source of the named types a [`TypeBuilder`] doesn't find among the
/// definitions it was given.
pub(crate) trait ExistingTypes<'a> {
    /// Looks up a pre-existing type by name.
    fn existing_type(&self, name: &str) -> Option<&MetaType<'a>>;

    /// Produces the new version of a pre-existing type, resolving everything
    /// it references through `builder`.
    fn rebuild_type(
        &self,
        ty: &MetaType<'a>,
        builder: &mut TypeBuilder<'_, 'a>,
    ) -> Result<MetaType<'a>, SchemaError> {
        builder.rebuild_type(ty)
    }
}

#[derive(Clone, Copy)]
enum Source<'d, 'a> {
    Definition(&'a Spanning<TypeDefinition<'a>>),
    Existing(&'d MetaType<'a>),
}

/// Memoizing resolver turning type names into the types of a new schema.
///
/// Building runs in two phases. [`TypeBuilder::build_type`] registers an
/// empty slot for a name the first time it sees it and returns at once, so a
/// type referencing itself, directly or through other types, never recurses.
/// [`TypeBuilder::finish`] then fills the slots in registration order;
/// filling one may register more names, which get filled in turn.
pub(crate) struct TypeBuilder<'d, 'a> {
    definitions: FnvHashMap<&'a str, &'a Spanning<TypeDefinition<'a>>>,
    existing: &'d dyn ExistingTypes<'a>,
    cache: FnvIndexMap<ArcStr, Option<MetaType<'a>>>,
    pending: VecDeque<(ArcStr, Source<'d, 'a>)>,
    options: BuildOptions,
}

impl<'d, 'a> TypeBuilder<'d, 'a> {
    pub(crate) fn new(
        definitions: FnvHashMap<&'a str, &'a Spanning<TypeDefinition<'a>>>,
        existing: &'d dyn ExistingTypes<'a>,
        options: BuildOptions,
    ) -> Self {
        Self {
            definitions,
            existing,
            cache: FnvIndexMap::default(),
            pending: VecDeque::new(),
            options,
        }
    }

    /// Resolves `name`, returning the name every reference to the type
    /// shares.
    ///
    /// Types defined among the builder's definitions win over existing ones.
    /// `span` locates the reference in its document, if any.
    pub(crate) fn build_type(
        &mut self,
        name: &str,
        span: Option<Span>,
    ) -> Result<ArcStr, SchemaError> {
        if let Some((key, _)) = self.cache.get_key_value(name) {
            return Ok(key.clone());
        }

        let existing = self.existing;
        let (key, source) = if let Some(&def) = self.definitions.get(name) {
            (ArcStr::from(def.item.name().item), Source::Definition(def))
        } else if let Some(ty) = existing.existing_type(name) {
            (ty.name().clone(), Source::Existing(ty))
        } else {
            return Err(SchemaError::UnknownType {
                name: name.into(),
                span,
            });
        };

        self.cache.insert(key.clone(), None);
        self.pending.push_back((key.clone(), source));

        Ok(key)
    }

    /// Fills every registered slot, then returns all the types in the order
    /// they were first referenced.
    pub(crate) fn finish(mut self) -> Result<FnvIndexMap<ArcStr, MetaType<'a>>, SchemaError> {
        while let Some((name, source)) = self.pending.pop_front() {
            __sdl_trace!("building type `{}`", name);

            let ty = match source {
                Source::Definition(def) => self.build_definition(name.clone(), def)?,
                Source::Existing(ty) => {
                    let existing = self.existing;
                    existing.rebuild_type(ty, &mut self)?
                }
            };
            if let Some(slot) = self.cache.get_mut(&name) {
                *slot = Some(ty);
            }
        }

        self.cache
            .into_iter()
            .map(|(name, ty)| ty.map(|ty| (name, ty)).ok_or(SchemaError::MissingType))
            .collect()
    }

    /// Rebuilds the references of a type literal through this builder.
    pub(crate) fn build_type_ref<N: AsRef<str>>(
        &mut self,
        ty: &Type<N>,
        span: Option<Span>,
    ) -> Result<Type, SchemaError> {
        ty.try_map_name(|n| self.build_type(n.as_ref(), span))
    }

    fn build_names(&mut self, names: &[Spanning<&'a str>]) -> Result<Vec<ArcStr>, SchemaError> {
        names
            .iter()
            .map(|n| self.build_type(n.item, Some(n.span)))
            .collect()
    }

    fn build_definition(
        &mut self,
        name: ArcStr,
        def: &'a Spanning<TypeDefinition<'a>>,
    ) -> Result<MetaType<'a>, SchemaError> {
        let description = self.description(def.item.description());
        let ast_node = Some(def);

        Ok(match &def.item {
            TypeDefinition::Scalar(_) => MetaType::Scalar(ScalarMeta {
                name,
                description,
                ast_node,
            }),
            TypeDefinition::Object(d) => MetaType::Object(ObjectMeta {
                name,
                description,
                fields: self.build_fields(&d.fields)?,
                interface_names: self.build_names(&d.interfaces)?,
                is_type_of: None,
                ast_node,
                extension_ast_nodes: vec![],
            }),
            TypeDefinition::Interface(d) => MetaType::Interface(InterfaceMeta {
                name,
                description,
                fields: self.build_fields(&d.fields)?,
                resolve_type: None,
                ast_node,
            }),
            TypeDefinition::Union(d) => MetaType::Union(UnionMeta {
                name,
                description,
                of_type_names: self.build_names(&d.members)?,
                resolve_type: None,
                ast_node,
            }),
            TypeDefinition::Enum(d) => MetaType::Enum(EnumMeta {
                name,
                description,
                values: d.values.iter().map(|v| self.build_enum_value(v)).collect(),
                ast_node,
            }),
            TypeDefinition::InputObject(d) => MetaType::InputObject(InputObjectMeta {
                name,
                description,
                input_fields: self.build_input_values(&d.fields)?,
                ast_node,
            }),
        })
    }

    fn build_fields(
        &mut self,
        defs: &'a [Spanning<FieldDefinition<'a>>],
    ) -> Result<Vec<Field<'a>>, SchemaError> {
        defs.iter().map(|f| self.build_field(f)).collect()
    }

    /// Builds a field out of its definition.
    pub(crate) fn build_field(
        &mut self,
        def: &'a Spanning<FieldDefinition<'a>>,
    ) -> Result<Field<'a>, SchemaError> {
        let field = &def.item;
        Ok(Field {
            name: field.name.item.into(),
            description: self.description(&field.description),
            arguments: self.build_input_values(&field.arguments)?,
            field_type: self.build_type_ref(&field.field_type.item, Some(field.field_type.span))?,
            deprecation_status: deprecation_status(field.directives.as_deref()),
            resolver: None,
            ast_node: Some(def),
        })
    }

    fn build_input_values(
        &mut self,
        defs: &'a [Spanning<InputValueDefinition<'a>>],
    ) -> Result<Vec<Argument<'a>>, SchemaError> {
        defs.iter()
            .map(|def| {
                let arg = &def.item;
                Ok(Argument {
                    name: arg.name.item.into(),
                    description: self.description(&arg.description),
                    arg_type: self.build_type_ref(&arg.value_type.item, Some(arg.value_type.span))?,
                    default_value: arg.default_value.as_ref().map(|v| v.item.clone()),
                    ast_node: Some(def),
                })
            })
            .collect()
    }

    fn build_enum_value(&self, def: &'a Spanning<EnumValueDefinition<'a>>) -> EnumValue<'a> {
        EnumValue {
            name: def.item.name.item.into(),
            description: self.description(&def.item.description),
            deprecation_status: deprecation_status(def.item.directives.as_deref()),
            ast_node: Some(def),
        }
    }

    /// Builds a directive out of its definition.
    pub(crate) fn build_directive(
        &mut self,
        def: &'a Spanning<DirectiveDefinition<'a>>,
    ) -> Result<DirectiveType<'a>, SchemaError> {
        let directive = &def.item;
        Ok(DirectiveType {
            name: directive.name.item.into(),
            description: self.description(&directive.description),
            locations: directive.locations.iter().map(|l| l.item).collect(),
            arguments: self.build_input_values(&directive.arguments)?,
            ast_node: Some(def),
        })
    }

    /// Copies an existing type, resolving every type it references through
    /// this builder.
    ///
    /// Everything else, resolvers and AST nodes included, is kept as is.
    pub(crate) fn rebuild_type(&mut self, ty: &MetaType<'a>) -> Result<MetaType<'a>, SchemaError> {
        Ok(match ty {
            MetaType::Object(meta) => MetaType::Object(ObjectMeta {
                fields: self.rebuild_fields(&meta.fields)?,
                interface_names: self.rebuild_names(&meta.interface_names)?,
                ..meta.clone()
            }),
            MetaType::Interface(meta) => MetaType::Interface(InterfaceMeta {
                fields: self.rebuild_fields(&meta.fields)?,
                ..meta.clone()
            }),
            MetaType::Union(meta) => MetaType::Union(UnionMeta {
                of_type_names: self.rebuild_names(&meta.of_type_names)?,
                ..meta.clone()
            }),
            MetaType::InputObject(meta) => MetaType::InputObject(InputObjectMeta {
                input_fields: self.rebuild_arguments(&meta.input_fields)?,
                ..meta.clone()
            }),
            MetaType::Scalar(_) | MetaType::Enum(_) => ty.clone(),
        })
    }

    fn rebuild_fields(&mut self, fields: &[Field<'a>]) -> Result<Vec<Field<'a>>, SchemaError> {
        fields
            .iter()
            .map(|f| {
                Ok(Field {
                    field_type: self.build_type_ref(
                        &f.field_type,
                        f.ast_node.map(|n| n.item.field_type.span),
                    )?,
                    arguments: self.rebuild_arguments(&f.arguments)?,
                    ..f.clone()
                })
            })
            .collect()
    }

    fn rebuild_arguments(&mut self, args: &[Argument<'a>]) -> Result<Vec<Argument<'a>>, SchemaError> {
        args.iter()
            .map(|a| {
                Ok(Argument {
                    arg_type: self.build_type_ref(
                        &a.arg_type,
                        a.ast_node.map(|n| n.item.value_type.span),
                    )?,
                    ..a.clone()
                })
            })
            .collect()
    }

    fn rebuild_names(&mut self, names: &[ArcStr]) -> Result<Vec<ArcStr>, SchemaError> {
        names.iter().map(|n| self.build_type(n, None)).collect()
    }

    fn description(&self, description: &Description) -> Option<ArcStr> {
        description
            .resolve(self.options.comment_descriptions)
            .map(ArcStr::from)
    }
}

/// Reads the `@deprecated` directive out of a definition's directives.
fn deprecation_status(directives: Option<&[Spanning<Directive<'_>>]>) -> DeprecationStatus {
    directives
        .into_iter()
        .flatten()
        .find(|d| d.item.name.item == "deprecated")
        .map_or(DeprecationStatus::Current, |d| {
            let reason = d
                .item
                .arguments
                .as_ref()
                .and_then(|args| args.item.get("reason"))
                .and_then(|v| v.item.as_string_value())
                .unwrap_or(DEFAULT_DEPRECATION_REASON);
            DeprecationStatus::Deprecated(Some(reason.into()))
        })
}
