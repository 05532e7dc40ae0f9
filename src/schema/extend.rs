use std::borrow::Cow;

use fnv::FnvHashMap;

use crate::{
    ast::{Definition, Document, TypeDefinition},
    parser::Spanning,
    schema::{
        builder::{BuildOptions, ExistingTypes, TypeBuilder},
        error::SchemaError,
        meta::{MetaType, ObjectMeta},
        model::{FnvIndexMap, SchemaConfig, SchemaType},
    },
};

/// Produces a new [`SchemaType`] made of `schema` and the type definitions,
/// `extend type` extensions and directive definitions of `document`.
///
/// `schema` itself is never modified. When `document` contributes nothing,
/// `schema` is returned as is, borrowed.
///
/// Only extensions of object types are applied: they add fields and
/// implemented interfaces. Extensions of other kinds are ignored.
///
/// # Errors
///
/// On the first conflict found between `document` and `schema`, in document
/// order: a type or a directive already defined, an extension targeting a
/// missing or non-object type, an extension adding a field or an interface
/// the type already has, or a reference to an unknown type.
pub fn extend_schema<'s, 'a>(
    schema: &'s SchemaType<'a>,
    document: &'a Document<'a>,
    options: BuildOptions,
) -> Result<Cow<'s, SchemaType<'a>>, SchemaError> {
    __sdl_span_trace!("extend_schema");

    let mut definitions = FnvIndexMap::default();
    let mut extensions = FnvHashMap::<_, Vec<_>>::default();
    let mut directive_defs = vec![];

    for def in document {
        match def {
            Definition::Type(t) => {
                let name = t.item.name().item;
                if schema.type_by_name(name).is_some() {
                    return Err(SchemaError::DuplicateType {
                        name: name.into(),
                        span: t.span,
                    });
                }
                if definitions.insert(name, t).is_some() {
                    return Err(SchemaError::TypeDefinedMoreThanOnce {
                        name: name.into(),
                        span: Some(t.span),
                    });
                }
            }
            Definition::TypeExtension(ext @ Spanning {
                item: TypeDefinition::Object(_),
                ..
            }) => {
                let name = ext.item.name().item;
                match schema.type_by_name(name) {
                    Some(MetaType::Object(_)) => extensions.entry(name).or_default().push(ext),
                    Some(_) => {
                        return Err(SchemaError::InvalidExtensionTarget {
                            name: name.into(),
                            span: ext.span,
                        });
                    }
                    None => {
                        return Err(SchemaError::UnknownExtensionTarget {
                            name: name.into(),
                            span: ext.span,
                        });
                    }
                }
            }
            Definition::Directive(d) => {
                let name = d.item.name.item;
                if schema.directive_by_name(name).is_some() {
                    return Err(SchemaError::DuplicateDirective {
                        name: name.into(),
                        span: d.span,
                    });
                }
                directive_defs.push(d);
            }
            Definition::Operation(_)
            | Definition::Fragment(_)
            | Definition::Schema(_)
            | Definition::SchemaExtension(_)
            | Definition::TypeExtension(_) => {}
        }
    }

    if definitions.is_empty() && extensions.is_empty() && directive_defs.is_empty() {
        __sdl_trace_debug!("nothing to extend the schema with");
        return Ok(Cow::Borrowed(schema));
    }

    __sdl_trace_debug!(
        "extending schema with {} types, {} extended types and {} directives",
        definitions.len(),
        extensions.len(),
        directive_defs.len(),
    );

    let new_type_names = definitions.keys().copied().collect::<Vec<_>>();
    let extender = Extender { schema, extensions };
    let mut builder = TypeBuilder::new(definitions.into_iter().collect(), &extender, options);

    let query = builder.build_type(&schema.query_type_name, None)?;
    let mutation = schema
        .mutation_type_name
        .as_ref()
        .map(|name| builder.build_type(name, None))
        .transpose()?;
    let subscription = schema
        .subscription_type_name
        .as_ref()
        .map(|name| builder.build_type(name, None))
        .transpose()?;
    for name in schema.types.keys() {
        builder.build_type(name, None)?;
    }
    for name in new_type_names {
        builder.build_type(name, None)?;
    }

    let mut directives = schema.directives.values().cloned().collect::<Vec<_>>();
    for def in directive_defs {
        directives.push(builder.build_directive(def)?);
    }

    let types = builder.finish()?;

    let extended = SchemaType::new(SchemaConfig {
        query,
        mutation,
        subscription,
        types: types.into_values().collect(),
        directives,
        ast_node: schema.ast_node,
    })?;

    __sdl_trace_debug!(
        "extended schema has {} types and {} directives",
        extended.types.len(),
        extended.directives.len(),
    );

    Ok(Cow::Owned(extended))
}

/// Rebuilds the types of an existing schema, merging in the `extend type`
/// extensions targeting them.
struct Extender<'s, 'a> {
    schema: &'s SchemaType<'a>,
    extensions: FnvHashMap<&'a str, Vec<&'a Spanning<TypeDefinition<'a>>>>,
}

impl<'a> ExistingTypes<'a> for Extender<'_, 'a> {
    fn existing_type(&self, name: &str) -> Option<&MetaType<'a>> {
        self.schema.type_by_name(name)
    }

    fn rebuild_type(
        &self,
        ty: &MetaType<'a>,
        builder: &mut TypeBuilder<'_, 'a>,
    ) -> Result<MetaType<'a>, SchemaError> {
        let mut rebuilt = builder.rebuild_type(ty)?;

        if let MetaType::Object(meta) = &mut rebuilt {
            if let Some(extensions) = self.extensions.get(meta.name.as_str()) {
                for &ext in extensions {
                    extend_object(meta, ext, builder)?;
                }
            }
        }

        Ok(rebuilt)
    }
}

/// Appends the fields and interfaces of `ext` to `meta`.
///
/// Fields and interfaces added by previous extensions count as already
/// present.
fn extend_object<'a>(
    meta: &mut ObjectMeta<'a>,
    ext: &'a Spanning<TypeDefinition<'a>>,
    builder: &mut TypeBuilder<'_, 'a>,
) -> Result<(), SchemaError> {
    let TypeDefinition::Object(def) = &ext.item else {
        return Ok(());
    };

    for field in &def.fields {
        let field_name = field.item.name.item;
        if meta.fields.iter().any(|f| f.name == field_name) {
            return Err(SchemaError::DuplicateField {
                type_name: meta.name.clone(),
                field_name: field_name.into(),
                span: field.span,
            });
        }
        meta.fields.push(builder.build_field(field)?);
    }

    for iface in &def.interfaces {
        if meta.interface_names.iter().any(|n| n == iface.item) {
            return Err(SchemaError::DuplicateInterface {
                type_name: meta.name.clone(),
                interface_name: iface.item.into(),
                span: iface.span,
            });
        }
        meta.interface_names
            .push(builder.build_type(iface.item, Some(iface.span))?);
    }

    meta.extension_ast_nodes.push(ext);

    Ok(())
}
