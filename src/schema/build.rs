use fnv::FnvHashMap;

use crate::{
    ast::{Definition, Document, OperationType},
    schema::{
        builder::{BuildOptions, ExistingTypes, TypeBuilder},
        error::SchemaError,
        meta::{MetaType, ScalarMeta},
        model::{SchemaConfig, SchemaType},
    },
};

/// Types a document may reference without defining them.
struct SpecifiedScalars<'a>([MetaType<'a>; 5]);

impl<'a> ExistingTypes<'a> for SpecifiedScalars<'a> {
    fn existing_type(&self, name: &str) -> Option<&MetaType<'a>> {
        self.0.iter().find(|t| t.name() == name)
    }
}

/// Builds a new [`SchemaType`] out of the type system definitions of
/// `document`.
///
/// Executable definitions and type extensions are ignored. Without a `schema`
/// definition, the types named `Query`, `Mutation` and `Subscription` become
/// the roots.
///
/// # Errors
///
/// If the document defines a type or a directive twice, has several `schema`
/// definitions, lacks a query root, or references an undefined type.
pub fn build_ast_schema<'a>(
    document: &'a Document<'a>,
    options: BuildOptions,
) -> Result<SchemaType<'a>, SchemaError> {
    __sdl_span_trace!("build_ast_schema");

    let mut schema_def = None;
    let mut definitions = FnvHashMap::default();
    let mut type_names = vec![];
    let mut directive_defs = vec![];

    for def in document {
        match def {
            Definition::Schema(s) => {
                if schema_def.replace(s).is_some() {
                    return Err(SchemaError::MultipleSchemaDefinitions { span: s.span });
                }
            }
            Definition::Type(t) => {
                let name = t.item.name().item;
                if definitions.insert(name, t).is_some() {
                    return Err(SchemaError::TypeDefinedMoreThanOnce {
                        name: name.into(),
                        span: Some(t.span),
                    });
                }
                type_names.push(name);
            }
            Definition::Directive(d) => directive_defs.push(d),
            Definition::Operation(_)
            | Definition::Fragment(_)
            | Definition::SchemaExtension(_)
            | Definition::TypeExtension(_) => {}
        }
    }

    let mut roots = [None, None, None];
    match schema_def {
        Some(s) => {
            for op in &s.item.operation_types {
                let slot = &mut roots[match op.item.operation_type.item {
                    OperationType::Query => 0,
                    OperationType::Mutation => 1,
                    OperationType::Subscription => 2,
                }];
                if slot.is_some() {
                    return Err(SchemaError::DuplicateOperationType {
                        operation: op.item.operation_type.item,
                        span: op.span,
                    });
                }
                *slot = Some((op.item.type_name.item, Some(op.item.type_name.span)));
            }
        }
        None => {
            for (slot, name) in roots.iter_mut().zip(["Query", "Mutation", "Subscription"]) {
                if definitions.contains_key(name) {
                    *slot = Some((name, None));
                }
            }
        }
    }
    let [query, mutation, subscription] = roots;
    let query = query.ok_or(SchemaError::MissingQueryType)?;

    let existing = SpecifiedScalars(ScalarMeta::specified().map(ScalarMeta::into_meta));
    let mut builder = TypeBuilder::new(definitions, &existing, options);

    for name in type_names {
        builder.build_type(name, None)?;
    }
    let query = builder.build_type(query.0, query.1)?;
    let mutation = mutation
        .map(|(name, span)| builder.build_type(name, span))
        .transpose()?;
    let subscription = subscription
        .map(|(name, span)| builder.build_type(name, span))
        .transpose()?;

    let directives = directive_defs
        .into_iter()
        .map(|d| builder.build_directive(d))
        .collect::<Result<Vec<_>, _>>()?;

    let types = builder.finish()?;

    let schema = SchemaType::new(SchemaConfig {
        query,
        mutation,
        subscription,
        types: types.into_values().collect(),
        directives,
        ast_node: schema_def,
    })?;

    __sdl_trace_debug!(
        "built schema with {} types and {} directives",
        schema.types.len(),
        schema.directives.len(),
    );

    Ok(schema)
}
