use arcstr::ArcStr;

use crate::{
    ast::{Definition, Description, Document},
    schema::{
        meta::Argument,
        model::{DirectiveType, FnvIndexMap, SchemaType},
    },
};

/// Directives known while validating a document, by name.
///
/// Built out of a schema for executable documents, or out of the specified
/// directives (plus the ones a type system document defines itself) when no
/// schema exists yet.
#[derive(Clone, Debug)]
pub struct DirectiveRegistry<'a> {
    directives: FnvIndexMap<ArcStr, DirectiveType<'a>>,
}

impl<'a> DirectiveRegistry<'a> {
    /// Registry of the directives every schema supports: `@skip`, `@include`
    /// and `@deprecated`.
    pub fn specified() -> Self {
        Self {
            directives: DirectiveType::specified()
                .into_iter()
                .map(|d| (d.name.clone(), d))
                .collect(),
        }
    }

    /// Registry of the directives of `schema`.
    pub fn from_schema(schema: &SchemaType<'a>) -> Self {
        Self {
            directives: FnvIndexMap::default(),
        }
        .with_schema(schema)
    }

    /// Adds the directives of `schema`, replacing the ones with the same
    /// name.
    #[must_use]
    pub fn with_schema(mut self, schema: &SchemaType<'a>) -> Self {
        for d in schema.directive_list() {
            self.directives.insert(d.name.clone(), d.clone());
        }
        self
    }

    /// Adds the directives defined in `document`, replacing the ones with the
    /// same name.
    ///
    /// Argument types are taken as written: they are not checked to exist.
    #[must_use]
    pub fn with_document(mut self, document: &'a Document<'a>) -> Self {
        for def in document {
            let Definition::Directive(def) = def else {
                continue;
            };
            let directive = &def.item;
            let name = ArcStr::from(directive.name.item);
            let arguments = directive
                .arguments
                .iter()
                .map(|arg| Argument {
                    name: arg.item.name.item.into(),
                    description: literal_description(&arg.item.description),
                    arg_type: arg.item.value_type.item.map_name(|&n| ArcStr::from(n)),
                    default_value: arg.item.default_value.as_ref().map(|v| v.item.clone()),
                    ast_node: Some(arg),
                })
                .collect();
            let directive = DirectiveType {
                name: name.clone(),
                description: literal_description(&directive.description),
                locations: directive.locations.iter().map(|l| l.item).collect(),
                arguments,
                ast_node: Some(def),
            };
            self.directives.insert(name, directive);
        }
        self
    }

    /// Looks a directive up by its name.
    pub fn directive_by_name(&self, name: &str) -> Option<&DirectiveType<'a>> {
        self.directives.get(name)
    }

    /// Iterates over the known directives, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &DirectiveType<'a>> {
        self.directives.values()
    }

    /// Number of known directives.
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    /// Checks whether no directive is known at all.
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }
}

fn literal_description(description: &Description) -> Option<ArcStr> {
    description.literal.as_ref().map(|s| s.item.as_str().into())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::DirectiveRegistry;
    use crate::{
        parser::parse_document_source,
        schema::{BuildOptions, build_ast_schema, model::DirectiveLocation},
    };

    #[test]
    fn specified_directives() {
        let registry = DirectiveRegistry::specified();

        assert_eq!(
            registry.iter().map(|d| d.name.as_str()).collect::<Vec<_>>(),
            ["skip", "include", "deprecated"],
        );
        assert!(registry.directive_by_name("unknown").is_none());
    }

    #[test]
    fn from_schema_keeps_every_directive() {
        let doc = parse_document_source(
            r#"
            directive @onField on FIELD
            type Query { field: String }
            "#,
        )
        .expect("Parse error");
        let schema = build_ast_schema(&doc, BuildOptions::default()).expect("Invalid schema");

        let registry = DirectiveRegistry::from_schema(&schema);

        assert_eq!(registry.len(), 4);
        let on_field = registry
            .directive_by_name("onField")
            .expect("No onField directive");
        assert!(on_field.is_allowed_at(DirectiveLocation::Field));
        assert!(on_field.ast_node.is_some());
    }

    #[test]
    fn with_document_adds_defined_directives() {
        let doc = parse_document_source(
            r#"
            "Marks a key field."
            directive @key(fields: [String!]! = []) on OBJECT | INTERFACE
            "#,
        )
        .expect("Parse error");

        let registry = DirectiveRegistry::specified().with_document(&doc);

        assert_eq!(registry.len(), 4);
        let key = registry.directive_by_name("key").expect("No key directive");
        assert_eq!(key.description.as_deref(), Some("Marks a key field."));
        assert_eq!(
            key.locations,
            [DirectiveLocation::Object, DirectiveLocation::Interface],
        );
        assert_eq!(key.arguments.len(), 1);
        assert_eq!(key.arguments[0].arg_type.to_string(), "[String!]!");
        assert!(key.arguments[0].default_value.is_some());
    }
}
