use std::ptr;

use arcstr::ArcStr;
use pretty_assertions::assert_eq;

use crate::{
    ast::{OperationType, OwnedDocument},
    parser::{SourcePosition, parse_document_source},
    schema::{
        BuildOptions, build_ast_schema,
        error::SchemaError,
        meta::{DeprecationStatus, MetaType},
    },
};

fn parse(source: &str) -> OwnedDocument<'_> {
    parse_document_source(source).expect("Parse error")
}

fn build_error(source: &str) -> SchemaError {
    let doc = parse(source);
    match build_ast_schema(&doc, BuildOptions::default()) {
        Ok(_) => panic!("expected {source:?} to be rejected"),
        Err(e) => e,
    }
}

fn error_position(err: &SchemaError) -> Option<SourcePosition> {
    err.span().map(|s| s.start)
}

#[test]
fn uses_the_schema_definition_roots() {
    let doc = parse(
        r#"
        schema {
          query: Root
          mutation: Change
        }

        type Root { a: Int }
        type Change { b: Int }
        type Query { c: Int }
        "#,
    );
    let schema = build_ast_schema(&doc, BuildOptions::default()).unwrap();

    assert_eq!(schema.query_type().name(), "Root");
    assert_eq!(schema.mutation_type().map(MetaType::name).unwrap(), "Change");
    assert!(schema.subscription_type().is_none());
    assert!(schema.ast_node().is_some());
    assert!(schema.type_by_name("Query").is_some());
}

#[test]
fn defaults_to_conventionally_named_roots() {
    let doc = parse(
        r#"
        type Query { a: Int }
        type Mutation { b: Int }
        type Subscription { c: Int }
        "#,
    );
    let schema = build_ast_schema(&doc, BuildOptions::default()).unwrap();

    assert_eq!(schema.query_type().name(), "Query");
    assert_eq!(schema.mutation_type().map(MetaType::name).unwrap(), "Mutation");
    assert_eq!(
        schema.subscription_type().map(MetaType::name).unwrap(),
        "Subscription",
    );
    assert!(schema.ast_node().is_none());
}

#[test]
fn always_has_specified_scalars_and_directives() {
    let doc = parse("type Query { a: Int }");
    let schema = build_ast_schema(&doc, BuildOptions::default()).unwrap();

    for name in ["Int", "Float", "String", "Boolean", "ID"] {
        assert!(
            matches!(schema.type_by_name(name), Some(MetaType::Scalar(_))),
            "missing scalar {name}",
        );
    }
    let directives = schema
        .directive_list()
        .into_iter()
        .map(|d| d.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(directives, ["skip", "include", "deprecated"]);
}

#[test]
fn keeps_document_directives_first() {
    let doc = parse(
        r#"
        directive @key(fields: String!) on OBJECT | INTERFACE

        type Query @key(fields: "a") { a: Int }
        "#,
    );
    let schema = build_ast_schema(&doc, BuildOptions::default()).unwrap();

    let directives = schema
        .directive_list()
        .into_iter()
        .map(|d| d.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(directives, ["key", "skip", "include", "deprecated"]);

    let key = schema.directive_by_name("key").unwrap();
    assert!(key.ast_node.is_some());
    assert_eq!(key.arguments.len(), 1);
    assert_eq!(key.arguments[0].arg_type.to_string(), "String!");
}

#[test]
fn ignores_executable_definitions_and_extensions() {
    let doc = parse(
        r#"
        type Query { a: Int }

        extend type Query { b: Int }

        query Named { a }

        fragment frag on Query { a }
        "#,
    );
    let schema = build_ast_schema(&doc, BuildOptions::default()).unwrap();

    let MetaType::Object(query) = schema.query_type() else {
        panic!("query root is not an object");
    };
    let fields = query
        .fields
        .iter()
        .map(|f| f.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(fields, ["a"]);
    assert!(query.extension_ast_nodes.is_empty());
}

#[test]
fn resolves_self_references() {
    let doc = parse(
        r#"
        type Query {
          me: Query
          friends: [Query!]!
        }
        "#,
    );
    let schema = build_ast_schema(&doc, BuildOptions::default()).unwrap();
    let query = schema.query_type();

    for name in ["me", "friends"] {
        let field = query.field_by_name(name).unwrap();
        let resolved = schema.make_type(&field.field_type).unwrap();
        assert!(ptr::eq(resolved.innermost_concrete(), query));
    }
}

#[test]
fn reads_descriptions_and_deprecations() {
    let doc = parse(
        r#"
        # The root.
        type Query {
          "Literal."
          a: Int @deprecated(reason: "Use `b`.")
          b: Int
        }

        enum Unit {
          METER
          FOOT @deprecated
        }
        "#,
    );

    let schema = build_ast_schema(&doc, BuildOptions::default()).unwrap();
    assert_eq!(schema.query_type().description(), None);
    let a = schema.query_type().field_by_name("a").unwrap();
    assert_eq!(a.description.as_deref(), Some("Literal."));
    assert_eq!(
        a.deprecation_status,
        DeprecationStatus::Deprecated(Some(ArcStr::from("Use `b`."))),
    );

    let Some(MetaType::Enum(unit)) = schema.type_by_name("Unit") else {
        panic!("missing enum");
    };
    assert!(!unit.values[0].deprecation_status.is_deprecated());
    assert_eq!(
        unit.values[1].deprecation_status.reason(),
        Some("No longer supported"),
    );

    let schema = build_ast_schema(&doc, BuildOptions::default().comment_descriptions(true))
        .unwrap();
    assert_eq!(
        schema.query_type().description().map(ArcStr::as_str),
        Some("The root."),
    );
}

mod errors {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn multiple_schema_definitions() {
        let err = build_error(
            "schema { query: Query }\nschema { query: Query }\ntype Query { a: Int }",
        );

        assert!(matches!(err, SchemaError::MultipleSchemaDefinitions { .. }));
        assert_eq!(error_position(&err), Some(SourcePosition::new(24, 1, 0)));
        assert_eq!(err.to_string(), "Must provide only one schema definition.");
    }

    #[test]
    fn duplicate_operation_type() {
        let err = build_error("schema { query: Query query: Other } type Query { a: Int }");

        assert!(matches!(
            err,
            SchemaError::DuplicateOperationType {
                operation: OperationType::Query,
                ..
            },
        ));
        assert_eq!(error_position(&err), Some(SourcePosition::new(22, 0, 22)));
        assert_eq!(
            err.to_string(),
            "Must provide only one query type in schema.",
        );
    }

    #[test]
    fn missing_query_type() {
        let err = build_error("type Foo { a: Int }");
        assert_eq!(err, SchemaError::MissingQueryType);
        assert!(err.locations().is_empty());

        let err = build_error("schema { mutation: Foo } type Foo { a: Int }");
        assert_eq!(err, SchemaError::MissingQueryType);
    }

    #[test]
    fn root_of_wrong_kind() {
        let err = build_error("schema { query: Foo } enum Foo { A }");

        assert_eq!(
            err,
            SchemaError::WrongTypeKind {
                name: "Foo".into(),
                expected: "object",
                found: "enum",
                span: None,
            },
        );
        assert_eq!(
            err.to_string(),
            "Type \"Foo\" must be of kind object, found enum.",
        );
    }

    #[test]
    fn implemented_non_interface() {
        let err = build_error("type Query implements Foo { a: Int } enum Foo { A }");

        assert!(matches!(
            err,
            SchemaError::WrongTypeKind {
                expected: "interface",
                found: "enum",
                ..
            },
        ));
    }

    #[test]
    fn type_defined_more_than_once() {
        let err = build_error("type Query { a: Int }\ntype Query { b: Int }");

        assert!(matches!(
            &err,
            SchemaError::TypeDefinedMoreThanOnce { name, .. } if name == "Query",
        ));
        assert_eq!(error_position(&err), Some(SourcePosition::new(22, 1, 0)));
    }

    #[test]
    fn directive_defined_more_than_once() {
        let err = build_error(
            "directive @a on FIELD\ndirective @a on FIELD\ntype Query { a: Int }",
        );

        assert!(matches!(
            &err,
            SchemaError::DirectiveDefinedMoreThanOnce { name, .. } if name == "a",
        ));
        assert_eq!(error_position(&err), Some(SourcePosition::new(22, 1, 0)));
    }

    #[test]
    fn unknown_type_reference() {
        let err = build_error("type Query { a: Missing }");

        assert!(matches!(
            &err,
            SchemaError::UnknownType { name, .. } if name == "Missing",
        ));
        assert_eq!(error_position(&err), Some(SourcePosition::new(16, 0, 16)));
    }
}
