use pretty_assertions::assert_eq;

use crate::{
    parser::{SourcePosition, parse_document_source},
    schema::{BuildOptions, build_ast_schema},
    validation::{DirectiveRegistry, RuleError, validate_document},
};

fn messages(errors: &[RuleError]) -> Vec<&str> {
    errors.iter().map(RuleError::message).collect()
}

#[test]
fn type_system_document_with_its_own_directives() {
    let doc = parse_document_source(
        "directive @key(fields: String!) on OBJECT\n\
         type Query @key(fields: \"id\") { id: ID! @key(fields: \"x\") @unknown }",
    )
    .unwrap();
    let registry = DirectiveRegistry::specified().with_document(&doc);

    let errors = validate_document(&registry, &doc);

    assert_eq!(
        errors,
        [
            RuleError::new(
                r#"Directive "key" may not be used on FIELD_DEFINITION."#,
                &[SourcePosition::new(82, 1, 40)],
            ),
            RuleError::new(
                r#"Unknown directive "unknown"."#,
                &[SourcePosition::new(100, 1, 58)],
            ),
        ],
    );
}

#[test]
fn directives_defined_after_their_use() {
    let doc = parse_document_source(
        r#"
        type Query @later { a: Int }

        directive @later on OBJECT
        "#,
    )
    .unwrap();
    let registry = DirectiveRegistry::specified().with_document(&doc);

    assert!(validate_document(&registry, &doc).is_empty());
}

#[test]
fn specified_directives_only() {
    let doc = parse_document_source(
        r#"
        type Query {
          a: Int @deprecated
          b: Int @key
        }

        enum Unit {
          METER @deprecated(reason: "Too precise.")
          FOOT @skip(if: true)
        }
        "#,
    )
    .unwrap();
    let registry = DirectiveRegistry::specified();

    assert_eq!(
        messages(&validate_document(&registry, &doc)),
        [
            r#"Unknown directive "key"."#,
            r#"Directive "skip" may not be used on ENUM_VALUE."#,
        ],
    );
}

#[test]
fn executable_document_against_a_schema() {
    let schema_doc = parse_document_source(
        r#"
        directive @cached(ttl: Int) on FIELD | FRAGMENT_SPREAD

        type Query {
          a: Int
          b: Int
        }
        "#,
    )
    .unwrap();
    let schema = build_ast_schema(&schema_doc, BuildOptions::default()).unwrap();
    let registry = DirectiveRegistry::from_schema(&schema);

    let doc = parse_document_source(
        "query Q @cached { a @cached(ttl: 5) ...F @cached }\n\
         fragment F on Query @cached { b @include(if: true) }",
    )
    .unwrap();
    let errors = validate_document(&registry, &doc);

    assert_eq!(
        errors,
        [
            RuleError::new(
                r#"Directive "cached" may not be used on QUERY."#,
                &[SourcePosition::new(8, 0, 8)],
            ),
            RuleError::new(
                r#"Directive "cached" may not be used on FRAGMENT_DEFINITION."#,
                &[SourcePosition::new(71, 1, 20)],
            ),
        ],
    );
}

#[test]
fn errors_follow_document_order() {
    let doc = parse_document_source(
        r#"
        schema @a { query: Query }

        scalar Date @b

        type Query @c {
          field(arg: Int @d): Int @e
        }

        input Filter @f { value: Int @g }
        "#,
    )
    .unwrap();
    let registry = DirectiveRegistry::specified();

    let errors = validate_document(&registry, &doc);

    assert_eq!(
        messages(&errors),
        ["a", "b", "c", "d", "e", "f", "g"]
            .map(|name| format!(r#"Unknown directive "{name}"."#)),
    );
    assert!(
        errors
            .windows(2)
            .all(|w| w[0].locations()[0] < w[1].locations()[0])
    );
}

#[test]
fn valid_documents_have_no_errors() {
    let doc = parse_document_source(
        r#"
        query Q($skip: Boolean!) {
          a @skip(if: $skip)
          ... on Query @include(if: true) { b }
        }

        type Query {
          a: Int @deprecated(reason: "Use `b`.")
          b: Int
        }
        "#,
    )
    .unwrap();
    let registry = DirectiveRegistry::specified();

    assert!(validate_document(&registry, &doc).is_empty());
}

#[test]
fn error_display() {
    let doc = parse_document_source("{\n  a @unknown\n}").unwrap();
    let registry = DirectiveRegistry::specified();

    let errors = validate_document(&registry, &doc);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), r#"Unknown directive "unknown". At 1:4"#);
}
