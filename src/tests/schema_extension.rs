use std::{borrow::Cow, ptr, sync::Arc};

use arcstr::{ArcStr, literal};
use pretty_assertions::assert_eq;

use crate::{
    ast::{Definition, OwnedDocument, Type, TypeDefinition},
    parser::{SourcePosition, Spanning, parse_document_source},
    schema::{
        BuildOptions, build_ast_schema,
        error::SchemaError,
        extend_schema,
        meta::{Field, MetaType, ObjectMeta, Resolver},
        model::{DirectiveLocation, SchemaConfig, SchemaType},
    },
};

const BASE_SCHEMA: &str = r#"
type Query {
  foo: Foo
  node(id: ID!): Node
}

interface Node {
  id: ID!
}

"A foo."
type Foo implements Node {
  id: ID!
  name: String
  tree: [Foo]!
}

type Bar implements Node {
  id: ID!
  foo: Foo
}

union SomeUnion = Foo | Bar

enum SomeEnum {
  ONE
  TWO
}

input SomeInput {
  fooArg: String
}

scalar Date

directive @foo(input: SomeInput) on FIELD
"#;

fn parse(source: &str) -> OwnedDocument<'_> {
    parse_document_source(source).expect("Parse error")
}

fn object<'s, 'a>(schema: &'s SchemaType<'a>, name: &str) -> &'s ObjectMeta<'a> {
    match schema.type_by_name(name) {
        Some(MetaType::Object(o)) => o,
        t => panic!("Expected object `{name}`, found: {t:?}"),
    }
}

fn type_extension<'d, 'a>(def: &'d Definition<'a>) -> &'d Spanning<TypeDefinition<'a>> {
    match def {
        Definition::TypeExtension(ext) => ext,
        d => panic!("Expected type extension, found: {d:?}"),
    }
}

fn field_names(meta: &ObjectMeta<'_>) -> Vec<String> {
    meta.fields.iter().map(|f| f.name.to_string()).collect()
}

fn position(index: usize, line: usize, col: usize) -> SourcePosition {
    SourcePosition::new(index, line, col)
}

#[test]
fn returns_the_original_schema_when_nothing_is_added() {
    let base = parse(BASE_SCHEMA);
    let schema = build_ast_schema(&base, BuildOptions::default()).unwrap();

    let doc = parse("query Q { foo { name } } fragment F on Foo { id }");
    let extended = extend_schema(&schema, &doc, BuildOptions::default()).unwrap();

    assert!(matches!(extended, Cow::Borrowed(_)));
    assert!(ptr::eq(extended.as_ref(), &schema));

    let doc: OwnedDocument<'_> = Vec::new();
    let extended = extend_schema(&schema, &doc, BuildOptions::default()).unwrap();

    assert!(matches!(extended, Cow::Borrowed(_)));
    assert!(ptr::eq(extended.as_ref(), &schema));
}

#[test]
fn extends_objects_by_adding_new_fields() {
    let base = parse(BASE_SCHEMA);
    let schema = build_ast_schema(&base, BuildOptions::default()).unwrap();
    let before = format!("{schema:?}");

    let doc = parse(
        r#"
        extend type Foo {
          "New field."
          newField(arg: SomeEnum = ONE): String @deprecated
        }
        "#,
    );
    let extended = extend_schema(&schema, &doc, BuildOptions::default()).unwrap();

    let foo = object(&extended, "Foo");
    assert_eq!(field_names(foo), ["id", "name", "tree", "newField"]);
    assert_eq!(foo.description.as_deref(), Some("A foo."));
    let new_field = foo.fields.last().unwrap();
    assert_eq!(new_field.description.as_deref(), Some("New field."));
    assert_eq!(new_field.arguments[0].arg_type, Type::Named(literal!("SomeEnum")));
    assert_eq!(
        new_field.deprecation_status.reason(),
        Some("No longer supported"),
    );
    let TypeDefinition::Object(ext) = &type_extension(&doc[0]).item else {
        panic!("Expected object extension");
    };
    assert!(ptr::eq(new_field.ast_node.unwrap(), &ext.fields[0]));
    assert!(ptr::eq(foo.extension_ast_nodes[0], type_extension(&doc[0])));

    assert_eq!(field_names(object(&schema, "Foo")), ["id", "name", "tree"]);
    assert_eq!(format!("{schema:?}"), before);
}

#[test]
fn keeps_every_type_and_root() {
    let base = parse(BASE_SCHEMA);
    let schema = build_ast_schema(&base, BuildOptions::default()).unwrap();

    let doc = parse("extend type Foo { newField: String }");
    let extended = extend_schema(&schema, &doc, BuildOptions::default()).unwrap();

    let mut before = schema
        .type_list()
        .into_iter()
        .map(|t| t.name().to_string())
        .collect::<Vec<_>>();
    let mut after = extended
        .type_list()
        .into_iter()
        .map(|t| t.name().to_string())
        .collect::<Vec<_>>();
    before.sort();
    after.sort();
    assert_eq!(before, after);

    assert_eq!(extended.query_type().name(), "Query");
    assert!(extended.mutation_type().is_none());
    assert!(extended.subscription_type().is_none());
    assert!(matches!(
        extended.type_by_name("SomeEnum"),
        Some(MetaType::Enum(e)) if e.values.len() == 2,
    ));
    assert!(matches!(
        extended.type_by_name("SomeInput"),
        Some(MetaType::InputObject(i)) if i.input_fields[0].name == "fooArg",
    ));
    assert_eq!(
        extended.directive_list().len(),
        schema.directive_list().len(),
    );
}

#[test]
fn every_reference_resolves_to_the_same_type() {
    let base = parse(BASE_SCHEMA);
    let schema = build_ast_schema(&base, BuildOptions::default()).unwrap();

    let doc = parse(
        r#"
        extend type Foo { sibling: Bar }
        type Baz { foos: [Foo!]! }
        extend type Query { baz: Baz }
        "#,
    );
    let extended = extend_schema(&schema, &doc, BuildOptions::default()).unwrap();

    let foo = extended.type_by_name("Foo").unwrap();
    let query = extended.query_type();
    let bar = extended.type_by_name("Bar").unwrap();
    let baz = extended.type_by_name("Baz").unwrap();

    let references = [
        &query.field_by_name("foo").unwrap().field_type,
        &foo.field_by_name("tree").unwrap().field_type,
        &bar.field_by_name("foo").unwrap().field_type,
        &baz.field_by_name("foos").unwrap().field_type,
    ];
    for reference in references {
        let resolved = extended.make_type(reference).unwrap();
        assert!(ptr::eq(resolved.innermost_concrete(), foo));
    }

    let (foo_key, _) = extended.types.get_key_value("Foo").unwrap();
    for reference in references {
        assert!(ArcStr::ptr_eq(reference.innermost_name(), foo_key));
    }
    let Some(MetaType::Union(union)) = extended.type_by_name("SomeUnion") else {
        panic!("SomeUnion is not a union");
    };
    assert!(ArcStr::ptr_eq(&union.of_type_names[0], foo_key));
    let members = extended.possible_types(extended.type_by_name("SomeUnion").unwrap());
    assert!(ptr::eq(members[0], foo));

    let sibling = foo.field_by_name("sibling").unwrap();
    assert!(ptr::eq(
        extended.make_type(&sibling.field_type).unwrap().innermost_concrete(),
        bar,
    ));
}

#[test]
fn adds_new_types_referencing_each_other() {
    let base = parse(BASE_SCHEMA);
    let schema = build_ast_schema(&base, BuildOptions::default()).unwrap();

    let doc = parse(
        r#"
        extend type Foo { bar: NewBar }

        type NewBar {
          foo: Foo
          me: NewBar
          list: [NewBar!]
          other: NewOther
        }

        type NewOther { bar: NewBar }
        "#,
    );
    let extended = extend_schema(&schema, &doc, BuildOptions::default()).unwrap();

    let new_bar = extended.type_by_name("NewBar").unwrap();
    let new_other = extended.type_by_name("NewOther").unwrap();
    let concrete = |meta: &MetaType<'_>, field: &str| {
        extended
            .make_type(&meta.field_by_name(field).unwrap().field_type)
            .unwrap()
            .innermost_concrete()
    };

    assert!(ptr::eq(concrete(new_bar, "me"), new_bar));
    assert!(ptr::eq(concrete(new_bar, "list"), new_bar));
    assert!(ptr::eq(concrete(new_bar, "other"), new_other));
    assert!(ptr::eq(concrete(new_other, "bar"), new_bar));
    assert!(ptr::eq(
        concrete(extended.type_by_name("Foo").unwrap(), "bar"),
        new_bar,
    ));
    assert!(schema.type_by_name("NewBar").is_none());
}

#[test]
fn adds_interfaces_to_objects() {
    let base = parse(BASE_SCHEMA);
    let schema = build_ast_schema(&base, BuildOptions::default()).unwrap();

    let doc = parse(
        r#"
        extend type Foo implements Named {
          title: String
        }

        interface Named {
          title: String
        }
        "#,
    );
    let extended = extend_schema(&schema, &doc, BuildOptions::default()).unwrap();

    let foo = object(&extended, "Foo");
    assert_eq!(foo.interface_names, ["Node", "Named"]);
    let named = extended.type_by_name("Named").unwrap();
    assert!(matches!(named, MetaType::Interface(_)));
    let implementors = extended.possible_types(named);
    assert_eq!(implementors.len(), 1);
    assert!(ptr::eq(implementors[0], extended.type_by_name("Foo").unwrap()));
}

#[test]
fn adds_unions_and_other_kinds() {
    let base = parse(BASE_SCHEMA);
    let schema = build_ast_schema(&base, BuildOptions::default()).unwrap();

    let doc = parse(
        r#"
        type NewObject { when: Date }
        union NewUnion = NewObject | Foo
        enum NewEnum { A B @deprecated(reason: "use A") }
        input NewInput { input: SomeInput, size: Int = 3 }
        scalar NewScalar
        "#,
    );
    let extended = extend_schema(&schema, &doc, BuildOptions::default()).unwrap();

    let new_union = extended.type_by_name("NewUnion").unwrap();
    let members = extended.possible_types(new_union);
    assert_eq!(
        members.iter().map(|t| t.name().as_str()).collect::<Vec<_>>(),
        ["NewObject", "Foo"],
    );
    let Some(MetaType::Enum(new_enum)) = extended.type_by_name("NewEnum") else {
        panic!("NewEnum is not an enum");
    };
    assert_eq!(new_enum.values[1].deprecation_status.reason(), Some("use A"));
    assert!(matches!(
        extended.type_by_name("NewInput"),
        Some(MetaType::InputObject(i)) if i.input_fields[1].default_value.is_some(),
    ));
    assert!(matches!(
        extended.type_by_name("NewScalar"),
        Some(MetaType::Scalar(_)),
    ));
}

#[test]
fn applies_several_extensions_in_order() {
    let base = parse(BASE_SCHEMA);
    let schema = build_ast_schema(&base, BuildOptions::default()).unwrap();

    let doc = parse(
        r#"
        extend type Foo { first: String }
        extend type Foo { second: String }
        "#,
    );
    let extended = extend_schema(&schema, &doc, BuildOptions::default()).unwrap();

    let foo = object(&extended, "Foo");
    assert_eq!(
        field_names(foo),
        ["id", "name", "tree", "first", "second"],
    );
    assert_eq!(foo.extension_ast_nodes.len(), 2);
    assert!(ptr::eq(foo.ast_node.unwrap(), object(&schema, "Foo").ast_node.unwrap()));
}

#[test]
fn records_empty_extensions() {
    let base = parse(BASE_SCHEMA);
    let schema = build_ast_schema(&base, BuildOptions::default()).unwrap();

    let doc = parse("extend type Foo");
    let extended = extend_schema(&schema, &doc, BuildOptions::default()).unwrap();

    assert!(matches!(extended, Cow::Owned(_)));
    let foo = object(&extended, "Foo");
    assert_eq!(field_names(foo), ["id", "name", "tree"]);
    assert_eq!(foo.extension_ast_nodes.len(), 1);
    assert!(object(&schema, "Foo").extension_ast_nodes.is_empty());
}

#[test]
fn keeps_extension_nodes_across_extensions() {
    let base = parse(BASE_SCHEMA);
    let schema = build_ast_schema(&base, BuildOptions::default()).unwrap();

    let first = parse("extend type Foo { first: String }");
    let extended = extend_schema(&schema, &first, BuildOptions::default()).unwrap();
    let second = parse("extend type Foo { second: String }");
    let extended = extend_schema(&extended, &second, BuildOptions::default()).unwrap();

    let foo = object(&extended, "Foo");
    assert_eq!(field_names(foo), ["id", "name", "tree", "first", "second"]);
    assert_eq!(foo.extension_ast_nodes.len(), 2);
    assert!(ptr::eq(foo.extension_ast_nodes[0], type_extension(&first[0])));
    assert!(ptr::eq(foo.extension_ast_nodes[1], type_extension(&second[0])));
}

#[test]
fn ignores_extensions_of_other_kinds() {
    let base = parse(BASE_SCHEMA);
    let schema = build_ast_schema(&base, BuildOptions::default()).unwrap();

    let doc = parse(
        r#"
        extend interface Node { name: String }
        extend enum SomeEnum { THREE }
        extend schema { mutation: Query }
        "#,
    );
    let extended = extend_schema(&schema, &doc, BuildOptions::default()).unwrap();

    assert!(ptr::eq(extended.as_ref(), &schema));
}

#[test]
fn adds_new_directives() {
    let base = parse(BASE_SCHEMA);
    let schema = build_ast_schema(&base, BuildOptions::default()).unwrap();

    let doc = parse(
        r#"
        "Neat."
        directive @neat(level: Int = 1) on QUERY | FIELD_DEFINITION
        "#,
    );
    let extended = extend_schema(&schema, &doc, BuildOptions::default()).unwrap();

    let names = extended
        .directive_list()
        .into_iter()
        .map(|d| d.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, ["foo", "skip", "include", "deprecated", "neat"]);

    let neat = extended.directive_by_name("neat").unwrap();
    assert_eq!(neat.description.as_deref(), Some("Neat."));
    assert_eq!(
        neat.locations,
        [DirectiveLocation::Query, DirectiveLocation::FieldDefinition],
    );
    assert!(schema.directive_by_name("neat").is_none());

    let foo = extended.directive_by_name("foo").unwrap();
    assert!(ptr::eq(
        foo.ast_node.unwrap(),
        schema.directive_by_name("foo").unwrap().ast_node.unwrap(),
    ));
}

#[test]
fn hands_resolvers_over_to_the_new_schema() {
    let resolver: Resolver = Arc::new("foo resolver");
    let is_type_of: Resolver = Arc::new(42_u8);
    let schema = SchemaType::new(
        SchemaConfig::new("Query").r#type(
            ObjectMeta::new(
                "Query",
                &[Field::new("foo", Type::Named(literal!("String"))).resolver(resolver.clone())],
            )
            .is_type_of(is_type_of.clone())
            .into_meta(),
        ),
    )
    .unwrap();

    let doc = parse("extend type Query { bar: Int }");
    let extended = extend_schema(&schema, &doc, BuildOptions::default()).unwrap();

    let query = object(&extended, "Query");
    let foo = &query.fields[0];
    assert!(Arc::ptr_eq(foo.resolver.as_ref().unwrap(), &resolver));
    assert!(Arc::ptr_eq(query.is_type_of.as_ref().unwrap(), &is_type_of));
    assert_eq!(
        foo.resolver.as_ref().unwrap().downcast_ref::<&str>(),
        Some(&"foo resolver"),
    );
    assert!(query.fields[1].resolver.is_none());
    assert!(query.ast_node.is_none());
}

#[test]
fn uses_comment_descriptions_when_asked_to() {
    let base = parse(BASE_SCHEMA);
    let schema = build_ast_schema(&base, BuildOptions::default()).unwrap();

    let doc = parse(
        r#"
        # A commented type.
        type Commented { a: String }
        "#,
    );

    let extended = extend_schema(&schema, &doc, BuildOptions::default()).unwrap();
    assert!(extended.type_by_name("Commented").unwrap().description().is_none());

    let options = BuildOptions::default().comment_descriptions(true);
    let extended = extend_schema(&schema, &doc, options).unwrap();
    assert_eq!(
        extended
            .type_by_name("Commented")
            .unwrap()
            .description()
            .map(ArcStr::as_str),
        Some("A commented type."),
    );
}

mod errors {
    use pretty_assertions::assert_eq;

    use super::{BASE_SCHEMA, parse, position};
    use crate::schema::{BuildOptions, build_ast_schema, error::SchemaError, extend_schema};

    fn extend_err(source: &str) -> SchemaError {
        let base = parse(BASE_SCHEMA);
        let schema = build_ast_schema(&base, BuildOptions::default()).unwrap();
        let doc = parse(source);

        extend_schema(&schema, &doc, BuildOptions::default()).unwrap_err()
    }

    #[test]
    fn type_already_in_the_schema() {
        let err = extend_err("type Bar { baz: String }");

        assert!(matches!(&err, SchemaError::DuplicateType { name, .. } if name == "Bar"));
        assert_eq!(
            err.to_string(),
            "Type \"Bar\" already exists in the schema. \
             It cannot also be defined in this type definition.",
        );
        assert_eq!(err.locations(), [position(0, 0, 0)]);
    }

    #[test]
    fn extension_of_unknown_type() {
        let err = extend_err("extend type Unknown { baz: String }");

        assert_eq!(
            err.to_string(),
            "Cannot extend type \"Unknown\" because it does not exist in the existing schema.",
        );
        assert_eq!(err.locations(), [position(0, 0, 0)]);
    }

    #[test]
    fn extension_of_non_object_type() {
        for name in ["Node", "SomeUnion", "SomeEnum", "SomeInput", "Date"] {
            let err = extend_err(&format!("extend type {name} {{ baz: String }}"));

            assert_eq!(
                err.to_string(),
                format!("Cannot extend non-object type \"{name}\"."),
            );
        }
    }

    #[test]
    fn directive_already_in_the_schema() {
        for name in ["foo", "skip", "deprecated"] {
            let err = extend_err(&format!("directive @{name} on FIELD"));

            assert_eq!(
                err.to_string(),
                format!(
                    "Directive \"{name}\" already exists in the schema. It cannot be redefined.",
                ),
            );
            assert_eq!(err.locations(), [position(0, 0, 0)]);
        }
    }

    #[test]
    fn field_already_in_the_type() {
        let err = extend_err("extend type Foo { name: String }");

        assert_eq!(
            err.to_string(),
            "Field \"Foo.name\" already exists in the schema. \
             It cannot also be defined in this type extension.",
        );
        assert_eq!(err.locations(), [position(18, 0, 18)]);
    }

    #[test]
    fn field_added_by_a_previous_extension() {
        let err = extend_err("extend type Foo { a: String }\nextend type Foo { a: Int }");

        assert!(matches!(
            &err,
            SchemaError::DuplicateField { type_name, field_name, .. }
                if type_name == "Foo" && field_name == "a",
        ));
        assert_eq!(err.locations(), [position(48, 1, 18)]);
    }

    #[test]
    fn interface_already_implemented() {
        let err = extend_err("extend type Foo implements Node");

        assert_eq!(
            err.to_string(),
            "Type \"Foo\" already implements \"Node\". \
             It cannot also be implemented in this type extension.",
        );
        assert_eq!(err.locations(), [position(27, 0, 27)]);
    }

    #[test]
    fn unknown_type_reference() {
        let err = extend_err("extend type Foo { a: Missing }");

        assert_eq!(
            err.to_string(),
            "Unknown type: \"Missing\". Ensure that this type exists either in the original \
             schema, or is added in a type definition.",
        );
        assert_eq!(err.locations(), [position(21, 0, 21)]);
    }

    #[test]
    fn unknown_type_reference_in_new_type() {
        let err = extend_err("type New { list: [Missing!] }");

        assert!(matches!(&err, SchemaError::UnknownType { name, .. } if name == "Missing"));
        assert_eq!(err.locations(), [position(17, 0, 17)]);
    }

    #[test]
    fn type_defined_twice_in_the_document() {
        let err = extend_err("type New { a: String }\ntype New { b: String }");

        assert!(matches!(
            &err,
            SchemaError::TypeDefinedMoreThanOnce { name, .. } if name == "New",
        ));
        assert_eq!(err.locations(), [position(23, 1, 0)]);
    }

    #[test]
    fn first_conflict_wins() {
        let err = extend_err("extend type Unknown { a: String }\ndirective @foo on FIELD");

        assert!(matches!(err, SchemaError::UnknownExtensionTarget { .. }));
    }
}

#[test]
fn errors_do_not_touch_the_original_schema() {
    let base = parse(BASE_SCHEMA);
    let schema = build_ast_schema(&base, BuildOptions::default()).unwrap();
    let before = format!("{schema:?}");

    let doc = parse("extend type Foo { a: String }\nextend type Foo { a: Int }");
    let err = extend_schema(&schema, &doc, BuildOptions::default()).unwrap_err();

    assert!(matches!(err, SchemaError::DuplicateField { .. }));
    assert_eq!(format!("{schema:?}"), before);
}
