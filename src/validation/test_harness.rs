use crate::{
    parser::parse_document_source,
    schema::{BuildOptions, build_ast_schema},
    validation::{DirectiveRegistry, MultiVisitorNil, RuleError, ValidatorContext, Visitor, visit},
};

/// Schema declaring one directive per location, on top of a few types to
/// select from.
const TEST_SCHEMA: &str = r#"
directive @onQuery on QUERY
directive @onMutation on MUTATION
directive @onSubscription on SUBSCRIPTION
directive @onField on FIELD
directive @onFragmentDefinition on FRAGMENT_DEFINITION
directive @onFragmentSpread on FRAGMENT_SPREAD
directive @onInlineFragment on INLINE_FRAGMENT
directive @onVariableDefinition on VARIABLE_DEFINITION
directive @onSchema on SCHEMA
directive @onScalar on SCALAR
directive @onObject on OBJECT
directive @onFieldDefinition on FIELD_DEFINITION
directive @onArgumentDefinition on ARGUMENT_DEFINITION
directive @onInterface on INTERFACE
directive @onUnion on UNION
directive @onEnum on ENUM
directive @onEnumValue on ENUM_VALUE
directive @onInputObject on INPUT_OBJECT
directive @onInputFieldDefinition on INPUT_FIELD_DEFINITION

interface Being {
  name(surname: Boolean): String
}

interface Pet {
  name(surname: Boolean): String
}

enum DogCommand {
  SIT
  HEEL
  DOWN
}

type Dog implements Being & Pet {
  name(surname: Boolean): String
  nickname: String
  barkVolume: Int
  barks: Boolean
  doesKnowCommand(dogCommand: DogCommand): Boolean
  isHousetrained(atOtherHomes: Boolean = true): Boolean
}

type Human implements Being {
  name(surname: Boolean): String
  pets: [Pet]
  relatives: [Human]
}

type QueryRoot {
  human(id: ID): Human
  dog: Dog
}

type MutationRoot {
  testInput(input: String): String
}

type SubscriptionRoot {
  dogs: [Dog]
}

schema {
  query: QueryRoot
  mutation: MutationRoot
  subscription: SubscriptionRoot
}
"#;

pub fn validate<F, V>(factory: F, q: &str) -> Vec<RuleError>
where
    F: Fn() -> V,
    V: for<'v> Visitor<'v>,
{
    let schema_doc = parse_document_source(TEST_SCHEMA).expect("Parse error on test schema");
    let schema =
        build_ast_schema(&schema_doc, BuildOptions::default()).expect("Invalid test schema");
    let registry = DirectiveRegistry::from_schema(&schema);

    let doc = parse_document_source(q).expect(&format!("Parse error on input {q:#?}"));
    let mut ctx = ValidatorContext::new(&registry);

    let mut mv = MultiVisitorNil.with(factory());
    visit(&mut mv, &mut ctx, &doc);

    ctx.into_errors()
}

pub fn expect_passes_rule<F, V>(factory: F, q: &str)
where
    F: Fn() -> V,
    V: for<'v> Visitor<'v>,
{
    let errs = validate(factory, q);

    if !errs.is_empty() {
        print_errors(&errs);
        panic!("Expected rule to pass, but errors found");
    }
}

pub fn expect_fails_rule<F, V>(factory: F, q: &str, expected_errors: &[RuleError])
where
    F: Fn() -> V,
    V: for<'v> Visitor<'v>,
{
    let errs = validate(factory, q);

    if errs.is_empty() {
        panic!("Expected rule to fail, but no errors were found");
    } else if errs != expected_errors {
        println!("==> Expected errors:");
        print_errors(expected_errors);

        println!("\n==> Actual errors:");
        print_errors(&errs);

        panic!("Unexpected set of errors found");
    }
}

fn print_errors(errs: &[RuleError]) {
    for err in errs {
        for p in err.locations() {
            print!("[{:>3},{:>3},{:>3}]  ", p.index(), p.line(), p.column());
        }
        println!("{}", err.message());
    }
}
