use crate::{
    ast::{
        Arguments, Definition, Directive, Document, EnumValueDefinition, Field, FieldDefinition,
        FragmentSpread, InlineFragment, InputValueDefinition, Selection, TypeDefinition,
        VariableDefinitions,
    },
    parser::Spanning,
    validation::{ValidatorContext, Visitor},
};

/// Walks `d` depth-first, calling the hooks of `v` in source order.
///
/// The directives of a node are visited after what precedes them in the
/// source (arguments, variable definitions) and before its children
/// (selections, fields, values).
#[doc(hidden)]
pub fn visit<'a, V: Visitor<'a>>(v: &mut V, ctx: &mut ValidatorContext<'a>, d: &'a Document<'a>) {
    v.enter_document(ctx, d);
    visit_definitions(v, ctx, d);
    v.exit_document(ctx, d);
}

fn visit_definitions<'a, V: Visitor<'a>>(
    v: &mut V,
    ctx: &mut ValidatorContext<'a>,
    d: &'a [Definition<'a>],
) {
    for def in d {
        enter_definition(v, ctx, def);
        visit_definition(v, ctx, def);
        exit_definition(v, ctx, def);
    }
}

fn enter_definition<'a, V: Visitor<'a>>(
    v: &mut V,
    ctx: &mut ValidatorContext<'a>,
    def: &'a Definition<'a>,
) {
    match def {
        Definition::Operation(op) => v.enter_operation_definition(ctx, op),
        Definition::Fragment(f) => v.enter_fragment_definition(ctx, f),
        Definition::Schema(s) | Definition::SchemaExtension(s) => {
            v.enter_schema_definition(ctx, s)
        }
        Definition::Type(t) | Definition::TypeExtension(t) => v.enter_type_definition(ctx, t),
        Definition::Directive(d) => v.enter_directive_definition(ctx, d),
    }
}

fn exit_definition<'a, V: Visitor<'a>>(
    v: &mut V,
    ctx: &mut ValidatorContext<'a>,
    def: &'a Definition<'a>,
) {
    match def {
        Definition::Operation(op) => v.exit_operation_definition(ctx, op),
        Definition::Fragment(f) => v.exit_fragment_definition(ctx, f),
        Definition::Schema(s) | Definition::SchemaExtension(s) => v.exit_schema_definition(ctx, s),
        Definition::Type(t) | Definition::TypeExtension(t) => v.exit_type_definition(ctx, t),
        Definition::Directive(d) => v.exit_directive_definition(ctx, d),
    }
}

fn visit_definition<'a, V: Visitor<'a>>(
    v: &mut V,
    ctx: &mut ValidatorContext<'a>,
    def: &'a Definition<'a>,
) {
    match def {
        Definition::Operation(op) => {
            visit_variable_definitions(v, ctx, &op.item.variable_definitions);
            visit_directives(v, ctx, &op.item.directives);
            visit_selection_set(v, ctx, &op.item.selection_set);
        }
        Definition::Fragment(f) => {
            visit_directives(v, ctx, &f.item.directives);
            visit_selection_set(v, ctx, &f.item.selection_set);
        }
        Definition::Schema(s) | Definition::SchemaExtension(s) => {
            visit_directives(v, ctx, &s.item.directives);
        }
        Definition::Type(t) | Definition::TypeExtension(t) => {
            visit_type_definition(v, ctx, &t.item);
        }
        Definition::Directive(d) => {
            visit_argument_definitions(v, ctx, &d.item.arguments);
        }
    }
}

fn visit_type_definition<'a, V: Visitor<'a>>(
    v: &mut V,
    ctx: &mut ValidatorContext<'a>,
    def: &'a TypeDefinition<'a>,
) {
    match def {
        TypeDefinition::Scalar(s) => visit_directives(v, ctx, &s.directives),
        TypeDefinition::Object(o) => {
            visit_directives(v, ctx, &o.directives);
            visit_field_definitions(v, ctx, &o.fields);
        }
        TypeDefinition::Interface(i) => {
            visit_directives(v, ctx, &i.directives);
            visit_field_definitions(v, ctx, &i.fields);
        }
        TypeDefinition::Union(u) => visit_directives(v, ctx, &u.directives),
        TypeDefinition::Enum(e) => {
            visit_directives(v, ctx, &e.directives);
            for value in &e.values {
                visit_enum_value_definition(v, ctx, value);
            }
        }
        TypeDefinition::InputObject(i) => {
            visit_directives(v, ctx, &i.directives);
            for field in &i.fields {
                v.enter_input_field_definition(ctx, field);
                visit_directives(v, ctx, &field.item.directives);
                v.exit_input_field_definition(ctx, field);
            }
        }
    }
}

fn visit_field_definitions<'a, V: Visitor<'a>>(
    v: &mut V,
    ctx: &mut ValidatorContext<'a>,
    fields: &'a [Spanning<FieldDefinition<'a>>],
) {
    for field in fields {
        v.enter_field_definition(ctx, field);

        visit_argument_definitions(v, ctx, &field.item.arguments);
        visit_directives(v, ctx, &field.item.directives);

        v.exit_field_definition(ctx, field);
    }
}

fn visit_argument_definitions<'a, V: Visitor<'a>>(
    v: &mut V,
    ctx: &mut ValidatorContext<'a>,
    arguments: &'a [Spanning<InputValueDefinition<'a>>],
) {
    for arg in arguments {
        v.enter_argument_definition(ctx, arg);
        visit_directives(v, ctx, &arg.item.directives);
        v.exit_argument_definition(ctx, arg);
    }
}

fn visit_enum_value_definition<'a, V: Visitor<'a>>(
    v: &mut V,
    ctx: &mut ValidatorContext<'a>,
    value: &'a Spanning<EnumValueDefinition<'a>>,
) {
    v.enter_enum_value_definition(ctx, value);
    visit_directives(v, ctx, &value.item.directives);
    v.exit_enum_value_definition(ctx, value);
}

fn visit_variable_definitions<'a, V: Visitor<'a>>(
    v: &mut V,
    ctx: &mut ValidatorContext<'a>,
    defs: &'a Option<Spanning<VariableDefinitions<'a>>>,
) {
    if let Some(defs) = defs {
        for def in defs.item.iter() {
            v.enter_variable_definition(ctx, def);
            visit_directives(v, ctx, &def.1.directives);
            v.exit_variable_definition(ctx, def);
        }
    }
}

fn visit_directives<'a, V: Visitor<'a>>(
    v: &mut V,
    ctx: &mut ValidatorContext<'a>,
    directives: &'a Option<Vec<Spanning<Directive<'a>>>>,
) {
    if let Some(directives) = directives {
        for directive in directives {
            v.enter_directive(ctx, directive);
            visit_arguments(v, ctx, &directive.item.arguments);
            v.exit_directive(ctx, directive);
        }
    }
}

fn visit_arguments<'a, V: Visitor<'a>>(
    v: &mut V,
    ctx: &mut ValidatorContext<'a>,
    arguments: &'a Option<Spanning<Arguments<'a>>>,
) {
    if let Some(arguments) = arguments {
        for argument in arguments.item.iter() {
            v.enter_argument(ctx, argument);
            v.exit_argument(ctx, argument);
        }
    }
}

fn visit_selection_set<'a, V: Visitor<'a>>(
    v: &mut V,
    ctx: &mut ValidatorContext<'a>,
    selection_set: &'a [Selection<'a>],
) {
    v.enter_selection_set(ctx, selection_set);

    for selection in selection_set {
        visit_selection(v, ctx, selection);
    }

    v.exit_selection_set(ctx, selection_set);
}

fn visit_selection<'a, V: Visitor<'a>>(
    v: &mut V,
    ctx: &mut ValidatorContext<'a>,
    selection: &'a Selection<'a>,
) {
    match selection {
        Selection::Field(field) => visit_field(v, ctx, field),
        Selection::FragmentSpread(spread) => visit_fragment_spread(v, ctx, spread),
        Selection::InlineFragment(fragment) => visit_inline_fragment(v, ctx, fragment),
    }
}

fn visit_field<'a, V: Visitor<'a>>(
    v: &mut V,
    ctx: &mut ValidatorContext<'a>,
    field: &'a Spanning<Field<'a>>,
) {
    v.enter_field(ctx, field);

    visit_arguments(v, ctx, &field.item.arguments);
    visit_directives(v, ctx, &field.item.directives);

    if let Some(selection_set) = &field.item.selection_set {
        visit_selection_set(v, ctx, selection_set);
    }

    v.exit_field(ctx, field);
}

fn visit_fragment_spread<'a, V: Visitor<'a>>(
    v: &mut V,
    ctx: &mut ValidatorContext<'a>,
    spread: &'a Spanning<FragmentSpread<'a>>,
) {
    v.enter_fragment_spread(ctx, spread);

    visit_directives(v, ctx, &spread.item.directives);

    v.exit_fragment_spread(ctx, spread);
}

fn visit_inline_fragment<'a, V: Visitor<'a>>(
    v: &mut V,
    ctx: &mut ValidatorContext<'a>,
    fragment: &'a Spanning<InlineFragment<'a>>,
) {
    v.enter_inline_fragment(ctx, fragment);

    visit_directives(v, ctx, &fragment.item.directives);
    visit_selection_set(v, ctx, &fragment.item.selection_set);

    v.exit_inline_fragment(ctx, fragment);
}
