use crate::{
    ast::{
        Directive, EnumValueDefinition, Field, FieldDefinition, Fragment, FragmentSpread,
        InlineFragment, InputValueDefinition, Operation, SchemaDefinition, TypeDefinition,
        VariableDefinition,
    },
    parser::Spanning,
    schema::model::DirectiveLocation,
    validation::{NodeKind, ValidatorContext, Visitor, directive_location},
};

pub struct KnownDirectives {
    ancestors: Vec<NodeKind>,
}

pub fn factory() -> KnownDirectives {
    KnownDirectives {
        ancestors: Vec::new(),
    }
}

impl KnownDirectives {
    fn enter(&mut self, kind: NodeKind) {
        self.ancestors.push(kind);
    }

    fn exit(&mut self, kind: NodeKind) {
        let top = self.ancestors.pop();
        assert_eq!(top, Some(kind), "internal error: unbalanced node stack");
    }
}

impl<'a> Visitor<'a> for KnownDirectives {
    fn enter_operation_definition(
        &mut self,
        _: &mut ValidatorContext<'a>,
        op: &'a Spanning<Operation<'a>>,
    ) {
        self.enter(NodeKind::Operation(op.item.operation_type));
    }
    fn exit_operation_definition(
        &mut self,
        _: &mut ValidatorContext<'a>,
        op: &'a Spanning<Operation<'a>>,
    ) {
        self.exit(NodeKind::Operation(op.item.operation_type));
    }

    fn enter_field(&mut self, _: &mut ValidatorContext<'a>, _: &'a Spanning<Field<'a>>) {
        self.enter(NodeKind::Field);
    }
    fn exit_field(&mut self, _: &mut ValidatorContext<'a>, _: &'a Spanning<Field<'a>>) {
        self.exit(NodeKind::Field);
    }

    fn enter_fragment_definition(
        &mut self,
        _: &mut ValidatorContext<'a>,
        _: &'a Spanning<Fragment<'a>>,
    ) {
        self.enter(NodeKind::FragmentDefinition);
    }
    fn exit_fragment_definition(
        &mut self,
        _: &mut ValidatorContext<'a>,
        _: &'a Spanning<Fragment<'a>>,
    ) {
        self.exit(NodeKind::FragmentDefinition);
    }

    fn enter_fragment_spread(
        &mut self,
        _: &mut ValidatorContext<'a>,
        _: &'a Spanning<FragmentSpread<'a>>,
    ) {
        self.enter(NodeKind::FragmentSpread);
    }
    fn exit_fragment_spread(
        &mut self,
        _: &mut ValidatorContext<'a>,
        _: &'a Spanning<FragmentSpread<'a>>,
    ) {
        self.exit(NodeKind::FragmentSpread);
    }

    fn enter_inline_fragment(
        &mut self,
        _: &mut ValidatorContext<'a>,
        _: &'a Spanning<InlineFragment<'a>>,
    ) {
        self.enter(NodeKind::InlineFragment);
    }
    fn exit_inline_fragment(
        &mut self,
        _: &mut ValidatorContext<'a>,
        _: &'a Spanning<InlineFragment<'a>>,
    ) {
        self.exit(NodeKind::InlineFragment);
    }

    fn enter_variable_definition(
        &mut self,
        _: &mut ValidatorContext<'a>,
        _: &'a (Spanning<&'a str>, VariableDefinition<'a>),
    ) {
        self.enter(NodeKind::VariableDefinition);
    }
    fn exit_variable_definition(
        &mut self,
        _: &mut ValidatorContext<'a>,
        _: &'a (Spanning<&'a str>, VariableDefinition<'a>),
    ) {
        self.exit(NodeKind::VariableDefinition);
    }

    fn enter_schema_definition(
        &mut self,
        _: &mut ValidatorContext<'a>,
        _: &'a Spanning<SchemaDefinition<'a>>,
    ) {
        self.enter(NodeKind::Schema);
    }
    fn exit_schema_definition(
        &mut self,
        _: &mut ValidatorContext<'a>,
        _: &'a Spanning<SchemaDefinition<'a>>,
    ) {
        self.exit(NodeKind::Schema);
    }

    fn enter_type_definition(
        &mut self,
        _: &mut ValidatorContext<'a>,
        def: &'a Spanning<TypeDefinition<'a>>,
    ) {
        self.enter(NodeKind::of_type_definition(&def.item));
    }
    fn exit_type_definition(
        &mut self,
        _: &mut ValidatorContext<'a>,
        def: &'a Spanning<TypeDefinition<'a>>,
    ) {
        self.exit(NodeKind::of_type_definition(&def.item));
    }

    fn enter_field_definition(
        &mut self,
        _: &mut ValidatorContext<'a>,
        _: &'a Spanning<FieldDefinition<'a>>,
    ) {
        self.enter(NodeKind::FieldDefinition);
    }
    fn exit_field_definition(
        &mut self,
        _: &mut ValidatorContext<'a>,
        _: &'a Spanning<FieldDefinition<'a>>,
    ) {
        self.exit(NodeKind::FieldDefinition);
    }

    fn enter_argument_definition(
        &mut self,
        _: &mut ValidatorContext<'a>,
        _: &'a Spanning<InputValueDefinition<'a>>,
    ) {
        self.enter(NodeKind::ArgumentDefinition);
    }
    fn exit_argument_definition(
        &mut self,
        _: &mut ValidatorContext<'a>,
        _: &'a Spanning<InputValueDefinition<'a>>,
    ) {
        self.exit(NodeKind::ArgumentDefinition);
    }

    fn enter_input_field_definition(
        &mut self,
        _: &mut ValidatorContext<'a>,
        _: &'a Spanning<InputValueDefinition<'a>>,
    ) {
        self.enter(NodeKind::InputFieldDefinition);
    }
    fn exit_input_field_definition(
        &mut self,
        _: &mut ValidatorContext<'a>,
        _: &'a Spanning<InputValueDefinition<'a>>,
    ) {
        self.exit(NodeKind::InputFieldDefinition);
    }

    fn enter_enum_value_definition(
        &mut self,
        _: &mut ValidatorContext<'a>,
        _: &'a Spanning<EnumValueDefinition<'a>>,
    ) {
        self.enter(NodeKind::EnumValue);
    }
    fn exit_enum_value_definition(
        &mut self,
        _: &mut ValidatorContext<'a>,
        _: &'a Spanning<EnumValueDefinition<'a>>,
    ) {
        self.exit(NodeKind::EnumValue);
    }

    fn enter_directive(
        &mut self,
        ctx: &mut ValidatorContext<'a>,
        directive: &'a Spanning<Directive<'a>>,
    ) {
        let directive_name = directive.item.name.item;
        let directives = ctx.directives;

        let Some(directive_type) = directives.directive_by_name(directive_name) else {
            ctx.report_error(
                &unknown_error_message(directive_name),
                &[directive.span.start],
            );
            return;
        };

        // Directives are only visited below the node carrying them.
        let kind = self.ancestors.last().copied().unwrap_or(NodeKind::Document);
        let location = directive_location(kind);
        if !directive_type.is_allowed_at(location) {
            ctx.report_error(
                &misplaced_error_message(directive_name, location),
                &[directive.span.start],
            );
        }
    }
}

fn unknown_error_message(directive_name: &str) -> String {
    format!(r#"Unknown directive "{directive_name}"."#)
}

fn misplaced_error_message(directive_name: &str, location: DirectiveLocation) -> String {
    format!(r#"Directive "{directive_name}" may not be used on {location}."#)
}
