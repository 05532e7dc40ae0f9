use crate::{
    ast::{
        Directive, DirectiveDefinition, Document, EnumValueDefinition, Field, FieldDefinition,
        Fragment, FragmentSpread, InlineFragment, InputValue, InputValueDefinition, Operation,
        SchemaDefinition, Selection, TypeDefinition, VariableDefinition,
    },
    parser::Spanning,
    validation::{ValidatorContext, Visitor},
};

#[doc(hidden)]
pub struct MultiVisitorNil;

impl MultiVisitorNil {
    pub fn with<V>(self, visitor: V) -> MultiVisitorCons<V, Self> {
        MultiVisitorCons(visitor, self)
    }
}

#[doc(hidden)]
pub struct MultiVisitorCons<A, B>(A, B);

impl<A, B> MultiVisitorCons<A, B> {
    pub fn with<V>(self, visitor: V) -> MultiVisitorCons<V, Self> {
        MultiVisitorCons(visitor, self)
    }
}

impl<'a> Visitor<'a> for MultiVisitorNil {}

impl<'a, A, B> Visitor<'a> for MultiVisitorCons<A, B>
where
    A: Visitor<'a> + 'a,
    B: Visitor<'a> + 'a,
{
    fn enter_document(&mut self, ctx: &mut ValidatorContext<'a>, doc: &'a Document<'a>) {
        self.0.enter_document(ctx, doc);
        self.1.enter_document(ctx, doc);
    }
    fn exit_document(&mut self, ctx: &mut ValidatorContext<'a>, doc: &'a Document<'a>) {
        self.0.exit_document(ctx, doc);
        self.1.exit_document(ctx, doc);
    }

    fn enter_operation_definition(
        &mut self,
        ctx: &mut ValidatorContext<'a>,
        op: &'a Spanning<Operation<'a>>,
    ) {
        self.0.enter_operation_definition(ctx, op);
        self.1.enter_operation_definition(ctx, op);
    }
    fn exit_operation_definition(
        &mut self,
        ctx: &mut ValidatorContext<'a>,
        op: &'a Spanning<Operation<'a>>,
    ) {
        self.0.exit_operation_definition(ctx, op);
        self.1.exit_operation_definition(ctx, op);
    }

    fn enter_fragment_definition(
        &mut self,
        ctx: &mut ValidatorContext<'a>,
        f: &'a Spanning<Fragment<'a>>,
    ) {
        self.0.enter_fragment_definition(ctx, f);
        self.1.enter_fragment_definition(ctx, f);
    }
    fn exit_fragment_definition(
        &mut self,
        ctx: &mut ValidatorContext<'a>,
        f: &'a Spanning<Fragment<'a>>,
    ) {
        self.0.exit_fragment_definition(ctx, f);
        self.1.exit_fragment_definition(ctx, f);
    }

    fn enter_variable_definition(
        &mut self,
        ctx: &mut ValidatorContext<'a>,
        def: &'a (Spanning<&'a str>, VariableDefinition<'a>),
    ) {
        self.0.enter_variable_definition(ctx, def);
        self.1.enter_variable_definition(ctx, def);
    }
    fn exit_variable_definition(
        &mut self,
        ctx: &mut ValidatorContext<'a>,
        def: &'a (Spanning<&'a str>, VariableDefinition<'a>),
    ) {
        self.0.exit_variable_definition(ctx, def);
        self.1.exit_variable_definition(ctx, def);
    }

    fn enter_directive(&mut self, ctx: &mut ValidatorContext<'a>, d: &'a Spanning<Directive<'a>>) {
        self.0.enter_directive(ctx, d);
        self.1.enter_directive(ctx, d);
    }
    fn exit_directive(&mut self, ctx: &mut ValidatorContext<'a>, d: &'a Spanning<Directive<'a>>) {
        self.0.exit_directive(ctx, d);
        self.1.exit_directive(ctx, d);
    }

    fn enter_argument(
        &mut self,
        ctx: &mut ValidatorContext<'a>,
        arg: &'a (Spanning<&'a str>, Spanning<InputValue>),
    ) {
        self.0.enter_argument(ctx, arg);
        self.1.enter_argument(ctx, arg);
    }
    fn exit_argument(
        &mut self,
        ctx: &mut ValidatorContext<'a>,
        arg: &'a (Spanning<&'a str>, Spanning<InputValue>),
    ) {
        self.0.exit_argument(ctx, arg);
        self.1.exit_argument(ctx, arg);
    }

    fn enter_selection_set(&mut self, ctx: &mut ValidatorContext<'a>, s: &'a [Selection<'a>]) {
        self.0.enter_selection_set(ctx, s);
        self.1.enter_selection_set(ctx, s);
    }
    fn exit_selection_set(&mut self, ctx: &mut ValidatorContext<'a>, s: &'a [Selection<'a>]) {
        self.0.exit_selection_set(ctx, s);
        self.1.exit_selection_set(ctx, s);
    }

    fn enter_field(&mut self, ctx: &mut ValidatorContext<'a>, f: &'a Spanning<Field<'a>>) {
        self.0.enter_field(ctx, f);
        self.1.enter_field(ctx, f);
    }
    fn exit_field(&mut self, ctx: &mut ValidatorContext<'a>, f: &'a Spanning<Field<'a>>) {
        self.0.exit_field(ctx, f);
        self.1.exit_field(ctx, f);
    }

    fn enter_fragment_spread(
        &mut self,
        ctx: &mut ValidatorContext<'a>,
        s: &'a Spanning<FragmentSpread<'a>>,
    ) {
        self.0.enter_fragment_spread(ctx, s);
        self.1.enter_fragment_spread(ctx, s);
    }
    fn exit_fragment_spread(
        &mut self,
        ctx: &mut ValidatorContext<'a>,
        s: &'a Spanning<FragmentSpread<'a>>,
    ) {
        self.0.exit_fragment_spread(ctx, s);
        self.1.exit_fragment_spread(ctx, s);
    }

    fn enter_inline_fragment(
        &mut self,
        ctx: &mut ValidatorContext<'a>,
        f: &'a Spanning<InlineFragment<'a>>,
    ) {
        self.0.enter_inline_fragment(ctx, f);
        self.1.enter_inline_fragment(ctx, f);
    }
    fn exit_inline_fragment(
        &mut self,
        ctx: &mut ValidatorContext<'a>,
        f: &'a Spanning<InlineFragment<'a>>,
    ) {
        self.0.exit_inline_fragment(ctx, f);
        self.1.exit_inline_fragment(ctx, f);
    }

    fn enter_schema_definition(
        &mut self,
        ctx: &mut ValidatorContext<'a>,
        s: &'a Spanning<SchemaDefinition<'a>>,
    ) {
        self.0.enter_schema_definition(ctx, s);
        self.1.enter_schema_definition(ctx, s);
    }
    fn exit_schema_definition(
        &mut self,
        ctx: &mut ValidatorContext<'a>,
        s: &'a Spanning<SchemaDefinition<'a>>,
    ) {
        self.0.exit_schema_definition(ctx, s);
        self.1.exit_schema_definition(ctx, s);
    }

    fn enter_type_definition(
        &mut self,
        ctx: &mut ValidatorContext<'a>,
        t: &'a Spanning<TypeDefinition<'a>>,
    ) {
        self.0.enter_type_definition(ctx, t);
        self.1.enter_type_definition(ctx, t);
    }
    fn exit_type_definition(
        &mut self,
        ctx: &mut ValidatorContext<'a>,
        t: &'a Spanning<TypeDefinition<'a>>,
    ) {
        self.0.exit_type_definition(ctx, t);
        self.1.exit_type_definition(ctx, t);
    }

    fn enter_field_definition(
        &mut self,
        ctx: &mut ValidatorContext<'a>,
        f: &'a Spanning<FieldDefinition<'a>>,
    ) {
        self.0.enter_field_definition(ctx, f);
        self.1.enter_field_definition(ctx, f);
    }
    fn exit_field_definition(
        &mut self,
        ctx: &mut ValidatorContext<'a>,
        f: &'a Spanning<FieldDefinition<'a>>,
    ) {
        self.0.exit_field_definition(ctx, f);
        self.1.exit_field_definition(ctx, f);
    }

    fn enter_argument_definition(
        &mut self,
        ctx: &mut ValidatorContext<'a>,
        arg: &'a Spanning<InputValueDefinition<'a>>,
    ) {
        self.0.enter_argument_definition(ctx, arg);
        self.1.enter_argument_definition(ctx, arg);
    }
    fn exit_argument_definition(
        &mut self,
        ctx: &mut ValidatorContext<'a>,
        arg: &'a Spanning<InputValueDefinition<'a>>,
    ) {
        self.0.exit_argument_definition(ctx, arg);
        self.1.exit_argument_definition(ctx, arg);
    }

    fn enter_input_field_definition(
        &mut self,
        ctx: &mut ValidatorContext<'a>,
        f: &'a Spanning<InputValueDefinition<'a>>,
    ) {
        self.0.enter_input_field_definition(ctx, f);
        self.1.enter_input_field_definition(ctx, f);
    }
    fn exit_input_field_definition(
        &mut self,
        ctx: &mut ValidatorContext<'a>,
        f: &'a Spanning<InputValueDefinition<'a>>,
    ) {
        self.0.exit_input_field_definition(ctx, f);
        self.1.exit_input_field_definition(ctx, f);
    }

    fn enter_enum_value_definition(
        &mut self,
        ctx: &mut ValidatorContext<'a>,
        v: &'a Spanning<EnumValueDefinition<'a>>,
    ) {
        self.0.enter_enum_value_definition(ctx, v);
        self.1.enter_enum_value_definition(ctx, v);
    }
    fn exit_enum_value_definition(
        &mut self,
        ctx: &mut ValidatorContext<'a>,
        v: &'a Spanning<EnumValueDefinition<'a>>,
    ) {
        self.0.exit_enum_value_definition(ctx, v);
        self.1.exit_enum_value_definition(ctx, v);
    }

    fn enter_directive_definition(
        &mut self,
        ctx: &mut ValidatorContext<'a>,
        d: &'a Spanning<DirectiveDefinition<'a>>,
    ) {
        self.0.enter_directive_definition(ctx, d);
        self.1.enter_directive_definition(ctx, d);
    }
    fn exit_directive_definition(
        &mut self,
        ctx: &mut ValidatorContext<'a>,
        d: &'a Spanning<DirectiveDefinition<'a>>,
    ) {
        self.0.exit_directive_definition(ctx, d);
        self.1.exit_directive_definition(ctx, d);
    }
}
