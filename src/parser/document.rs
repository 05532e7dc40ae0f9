use compact_str::CompactString;

use crate::{
    ast::{
        Arguments, Definition, Description, Directive, DirectiveDefinition, EnumTypeDefinition,
        EnumValueDefinition, Field, FieldDefinition, Fragment, FragmentSpread, InlineFragment,
        InputObjectTypeDefinition, InputValue, InputValueDefinition, InterfaceTypeDefinition,
        ObjectTypeDefinition, Operation, OperationType, OperationTypeDefinition, OwnedDocument,
        ScalarTypeDefinition, SchemaDefinition, Selection, Type, TypeDefinition,
        UnionTypeDefinition, VariableDefinition, VariableDefinitions,
    },
    parser::{
        Lexer, OptionParseResult, ParseError, ParseResult, Parser, ScalarToken, SourcePosition,
        Spanning, Token, UnlocatedParseResult,
        value::{parse_value_literal, string_value},
    },
    schema::model::DirectiveLocation,
};

/// Parses a document mixing executable and type system definitions.
pub fn parse_document_source(s: &str) -> UnlocatedParseResult<OwnedDocument<'_>> {
    let mut lexer = Lexer::new(s);
    let mut parser = Parser::new(&mut lexer, s).map_err(|s| s.map(ParseError::LexerError))?;
    parse_document(&mut parser)
}

fn parse_document<'a>(parser: &mut Parser<'a>) -> UnlocatedParseResult<OwnedDocument<'a>> {
    let mut defs = Vec::new();

    loop {
        defs.push(parse_definition(parser)?);

        if parser.peek().item == Token::EndOfFile {
            return Ok(defs);
        }
    }
}

fn parse_definition<'a>(parser: &mut Parser<'a>) -> UnlocatedParseResult<Definition<'a>> {
    match parser.peek().item {
        Token::CurlyOpen
        | Token::Name("query")
        | Token::Name("mutation")
        | Token::Name("subscription") => {
            Ok(Definition::Operation(parse_operation_definition(parser)?))
        }
        Token::Name("fragment") => Ok(Definition::Fragment(parse_fragment_definition(parser)?)),
        Token::Name("extend") => parse_type_system_extension(parser),
        Token::Scalar(ScalarToken::String(_))
        | Token::Name("schema")
        | Token::Name("scalar")
        | Token::Name("type")
        | Token::Name("interface")
        | Token::Name("union")
        | Token::Name("enum")
        | Token::Name("input")
        | Token::Name("directive") => parse_type_system_definition(parser),
        _ => Err(parser.next_token()?.map(ParseError::unexpected_token)),
    }
}

fn parse_operation_definition<'a>(parser: &mut Parser<'a>) -> ParseResult<Operation<'a>> {
    if parser.peek().item == Token::CurlyOpen {
        let selection_set = parse_selection_set(parser)?;

        Ok(Spanning::new(
            selection_set.span,
            Operation {
                operation_type: OperationType::Query,
                name: None,
                variable_definitions: None,
                directives: None,
                selection_set: selection_set.item,
            },
        ))
    } else {
        let start_pos = parser.peek().span.start;
        let operation_type = parse_operation_type(parser)?;
        let name = match parser.peek().item {
            Token::Name(_) => Some(parser.expect_name()?),
            _ => None,
        };
        let variable_definitions = parse_variable_definitions(parser)?;
        let directives = parse_directives(parser)?;
        let selection_set = parse_selection_set(parser)?;

        Ok(Spanning::start_end(
            &start_pos,
            &selection_set.span.end,
            Operation {
                operation_type: operation_type.item,
                name,
                variable_definitions,
                directives: directives.map(|s| s.item),
                selection_set: selection_set.item,
            },
        ))
    }
}

fn parse_fragment_definition<'a>(parser: &mut Parser<'a>) -> ParseResult<Fragment<'a>> {
    let start_pos = parser.expect(&Token::Name("fragment"))?.span.start;
    let name = parser.expect_name()?;
    if name.item == "on" {
        return Err(name.map(|_| ParseError::UnexpectedToken("on".into())));
    }

    parser.expect(&Token::Name("on"))?;
    let type_cond = parser.expect_name()?;

    let directives = parse_directives(parser)?;
    let selection_set = parse_selection_set(parser)?;

    Ok(Spanning::start_end(
        &start_pos,
        &selection_set.span.end,
        Fragment {
            name,
            type_condition: type_cond,
            directives: directives.map(|s| s.item),
            selection_set: selection_set.item,
        },
    ))
}

fn parse_optional_selection_set<'a>(
    parser: &mut Parser<'a>,
) -> OptionParseResult<Vec<Selection<'a>>> {
    if parser.peek().item == Token::CurlyOpen {
        Ok(Some(parse_selection_set(parser)?))
    } else {
        Ok(None)
    }
}

fn parse_selection_set<'a>(parser: &mut Parser<'a>) -> ParseResult<Vec<Selection<'a>>> {
    parser.unlocated_delimited_nonempty_list(&Token::CurlyOpen, parse_selection, &Token::CurlyClose)
}

fn parse_selection<'a>(parser: &mut Parser<'a>) -> UnlocatedParseResult<Selection<'a>> {
    match parser.peek().item {
        Token::Ellipsis => parse_fragment(parser),
        _ => parse_field(parser).map(Selection::Field),
    }
}

fn parse_fragment<'a>(parser: &mut Parser<'a>) -> UnlocatedParseResult<Selection<'a>> {
    let start_pos = parser.expect(&Token::Ellipsis)?.span.start;

    match parser.peek().item {
        Token::Name("on") => {
            parser.next_token()?;
            let name = parser.expect_name()?;
            let directives = parse_directives(parser)?;
            let selection_set = parse_selection_set(parser)?;

            Ok(Selection::InlineFragment(Spanning::start_end(
                &start_pos,
                &selection_set.span.end,
                InlineFragment {
                    type_condition: Some(name),
                    directives: directives.map(|s| s.item),
                    selection_set: selection_set.item,
                },
            )))
        }
        Token::CurlyOpen | Token::At => {
            let directives = parse_directives(parser)?;
            let selection_set = parse_selection_set(parser)?;

            Ok(Selection::InlineFragment(Spanning::start_end(
                &start_pos,
                &selection_set.span.end,
                InlineFragment {
                    type_condition: None,
                    directives: directives.map(|s| s.item),
                    selection_set: selection_set.item,
                },
            )))
        }
        Token::Name(_) => {
            let frag_name = parser.expect_name()?;
            let directives = parse_directives(parser)?;

            Ok(Selection::FragmentSpread(Spanning::start_end(
                &start_pos,
                &directives
                    .as_ref()
                    .map_or(frag_name.span.end, |s| s.span.end),
                FragmentSpread {
                    name: frag_name,
                    directives: directives.map(|s| s.item),
                },
            )))
        }
        _ => Err(parser.next_token()?.map(ParseError::unexpected_token)),
    }
}

fn parse_field<'a>(parser: &mut Parser<'a>) -> ParseResult<Field<'a>> {
    let first = parser.expect_name()?;

    let (alias, name) = if parser.peek().item == Token::Colon {
        parser.next_token()?;
        (Some(first), parser.expect_name()?)
    } else {
        (None, first)
    };

    let arguments = parse_arguments(parser)?;
    let directives = parse_directives(parser)?;
    let selection_set = parse_optional_selection_set(parser)?;

    Ok(Spanning::start_end(
        &alias.as_ref().unwrap_or(&name).span.start,
        &selection_set
            .as_ref()
            .map(|s| s.span.end)
            .or_else(|| directives.as_ref().map(|s| s.span.end))
            .or_else(|| arguments.as_ref().map(|s| s.span.end))
            .unwrap_or(name.span.end),
        Field {
            alias,
            name,
            arguments,
            directives: directives.map(|s| s.item),
            selection_set: selection_set.map(|s| s.item),
        },
    ))
}

fn parse_arguments<'a>(parser: &mut Parser<'a>) -> OptionParseResult<Arguments<'a>> {
    if parser.peek().item != Token::ParenOpen {
        Ok(None)
    } else {
        Ok(Some(
            parser
                .delimited_nonempty_list(&Token::ParenOpen, parse_argument, &Token::ParenClose)?
                .map(|args| Arguments {
                    items: args.into_iter().map(|s| s.item).collect(),
                }),
        ))
    }
}

fn parse_argument<'a>(
    parser: &mut Parser<'a>,
) -> ParseResult<(Spanning<&'a str>, Spanning<InputValue>)> {
    let name = parser.expect_name()?;
    parser.expect(&Token::Colon)?;
    let value = parse_value_literal(parser, false)?;
    let end = value.span.end;

    Ok(Spanning::start_end(&name.span.start, &end, (name, value)))
}

fn parse_operation_type(parser: &mut Parser<'_>) -> ParseResult<OperationType> {
    match parser.peek().item {
        Token::Name("query") => Ok(parser.next_token()?.map(|_| OperationType::Query)),
        Token::Name("mutation") => Ok(parser.next_token()?.map(|_| OperationType::Mutation)),
        Token::Name("subscription") => {
            Ok(parser.next_token()?.map(|_| OperationType::Subscription))
        }
        _ => Err(parser.next_token()?.map(ParseError::unexpected_token)),
    }
}

fn parse_variable_definitions<'a>(
    parser: &mut Parser<'a>,
) -> OptionParseResult<VariableDefinitions<'a>> {
    if parser.peek().item != Token::ParenOpen {
        Ok(None)
    } else {
        Ok(Some(
            parser
                .delimited_nonempty_list(
                    &Token::ParenOpen,
                    parse_variable_definition,
                    &Token::ParenClose,
                )?
                .map(|defs| VariableDefinitions {
                    items: defs.into_iter().map(|s| s.item).collect(),
                }),
        ))
    }
}

fn parse_variable_definition<'a>(
    parser: &mut Parser<'a>,
) -> ParseResult<(Spanning<&'a str>, VariableDefinition<'a>)> {
    let start_pos = parser.expect(&Token::Dollar)?.span.start;
    let var_name = parser.expect_name()?;
    parser.expect(&Token::Colon)?;
    let var_type = parse_type(parser)?;

    let default_value = if parser.skip(&Token::Equals)?.is_some() {
        Some(parse_value_literal(parser, true)?)
    } else {
        None
    };

    let directives = parse_directives(parser)?;

    Ok(Spanning::start_end(
        &start_pos,
        &directives
            .as_ref()
            .map(|s| s.span.end)
            .or_else(|| default_value.as_ref().map(|s| s.span.end))
            .unwrap_or(var_type.span.end),
        (
            Spanning::start_end(&start_pos, &var_name.span.end, var_name.item),
            VariableDefinition {
                var_type,
                default_value,
                directives: directives.map(|s| s.item),
            },
        ),
    ))
}

fn parse_directives<'a>(parser: &mut Parser<'a>) -> OptionParseResult<Vec<Spanning<Directive<'a>>>> {
    if parser.peek().item != Token::At {
        Ok(None)
    } else {
        let mut items = Vec::new();
        while parser.peek().item == Token::At {
            items.push(parse_directive(parser)?);
        }

        Ok(Spanning::spanning(items))
    }
}

fn parse_directive<'a>(parser: &mut Parser<'a>) -> ParseResult<Directive<'a>> {
    let start_pos = parser.expect(&Token::At)?.span.start;
    let name = parser.expect_name()?;
    let arguments = parse_arguments(parser)?;

    Ok(Spanning::start_end(
        &start_pos,
        &arguments.as_ref().map_or(name.span.end, |s| s.span.end),
        Directive { name, arguments },
    ))
}

pub(crate) fn parse_type<'a>(parser: &mut Parser<'a>) -> ParseResult<Type<&'a str>> {
    let parsed_type = if let Some(Spanning {
        span: ref start_span,
        ..
    }) = parser.skip(&Token::BracketOpen)?
    {
        let inner_type = parse_type(parser)?;
        let end_pos = parser.expect(&Token::BracketClose)?.span.end;
        Spanning::start_end(
            &start_span.start,
            &end_pos,
            Type::List(Box::new(inner_type.item)),
        )
    } else {
        parser.expect_name()?.map(Type::Named)
    };

    Ok(match *parser.peek() {
        Spanning {
            item: Token::ExclamationMark,
            ..
        } => wrap_non_null(parser, parsed_type)?,
        _ => parsed_type,
    })
}

fn wrap_non_null<'a>(
    parser: &mut Parser<'a>,
    inner: Spanning<Type<&'a str>>,
) -> ParseResult<Type<&'a str>> {
    let end_pos = &parser.expect(&Token::ExclamationMark)?.span.end;

    let wrapped = match inner.item {
        Type::Named(name) => Type::NonNullNamed(name),
        Type::List(l) => Type::NonNullList(l),
        t => t,
    };

    Ok(Spanning::start_end(&inner.span.start, end_pos, wrapped))
}

/// Position right after the last consumed token.
fn last_end(parser: &Parser<'_>, fallback: SourcePosition) -> SourcePosition {
    parser.previous_end().unwrap_or(fallback)
}

/// Parses an optional description literal, along with the leading `#`
/// comment block found above it.
fn parse_description(parser: &mut Parser<'_>) -> UnlocatedParseResult<Description> {
    let comment = parser.leading_comment();
    let literal = match parser.peek().item {
        Token::Scalar(ScalarToken::String(lit)) => {
            Some(parser.next_token()?.map(|_| string_value(lit)))
        }
        _ => None,
    };

    Ok(Description { literal, comment })
}

fn parse_type_system_definition<'a>(
    parser: &mut Parser<'a>,
) -> UnlocatedParseResult<Definition<'a>> {
    let start_pos = parser.peek().span.start;
    let description = parse_description(parser)?;

    let def = match parser.peek().item {
        Token::Name("schema") => {
            parser.next_token()?;
            let schema = parse_schema_body(parser, true)?;
            return Ok(Definition::Schema(Spanning::start_end(
                &start_pos,
                &last_end(parser, start_pos),
                schema,
            )));
        }
        Token::Name("directive") => {
            let directive = parse_directive_definition(parser, description)?;
            return Ok(Definition::Directive(Spanning::start_end(
                &start_pos,
                &last_end(parser, start_pos),
                directive,
            )));
        }
        Token::Name("scalar") => parse_scalar_type(parser, description)?,
        Token::Name("type") => parse_object_type(parser, description)?,
        Token::Name("interface") => parse_interface_type(parser, description)?,
        Token::Name("union") => parse_union_type(parser, description)?,
        Token::Name("enum") => parse_enum_type(parser, description)?,
        Token::Name("input") => parse_input_object_type(parser, description)?,
        _ => return Err(parser.next_token()?.map(ParseError::unexpected_token)),
    };

    Ok(Definition::Type(Spanning::start_end(
        &start_pos,
        &last_end(parser, start_pos),
        def,
    )))
}

fn parse_type_system_extension<'a>(
    parser: &mut Parser<'a>,
) -> UnlocatedParseResult<Definition<'a>> {
    let start_pos = parser.expect(&Token::Name("extend"))?.span.start;
    let description = Description::default();

    let def = match parser.peek().item {
        Token::Name("schema") => {
            parser.next_token()?;
            let schema = parse_schema_body(parser, false)?;
            return Ok(Definition::SchemaExtension(Spanning::start_end(
                &start_pos,
                &last_end(parser, start_pos),
                schema,
            )));
        }
        Token::Name("scalar") => parse_scalar_type(parser, description)?,
        Token::Name("type") => parse_object_type(parser, description)?,
        Token::Name("interface") => parse_interface_type(parser, description)?,
        Token::Name("union") => parse_union_type(parser, description)?,
        Token::Name("enum") => parse_enum_type(parser, description)?,
        Token::Name("input") => parse_input_object_type(parser, description)?,
        _ => return Err(parser.next_token()?.map(ParseError::unexpected_token)),
    };

    Ok(Definition::TypeExtension(Spanning::start_end(
        &start_pos,
        &last_end(parser, start_pos),
        def,
    )))
}

fn parse_schema_body<'a>(
    parser: &mut Parser<'a>,
    require_operation_types: bool,
) -> UnlocatedParseResult<SchemaDefinition<'a>> {
    let directives = parse_directives(parser)?.map(|s| s.item);

    let operation_types = if require_operation_types || parser.peek().item == Token::CurlyOpen {
        parser
            .delimited_nonempty_list(
                &Token::CurlyOpen,
                parse_operation_type_definition,
                &Token::CurlyClose,
            )?
            .item
    } else {
        Vec::new()
    };

    Ok(SchemaDefinition {
        directives,
        operation_types,
    })
}

fn parse_operation_type_definition<'a>(
    parser: &mut Parser<'a>,
) -> ParseResult<OperationTypeDefinition<'a>> {
    let operation_type = parse_operation_type(parser)?;
    parser.expect(&Token::Colon)?;
    let type_name = parser.expect_name()?;

    Ok(Spanning::start_end(
        &operation_type.span.start,
        &type_name.span.end,
        OperationTypeDefinition {
            operation_type,
            type_name,
        },
    ))
}

fn parse_scalar_type<'a>(
    parser: &mut Parser<'a>,
    description: Description,
) -> UnlocatedParseResult<TypeDefinition<'a>> {
    parser.expect(&Token::Name("scalar"))?;
    let name = parser.expect_name()?;
    let directives = parse_directives(parser)?.map(|s| s.item);

    Ok(TypeDefinition::Scalar(ScalarTypeDefinition {
        description,
        name,
        directives,
    }))
}

fn parse_object_type<'a>(
    parser: &mut Parser<'a>,
    description: Description,
) -> UnlocatedParseResult<TypeDefinition<'a>> {
    parser.expect(&Token::Name("type"))?;
    let name = parser.expect_name()?;
    let interfaces = parse_implements_interfaces(parser)?;
    let directives = parse_directives(parser)?.map(|s| s.item);
    let fields = parse_fields_definition(parser)?;

    Ok(TypeDefinition::Object(ObjectTypeDefinition {
        description,
        name,
        interfaces,
        directives,
        fields,
    }))
}

fn parse_implements_interfaces<'a>(
    parser: &mut Parser<'a>,
) -> UnlocatedParseResult<Vec<Spanning<&'a str>>> {
    let mut interfaces = Vec::new();

    if parser.peek().item != Token::Name("implements") {
        return Ok(interfaces);
    }
    parser.next_token()?;

    if parser.peek().item == Token::Amp {
        parser.next_token()?;
    }
    interfaces.push(parser.expect_name()?);
    while parser.peek().item == Token::Amp {
        parser.next_token()?;
        interfaces.push(parser.expect_name()?);
    }

    Ok(interfaces)
}

fn parse_fields_definition<'a>(
    parser: &mut Parser<'a>,
) -> UnlocatedParseResult<Vec<Spanning<FieldDefinition<'a>>>> {
    if parser.peek().item != Token::CurlyOpen {
        return Ok(Vec::new());
    }

    Ok(parser
        .delimited_list(&Token::CurlyOpen, parse_field_definition, &Token::CurlyClose)?
        .item)
}

fn parse_field_definition<'a>(parser: &mut Parser<'a>) -> ParseResult<FieldDefinition<'a>> {
    let start_pos = parser.peek().span.start;
    let description = parse_description(parser)?;
    let name = parser.expect_name()?;
    let arguments = parse_argument_definitions(parser)?;
    parser.expect(&Token::Colon)?;
    let field_type = parse_type(parser)?;
    let directives = parse_directives(parser)?;

    Ok(Spanning::start_end(
        &start_pos,
        &directives.as_ref().map_or(field_type.span.end, |s| s.span.end),
        FieldDefinition {
            description,
            name,
            arguments,
            field_type,
            directives: directives.map(|s| s.item),
        },
    ))
}

fn parse_argument_definitions<'a>(
    parser: &mut Parser<'a>,
) -> UnlocatedParseResult<Vec<Spanning<InputValueDefinition<'a>>>> {
    if parser.peek().item != Token::ParenOpen {
        return Ok(Vec::new());
    }

    Ok(parser
        .delimited_nonempty_list(
            &Token::ParenOpen,
            parse_input_value_definition,
            &Token::ParenClose,
        )?
        .item)
}

fn parse_input_value_definition<'a>(
    parser: &mut Parser<'a>,
) -> ParseResult<InputValueDefinition<'a>> {
    let start_pos = parser.peek().span.start;
    let description = parse_description(parser)?;
    let name = parser.expect_name()?;
    parser.expect(&Token::Colon)?;
    let value_type = parse_type(parser)?;

    let default_value = if parser.peek().item == Token::Equals {
        parser.next_token()?;
        Some(parse_value_literal(parser, true)?)
    } else {
        None
    };

    let directives = parse_directives(parser)?;

    Ok(Spanning::start_end(
        &start_pos,
        &directives
            .as_ref()
            .map(|s| s.span.end)
            .or_else(|| default_value.as_ref().map(|s| s.span.end))
            .unwrap_or(value_type.span.end),
        InputValueDefinition {
            description,
            name,
            value_type,
            default_value,
            directives: directives.map(|s| s.item),
        },
    ))
}

fn parse_interface_type<'a>(
    parser: &mut Parser<'a>,
    description: Description,
) -> UnlocatedParseResult<TypeDefinition<'a>> {
    parser.expect(&Token::Name("interface"))?;
    let name = parser.expect_name()?;
    let directives = parse_directives(parser)?.map(|s| s.item);
    let fields = parse_fields_definition(parser)?;

    Ok(TypeDefinition::Interface(InterfaceTypeDefinition {
        description,
        name,
        directives,
        fields,
    }))
}

fn parse_union_type<'a>(
    parser: &mut Parser<'a>,
    description: Description,
) -> UnlocatedParseResult<TypeDefinition<'a>> {
    parser.expect(&Token::Name("union"))?;
    let name = parser.expect_name()?;
    let directives = parse_directives(parser)?.map(|s| s.item);

    let mut members = Vec::new();
    if parser.peek().item == Token::Equals {
        parser.next_token()?;
        if parser.peek().item == Token::Pipe {
            parser.next_token()?;
        }
        members.push(parser.expect_name()?);
        while parser.peek().item == Token::Pipe {
            parser.next_token()?;
            members.push(parser.expect_name()?);
        }
    }

    Ok(TypeDefinition::Union(UnionTypeDefinition {
        description,
        name,
        directives,
        members,
    }))
}

fn parse_enum_type<'a>(
    parser: &mut Parser<'a>,
    description: Description,
) -> UnlocatedParseResult<TypeDefinition<'a>> {
    parser.expect(&Token::Name("enum"))?;
    let name = parser.expect_name()?;
    let directives = parse_directives(parser)?.map(|s| s.item);

    let values = if parser.peek().item == Token::CurlyOpen {
        parser
            .delimited_list(
                &Token::CurlyOpen,
                parse_enum_value_definition,
                &Token::CurlyClose,
            )?
            .item
    } else {
        Vec::new()
    };

    Ok(TypeDefinition::Enum(EnumTypeDefinition {
        description,
        name,
        directives,
        values,
    }))
}

fn parse_enum_value_definition<'a>(
    parser: &mut Parser<'a>,
) -> ParseResult<EnumValueDefinition<'a>> {
    let start_pos = parser.peek().span.start;
    let description = parse_description(parser)?;
    let name = parser.expect_name()?;
    if matches!(name.item, "true" | "false" | "null") {
        return Err(name.map(|n| ParseError::UnexpectedToken(n.into())));
    }
    let directives = parse_directives(parser)?;

    Ok(Spanning::start_end(
        &start_pos,
        &directives.as_ref().map_or(name.span.end, |s| s.span.end),
        EnumValueDefinition {
            description,
            name,
            directives: directives.map(|s| s.item),
        },
    ))
}

fn parse_input_object_type<'a>(
    parser: &mut Parser<'a>,
    description: Description,
) -> UnlocatedParseResult<TypeDefinition<'a>> {
    parser.expect(&Token::Name("input"))?;
    let name = parser.expect_name()?;
    let directives = parse_directives(parser)?.map(|s| s.item);

    let fields = if parser.peek().item == Token::CurlyOpen {
        parser
            .delimited_list(
                &Token::CurlyOpen,
                parse_input_value_definition,
                &Token::CurlyClose,
            )?
            .item
    } else {
        Vec::new()
    };

    Ok(TypeDefinition::InputObject(InputObjectTypeDefinition {
        description,
        name,
        directives,
        fields,
    }))
}

fn parse_directive_definition<'a>(
    parser: &mut Parser<'a>,
    description: Description,
) -> UnlocatedParseResult<DirectiveDefinition<'a>> {
    parser.expect(&Token::Name("directive"))?;
    parser.expect(&Token::At)?;
    let name = parser.expect_name()?;
    let arguments = parse_argument_definitions(parser)?;
    parser.expect(&Token::Name("on"))?;

    if parser.peek().item == Token::Pipe {
        parser.next_token()?;
    }
    let mut locations = vec![parse_directive_location(parser)?];
    while parser.peek().item == Token::Pipe {
        parser.next_token()?;
        locations.push(parse_directive_location(parser)?);
    }

    Ok(DirectiveDefinition {
        description,
        name,
        arguments,
        locations,
    })
}

fn parse_directive_location(parser: &mut Parser<'_>) -> ParseResult<DirectiveLocation> {
    let name = parser.expect_name()?;

    match DirectiveLocation::from_name(name.item) {
        Some(location) => Ok(name.map(|_| location)),
        None => Err(name.map(|n| ParseError::UnknownDirectiveLocation(CompactString::from(n)))),
    }
}
