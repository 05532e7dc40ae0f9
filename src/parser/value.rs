use std::char;

use crate::{
    ast::InputValue,
    parser::{
        ParseError, ParseResult, Parser, ScalarToken, Spanning, Token, lexer::StringLiteral,
    },
};

pub fn parse_value_literal<'a>(parser: &mut Parser<'a>, is_const: bool) -> ParseResult<InputValue> {
    match *parser.peek() {
        Spanning {
            item: Token::BracketOpen,
            ..
        } => parse_list_literal(parser, is_const),
        Spanning {
            item: Token::CurlyOpen,
            ..
        } => parse_object_literal(parser, is_const),
        Spanning {
            item: Token::Dollar,
            ..
        } if !is_const => parse_variable_literal(parser),
        Spanning {
            item: Token::Scalar(token),
            ..
        } => Ok(parser.next_token()?.map(|_| parse_scalar_literal(token))),
        Spanning {
            item: Token::Name("true"),
            ..
        } => Ok(parser.next_token()?.map(|_| InputValue::Boolean(true))),
        Spanning {
            item: Token::Name("false"),
            ..
        } => Ok(parser.next_token()?.map(|_| InputValue::Boolean(false))),
        Spanning {
            item: Token::Name("null"),
            ..
        } => Ok(parser.next_token()?.map(|_| InputValue::null())),
        Spanning {
            item: Token::Name(name),
            ..
        } => Ok(parser.next_token()?.map(|_| InputValue::enum_value(name))),
        _ => Err(parser.next_token()?.map(ParseError::unexpected_token)),
    }
}

fn parse_list_literal<'a>(parser: &mut Parser<'a>, is_const: bool) -> ParseResult<InputValue> {
    Ok(parser
        .delimited_list(
            &Token::BracketOpen,
            |p| parse_value_literal(p, is_const),
            &Token::BracketClose,
        )?
        .map(InputValue::List))
}

fn parse_object_literal<'a>(parser: &mut Parser<'a>, is_const: bool) -> ParseResult<InputValue> {
    Ok(parser
        .delimited_list(
            &Token::CurlyOpen,
            |p| parse_object_field(p, is_const),
            &Token::CurlyClose,
        )?
        .map(|items| InputValue::Object(items.into_iter().map(|s| s.item).collect())))
}

fn parse_object_field<'a>(
    parser: &mut Parser<'a>,
    is_const: bool,
) -> ParseResult<(Spanning<String>, Spanning<InputValue>)> {
    let key = parser.expect_name()?;

    parser.expect(&Token::Colon)?;

    let value = parse_value_literal(parser, is_const)?;
    let end = value.span.end;

    Ok(Spanning::start_end(
        &key.span.start,
        &end,
        (key.map(Into::into), value),
    ))
}

fn parse_variable_literal<'a>(parser: &mut Parser<'a>) -> ParseResult<InputValue> {
    let start_pos = &parser.expect(&Token::Dollar)?.span.start;
    let Spanning {
        item: name,
        span: end_span,
        ..
    } = parser.expect_name()?;

    Ok(Spanning::start_end(
        start_pos,
        &end_span.end,
        InputValue::variable(name),
    ))
}

/// Interprets a scalar token the lexer has already validated.
///
/// Integers not fitting into 32 bits are kept as floats.
fn parse_scalar_literal(token: ScalarToken<'_>) -> InputValue {
    match token {
        ScalarToken::String(lit) => InputValue::String(string_value(lit)),
        ScalarToken::Int(raw) => raw
            .parse::<i32>()
            .map(InputValue::Int)
            .unwrap_or_else(|_| InputValue::Float(raw.parse().unwrap_or(f64::INFINITY))),
        ScalarToken::Float(raw) => InputValue::Float(raw.parse().unwrap_or(f64::INFINITY)),
    }
}

/// Returns the value of a string literal, with its quotes removed and its
/// escape sequences or block indentation resolved.
pub fn string_value(lit: StringLiteral<'_>) -> String {
    match lit {
        StringLiteral::Quoted(raw) => unescape_quoted(&raw[1..raw.len() - 1]),
        StringLiteral::Block(raw) => {
            dedent_block_string(&raw[3..raw.len() - 3].replace("\\\"\"\"", "\"\"\""))
        }
    }
}

fn unescape_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('b') => out.push('\u{0008}'),
            Some('f') => out.push('\u{000c}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('u') => {
                let code = chars.by_ref().take(4).collect::<String>();
                if let Some(c) = u32::from_str_radix(&code, 16).ok().and_then(char::from_u32) {
                    out.push(c);
                }
            }
            Some(c) => out.push(c),
            None => {}
        }
    }

    out
}

/// Removes the common indentation of all lines but the first one, then the
/// leading and trailing blank lines.
pub fn dedent_block_string(raw: &str) -> String {
    let lines = raw.split("\r\n").flat_map(|l| l.split(['\n', '\r'])).collect::<Vec<_>>();

    let indent_of = |l: &str| l.len() - l.trim_start_matches([' ', '\t']).len();
    let is_blank = |l: &str| l.trim_start_matches([' ', '\t']).is_empty();

    let common_indent = lines
        .iter()
        .skip(1)
        .filter(|l| !is_blank(l))
        .map(|l| indent_of(l))
        .min()
        .unwrap_or(0);

    let lines = lines
        .iter()
        .enumerate()
        .map(|(i, l)| match i {
            0 => *l,
            _ if l.len() < common_indent => "",
            _ => &l[common_indent..],
        })
        .collect::<Vec<_>>();

    let start = lines.iter().position(|l| !is_blank(l));
    let end = lines.iter().rposition(|l| !is_blank(l));

    match (start, end) {
        (Some(start), Some(end)) => lines[start..=end].join("\n"),
        _ => String::new(),
    }
}
