use std::{fmt, iter};

use compact_str::{CompactString, format_compact};
use derive_more::with_trait::{Display, Error};

use crate::parser::{Lexer, LexerError, SourcePosition, Spanning, Token};

/// Error while parsing a GraphQL document
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum ParseError {
    /// An unexpected token occurred in the source
    #[display("Unexpected \"{_0}\"")]
    UnexpectedToken(#[error(not(source))] CompactString),

    /// The input source abruptly ended
    #[display("Unexpected end of input")]
    UnexpectedEndOfFile,

    /// An error during tokenization occurred
    LexerError(LexerError),

    /// A name after `on` in a directive definition is not a known location
    #[display("Unknown directive location \"{_0}\"")]
    UnknownDirectiveLocation(#[error(not(source))] CompactString),
}

impl ParseError {
    /// Creates a [`ParseError::UnexpectedToken`] out of the provided [`Token`].
    #[must_use]
    pub fn unexpected_token(token: Token<'_>) -> Self {
        Self::UnexpectedToken(format_compact!("{token}"))
    }
}

#[doc(hidden)]
pub type ParseResult<T> = Result<Spanning<T>, Spanning<ParseError>>;

#[doc(hidden)]
pub type UnlocatedParseResult<T> = Result<T, Spanning<ParseError>>;

#[doc(hidden)]
pub type OptionParseResult<T> = Result<Option<Spanning<T>>, Spanning<ParseError>>;

#[doc(hidden)]
#[derive(Debug)]
pub struct Parser<'a> {
    tokens: Vec<Spanning<Token<'a>>>,
    /// Byte offset in `source` of the start of each token.
    offsets: Vec<usize>,
    next: usize,
    source: &'a str,
}

impl<'a> Parser<'a> {
    #[doc(hidden)]
    pub fn new(lexer: &mut Lexer<'a>, source: &'a str) -> Result<Parser<'a>, Spanning<LexerError>> {
        let tokens = lexer.collect::<Result<Vec<_>, _>>()?;

        // Token positions count characters; map them to byte offsets in one pass.
        let mut bytes = source
            .char_indices()
            .map(|(b, _)| b)
            .chain(iter::once(source.len()));
        let mut next_char = 0;
        let offsets = tokens
            .iter()
            .map(|t| {
                let idx = t.span.start.index();
                let offset = bytes.nth(idx.saturating_sub(next_char)).unwrap_or(source.len());
                next_char = idx + 1;
                offset
            })
            .collect();

        Ok(Parser {
            tokens,
            offsets,
            next: 0,
            source,
        })
    }

    #[doc(hidden)]
    pub fn peek(&self) -> &Spanning<Token<'a>> {
        &self.tokens[self.next]
    }

    /// End position of the most recently consumed token.
    #[doc(hidden)]
    pub fn previous_end(&self) -> Option<SourcePosition> {
        self.next
            .checked_sub(1)
            .map(|idx| self.tokens[idx].span.end)
    }

    #[doc(hidden)]
    pub fn next_token(&mut self) -> ParseResult<Token<'a>> {
        if self.next + 1 >= self.tokens.len() {
            Err(Spanning::new(
                self.peek().span,
                ParseError::UnexpectedEndOfFile,
            ))
        } else {
            self.next += 1;
            Ok(self.tokens[self.next - 1])
        }
    }

    #[doc(hidden)]
    pub fn expect(&mut self, expected: &Token) -> ParseResult<Token<'a>> {
        if &self.peek().item != expected {
            Err(self.next_token()?.map(ParseError::unexpected_token))
        } else {
            self.next_token()
        }
    }

    #[doc(hidden)]
    pub fn skip(
        &mut self,
        expected: &Token,
    ) -> Result<Option<Spanning<Token<'a>>>, Spanning<ParseError>> {
        if &self.peek().item == expected {
            Ok(Some(self.next_token()?))
        } else if self.peek().item == Token::EndOfFile {
            Err(Spanning::zero_width(
                &self.peek().span.start,
                ParseError::UnexpectedEndOfFile,
            ))
        } else {
            Ok(None)
        }
    }

    #[doc(hidden)]
    pub fn delimited_list<T, F>(
        &mut self,
        opening: &Token,
        parser: F,
        closing: &Token,
    ) -> ParseResult<Vec<Spanning<T>>>
    where
        T: fmt::Debug,
        F: Fn(&mut Parser<'a>) -> ParseResult<T>,
    {
        let start_pos = &self.expect(opening)?.span.start;
        let mut items = Vec::new();

        loop {
            if let Some(Spanning { span, .. }) = self.skip(closing)? {
                return Ok(Spanning::start_end(start_pos, &span.end, items));
            }

            items.push(parser(self)?);
        }
    }

    #[doc(hidden)]
    pub fn delimited_nonempty_list<T, F>(
        &mut self,
        opening: &Token,
        parser: F,
        closing: &Token,
    ) -> ParseResult<Vec<Spanning<T>>>
    where
        T: fmt::Debug,
        F: Fn(&mut Parser<'a>) -> ParseResult<T>,
    {
        let start_pos = &self.expect(opening)?.span.start;
        let mut items = Vec::new();

        loop {
            items.push(parser(self)?);

            if let Some(end_spanning) = self.skip(closing)? {
                return Ok(Spanning::start_end(start_pos, &end_spanning.end(), items));
            }
        }
    }

    #[doc(hidden)]
    pub fn unlocated_delimited_nonempty_list<T, F>(
        &mut self,
        opening: &Token,
        parser: F,
        closing: &Token,
    ) -> ParseResult<Vec<T>>
    where
        T: fmt::Debug,
        F: Fn(&mut Parser<'a>) -> UnlocatedParseResult<T>,
    {
        let start_pos = &self.expect(opening)?.span.start;
        let mut items = Vec::new();

        loop {
            items.push(parser(self)?);

            if let Some(end_spanning) = self.skip(closing)? {
                return Ok(Spanning::start_end(start_pos, &end_spanning.end(), items));
            }
        }
    }

    #[doc(hidden)]
    pub fn expect_name(&mut self) -> ParseResult<&'a str> {
        match *self.peek() {
            Spanning {
                item: Token::Name(_),
                ..
            } => Ok(self.next_token()?.map(|token| {
                if let Token::Name(name) = token {
                    name
                } else {
                    panic!("Internal parse error in `expect_name`");
                }
            })),
            Spanning {
                item: Token::EndOfFile,
                ..
            } => Err(Spanning::new(
                self.peek().span,
                ParseError::UnexpectedEndOfFile,
            )),
            _ => Err(self.next_token()?.map(ParseError::unexpected_token)),
        }
    }

    /// Collects the `#` comment lines directly above the line of the
    /// [`Parser::peek`]ed token.
    ///
    /// The block ends at the first line above that is not a comment, a blank
    /// line included. Returns the comment bodies without the leading `#`,
    /// top to bottom, dedented as a block string starting on its own line.
    ///
    /// Only the comment block itself is scanned, walking back from the token.
    #[doc(hidden)]
    pub fn leading_comment(&self) -> Option<String> {
        let start = self.offsets[self.next];
        let (mut above, _) = split_last_line(&self.source[..start])?;

        let mut lines = Vec::new();
        loop {
            let (rest, line) = match split_last_line(above) {
                Some((rest, line)) => (Some(rest), line),
                None => (None, above),
            };
            let Some(body) = line.trim_start().strip_prefix('#') else {
                break;
            };
            lines.push(body);
            match rest {
                Some(rest) => above = rest,
                None => break,
            }
        }

        if lines.is_empty() {
            return None;
        }
        lines.reverse();

        Some(super::value::dedent_block_string(&format!(
            "\n{}",
            lines.join("\n"),
        )))
    }
}

/// Splits `text` at its last line terminator (`\n`, `\r\n` or `\r`),
/// returning the text before the terminator and the last line.
fn split_last_line(text: &str) -> Option<(&str, &str)> {
    let idx = text.rfind(['\n', '\r'])?;
    let before = text[..idx].strip_suffix('\r').filter(|_| text[idx..].starts_with('\n'));

    Some((before.unwrap_or(&text[..idx]), &text[idx + 1..]))
}
