use std::iter::Peekable;

use crate::{
    ast::Position,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// The error reported when a production runs past the final token.
///
/// Scanned token streams end with `EndOfFile`, which no production consumes,
/// so this is only reachable with hand-built token slices.
fn end_of_input() -> ParseError {
    ParseError::UnexpectedToken { expected: "more input".to_string(),
                                  found:    TokenKind::EndOfFile.to_string(),
                                  position: Position::default(), }
}

/// Builds the generic unexpected-token error for `found`.
pub(in crate::interpreter::parser) fn unexpected(expected: &str, found: &Token) -> ParseError {
    ParseError::UnexpectedToken { expected: expected.to_string(),
                                  found:    found.kind.to_string(),
                                  position: found.position, }
}

/// Returns the next token without consuming it.
pub(in crate::interpreter::parser) fn peek<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().copied().ok_or_else(end_of_input)
}

/// Consumes and returns the next token.
pub(in crate::interpreter::parser) fn advance<'a, I>(tokens: &mut Peekable<I>)
                                                     -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.next().ok_or_else(end_of_input)
}

/// Tests whether the next token is of the given kind.
pub(in crate::interpreter::parser) fn is_next<'a, I>(tokens: &mut Peekable<I>,
                                                     kind: &TokenKind)
                                                     -> bool
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().is_some_and(|token| token.kind == *kind)
}

/// Tests whether only the end-of-file marker (or nothing) remains.
pub(in crate::interpreter::parser) fn at_end<'a, I>(tokens: &mut Peekable<I>) -> bool
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().is_none_or(|token| token.kind == TokenKind::EndOfFile)
}

/// Consumes the next token if it is of the given kind.
pub(in crate::interpreter::parser) fn skip_if<'a, I>(tokens: &mut Peekable<I>, kind: &TokenKind)
    where I: Iterator<Item = &'a Token>
{
    if is_next(tokens, kind) {
        tokens.next();
    }
}

/// Consumes the next token, which must be of the given kind.
///
/// On mismatch, `error` builds the diagnostic from the offending token.
///
/// # Errors
/// Returns whatever `error` produces when the next token is not `kind`.
pub(in crate::interpreter::parser) fn expect_with<'a, I>(tokens: &mut Peekable<I>,
                                                         kind: &TokenKind,
                                                         error: impl FnOnce(&Token) -> ParseError)
                                                         -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    let token = advance(tokens)?;
    if token.kind == *kind {
        Ok(token)
    } else {
        Err(error(token))
    }
}

/// Consumes the next token, which must be of the given kind, reporting the
/// generic unexpected-token error otherwise.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` naming `kind` as expected.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: &TokenKind)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    expect_with(tokens, kind, |found| unexpected(&kind.to_string(), found))
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by call arguments and parameter lists. It repeatedly
/// calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse or if anything other than
/// a comma or the closing token follows an item.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &TokenKind)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token>
{
    let mut items = Vec::new();
    if is_next(tokens, closing) {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        let token = advance(tokens)?;
        match &token.kind {
            TokenKind::Comma => {},
            kind if kind == closing => break,
            _ => return Err(unexpected(&format!("',' or {closing}"), token)),
        }
    }
    Ok(items)
}
