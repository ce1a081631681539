use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            statement::parse_statement,
            utils::{advance, at_end, expect, is_next, unexpected},
        },
    },
    util::num::f64_to_u64_checked,
};

/// Parses a brace-delimited list of statements.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Errors
/// `UnexpectedToken` if either brace is missing.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, &TokenKind::LBrace)?;

    let mut statements = Vec::new();
    while !at_end(tokens) && !is_next(tokens, &TokenKind::RBrace) {
        statements.push(parse_statement(tokens)?);
    }

    expect(tokens, &TokenKind::RBrace)?;
    Ok(statements)
}

/// Parses a counted loop.
///
/// Syntax: `for 10 { statements }`. The count is a number literal, never an
/// expression, and must be a non-negative whole number.
///
/// # Errors
/// - `UnexpectedToken` if `for` is not followed by a number.
/// - `InvalidIterationCount` for fractional counts.
pub fn parse_for<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let keyword = advance(tokens)?;

    let count = advance(tokens)?;
    let TokenKind::Number(value) = count.kind else {
        return Err(unexpected("iteration count", count));
    };
    let iterations = f64_to_u64_checked(value,
                                        ParseError::InvalidIterationCount { found:    value.to_string(),
                                                                            position: count.position, })?;

    let body = parse_block(tokens)?;

    Ok(Statement::ForStatement { iterations,
                                 body,
                                 position: keyword.position })
}

/// Parses a conditional loop.
///
/// Syntax: `while condition { statements }`.
pub fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let keyword = advance(tokens)?;
    let condition = parse_expression(tokens)?;
    let body = parse_block(tokens)?;

    Ok(Statement::WhileStatement { condition,
                                   body,
                                   position: keyword.position })
}
