use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{advance, expect, parse_comma_separated, unexpected},
        },
    },
    util::stack::ensure_sufficient_stack,
};

/// Parses prefix logical negation.
///
/// Negation nests: `!!x` is `!(!x)`.
///
/// The rule is: `unary := "!" unary | call`
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    if let Some(token) = tokens.peek().copied()
       && token.kind == TokenKind::Bang
    {
        tokens.next();
        let operand = ensure_sufficient_stack(|| parse_unary(tokens))?;
        return Ok(Expr::Unary { op:       UnaryOperator::Not,
                                operand:  Box::new(operand),
                                position: token.position, });
    }

    parse_call(tokens)
}

/// Parses a primary expression followed by any number of argument lists.
///
/// `f()(1)` produces a call whose callee is itself the call `f()`.
///
/// The rule is: `call := primary ("(" arguments? ")")*`
pub fn parse_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut expr = parse_primary(tokens)?;

    while let Some(token) = tokens.peek().copied()
          && token.kind == TokenKind::LParen
    {
        tokens.next();
        let arguments = parse_comma_separated(tokens, parse_expression, &TokenKind::RParen)?;
        expr = Expr::Call { position: expr.position(),
                            callee: Box::new(expr),
                            arguments };
    }

    Ok(expr)
}

/// Parses the tightest-binding expressions: identifiers, numbers and
/// parenthesized expressions.
///
/// The rule is: `primary := IDENT | NUMBER | "(" expression ")"`
///
/// # Errors
/// Any other token is reported as `UnexpectedToken`.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token = advance(tokens)?;

    match &token.kind {
        TokenKind::Identifier(name) => Ok(Expr::Identifier { name:     name.clone(),
                                                             position: token.position, }),
        TokenKind::Number(value) => Ok(Expr::NumericLiteral { value:    *value,
                                                              position: token.position, }),
        TokenKind::LParen => {
            let expr = parse_expression(tokens)?;
            expect(tokens, &TokenKind::RParen)?;
            Ok(expr)
        },
        _ => Err(unexpected("expression", token)),
    }
}

