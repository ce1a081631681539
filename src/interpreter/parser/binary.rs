use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses one left-associative binary tier.
///
/// Operands come from `operand`, the next tighter tier. Each operator accepted
/// by `accepts` wraps the expression built so far as its left side, so
/// `a - b - c` parses as `(a - b) - c`.
fn parse_tier<'a, I>(tokens: &mut Peekable<I>,
                     operand: impl Fn(&mut Peekable<I>) -> ParseResult<Expr>,
                     accepts: impl Fn(BinaryOperator) -> bool)
                     -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = operand(tokens)?;
    while let Some(token) = tokens.peek().copied()
          && let Some(op) = token_to_binary_operator(&token.kind)
          && accepts(op)
    {
        tokens.next();
        let right = operand(tokens)?;
        left = Expr::Binary { position: left.position(),
                              left: Box::new(left),
                              op,
                              right: Box::new(right) };
    }
    Ok(left)
}

/// Parses logical expressions.
///
/// `&&` and `||` share one tier and associate to the left.
///
/// The rule is: `logical := equality (("&&" | "||") equality)*`
pub fn parse_logical<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_tier(tokens, parse_equality, BinaryOperator::is_logical)
}

/// Parses equality expressions.
///
/// The rule is: `equality := relational (("==" | "!=") relational)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_tier(tokens, parse_relational, |op| {
        matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
    })
}

/// Parses relational expressions.
///
/// The rule is: `relational := additive (("<" | ">" | "<=" | ">=") additive)*`
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_tier(tokens, parse_additive, |op| {
        matches!(op,
                 BinaryOperator::Less
                 | BinaryOperator::Greater
                 | BinaryOperator::LessEqual
                 | BinaryOperator::GreaterEqual)
    })
}

/// Parses addition, subtraction and remainder expressions.
///
/// `%` binds like `+` and `-`, not like `*`.
///
/// The rule is: `additive := multiplicative (("+" | "-" | "%") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_tier(tokens, parse_multiplicative, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub | BinaryOperator::Mod)
    })
}

/// Parses multiplication-level expressions.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_tier(tokens, parse_unary, |op| {
        matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    })
}

/// Maps a token to the binary operator it spells, if any.
#[must_use]
pub const fn token_to_binary_operator(kind: &TokenKind) -> Option<BinaryOperator> {
    let op = match kind {
        TokenKind::Plus => BinaryOperator::Add,
        TokenKind::Minus => BinaryOperator::Sub,
        TokenKind::Star => BinaryOperator::Mul,
        TokenKind::Slash => BinaryOperator::Div,
        TokenKind::Percent => BinaryOperator::Mod,
        TokenKind::Less => BinaryOperator::Less,
        TokenKind::Greater => BinaryOperator::Greater,
        TokenKind::LessEqual => BinaryOperator::LessEqual,
        TokenKind::GreaterEqual => BinaryOperator::GreaterEqual,
        TokenKind::EqualEqual => BinaryOperator::Equal,
        TokenKind::BangEqual => BinaryOperator::NotEqual,
        TokenKind::AndAnd => BinaryOperator::And,
        TokenKind::OrOr => BinaryOperator::Or,
        _ => return None,
    };
    Some(op)
}
