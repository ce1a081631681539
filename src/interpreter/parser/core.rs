use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{binary::parse_logical, statement::parse_program, utils::is_next},
    },
    util::stack::ensure_sufficient_stack,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Builds the AST for a whole source unit.
///
/// Parsing stops at the first structural violation; there is no error
/// recovery.
///
/// # Errors
/// Returns the first `ParseError` encountered.
///
/// # Example
/// ```
/// use april::{
///     ast::NodeKind,
///     interpreter::{lexer::scan, parser::core::parse},
/// };
///
/// let tokens = scan("let x = 1; fn f() { x }").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// assert_eq!(program.body[0].kind(), NodeKind::VarDeclaration);
/// assert_eq!(program.body[1].kind(), NodeKind::FuncDeclaration);
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    let program = parse_program(&mut iter)?;

    tracing::debug!(statements = program.body.len(), "parsed program");
    Ok(program)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, assignment, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := assignment`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    ensure_sufficient_stack(|| parse_assignment(tokens))
}

/// Parses an assignment, or whatever lower tier expression stands alone.
///
/// Assignment is right-associative: `a = b = c` parses as `a = (b = c)`.
/// Any expression is accepted as the target here; the evaluator rejects
/// targets that are not identifiers.
///
/// Grammar: `assignment := logical ("=" assignment)?`
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let target = parse_logical(tokens)?;

    if is_next(tokens, &TokenKind::Equals) {
        tokens.next();
        let value = parse_assignment(tokens)?;
        return Ok(Expr::Assignment { position: target.position(),
                                     target:   Box::new(target),
                                     value:    Box::new(value), });
    }

    Ok(target)
}
