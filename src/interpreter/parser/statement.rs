use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{Expr, FunctionDecl, Program, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::{parse_block, parse_for, parse_while},
            core::{ParseResult, parse_expression},
            utils::{
                advance, at_end, expect, expect_with, is_next, parse_comma_separated, peek,
                skip_if,
            },
        },
    },
    util::stack::ensure_sufficient_stack,
};

/// Parses statements until the end-of-file marker.
///
/// Grammar: `program := statement*`
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a Token>
{
    let mut body = Vec::new();
    while !at_end(tokens) {
        body.push(parse_statement(tokens)?);
    }
    Ok(Program { body })
}

/// Parses a single statement.
///
/// A statement may be one of:
/// - a `let`/`const` declaration, which must end with `;`.
/// - a function declaration.
/// - a `for` or `while` loop.
/// - an expression used as a statement.
///
/// Everything but a declaration may be followed by an optional `;`.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    ensure_sufficient_stack(|| parse_statement_inner(tokens))
}

fn parse_statement_inner<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let statement = match peek(tokens)?.kind {
        TokenKind::Let | TokenKind::Const => return parse_var_declaration(tokens),
        TokenKind::Fn => Statement::FuncDeclaration(parse_function_declaration(tokens)?),
        TokenKind::For => parse_for(tokens)?,
        TokenKind::While => parse_while(tokens)?,
        _ => Statement::Expression(parse_expression(tokens)?),
    };

    skip_if(tokens, &TokenKind::Semicolon);
    Ok(statement)
}

/// Parses a variable or constant declaration.
///
/// ```text
///     let name;
///     let name = expression;
///     const name = expression;
/// ```
///
/// # Errors
/// - `InvalidDeclaration` if the keyword is not followed by a name.
/// - `MissingConstantValue` for `const name;`.
/// - `UnexpectedToken` if the name is followed by neither `;` nor `=`.
/// - `MissingSemicolon` if the initializer is not followed by `;`.
pub fn parse_var_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let keyword = advance(tokens)?;
    let constant = keyword.kind == TokenKind::Const;

    let name = match advance(tokens)? {
        Token { kind: TokenKind::Identifier(name),
                .. } => name.clone(),
        token => {
            return Err(ParseError::InvalidDeclaration { expected: "identifier".to_string(),
                                                        found:    token.kind.to_string(),
                                                        position: token.position, });
        },
    };

    if is_next(tokens, &TokenKind::Semicolon) {
        tokens.next();
        if constant {
            return Err(ParseError::MissingConstantValue { name,
                                                          position: keyword.position });
        }
        return Ok(Statement::VarDeclaration { name,
                                              value: None,
                                              constant,
                                              position: keyword.position });
    }

    expect(tokens, &TokenKind::Equals)?;
    let value = parse_expression(tokens)?;
    expect_with(tokens, &TokenKind::Semicolon, |found| {
        ParseError::MissingSemicolon { expected: TokenKind::Semicolon.to_string(),
                                       found:    found.kind.to_string(),
                                       position: found.position, }
    })?;

    Ok(Statement::VarDeclaration { name,
                                   value: Some(value),
                                   constant,
                                   position: keyword.position })
}

/// Parses a function declaration.
///
/// Syntax:
/// ```text
///     fn name(a, b) {
///         statements
///     }
/// ```
/// The parameter list is read like call arguments and then narrowed to bare
/// names.
///
/// # Errors
/// - `MissingFunctionIdentifier` if `fn` is not followed by a name.
/// - `MalformedParameterList` if the name is not followed by `(`.
/// - `InvalidParameter` if a parameter is anything but an identifier.
/// - Propagates any errors from parsing the body.
pub fn parse_function_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<FunctionDecl>
    where I: Iterator<Item = &'a Token>
{
    let keyword = advance(tokens)?;

    let name = match advance(tokens)? {
        Token { kind: TokenKind::Identifier(name),
                .. } => name.clone(),
        token => {
            return Err(ParseError::MissingFunctionIdentifier { found:    token.kind.to_string(),
                                                               position: token.position, });
        },
    };

    expect_with(tokens, &TokenKind::LParen, |found| {
        ParseError::MalformedParameterList { found:    found.kind.to_string(),
                                             position: found.position, }
    })?;

    let parameters = parse_comma_separated(tokens, parse_expression, &TokenKind::RParen)?
        .iter()
        .map(|argument| match argument {
            Expr::Identifier { name, .. } => Ok(name.clone()),
            other => Err(ParseError::InvalidParameter { position: other.position() }),
        })
        .collect::<ParseResult<Vec<_>>>()?;

    let body = parse_block(tokens)?;

    Ok(FunctionDecl { name,
                      parameters,
                      body: Rc::from(body),
                      position: keyword.position })
}
