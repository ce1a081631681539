/// Parser entry points and the assignment tier.
///
/// Contains the result type shared by every parsing routine, the public
/// `parse` function and expression parsing.
pub mod core;

/// Unary, call and primary expression parsing.
///
/// Handles the tightest-binding tiers: logical negation, call chains such as
/// `f()(1)`, identifiers, numbers and parenthesized expressions.
pub mod unary;

/// Binary operator parsing.
///
/// One left-associative tier per precedence level: logical, equality,
/// relational, additive and multiplicative.
pub mod binary;

/// Block statement parsing.
///
/// Parses brace-delimited statement lists and the loop statements built on
/// them.
pub mod block;

/// Utility functions for the parser.
///
/// Token lookahead, expectation helpers and comma-separated lists.
pub mod utils;

/// Statement parsing.
///
/// Implements parsing of whole programs and of top-level statements, including
/// variable and function declarations.
pub mod statement;
