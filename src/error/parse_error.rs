use crate::{ast::Position, error::Category};

/// Represents all errors that can occur during parsing.
///
/// Token descriptions (`expected`, `found`) are rendered in source form, e.g.
/// `';'`, `identifier 'x'` or `end of file`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// `fn` was not followed by the function's name.
    #[error("Error at {position}: Expected function name following 'fn' keyword, but got {found} instead.")]
    MissingFunctionIdentifier {
        /// The token found instead.
        found:    String,
        /// Where it was found.
        position: Position,
    },
    /// The function name was not followed by `(`.
    #[error("Error at {position}: Expected '(' to open the parameter list, but got {found} instead.")]
    MalformedParameterList {
        /// The token found instead.
        found:    String,
        /// Where it was found.
        position: Position,
    },
    /// A parameter list element that is not a bare name.
    #[error("Error at {position}: Inside function declaration expected parameters to be identifiers.")]
    InvalidParameter {
        /// Position of the offending parameter.
        position: Position,
    },
    /// A variable declaration not terminated by `;`.
    #[error("Error at {position}: Missing ';' at the end of var declaration. Expected {expected}, but got {found} instead.")]
    MissingSemicolon {
        /// The expected token.
        expected: String,
        /// The token found instead.
        found:    String,
        /// Where it was found.
        position: Position,
    },
    /// `let`/`const` not followed by a name.
    #[error("Error at {position}: In var declaration expected {expected} following 'let' or 'const' keywords, but got {found} instead.")]
    InvalidDeclaration {
        /// The expected token.
        expected: String,
        /// The token found instead.
        found:    String,
        /// Where it was found.
        position: Position,
    },
    /// `const name;` without an initializer.
    #[error("Error at {position}: Must assign value to constant '{name}'.")]
    MissingConstantValue {
        /// The constant's name.
        name:     String,
        /// Position of the `const` keyword.
        position: Position,
    },
    /// A `for` count that is not a whole number.
    #[error("Error at {position}: Loop count {found} must be a non-negative whole number.")]
    InvalidIterationCount {
        /// The literal found.
        found:    String,
        /// Position of the literal.
        position: Position,
    },
    /// Any token that does not fit where it was found.
    #[error("Error at {position}: Unexpected token: expected {expected}, but got {found} instead.")]
    UnexpectedToken {
        /// What the grammar allowed at this point.
        expected: String,
        /// The token found instead.
        found:    String,
        /// Where it was found.
        position: Position,
    },
}

impl ParseError {
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::MissingFunctionIdentifier { .. } => 200,
            Self::MalformedParameterList { .. } => 201,
            Self::InvalidParameter { .. } => 202,
            Self::MissingSemicolon { .. } => 250,
            Self::InvalidDeclaration { .. } => 251,
            Self::MissingConstantValue { .. } => 252,
            Self::InvalidIterationCount { .. } => 253,
            Self::UnexpectedToken { .. } => 300,
        }
    }

    /// Dedicated diagnostics are syntax errors; the generic fallback is a
    /// parser error.
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::UnexpectedToken { .. } => Category::Parser,
            _ => Category::Syntax,
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::MissingFunctionIdentifier { .. } => "Missing function identifier",
            Self::MalformedParameterList { .. } => "Malformed parameter list",
            Self::InvalidParameter { .. } => "Invalid parameter",
            Self::MissingSemicolon { .. } => "Missing semicolon",
            Self::InvalidDeclaration { .. } => "Invalid var/const declaration",
            Self::MissingConstantValue { .. } => "Missing constant value",
            Self::InvalidIterationCount { .. } => "Invalid iteration count",
            Self::UnexpectedToken { .. } => "Unexpected token",
        }
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::MissingFunctionIdentifier { position, .. }
            | Self::MalformedParameterList { position, .. }
            | Self::InvalidParameter { position }
            | Self::MissingSemicolon { position, .. }
            | Self::InvalidDeclaration { position, .. }
            | Self::MissingConstantValue { position, .. }
            | Self::InvalidIterationCount { position, .. }
            | Self::UnexpectedToken { position, .. } => *position,
        }
    }
}
