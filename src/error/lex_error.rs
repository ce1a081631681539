use crate::{ast::Position, error::Category};

/// Represents all errors that can occur while scanning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A character that starts no token.
    #[error("Error at {position}: Found illegal char '{character}'. Token not generated due to unsupported char.")]
    IllegalCharacter {
        /// The offending character.
        character: char,
        /// Where the character was found.
        position:  Position,
    },
    /// A `#` that is not immediately followed by `|`.
    #[error("Error at {position}: Block comments must open with '#|'.")]
    MalformedBlockComment {
        /// Position of the `#`.
        position: Position,
    },
    /// A block comment still open at the end of input.
    #[error("Error at {position}: Block comment is never closed; expected '|#' before end of input.")]
    UnterminatedBlockComment {
        /// Position of the opening `#|`.
        position: Position,
    },
}

impl LexError {
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::IllegalCharacter { .. } => 100,
            Self::MalformedBlockComment { .. } | Self::UnterminatedBlockComment { .. } => 101,
        }
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        Category::Lexical
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::IllegalCharacter { .. } => "Illegal character",
            Self::MalformedBlockComment { .. } => "Malformed block comment",
            Self::UnterminatedBlockComment { .. } => "Unterminated block comment",
        }
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::IllegalCharacter { position, .. }
            | Self::MalformedBlockComment { position }
            | Self::UnterminatedBlockComment { position } => *position,
        }
    }
}
