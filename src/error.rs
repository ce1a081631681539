/// Lexical errors.
///
/// Raised by the scanner for characters that do not start any token and for
/// malformed or unterminated block comments.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the AST: missing
/// tokens, malformed declarations and any token that cannot appear where it
/// was found.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unresolved names, type mismatches, division by zero and
/// calls to values that are not functions.
pub mod runtime_error;
/// Diagnostics handed to the host for rendering.
///
/// A diagnostic is the flattened, host-facing form of any error: numeric code,
/// category, description, origin, position and the offending source line.
pub mod diagnostic;

use std::fmt;

pub use diagnostic::Diagnostic;
pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

use crate::ast::Position;

/// The broad class an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Raised by the scanner.
    Lexical,
    /// A structural grammar violation with a dedicated diagnostic.
    Syntax,
    /// The generic unexpected-token fallback of the parser.
    Parser,
    /// Raised while evaluating.
    Runtime,
}

impl Category {
    /// The category name as shown in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lexical => "LexicalError",
            Self::Syntax => "SyntaxError",
            Self::Parser => "ParserError",
            Self::Runtime => "RuntimeError",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any error produced by running a source unit through the pipeline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The scanner rejected the source.
    #[error(transparent)]
    Lexical(#[from] LexError),
    /// The parser rejected the token stream.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// The numeric diagnostic code.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::Lexical(e) => e.code(),
            Self::Parse(e) => e.code(),
            Self::Runtime(e) => e.code(),
        }
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Lexical(e) => e.category(),
            Self::Parse(e) => e.category(),
            Self::Runtime(e) => e.category(),
        }
    }

    /// A short human description of the error class.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Lexical(e) => e.description(),
            Self::Parse(e) => e.description(),
            Self::Runtime(e) => e.description(),
        }
    }

    /// Where in the source the error was raised.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Lexical(e) => e.position(),
            Self::Parse(e) => e.position(),
            Self::Runtime(e) => e.position(),
        }
    }

    /// Builds the host-facing diagnostic for this error.
    ///
    /// `origin` names the source unit (a file name, `"repl"`, ...) and
    /// `source` is the text the error was raised from; the offending line is
    /// copied out of it.
    ///
    /// # Example
    /// ```
    /// use april::{error::Category, global_environment, run};
    ///
    /// let source = "let x = 1;\nx = y;";
    /// let err = run(source, &global_environment()).unwrap_err();
    /// let diagnostic = err.diagnostic("main.april", source);
    ///
    /// assert_eq!(diagnostic.code, 400);
    /// assert_eq!(diagnostic.category, Category::Runtime);
    /// assert_eq!(diagnostic.line, 2);
    /// assert_eq!(diagnostic.source_line.as_deref(), Some("x = y;"));
    /// ```
    #[must_use]
    pub fn diagnostic(&self, origin: &str, source: &str) -> Diagnostic {
        Diagnostic::new(self, origin, source)
    }
}
