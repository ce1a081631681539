use std::fmt;

use crate::error::{Category, Error};

/// The host-facing description of a failed run.
///
/// Carries everything a terminal, log or editor needs to report an error
/// without access to the pipeline's internal error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Numeric error code, e.g. `250` for a missing semicolon.
    pub code:        u16,
    /// The error category.
    pub category:    Category,
    /// A short description of the error class.
    pub description: String,
    /// Identifies the source unit: a file name, `"repl"`, ...
    pub origin:      String,
    /// 1-based line of the error.
    pub line:        usize,
    /// 1-based column of the error.
    pub column:      usize,
    /// The full text of the offending line, when it exists in the source.
    pub source_line: Option<String>,
    /// The detailed message.
    pub message:     String,
}

impl Diagnostic {
    /// Flattens `error` into a diagnostic for the given source unit.
    #[must_use]
    pub fn new(error: &Error, origin: &str, source: &str) -> Self {
        let position = error.position();
        let source_line = position.line
                                  .checked_sub(1)
                                  .and_then(|index| source.lines().nth(index))
                                  .map(str::to_string);

        Self { code: error.code(),
               category: error.category(),
               description: error.description().to_string(),
               origin: origin.to_string(),
               line: position.line,
               column: position.column,
               source_line,
               message: error.to_string() }
    }
}

impl fmt::Display for Diagnostic {
    /// Renders the diagnostic in caret form:
    ///
    /// ```text
    /// error[E250]: SyntaxError - Missing semicolon
    ///   --> main.april:1:11
    ///   |
    /// 1 | let x = 10
    ///   |           ^
    ///   | Error at 1:11: Missing ';' at the end of var declaration. ...
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f,
                 "error[E{}]: {} - {}",
                 self.code, self.category, self.description)?;
        writeln!(f, "  --> {}:{}:{}", self.origin, self.line, self.column)?;

        let padding = " ".repeat(self.line.to_string().len());
        writeln!(f, "{padding} |")?;
        if let Some(source_line) = &self.source_line {
            writeln!(f, "{} | {source_line}", self.line)?;
            writeln!(f,
                     "{padding} | {}^",
                     " ".repeat(self.column.saturating_sub(1)))?;
        }
        write!(f, "{padding} | {}", self.message)
    }
}
