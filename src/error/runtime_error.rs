use crate::{ast::Position, error::Category};

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// A name that no scope in the chain binds.
    #[error("Error at {position}: Could not resolve '{name}'. It does not exist.")]
    UnresolvedIdentifier {
        /// The unresolved name.
        name:     String,
        /// Where the name was used.
        position: Position,
    },
    /// A second declaration of a name in the same scope.
    #[error("Error at {position}: Cannot declare '{name}'. It is already defined in this scope.")]
    Redeclaration {
        /// The redeclared name.
        name:     String,
        /// Where the redeclaration happened.
        position: Position,
    },
    /// An assignment to a name declared `const` (functions included).
    #[error("Error at {position}: Constants cannot be overwritten. '{name}' was declared constant.")]
    ConstantReassignment {
        /// The constant's name.
        name:     String,
        /// Where the assignment happened.
        position: Position,
    },
    /// An operator applied to operands it is not defined for.
    #[error("Error at {position}: Type mismatch: {details}.")]
    TypeMismatch {
        /// Which operator and which operand types.
        details:  String,
        /// Position of the offending expression.
        position: Position,
    },
    /// `/` with a zero right operand.
    #[error("Error at {position}: Division by zero.")]
    DivisionByZero {
        /// Position of the division expression.
        position: Position,
    },
    /// A call whose callee is not a function.
    #[error("Error at {position}: Cannot call value that is not a function: {found}.")]
    NotCallable {
        /// The callee's value.
        found:    String,
        /// Position of the call.
        position: Position,
    },
    /// An assignment whose left-hand side is not a name.
    #[error("Error at {position}: Invalid left-hand side in assignment: expected an identifier, found {found}.")]
    InvalidAssignmentTarget {
        /// The kind of expression found on the left.
        found:    String,
        /// Position of the target.
        position: Position,
    },
    /// Nested user function calls exceeded the configured depth.
    #[error("Error at {position}: Stack overflow: more than {limit} nested function calls.")]
    StackOverflow {
        /// The configured maximum call depth.
        limit:    usize,
        /// Position of the call that went over the limit.
        position: Position,
    },
    /// A function called with the wrong number of arguments.
    #[error("Error at {position}: Function '{name}' expects {expected} argument(s), but got {found}.")]
    ArityMismatch {
        /// The function's name.
        name:     String,
        /// Declared parameter count.
        expected: usize,
        /// Supplied argument count.
        found:    usize,
        /// Position of the call.
        position: Position,
    },
    /// `assert` received `false`.
    #[error("Error at {position}: Assertion failed.")]
    AssertionFailed {
        /// Position of the call.
        position: Position,
    },
    /// The output sink rejected a write.
    #[error("Error at {position}: Could not write output: {details}.")]
    OutputFailed {
        /// The I/O error message.
        details:  String,
        /// Position of the call.
        position: Position,
    },
}

impl RuntimeError {
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::UnresolvedIdentifier { .. } => 400,
            Self::Redeclaration { .. } => 401,
            Self::ConstantReassignment { .. } => 402,
            Self::TypeMismatch { .. } => 403,
            Self::DivisionByZero { .. } => 404,
            Self::NotCallable { .. } => 405,
            Self::InvalidAssignmentTarget { .. } => 406,
            Self::StackOverflow { .. } => 407,
            Self::ArityMismatch { .. } => 408,
            Self::AssertionFailed { .. } => 409,
            Self::OutputFailed { .. } => 410,
        }
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        Category::Runtime
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::UnresolvedIdentifier { .. } => "Unresolved identifier",
            Self::Redeclaration { .. } => "Redeclaration",
            Self::ConstantReassignment { .. } => "Constant reassignment",
            Self::TypeMismatch { .. } => "Type mismatch",
            Self::DivisionByZero { .. } => "Division by zero",
            Self::NotCallable { .. } => "Not callable",
            Self::InvalidAssignmentTarget { .. } => "Invalid assignment target",
            Self::StackOverflow { .. } => "Stack overflow",
            Self::ArityMismatch { .. } => "Arity mismatch",
            Self::AssertionFailed { .. } => "Assertion failed",
            Self::OutputFailed { .. } => "Output failed",
        }
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnresolvedIdentifier { position, .. }
            | Self::Redeclaration { position, .. }
            | Self::ConstantReassignment { position, .. }
            | Self::TypeMismatch { position, .. }
            | Self::DivisionByZero { position }
            | Self::NotCallable { position, .. }
            | Self::InvalidAssignmentTarget { position, .. }
            | Self::StackOverflow { position, .. }
            | Self::ArityMismatch { position, .. }
            | Self::AssertionFailed { position }
            | Self::OutputFailed { position, .. } => *position,
        }
    }
}
