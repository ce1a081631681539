use std::{fmt, rc::Rc};

use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::function::{NativeFunction, UserFunction},
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every value an expression can produce, a variable can
/// hold, or a function can return.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The absence of a value. Declarations without an initializer, empty
    /// blocks and loops that never run all produce nil.
    #[default]
    Nil,
    /// A double precision floating-point number.
    Number(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison and logical operators, and required by `!`,
    /// `&&`, `||` and `while` conditions.
    Bool(bool),
    /// A function declared with `fn`, together with its captured scope.
    Function(Rc<UserFunction>),
    /// A function provided by the host.
    Native(NativeFunction),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<UserFunction> for Value {
    fn from(f: UserFunction) -> Self {
        Self::Function(Rc::new(f))
    }
}

impl From<NativeFunction> for Value {
    fn from(f: NativeFunction) -> Self {
        Self::Native(f)
    }
}

impl PartialEq for Value {
    /// Nil, numbers and booleans compare by value; functions compare by
    /// identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Native(a), Self::Native(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl Value {
    /// The name of this value's type, as used in error messages.
    ///
    /// ```
    /// use april::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Nil.type_name(), "nil");
    /// assert_eq!(Value::Number(1.0).type_name(), "number");
    /// assert_eq!(Value::Bool(true).type_name(), "bool");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Number(_) => "number",
            Self::Bool(_) => "bool",
            Self::Function(_) => "function",
            Self::Native(_) => "native function",
        }
    }

    /// Returns the boolean inside, or a type mismatch naming `context`.
    ///
    /// # Errors
    /// `TypeMismatch` if the value is not a boolean.
    ///
    /// # Example
    /// ```
    /// use april::{ast::Position, error::RuntimeError, interpreter::value::core::Value};
    ///
    /// assert_eq!(Value::Bool(true).as_bool("'!'", Position::default()), Ok(true));
    ///
    /// let err = Value::Nil.as_bool("'!'", Position::new(3, 7)).unwrap_err();
    /// assert!(matches!(err, RuntimeError::TypeMismatch { position, .. } if position.line == 3));
    /// ```
    pub fn as_bool(&self, context: &str, position: Position) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            other => Err(RuntimeError::TypeMismatch { details: format!("{context} expects a bool, found {}",
                                                                       other.type_name()),
                                                      position }),
        }
    }

    /// Tests whether the value can be called.
    #[must_use]
    pub const fn is_callable(&self) -> bool {
        matches!(self, Self::Function(_) | Self::Native(_))
    }
}

impl fmt::Display for Value {
    /// Formats the value as `println` shows it.
    ///
    /// Whole numbers print without a fractional part.
    ///
    /// ```
    /// use april::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(3.0).to_string(), "3");
    /// assert_eq!(Value::Number(2.5).to_string(), "2.5");
    /// assert_eq!(Value::Bool(false).to_string(), "false");
    /// assert_eq!(Value::Nil.to_string(), "nil");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Function(function) => write!(f, "<fn {}>", function.name),
            Self::Native(native) => write!(f, "<native fn {}>", native.name),
        }
    }
}
