use std::{fmt, rc::Rc};

use crate::{
    ast::{Position, Statement},
    interpreter::{environment::Environment, evaluator::core::EvalResult, value::core::Value},
};

/// A function declared in source with `fn`.
///
/// `body` is the declaration's own `Rc`, so every value created from the same
/// declaration points at one statement slice. `closure` is the scope that was
/// current when the declaration ran. Each call runs the body in a fresh child
/// of `closure`, never of the caller's scope.
pub struct UserFunction {
    pub name:       String,
    pub parameters: Vec<String>,
    pub body:       Rc<[Statement]>,
    pub closure:    Environment,
}

impl fmt::Debug for UserFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserFunction")
         .field("name", &self.name)
         .field("parameters", &self.parameters)
         .finish_non_exhaustive()
    }
}

/// The signature every native function implements.
///
/// Natives receive the evaluated arguments, the calling scope and the
/// position of the call expression.
pub type NativeFn = dyn Fn(&[Value], &Environment, Position) -> EvalResult<Value>;

/// A function implemented by the host.
#[derive(Clone)]
pub struct NativeFunction {
    pub name:  &'static str,
    /// The exact argument count, or `None` for variadic natives.
    pub arity: Option<usize>,
    pub func:  Rc<NativeFn>,
}

impl NativeFunction {
    pub fn new(name: &'static str,
               arity: Option<usize>,
               func: impl Fn(&[Value], &Environment, Position) -> EvalResult<Value> + 'static)
               -> Self {
        Self { name,
               arity,
               func: Rc::new(func) }
    }

    /// Invokes the native.
    ///
    /// # Errors
    /// Whatever the native itself raises.
    pub fn call(&self, arguments: &[Value], env: &Environment, position: Position) -> EvalResult<Value> {
        (self.func)(arguments, env, position)
    }

    /// Tests whether both handles refer to the same native.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}
