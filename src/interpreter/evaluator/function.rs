use std::rc::Rc;

use crate::{
    ast::{Expr, FunctionDecl, Position},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        value::{
            core::Value,
            function::{NativeFunction, UserFunction},
        },
    },
};

impl Evaluator {
    /// Evaluates a function declaration.
    ///
    /// The resulting function captures `env` as its closure and is bound in
    /// `env` as a constant, so a function name can be neither redeclared nor
    /// reassigned in the scope that declared it.
    ///
    /// # Returns
    /// The function value that was bound.
    pub fn eval_function_declaration(decl: &FunctionDecl, env: &Environment) -> EvalResult<Value> {
        let function = UserFunction { name:       decl.name.clone(),
                                      parameters: decl.parameters.clone(),
                                      body:       Rc::clone(&decl.body),
                                      closure:    env.clone(), };

        env.declare(&decl.name, function.into(), true, decl.position)
    }

    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then the arguments from left to right.
    ///
    /// # Errors
    /// - `NotCallable` if the callee is neither a user nor a native function.
    /// - `ArityMismatch` if the argument count differs from the declared one.
    /// - `StackOverflow` if the call would exceed the call depth limit.
    /// - Anything raised by the function body.
    pub fn eval_call(&mut self,
                     callee: &Expr,
                     arguments: &[Expr],
                     env: &Environment,
                     position: Position)
                     -> EvalResult<Value> {
        let callee = self.eval(callee, env)?;
        let arguments = arguments.iter()
                                 .map(|argument| self.eval(argument, env))
                                 .collect::<EvalResult<Vec<_>>>()?;

        match callee {
            Value::Function(function) => self.call_function(&function, &arguments, position),
            Value::Native(native) => Self::call_native(&native, &arguments, env, position),
            other => Err(RuntimeError::NotCallable { found: format!("{other} ({})", other.type_name()),
                                                     position }),
        }
    }

    /// Runs a user function with already evaluated arguments.
    ///
    /// The body runs in a fresh child of the function's closure with each
    /// parameter bound to the argument at the same position.
    pub fn call_function(&mut self,
                         function: &UserFunction,
                         arguments: &[Value],
                         position: Position)
                         -> EvalResult<Value> {
        if arguments.len() != function.parameters.len() {
            return Err(RuntimeError::ArityMismatch { name: function.name.clone(),
                                                     expected: function.parameters.len(),
                                                     found: arguments.len(),
                                                     position });
        }
        if self.call_depth >= self.max_call_depth() {
            return Err(RuntimeError::StackOverflow { limit: self.max_call_depth(),
                                                     position });
        }

        let scope = Environment::with_parent(&function.closure);
        for (parameter, argument) in function.parameters.iter().zip(arguments) {
            scope.declare(parameter, argument.clone(), false, position)?;
        }

        tracing::trace!(function = %function.name, depth = self.call_depth + 1, "call");

        self.call_depth += 1;
        let result = self.eval_block(&function.body, &scope);
        self.call_depth -= 1;

        result
    }

    fn call_native(native: &NativeFunction,
                   arguments: &[Value],
                   env: &Environment,
                   position: Position)
                   -> EvalResult<Value> {
        if let Some(expected) = native.arity
           && expected != arguments.len()
        {
            return Err(RuntimeError::ArityMismatch { name: native.name.to_string(),
                                                     expected,
                                                     found: arguments.len(),
                                                     position });
        }

        tracing::trace!(native = native.name, "call");
        native.call(arguments, env, position)
    }
}
