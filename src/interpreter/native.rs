use std::{cell::RefCell, io::Write, rc::Rc};

use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::EvalResult,
        value::{core::Value, function::NativeFunction},
    },
};

/// The sink `println` writes to.
pub type Output = Rc<RefCell<dyn Write>>;

/// Type alias for native function handlers.
///
/// A handler receives the evaluated arguments, the output sink and the
/// position of the call.
type NativeHandler = fn(&[Value], &Output, Position) -> EvalResult<Value>;

/// Defines the native functions by generating a registration table and a
/// name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact arity, or `None` for variadic natives,
/// - a function pointer implementing the native.
macro_rules! native_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct NativeDef {
            name:  &'static str,
            arity: Option<usize>,
            func:  NativeHandler,
        }
        static NATIVE_TABLE: &[NativeDef] = &[
            $(
                NativeDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every native function `install` registers.
        pub const NATIVE_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

native_functions! {
    "println" => { arity: None,    func: println },
    "assert"  => { arity: Some(1), func: assert },
}

/// Names of the constants `install` registers.
pub const NATIVE_CONSTANTS: &[&str] = &["true", "false", "nil"];

/// Registers the native bindings in `env`.
///
/// Binds the constants `true`, `false` and `nil`, then every native function,
/// all as constants. `println` writes to `output`.
///
/// # Errors
/// `Redeclaration` if `env` already binds one of the names.
///
/// # Example
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use april::{
///     ast::Position,
///     interpreter::{environment::Environment, native, value::core::Value},
/// };
///
/// let env = Environment::new();
/// native::install(&env, Rc::new(RefCell::new(std::io::sink()))).unwrap();
///
/// assert_eq!(env.lookup("true", Position::default()), Ok(Value::Bool(true)));
/// assert!(env.is_constant("println"));
/// ```
pub fn install(env: &Environment, output: Output) -> EvalResult<()> {
    let at = Position::default();
    env.declare("true", Value::Bool(true), true, at)?;
    env.declare("false", Value::Bool(false), true, at)?;
    env.declare("nil", Value::Nil, true, at)?;

    for def in NATIVE_TABLE {
        let sink = Rc::clone(&output);
        let handler = def.func;
        let native = NativeFunction::new(def.name, def.arity, move |arguments, _, position| {
            handler(arguments, &sink, position)
        });
        env.declare(def.name, native.into(), true, at)?;
    }

    tracing::debug!(natives = NATIVE_TABLE.len(), "installed native bindings");
    Ok(())
}

/// Writes the arguments separated by single spaces, then a newline.
fn println(arguments: &[Value], output: &Output, position: Position) -> EvalResult<Value> {
    let line = arguments.iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(" ");

    let mut sink = output.borrow_mut();
    writeln!(sink, "{line}").and_then(|()| sink.flush())
                            .map_err(|e| RuntimeError::OutputFailed { details: e.to_string(),
                                                                      position })?;
    Ok(Value::Nil)
}

/// Fails unless the single argument is `true`.
fn assert(arguments: &[Value], _: &Output, position: Position) -> EvalResult<Value> {
    match arguments {
        [value] => {
            if value.as_bool("assert", position)? {
                Ok(value.clone())
            } else {
                Err(RuntimeError::AssertionFailed { position })
            }
        },
        _ => Err(RuntimeError::ArityMismatch { name: "assert".to_string(),
                                               expected: 1,
                                               found: arguments.len(),
                                               position }),
    }
}
