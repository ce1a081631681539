//! # april
//!
//! april is a small, dynamically typed scripting language with a tree-walking
//! interpreter written in Rust. Source text is scanned into tokens, parsed
//! into an abstract syntax tree and evaluated directly against a chain of
//! lexical scopes. The language has numbers, booleans, nil, closures, counted
//! and conditional loops, and a handful of native functions.
//!
//! ```
//! use april::{global_environment, interpreter::value::core::Value, run};
//!
//! let source = "
//!     fn counter() {
//!         let n = 0;
//!         fn next() { n = n + 1 }
//!     }
//!     const tick = counter();
//!     tick(); tick();
//!     tick()
//! ";
//! assert_eq!(run(source, &global_environment()), Ok(Value::Number(3.0)));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{cell::RefCell, rc::Rc};

use crate::{
    error::Error,
    interpreter::{
        environment::Environment,
        evaluator::core::Evaluator,
        lexer::scan,
        native::{self, Output},
        parser::core::parse,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines one variant per language construct.
/// - Attaches source positions to every node for error reporting.
/// - Exposes each node's kind tag.
pub mod ast;
/// Provides unified error types for scanning, parsing and evaluation.
///
/// This module defines all errors that can be raised while running code. Each
/// carries a numeric code, a category, a description and the source position
/// it was raised at, and can be turned into a host-facing `Diagnostic`.
///
/// # Responsibilities
/// - Defines one error enum per phase (lexer, parser, evaluator).
/// - Wraps them in the crate-level `Error`.
/// - Renders caret-style diagnostics.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, scopes, runtime
/// values and native bindings to provide a complete runtime for source code.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser and evaluator.
/// - Provides entry points for each phase.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for numeric conversion and stack growth.
///
/// # Responsibilities
/// - Safely narrow `f64` values to integers without silent data loss.
/// - Grow the native stack for deeply nested source.
pub mod util;

/// Creates a global scope whose `println` writes to stdout.
#[must_use]
pub fn global_environment() -> Environment {
    global_environment_with_output(Rc::new(RefCell::new(std::io::stdout())))
}

/// Creates a global scope whose `println` writes to `output`.
///
/// Hosts and tests use this to capture program output.
///
/// # Example
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use april::{global_environment_with_output, run};
///
/// let buffer = Rc::new(RefCell::new(Vec::<u8>::new()));
/// let env = global_environment_with_output(buffer.clone());
///
/// run("println(1, 2 < 3, nil);", &env).unwrap();
/// assert_eq!(buffer.borrow().as_slice(), b"1 true nil\n");
/// ```
#[must_use]
pub fn global_environment_with_output(output: Output) -> Environment {
    let env = Environment::new();
    if let Err(e) = native::install(&env, output) {
        // A fresh scope binds nothing, so installation cannot collide.
        tracing::error!(error = %e, "failed to install native bindings");
    }
    env
}

/// Scans, parses and evaluates `source` in `env`.
///
/// Bindings the program declares stay in `env`, so running several sources
/// against the same environment behaves like one longer program.
///
/// # Errors
/// Returns the first lexical, syntax or runtime error.
///
/// # Examples
/// ```
/// use april::{global_environment, interpreter::value::core::Value, run};
///
/// let env = global_environment();
/// assert_eq!(run("let x = 2 + 3 * 4;", &env), Ok(Value::Number(14.0)));
/// assert_eq!(run("x - 4", &env), Ok(Value::Number(10.0)));
///
/// let err = run("5 / 0;", &env).unwrap_err();
/// assert_eq!(err.code(), 404);
/// ```
pub fn run(source: &str, env: &Environment) -> Result<Value, Error> {
    run_with(&mut Evaluator::new(), source, env)
}

/// Like [`run`], but evaluates with the given evaluator.
///
/// Use this to configure the call depth limit.
///
/// # Example
/// ```
/// use april::{global_environment, interpreter::evaluator::core::Evaluator, run_with};
///
/// let mut evaluator = Evaluator::with_max_call_depth(10);
/// let err = run_with(&mut evaluator, "fn f() { f() } f();", &global_environment()).unwrap_err();
/// assert_eq!(err.code(), 407);
/// ```
pub fn run_with(evaluator: &mut Evaluator, source: &str, env: &Environment) -> Result<Value, Error> {
    let tokens = scan(source)?;
    let program = parse(&tokens)?;
    Ok(evaluator.evaluate_program(&program, env)?)
}

/// Runs `source` against a fresh global environment.
///
/// If `auto_print` is set, the value of the program's last statement is
/// printed to stdout afterwards.
///
/// # Errors
/// Returns the first lexical, syntax or runtime error.
///
/// # Examples
/// ```
/// use april::get_result;
///
/// // Simple program: no error should occur.
/// let source = "let result = 2 + 2;";
/// let res = get_result(source, false);
/// assert!(res.is_ok());
///
/// // Example with an intentional error (unknown variable).
/// let source = "let y = x + 1;"; // 'x' is not defined
/// let res = get_result(source, false);
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<(), Error> {
    let value = run(source, &global_environment())?;

    if auto_print {
        println!("{value}");
    }

    Ok(())
}
