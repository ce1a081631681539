/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparison, equality and logical operators. Both
/// operands are always evaluated; `&&` and `||` do not short-circuit.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements logical negation, the only prefix operator.
pub mod unary;

/// Core evaluation logic and evaluator state.
///
/// Contains the `Evaluator`, dispatch over statements and expressions, and
/// the `EvalResult` alias used across the runtime.
pub mod core;

/// Evaluation of counted `for` loops.
pub mod for_loop;

/// Evaluation of conditional `while` loops.
pub mod while_loop;

/// Function declaration and call evaluation.
///
/// Builds closures from declarations and runs user and native functions,
/// enforcing arity and the call depth limit.
pub mod function;
