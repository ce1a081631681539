/// Numeric conversion helpers.
///
/// Number literals and runtime values are `f64`; these helpers narrow them to
/// integer types without silent truncation.
pub mod num;
/// Stack growth for deeply recursive code.
///
/// The parser and evaluator both recurse once per nesting level of the
/// source, so pathological input could otherwise exhaust the native stack
/// before the interpreter's own call depth limit is reached.
pub mod stack;
