/// Callable values.
///
/// Defines `UserFunction`, a closure over the scope it was declared in, and
/// `NativeFunction`, a host-provided callable registered into the global
/// scope before a program runs.
pub mod function;

pub mod core;
