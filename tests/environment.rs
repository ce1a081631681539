use std::{cell::RefCell, io, rc::Rc};

use april::{
    ast::Position,
    error::RuntimeError,
    global_environment,
    interpreter::{
        environment::Environment,
        native::{self, NATIVE_CONSTANTS, NATIVE_FUNCTIONS},
        value::core::Value,
    },
};
use pretty_assertions::assert_eq;

const AT: Position = Position::new(1, 1);

#[test]
fn declare_and_lookup() {
    let env = Environment::new();
    assert_eq!(env.declare("x", Value::Number(1.0), false, AT), Ok(Value::Number(1.0)));
    assert_eq!(env.lookup("x", AT), Ok(Value::Number(1.0)));
    assert!(env.contains_local("x"));
    assert!(!env.is_constant("x"));
}

#[test]
fn redeclaration_in_the_same_scope_fails() {
    let env = Environment::new();
    env.declare("x", Value::Nil, false, AT).unwrap();

    let err = env.declare("x", Value::Bool(true), false, Position::new(3, 4)).unwrap_err();
    assert_eq!(err,
               RuntimeError::Redeclaration { name:     "x".into(),
                                             position: Position::new(3, 4), });
    assert_eq!(env.lookup("x", AT), Ok(Value::Nil));
}

#[test]
fn shadowing_an_outer_binding() {
    let outer = Environment::new();
    outer.declare("x", Value::Number(1.0), true, AT).unwrap();

    let inner = Environment::with_parent(&outer);
    inner.declare("x", Value::Number(2.0), false, AT).unwrap();
    inner.assign("x", Value::Number(3.0), AT).unwrap();

    assert_eq!(inner.lookup("x", AT), Ok(Value::Number(3.0)));
    assert_eq!(outer.lookup("x", AT), Ok(Value::Number(1.0)));
}

#[test]
fn assignment_reaches_the_declaring_scope() {
    let outer = Environment::new();
    outer.declare("count", Value::Number(0.0), false, AT).unwrap();

    let inner = Environment::with_parent(&Environment::with_parent(&outer));
    inner.assign("count", Value::Number(5.0), AT).unwrap();

    assert_eq!(outer.lookup("count", AT), Ok(Value::Number(5.0)));
    assert!(!inner.contains_local("count"));
}

#[test]
fn constants_cannot_be_reassigned() {
    let outer = Environment::new();
    outer.declare("c", Value::Number(1.0), true, AT).unwrap();
    let inner = Environment::with_parent(&outer);

    let err = inner.assign("c", Value::Number(2.0), Position::new(2, 1)).unwrap_err();
    assert_eq!(err,
               RuntimeError::ConstantReassignment { name:     "c".into(),
                                                    position: Position::new(2, 1), });
    assert!(outer.is_constant("c"));
    assert!(!inner.is_constant("c"));
}

#[test]
fn unresolved_names() {
    let env = Environment::with_parent(&Environment::new());

    assert!(matches!(env.lookup("ghost", AT), Err(RuntimeError::UnresolvedIdentifier { .. })));
    assert!(matches!(env.assign("ghost", Value::Nil, AT),
                     Err(RuntimeError::UnresolvedIdentifier { .. })));
    assert!(env.resolve("ghost", AT).is_err());
}

#[test]
fn resolve_returns_the_owning_scope() {
    let root = Environment::new();
    root.declare("a", Value::Nil, false, AT).unwrap();
    let middle = Environment::with_parent(&root);
    middle.declare("b", Value::Nil, false, AT).unwrap();
    let leaf = Environment::with_parent(&middle);

    assert!(leaf.resolve("a", AT).unwrap().ptr_eq(&root));
    assert!(leaf.resolve("b", AT).unwrap().ptr_eq(&middle));
    assert!(leaf.parent().is_some_and(|parent| parent.ptr_eq(&middle)));
    assert!(root.parent().is_none());
}

#[test]
fn clones_share_the_same_scope() {
    let env = Environment::new();
    let alias = env.clone();
    alias.declare("shared", Value::Bool(true), false, AT).unwrap();

    assert!(env.ptr_eq(&alias));
    assert_eq!(env.lookup("shared", AT), Ok(Value::Bool(true)));
}

#[test]
fn global_environment_has_the_native_bindings() {
    let env = global_environment();

    assert_eq!(NATIVE_CONSTANTS, &["true", "false", "nil"]);
    for name in NATIVE_CONSTANTS.iter().chain(NATIVE_FUNCTIONS) {
        assert!(env.contains_local(name), "{name} is missing");
        assert!(env.is_constant(name), "{name} is not constant");
    }
    assert_eq!(env.lookup("false", AT), Ok(Value::Bool(false)));
    assert_eq!(env.lookup("nil", AT), Ok(Value::Nil));
    assert!(env.lookup("println", AT).unwrap().is_callable());
}

#[test]
fn installing_natives_twice_fails() {
    let env = Environment::new();
    native::install(&env, Rc::new(RefCell::new(io::sink()))).unwrap();

    let err = native::install(&env, Rc::new(RefCell::new(io::sink()))).unwrap_err();
    assert_eq!(err.code(), 401);
}
