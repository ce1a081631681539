use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    fmt,
    rc::Rc,
};

use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

#[derive(Default)]
struct Scope {
    bindings:  HashMap<String, Value>,
    constants: HashSet<String>,
    parent:    Option<Environment>,
}

/// A lexical scope: a table of bindings linked to its enclosing scope.
///
/// `Environment` is a shared handle. Cloning it yields another reference to
/// the same scope, which is how closures and call frames keep the scope they
/// were created in alive after the frame that declared it has returned.
///
/// A function stored in the scope it captured forms a reference cycle that is
/// never freed. Scopes live until the interpreter is dropped, at most.
///
/// # Example
/// ```
/// use april::{
///     ast::Position,
///     interpreter::{environment::Environment, value::core::Value},
/// };
///
/// let globals = Environment::new();
/// globals.declare("x", Value::Number(1.0), false, Position::default()).unwrap();
///
/// let local = Environment::with_parent(&globals);
/// local.declare("x", Value::Number(2.0), false, Position::default()).unwrap();
///
/// assert_eq!(local.lookup("x", Position::default()), Ok(Value::Number(2.0)));
/// assert_eq!(globals.lookup("x", Position::default()), Ok(Value::Number(1.0)));
/// ```
#[derive(Clone, Default)]
pub struct Environment(Rc<RefCell<Scope>>);

impl Environment {
    /// Creates a root scope with no parent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scope nested inside `parent`.
    #[must_use]
    pub fn with_parent(parent: &Self) -> Self {
        Self(Rc::new(RefCell::new(Scope { parent: Some(parent.clone()),
                                          ..Scope::default() })))
    }

    /// Binds `name` in this scope and returns the bound value.
    ///
    /// Shadowing a binding of an enclosing scope is allowed; binding a name
    /// twice in the same scope is not.
    ///
    /// # Errors
    /// `Redeclaration` if this scope already binds `name`.
    pub fn declare(&self,
                   name: &str,
                   value: Value,
                   constant: bool,
                   position: Position)
                   -> EvalResult<Value> {
        let mut scope = self.0.borrow_mut();
        if scope.bindings.contains_key(name) {
            return Err(RuntimeError::Redeclaration { name: name.to_string(),
                                                     position });
        }

        scope.bindings.insert(name.to_string(), value.clone());
        if constant {
            scope.constants.insert(name.to_string());
        }
        Ok(value)
    }

    /// Rebinds `name` in the nearest scope that declares it and returns the
    /// new value.
    ///
    /// # Errors
    /// - `UnresolvedIdentifier` if no scope in the chain binds `name`.
    /// - `ConstantReassignment` if the resolving scope declared `name`
    ///   constant.
    pub fn assign(&self, name: &str, value: Value, position: Position) -> EvalResult<Value> {
        let owner = self.resolve(name, position)?;
        let mut scope = owner.0.borrow_mut();
        if scope.constants.contains(name) {
            return Err(RuntimeError::ConstantReassignment { name: name.to_string(),
                                                            position });
        }

        scope.bindings.insert(name.to_string(), value.clone());
        Ok(value)
    }

    /// Returns the value bound to `name` in the nearest scope that declares
    /// it.
    ///
    /// # Errors
    /// `UnresolvedIdentifier` if no scope in the chain binds `name`.
    pub fn lookup(&self, name: &str, position: Position) -> EvalResult<Value> {
        let owner = self.resolve(name, position)?;
        let scope = owner.0.borrow();
        scope.bindings
             .get(name)
             .cloned()
             .ok_or_else(|| RuntimeError::UnresolvedIdentifier { name: name.to_string(),
                                                                 position })
    }

    /// Walks outward from this scope and returns the first one binding
    /// `name`.
    ///
    /// # Errors
    /// `UnresolvedIdentifier` once the walk passes the root scope.
    pub fn resolve(&self, name: &str, position: Position) -> EvalResult<Self> {
        let mut current = self.clone();
        loop {
            if current.contains_local(name) {
                return Ok(current);
            }

            let parent = current.0.borrow().parent.clone();
            match parent {
                Some(parent) => current = parent,
                None => {
                    return Err(RuntimeError::UnresolvedIdentifier { name: name.to_string(),
                                                                    position });
                },
            }
        }
    }

    /// Tests whether this scope itself, ignoring its parents, binds `name`.
    #[must_use]
    pub fn contains_local(&self, name: &str) -> bool {
        self.0.borrow().bindings.contains_key(name)
    }

    /// Tests whether this scope declared `name` constant.
    #[must_use]
    pub fn is_constant(&self, name: &str) -> bool {
        self.0.borrow().constants.contains(name)
    }

    /// Returns the enclosing scope, if any.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.0.borrow().parent.clone()
    }

    /// Tests whether two handles refer to the same scope.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.0.borrow();
        let mut names: Vec<&String> = scope.bindings.keys().collect();
        names.sort();
        f.debug_struct("Environment")
         .field("names", &names)
         .field("has_parent", &scope.parent.is_some())
         .finish()
    }
}
