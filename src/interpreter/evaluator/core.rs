use crate::{
    ast::{Expr, Position, Program, Statement},
    error::RuntimeError,
    interpreter::{environment::Environment, value::core::Value},
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How many user function calls may be active at once by default.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 2000;

/// Walks the AST and computes values.
///
/// The evaluator itself holds no bindings; all program state lives in the
/// `Environment` passed to each method. What it does hold is the bookkeeping
/// for runaway recursion: the number of user function calls currently active
/// and the limit on that number.
///
/// ## Usage
///
/// An `Evaluator` can be reused across several programs, for instance one
/// per REPL line, all evaluated against the same global environment.
#[derive(Debug, Clone)]
pub struct Evaluator {
    pub(in crate::interpreter::evaluator) call_depth: usize,
    max_call_depth: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an evaluator with the default call depth limit.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_max_call_depth(DEFAULT_MAX_CALL_DEPTH)
    }

    /// Creates an evaluator that raises a stack overflow once more than
    /// `max_call_depth` user function calls are active.
    #[must_use]
    pub const fn with_max_call_depth(max_call_depth: usize) -> Self {
        Self { call_depth: 0,
               max_call_depth }
    }

    #[must_use]
    pub const fn max_call_depth(&self) -> usize {
        self.max_call_depth
    }

    /// Executes every top-level statement of `program` in order.
    ///
    /// # Returns
    /// The value of the last statement, or nil for an empty program.
    ///
    /// # Example
    /// ```
    /// use april::{
    ///     ast::{BinaryOperator, Expr, Position, Program, Statement},
    ///     interpreter::{environment::Environment, evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let number = |value| Expr::NumericLiteral { value,
    ///                                             position: Position::default() };
    /// let program =
    ///     Program { body: vec![Statement::Expression(Expr::Binary { left:     Box::new(number(2.0)),
    ///                                                                op:       BinaryOperator::Mul,
    ///                                                                right:    Box::new(number(21.0)),
    ///                                                                position: Position::default(), })], };
    ///
    /// let value = Evaluator::new().evaluate_program(&program, &Environment::new()).unwrap();
    /// assert_eq!(value, Value::Number(42.0));
    /// ```
    pub fn evaluate_program(&mut self, program: &Program, env: &Environment) -> EvalResult<Value> {
        tracing::debug!(statements = program.body.len(), "evaluating program");
        self.eval_block(&program.body, env)
    }

    /// Executes `statements` in order in `env`.
    ///
    /// No new scope is opened; function calls open their own before calling
    /// this, loops deliberately don't.
    pub fn eval_block(&mut self, statements: &[Statement], env: &Environment) -> EvalResult<Value> {
        let mut last = Value::Nil;
        for statement in statements {
            last = self.eval_statement(statement, env)?;
        }
        Ok(last)
    }

    /// Evaluates a single statement.
    ///
    /// Declarations yield the value they bind, loops the last value their
    /// body produced, and expression statements the expression's value.
    pub fn eval_statement(&mut self, statement: &Statement, env: &Environment) -> EvalResult<Value> {
        ensure_sufficient_stack(|| self.eval_statement_inner(statement, env))
    }

    fn eval_statement_inner(&mut self, statement: &Statement, env: &Environment) -> EvalResult<Value> {
        match statement {
            Statement::VarDeclaration { name,
                                        value,
                                        constant,
                                        position, } => {
                let value = match value {
                    Some(expr) => self.eval(expr, env)?,
                    None => Value::Nil,
                };
                env.declare(name, value, *constant, *position)
            },
            Statement::FuncDeclaration(decl) => Self::eval_function_declaration(decl, env),
            Statement::ForStatement { iterations,
                                      body,
                                      position, } => self.eval_for(*iterations, body, env, *position),
            Statement::WhileStatement { condition,
                                        body,
                                        position, } => self.eval_while(condition, body, env, *position),
            Statement::Expression(expr) => self.eval(expr, env),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Nested
    /// expressions recurse through here, so it is also where the native stack
    /// is grown when deeply nested source demands it.
    pub fn eval(&mut self, expr: &Expr, env: &Environment) -> EvalResult<Value> {
        ensure_sufficient_stack(|| self.eval_expr(expr, env))
    }

    fn eval_expr(&mut self, expr: &Expr, env: &Environment) -> EvalResult<Value> {
        match expr {
            Expr::NumericLiteral { value, .. } => Ok(Value::Number(*value)),
            Expr::BooleanLiteral { value, .. } => Ok(Value::Bool(*value)),
            Expr::Identifier { name, position } => env.lookup(name, *position),
            Expr::Assignment { target,
                               value,
                               position, } => self.eval_assignment(target, value, env, *position),
            Expr::Unary { op,
                          operand,
                          position, } => {
                let operand = self.eval(operand, env)?;
                Self::eval_unary(*op, &operand, *position)
            },
            Expr::Binary { left,
                           op,
                           right,
                           position, } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                Self::eval_binary(*op, &left, &right, *position)
            },
            Expr::Call { callee,
                         arguments,
                         position, } => self.eval_call(callee, arguments, env, *position),
        }
    }

    /// Evaluates `target = value`.
    ///
    /// The target must be a bare identifier; its shape is checked before the
    /// right-hand side runs.
    fn eval_assignment(&mut self,
                       target: &Expr,
                       value: &Expr,
                       env: &Environment,
                       position: Position)
                       -> EvalResult<Value> {
        let Expr::Identifier { name, .. } = target else {
            return Err(RuntimeError::InvalidAssignmentTarget { found:    target.kind().to_string(),
                                                               position: target.position(), });
        };

        let value = self.eval(value, env)?;
        env.assign(name, value, position)
    }
}
