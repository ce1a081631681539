use crate::{
    ast::{Position, Statement},
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates a counted loop.
    ///
    /// The body runs `iterations` times in `env` itself. No scope is opened
    /// per pass, so a `let` inside the body fails with a redeclaration on the
    /// second pass.
    ///
    /// # Returns
    /// The value of the last statement of the last pass, or nil if the body
    /// never ran.
    ///
    /// # Example
    /// ```
    /// use april::{
    ///     ast::{Expr, Position, Statement},
    ///     interpreter::{environment::Environment, evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let body = vec![Statement::Expression(Expr::NumericLiteral { value:    7.0,
    ///                                                              position: Position::default(), })];
    ///
    /// let mut evaluator = Evaluator::new();
    /// let env = Environment::new();
    ///
    /// let ran = evaluator.eval_for(3, &body, &env, Position::default()).unwrap();
    /// assert_eq!(ran, Value::Number(7.0));
    ///
    /// let skipped = evaluator.eval_for(0, &body, &env, Position::default()).unwrap();
    /// assert_eq!(skipped, Value::Nil);
    /// ```
    pub fn eval_for(&mut self,
                    iterations: u64,
                    body: &[Statement],
                    env: &Environment,
                    position: Position)
                    -> EvalResult<Value> {
        tracing::trace!(iterations, %position, "for loop");

        let mut last = Value::Nil;
        for _ in 0..iterations {
            last = self.eval_block(body, env)?;
        }
        Ok(last)
    }
}
