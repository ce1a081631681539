use crate::{
    ast::{Expr, Position, Statement},
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates a conditional loop.
    ///
    /// The condition is re-evaluated before every pass and the body runs in
    /// `env` itself. The loop stops as soon as the condition is anything other
    /// than `true`; a condition that is not a bool ends the loop without an
    /// error.
    ///
    /// # Returns
    /// The value of the last statement of the last pass, or nil if the body
    /// never ran.
    pub fn eval_while(&mut self,
                      condition: &Expr,
                      body: &[Statement],
                      env: &Environment,
                      position: Position)
                      -> EvalResult<Value> {
        tracing::trace!(%position, "while loop");

        let mut last = Value::Nil;
        while let Value::Bool(true) = self.eval(condition, env)? {
            last = self.eval_block(body, env)?;
        }
        Ok(last)
    }
}
