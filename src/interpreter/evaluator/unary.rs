use crate::{
    ast::{Position, UnaryOperator},
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator {
    /// Applies a unary operator to an evaluated operand.
    ///
    /// `!` is the only unary operator, and it requires a bool.
    ///
    /// # Example
    /// ```
    /// use april::{
    ///     ast::{Position, UnaryOperator},
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Not, &Value::Bool(false), Position::default());
    /// assert_eq!(v, Ok(Value::Bool(true)));
    ///
    /// assert!(Evaluator::eval_unary(UnaryOperator::Not, &Value::Number(1.0), Position::default()).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, position: Position) -> EvalResult<Value> {
        match op {
            UnaryOperator::Not => Ok(Value::Bool(!value.as_bool("'!'", position)?)),
        }
    }
}
