use crate::{
    ast::{BinaryOperator, Position},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator {
    /// Applies a binary operator to two already evaluated operands.
    ///
    /// Operator families and the operands they accept:
    /// - arithmetic (`+ - * / %`): two numbers, producing a number. `/` by
    ///   zero fails; `%` follows IEEE remainder, so `x % 0` is NaN.
    /// - ordering (`< > <= >=`): two numbers, producing a bool.
    /// - equality (`== !=`): two numbers, two bools or two nils, producing a
    ///   bool.
    /// - logical (`&& ||`): two bools, producing a bool.
    ///
    /// Any other combination is a type mismatch naming the operator and both
    /// operand types.
    ///
    /// # Example
    /// ```
    /// use april::{
    ///     ast::{BinaryOperator, Position},
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let at = Position::default();
    /// let v = Evaluator::eval_binary(BinaryOperator::Sub, &Value::Number(10.0), &Value::Number(3.0), at);
    /// assert_eq!(v, Ok(Value::Number(7.0)));
    ///
    /// let v = Evaluator::eval_binary(BinaryOperator::Less, &Value::Number(1.0), &Value::Number(2.0), at);
    /// assert_eq!(v, Ok(Value::Bool(true)));
    ///
    /// let err = Evaluator::eval_binary(BinaryOperator::Div, &Value::Number(5.0), &Value::Number(0.0), at);
    /// assert!(matches!(err, Err(RuntimeError::DivisionByZero { .. })));
    ///
    /// let err = Evaluator::eval_binary(BinaryOperator::Add, &Value::Bool(true), &Value::Number(1.0), at);
    /// assert!(matches!(err, Err(RuntimeError::TypeMismatch { .. })));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       position: Position)
                       -> EvalResult<Value> {
        match (left, right) {
            (Value::Number(a), Value::Number(b)) => Self::eval_numeric(op, *a, *b, position),
            (Value::Bool(a), Value::Bool(b)) => match op {
                BinaryOperator::And => Ok(Value::Bool(*a && *b)),
                BinaryOperator::Or => Ok(Value::Bool(*a || *b)),
                BinaryOperator::Equal => Ok(Value::Bool(a == b)),
                BinaryOperator::NotEqual => Ok(Value::Bool(a != b)),
                _ => Err(mismatch(op, left, right, position)),
            },
            (Value::Nil, Value::Nil) => match op {
                BinaryOperator::Equal => Ok(Value::Bool(true)),
                BinaryOperator::NotEqual => Ok(Value::Bool(false)),
                _ => Err(mismatch(op, left, right, position)),
            },
            _ => Err(mismatch(op, left, right, position)),
        }
    }

    fn eval_numeric(op: BinaryOperator, a: f64, b: f64, position: Position) -> EvalResult<Value> {
        #[allow(clippy::float_cmp)]
        let value = match op {
            BinaryOperator::Add => Value::Number(a + b),
            BinaryOperator::Sub => Value::Number(a - b),
            BinaryOperator::Mul => Value::Number(a * b),
            BinaryOperator::Div => {
                if b == 0.0 {
                    return Err(RuntimeError::DivisionByZero { position });
                }
                Value::Number(a / b)
            },
            BinaryOperator::Mod => Value::Number(a % b),
            BinaryOperator::Less => Value::Bool(a < b),
            BinaryOperator::Greater => Value::Bool(a > b),
            BinaryOperator::LessEqual => Value::Bool(a <= b),
            BinaryOperator::GreaterEqual => Value::Bool(a >= b),
            BinaryOperator::Equal => Value::Bool(a == b),
            BinaryOperator::NotEqual => Value::Bool(a != b),
            BinaryOperator::And | BinaryOperator::Or => {
                return Err(mismatch(op, &Value::Number(a), &Value::Number(b), position));
            },
        };
        Ok(value)
    }
}

fn mismatch(op: BinaryOperator, left: &Value, right: &Value, position: Position) -> RuntimeError {
    RuntimeError::TypeMismatch { details: format!("'{op}' is not defined for {} and {}",
                                                  left.type_name(),
                                                  right.type_name()),
                                 position }
}
