use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates `left + right`.
    ///
    /// If either operand is a string, the other one is rendered the way
    /// `shout` would print it and the two are concatenated. Two lists are
    /// concatenated into a new list. Everything else is numeric addition.
    ///
    /// # Example
    /// ```
    /// use piratelang::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let sum = Context::eval_add(&Value::Integer(5), &Value::from("x"), 1).unwrap();
    /// assert_eq!(sum, Value::from("5x"));
    ///
    /// let sum = Context::eval_add(&Value::from(vec![Value::Integer(1)]),
    ///                             &Value::from(vec![Value::Bool(true)]),
    ///                             1).unwrap();
    /// assert_eq!(sum.to_string(), "[1, aye]");
    /// ```
    pub fn eval_add(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        match (left, right) {
            (Value::Str(_), _) | (_, Value::Str(_)) => Ok(Value::Str(format!("{left}{right}"))),
            (Value::List(a), Value::List(b)) => {
                Ok(Value::List(a.iter().chain(b.iter()).cloned().collect()))
            },
            _ => Self::eval_numeric(BinaryOperator::Add, left, right, line),
        }
    }

    /// Evaluates a numeric arithmetic operation.
    ///
    /// Two integers stay integers, except under `/`, which always produces a
    /// float. Any float operand turns the result into a float.
    ///
    /// # Parameters
    /// - `op`: One of `Add`, `Sub`, `Mul` or `Div`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `TypeError` if an operand is not a number.
    /// - `Overflow` if integer arithmetic leaves the 64-bit range.
    /// - `DivisionByZero` if the divisor is zero.
    ///
    /// # Example
    /// ```
    /// use piratelang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let x = Value::Integer(6);
    /// let y = Value::Integer(3);
    ///
    /// assert_eq!(Context::eval_numeric(BinaryOperator::Div, &x, &y, 1).unwrap(),
    ///            Value::Float(2.0));
    /// assert!(Context::eval_numeric(BinaryOperator::Mul, &x, &Value::from("3"), 1).is_err());
    /// ```
    pub fn eval_numeric(op: BinaryOperator,
                        left: &Value,
                        right: &Value,
                        line: usize)
                        -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::{Float, Integer};

        if let (Integer(a), Integer(b)) = (left, right)
           && op != Div
        {
            let result = match op {
                Add => a.checked_add(*b),
                Sub => a.checked_sub(*b),
                Mul => a.checked_mul(*b),
                _ => return Err(type_mismatch(op, left, right, line)),
            };

            return result.map(Integer).ok_or(RuntimeError::Overflow { line });
        }

        let (Some(a), Some(b)) = (left.as_float(), right.as_float()) else {
            return Err(type_mismatch(op, left, right, line));
        };

        match op {
            Add => Ok(Float(a + b)),
            Sub => Ok(Float(a - b)),
            Mul => Ok(Float(a * b)),
            Div if b == 0.0 => Err(RuntimeError::DivisionByZero { line }),
            Div => Ok(Float(a / b)),
            _ => Err(type_mismatch(op, left, right, line)),
        }
    }
}

fn type_mismatch(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> RuntimeError {
    let details = match op {
        BinaryOperator::Mul => "only numbers may be multiplied".to_string(),
        BinaryOperator::Sub => "only numbers may be subtracted".to_string(),
        BinaryOperator::Div => "only numbers may be divided".to_string(),
        _ => format!("cannot apply '{op}' to {} and {}",
                     left.type_name(),
                     right.type_name()),
    };

    RuntimeError::TypeError { details, line }
}
