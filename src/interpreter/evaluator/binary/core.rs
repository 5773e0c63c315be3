use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// `+` goes to `eval_add`, which concatenates strings and lists.
    /// `-`, `*` and `/` go to `eval_numeric`.
    /// `be` uses structural equality via `values_equal`.
    /// The ordering operators use `eval_ordering`, which needs the context to
    /// decide whether a string operand may be read as a number.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use piratelang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, host::ScriptedHost, value::core::Value},
    /// };
    ///
    /// let mut host = ScriptedHost::default();
    /// let context = Context::new(&mut host);
    ///
    /// let result = context.eval_binary(BinaryOperator::Add, &Value::from("x"), &Value::Integer(5), 1);
    /// assert_eq!(result.unwrap(), Value::from("x5"));
    ///
    /// let result = context.eval_binary(BinaryOperator::Div, &Value::Integer(7), &Value::Integer(2), 1);
    /// assert_eq!(result.unwrap(), Value::Float(3.5));
    /// ```
    pub fn eval_binary(&self,
                       op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Be, Div, Greater, GreaterEqual, Less, LessEqual, Mul, Sub};

        match op {
            Add => Self::eval_add(left, right, line),
            Sub | Mul | Div => Self::eval_numeric(op, left, right, line),
            Be => Ok(Value::Bool(Self::values_equal(left, right))),
            Less => self.eval_ordering(left, right, line, Ordering::is_lt),
            Greater => self.eval_ordering(left, right, line, Ordering::is_gt),
            LessEqual => self.eval_ordering(left, right, line, Ordering::is_le),
            GreaterEqual => self.eval_ordering(left, right, line, Ordering::is_ge),
        }
    }
}
