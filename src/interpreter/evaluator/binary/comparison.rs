use std::cmp::Ordering;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::i64_to_f64,
};

impl Context<'_> {
    /// Structural equality used by `be`.
    ///
    /// Integers and floats compare by numeric value, lists element by element.
    /// Values of any other differing kinds are unequal.
    ///
    /// # Example
    /// ```
    /// use piratelang::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// assert!(Context::values_equal(&Value::Integer(2), &Value::Float(2.0)));
    /// assert!(!Context::values_equal(&Value::Integer(1), &Value::Bool(true)));
    /// assert!(!Context::values_equal(&Value::from("1"), &Value::Integer(1)));
    /// ```
    #[must_use]
    pub fn values_equal(left: &Value, right: &Value) -> bool {
        match (left, right) {
            (Value::Integer(n), Value::Float(x)) | (Value::Float(x), Value::Integer(n)) => {
                i64_to_f64(*n) == *x
            },
            (Value::List(a), Value::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(a, b)| Self::values_equal(a, b))
            },
            _ => left == right,
        }
    }

    /// Evaluates an ordering comparison.
    ///
    /// A string operand that is not the name of a bound variable and reads as
    /// a number is compared as that number, so input such as `"7"` still
    /// compares against `5`. Afterwards numbers compare numerically, strings
    /// lexicographically and booleans with `nay` below `aye`. Comparisons
    /// involving NaN are false.
    ///
    /// # Parameters
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    /// - `accept`: Decides from the ordering whether the comparison holds.
    ///
    /// # Errors
    /// Returns `TypeError` for any other pairing of kinds.
    pub fn eval_ordering(&self,
                         left: &Value,
                         right: &Value,
                         line: usize,
                         accept: fn(Ordering) -> bool)
                         -> EvalResult<Value> {
        let left = self.coerce_numeric_text(left);
        let right = self.coerce_numeric_text(right);

        let ordering = match (&left, &right) {
            (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
            (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (a, b) if a.is_numeric() && b.is_numeric() => {
                match (a.as_float(), b.as_float()) {
                    (Some(a), Some(b)) => a.partial_cmp(&b),
                    _ => None,
                }
            },
            _ => {
                return Err(RuntimeError::TypeError { details: format!("cannot compare {} with {}",
                                                                      left.type_name(),
                                                                      right.type_name()),
                                                     line });
            },
        };

        Ok(Value::Bool(ordering.is_some_and(accept)))
    }

    /// Reads a string as a number unless it names a bound variable.
    fn coerce_numeric_text(&self, value: &Value) -> Value {
        match value {
            Value::Str(text) if !self.environment.contains(text) => {
                Value::parse_number(text).unwrap_or_else(|| value.clone())
            },
            _ => value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::host::ScriptedHost;

    #[test]
    fn numeric_text_is_coerced() {
        let mut host = ScriptedHost::default();
        let context = Context::new(&mut host);

        let result = context.eval_ordering(&Value::from("7"), &Value::Integer(5), 1, Ordering::is_gt);
        assert_eq!(result.unwrap(), Value::Bool(true));
    }

    #[test]
    fn bound_names_are_not_coerced() {
        let mut host = ScriptedHost::default();
        let mut context = Context::new(&mut host);
        context.environment.set("7", Value::Integer(0));

        let result = context.eval_ordering(&Value::from("7"), &Value::Integer(5), 1, Ordering::is_gt);
        assert!(matches!(result, Err(RuntimeError::TypeError { .. })));
    }

    #[test]
    fn nan_is_never_ordered() {
        let mut host = ScriptedHost::default();
        let context = Context::new(&mut host);

        for accept in [Ordering::is_lt, Ordering::is_le, Ordering::is_gt, Ordering::is_ge] {
            let result = context.eval_ordering(&Value::Float(f64::NAN), &Value::Integer(1), 1, accept);
            assert_eq!(result.unwrap(), Value::Bool(false));
        }
    }

    #[test]
    fn booleans_order_nay_before_aye() {
        let mut host = ScriptedHost::default();
        let context = Context::new(&mut host);

        let result = context.eval_ordering(&Value::Bool(false), &Value::Bool(true), 1, Ordering::is_lt);
        assert_eq!(result.unwrap(), Value::Bool(true));
    }
}
