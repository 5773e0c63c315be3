use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::{checked_index, usize_to_i64_checked},
};

impl Context<'_> {
    /// Evaluates `base.property`.
    ///
    /// The only property is `length`: the number of characters of a string or
    /// the number of elements of a list.
    ///
    /// # Errors
    /// - `UnknownProperty` for any property other than `length`.
    /// - `TypeError` if the base is neither a string nor a list.
    ///
    /// # Example
    /// ```
    /// use piratelang::{interpreter::host::ScriptedHost, run};
    ///
    /// let mut host = ScriptedHost::default();
    /// run("ship stash \"Ünicorn\"\nshout ship.length", &mut host).unwrap();
    ///
    /// assert_eq!(host.output(), ["7"]);
    /// ```
    pub fn eval_property_access(&self, base: &Expr, property: &str, line: usize) -> EvalResult<Value> {
        if property != "length" {
            return Err(RuntimeError::UnknownProperty { property: property.to_string(),
                                                       line });
        }

        let length = match self.eval(base)? {
            Value::Str(s) => s.chars().count(),
            Value::List(items) => items.len(),
            other => {
                return Err(RuntimeError::TypeError { details: format!("a {} has no length",
                                                                      other.type_name()),
                                                     line });
            },
        };

        Ok(Value::Integer(usize_to_i64_checked(length, RuntimeError::Overflow { line })?))
    }

    /// Evaluates `base[index]`.
    ///
    /// Strings are indexed by character and yield one-character strings.
    /// Lists yield a copy of the element.
    ///
    /// # Errors
    /// - `TypeError` if the base is neither a string nor a list.
    /// - `InvalidIndex` if the index is not an integer.
    /// - `IndexOutOfBounds` if the index is negative or past the end.
    pub fn eval_index_access(&self, base: &Expr, index: &Expr, line: usize) -> EvalResult<Value> {
        let base = self.eval(base)?;
        let index = match self.eval(index)? {
            Value::Integer(n) => n,
            other => {
                return Err(RuntimeError::InvalidIndex { details: format!("expected an integer, found {} '{other}'",
                                                                         other.type_name()),
                                                        line });
            },
        };

        match base {
            Value::Str(s) => {
                let length = s.chars().count();
                checked_index(index, length).and_then(|i| s.chars().nth(i))
                                            .map(|c| Value::Str(c.to_string()))
                                            .ok_or(RuntimeError::IndexOutOfBounds { length,
                                                                                    found: index,
                                                                                    line })
            },
            Value::List(mut items) => {
                let length = items.len();
                checked_index(index, length).map(|i| items.swap_remove(i))
                                            .ok_or(RuntimeError::IndexOutOfBounds { length,
                                                                                    found: index,
                                                                                    line })
            },
            other => Err(RuntimeError::TypeError { details: format!("a {} cannot be indexed",
                                                                    other.type_name()),
                                                   line }),
        }
    }

    /// Evaluates the elements of a list literal from left to right.
    pub(crate) fn eval_list_literal(&self, elements: &[Expr]) -> EvalResult<Value> {
        elements.iter()
                .map(|element| self.eval(element))
                .collect::<EvalResult<Vec<_>>>()
                .map(Value::List)
    }
}
