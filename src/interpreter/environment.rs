use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::ProcedureDef,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// The mutable state of one program run.
///
/// Holds a single flat variable scope and the procedure table. There is no
/// nesting: blocks and procedure bodies read and write the same variables as
/// top-level code.
#[derive(Debug, Default)]
pub struct Environment {
    variables:  HashMap<String, Value>,
    procedures: HashMap<String, Rc<ProcedureDef>>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownVariable` if `name` is unbound.
    ///
    /// # Example
    /// ```
    /// use piratelang::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.set("gold", Value::Integer(10));
    ///
    /// assert_eq!(env.get("gold", 1).unwrap(), &Value::Integer(10));
    /// assert!(env.get("silver", 1).is_err());
    /// ```
    pub fn get(&self, name: &str, line: usize) -> EvalResult<&Value> {
        self.variables
            .get(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Returns `true` if a variable called `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    /// Registers a procedure under its declared name.
    ///
    /// Redeclaring a name replaces the earlier procedure.
    ///
    /// # Returns
    /// `true` if the name was new, `false` if an earlier declaration was
    /// replaced.
    pub fn declare_procedure(&mut self, def: Rc<ProcedureDef>) -> bool {
        self.procedures.insert(def.name.clone(), def).is_none()
    }

    /// Looks up a declared procedure.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownProcedure` if no procedure of that name
    /// has been declared so far.
    pub fn lookup_procedure(&self, name: &str, line: usize) -> EvalResult<Rc<ProcedureDef>> {
        self.procedures
            .get(name)
            .map(Rc::clone)
            .ok_or_else(|| RuntimeError::UnknownProcedure { name: name.to_string(),
                                                            line })
    }
}
