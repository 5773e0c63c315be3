use std::rc::Rc;

use log::{debug, warn};

use crate::{
    ast::ProcedureDef,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult, Flow, MAX_CALL_DEPTH},
};

impl Context<'_> {
    /// Registers a procedure so later calls can find it.
    ///
    /// The body does not run. Declaring a name twice replaces the first
    /// procedure; this is allowed but logged as a warning.
    pub(crate) fn declare_procedure(&mut self, def: &Rc<ProcedureDef>) -> EvalResult<Flow> {
        if self.environment.declare_procedure(Rc::clone(def)) {
            debug!("declared procedure '{}' on line {}", def.name, def.line);
        } else {
            warn!("procedure '{}' redeclared on line {}; the new body replaces the old one",
                  def.name,
                  def.line);
        }

        Ok(Flow::Continue)
    }

    /// Runs the body of a previously declared procedure.
    ///
    /// The body shares the global environment with its caller. A `booty` in
    /// the body ends the call; its value is dropped and execution continues
    /// after the call site.
    ///
    /// # Errors
    /// - `RuntimeError::UnknownProcedure` if `name` has not been declared yet.
    /// - `RuntimeError::RecursionTooDeep` if [`MAX_CALL_DEPTH`] calls are
    ///   already running.
    /// - Whatever error the body raises.
    ///
    /// # Example
    /// ```
    /// use piratelang::{interpreter::host::ScriptedHost, run};
    ///
    /// let source = "plunder greet() {\n    shout \"ahoy\"\n    booty 1\n    shout \"never\"\n}\ngreet()\ngreet()";
    /// let mut host = ScriptedHost::default();
    ///
    /// run(source, &mut host).unwrap();
    /// assert_eq!(host.output(), ["ahoy", "ahoy"]);
    /// ```
    pub fn call_procedure(&mut self, name: &str, line: usize) -> EvalResult<Flow> {
        let def = self.environment.lookup_procedure(name, line)?;

        if self.call_depth >= MAX_CALL_DEPTH {
            return Err(RuntimeError::RecursionTooDeep { name: name.to_string(),
                                                        limit: MAX_CALL_DEPTH,
                                                        line });
        }
        debug!("calling procedure '{name}' from line {line}");

        self.call_depth += 1;
        let flow = self.exec_block(&def.body);
        self.call_depth -= 1;

        if let Flow::Return(value) = flow? {
            debug!("procedure '{name}' returned {value}");
        }

        Ok(Flow::Continue)
    }
}
