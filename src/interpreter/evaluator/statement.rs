use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Flow},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates `expr` and writes its rendering as one output line.
    pub(crate) fn exec_print(&mut self, expr: &Expr) -> EvalResult<Flow> {
        let value = self.eval(expr)?;
        self.host.write_output_line(&value.to_string());

        Ok(Flow::Continue)
    }

    /// Reads one line from the host and binds it to `name`.
    ///
    /// The text becomes an integer if it parses as one, else a float if it
    /// parses as one, else a string.
    pub(crate) fn exec_input(&mut self, name: &str, line: usize) -> EvalResult<Flow> {
        let text = self.host
                       .read_input_line()
                       .map_err(|source| RuntimeError::Input { source, line })?;

        self.environment.set(name, Value::from_input(&text));
        Ok(Flow::Continue)
    }

    pub(crate) fn exec_assignment(&mut self, name: &str, value: &Expr) -> EvalResult<Flow> {
        let value = self.eval(value)?;
        self.environment.set(name, value);

        Ok(Flow::Continue)
    }

    /// Runs `body` once if `condition` is truthy.
    pub(crate) fn exec_if(&mut self, condition: &Expr, body: &[Statement]) -> EvalResult<Flow> {
        if self.eval(condition)?.is_truthy() {
            return self.exec_block(body);
        }

        Ok(Flow::Continue)
    }

    /// Runs `body` for as long as `condition` is truthy, checking it before
    /// every iteration. There is no iteration limit.
    pub(crate) fn exec_loop(&mut self, condition: &Expr, body: &[Statement]) -> EvalResult<Flow> {
        while self.eval(condition)?.is_truthy() {
            if let flow @ Flow::Return(_) = self.exec_block(body)? {
                return Ok(flow);
            }
        }

        Ok(Flow::Continue)
    }
}
