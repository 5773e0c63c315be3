use log::debug;

use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{environment::Environment, host::Host, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Maximum number of procedure calls that may be active at once.
///
/// Each call uses several native stack frames. A call past this depth fails
/// with `RuntimeError::RecursionTooDeep` instead of overflowing the stack.
pub const MAX_CALL_DEPTH: usize = 400;

/// What happens after a statement has run.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Carry on with the next statement.
    Continue,
    /// A `booty` statement ran. The enclosing procedure body (or the program,
    /// at the top level) stops here.
    Return(Value),
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state for one program run: the single
/// global [`Environment`] and the [`Host`] through which `shout` and `ask`
/// talk to the outside world.
///
/// ## Usage
///
/// A `Context` is created once per run. [`Context::run`] executes a whole
/// program; [`Context::eval`] and [`Context::eval_statement`] are exposed for
/// embedders that drive execution themselves.
pub struct Context<'h> {
    /// Variables and procedures of the running program.
    pub environment:       Environment,
    /// Where output goes and input comes from.
    pub(crate) host:       &'h mut dyn Host,
    /// Number of procedure calls currently running.
    pub(crate) call_depth: usize,
}

impl<'h> Context<'h> {
    /// Creates a new evaluation context with an empty environment.
    #[must_use]
    pub fn new(host: &'h mut dyn Host) -> Self {
        Self { environment: Environment::new(),
               host,
               call_depth: 0 }
    }

    /// Executes every top-level statement of `program` in order.
    ///
    /// A `booty` at the top level ends the run early without an error.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised by any statement.
    ///
    /// # Example
    /// ```
    /// use piratelang::{
    ///     interpreter::{evaluator::core::Context, host::ScriptedHost},
    ///     parse,
    /// };
    ///
    /// let program = parse("shout 1\nbooty 0\nshout 2").unwrap();
    /// let mut host = ScriptedHost::default();
    ///
    /// Context::new(&mut host).run(&program).unwrap();
    /// assert_eq!(host.output(), ["1"]);
    /// ```
    pub fn run(&mut self, program: &Program) -> EvalResult<()> {
        if let Flow::Return(value) = self.exec_block(&program.statements)? {
            debug!("top-level booty {value}, stopping the run");
        }

        Ok(())
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Expressions
    /// never change the environment, so evaluation only needs shared access.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(value.into()),
            Expr::Variable { name, line } => self.environment.get(name, *line).cloned(),
            Expr::PropertyAccess { base,
                                   property,
                                   line, } => self.eval_property_access(base, property, *line),
            Expr::IndexAccess { base, index, line } => self.eval_index_access(base, index, *line),
            Expr::ListLiteral { elements, .. } => self.eval_list_literal(elements),
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                self.eval_binary(*op, &left, &right, *line)
            },
        }
    }

    /// Evaluates a single statement.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    ///
    /// # Returns
    /// [`Flow::Return`] if a `booty` statement ran, directly or inside a
    /// nested `if` or `loop` block; [`Flow::Continue`] otherwise.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::Print { expr, .. } => self.exec_print(expr),
            Statement::Input { name, line } => self.exec_input(name, *line),
            Statement::Assignment { name, value, .. } => self.exec_assignment(name, value),
            Statement::If { condition, body, .. } => self.exec_if(condition, body),
            Statement::Loop { condition, body, .. } => self.exec_loop(condition, body),
            Statement::ProcedureDecl(def) => self.declare_procedure(def),
            Statement::ProcedureCall { name, line, .. } => self.call_procedure(name, *line),
            Statement::Return { expr, .. } => Ok(Flow::Return(self.eval(expr)?)),
            Statement::Expression { expr, .. } => {
                self.eval(expr)?;
                Ok(Flow::Continue)
            },
        }
    }

    /// Runs statements in order until one returns.
    pub fn exec_block(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        for statement in statements {
            if let flow @ Flow::Return(_) = self.eval_statement(statement)? {
                return Ok(flow);
            }
        }

        Ok(Flow::Continue)
    }
}
