/// Source-reading and console errors.
///
/// Defines the errors raised by the host boundary: an unreadable program file,
/// a failed console read, or input that ran out while the program was still
/// asking for it.
pub mod host_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning tokens into a program.
/// Parse errors include unterminated blocks, stray closing braces, malformed
/// statements and expressions that match no known form.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unknown variables and procedures, operand type mismatches,
/// bad indices and arithmetic failures.
pub mod runtime_error;

pub use host_error::HostError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The class of a failure, independent of its exact cause.
///
/// Every error the interpreter produces belongs to exactly one kind. All kinds
/// are fatal: the run stops at the first error.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed program structure, detected before execution.
    Syntax,
    /// Reference to an unbound variable or undeclared procedure.
    Name,
    /// Operands of the wrong kind for an operator or property.
    Type,
    /// Non-integer or out-of-range index.
    Index,
    /// Division by zero or integer overflow.
    Arithmetic,
    /// Unreadable source or unavailable console input.
    Io,
    /// Procedure calls nested deeper than the interpreter allows.
    Recursion,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Syntax => "SyntaxError",
            Self::Name => "NameError",
            Self::Type => "TypeError",
            Self::Index => "IndexError",
            Self::Arithmetic => "ArithmeticError",
            Self::Io => "IOError",
            Self::Recursion => "RecursionError",
        };
        write!(f, "{name}")
    }
}

/// Classifies a boxed error returned by [`crate::run`].
///
/// Returns `None` for errors that did not originate in this crate.
///
/// # Example
/// ```
/// use piratelang::{
///     error::{ErrorKind, kind_of},
///     interpreter::host::ScriptedHost,
///     run,
/// };
///
/// let mut host = ScriptedHost::default();
/// let error = run("shout missing", &mut host).unwrap_err();
///
/// assert_eq!(kind_of(error.as_ref()), Some(ErrorKind::Name));
/// ```
#[must_use]
pub fn kind_of(error: &(dyn std::error::Error + 'static)) -> Option<ErrorKind> {
    if let Some(e) = error.downcast_ref::<ParseError>() {
        return Some(e.kind());
    }
    if let Some(e) = error.downcast_ref::<RuntimeError>() {
        return Some(e.kind());
    }
    if let Some(e) = error.downcast_ref::<HostError>() {
        return Some(e.kind());
    }
    None
}
