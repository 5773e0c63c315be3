use crate::error::{ErrorKind, HostError};

#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use an unbound variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a procedure that has not been declared (yet).
    UnknownProcedure {
        /// The name of the procedure.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Read a property that does not exist.
    UnknownProperty {
        /// The name of the property.
        property: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An index was not an integer.
    InvalidIndex {
        /// Details about the offending index.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An index was outside `[0, length)`.
    IndexOutOfBounds {
        /// The length of the indexed value.
        length: usize,
        /// The requested index.
        found:  i64,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// Division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic left the 64-bit range.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Procedure calls were nested past the supported depth.
    RecursionTooDeep {
        /// The procedure whose call exceeded the limit.
        name:  String,
        /// The maximum number of nested calls.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The host could not provide input for `ask`.
    Input {
        /// The underlying host failure.
        source: HostError,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl RuntimeError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownVariable { .. } | Self::UnknownProcedure { .. } => ErrorKind::Name,
            Self::TypeError { .. } | Self::UnknownProperty { .. } => ErrorKind::Type,
            Self::InvalidIndex { .. } | Self::IndexOutOfBounds { .. } => ErrorKind::Index,
            Self::DivisionByZero { .. } | Self::Overflow { .. } => ErrorKind::Arithmetic,
            Self::RecursionTooDeep { .. } => ErrorKind::Recursion,
            Self::Input { .. } => ErrorKind::Io,
        }
    }

    /// The source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownVariable { line, .. }
            | Self::UnknownProcedure { line, .. }
            | Self::TypeError { line, .. }
            | Self::UnknownProperty { line, .. }
            | Self::InvalidIndex { line, .. }
            | Self::IndexOutOfBounds { line, .. }
            | Self::DivisionByZero { line }
            | Self::Overflow { line }
            | Self::RecursionTooDeep { line, .. }
            | Self::Input { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} on line {}: ", self.kind(), self.line())?;

        match self {
            Self::UnknownVariable { name, .. } => write!(f, "Unknown variable '{name}'."),
            Self::UnknownProcedure { name, .. } => write!(f,
                                                          "Unknown procedure '{name}'. Procedures must be plundered before they are called."),
            Self::TypeError { details, .. } => write!(f, "{details}."),
            Self::UnknownProperty { property, .. } => {
                write!(f, "Unknown property '{property}'.")
            },
            Self::InvalidIndex { details, .. } => write!(f, "Invalid index: {details}."),
            Self::IndexOutOfBounds { length, found, .. } => write!(f,
                                                                   "Index {found} is out of bounds for length {length}."),
            Self::DivisionByZero { .. } => write!(f, "Division by zero."),
            Self::Overflow { .. } => {
                write!(f, "Integer overflow while trying to compute result.")
            },
            Self::RecursionTooDeep { name, limit, .. } => write!(f,
                                                                 "Calling '{name}' would nest more than {limit} procedure calls."),
            Self::Input { source, .. } => write!(f, "{source}"),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Input { source, .. } => Some(source),
            _ => None,
        }
    }
}
