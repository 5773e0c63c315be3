use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token that fits no grammar rule at this position.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An expression was required but the tokens ran out.
    ExpectedExpression {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A name was required, for example after `ask` or before `stash`.
    ExpectedIdentifier {
        /// What was found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A block header did not end in `{`.
    ExpectedOpeningBrace {
        /// The keyword starting the header.
        keyword: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A block opened on this line was never closed.
    UnterminatedBlock {
        /// The source line of the block header.
        line: usize,
    },
    /// A `}` appeared with no open block.
    UnmatchedClosingBrace {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found extra tokens after a closing brace.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The procedure declaration syntax was invalid.
    InvalidProcedureDeclaration {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A literal value was too large to be represented safely.
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl ParseError {
    /// Every parse error is a syntax error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::Syntax
    }

    /// The source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::ExpectedExpression { line }
            | Self::ExpectedIdentifier { line, .. }
            | Self::ExpectedOpeningBrace { line, .. }
            | Self::UnterminatedBlock { line }
            | Self::UnmatchedClosingBrace { line }
            | Self::UnexpectedTrailingTokens { line, .. }
            | Self::InvalidProcedureDeclaration { line }
            | Self::LiteralTooLarge { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} on line {}: ", self.kind(), self.line())?;

        match self {
            Self::UnexpectedToken { token, .. } => write!(f, "Unexpected token: {token}."),
            Self::ExpectedExpression { .. } => write!(f, "Expected an expression."),
            Self::ExpectedIdentifier { found, .. } => {
                write!(f, "Expected a name, found {found}.")
            },
            Self::ExpectedOpeningBrace { keyword, .. } => {
                write!(f, "Expected '{{' at the end of the '{keyword}' line.")
            },
            Self::UnterminatedBlock { .. } => {
                write!(f, "Block opened here is never closed with '}}'.")
            },
            Self::UnmatchedClosingBrace { .. } => {
                write!(f, "Found '}}' without an open block.")
            },
            Self::UnexpectedTrailingTokens { token, .. } => {
                write!(f, "Extra tokens after '}}': {token}")
            },
            Self::InvalidProcedureDeclaration { .. } => write!(f,
                                                              "Invalid procedure declaration. Example: plunder greet() {{"),
            Self::LiteralTooLarge { literal, .. } => {
                write!(f, "Literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
