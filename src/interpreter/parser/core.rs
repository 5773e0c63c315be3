use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{lexer::Token, parser::statement::parse_statement},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Splits a token stream into logical lines.
///
/// Lines are separated by [`Token::NewLine`]; the separators themselves are
/// dropped and empty lines are skipped, so every yielded slice has at least
/// one token.
pub fn split_lines(tokens: &[(Token, usize)]) -> impl Iterator<Item = &[(Token, usize)]> {
    tokens.split(|(token, _)| *token == Token::NewLine)
          .filter(|line| !line.is_empty())
}

/// Parses a whole program.
///
/// Statements are parsed line by line from the top. A line starting with `}`
/// at the top level has no block to close and is rejected.
///
/// # Parameters
/// - `tokens`: The `(Token, line)` pairs produced by the lexer.
///
/// # Returns
/// The parsed [`Program`].
///
/// # Errors
/// Returns the first `ParseError` encountered.
///
/// # Example
/// ```
/// use piratelang::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let program = parse_program(&tokenize("gold stash 3\nshout gold")).unwrap();
/// assert_eq!(program.statements.len(), 2);
///
/// assert!(parse_program(&tokenize("if aye {\nshout 1")).is_err());
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Program> {
    let mut lines = split_lines(tokens).peekable();
    let mut statements = Vec::new();

    while let Some(&line) = lines.peek() {
        if let Some((Token::RBrace, l)) = line.first() {
            return Err(ParseError::UnmatchedClosingBrace { line: *l });
        }

        statements.push(parse_statement(&mut lines)?);
    }

    Ok(Program { statements })
}
