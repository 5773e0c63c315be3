use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement},
    },
};

/// Parses the body of a block whose header has already been consumed.
///
/// Statements are parsed until a line beginning with `}` is reached. Nested
/// blocks consume their own closing lines, so the first `}` seen here always
/// belongs to this block.
///
/// # Parameters
/// - `lines`: Remaining logical lines, positioned after the header.
/// - `line`: Line number of the header, reported if the block never closes.
///
/// # Returns
/// The statements of the block.
///
/// # Errors
/// - `UnterminatedBlock` if the lines run out before the closing brace.
/// - `UnexpectedTrailingTokens` if the closing line continues after `}`.
/// - Propagates any errors from statement parsing.
pub fn parse_block<'a, I>(lines: &mut Peekable<I>, line: usize) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a [(Token, usize)]>
{
    let mut statements = Vec::new();

    loop {
        match lines.peek() {
            None => return Err(ParseError::UnterminatedBlock { line }),
            Some(&next) if matches!(next.first(), Some((Token::RBrace, _))) => {
                lines.next();

                if let Some((token, l)) = next.get(1) {
                    return Err(ParseError::UnexpectedTrailingTokens { token: token.to_string(),
                                                                      line:  *l, });
                }

                return Ok(statements);
            },
            Some(_) => statements.push(parse_statement(lines)?),
        }
    }
}
