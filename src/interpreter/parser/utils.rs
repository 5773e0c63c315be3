use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Finds the first token outside any `[...]` or `(...)` group that satisfies
/// `predicate`.
///
/// Brackets and parentheses are tracked together; unbalanced closers are
/// ignored instead of making the depth negative.
pub(in crate::interpreter::parser) fn find_top_level(tokens: &[(Token, usize)],
                                                     predicate: impl Fn(&Token) -> bool)
                                                     -> Option<usize> {
    let mut depth = 0usize;

    for (index, (token, _)) in tokens.iter().enumerate() {
        match token {
            Token::LBracket | Token::LParen => depth += 1,
            Token::RBracket | Token::RParen => depth = depth.saturating_sub(1),
            t if depth == 0 && predicate(t) => return Some(index),
            _ => {},
        }
    }

    None
}

/// Returns `true` if `token` is one of `+`, `-`, `*` or `/`.
pub(in crate::interpreter::parser) const fn is_arithmetic(token: &Token) -> bool {
    matches!(token, Token::Plus | Token::Minus | Token::Star | Token::Slash)
}

/// Returns `true` if an arithmetic operator appears outside of brackets.
pub(in crate::interpreter::parser) fn has_top_level_arithmetic(tokens: &[(Token, usize)]) -> bool {
    find_top_level(tokens, is_arithmetic).is_some()
}

/// Finds the `[` that matches the final `]` of `tokens`.
///
/// Returns `None` if the last token is not `]` or the brackets are unbalanced.
pub(in crate::interpreter::parser) fn matching_open_bracket(tokens: &[(Token, usize)])
                                                            -> Option<usize> {
    if !matches!(tokens.last(), Some((Token::RBracket, _))) {
        return None;
    }

    let mut depth = 0usize;

    for (index, (token, _)) in tokens.iter().enumerate().rev() {
        match token {
            Token::RBracket => depth += 1,
            Token::LBracket => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(index);
                }
            },
            _ => {},
        }
    }

    None
}

/// Splits `tokens` at every top-level `separator`.
///
/// An empty input produces no pieces; otherwise there is always one more
/// piece than there are separators, so `a,` yields an empty final piece.
pub(in crate::interpreter::parser) fn split_top_level<'t>(tokens: &'t [(Token, usize)],
                                                          separator: &Token)
                                                          -> Vec<&'t [(Token, usize)]> {
    let mut pieces = Vec::new();

    if tokens.is_empty() {
        return pieces;
    }

    let mut rest = tokens;

    while let Some(position) = find_top_level(rest, |t| t == separator) {
        pieces.push(&rest[..position]);
        rest = &rest[position + 1..];
    }
    pieces.push(rest);

    pieces
}

/// Parses a line remainder that must consist of exactly one identifier.
///
/// # Parameters
/// - `tokens`: The tokens expected to hold the identifier.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The identifier.
///
/// # Errors
/// Returns `ExpectedIdentifier` if `tokens` is empty, longer than one token,
/// or holds a non-identifier.
pub(in crate::interpreter::parser) fn parse_identifier(tokens: &[(Token, usize)],
                                                       line: usize)
                                                       -> ParseResult<String> {
    match tokens {
        [(Token::Identifier(name), _)] => Ok(name.clone()),
        _ => Err(ParseError::ExpectedIdentifier { found: describe(tokens),
                                                  line }),
    }
}

/// Renders tokens back into readable source text for error messages.
pub(in crate::interpreter::parser) fn describe(tokens: &[(Token, usize)]) -> String {
    if tokens.is_empty() {
        return "nothing".to_string();
    }

    let text = tokens.iter()
                     .map(|(token, _)| token.to_string())
                     .collect::<Vec<_>>()
                     .join(" ");
    format!("'{text}'")
}
