use std::{iter::Peekable, rc::Rc};

use log::trace;

use crate::{
    ast::{ProcedureDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            condition::parse_condition,
            core::ParseResult,
            expression::parse_expression,
            utils::{describe, parse_identifier, split_top_level},
        },
    },
};

/// Parses the statement on the next logical line.
///
/// The leading token decides the kind of statement:
/// - `shout <expr>` prints,
/// - `ask <name>` reads a line of input,
/// - `if <condition> {` and `loop [if] <condition> {` open a block,
/// - `plunder <name>(<params>) {` declares a procedure,
/// - `booty <expr>` returns.
///
/// Lines with no leading keyword are tried as `<name> stash <expr>`, then as
/// a procedure call `<name>(<args>)`, and otherwise parsed as an expression
/// statement.
///
/// Block statements also consume the lines of their body, up to and including
/// the closing brace.
///
/// # Parameters
/// - `lines`: Remaining logical lines. The next line must exist.
///
/// # Returns
/// A parsed [`Statement`] node.
///
/// # Errors
/// Returns a `ParseError` if the line, or any line of a block it opens, is
/// malformed.
pub fn parse_statement<'a, I>(lines: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a [(Token, usize)]>
{
    let Some(tokens) = lines.next() else {
        return Err(ParseError::ExpectedExpression { line: 0 });
    };
    let Some(&(_, line)) = tokens.first() else {
        return Err(ParseError::ExpectedExpression { line: 0 });
    };

    trace!("line {line}: {}", describe(tokens));

    match tokens {
        [(Token::Shout, _), rest @ ..] => Ok(Statement::Print { expr: parse_expression(rest, line)?,
                                                                line }),
        [(Token::Ask, _), rest @ ..] => Ok(Statement::Input { name: parse_identifier(rest, line)?,
                                                              line }),
        [(Token::Booty, _), rest @ ..] => Ok(Statement::Return { expr: parse_expression(rest, line)?,
                                                                 line }),
        [(Token::If, _), rest @ ..] => {
            let condition = parse_condition(block_header(rest, "if", line)?, line)?;
            let body = parse_block(lines, line)?;

            Ok(Statement::If { condition, body, line })
        },
        [(Token::Loop, _), (Token::If, _), rest @ ..] | [(Token::Loop, _), rest @ ..] => {
            let condition = parse_condition(block_header(rest, "loop", line)?, line)?;
            let body = parse_block(lines, line)?;

            Ok(Statement::Loop { condition, body, line })
        },
        [(Token::Plunder, _), rest @ ..] => {
            let (name, params) = parse_procedure_header(block_header(rest, "plunder", line)?, line)?;
            let body = parse_block(lines, line)?;

            Ok(Statement::ProcedureDecl(Rc::new(ProcedureDef { name,
                                                               params,
                                                               body,
                                                               line })))
        },
        _ => {
            if let Some(statement) = parse_assignment(tokens, line)? {
                return Ok(statement);
            }
            if let Some(statement) = parse_procedure_call(tokens, line)? {
                return Ok(statement);
            }

            Ok(Statement::Expression { expr: parse_expression(tokens, line)?,
                                       line })
        },
    }
}

/// Strips the `{` that must end a block header.
///
/// # Errors
/// Returns `ExpectedOpeningBrace` naming `keyword` if the header does not end
/// in `{`.
fn block_header<'t>(tokens: &'t [(Token, usize)],
                    keyword: &str,
                    line: usize)
                    -> ParseResult<&'t [(Token, usize)]> {
    match tokens {
        [header @ .., (Token::LBrace, _)] => Ok(header),
        _ => Err(ParseError::ExpectedOpeningBrace { keyword: keyword.to_string(),
                                                    line }),
    }
}

/// Parses `<name>(<param>, ...)` from a `plunder` header.
fn parse_procedure_header(tokens: &[(Token, usize)],
                          line: usize)
                          -> ParseResult<(String, Vec<String>)> {
    let [(Token::Identifier(name), _), (Token::LParen, _), params @ .., (Token::RParen, _)] =
        tokens
    else {
        return Err(ParseError::InvalidProcedureDeclaration { line });
    };

    let params = split_top_level(params, &Token::Comma).into_iter()
                                                       .map(|param| parse_identifier(param, line))
                                                       .collect::<ParseResult<Vec<_>>>()?;

    Ok((name.clone(), params))
}

/// Parses `<name> stash <expr>`.
///
/// Any line containing `stash` is an assignment attempt; if `stash` is not
/// preceded by exactly one name, the target is reported as invalid.
///
/// # Returns
/// - `Ok(Some(Statement::Assignment))` if the line holds `stash`,
/// - `Ok(None)` otherwise.
fn parse_assignment(tokens: &[(Token, usize)], line: usize) -> ParseResult<Option<Statement>> {
    let Some(position) = tokens.iter().position(|(token, _)| *token == Token::Stash) else {
        return Ok(None);
    };

    let name = parse_identifier(&tokens[..position], line)?;
    let value = parse_expression(&tokens[position + 1..], line)?;

    Ok(Some(Statement::Assignment { name, value, line }))
}

/// Parses `<name>(<args>)` when the parentheses enclose the rest of the line.
///
/// The arguments must be valid expressions. They are kept on the node but
/// never evaluated.
fn parse_procedure_call(tokens: &[(Token, usize)], line: usize) -> ParseResult<Option<Statement>> {
    let [(Token::Identifier(name), _), (Token::LParen, _), args @ .., (Token::RParen, _)] = tokens
    else {
        return Ok(None);
    };

    if !is_balanced(args) {
        return Ok(None);
    }

    let arguments = split_top_level(args, &Token::Comma).into_iter()
                                                        .map(|arg| parse_expression(arg, line))
                                                        .collect::<ParseResult<Vec<_>>>()?;

    Ok(Some(Statement::ProcedureCall { name: name.clone(),
                                       arguments,
                                       line }))
}

/// Returns `true` if every `(` and `[` in `tokens` is closed within it.
fn is_balanced(tokens: &[(Token, usize)]) -> bool {
    let mut depth = 0usize;

    for (token, _) in tokens {
        match token {
            Token::LParen | Token::LBracket => depth += 1,
            Token::RParen | Token::RBracket => {
                let Some(next) = depth.checked_sub(1) else {
                    return false;
                };
                depth = next;
            },
            _ => {},
        }
    }

    depth == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::Expr,
        interpreter::{lexer::tokenize, parser::core::split_lines},
    };

    fn statement(source: &str) -> ParseResult<Statement> {
        let tokens = tokenize(source);
        parse_statement(&mut split_lines(&tokens).peekable())
    }

    #[test]
    fn stash_needs_a_single_name() {
        assert!(matches!(statement("gold stash 5"), Ok(Statement::Assignment { .. })));
        assert!(matches!(statement("stash 5"), Err(ParseError::ExpectedIdentifier { .. })));
        assert!(matches!(statement("a b stash 5"), Err(ParseError::ExpectedIdentifier { .. })));
        assert!(matches!(statement("gold stash"), Err(ParseError::ExpectedExpression { .. })));
    }

    #[test]
    fn loop_accepts_optional_if() {
        let plain = statement("loop i < 3 {\n}").unwrap();
        let with_if = statement("loop if i < 3 {\n}").unwrap();

        let (Statement::Loop { condition: a, .. }, Statement::Loop { condition: b, .. }) =
            (plain, with_if)
        else {
            panic!("expected two loops");
        };
        assert_eq!(a, b);
    }

    #[test]
    fn header_without_brace_is_rejected() {
        assert_eq!(statement("if aye"),
                   Err(ParseError::ExpectedOpeningBrace { keyword: "if".to_string(),
                                                          line:    1, }));
    }

    #[test]
    fn procedure_header_shapes() {
        let Ok(Statement::ProcedureDecl(def)) = statement("plunder greet(who, when) {\n}") else {
            panic!("expected a procedure declaration");
        };
        assert_eq!(def.name, "greet");
        assert_eq!(def.params, vec!["who".to_string(), "when".to_string()]);
        assert!(def.body.is_empty());

        assert_eq!(statement("plunder greet {\n}"),
                   Err(ParseError::InvalidProcedureDeclaration { line: 1 }));
    }

    #[test]
    fn calls_keep_their_arguments() {
        let Ok(Statement::ProcedureCall { name, arguments, .. }) = statement("greet(1, [2, 3])")
        else {
            panic!("expected a call");
        };

        assert_eq!(name, "greet");
        assert_eq!(arguments.len(), 2);
        assert!(matches!(arguments[1], Expr::ListLiteral { .. }));
    }
}
