use crate::{
    ast::{BinaryOperator, Expr, LiteralValue},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            utils::{find_top_level, has_top_level_arithmetic, matching_open_bracket,
                    split_top_level},
        },
    },
};

/// Arithmetic operators in the order they are searched for. The first one
/// found anywhere at the top level of an expression becomes its root,
/// regardless of where the others are.
const ARITHMETIC_SCAN_ORDER: [(Token, BinaryOperator); 4] = [(Token::Plus, BinaryOperator::Add),
                                                             (Token::Minus, BinaryOperator::Sub),
                                                             (Token::Star, BinaryOperator::Mul),
                                                             (Token::Slash, BinaryOperator::Div)];

/// Parses a full expression.
///
/// The forms are tried in this order, and the first match wins:
/// 1. property access `base.name`,
/// 2. a single identifier, string, number or boolean,
/// 3. a list literal `[a, b]` or an index access `base[index]`,
/// 4. arithmetic, split at the first top-level `+`, else `-`, else `*`,
///    else `/`.
///
/// Step 4 gives `10 - 4 - 3` the meaning `10 - (4 - 3)`, and `12 / 2 * 3` the
/// meaning `(12 / 2) * 3`, because the search order decides the split, not the
/// position.
///
/// # Parameters
/// - `tokens`: The tokens of the expression, without a line terminator.
/// - `line`: Line number used when `tokens` is empty.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// - `ExpectedExpression` if `tokens` (or an operand) is empty.
/// - `UnexpectedToken` if the tokens match none of the forms.
/// - `LiteralTooLarge` for integer literals beyond the 64-bit range.
///
/// # Example
/// ```
/// use piratelang::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::expression::parse_expression},
/// };
///
/// let tokens = tokenize("10 - 4 - 3");
/// let expr = parse_expression(&tokens[..tokens.len() - 1], 1).unwrap();
///
/// let Expr::BinaryOp { left, op, .. } = expr else { panic!("expected a binary operation") };
/// assert_eq!(op, BinaryOperator::Sub);
/// assert!(matches!(*left, Expr::Literal { .. }));
/// ```
pub fn parse_expression(tokens: &[(Token, usize)], line: usize) -> ParseResult<Expr> {
    if tokens.is_empty() {
        return Err(ParseError::ExpectedExpression { line });
    }

    if let Some(expr) = parse_property_access(tokens)? {
        return Ok(expr);
    }

    if let [(token, token_line)] = tokens {
        return parse_atom(token, *token_line);
    }

    if let Some(expr) = parse_bracketed(tokens)? {
        return Ok(expr);
    }

    if let Some(expr) = parse_arithmetic(tokens)? {
        return Ok(expr);
    }

    let (token, token_line) = offending_token(tokens);
    Err(ParseError::UnexpectedToken { token: token.to_string(),
                                      line:  *token_line, })
}

/// Parses `base.property` where the property name is the final token.
///
/// The base must not contain top-level arithmetic; `a + b.length` is left
/// for the arithmetic split so that the property binds to `b` alone.
fn parse_property_access(tokens: &[(Token, usize)]) -> ParseResult<Option<Expr>> {
    let [base @ .., (Token::Dot, line), (Token::Identifier(property), _)] = tokens else {
        return Ok(None);
    };

    if base.is_empty() || has_top_level_arithmetic(base) {
        return Ok(None);
    }

    Ok(Some(Expr::PropertyAccess { base:     Box::new(parse_expression(base, *line)?),
                                   property: property.clone(),
                                   line:     *line, }))
}

/// Parses a single-token expression.
fn parse_atom(token: &Token, line: usize) -> ParseResult<Expr> {
    let value = match token {
        Token::Identifier(name) => {
            return Ok(Expr::Variable { name: name.clone(),
                                       line });
        },
        Token::Str(text) => LiteralValue::Str(text.clone()),
        Token::Bool(b) => LiteralValue::Bool(*b),
        Token::Integer(text) => {
            let n = text.parse::<i64>()
                        .map_err(|_| ParseError::LiteralTooLarge { literal: text.clone(),
                                                                   line })?;
            LiteralValue::Integer(n)
        },
        Token::Float(text) => {
            let x = text.parse::<f64>()
                        .map_err(|_| ParseError::LiteralTooLarge { literal: text.clone(),
                                                                   line })?;
            LiteralValue::Float(x)
        },
        other => {
            return Err(ParseError::UnexpectedToken { token: other.to_string(),
                                                     line });
        },
    };

    Ok(Expr::Literal { value, line })
}

/// Parses expressions ending in `]`.
///
/// When the matching `[` starts the expression, the whole thing is a list
/// literal. Otherwise the tokens before it form the base of an index access,
/// unless that base contains top-level arithmetic (`a + b[0]` indexes `b`,
/// not `a + b`).
fn parse_bracketed(tokens: &[(Token, usize)]) -> ParseResult<Option<Expr>> {
    let Some(open) = matching_open_bracket(tokens) else {
        return Ok(None);
    };

    let line = tokens[open].1;
    let inner = &tokens[open + 1..tokens.len() - 1];

    if open == 0 {
        let elements = split_top_level(inner, &Token::Comma).into_iter()
                                                            .map(|element| {
                                                                parse_expression(element, line)
                                                            })
                                                            .collect::<ParseResult<Vec<_>>>()?;

        return Ok(Some(Expr::ListLiteral { elements, line }));
    }

    let base = &tokens[..open];
    if has_top_level_arithmetic(base) {
        return Ok(None);
    }

    Ok(Some(Expr::IndexAccess { base: Box::new(parse_expression(base, line)?),
                                index: Box::new(parse_expression(inner, line)?),
                                line }))
}

/// Splits the expression at the first top-level arithmetic operator, trying
/// the operators in [`ARITHMETIC_SCAN_ORDER`].
fn parse_arithmetic(tokens: &[(Token, usize)]) -> ParseResult<Option<Expr>> {
    for (operator_token, op) in &ARITHMETIC_SCAN_ORDER {
        if let Some(position) = find_top_level(tokens, |t| t == operator_token) {
            let line = tokens[position].1;
            let left = parse_expression(&tokens[..position], line)?;
            let right = parse_expression(&tokens[position + 1..], line)?;

            return Ok(Some(Expr::BinaryOp { left: Box::new(left),
                                            op: *op,
                                            right: Box::new(right),
                                            line }));
        }
    }

    Ok(None)
}

/// Picks the token to blame when an expression matches no form: the first
/// token that can never be part of an expression, else the second token.
fn offending_token(tokens: &[(Token, usize)]) -> &(Token, usize) {
    tokens.iter()
          .find(|(token, _)| {
              !matches!(token,
                        Token::Identifier(_)
                        | Token::Str(_)
                        | Token::Integer(_)
                        | Token::Float(_)
                        | Token::Bool(_)
                        | Token::Plus
                        | Token::Minus
                        | Token::Star
                        | Token::Slash
                        | Token::Dot
                        | Token::Comma
                        | Token::LBracket
                        | Token::RBracket)
          })
          .or_else(|| tokens.get(1))
          .unwrap_or(&tokens[0])
}
