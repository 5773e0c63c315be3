use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, expression::parse_expression, utils::find_top_level},
    },
};

/// Comparison operators in the order they are searched for. `be` always wins;
/// the ordering operators are tried one after another, so `a < b <= c` splits
/// at `<=`.
const COMPARISON_SCAN_ORDER: [(Token, BinaryOperator); 5] =
    [(Token::Be, BinaryOperator::Be),
     (Token::LessEqual, BinaryOperator::LessEqual),
     (Token::GreaterEqual, BinaryOperator::GreaterEqual),
     (Token::Less, BinaryOperator::Less),
     (Token::Greater, BinaryOperator::Greater)];

/// Parses the condition of an `if` or `loop` header.
///
/// A condition is a comparison split at the first top-level comparison
/// operator found in [`COMPARISON_SCAN_ORDER`], or else any expression, whose
/// truthiness is used when the condition is evaluated.
///
/// # Parameters
/// - `tokens`: The header tokens between the keyword and the opening brace.
/// - `line`: Line number of the header.
///
/// # Returns
/// The condition as an expression node.
///
/// # Errors
/// Returns a `ParseError` if either side of the comparison, or the plain
/// expression, fails to parse.
///
/// # Example
/// ```
/// use piratelang::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::condition::parse_condition},
/// };
///
/// let tokens = tokenize("count <= 3");
/// let condition = parse_condition(&tokens[..tokens.len() - 1], 1).unwrap();
///
/// assert!(matches!(condition, Expr::BinaryOp { op: BinaryOperator::LessEqual, .. }));
/// ```
pub fn parse_condition(tokens: &[(Token, usize)], line: usize) -> ParseResult<Expr> {
    for (operator_token, op) in &COMPARISON_SCAN_ORDER {
        if let Some(position) = find_top_level(tokens, |t| t == operator_token) {
            let line = tokens[position].1;
            let left = parse_expression(&tokens[..position], line)?;
            let right = parse_expression(&tokens[position + 1..], line)?;

            return Ok(Expr::BinaryOp { left: Box::new(left),
                                       op: *op,
                                       right: Box::new(right),
                                       line });
        }
    }

    parse_expression(tokens, line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ParseError, interpreter::lexer::tokenize};

    fn condition(source: &str) -> ParseResult<Expr> {
        let tokens = tokenize(source).into_iter()
                                     .filter(|(token, _)| *token != Token::NewLine)
                                     .collect::<Vec<_>>();
        parse_condition(&tokens, 1)
    }

    #[test]
    fn be_is_found_before_ordering_operators() {
        let Ok(Expr::BinaryOp { op, right, .. }) = condition("a < b be aye") else {
            panic!("expected a comparison");
        };

        assert_eq!(op, BinaryOperator::Be);
        assert!(matches!(*right, Expr::Literal { .. }));
    }

    #[test]
    fn falls_back_to_plain_expression() {
        assert!(matches!(condition("gold"), Ok(Expr::Variable { .. })));
        assert!(matches!(condition("nay"), Ok(Expr::Literal { .. })));
    }

    #[test]
    fn missing_operand_is_reported() {
        assert_eq!(condition("< 3"), Err(ParseError::ExpectedExpression { line: 1 }));
        assert_eq!(condition(""), Err(ParseError::ExpectedExpression { line: 1 }));
    }
}
