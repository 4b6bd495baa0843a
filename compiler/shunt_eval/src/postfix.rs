//! Stack-based evaluation of postfix sequences.

use shunt_lexer::Token;

use crate::arith::apply;
use crate::error::{EvalError, EvalResult};

/// Evaluates a Reverse Polish token sequence.
///
/// Operands are pushed onto a value stack; each operator pops its right and
/// then its left operand and pushes the result. Exactly one value has to
/// remain once the sequence is consumed.
///
/// # Examples
///
/// ```
/// use shunt_ast::PostfixExpression;
/// use shunt_eval::{evaluate_postfix, EvalError};
///
/// let postfix: PostfixExpression = "8 3 - 2 -".parse().unwrap();
/// assert_eq!(evaluate_postfix(&postfix), Ok(3));
///
/// let short: PostfixExpression = "3 +".parse().unwrap();
/// assert!(matches!(
///     evaluate_postfix(&short),
///     Err(EvalError::InsufficientOperands(_))
/// ));
/// ```
pub fn evaluate_postfix<'a, I>(tokens: I) -> EvalResult<i64>
where
    I: IntoIterator<Item = &'a Token>,
{
    let mut values: Vec<i64> = Vec::new();

    for token in tokens {
        let operator = match token {
            Token::Number(value) => {
                values.push(*value);
                continue;
            }
            Token::Operator(op) => *op,
            other => {
                log::error!("no arithmetic defined for {:?}", other);
                return Err(EvalError::UnknownOperator(*other));
            }
        };

        let (left, right) = match (values.pop(), values.pop()) {
            (Some(right), Some(left)) => (left, right),
            _ => return Err(EvalError::InsufficientOperands(operator)),
        };
        let result = apply(operator, left, right)?;
        log::trace!("{} {} {} = {}", left, operator, right, result);
        values.push(result);
    }

    match values.as_slice() {
        [value] => Ok(*value),
        rest => Err(EvalError::MalformedExpression(rest.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shunt_ast::PostfixExpression;
    use shunt_lexer::Operator;

    fn eval(source: &str) -> EvalResult<i64> {
        let postfix: PostfixExpression = source.parse().unwrap();
        evaluate_postfix(&postfix)
    }

    #[test]
    fn test_single_operand() {
        assert_eq!(eval("5"), Ok(5));
        assert_eq!(eval("-5"), Ok(-5));
    }

    #[test]
    fn test_operand_order() {
        assert_eq!(eval("8 3 -"), Ok(5));
        assert_eq!(eval("8 3 - 2 -"), Ok(3));
        assert_eq!(eval("2 3 ^ 2 ^"), Ok(64));
        assert_eq!(eval("2 3 2 ^ ^"), Ok(512));
    }

    #[test]
    fn test_insufficient_operands() {
        assert_eq!(
            eval("3 +"),
            Err(EvalError::InsufficientOperands(Operator::Plus))
        );
        assert_eq!(
            eval("*"),
            Err(EvalError::InsufficientOperands(Operator::Times))
        );
    }

    #[test]
    fn test_residual_values() {
        assert_eq!(eval("1 2"), Err(EvalError::MalformedExpression(2)));
        assert_eq!(eval(""), Err(EvalError::MalformedExpression(0)));
    }

    #[test]
    fn test_zero_divisors() {
        assert_eq!(eval("5 0 /"), Err(EvalError::DivisionByZero));
        assert_eq!(eval("5 0 %"), Err(EvalError::ModuloByZero));
    }

    #[test]
    fn test_parenthesis_in_operator_position() {
        let tokens = [Token::Number(1), Token::Number(2), Token::Open];
        assert_eq!(
            evaluate_postfix(&tokens),
            Err(EvalError::UnknownOperator(Token::Open))
        );
        let tokens = vec![Token::Number(1), Token::Nil];
        assert_eq!(
            evaluate_postfix(&tokens),
            Err(EvalError::UnknownOperator(Token::Nil))
        );
    }
}
