// Recursive evaluation of expression trees

use shunt_ast::{ExpressionNode, Visitable, Visitor};
use shunt_lexer::Operator;

use crate::arith::apply;
use crate::error::{EvalError, EvalResult};

/// Reduces a tree bottom-up: leaves yield their value, internal nodes apply
/// their operator to the values of both subtrees.
#[derive(Debug, Default)]
pub struct TreeEvaluator;

impl Visitor for TreeEvaluator {
    type Output = i64;
    type Error = EvalError;

    fn visit_number(&mut self, value: i64) -> EvalResult<i64> {
        Ok(value)
    }

    fn visit_binary(&mut self, operator: Operator, left: i64, right: i64) -> EvalResult<i64> {
        let result = apply(operator, left, right)?;
        log::trace!("{} {} {} = {}", left, operator, right, result);
        Ok(result)
    }
}

/// Evaluates an expression tree with the same arithmetic as
/// [`evaluate_postfix`](crate::evaluate_postfix).
pub fn evaluate_expression(tree: &ExpressionNode) -> EvalResult<i64> {
    tree.accept(&mut TreeEvaluator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn num(n: i64) -> ExpressionNode {
        ExpressionNode::number(n)
    }

    #[test]
    fn test_leaf() {
        assert_eq!(evaluate_expression(&num(5)), Ok(5));
    }

    #[test]
    fn test_nested_tree() {
        // (1 + 2) * (3 + 4)
        let tree = ExpressionNode::binary(
            Operator::Times,
            ExpressionNode::binary(Operator::Plus, num(1), num(2)),
            ExpressionNode::binary(Operator::Plus, num(3), num(4)),
        );
        assert_eq!(evaluate_expression(&tree), Ok(21));
    }

    #[test]
    fn test_zero_divisors() {
        let div = ExpressionNode::binary(Operator::Div, num(5), num(0));
        assert_eq!(evaluate_expression(&div), Err(EvalError::DivisionByZero));
        let rem = ExpressionNode::binary(Operator::Mod, num(5), num(0));
        assert_eq!(evaluate_expression(&rem), Err(EvalError::ModuloByZero));
    }

    #[test]
    fn test_error_in_left_subtree_wins() {
        let tree = ExpressionNode::binary(
            Operator::Plus,
            ExpressionNode::binary(Operator::Div, num(1), num(0)),
            ExpressionNode::binary(Operator::Mod, num(1), num(0)),
        );
        assert_eq!(evaluate_expression(&tree), Err(EvalError::DivisionByZero));
    }
}
