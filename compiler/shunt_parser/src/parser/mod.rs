// Shunting-yard parser for infix expressions.
// One pass, two sinks: a binary expression tree or a postfix token sequence.

pub mod error;
pub mod shunting_yard;
pub mod sink;
pub mod test_utils;

pub use error::{ParseError, ParseResult};
pub use shunting_yard::{shunting_yard, MAX_NESTING_DEPTH};
pub use sink::{PostfixSink, Sink, TreeSink, MAX_TREE_DEPTH};

use shunt_ast::{ExpressionNode, PostfixExpression};
use shunt_lexer::Token;

/// Builds the expression tree for an infix token sequence.
///
/// A trailing operator that runs out of operands gets a zero in their
/// place instead of failing, see [`TreeSink`].
pub fn infix_to_tree(tokens: &[Token]) -> ParseResult<ExpressionNode> {
    shunting_yard(tokens, TreeSink::new())
}

/// Converts an infix token sequence to Reverse Polish order.
pub fn infix_to_postfix(tokens: &[Token]) -> ParseResult<PostfixExpression> {
    shunting_yard(tokens, PostfixSink::new())
}
