//! Output sinks for the shunting-yard pass.
//!
//! The pass decides *when* an operator is reduced; a sink decides *what*
//! reducing means. The tree sink combines the two topmost subtrees, the
//! postfix sink appends the operator to its output.

use shunt_ast::{ExpressionNode, PostfixExpression};
use shunt_lexer::{Operator, Token};

use super::error::{ParseError, ParseResult};

/// Receives operands and reductions from the shunting-yard pass.
pub trait Sink {
    /// What the sink produces once the input is exhausted.
    type Output;

    fn operand(&mut self, value: i64);

    /// Reduces one operator while input is still being read.
    fn reduce(&mut self, operator: Operator) -> ParseResult<()>;

    /// Reduces one operator left on the stack after the input ended.
    fn reduce_trailing(&mut self, operator: Operator) -> ParseResult<()> {
        self.reduce(operator)
    }

    fn finish(self) -> ParseResult<Self::Output>;
}

/// Deepest tree the tree sink builds. Display, evaluation and drop all
/// recurse once per level, and a long left-associative chain grows one level
/// per operator regardless of parentheses.
pub const MAX_TREE_DEPTH: usize = 2048;

/// A finished subtree together with its number of levels.
#[derive(Debug)]
struct Subtree {
    node: ExpressionNode,
    depth: usize,
}

impl Subtree {
    fn leaf(value: i64) -> Self {
        Self {
            node: ExpressionNode::number(value),
            depth: 1,
        }
    }
}

/// Builds a binary expression tree.
#[derive(Debug, Default)]
pub struct TreeSink {
    operands: Vec<Subtree>,
}

impl TreeSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn combine(&mut self, operator: Operator, left: Subtree, right: Subtree) -> ParseResult<()> {
        let depth = 1 + left.depth.max(right.depth);
        if depth > MAX_TREE_DEPTH {
            log::error!("tree for operator '{}' exceeds {} levels", operator, MAX_TREE_DEPTH);
            return Err(ParseError::TreeTooDeep(MAX_TREE_DEPTH));
        }
        log::debug!("reduce {} at depth {}", operator, depth);
        self.operands.push(Subtree {
            node: ExpressionNode::binary(operator, left.node, right.node),
            depth,
        });
        Ok(())
    }

    fn pop_or_zero(&mut self, operator: Operator) -> Subtree {
        self.operands.pop().unwrap_or_else(|| {
            log::warn!("operator '{}' is missing an operand, using 0", operator);
            Subtree::leaf(0)
        })
    }
}

impl Sink for TreeSink {
    type Output = ExpressionNode;

    fn operand(&mut self, value: i64) {
        self.operands.push(Subtree::leaf(value));
    }

    fn reduce(&mut self, operator: Operator) -> ParseResult<()> {
        let right = self
            .operands
            .pop()
            .ok_or(ParseError::MissingOperand(operator))?;
        let left = self
            .operands
            .pop()
            .ok_or(ParseError::MissingOperand(operator))?;
        self.combine(operator, left, right)
    }

    // Trailing operators get a synthesized zero for each missing operand, so
    // `3 +` builds `(0 + 3)` instead of failing.
    fn reduce_trailing(&mut self, operator: Operator) -> ParseResult<()> {
        let right = self.pop_or_zero(operator);
        let left = self.pop_or_zero(operator);
        self.combine(operator, left, right)
    }

    fn finish(mut self) -> ParseResult<ExpressionNode> {
        let root = self.operands.pop().ok_or(ParseError::EmptyExpression)?;
        if !self.operands.is_empty() {
            log::warn!(
                "discarding {} operand(s) left below the root of the tree",
                self.operands.len()
            );
        }
        Ok(root.node)
    }
}

/// Produces the Reverse Polish token sequence.
#[derive(Debug, Default)]
pub struct PostfixSink {
    output: PostfixExpression,
}

impl PostfixSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Sink for PostfixSink {
    type Output = PostfixExpression;

    fn operand(&mut self, value: i64) {
        self.output.push(Token::Number(value));
    }

    fn reduce(&mut self, operator: Operator) -> ParseResult<()> {
        log::debug!("emit {}", operator);
        self.output.push(Token::Operator(operator));
        Ok(())
    }

    fn finish(self) -> ParseResult<PostfixExpression> {
        Ok(self.output)
    }
}
