//! Visitor pattern for folding an expression tree bottom-up.
//!
//! A [`Visitor`] receives every leaf value and, for each internal node, the
//! already-computed results of both children. Evaluation, printing and
//! postfix flattening are all expressed as visitors.

use std::convert::Infallible;

use shunt_lexer::{Operator, Token};

use crate::ast::{ExpressionNode, PostfixExpression};

/// A post-order fold over an [`ExpressionNode`].
pub trait Visitor {
    /// The value produced for each subtree.
    type Output;
    /// The error that aborts the traversal.
    type Error;

    fn visit_number(&mut self, value: i64) -> Result<Self::Output, Self::Error>;

    fn visit_binary(
        &mut self,
        operator: Operator,
        left: Self::Output,
        right: Self::Output,
    ) -> Result<Self::Output, Self::Error>;
}

/// A tree that can be traversed by a [`Visitor`].
pub trait Visitable {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<V::Output, V::Error>;
}

impl Visitable for ExpressionNode {
    // Left subtree first, then right, then the node itself
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<V::Output, V::Error> {
        match self {
            ExpressionNode::Number(value) => visitor.visit_number(*value),
            ExpressionNode::Binary(bin) => {
                let left = bin.left.accept(visitor)?;
                let right = bin.right.accept(visitor)?;
                visitor.visit_binary(bin.operator, left, right)
            }
        }
    }
}

/// Flattens a tree into Reverse Polish order.
#[derive(Debug, Default)]
pub struct PostfixCollector {
    output: PostfixExpression,
}

impl PostfixCollector {
    pub fn collect(tree: &ExpressionNode) -> PostfixExpression {
        let mut collector = Self::default();
        match tree.accept(&mut collector) {
            Ok(()) => collector.output,
            Err(never) => match never {},
        }
    }
}

impl Visitor for PostfixCollector {
    type Output = ();
    type Error = Infallible;

    fn visit_number(&mut self, value: i64) -> Result<(), Infallible> {
        self.output.push(Token::Number(value));
        Ok(())
    }

    fn visit_binary(&mut self, operator: Operator, _: (), _: ()) -> Result<(), Infallible> {
        self.output.push(Token::Operator(operator));
        Ok(())
    }
}

impl ExpressionNode {
    /// The postfix sequence this tree evaluates as.
    pub fn to_postfix(&self) -> PostfixExpression {
        PostfixCollector::collect(self)
    }
}
