// Expression tree and postfix sequence produced by the shunting-yard parser

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use shunt_lexer::{LexError, Lexer, Operator, Token};

/// A node of a binary expression tree.
///
/// Leaves hold an operand, internal nodes own exactly two subtrees. The tree
/// is built once by the parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "type", content = "value")
)]
pub enum ExpressionNode {
    Number(i64),
    Binary(Box<BinaryExpressionNode>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinaryExpressionNode {
    pub left: ExpressionNode,
    pub operator: Operator,
    pub right: ExpressionNode,
}

impl ExpressionNode {
    pub fn number(value: i64) -> Self {
        ExpressionNode::Number(value)
    }

    pub fn binary(operator: Operator, left: ExpressionNode, right: ExpressionNode) -> Self {
        ExpressionNode::Binary(Box::new(BinaryExpressionNode {
            left,
            operator,
            right,
        }))
    }
}

/// Prints the tree as fully parenthesized infix, e.g. `((2 + 3) * 4)`.
impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionNode::Number(n) => write!(f, "{n}"),
            ExpressionNode::Binary(bin) => {
                write!(f, "({} {} {})", bin.left, bin.operator, bin.right)
            }
        }
    }
}

/// A token sequence in Reverse Polish order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct PostfixExpression(Vec<Token>);

impl PostfixExpression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: Token) {
        self.0.push(token);
    }

    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Token>> for PostfixExpression {
    fn from(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }
}

impl FromIterator<Token> for PostfixExpression {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PostfixExpression {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for PostfixExpression {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Reads an already-postfix line such as `3 4 + 2 *`.
impl FromStr for PostfixExpression {
    type Err = LexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lexer::new(s).collect()
    }
}

/// Space-joined token strings.
impl fmt::Display for PostfixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
