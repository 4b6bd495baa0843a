use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary arithmetic operator.
///
/// Each operator has a fixed base precedence rank. `Times`, `Div` and `Mod`
/// share a rank, `Power` binds tighter and `Plus`/`Minus` are loosest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    Plus,
    Minus,
    Times,
    Div,
    Mod,
    Power,
}

impl Operator {
    /// Every operator, in symbol-table order.
    pub const ALL: [Operator; 6] = [
        Operator::Plus,
        Operator::Minus,
        Operator::Times,
        Operator::Div,
        Operator::Mod,
        Operator::Power,
    ];

    /// Base precedence rank before any parenthesis scaling.
    pub fn rank(self) -> u32 {
        match self {
            Operator::Plus | Operator::Minus => 1,
            Operator::Times | Operator::Div | Operator::Mod => 2,
            Operator::Power => 3,
        }
    }

    /// The source symbol of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Times => "*",
            Operator::Div => "/",
            Operator::Mod => "%",
            Operator::Power => "^",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A classified token of an infix expression.
///
/// Tokens are immutable values. The effective priority an operator gets
/// while parsing is tracked by the parser, never stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "type", content = "value")
)]
pub enum Token {
    /// A binary operator.
    Operator(Operator),
    /// `(`
    Open,
    /// `)`
    Close,
    /// Bottom-of-stack marker. Never produced by classification.
    Nil,
    /// A signed integer operand.
    Number(i64),
}

impl Token {
    /// Base precedence rank. Parentheses and the sentinel rank 0, operands
    /// have no rank.
    pub fn rank(&self) -> Option<u32> {
        match self {
            Token::Operator(op) => Some(op.rank()),
            Token::Open | Token::Close | Token::Nil => Some(0),
            Token::Number(_) => None,
        }
    }

    pub fn is_operand(&self) -> bool {
        matches!(self, Token::Number(_))
    }

    pub fn value(&self) -> Option<i64> {
        match self {
            Token::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_operator(&self) -> Option<Operator> {
        match self {
            Token::Operator(op) => Some(*op),
            _ => None,
        }
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Token::Operator(op)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operator(op) => write!(f, "{op}"),
            Token::Open => f.write_str("("),
            Token::Close => f.write_str(")"),
            Token::Nil => f.write_str("|"),
            Token::Number(n) => write!(f, "{n}"),
        }
    }
}
