use shunt_lexer::{Operator, Token};
use thiserror::Error;

/// Structural errors found while running the shunting-yard pass.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A `)` without a matching `(`, or a `(` never closed
    #[error("unbalanced parenthesis")]
    UnbalancedParenthesis,

    /// An operator reduced mid-expression without two operands
    #[error("missing operand for operator '{0}'")]
    MissingOperand(Operator),

    /// Parentheses nested deeper than the priority scale can represent
    #[error("maximum nesting depth of {0} exceeded")]
    NestingTooDeep(usize),

    /// The tree would nest deeper than its recursive walks can afford
    #[error("expression tree deeper than {0} levels")]
    TreeTooDeep(usize),

    /// No operand was produced at all
    #[error("empty expression")]
    EmptyExpression,

    /// A token that never belongs in an infix stream, i.e. the sentinel
    #[error("unexpected token: {0}")]
    UnexpectedToken(Token),
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
