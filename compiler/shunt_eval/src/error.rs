use shunt_lexer::{Operator, Token};
use thiserror::Error;

/// Errors raised while evaluating a tree or a postfix sequence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EvalError {
    /// A postfix operator found fewer than two values on the stack
    #[error("insufficient operands for operator '{0}'")]
    InsufficientOperands(Operator),

    #[error("division by zero")]
    DivisionByZero,

    #[error("modulo by zero")]
    ModuloByZero,

    /// A postfix sequence left other than exactly one value on the stack
    #[error("malformed expression: {0} values left after evaluation")]
    MalformedExpression(usize),

    /// A token in operator position that has no arithmetic
    #[error("unknown operator: {0}")]
    UnknownOperator(Token),

    /// Integer powers are only defined for non-negative exponents
    #[error("invalid exponent: {0}")]
    InvalidExponent(i64),

    #[error("integer overflow in {left} {operator} {right}")]
    Overflow {
        operator: Operator,
        left: i64,
        right: i64,
    },
}

/// Result type for evaluation
pub type EvalResult<T> = Result<T, EvalError>;
