use logos::Logos;

use crate::token::{Operator, Token};

/// Raw token type recognised by the logos lexer.
///
/// Integer literals include an optional leading minus, so `-5` is a single
/// operand while a lone `-` is the operator.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum LogosToken {
    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,

    // Delimiters
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,

    // Values outside the i64 range fail the callback and surface as errors
    #[regex(r"-?[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Integer(i64),
}

impl From<LogosToken> for Token {
    fn from(raw: LogosToken) -> Self {
        match raw {
            LogosToken::Plus => Token::Operator(Operator::Plus),
            LogosToken::Minus => Token::Operator(Operator::Minus),
            LogosToken::Star => Token::Operator(Operator::Times),
            LogosToken::Slash => Token::Operator(Operator::Div),
            LogosToken::Percent => Token::Operator(Operator::Mod),
            LogosToken::Caret => Token::Operator(Operator::Power),
            LogosToken::LeftParen => Token::Open,
            LogosToken::RightParen => Token::Close,
            LogosToken::Integer(n) => Token::Number(n),
        }
    }
}
