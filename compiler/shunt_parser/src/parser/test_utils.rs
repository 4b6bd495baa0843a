//! Test utilities for the parser

// This module is only used for testing purposes
#![allow(dead_code)]

use shunt_lexer::{Operator, Token};

/// Creates a number token for testing
pub fn create_number(value: i64) -> Token {
    Token::Number(value)
}

/// Creates an operator or parenthesis token for testing
pub fn create_operator(op: &str) -> Token {
    match op {
        "+" => Token::Operator(Operator::Plus),
        "-" => Token::Operator(Operator::Minus),
        "*" => Token::Operator(Operator::Times),
        "/" => Token::Operator(Operator::Div),
        "%" => Token::Operator(Operator::Mod),
        "^" => Token::Operator(Operator::Power),
        "(" => Token::Open,
        ")" => Token::Close,
        _ => panic!("Unknown operator: {}", op),
    }
}

/// Tokenizes a string for testing
pub fn tokenize(input: &str) -> Vec<Token> {
    shunt_lexer::tokenize(input).expect("test input should tokenize")
}
