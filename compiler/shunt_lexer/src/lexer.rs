//! Token classification and the whitespace tokenizer adapter.
//!
//! An expression line is split on whitespace and every piece must classify
//! as exactly one token: an operator, a parenthesis, or a signed integer.

use std::str::SplitWhitespace;

use logos::Logos;

use crate::error::LexError;
use crate::logos_token::LogosToken;
use crate::token::Token;

/// Classifies a single token string.
///
/// Recognised symbols map to their operator or parenthesis kind. Anything
/// else must be a signed integer literal that fits in an `i64`, otherwise
/// [`LexError::MalformedNumber`] is returned.
pub fn classify(text: &str) -> Result<Token, LexError> {
    let mut lex = LogosToken::lexer(text);
    match lex.next() {
        // The first token has to cover the whole piece, `12ab` or `+-` must fail
        Some(Ok(raw)) if lex.span() == (0..text.len()) => {
            let token = Token::from(raw);
            log::trace!("classified '{}' as {:?}", text, token);
            Ok(token)
        }
        _ => {
            log::debug!("failed to classify '{}'", text);
            Err(LexError::MalformedNumber(text.to_string()))
        }
    }
}

/// Iterator over the classified tokens of one expression line.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    pieces: SplitWhitespace<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            pieces: line.split_whitespace(),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pieces.next().map(classify)
    }
}

/// Splits a line on whitespace and classifies every piece, stopping at the
/// first malformed one.
pub fn tokenize(line: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(line).collect()
}
