//! Shunt lexical analysis
//!
//! This crate provides the token model of the shunt expression engine and
//! the adapter that turns one line of text into classified tokens.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod lexer;
pub mod logos_token;
pub mod token;

// Re-export the main types for convenience
pub use error::LexError;
pub use lexer::{classify, tokenize, Lexer};
pub use logos_token::LogosToken;
pub use token::{Operator, Token};
