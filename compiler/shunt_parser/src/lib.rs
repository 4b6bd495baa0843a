pub mod parser;

pub use parser::{infix_to_postfix, infix_to_tree, ParseError, ParseResult};


// Integration tests are in the tests/ directory
