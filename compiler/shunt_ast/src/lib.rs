//! Expression tree and postfix sequence for the shunt expression engine.
//!
//! This crate defines the binary expression tree built by the parser, the
//! flat Reverse Polish sequence it produces alongside, and utilities for
//! traversing and printing both.

pub mod ast;
pub mod visit;

// Re-export commonly used types
pub use ast::{BinaryExpressionNode, ExpressionNode, PostfixExpression};
pub use visit::{Visitable, Visitor};

use std::convert::Infallible;
use std::error::Error;

use shunt_lexer::Operator;

/// A result type for AST operations.
pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

/// Serializes a tree, a postfix sequence or any report holding them to
/// pretty-printed JSON.
#[cfg(feature = "serde")]
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Renders a tree as an indented outline, one node per line, operators
/// above their operands.
///
/// ```text
/// *
///   +
///     2
///     3
///   4
/// ```
#[derive(Debug, Clone)]
pub struct AstPrinter {
    indent: usize,
}

impl Default for AstPrinter {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

impl AstPrinter {
    /// Creates a new `AstPrinter` with two-space indentation.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(indent: usize) -> Self {
        Self { indent }
    }

    /// Prints a tree to a string.
    pub fn print(&self, node: &ExpressionNode) -> String {
        let mut outline = OutlineBuilder {
            pad: " ".repeat(self.indent),
        };
        match node.accept(&mut outline) {
            Ok(lines) => lines.join("\n"),
            Err(never) => match never {},
        }
    }
}

struct OutlineBuilder {
    pad: String,
}

impl Visitor for OutlineBuilder {
    type Output = Vec<String>;
    type Error = Infallible;

    fn visit_number(&mut self, value: i64) -> std::result::Result<Vec<String>, Infallible> {
        Ok(vec![value.to_string()])
    }

    fn visit_binary(
        &mut self,
        operator: Operator,
        left: Vec<String>,
        right: Vec<String>,
    ) -> std::result::Result<Vec<String>, Infallible> {
        let mut lines = Vec::with_capacity(left.len() + right.len() + 1);
        lines.push(operator.to_string());
        lines.extend(
            left.into_iter()
                .chain(right)
                .map(|line| format!("{}{line}", self.pad)),
        );
        Ok(lines)
    }
}
