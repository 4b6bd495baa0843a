//! Infix expression engine.
//!
//! Each input line is tokenized once, converted by the shunting-yard pass
//! into both an expression tree and a postfix sequence, and each form is
//! evaluated on its own. The two results are kept apart so a line can show
//! a value on one path and an error on the other.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use shunt_ast::{ExpressionNode, PostfixExpression};
use shunt_eval::{evaluate_expression, evaluate_postfix, EvalError};
use shunt_lexer::{tokenize, LexError, Token};
use shunt_parser::{infix_to_postfix, infix_to_tree, ParseError};

pub use shunt_ast::AstPrinter;

/// Any failure along the line pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Everything computed for one tokenized line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineReport {
    pub tokens: Vec<Token>,
    pub tree: Result<ExpressionNode, ParseError>,
    pub postfix: Result<PostfixExpression, ParseError>,
    pub tree_value: Result<i64, Error>,
    pub postfix_value: Result<i64, Error>,
}

impl LineReport {
    /// True when both paths produced a value.
    pub fn is_ok(&self) -> bool {
        self.tree_value.is_ok() && self.postfix_value.is_ok()
    }

    /// The infix tokens joined by single spaces.
    pub fn infix(&self) -> String {
        join_tokens(&self.tokens)
    }
}

/// Runs one line through both pipelines.
///
/// Fails only when the line cannot be tokenized; parse and evaluation
/// failures are recorded per path in the report.
pub fn analyze_line(line: &str) -> Result<LineReport, Error> {
    let tokens = tokenize(line)?;
    log::debug!("analyzing {} tokens", tokens.len());

    let tree = infix_to_tree(&tokens);
    let postfix = infix_to_postfix(&tokens);

    let tree_value = match &tree {
        Ok(node) => evaluate_expression(node).map_err(Error::from),
        Err(e) => Err(e.clone().into()),
    };
    let postfix_value = match &postfix {
        Ok(sequence) => evaluate_postfix(sequence).map_err(Error::from),
        Err(e) => Err(e.clone().into()),
    };

    Ok(LineReport {
        tokens,
        tree,
        postfix,
        tree_value,
        postfix_value,
    })
}

/// Either a computed value or the message of the error that prevented it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome<T> {
    Value(T),
    Error(String),
}

impl<T> Outcome<T> {
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Value(value),
            Err(e) => Outcome::Error(e.to_string()),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(value) => write!(f, "{value}"),
            Outcome::Error(message) => write!(f, "error: {message}"),
        }
    }
}

/// A numbered, serializable summary of one non-blank input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpressionReport {
    pub number: usize,
    pub infix: String,
    pub postfix: Outcome<String>,
    pub postfix_value: Outcome<i64>,
    pub tree_value: Outcome<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<ExpressionNode>,
}

impl ExpressionReport {
    fn new(number: usize, line: &str) -> Self {
        match analyze_line(line) {
            Ok(report) => ExpressionReport {
                number,
                infix: report.infix(),
                postfix: report.postfix.as_ref().map(ToString::to_string).into(),
                postfix_value: report.postfix_value.into(),
                tree_value: report.tree_value.into(),
                tree: report.tree.ok(),
            },
            Err(e) => {
                log::warn!("expression {number} could not be tokenized: {e}");
                let message = e.to_string();
                ExpressionReport {
                    number,
                    infix: line.split_whitespace().collect::<Vec<_>>().join(" "),
                    postfix: Outcome::Error(message.clone()),
                    postfix_value: Outcome::Error(message.clone()),
                    tree_value: Outcome::Error(message),
                    tree: None,
                }
            }
        }
    }

    pub fn has_errors(&self) -> bool {
        self.postfix.is_error() || self.postfix_value.is_error() || self.tree_value.is_error()
    }
}

impl fmt::Display for ExpressionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Expression number: {}", self.number)?;
        writeln!(f, "Infix expression: {}", self.infix)?;
        writeln!(f, "Postfix expression: {}", self.postfix)?;
        writeln!(
            f,
            "Postfix eval: {} Tree eval: {}",
            self.postfix_value, self.tree_value
        )
    }
}

/// Analyzes every non-blank line of `source`. Numbering starts at 1 and
/// skips blank lines.
pub fn analyze_source(source: &str) -> Vec<ExpressionReport> {
    source
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(index, line)| ExpressionReport::new(index + 1, line))
        .collect()
}

fn join_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
