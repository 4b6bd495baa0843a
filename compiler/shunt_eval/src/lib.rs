//! Evaluation of expression trees and postfix sequences.
//!
//! Both evaluators share one integer arithmetic, so a tree and the postfix
//! sequence produced from the same infix input always agree on the value or
//! on the error.

pub mod arith;
pub mod error;
pub mod postfix;
pub mod tree;

pub use arith::apply;
pub use error::{EvalError, EvalResult};
pub use postfix::evaluate_postfix;
pub use tree::{evaluate_expression, TreeEvaluator};
