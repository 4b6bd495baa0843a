//! Generic shunting-yard pass.
//!
//! Nesting is folded into priorities: every `(` multiplies a scale by ten,
//! and an operator's effective priority is its base rank times the current
//! scale. One comparison then covers both precedence and depth, since any
//! operator inside parentheses outranks every operator outside them.
//! Ties reduce the operator already on the stack, which makes every
//! operator, `^` included, left-associative.

use shunt_lexer::{Operator, Token};

use super::error::{ParseError, ParseResult};
use super::sink::Sink;

/// Deepest supported parenthesis nesting. `3 * 10^18` still fits in a `u64`.
pub const MAX_NESTING_DEPTH: usize = 18;

const DEPTH_SCALE: u64 = 10;

/// An operator stack slot. The effective priority lives here, the token
/// itself is never rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StackEntry {
    token: Token,
    priority: u64,
}

impl StackEntry {
    fn sentinel() -> Self {
        Self {
            token: Token::Nil,
            priority: 0,
        }
    }

    fn open() -> Self {
        Self {
            token: Token::Open,
            priority: 0,
        }
    }
}

struct OperatorStack {
    // Always holds the sentinel at index 0 until the final drain
    entries: Vec<StackEntry>,
}

impl OperatorStack {
    fn new() -> Self {
        Self {
            entries: vec![StackEntry::sentinel()],
        }
    }

    fn top(&self) -> StackEntry {
        self.entries
            .last()
            .copied()
            .unwrap_or_else(StackEntry::sentinel)
    }

    fn push(&mut self, entry: StackEntry) {
        self.entries.push(entry);
    }

    fn pop(&mut self) -> Option<StackEntry> {
        self.entries.pop()
    }

    /// Pops the top entry, which must be an operator, into the sink.
    fn reduce_top<S: Sink>(&mut self, sink: &mut S) -> ParseResult<()> {
        match self.pop() {
            Some(StackEntry {
                token: Token::Operator(op),
                ..
            }) => sink.reduce(op),
            Some(entry) => Err(ParseError::UnexpectedToken(entry.token)),
            None => Err(ParseError::UnexpectedToken(Token::Nil)),
        }
    }
}

/// Runs the shunting-yard pass over `tokens`, feeding operands and
/// reductions into `sink`, and returns what the sink built.
pub fn shunting_yard<S: Sink>(tokens: &[Token], mut sink: S) -> ParseResult<S::Output> {
    log::debug!("=== shunting_yard ===");
    log::debug!("Input length: {}", tokens.len());

    let mut stack = OperatorStack::new();
    let mut scale: u64 = 1;
    let mut depth: usize = 0;

    for &token in tokens {
        match token {
            Token::Number(value) => {
                log::debug!("shift operand {}", value);
                sink.operand(value);
            }
            Token::Open => {
                if depth == MAX_NESTING_DEPTH {
                    return Err(ParseError::NestingTooDeep(MAX_NESTING_DEPTH));
                }
                depth += 1;
                scale *= DEPTH_SCALE;
                stack.push(StackEntry::open());
            }
            Token::Close => {
                loop {
                    match stack.top().token {
                        Token::Open => break,
                        Token::Nil => {
                            log::error!("')' without a matching '('");
                            return Err(ParseError::UnbalancedParenthesis);
                        }
                        _ => stack.reduce_top(&mut sink)?,
                    }
                }
                stack.pop();
                depth -= 1;
                scale /= DEPTH_SCALE;
            }
            Token::Operator(op) => {
                let priority = effective_priority(op, scale);
                loop {
                    let top = stack.top();
                    if top.token == Token::Nil || priority > top.priority {
                        break;
                    }
                    stack.reduce_top(&mut sink)?;
                }
                log::debug!("push {} with priority {}", op, priority);
                stack.push(StackEntry { token, priority });
            }
            Token::Nil => return Err(ParseError::UnexpectedToken(token)),
        }
    }

    while let Some(entry) = stack.pop() {
        match entry.token {
            Token::Nil => break,
            Token::Operator(op) => sink.reduce_trailing(op)?,
            Token::Open => {
                log::error!("'(' never closed");
                return Err(ParseError::UnbalancedParenthesis);
            }
            other => return Err(ParseError::UnexpectedToken(other)),
        }
    }

    sink.finish()
}

fn effective_priority(op: Operator, scale: u64) -> u64 {
    u64::from(op.rank()) * scale
}
