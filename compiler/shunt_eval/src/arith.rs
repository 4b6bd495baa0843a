//! Integer arithmetic shared by both evaluators.

use shunt_lexer::Operator;

use crate::error::{EvalError, EvalResult};

/// Applies `operator` to `(left, right)`.
///
/// Division truncates toward zero and the remainder takes the sign of the
/// dividend. `^` is integer exponentiation. Overflow is reported instead of
/// wrapping.
pub fn apply(operator: Operator, left: i64, right: i64) -> EvalResult<i64> {
    let overflow = || EvalError::Overflow {
        operator,
        left,
        right,
    };

    match operator {
        Operator::Plus => left.checked_add(right).ok_or_else(overflow),
        Operator::Minus => left.checked_sub(right).ok_or_else(overflow),
        Operator::Times => left.checked_mul(right).ok_or_else(overflow),
        Operator::Div => {
            if right == 0 {
                return Err(EvalError::DivisionByZero);
            }
            left.checked_div(right).ok_or_else(overflow)
        }
        Operator::Mod => {
            if right == 0 {
                return Err(EvalError::ModuloByZero);
            }
            // i64::MIN % -1 is 0, only the checked form traps on it
            Ok(left.wrapping_rem(right))
        }
        Operator::Power => power(left, right).ok_or_else(|| {
            if right < 0 {
                EvalError::InvalidExponent(right)
            } else {
                overflow()
            }
        }),
    }
}

fn power(base: i64, exponent: i64) -> Option<i64> {
    if exponent < 0 {
        return None;
    }
    match u32::try_from(exponent) {
        Ok(exp) => base.checked_pow(exp),
        // Only these bases stay in range for exponents past u32::MAX
        Err(_) => match base {
            0 => Some(0),
            1 => Some(1),
            -1 => Some(if exponent % 2 == 0 { 1 } else { -1 }),
            _ => None,
        },
    }
}
