//! Cross-crate tests for the shunt pipeline live under `tests/`.
//!
//! The helpers here build expression strings for those tests.

/// Renders `terms` operands joined by `operator`, for example `1 + 2 + 3`.
pub fn chain(operator: &str, terms: &[i64]) -> String {
    terms
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(&format!(" {operator} "))
}

/// Wraps `inner` in `depth` pairs of parentheses.
pub fn nest(inner: &str, depth: usize) -> String {
    format!("{}{inner}{}", "( ".repeat(depth), " )".repeat(depth))
}
