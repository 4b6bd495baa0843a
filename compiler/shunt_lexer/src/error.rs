/// Errors produced while classifying token strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// The string is neither a known symbol nor an `i64` literal.
    #[error("malformed number: '{0}'")]
    MalformedNumber(String),
}
