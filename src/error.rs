use thiserror::Error;

/// Errors surfaced by an obfuscation run.
///
/// Malformed source is never an error: unbalanced delimiters degrade into
/// best-effort tokens instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ObfuscateError {
    /// The raw input contains a marker from the deny-list.
    #[error("input rejected by content policy: contains `{marker}`")]
    PolicyViolation { marker: String },

    /// Encoded text could not be turned back into a UTF-8 string.
    #[error("cannot decode `{0}`")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, ObfuscateError>;
