//! Error types for reference-table parsing.

use thiserror::Error;

/// Errors from building stems, branches, or pillars out of text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BaseError {
    /// Input has the wrong shape (length, separators, parity).
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// A character outside the closed stem/branch alphabets.
    #[error("unknown character: {0:?}")]
    UnknownCharacter(char),
}
