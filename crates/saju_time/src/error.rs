//! Error types for birth instants and the solar-term index.

use thiserror::Error;

/// Errors from date/time validation or solar-term index loading.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar fields do not form a real date/time.
    #[error("invalid date/time: {0}")]
    InvalidDateTime(String),
    /// The index file is not a JSON object of timestamp → term name.
    #[error("solar-term index parse error: {0}")]
    IndexParse(String),
    /// A term name outside the 24 known solar terms.
    #[error("unknown solar-term name: {0}")]
    UnknownTerm(String),
    /// Two entries resolve to the same instant.
    #[error("duplicate solar-term timestamp: {0}")]
    DuplicateTimestamp(String),
    /// The index contains no boundaries at all.
    #[error("solar-term index is empty")]
    EmptyIndex,
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for TimeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for TimeError {
    fn from(e: serde_json::Error) -> Self {
        Self::IndexParse(e.to_string())
    }
}
