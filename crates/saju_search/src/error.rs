//! Error types for chart computation.

use saju_base::BaseError;
use saju_time::TimeError;
use thiserror::Error;

/// Errors from pillar calculation, luck sequencing, or chart assembly.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Caller-supplied birth data is unusable.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// The solar-term index has no boundary covering the query.
    #[error("reference data missing: {0}")]
    ReferenceDataMissing(&'static str),
    /// Error from date/time validation or the term index.
    #[error(transparent)]
    Time(#[from] TimeError),
    /// Error from reference-table parsing.
    #[error(transparent)]
    Base(#[from] BaseError),
}
