//! Error type for the convenience facade.

use saju_base::BaseError;
use saju_search::SearchError;
use saju_time::TimeError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors from the global index, configuration, or chart computation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SajuError {
    /// `init()` has not been called yet.
    #[error("solar-term index not initialized; call init() first")]
    NotInitialized,
    /// `init()` was called a second time.
    #[error("solar-term index already initialized")]
    AlreadyInitialized,
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Base(#[from] BaseError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
