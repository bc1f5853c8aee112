//! Process-wide solar-term index.
//!
//! The index is loaded once at startup and read-only afterwards. Every
//! convenience function borrows it from here.

use std::path::Path;

use once_cell::sync::OnceCell;
use saju_search::ChartConfig;
use saju_time::SolarTermIndex;

use crate::error::SajuError;

static INDEX: OnceCell<SolarTermIndex> = OnceCell::new();
static DEFAULTS: OnceCell<ChartConfig> = OnceCell::new();

/// Load the index from `path` and install it globally.
///
/// Returns `AlreadyInitialized` on a second call, leaving the first index
/// in place.
pub fn init(path: &Path) -> Result<(), SajuError> {
    if is_initialized() {
        return Err(SajuError::AlreadyInitialized);
    }
    init_with(SolarTermIndex::load(path)?)
}

/// Install an already-built index globally.
pub fn init_with(index: SolarTermIndex) -> Result<(), SajuError> {
    INDEX.set(index).map_err(|_| SajuError::AlreadyInitialized)
}

/// Whether [`init`] has completed.
pub fn is_initialized() -> bool {
    INDEX.get().is_some()
}

pub(crate) fn index() -> Result<&'static SolarTermIndex, SajuError> {
    INDEX.get().ok_or(SajuError::NotInitialized)
}

/// Set the chart defaults used by the convenience functions. Only the first
/// call takes effect.
pub(crate) fn set_defaults(config: ChartConfig) {
    if DEFAULTS.set(config).is_err() {
        tracing::warn!("chart defaults already set; keeping the first");
    }
}

/// Chart defaults: configured ones if set, library defaults otherwise.
pub fn chart_defaults() -> ChartConfig {
    DEFAULTS.get().cloned().unwrap_or_default()
}
