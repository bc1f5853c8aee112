//! Calendar inputs for sexagenary chart computation.
//!
//! This crate provides:
//! - `BirthInstant`, a validated local wall-clock time at minute precision
//! - The 24 solar terms and their 12-term month cycle
//! - `SolarTermIndex`, the sorted boundary table loaded once from JSON
//! - Historical Korean DST windows used by the hour-pillar correction

pub mod dst;
pub mod error;
pub mod index;
pub mod instant;
pub mod solar_term;

pub use dst::{CivilStamp, DstWindow, KOREAN_DST_WINDOWS, in_dst};
pub use error::TimeError;
pub use index::{INDEX_TIMESTAMP_FORMAT, SolarTermIndex, TermBoundary};
pub use instant::BirthInstant;
pub use solar_term::{ALL_SOLAR_TERMS, SolarTerm};

/// Seconds in a civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Signed distance between two instants in fractional days.
pub fn days_between(from: chrono::NaiveDateTime, to: chrono::NaiveDateTime) -> f64 {
    (to - from).num_seconds() as f64 / SECONDS_PER_DAY
}
