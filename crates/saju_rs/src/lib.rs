//! Convenience facade for saju chart computation.
//!
//! Provides a process-global solar-term index and one-call functions that
//! accept birth data directly, removing the need to thread a
//! `SolarTermIndex` through every call.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use saju_rs::*;
//!
//! init(Path::new("data/solar_terms_sample.json")).expect("index init");
//!
//! let input = BirthInput::solar(2000, 9, 22, 16, 0, Gender::Male);
//! let analysis = chart(&input).unwrap();
//! println!("{}", analysis.natal.pillars);
//! ```

pub mod config;
pub mod convenience;
pub mod error;
pub mod global;

pub use config::{ConfigError, SajuConfig};
pub use convenience::{
    SurroundingTerms, analyze, analyze_with, annual, chart, chart_with, init_from_env, luck,
    luck_with, pillars, surrounding_terms,
};
pub use error::SajuError;
pub use global::{chart_defaults, init, init_with, is_initialized};

// Re-export the types callers need so they can depend on saju_rs alone.
pub use saju_base::{
    Branch, ChartPattern, Element, ElementTally, FourPillars, HarmonyPriority, Pillar,
    PillarPosition, Stem, StrengthLabel, TenGod,
};
pub use saju_search::{
    AnnualPillar, BirthInput, CalendarType, ChartAnalysis, ChartConfig, Gender, LuckDirection,
    LuckPillar, LuckPillars, LunarConverter, NatalAnalysis, SolarOnly,
};
pub use saju_time::{BirthInstant, SolarTerm, SolarTermIndex, TermBoundary};
