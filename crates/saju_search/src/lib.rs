//! Chart computation over a solar-term index.
//!
//! This crate provides:
//! - Pillar calculation (year, month, day, hour) for a birth instant
//! - Luck pillar (대운) sequencing with starting age and direction
//! - Annual pillars (세운) and their relations to the natal chart
//! - The lunar-converter seam and birth input parsing
//! - One-shot chart aggregation combining every analyzer in `saju_base`

pub mod chart;
pub mod chart_types;
pub mod error;
pub mod input;
pub mod interactions;
pub mod luck;
pub mod pillars;

pub use chart::{analyze_chart, analyze_pillars};
pub use chart_types::{ChartAnalysis, ChartConfig, LuckInteractions, NatalAnalysis};
pub use error::SearchError;
pub use input::{BirthInput, CalendarType, Gender, LunarConverter, SolarOnly};
pub use interactions::{InteractionKind, PeriodInteraction, period_interactions};
pub use luck::{
    AnnualPillar, DEFAULT_LUCK_PILLAR_COUNT, LuckDirection, LuckPillar, LuckPillars,
    MAX_ANNUAL_SPAN, MAX_ANNUAL_YEAR, MAX_LUCK_PILLAR_COUNT, MIN_ANNUAL_YEAR, annual_pillar, annual_pillars, luck_pillars, starting_age,
};
pub use pillars::{
    day_pillar, four_pillars, hour_pillar, hour_slot, month_pillar, year_cycle_pillar,
    year_pillar,
};
