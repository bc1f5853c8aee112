//! Sexagenary reference tables and deterministic chart analyzers.
//!
//! This crate provides:
//! - Closed enumerations for elements, stems, branches, and the 60-cycle
//! - `FourPillars` and cell addressing (`PillarPosition`, `Slot`, `Glyph`)
//! - Element tally and harmony transformation
//! - Ten-god classification and strength scoring
//! - Harmony/clash detection with explicit claimed-position folds
//! - Auxiliary stars (신살), hidden stems (지장간), twelve life stages
//! - Pattern flags for the interpretation layer
//!
//! Everything here is a pure function of its arguments; no global state.

pub mod branch;
pub mod element;
pub mod error;
pub mod harmony;
pub mod hidden_stems;
pub mod patterns;
pub mod pillar;
pub mod sinsal;
pub mod stem;
pub mod strength;
pub mod tally;
pub mod ten_gods;
pub mod transformation;
pub mod twelve_stages;

pub use branch::{ALL_BRANCHES, Branch};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use error::BaseError;
pub use harmony::{
    ClashEvent, ClashKind, HarmonyEvent, HarmonyKind, HarmonyPriority, HarmonyReport, PositionSet,
    branch_clash, detect, partial_harmony, six_harmony, stem_clash, stem_harmony,
};
pub use hidden_stems::{HiddenStem, PositionHiddenStems, chart_hidden_stems, hidden_stems};
pub use patterns::{ChartPattern, PatternInputs, match_patterns};
pub use pillar::{
    ALL_POSITIONS, CYCLE_LEN, FourPillars, Glyph, Layer, NON_DAY_SLOTS, Pillar, PillarPosition,
    Slot,
};
pub use sinsal::{ALL_SINSAL, SinsalMatch, SinsalReport, SinsalStar, detect_sinsal};
pub use stem::{ALL_STEMS, Stem};
pub use strength::{SlotScore, StrengthJudgment, StrengthLabel, StrengthResult, strength};
pub use tally::ElementTally;
pub use ten_gods::{
    ALL_TEN_GODS, Resolution, SlotTenGod, TenGod, TenGodCounts, TenGodGroup, chart_ten_gods,
    element_of_char, ten_god, ten_god_for_chars,
};
pub use transformation::{
    AppliedTransformation, TransformationResult, transform, transform_report,
};
pub use twelve_stages::{PositionStage, TwelveStage, chart_stages, stage};
