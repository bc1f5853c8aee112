//! Configuration and result types for full chart analysis.

use std::ops::RangeInclusive;

use saju_base::{
    ChartPattern, ElementTally, FourPillars, HarmonyPriority, HarmonyReport, PositionHiddenStems,
    PositionStage, SinsalReport, SlotTenGod, StrengthResult, TenGodCounts, TransformationResult,
};
use saju_time::BirthInstant;
use serde::Serialize;

use crate::input::{CalendarType, Gender};
use crate::interactions::PeriodInteraction;
use crate::luck::{AnnualPillar, DEFAULT_LUCK_PILLAR_COUNT, LuckPillar, LuckPillars};

/// Section switches and tie-breaks for [`crate::chart::analyze_chart`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartConfig {
    /// Include the decade luck sequence.
    pub include_luck: bool,
    /// Include auxiliary stars.
    pub include_sinsal: bool,
    /// Include hidden stems per branch.
    pub include_hidden_stems: bool,
    /// Include twelve life stages of the day stem.
    pub include_twelve_stages: bool,
    /// Include pattern flags.
    pub include_patterns: bool,
    /// Include natal interactions of every luck pillar.
    pub include_period_interactions: bool,
    /// Annual pillars to list, if any.
    pub annual_years: Option<RangeInclusive<i32>>,
    /// Which exclusive branch pass claims first.
    pub harmony_priority: HarmonyPriority,
    /// Number of decade pillars.
    pub luck_pillar_count: u8,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            include_luck: true,
            include_sinsal: true,
            include_hidden_stems: true,
            include_twelve_stages: true,
            include_patterns: true,
            include_period_interactions: false,
            annual_years: None,
            harmony_priority: HarmonyPriority::default(),
            luck_pillar_count: DEFAULT_LUCK_PILLAR_COUNT,
        }
    }
}

/// Everything derivable from the four pillars alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NatalAnalysis {
    pub pillars: FourPillars,
    /// Tally before any transformation.
    pub tally: ElementTally,
    pub transformation: TransformationResult,
    pub ten_gods: [SlotTenGod; 7],
    pub ten_god_counts: TenGodCounts,
    pub strength: StrengthResult,
    pub harmony: HarmonyReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sinsal: Option<SinsalReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_stems: Option<Vec<PositionHiddenStems>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twelve_stages: Option<[PositionStage; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Vec<ChartPattern>>,
}

impl NatalAnalysis {
    /// Tally after accepted harmony transformations.
    pub fn transformed_tally(&self) -> ElementTally {
        self.transformation.after
    }
}

/// A luck pillar with its relations to the natal chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LuckInteractions {
    pub luck: LuckPillar,
    pub interactions: Vec<PeriodInteraction>,
}

/// One-shot chart result for a birth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartAnalysis {
    /// Solar-calendar instant the chart was computed for.
    pub birth: BirthInstant,
    pub gender: Gender,
    pub calendar: CalendarType,
    #[serde(flatten)]
    pub natal: NatalAnalysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub luck: Option<LuckPillars>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub luck_interactions: Option<Vec<LuckInteractions>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual: Option<Vec<AnnualPillar>>,
}
