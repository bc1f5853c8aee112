//! Day-stem strength (신강/신약) scoring.
//!
//! Each non-day cell carries a fixed weight. A cell contributes its full
//! weight when its ten god reinforces the day stem (peer, rival, resource,
//! seal) and nothing otherwise. The weights sum to 100.

use serde::Serialize;

use crate::pillar::{FourPillars, Glyph, NON_DAY_SLOTS, Slot};
use crate::ten_gods::{TenGod, chart_ten_gods};

/// Weights aligned with [`NON_DAY_SLOTS`].
pub const SLOT_WEIGHTS: [u32; 7] = [8, 8, 12, 25, 20, 12, 15];

/// Score at or above which the chart is strong.
pub const STRONG_THRESHOLD: u32 = 60;
/// Score at or above which the chart is balanced.
pub const BALANCED_THRESHOLD: u32 = 40;

/// Categorical strength label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLabel {
    Strong,
    Balanced,
    Weak,
}

impl StrengthLabel {
    pub const fn from_score(score: u32) -> Self {
        if score >= STRONG_THRESHOLD {
            Self::Strong
        } else if score >= BALANCED_THRESHOLD {
            Self::Balanced
        } else {
            Self::Weak
        }
    }

    /// 신강, 중화, 신약.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Strong => "신강",
            Self::Balanced => "중화",
            Self::Weak => "신약",
        }
    }
}

/// Reading of the three gain indicators taken together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthJudgment {
    VeryStrong,
    Strong,
    SlightlyWeak,
    VeryWeak,
}

impl StrengthJudgment {
    pub const fn from_gains(season: bool, seat: bool, following: bool) -> Self {
        match season as u8 + seat as u8 + following as u8 {
            3 => Self::VeryStrong,
            2 => Self::Strong,
            1 => Self::SlightlyWeak,
            _ => Self::VeryWeak,
        }
    }
}

/// Contribution of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotScore {
    pub slot: Slot,
    pub glyph: Glyph,
    pub ten_god: TenGod,
    pub weight: u32,
    pub score: u32,
}

/// Full strength analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthResult {
    pub score: u32,
    pub label: StrengthLabel,
    /// 득령: the month branch reinforces.
    pub gained_season: bool,
    /// 득지: the day branch reinforces.
    pub gained_seat: bool,
    /// 득세: at least half of the seven cells reinforce.
    pub gained_following: bool,
    pub reinforcing_count: u32,
    pub judgment: StrengthJudgment,
    pub breakdown: [SlotScore; 7],
}

/// Score a chart.
pub fn strength(chart: &FourPillars) -> StrengthResult {
    let gods = chart_ten_gods(chart);
    let breakdown: [SlotScore; 7] = std::array::from_fn(|i| {
        let entry = gods[i];
        let weight = SLOT_WEIGHTS[i];
        SlotScore {
            slot: entry.slot,
            glyph: entry.glyph,
            ten_god: entry.ten_god,
            weight,
            score: if entry.ten_god.is_reinforcing() { weight } else { 0 },
        }
    });

    let score = breakdown.iter().map(|s| s.score).sum();
    let reinforcing_count = breakdown.iter().filter(|s| s.score > 0).count() as u32;
    let reinforcing_at = |slot: Slot| {
        breakdown
            .iter()
            .any(|s| s.slot == slot && s.ten_god.is_reinforcing())
    };
    let gained_season = reinforcing_at(NON_DAY_SLOTS[3]);
    let gained_seat = reinforcing_at(NON_DAY_SLOTS[4]);
    let gained_following = reinforcing_count * 2 >= NON_DAY_SLOTS.len() as u32;

    StrengthResult {
        score,
        label: StrengthLabel::from_score(score),
        gained_season,
        gained_seat,
        gained_following,
        reinforcing_count,
        judgment: StrengthJudgment::from_gains(gained_season, gained_seat, gained_following),
        breakdown,
    }
}
