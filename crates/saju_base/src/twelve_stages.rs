//! Twelve life stages (십이운성) of the day stem across the branches.
//!
//! Yang stems advance through the branches from their birth branch; yin
//! stems retreat from theirs.

use serde::Serialize;

use crate::branch::Branch;
use crate::pillar::{FourPillars, PillarPosition};
use crate::stem::Stem;

/// One of the twelve stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TwelveStage {
    Birth,
    Bathing,
    Crowning,
    Office,
    Peak,
    Decline,
    Sickness,
    Death,
    Tomb,
    Extinction,
    Conception,
    Nurture,
}

pub const ALL_TWELVE_STAGES: [TwelveStage; 12] = [
    TwelveStage::Birth,
    TwelveStage::Bathing,
    TwelveStage::Crowning,
    TwelveStage::Office,
    TwelveStage::Peak,
    TwelveStage::Decline,
    TwelveStage::Sickness,
    TwelveStage::Death,
    TwelveStage::Tomb,
    TwelveStage::Extinction,
    TwelveStage::Conception,
    TwelveStage::Nurture,
];

impl TwelveStage {
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Birth => "장생",
            Self::Bathing => "목욕",
            Self::Crowning => "관대",
            Self::Office => "건록",
            Self::Peak => "제왕",
            Self::Decline => "쇠",
            Self::Sickness => "병",
            Self::Death => "사",
            Self::Tomb => "묘",
            Self::Extinction => "절",
            Self::Conception => "태",
            Self::Nurture => "양",
        }
    }
}

/// Branch where a stem's cycle begins (장생).
pub const fn birth_branch(stem: Stem) -> Branch {
    match stem {
        Stem::Gap => Branch::Hae,
        Stem::Byeong | Stem::Mu => Branch::In,
        Stem::Gyeong => Branch::Sa,
        Stem::Im => Branch::Sin,
        Stem::Eul => Branch::O,
        Stem::Jeong | Stem::Gi => Branch::Yu,
        Stem::Sin => Branch::Ja,
        Stem::Gye => Branch::Myo,
    }
}

/// Stage of `stem` at `branch`.
pub fn stage(stem: Stem, branch: Branch) -> TwelveStage {
    let start = birth_branch(stem).index() as i16;
    let at = branch.index() as i16;
    let steps = if stem.polarity().is_yang() {
        at - start
    } else {
        start - at
    };
    ALL_TWELVE_STAGES[steps.rem_euclid(12) as usize]
}

/// Day-stem stage at one pillar's branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionStage {
    pub position: PillarPosition,
    pub branch: Branch,
    pub stage: TwelveStage,
}

/// Day-stem stages at all four branches.
pub fn chart_stages(chart: &FourPillars) -> [PositionStage; 4] {
    let day = chart.day_stem();
    std::array::from_fn(|i| {
        let position = PillarPosition::from_index(i as u8);
        let branch = chart.pillar(position).branch;
        PositionStage {
            position,
            branch,
            stage: stage(day, branch),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yang_wood() {
        assert_eq!(stage(Stem::Gap, Branch::Hae), TwelveStage::Birth);
        assert_eq!(stage(Stem::Gap, Branch::In), TwelveStage::Office);
        assert_eq!(stage(Stem::Gap, Branch::Myo), TwelveStage::Peak);
        assert_eq!(stage(Stem::Gap, Branch::O), TwelveStage::Death);
    }

    #[test]
    fn yin_wood_runs_backwards() {
        assert_eq!(stage(Stem::Eul, Branch::O), TwelveStage::Birth);
        assert_eq!(stage(Stem::Eul, Branch::Myo), TwelveStage::Office);
        assert_eq!(stage(Stem::Eul, Branch::In), TwelveStage::Peak);
    }

    #[test]
    fn every_stage_once_per_stem() {
        for s in Stem::all() {
            let seen: std::collections::HashSet<TwelveStage> =
                Branch::all().iter().map(|b| stage(*s, *b)).collect();
            assert_eq!(seen.len(), 12);
        }
    }

    #[test]
    fn reference_chart_stages() {
        let chart: FourPillars = "庚辰 乙酉 癸未 庚申".parse().unwrap();
        let st = chart_stages(&chart);
        // 癸 starts at 卯 and retreats: 辰 is one step forward, so 양.
        assert_eq!(st[0].stage, TwelveStage::Nurture);
        assert_eq!(st[3].position, PillarPosition::Hour);
    }
}
