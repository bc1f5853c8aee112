//! Symbolic pattern flags extracted from a finished analysis.
//!
//! These feed the interpretation layer as stable keys; they carry no text.

use serde::Serialize;

use crate::branch::Branch;
use crate::harmony::HarmonyReport;
use crate::pillar::{Glyph, PillarPosition, Slot};
use crate::sinsal::{SinsalReport, SinsalStar};
use crate::stem::Stem;
use crate::strength::{StrengthLabel, StrengthResult};
use crate::ten_gods::{TenGodCounts, TenGodGroup};

/// A recognised chart pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartPattern {
    /// 신강
    Strong,
    /// 신약
    Weak,
    /// 인성과다: three or more resource/seal cells.
    ResourceExcess,
    /// 재성부재
    WealthAbsent,
    /// 식상부족: at most one expression/output cell.
    OutputLack,
    /// 乙庚 stem harmony present.
    MetalStemHarmony,
    /// 辰酉 six-harmony present.
    MetalSixHarmony,
    /// 화개 on the day branch.
    CanopyOnDaySeat,
    StrongResourceExcess,
    StrongWealthAbsent,
    ResourceExcessOutputLack,
    /// 천지동합: both metal harmonies at once.
    HeavenEarthHarmony,
}

/// Borrowed analysis sections the matcher reads.
#[derive(Debug, Clone, Copy)]
pub struct PatternInputs<'a> {
    pub strength: &'a StrengthResult,
    pub ten_gods: &'a TenGodCounts,
    pub harmony: &'a HarmonyReport,
    pub sinsal: &'a SinsalReport,
}

/// Base patterns in fixed order, then combinations.
pub fn match_patterns(inputs: PatternInputs<'_>) -> Vec<ChartPattern> {
    use ChartPattern::*;

    let metal_stem = inputs.harmony.stem_harmonies.iter().any(|e| {
        e.contains_glyph(Glyph::Stem(Stem::Eul)) && e.contains_glyph(Glyph::Stem(Stem::Gyeong))
    });
    let metal_six = inputs.harmony.six_harmonies.iter().any(|e| {
        e.contains_glyph(Glyph::Branch(Branch::Jin)) && e.contains_glyph(Glyph::Branch(Branch::Yu))
    });

    let base = [
        (Strong, inputs.strength.label == StrengthLabel::Strong),
        (Weak, inputs.strength.label == StrengthLabel::Weak),
        (
            ResourceExcess,
            inputs.ten_gods.group(TenGodGroup::Resource) >= 3,
        ),
        (WealthAbsent, inputs.ten_gods.group(TenGodGroup::Wealth) == 0),
        (OutputLack, inputs.ten_gods.group(TenGodGroup::Output) <= 1),
        (MetalStemHarmony, metal_stem),
        (MetalSixHarmony, metal_six),
        (
            CanopyOnDaySeat,
            inputs
                .sinsal
                .hits(SinsalStar::Canopy, Slot::branch(PillarPosition::Day)),
        ),
    ];
    let mut found: Vec<ChartPattern> = base
        .iter()
        .filter(|(_, hit)| *hit)
        .map(|&(p, _)| p)
        .collect();

    let combos = [
        (StrongResourceExcess, Strong, ResourceExcess),
        (StrongWealthAbsent, Strong, WealthAbsent),
        (ResourceExcessOutputLack, ResourceExcess, OutputLack),
        (HeavenEarthHarmony, MetalStemHarmony, MetalSixHarmony),
    ];
    for (combo, a, b) in combos {
        if found.contains(&a) && found.contains(&b) {
            found.push(combo);
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harmony::{HarmonyPriority, detect};
    use crate::pillar::FourPillars;
    use crate::sinsal::detect_sinsal;
    use crate::strength::strength;

    fn patterns_of(s: &str) -> Vec<ChartPattern> {
        let chart: FourPillars = s.parse().unwrap();
        let st = strength(&chart);
        let counts = TenGodCounts::of(&chart);
        let harmony = detect(&chart, HarmonyPriority::SixFirst);
        let sinsal = detect_sinsal(&chart);
        match_patterns(PatternInputs {
            strength: &st,
            ten_gods: &counts,
            harmony: &harmony,
            sinsal: &sinsal,
        })
    }

    #[test]
    fn reference_chart_patterns() {
        use ChartPattern::*;
        assert_eq!(
            patterns_of("庚辰 乙酉 癸未 庚申"),
            vec![
                Strong,
                ResourceExcess,
                WealthAbsent,
                OutputLack,
                MetalStemHarmony,
                MetalSixHarmony,
                CanopyOnDaySeat,
                StrongResourceExcess,
                StrongWealthAbsent,
                ResourceExcessOutputLack,
                HeavenEarthHarmony,
            ]
        );
    }

    #[test]
    fn strong_and_weak_exclusive() {
        let p = patterns_of("甲子 丙寅 戊辰 庚午");
        assert!(!(p.contains(&ChartPattern::Strong) && p.contains(&ChartPattern::Weak)));
    }
}
