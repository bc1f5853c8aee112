//! Auxiliary stars (신살) by anchor-to-target lookup.
//!
//! Each star reads an anchor character from a fixed cell, maps it to a
//! target set, and reports every pillar whose character in the target
//! layer falls in that set. The anchor's own cell is eligible, and a cell
//! may carry several stars.
//!
//! | star          | anchor        | targets  |
//! |---------------|---------------|----------|
//! | 천을귀인 nobility | day stem    | branches |
//! | 도화 charm     | day branch    | branches |
//! | 역마 travel    | year branch   | branches |
//! | 화개 canopy    | day branch    | branches |
//! | 월공 monthly void | month branch | stems  |
//! | 문창 literary  | day stem      | branches |

use std::collections::BTreeMap;

use serde::Serialize;

use crate::branch::Branch;
use crate::pillar::{ALL_POSITIONS, FourPillars, Glyph, Layer, PillarPosition, Slot};
use crate::stem::Stem;

/// One auxiliary star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SinsalStar {
    Nobility,
    Charm,
    Travel,
    Canopy,
    MonthlyVoid,
    Literary,
}

pub const ALL_SINSAL: [SinsalStar; 6] = [
    SinsalStar::Nobility,
    SinsalStar::Charm,
    SinsalStar::Travel,
    SinsalStar::Canopy,
    SinsalStar::MonthlyVoid,
    SinsalStar::Literary,
];

impl SinsalStar {
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Nobility => "천을귀인",
            Self::Charm => "도화살",
            Self::Travel => "역마살",
            Self::Canopy => "화개살",
            Self::MonthlyVoid => "월공",
            Self::Literary => "문창귀인",
        }
    }

    /// Cell the anchor character is read from.
    pub const fn anchor(self) -> Slot {
        match self {
            Self::Nobility | Self::Literary => Slot::stem(PillarPosition::Day),
            Self::Charm | Self::Canopy => Slot::branch(PillarPosition::Day),
            Self::Travel => Slot::branch(PillarPosition::Year),
            Self::MonthlyVoid => Slot::branch(PillarPosition::Month),
        }
    }

    /// Layer the targets are matched in.
    pub const fn target_layer(self) -> Layer {
        match self {
            Self::MonthlyVoid => Layer::Stem,
            _ => Layer::Branch,
        }
    }

    /// Target characters for an anchor; empty when the anchor sits in the
    /// wrong layer for this star.
    pub fn targets(self, anchor: Glyph) -> Vec<Glyph> {
        match (self, anchor) {
            (Self::Nobility, Glyph::Stem(s)) => nobility(s).map(Glyph::Branch).to_vec(),
            (Self::Literary, Glyph::Stem(s)) => vec![Glyph::Branch(literary(s))],
            (Self::Charm, Glyph::Branch(b)) => vec![Glyph::Branch(charm(b))],
            (Self::Travel, Glyph::Branch(b)) => vec![Glyph::Branch(travel(b))],
            (Self::Canopy, Glyph::Branch(b)) => vec![Glyph::Branch(canopy(b))],
            (Self::MonthlyVoid, Glyph::Branch(b)) => vec![Glyph::Stem(monthly_void(b))],
            _ => Vec::new(),
        }
    }
}

/// 천을귀인 branches for a day stem.
pub const fn nobility(day: Stem) -> [Branch; 2] {
    use Branch::*;
    match day {
        Stem::Gap | Stem::Mu | Stem::Gyeong => [Chuk, Mi],
        Stem::Eul | Stem::Gi => [Ja, Sin],
        Stem::Byeong | Stem::Jeong => [Hae, Yu],
        Stem::Sin => [In, O],
        Stem::Im | Stem::Gye => [Myo, Sa],
    }
}

/// 문창귀인 branch for a day stem.
pub const fn literary(day: Stem) -> Branch {
    match day {
        Stem::Gap => Branch::Sa,
        Stem::Eul => Branch::O,
        Stem::Byeong | Stem::Mu => Branch::Sin,
        Stem::Jeong | Stem::Gi => Branch::Yu,
        Stem::Gyeong => Branch::Hae,
        Stem::Sin => Branch::Ja,
        Stem::Im => Branch::In,
        Stem::Gye => Branch::Myo,
    }
}

/// 도화 branch for a day branch.
pub const fn charm(day: Branch) -> Branch {
    match day {
        Branch::Ja | Branch::Jin => Branch::Yu,
        Branch::O | Branch::Sul => Branch::Myo,
        Branch::Myo | Branch::Mi => Branch::Ja,
        Branch::Yu | Branch::Chuk => Branch::O,
        Branch::In => Branch::Hae,
        Branch::Sin => Branch::Sa,
        Branch::Sa => Branch::Sin,
        Branch::Hae => Branch::In,
    }
}

/// 역마 branch for a year branch.
pub const fn travel(year: Branch) -> Branch {
    match year {
        Branch::Ja | Branch::Sin | Branch::Jin => Branch::In,
        Branch::O | Branch::In | Branch::Sul => Branch::Sin,
        Branch::Myo | Branch::Hae | Branch::Mi => Branch::Sa,
        Branch::Yu | Branch::Sa | Branch::Chuk => Branch::Hae,
    }
}

/// 화개 branch for a day branch: the storage branch of its triple.
pub const fn canopy(day: Branch) -> Branch {
    match day {
        Branch::Ja | Branch::Sin | Branch::Jin => Branch::Jin,
        Branch::O | Branch::In | Branch::Sul => Branch::Sul,
        Branch::Myo | Branch::Hae | Branch::Mi => Branch::Mi,
        Branch::Yu | Branch::Sa | Branch::Chuk => Branch::Chuk,
    }
}

/// 월공 stem for a month branch.
pub const fn monthly_void(month: Branch) -> Stem {
    match month {
        Branch::Ja | Branch::Chuk | Branch::Sin => Stem::Byeong,
        Branch::In | Branch::Jin | Branch::O | Branch::Sul => Stem::Im,
        Branch::Myo | Branch::Mi | Branch::Hae => Stem::Gyeong,
        Branch::Sa | Branch::Yu => Stem::Gap,
    }
}

/// One star hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SinsalMatch {
    pub star: SinsalStar,
    pub slot: Slot,
    pub glyph: Glyph,
    /// Character the targets were derived from.
    pub anchor: Glyph,
}

/// Star hits grouped by star; stars with no hit are absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct SinsalReport {
    by_star: BTreeMap<SinsalStar, Vec<SinsalMatch>>,
}

impl SinsalReport {
    pub fn get(&self, star: SinsalStar) -> &[SinsalMatch] {
        self.by_star.get(&star).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has(&self, star: SinsalStar) -> bool {
        !self.get(star).is_empty()
    }

    /// Whether `star` hits the given cell.
    pub fn hits(&self, star: SinsalStar, slot: Slot) -> bool {
        self.get(star).iter().any(|m| m.slot == slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SinsalMatch> {
        self.by_star.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.by_star.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_star.is_empty()
    }
}

/// Matches of one star in a chart.
pub fn find_star(chart: &FourPillars, star: SinsalStar) -> Vec<SinsalMatch> {
    let anchor = chart.glyph(star.anchor());
    let targets = star.targets(anchor);
    let layer = star.target_layer();
    ALL_POSITIONS
        .iter()
        .map(|&p| Slot { pillar: p, layer })
        .filter_map(|slot| {
            let glyph = chart.glyph(slot);
            targets.contains(&glyph).then_some(SinsalMatch {
                star,
                slot,
                glyph,
                anchor,
            })
        })
        .collect()
}

/// Matches of every star in a chart.
pub fn detect_sinsal(chart: &FourPillars) -> SinsalReport {
    let by_star = ALL_SINSAL
        .iter()
        .map(|&star| (star, find_star(chart, star)))
        .filter(|(_, hits)| !hits.is_empty())
        .collect();
    SinsalReport { by_star }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_chart_canopy_on_day_seat() {
        let chart: FourPillars = "庚辰 乙酉 癸未 庚申".parse().unwrap();
        let r = detect_sinsal(&chart);
        assert_eq!(r.len(), 1);
        assert!(r.hits(SinsalStar::Canopy, Slot::branch(PillarPosition::Day)));
        assert!(!r.has(SinsalStar::Nobility));
    }

    #[test]
    fn nobility_hits_every_matching_pillar() {
        // 甲 day: 丑 and 未 are noble; both appear.
        let chart: FourPillars = "乙丑 辛未 甲子 丁丑".parse().unwrap();
        let hits = find_star(&chart, SinsalStar::Nobility);
        let positions: Vec<_> = hits.iter().map(|m| m.slot.pillar).collect();
        assert_eq!(
            positions,
            vec![PillarPosition::Year, PillarPosition::Month, PillarPosition::Hour]
        );
    }

    #[test]
    fn monthly_void_targets_stems() {
        // 寅 month → 壬 stems.
        let chart: FourPillars = "壬寅 壬寅 甲子 壬申".parse().unwrap();
        let hits = find_star(&chart, SinsalStar::MonthlyVoid);
        assert_eq!(hits.len(), 3);
        assert!(hits.iter().all(|m| m.slot.layer == Layer::Stem));
    }

    #[test]
    fn travel_from_year_branch() {
        // 申 year → 寅.
        assert_eq!(travel(Branch::Sin), Branch::In);
        let chart: FourPillars = "甲申 丙寅 戊午 庚申".parse().unwrap();
        let hits = find_star(&chart, SinsalStar::Travel);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slot, Slot::branch(PillarPosition::Month));
    }

    #[test]
    fn wrong_layer_anchor_has_no_targets() {
        assert!(SinsalStar::Charm.targets(Glyph::Stem(Stem::Gap)).is_empty());
        assert_eq!(SinsalStar::Nobility.targets(Glyph::Stem(Stem::Sin)).len(), 2);
    }

    #[test]
    fn canopy_is_triple_storage() {
        for b in Branch::all() {
            let c = canopy(*b);
            assert!(matches!(c, Branch::Jin | Branch::Sul | Branch::Mi | Branch::Chuk));
        }
    }
}
