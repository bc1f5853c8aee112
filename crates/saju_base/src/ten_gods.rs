//! Ten-god (십성) classification relative to the day stem.
//!
//! The relation is a pure function of the day stem's element/polarity and
//! the target's element/polarity. Branches use their ten-god polarity
//! (子午 yin, 巳亥 yang), not their base polarity.
//!
//! | relation              | same polarity      | different polarity |
//! |-----------------------|--------------------|--------------------|
//! | same element          | Peer 비견          | Rival 겁재         |
//! | day produces target   | Expression 식신    | Output 상관        |
//! | target produces day   | Resource 편인      | Seal 정인          |
//! | day dominates target  | IndirectWealth 편재 | DirectWealth 정재  |
//! | target dominates day  | IndirectAuthority 편관 | DirectAuthority 정관 |

use serde::Serialize;

use crate::element::{Element, Polarity};
use crate::pillar::{FourPillars, Glyph, NON_DAY_SLOTS, Slot};
use crate::stem::Stem;

/// One of the ten gods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TenGod {
    Peer,
    Rival,
    Expression,
    Output,
    Resource,
    Seal,
    IndirectWealth,
    DirectWealth,
    IndirectAuthority,
    DirectAuthority,
}

/// All 10 in table order.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Peer,
    TenGod::Rival,
    TenGod::Expression,
    TenGod::Output,
    TenGod::Resource,
    TenGod::Seal,
    TenGod::IndirectWealth,
    TenGod::DirectWealth,
    TenGod::IndirectAuthority,
    TenGod::DirectAuthority,
];

impl TenGod {
    pub const fn index(self) -> u8 {
        match self {
            Self::Peer => 0,
            Self::Rival => 1,
            Self::Expression => 2,
            Self::Output => 3,
            Self::Resource => 4,
            Self::Seal => 5,
            Self::IndirectWealth => 6,
            Self::DirectWealth => 7,
            Self::IndirectAuthority => 8,
            Self::DirectAuthority => 9,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Peer => "peer",
            Self::Rival => "rival",
            Self::Expression => "expression",
            Self::Output => "output",
            Self::Resource => "resource",
            Self::Seal => "seal",
            Self::IndirectWealth => "indirect_wealth",
            Self::DirectWealth => "direct_wealth",
            Self::IndirectAuthority => "indirect_authority",
            Self::DirectAuthority => "direct_authority",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Peer => "비견",
            Self::Rival => "겁재",
            Self::Expression => "식신",
            Self::Output => "상관",
            Self::Resource => "편인",
            Self::Seal => "정인",
            Self::IndirectWealth => "편재",
            Self::DirectWealth => "정재",
            Self::IndirectAuthority => "편관",
            Self::DirectAuthority => "정관",
        }
    }

    pub const fn group(self) -> TenGodGroup {
        match self {
            Self::Peer | Self::Rival => TenGodGroup::Companion,
            Self::Expression | Self::Output => TenGodGroup::Output,
            Self::IndirectWealth | Self::DirectWealth => TenGodGroup::Wealth,
            Self::IndirectAuthority | Self::DirectAuthority => TenGodGroup::Authority,
            Self::Resource | Self::Seal => TenGodGroup::Resource,
        }
    }

    /// Companion and resource relations strengthen the day stem.
    pub const fn is_reinforcing(self) -> bool {
        matches!(
            self.group(),
            TenGodGroup::Companion | TenGodGroup::Resource
        )
    }
}

impl std::fmt::Display for TenGod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.korean())
    }
}

impl Serialize for TenGod {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Pairs of ten gods sharing an elemental relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TenGodGroup {
    /// 비겁
    Companion,
    /// 식상
    Output,
    /// 재성
    Wealth,
    /// 관성
    Authority,
    /// 인성
    Resource,
}

/// Result of a lookup that may meet a character outside the closed tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution<T> {
    Resolved(T),
    Unresolved(char),
}

impl<T> Resolution<T> {
    pub fn resolved(self) -> Option<T> {
        match self {
            Self::Resolved(t) => Some(t),
            Self::Unresolved(_) => None,
        }
    }
}

/// Classify a target element/polarity against a day element/polarity.
pub const fn classify(
    day: Element,
    day_polarity: Polarity,
    target: Element,
    target_polarity: Polarity,
) -> TenGod {
    let same = matches!(
        (day_polarity, target_polarity),
        (Polarity::Yang, Polarity::Yang) | (Polarity::Yin, Polarity::Yin)
    );
    let di = day.index();
    let ti = target.index();
    if di == ti {
        if same { TenGod::Peer } else { TenGod::Rival }
    } else if day.produces().index() == ti {
        if same { TenGod::Expression } else { TenGod::Output }
    } else if target.produces().index() == di {
        if same { TenGod::Resource } else { TenGod::Seal }
    } else if day.dominates().index() == ti {
        if same {
            TenGod::IndirectWealth
        } else {
            TenGod::DirectWealth
        }
    } else if same {
        TenGod::IndirectAuthority
    } else {
        TenGod::DirectAuthority
    }
}

/// Ten god of any chart character relative to `day`.
pub const fn ten_god(day: Stem, target: Glyph) -> TenGod {
    classify(
        day.element(),
        day.polarity(),
        target.element(),
        target.ten_god_polarity(),
    )
}

/// Element of a raw Hanja character.
pub fn element_of_char(c: char) -> Resolution<Element> {
    match Glyph::from_char(c) {
        Some(g) => Resolution::Resolved(g.element()),
        None => Resolution::Unresolved(c),
    }
}

/// Ten god for raw characters; `day` must be a stem.
///
/// The first character outside the tables is reported back.
pub fn ten_god_for_chars(day: char, target: char) -> Resolution<TenGod> {
    let Some(day_stem) = Stem::from_char(day) else {
        return Resolution::Unresolved(day);
    };
    match Glyph::from_char(target) {
        Some(g) => Resolution::Resolved(ten_god(day_stem, g)),
        None => Resolution::Unresolved(target),
    }
}

/// Ten god of one non-day chart cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotTenGod {
    pub slot: Slot,
    pub glyph: Glyph,
    pub ten_god: TenGod,
}

/// Ten gods of the seven non-day cells, in weighting order.
pub fn chart_ten_gods(chart: &FourPillars) -> [SlotTenGod; 7] {
    let day = chart.day_stem();
    NON_DAY_SLOTS.map(|slot| {
        let glyph = chart.glyph(slot);
        SlotTenGod {
            slot,
            glyph,
            ten_god: ten_god(day, glyph),
        }
    })
}

/// Occurrences of each ten god among the seven non-day cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TenGodCounts {
    counts: [u8; 10],
}

impl TenGodCounts {
    pub fn of(chart: &FourPillars) -> Self {
        let mut counts = [0u8; 10];
        for entry in chart_ten_gods(chart) {
            counts[entry.ten_god.index() as usize] += 1;
        }
        Self { counts }
    }

    pub fn get(&self, god: TenGod) -> u8 {
        self.counts[god.index() as usize]
    }

    pub fn group(&self, group: TenGodGroup) -> u8 {
        ALL_TEN_GODS
            .iter()
            .filter(|g| g.group() == group)
            .map(|&g| self.get(g))
            .sum()
    }

    pub fn total(&self) -> u8 {
        self.counts.iter().sum()
    }
}

impl Serialize for TenGodCounts {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(None)?;
        for god in ALL_TEN_GODS {
            let n = self.get(god);
            if n > 0 {
                map.serialize_entry(god.name(), &n)?;
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::Branch;

    fn reference() -> FourPillars {
        "庚辰 乙酉 癸未 庚申".parse().unwrap()
    }

    #[test]
    fn reference_chart_relations() {
        let gods: Vec<TenGod> = chart_ten_gods(&reference())
            .iter()
            .map(|e| e.ten_god)
            .collect();
        assert_eq!(
            gods,
            vec![
                TenGod::Seal,
                TenGod::DirectAuthority,
                TenGod::Expression,
                TenGod::Resource,
                TenGod::IndirectAuthority,
                TenGod::Seal,
                TenGod::Seal,
            ]
        );
    }

    #[test]
    fn same_stem_is_peer() {
        for s in Stem::all() {
            assert_eq!(ten_god(*s, Glyph::Stem(*s)), TenGod::Peer);
        }
    }

    #[test]
    fn polarity_override_applies() {
        // 壬 (yang water) against 子 (yang by base, yin for ten gods).
        assert_eq!(ten_god(Stem::Im, Glyph::Branch(Branch::Ja)), TenGod::Rival);
        // 丙 (yang fire) against 巳 (yin by base, yang for ten gods).
        assert_eq!(ten_god(Stem::Byeong, Glyph::Branch(Branch::Sa)), TenGod::Peer);
    }

    #[test]
    fn wealth_and_authority() {
        assert_eq!(ten_god(Stem::Gap, Glyph::Stem(Stem::Mu)), TenGod::IndirectWealth);
        assert_eq!(ten_god(Stem::Gap, Glyph::Stem(Stem::Gi)), TenGod::DirectWealth);
        assert_eq!(ten_god(Stem::Gap, Glyph::Stem(Stem::Gyeong)), TenGod::IndirectAuthority);
        assert_eq!(ten_god(Stem::Gap, Glyph::Stem(Stem::Sin)), TenGod::DirectAuthority);
    }

    #[test]
    fn unresolved_marker() {
        assert_eq!(ten_god_for_chars('癸', 'X'), Resolution::Unresolved('X'));
        assert_eq!(ten_god_for_chars('子', '庚'), Resolution::Unresolved('子'));
        assert_eq!(ten_god_for_chars('癸', '庚'), Resolution::Resolved(TenGod::Seal));
        assert_eq!(element_of_char('?'), Resolution::Unresolved('?'));
        assert_eq!(element_of_char('未'), Resolution::Resolved(Element::Earth));
    }

    #[test]
    fn counts_cover_seven_cells() {
        let counts = TenGodCounts::of(&reference());
        assert_eq!(counts.total(), 7);
        assert_eq!(counts.get(TenGod::Seal), 3);
        assert_eq!(counts.group(TenGodGroup::Resource), 4);
        assert_eq!(counts.group(TenGodGroup::Wealth), 0);
        assert_eq!(counts.group(TenGodGroup::Output), 1);
    }
}
