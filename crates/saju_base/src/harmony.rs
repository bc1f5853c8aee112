//! Harmony (합) and clash (충) detection over a chart's stems and branches.
//!
//! Passes, in order:
//! 1. stem harmonies (천간합), greedy and exclusive per position
//! 2. stem clashes (천간충), every matching pair
//! 3. branch six-harmonies (육합), greedy and exclusive
//! 4. branch triple harmonies (삼합), over positions not yet claimed
//! 5. branch partial harmonies (반합), every matching pair, reporting only
//! 6. branch clashes (지지충), every matching pair
//!
//! Exclusive passes are folds over candidate pairs in scan order
//! (year < month < day < hour, inner index ascending) that carry the set
//! of already-claimed positions. The six and triple passes share one
//! claimed set; [`HarmonyPriority`] picks which of them runs first.

use serde::Serialize;

use crate::branch::Branch;
use crate::element::Element;
use crate::pillar::{ALL_POSITIONS, FourPillars, Glyph, PillarPosition};
use crate::stem::Stem;

/// Stem pairs that combine, with the produced element.
pub const STEM_HARMONIES: [(Stem, Stem, Element); 5] = [
    (Stem::Gap, Stem::Gi, Element::Earth),
    (Stem::Eul, Stem::Gyeong, Element::Metal),
    (Stem::Byeong, Stem::Sin, Element::Water),
    (Stem::Jeong, Stem::Im, Element::Wood),
    (Stem::Mu, Stem::Gye, Element::Fire),
];

/// Opposing stem pairs.
pub const STEM_CLASHES: [(Stem, Stem); 4] = [
    (Stem::Gap, Stem::Gyeong),
    (Stem::Eul, Stem::Sin),
    (Stem::Byeong, Stem::Im),
    (Stem::Jeong, Stem::Gye),
];

/// Branch pairs of the six harmonies.
pub const SIX_HARMONIES: [(Branch, Branch, Element); 6] = [
    (Branch::Ja, Branch::Chuk, Element::Earth),
    (Branch::In, Branch::Hae, Element::Wood),
    (Branch::Myo, Branch::Sul, Element::Fire),
    (Branch::Jin, Branch::Yu, Element::Metal),
    (Branch::Sa, Branch::Sin, Element::Water),
    (Branch::O, Branch::Mi, Element::Fire),
];

/// Three-branch harmonies.
pub const TRIPLE_HARMONIES: [([Branch; 3], Element); 4] = [
    ([Branch::Sin, Branch::Ja, Branch::Jin], Element::Water),
    ([Branch::Hae, Branch::Myo, Branch::Mi], Element::Wood),
    ([Branch::In, Branch::O, Branch::Sul], Element::Fire),
    ([Branch::Sa, Branch::Yu, Branch::Chuk], Element::Metal),
];

/// Opposing branch pairs.
pub const BRANCH_CLASHES: [(Branch, Branch); 6] = [
    (Branch::Ja, Branch::O),
    (Branch::Chuk, Branch::Mi),
    (Branch::In, Branch::Sin),
    (Branch::Myo, Branch::Yu),
    (Branch::Jin, Branch::Sul),
    (Branch::Sa, Branch::Hae),
];

/// Candidate position pairs in scan order.
const SCAN_PAIRS: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

fn unordered<T: PartialEq>(a: T, b: T, x: T, y: T) -> bool {
    (a == x && b == y) || (a == y && b == x)
}

/// Element produced when two stems combine.
pub fn stem_harmony(a: Stem, b: Stem) -> Option<Element> {
    STEM_HARMONIES
        .iter()
        .find(|&&(x, y, _)| unordered(a, b, x, y))
        .map(|&(_, _, e)| e)
}

pub fn stem_clash(a: Stem, b: Stem) -> bool {
    STEM_CLASHES.iter().any(|&(x, y)| unordered(a, b, x, y))
}

/// Element produced by a six-harmony pair.
pub fn six_harmony(a: Branch, b: Branch) -> Option<Element> {
    SIX_HARMONIES
        .iter()
        .find(|&&(x, y, _)| unordered(a, b, x, y))
        .map(|&(_, _, e)| e)
}

/// Element of the triple that two distinct branches partially complete.
pub fn partial_harmony(a: Branch, b: Branch) -> Option<Element> {
    if a == b {
        return None;
    }
    TRIPLE_HARMONIES
        .iter()
        .find(|(members, _)| members.contains(&a) && members.contains(&b))
        .map(|&(_, e)| e)
}

pub fn branch_clash(a: Branch, b: Branch) -> bool {
    BRANCH_CLASHES.iter().any(|&(x, y)| unordered(a, b, x, y))
}

/// Small set of chart positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct PositionSet(u8);

impl PositionSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn contains(self, pos: PillarPosition) -> bool {
        self.0 & (1 << pos.index()) != 0
    }

    #[must_use]
    pub const fn with(self, pos: PillarPosition) -> Self {
        Self(self.0 | (1 << pos.index()))
    }

    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Category of a harmony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HarmonyKind {
    Stem,
    Six,
    Triple,
    Partial,
}

impl HarmonyKind {
    /// Only stem, six, and triple harmonies change element tallies.
    pub const fn transforms(self) -> bool {
        !matches!(self, Self::Partial)
    }
}

/// A detected harmony.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HarmonyEvent {
    pub kind: HarmonyKind,
    /// Participant positions in ascending order.
    pub positions: Vec<PillarPosition>,
    /// Participant characters aligned with `positions`.
    pub glyphs: Vec<Glyph>,
    pub element: Element,
}

impl HarmonyEvent {
    pub fn involves(&self, pos: PillarPosition) -> bool {
        self.positions.contains(&pos)
    }

    pub fn contains_glyph(&self, glyph: Glyph) -> bool {
        self.glyphs.contains(&glyph)
    }
}

/// Category of a clash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClashKind {
    Stem,
    Branch,
}

/// A detected clash between two positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClashEvent {
    pub kind: ClashKind,
    pub positions: [PillarPosition; 2],
    pub glyphs: [Glyph; 2],
}

/// Which exclusive branch pass claims positions first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HarmonyPriority {
    /// Six-harmonies claim first; triples use what is left.
    #[default]
    SixFirst,
    /// Triples claim first; six-harmonies use what is left.
    TripleFirst,
}

/// Greedy pair fold: each candidate pair in scan order is accepted when
/// neither position is claimed and `rule` yields an element.
fn claim_pairs<T: Copy + Into<Glyph>>(
    items: [T; 4],
    kind: HarmonyKind,
    claimed: PositionSet,
    rule: impl Fn(T, T) -> Option<Element>,
) -> (Vec<HarmonyEvent>, PositionSet) {
    SCAN_PAIRS
        .iter()
        .fold((Vec::new(), claimed), |(mut found, claimed), &(i, j)| {
            let (pi, pj) = (ALL_POSITIONS[i], ALL_POSITIONS[j]);
            if claimed.contains(pi) || claimed.contains(pj) {
                return (found, claimed);
            }
            match rule(items[i], items[j]) {
                Some(element) => {
                    found.push(HarmonyEvent {
                        kind,
                        positions: vec![pi, pj],
                        glyphs: vec![items[i].into(), items[j].into()],
                        element,
                    });
                    (found, claimed.with(pi).with(pj))
                }
                None => (found, claimed),
            }
        })
}

/// Every pair in scan order satisfying `rule`, with no exclusivity.
fn all_pairs<T: Copy, R>(items: [T; 4], rule: impl Fn(T, T) -> Option<R>) -> Vec<(usize, usize, R)> {
    SCAN_PAIRS
        .iter()
        .filter_map(|&(i, j)| rule(items[i], items[j]).map(|r| (i, j, r)))
        .collect()
}

/// Exclusive stem-harmony pass.
pub fn stem_harmonies(stems: [Stem; 4], claimed: PositionSet) -> (Vec<HarmonyEvent>, PositionSet) {
    claim_pairs(stems, HarmonyKind::Stem, claimed, stem_harmony)
}

/// Exclusive six-harmony pass.
pub fn six_harmonies(
    branches: [Branch; 4],
    claimed: PositionSet,
) -> (Vec<HarmonyEvent>, PositionSet) {
    claim_pairs(branches, HarmonyKind::Six, claimed, six_harmony)
}

/// Exclusive triple pass: a triple is complete when each of its three
/// members sits at some unclaimed position; the earliest such position
/// per member is taken.
///
/// A repeated member does not block the triple. In 子申子辰 the year 子 is
/// used and the day 子 stays unclaimed; if the year were already claimed
/// by an earlier pass, the day 子 would complete the triple instead.
pub fn triple_harmonies(
    branches: [Branch; 4],
    claimed: PositionSet,
) -> (Vec<HarmonyEvent>, PositionSet) {
    TRIPLE_HARMONIES
        .iter()
        .fold((Vec::new(), claimed), |(mut found, claimed), (members, element)| {
            let picks = members.map(|m| {
                ALL_POSITIONS
                    .iter()
                    .copied()
                    .find(|&p| !claimed.contains(p) && branches[p.index() as usize] == m)
            });
            let [Some(a), Some(b), Some(c)] = picks else {
                return (found, claimed);
            };
            let mut positions = vec![a, b, c];
            positions.sort();
            let glyphs = positions
                .iter()
                .map(|p| Glyph::Branch(branches[p.index() as usize]))
                .collect();
            found.push(HarmonyEvent {
                kind: HarmonyKind::Triple,
                positions,
                glyphs,
                element: *element,
            });
            (found, claimed.with(a).with(b).with(c))
        })
}

/// Partial (2-of-3) harmonies over all branches.
pub fn partial_harmonies(branches: [Branch; 4]) -> Vec<HarmonyEvent> {
    all_pairs(branches, partial_harmony)
        .into_iter()
        .map(|(i, j, element)| HarmonyEvent {
            kind: HarmonyKind::Partial,
            positions: vec![ALL_POSITIONS[i], ALL_POSITIONS[j]],
            glyphs: vec![Glyph::Branch(branches[i]), Glyph::Branch(branches[j])],
            element,
        })
        .collect()
}

fn clashes<T: Copy + Into<Glyph>>(
    items: [T; 4],
    kind: ClashKind,
    rule: impl Fn(T, T) -> bool,
) -> Vec<ClashEvent> {
    all_pairs(items, |a, b| rule(a, b).then_some(()))
        .into_iter()
        .map(|(i, j, ())| ClashEvent {
            kind,
            positions: [ALL_POSITIONS[i], ALL_POSITIONS[j]],
            glyphs: [items[i].into(), items[j].into()],
        })
        .collect()
}

pub fn stem_clashes(stems: [Stem; 4]) -> Vec<ClashEvent> {
    clashes(stems, ClashKind::Stem, stem_clash)
}

pub fn branch_clashes(branches: [Branch; 4]) -> Vec<ClashEvent> {
    clashes(branches, ClashKind::Branch, branch_clash)
}

/// All harmony and clash events of one chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HarmonyReport {
    pub priority: HarmonyPriority,
    pub stem_harmonies: Vec<HarmonyEvent>,
    pub stem_clashes: Vec<ClashEvent>,
    pub six_harmonies: Vec<HarmonyEvent>,
    pub triple_harmonies: Vec<HarmonyEvent>,
    pub partial_harmonies: Vec<HarmonyEvent>,
    pub branch_clashes: Vec<ClashEvent>,
}

impl HarmonyReport {
    /// Events that feed the transformation engine, in detection order:
    /// stem harmonies, then the branch pass that claimed first, then the other.
    pub fn transforming_events(&self) -> Vec<&HarmonyEvent> {
        let (first, second) = match self.priority {
            HarmonyPriority::SixFirst => (&self.six_harmonies, &self.triple_harmonies),
            HarmonyPriority::TripleFirst => (&self.triple_harmonies, &self.six_harmonies),
        };
        self.stem_harmonies
            .iter()
            .chain(first)
            .chain(second)
            .collect()
    }

    /// Whether any harmony or clash was found.
    pub fn is_empty(&self) -> bool {
        self.stem_harmonies.is_empty()
            && self.stem_clashes.is_empty()
            && self.six_harmonies.is_empty()
            && self.triple_harmonies.is_empty()
            && self.partial_harmonies.is_empty()
            && self.branch_clashes.is_empty()
    }
}

/// Run every pass over a chart.
pub fn detect(chart: &FourPillars, priority: HarmonyPriority) -> HarmonyReport {
    let stems = chart.stems();
    let branches = chart.branches();

    let (stem_harmonies, _) = stem_harmonies(stems, PositionSet::empty());

    let (six, triple) = match priority {
        HarmonyPriority::SixFirst => {
            let (six, claimed) = six_harmonies(branches, PositionSet::empty());
            let (triple, _) = triple_harmonies(branches, claimed);
            (six, triple)
        }
        HarmonyPriority::TripleFirst => {
            let (triple, claimed) = triple_harmonies(branches, PositionSet::empty());
            let (six, _) = six_harmonies(branches, claimed);
            (six, triple)
        }
    };

    HarmonyReport {
        priority,
        stem_harmonies,
        stem_clashes: stem_clashes(stems),
        six_harmonies: six,
        triple_harmonies: triple,
        partial_harmonies: partial_harmonies(branches),
        branch_clashes: branch_clashes(branches),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PillarPosition::*;

    fn chart(s: &str) -> FourPillars {
        s.parse().unwrap()
    }

    #[test]
    fn reference_chart() {
        let r = detect(&chart("庚辰 乙酉 癸未 庚申"), HarmonyPriority::SixFirst);
        assert_eq!(r.stem_harmonies.len(), 1);
        assert_eq!(r.stem_harmonies[0].positions, vec![Year, Month]);
        assert_eq!(r.stem_harmonies[0].element, Element::Metal);

        assert_eq!(r.six_harmonies.len(), 1);
        assert_eq!(r.six_harmonies[0].positions, vec![Year, Month]);
        assert_eq!(r.six_harmonies[0].element, Element::Metal);

        assert!(r.triple_harmonies.is_empty());
        assert!(r.stem_clashes.is_empty());
        assert!(r.branch_clashes.is_empty());

        // 辰 and 申 are two thirds of 申子辰.
        assert_eq!(r.partial_harmonies.len(), 1);
        assert_eq!(r.partial_harmonies[0].positions, vec![Year, Hour]);
        assert_eq!(r.partial_harmonies[0].element, Element::Water);
    }

    #[test]
    fn stem_harmony_is_first_found() {
        // 甲 at year and day, 己 at month: only year-month combine.
        let (found, claimed) = stem_harmonies(
            [Stem::Gap, Stem::Gi, Stem::Gap, Stem::Byeong],
            PositionSet::empty(),
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].positions, vec![Year, Month]);
        assert!(claimed.contains(Year) && claimed.contains(Month));
        assert!(!claimed.contains(Day));
    }

    #[test]
    fn claimed_positions_are_skipped() {
        let pre = PositionSet::empty().with(Year);
        let (found, _) = stem_harmonies([Stem::Gap, Stem::Gi, Stem::Gap, Stem::Byeong], pre);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].positions, vec![Month, Day]);
    }

    #[test]
    fn clashes_are_not_exclusive() {
        let found = branch_clashes([Branch::Ja, Branch::O, Branch::Ja, Branch::O]);
        assert_eq!(found.len(), 4);
        let stems = stem_clashes([Stem::Gap, Stem::Gyeong, Stem::Gap, Stem::Eul]);
        assert_eq!(stems.len(), 2);
    }

    #[test]
    fn six_takes_priority_over_triple() {
        // 子丑 six-harmony claims year and month; 申子辰 then lacks a free 子.
        let c = chart("甲子 乙丑 壬申 庚辰");
        let r = detect(&c, HarmonyPriority::SixFirst);
        assert_eq!(r.six_harmonies.len(), 1);
        assert!(r.triple_harmonies.is_empty());
        // Partials still see every branch.
        assert!(r.partial_harmonies.iter().any(|e| e.positions == vec![Year, Day]));
    }

    #[test]
    fn triple_first_priority() {
        let c = chart("甲子 乙丑 壬申 庚辰");
        let r = detect(&c, HarmonyPriority::TripleFirst);
        assert_eq!(r.triple_harmonies.len(), 1);
        assert_eq!(r.triple_harmonies[0].positions, vec![Year, Day, Hour]);
        assert_eq!(r.triple_harmonies[0].element, Element::Water);
        assert!(r.six_harmonies.is_empty());
        // 乙庚 in the stems comes first, then the triple.
        let kinds: Vec<_> = r.transforming_events().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![HarmonyKind::Stem, HarmonyKind::Triple]);
    }

    #[test]
    fn complete_triple_with_spare_member() {
        // 申子辰 plus a second 子: earliest 子 is taken.
        let (found, claimed) = triple_harmonies(
            [Branch::Ja, Branch::Sin, Branch::Ja, Branch::Jin],
            PositionSet::empty(),
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].positions, vec![Year, Month, Hour]);
        assert!(!claimed.contains(Day));
    }

    #[test]
    fn repeated_member_skips_claimed_position() {
        let (found, claimed) = triple_harmonies(
            [Branch::Ja, Branch::Sin, Branch::Ja, Branch::Jin],
            PositionSet::empty().with(Year),
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].positions, vec![Month, Day, Hour]);
        assert_eq!(found[0].element, Element::Water);
        assert!(claimed.contains(Year));
    }

    #[test]
    fn partial_needs_distinct_branches() {
        assert_eq!(partial_harmony(Branch::Ja, Branch::Ja), None);
        assert_eq!(partial_harmony(Branch::Jin, Branch::Ja), Some(Element::Water));
        assert_eq!(partial_harmony(Branch::Ja, Branch::O), None);
    }

    #[test]
    fn partial_table_has_twelve_pairs() {
        let mut n = 0;
        for a in Branch::all() {
            for b in Branch::all() {
                if a < b && partial_harmony(*a, *b).is_some() {
                    n += 1;
                }
            }
        }
        assert_eq!(n, 12);
    }

    #[test]
    fn tables_are_unordered() {
        assert_eq!(stem_harmony(Stem::Gyeong, Stem::Eul), Some(Element::Metal));
        assert_eq!(six_harmony(Branch::Yu, Branch::Jin), Some(Element::Metal));
        assert!(branch_clash(Branch::O, Branch::Ja));
    }
}
