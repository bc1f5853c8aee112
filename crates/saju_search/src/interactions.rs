//! Relations between an incoming period pillar and the natal chart.
//!
//! A luck or annual pillar is checked cell by cell: its stem against the
//! four natal stems, its branch against the four natal branches. No
//! exclusivity applies here; every matching pair is reported.

use saju_base::sinsal::nobility;
use saju_base::{
    Element, FourPillars, Glyph, Pillar, PillarPosition, branch_clash, partial_harmony,
    six_harmony, stem_clash, stem_harmony,
};
use serde::Serialize;

/// Kind of period-to-natal relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    StemHarmony,
    StemClash,
    SixHarmony,
    PartialHarmony,
    BranchClash,
    /// Incoming branch is a 천을귀인 target of the natal day stem.
    Nobility,
}

/// One relation between an incoming character and a natal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodInteraction {
    pub kind: InteractionKind,
    pub natal_position: PillarPosition,
    pub natal: Glyph,
    pub incoming: Glyph,
    /// Produced element, for harmonies.
    pub element: Option<Element>,
}

/// Every relation of `incoming` with the natal chart, stems before
/// branches, natal positions in year-to-hour order.
pub fn period_interactions(natal: &FourPillars, incoming: Pillar) -> Vec<PeriodInteraction> {
    let mut out = Vec::new();

    for (position, p) in natal.iter() {
        let (natal_glyph, incoming_glyph) = (Glyph::Stem(p.stem), Glyph::Stem(incoming.stem));
        if let Some(element) = stem_harmony(incoming.stem, p.stem) {
            out.push(PeriodInteraction {
                kind: InteractionKind::StemHarmony,
                natal_position: position,
                natal: natal_glyph,
                incoming: incoming_glyph,
                element: Some(element),
            });
        }
        if stem_clash(incoming.stem, p.stem) {
            out.push(PeriodInteraction {
                kind: InteractionKind::StemClash,
                natal_position: position,
                natal: natal_glyph,
                incoming: incoming_glyph,
                element: None,
            });
        }
    }

    for (position, p) in natal.iter() {
        let (natal_glyph, incoming_glyph) =
            (Glyph::Branch(p.branch), Glyph::Branch(incoming.branch));
        let harmonies = [
            (
                InteractionKind::SixHarmony,
                six_harmony(incoming.branch, p.branch),
            ),
            (
                InteractionKind::PartialHarmony,
                partial_harmony(incoming.branch, p.branch),
            ),
        ];
        for (kind, element) in harmonies {
            if let Some(element) = element {
                out.push(PeriodInteraction {
                    kind,
                    natal_position: position,
                    natal: natal_glyph,
                    incoming: incoming_glyph,
                    element: Some(element),
                });
            }
        }
        if branch_clash(incoming.branch, p.branch) {
            out.push(PeriodInteraction {
                kind: InteractionKind::BranchClash,
                natal_position: position,
                natal: natal_glyph,
                incoming: incoming_glyph,
                element: None,
            });
        }
    }

    let day = natal.day_stem();
    if nobility(day).contains(&incoming.branch) {
        out.push(PeriodInteraction {
            kind: InteractionKind::Nobility,
            natal_position: PillarPosition::Day,
            natal: Glyph::Stem(day),
            incoming: Glyph::Branch(incoming.branch),
            element: None,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn natal() -> FourPillars {
        "庚辰 乙酉 癸未 庚申".parse().unwrap()
    }

    fn kinds(incoming: &str) -> Vec<(InteractionKind, PillarPosition)> {
        period_interactions(&natal(), incoming.parse().unwrap())
            .iter()
            .map(|i| (i.kind, i.natal_position))
            .collect()
    }

    #[test]
    fn gapin_clashes_metal() {
        use InteractionKind::*;
        use PillarPosition::*;
        // 甲 clashes both 庚; 寅 clashes 申.
        assert_eq!(
            kinds("甲寅"),
            vec![(StemClash, Year), (StemClash, Hour), (BranchClash, Hour)]
        );
    }

    #[test]
    fn eul_harmonises_with_both_gyeong() {
        let found = period_interactions(&natal(), "乙卯".parse().unwrap());
        let harmonies: Vec<_> = found
            .iter()
            .filter(|i| i.kind == InteractionKind::StemHarmony)
            .collect();
        assert_eq!(harmonies.len(), 2);
        assert!(harmonies.iter().all(|i| i.element == Some(Element::Metal)));
    }

    #[test]
    fn nobility_for_gye_day() {
        // 癸 day: 卯 and 巳 are noble.
        let found = period_interactions(&natal(), "丁巳".parse().unwrap());
        assert!(found.iter().any(|i| i.kind == InteractionKind::Nobility
            && i.natal_position == PillarPosition::Day));
        let found = period_interactions(&natal(), "丙午".parse().unwrap());
        assert!(!found.iter().any(|i| i.kind == InteractionKind::Nobility));
    }

    #[test]
    fn six_and_partial_with_branches() {
        // 子 with 申 and 辰 forms partial water harmonies.
        let found = period_interactions(&natal(), "壬子".parse().unwrap());
        let partial: Vec<_> = found
            .iter()
            .filter(|i| i.kind == InteractionKind::PartialHarmony)
            .map(|i| i.natal_position)
            .collect();
        assert_eq!(partial, vec![PillarPosition::Year, PillarPosition::Hour]);

        // 巳 pairs with 申 as a six-harmony.
        let found = period_interactions(&natal(), "丁巳".parse().unwrap());
        assert!(found.iter().any(|i| i.kind == InteractionKind::SixHarmony
            && i.natal_position == PillarPosition::Hour
            && i.element == Some(Element::Water)));
    }
}
