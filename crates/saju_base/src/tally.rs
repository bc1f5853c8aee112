//! Element tally (오행 분포) over the eight chart characters.

use serde::Serialize;

use crate::element::{ALL_ELEMENTS, Element};
use crate::pillar::FourPillars;

/// Count of characters per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ElementTally {
    counts: [u32; 5],
}

impl ElementTally {
    /// Tally the four stems and four branches; the total is always 8.
    pub fn of(chart: &FourPillars) -> Self {
        let mut tally = Self::default();
        for (_, p) in chart.iter() {
            tally.add(p.stem.element(), 1);
            tally.add(p.branch.element(), 1);
        }
        tally
    }

    pub const fn from_counts(counts: [u32; 5]) -> Self {
        Self { counts }
    }

    pub fn get(&self, element: Element) -> u32 {
        self.counts[element.index() as usize]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn add(&mut self, element: Element, n: u32) {
        self.counts[element.index() as usize] += n;
    }

    /// Remove one occurrence; returns false and leaves the tally unchanged
    /// when the element is already at zero.
    pub fn take_one(&mut self, element: Element) -> bool {
        let slot = &mut self.counts[element.index() as usize];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    /// Elements with a zero count.
    pub fn missing(&self) -> Vec<Element> {
        ALL_ELEMENTS
            .iter()
            .copied()
            .filter(|&e| self.get(e) == 0)
            .collect()
    }

    /// Element with the highest count; ties go to the earlier element.
    pub fn dominant(&self) -> Element {
        ALL_ELEMENTS
            .iter()
            .copied()
            .fold(Element::Wood, |best, e| {
                if self.get(e) > self.get(best) { e } else { best }
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Element, u32)> + '_ {
        ALL_ELEMENTS.iter().map(|&e| (e, self.get(e)))
    }
}

impl Serialize for ElementTally {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(5))?;
        for (e, n) in self.iter() {
            map.serialize_entry(e.name(), &n)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_tally() {
        let chart: FourPillars = "庚辰 乙酉 癸未 庚申".parse().unwrap();
        let t = ElementTally::of(&chart);
        assert_eq!(t.total(), 8);
        assert_eq!(t.get(Element::Wood), 1);
        assert_eq!(t.get(Element::Fire), 0);
        assert_eq!(t.get(Element::Earth), 2);
        assert_eq!(t.get(Element::Metal), 4);
        assert_eq!(t.get(Element::Water), 1);
        assert_eq!(t.missing(), vec![Element::Fire]);
        assert_eq!(t.dominant(), Element::Metal);
    }

    #[test]
    fn take_one_floors_at_zero() {
        let mut t = ElementTally::from_counts([0, 1, 0, 0, 0]);
        assert!(!t.take_one(Element::Wood));
        assert!(t.take_one(Element::Fire));
        assert!(!t.take_one(Element::Fire));
        assert_eq!(t.total(), 0);
    }

    #[test]
    fn serializes_as_map() {
        let t = ElementTally::from_counts([1, 0, 2, 4, 1]);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"wood":1,"fire":0,"earth":2,"metal":4,"water":1}"#);
    }
}
