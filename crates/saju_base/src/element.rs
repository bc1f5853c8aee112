//! Five elements (오행) and yin/yang polarity.
//!
//! Production cycle: wood → fire → earth → metal → water → wood.
//! Domination cycle: wood → earth → water → fire → metal → wood.

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in production order (index 0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// 0-based index in production order.
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    pub const fn from_index(i: u8) -> Self {
        ALL_ELEMENTS[(i % 5) as usize]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Metal => "metal",
            Self::Water => "water",
        }
    }

    /// Single-character Hanja (木火土金水).
    pub const fn hanja(self) -> char {
        match self {
            Self::Wood => '木',
            Self::Fire => '火',
            Self::Earth => '土',
            Self::Metal => '金',
            Self::Water => '水',
        }
    }

    /// Korean reading (목화토금수).
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Wood => "목",
            Self::Fire => "화",
            Self::Earth => "토",
            Self::Metal => "금",
            Self::Water => "수",
        }
    }

    /// The element this one produces.
    pub const fn produces(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The element this one dominates.
    pub const fn dominates(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    pub const fn all() -> &'static [Element; 5] {
        &ALL_ELEMENTS
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl serde::Serialize for Element {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Yin/yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "yang",
            Self::Yin => "yin",
        }
    }

    pub const fn is_yang(self) -> bool {
        matches!(self, Self::Yang)
    }
}

impl serde::Serialize for Polarity {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_cycle() {
        assert_eq!(Element::Wood.produces(), Element::Fire);
        assert_eq!(Element::Metal.produces(), Element::Water);
        assert_eq!(Element::Water.produces(), Element::Wood);
    }

    #[test]
    fn domination_cycle() {
        assert_eq!(Element::Wood.dominates(), Element::Earth);
        assert_eq!(Element::Earth.dominates(), Element::Water);
        assert_eq!(Element::Water.dominates(), Element::Fire);
        assert_eq!(Element::Fire.dominates(), Element::Metal);
        assert_eq!(Element::Metal.dominates(), Element::Wood);
    }

    #[test]
    fn every_pair_has_one_relation() {
        for a in ALL_ELEMENTS {
            for b in ALL_ELEMENTS {
                let hits = [
                    a == b,
                    a.produces() == b,
                    b.produces() == a,
                    a.dominates() == b,
                    b.dominates() == a,
                ]
                .iter()
                .filter(|&&x| x)
                .count();
                assert_eq!(hits, 1, "{a} vs {b}");
            }
        }
    }
}
