//! Earthly branches (지지): the 12-symbol cycle.
//!
//! Besides element and base polarity, four branches carry a reversed
//! polarity used only when classifying ten gods: 子 and 午 count as yin,
//! 巳 and 亥 count as yang. Everything else uses the base polarity.

use std::str::FromStr;

use crate::element::{Element, Polarity};
use crate::error::BaseError;

/// One of the 12 earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in cycle order (index 0 = 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

const HANJA: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];
const HANGUL: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];

impl Branch {
    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ja => 0,
            Self::Chuk => 1,
            Self::In => 2,
            Self::Myo => 3,
            Self::Jin => 4,
            Self::Sa => 5,
            Self::O => 6,
            Self::Mi => 7,
            Self::Sin => 8,
            Self::Yu => 9,
            Self::Sul => 10,
            Self::Hae => 11,
        }
    }

    /// Branch at `i` mod 12.
    pub const fn from_index(i: u8) -> Self {
        ALL_BRANCHES[(i % 12) as usize]
    }

    pub const fn hanja(self) -> char {
        HANJA[self.index() as usize]
    }

    pub const fn hangul(self) -> &'static str {
        HANGUL[self.index() as usize]
    }

    pub const fn element(self) -> Element {
        match self {
            Self::In | Self::Myo => Element::Wood,
            Self::Sa | Self::O => Element::Fire,
            Self::Jin | Self::Sul | Self::Chuk | Self::Mi => Element::Earth,
            Self::Sin | Self::Yu => Element::Metal,
            Self::Hae | Self::Ja => Element::Water,
        }
    }

    /// Base polarity: even-indexed branches are yang.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Polarity used for ten-god classification.
    pub const fn ten_god_polarity(self) -> Polarity {
        match self {
            Self::Ja | Self::O => Polarity::Yin,
            Self::Sa | Self::Hae => Polarity::Yang,
            _ => self.polarity(),
        }
    }

    /// Look up a Hanja branch character.
    pub fn from_char(c: char) -> Option<Self> {
        ALL_BRANCHES.iter().copied().find(|b| b.hanja() == c)
    }

    /// Look up a Hangul reading.
    pub fn from_hangul(name: &str) -> Option<Self> {
        ALL_BRANCHES.iter().copied().find(|b| b.hangul() == name)
    }

    pub const fn all() -> &'static [Branch; 12] {
        &ALL_BRANCHES
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hanja())
    }
}

impl FromStr for Branch {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c)
                .or_else(|| Self::from_hangul(s.trim()))
                .ok_or(BaseError::UnknownCharacter(c)),
            _ => Err(BaseError::InvalidInput("branch must be a single character")),
        }
    }
}

impl serde::Serialize for Branch {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earth_branches() {
        let earth: String = ALL_BRANCHES
            .iter()
            .filter(|b| b.element() == Element::Earth)
            .map(|b| b.hanja())
            .collect();
        assert_eq!(earth, "丑辰未戌");
    }

    #[test]
    fn polarity_override_only_for_four() {
        let flipped: String = ALL_BRANCHES
            .iter()
            .filter(|b| b.polarity() != b.ten_god_polarity())
            .map(|b| b.hanja())
            .collect();
        assert_eq!(flipped, "子巳午亥");
        assert_eq!(Branch::Ja.ten_god_polarity(), Polarity::Yin);
        assert_eq!(Branch::Sa.ten_god_polarity(), Polarity::Yang);
    }

    #[test]
    fn hangul_parses_through_from_str() {
        assert_eq!(Branch::from_char('신'), None);
        assert_eq!("신".parse::<Branch>(), Ok(Branch::Sin));
        assert_eq!(Branch::from_char('申'), Some(Branch::Sin));
    }
}
