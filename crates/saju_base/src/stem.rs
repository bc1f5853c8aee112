//! Heavenly stems (천간): the 10-symbol cycle.

use std::str::FromStr;

use crate::element::{Element, Polarity};
use crate::error::BaseError;

/// One of the 10 heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in cycle order (index 0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

const HANJA: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];
const HANGUL: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];

impl Stem {
    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Gap => 0,
            Self::Eul => 1,
            Self::Byeong => 2,
            Self::Jeong => 3,
            Self::Mu => 4,
            Self::Gi => 5,
            Self::Gyeong => 6,
            Self::Sin => 7,
            Self::Im => 8,
            Self::Gye => 9,
        }
    }

    /// Stem at `i` mod 10.
    pub const fn from_index(i: u8) -> Self {
        ALL_STEMS[(i % 10) as usize]
    }

    pub const fn hanja(self) -> char {
        HANJA[self.index() as usize]
    }

    pub const fn hangul(self) -> &'static str {
        HANGUL[self.index() as usize]
    }

    /// Pairs of consecutive stems share an element (甲乙 wood .. 壬癸 water).
    pub const fn element(self) -> Element {
        Element::from_index(self.index() / 2)
    }

    /// Even-indexed stems are yang.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Look up a Hanja stem character.
    pub fn from_char(c: char) -> Option<Self> {
        ALL_STEMS.iter().copied().find(|s| s.hanja() == c)
    }

    /// Look up a Hangul reading.
    pub fn from_hangul(name: &str) -> Option<Self> {
        ALL_STEMS.iter().copied().find(|s| s.hangul() == name)
    }

    pub const fn all() -> &'static [Stem; 10] {
        &ALL_STEMS
    }
}

impl std::fmt::Display for Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hanja())
    }
}

impl FromStr for Stem {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c)
                .or_else(|| Self::from_hangul(s.trim()))
                .ok_or(BaseError::UnknownCharacter(c)),
            _ => Err(BaseError::InvalidInput("stem must be a single character")),
        }
    }
}

impl serde::Serialize for Stem {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elements_by_pair() {
        assert_eq!(Stem::Gap.element(), Element::Wood);
        assert_eq!(Stem::Jeong.element(), Element::Fire);
        assert_eq!(Stem::Gi.element(), Element::Earth);
        assert_eq!(Stem::Gyeong.element(), Element::Metal);
        assert_eq!(Stem::Gye.element(), Element::Water);
    }

    #[test]
    fn yang_stems() {
        let yang: String = ALL_STEMS
            .iter()
            .filter(|s| s.polarity().is_yang())
            .map(|s| s.hanja())
            .collect();
        assert_eq!(yang, "甲丙戊庚壬");
    }

    #[test]
    fn char_lookup() {
        assert_eq!(Stem::from_char('癸'), Some(Stem::Gye));
        assert_eq!(Stem::from_char('경'), None);
        assert_eq!("경".parse::<Stem>(), Ok(Stem::Gyeong));
        assert_eq!(Stem::from_char('子'), None);
        assert_eq!("庚".parse::<Stem>(), Ok(Stem::Gyeong));
        assert_eq!("x".parse::<Stem>(), Err(BaseError::UnknownCharacter('x')));
    }

    #[test]
    fn index_wraps() {
        assert_eq!(Stem::from_index(12), Stem::Byeong);
    }
}
