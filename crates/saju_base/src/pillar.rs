//! Pillars, the 60-term sexagenary cycle, and chart positions.

use std::str::FromStr;

use serde::Serialize;

use crate::branch::Branch;
use crate::element::{Element, Polarity};
use crate::error::BaseError;
use crate::stem::Stem;

/// Length of the sexagenary cycle.
pub const CYCLE_LEN: u8 = 60;

/// One of the four chart pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// The four positions in scan order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    pub const fn index(self) -> u8 {
        match self {
            Self::Year => 0,
            Self::Month => 1,
            Self::Day => 2,
            Self::Hour => 3,
        }
    }

    pub const fn from_index(i: u8) -> Self {
        ALL_POSITIONS[(i % 4) as usize]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }

    /// Korean label (년주, 월주, 일주, 시주).
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Year => "년주",
            Self::Month => "월주",
            Self::Day => "일주",
            Self::Hour => "시주",
        }
    }
}

impl Serialize for PillarPosition {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Upper (stem) or lower (branch) half of a pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Stem,
    Branch,
}

/// A single character cell of the chart: one of 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub pillar: PillarPosition,
    pub layer: Layer,
}

/// The seven cells other than the day stem, in weighting order.
pub const NON_DAY_SLOTS: [Slot; 7] = [
    Slot::stem(PillarPosition::Year),
    Slot::branch(PillarPosition::Year),
    Slot::stem(PillarPosition::Month),
    Slot::branch(PillarPosition::Month),
    Slot::branch(PillarPosition::Day),
    Slot::stem(PillarPosition::Hour),
    Slot::branch(PillarPosition::Hour),
];

impl Slot {
    pub const fn stem(pillar: PillarPosition) -> Self {
        Self {
            pillar,
            layer: Layer::Stem,
        }
    }

    pub const fn branch(pillar: PillarPosition) -> Self {
        Self {
            pillar,
            layer: Layer::Branch,
        }
    }

    /// snake_case label such as `month_branch`.
    pub const fn name(self) -> &'static str {
        match (self.pillar, self.layer) {
            (PillarPosition::Year, Layer::Stem) => "year_stem",
            (PillarPosition::Year, Layer::Branch) => "year_branch",
            (PillarPosition::Month, Layer::Stem) => "month_stem",
            (PillarPosition::Month, Layer::Branch) => "month_branch",
            (PillarPosition::Day, Layer::Stem) => "day_stem",
            (PillarPosition::Day, Layer::Branch) => "day_branch",
            (PillarPosition::Hour, Layer::Stem) => "hour_stem",
            (PillarPosition::Hour, Layer::Branch) => "hour_branch",
        }
    }

    /// Korean label such as 월지.
    pub const fn korean(self) -> &'static str {
        match (self.pillar, self.layer) {
            (PillarPosition::Year, Layer::Stem) => "년간",
            (PillarPosition::Year, Layer::Branch) => "년지",
            (PillarPosition::Month, Layer::Stem) => "월간",
            (PillarPosition::Month, Layer::Branch) => "월지",
            (PillarPosition::Day, Layer::Stem) => "일간",
            (PillarPosition::Day, Layer::Branch) => "일지",
            (PillarPosition::Hour, Layer::Stem) => "시간",
            (PillarPosition::Hour, Layer::Branch) => "시지",
        }
    }
}

impl Serialize for Slot {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A chart character: either a stem or a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Stem(Stem),
    Branch(Branch),
}

impl Glyph {
    pub const fn element(self) -> Element {
        match self {
            Self::Stem(s) => s.element(),
            Self::Branch(b) => b.element(),
        }
    }

    /// Polarity as seen by the ten-god classifier.
    pub const fn ten_god_polarity(self) -> Polarity {
        match self {
            Self::Stem(s) => s.polarity(),
            Self::Branch(b) => b.ten_god_polarity(),
        }
    }

    pub const fn hanja(self) -> char {
        match self {
            Self::Stem(s) => s.hanja(),
            Self::Branch(b) => b.hanja(),
        }
    }

    /// Resolve a Hanja character against stems first, then branches.
    pub fn from_char(c: char) -> Option<Self> {
        Stem::from_char(c)
            .map(Self::Stem)
            .or_else(|| Branch::from_char(c).map(Self::Branch))
    }
}

impl From<Stem> for Glyph {
    fn from(s: Stem) -> Self {
        Self::Stem(s)
    }
}

impl From<Branch> for Glyph {
    fn from(b: Branch) -> Self {
        Self::Branch(b)
    }
}

impl std::fmt::Display for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hanja())
    }
}

impl Serialize for Glyph {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A (stem, branch) pair from the 60-term cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    /// Pair a stem and branch; `None` when their parities differ, since
    /// such a pair never occurs in the cycle.
    pub const fn new(stem: Stem, branch: Branch) -> Option<Self> {
        if stem.index() % 2 == branch.index() % 2 {
            Some(Self { stem, branch })
        } else {
            None
        }
    }

    /// Pillar at position `i` mod 60 (0 = 甲子).
    pub const fn from_cycle_index(i: u8) -> Self {
        let i = i % CYCLE_LEN;
        Self {
            stem: Stem::from_index(i % 10),
            branch: Branch::from_index(i % 12),
        }
    }

    /// Position in the 60-cycle, recovered from the stem and branch indices.
    pub const fn cycle_index(self) -> u8 {
        let s = self.stem.index() as i16;
        let b = self.branch.index() as i16;
        (6 * s - 5 * b).rem_euclid(CYCLE_LEN as i16) as u8
    }

    /// Step `delta` places along the cycle, wrapping in both directions.
    pub fn offset(self, delta: i64) -> Self {
        let i = (self.cycle_index() as i64 + delta).rem_euclid(CYCLE_LEN as i64);
        Self::from_cycle_index(i as u8)
    }

    /// Hangul reading, e.g. 경진.
    pub fn hangul(self) -> String {
        format!("{}{}", self.stem.hangul(), self.branch.hangul())
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl FromStr for Pillar {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        let [sc, bc] = chars[..] else {
            return Err(BaseError::InvalidInput("pillar must be two characters"));
        };
        let stem = Stem::from_char(sc).ok_or(BaseError::UnknownCharacter(sc))?;
        let branch = Branch::from_char(bc).ok_or(BaseError::UnknownCharacter(bc))?;
        Self::new(stem, branch).ok_or(BaseError::InvalidInput(
            "stem and branch polarity differ",
        ))
    }
}

/// Year, month, day, and hour pillars of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    pub const fn new(year: Pillar, month: Pillar, day: Pillar, hour: Pillar) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    pub const fn pillar(&self, pos: PillarPosition) -> Pillar {
        match pos {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    pub const fn glyph(&self, slot: Slot) -> Glyph {
        let p = self.pillar(slot.pillar);
        match slot.layer {
            Layer::Stem => Glyph::Stem(p.stem),
            Layer::Branch => Glyph::Branch(p.branch),
        }
    }

    /// The chart's reference stem (일간).
    pub const fn day_stem(&self) -> Stem {
        self.day.stem
    }

    /// Stems in position order.
    pub const fn stems(&self) -> [Stem; 4] {
        [self.year.stem, self.month.stem, self.day.stem, self.hour.stem]
    }

    /// Branches in position order.
    pub const fn branches(&self) -> [Branch; 4] {
        [
            self.year.branch,
            self.month.branch,
            self.day.branch,
            self.hour.branch,
        ]
    }

    /// `(position, pillar)` in position order.
    pub fn iter(&self) -> impl Iterator<Item = (PillarPosition, Pillar)> + '_ {
        ALL_POSITIONS.iter().map(|&p| (p, self.pillar(p)))
    }
}

impl std::fmt::Display for FourPillars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

impl FromStr for FourPillars {
    type Err = BaseError;

    /// Parses four whitespace-separated pillars, year first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split_whitespace()
            .map(Pillar::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        let [year, month, day, hour] = parts[..] else {
            return Err(BaseError::InvalidInput("expected four pillars"));
        };
        Ok(Self::new(year, month, day, hour))
    }
}
