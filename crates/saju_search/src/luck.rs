//! Luck pillars (대운) and annual pillars (세운).
//!
//! The decade sequence walks the 60-cycle from the month pillar, forward or
//! backward by the year stem's polarity and gender. The starting age is the
//! day distance to the adjacent month-opening term divided by three.

use std::ops::RangeInclusive;

use saju_base::{FourPillars, Glyph, Pillar, Stem, TenGod, ten_god};
use saju_time::{BirthInstant, SolarTermIndex, TermBoundary, days_between};
use serde::Serialize;

use crate::error::SearchError;
use crate::input::Gender;
use crate::pillars::year_cycle_pillar;

/// Default number of decade pillars.
pub const DEFAULT_LUCK_PILLAR_COUNT: u8 = 10;
/// Upper bound on the decade count.
pub const MAX_LUCK_PILLAR_COUNT: u8 = 12;
/// Years covered by one luck pillar.
pub const LUCK_PERIOD_YEARS: u32 = 10;
/// Days of distance per year of starting age.
pub const DAYS_PER_LUCK_YEAR: f64 = 3.0;
/// Earliest civil year accepted for annual pillars.
pub const MIN_ANNUAL_YEAR: i32 = 1;
/// Latest civil year accepted for annual pillars.
pub const MAX_ANNUAL_YEAR: i32 = 9999;
/// Longest annual run returned in one call.
pub const MAX_ANNUAL_SPAN: u32 = 200;

/// Direction the decade sequence walks the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LuckDirection {
    Forward,
    Backward,
}

impl LuckDirection {
    /// Forward for a yang year with a male, or a yin year with a female.
    pub const fn of(year_stem: Stem, gender: Gender) -> Self {
        let yang = year_stem.polarity().is_yang();
        match (yang, gender) {
            (true, Gender::Male) | (false, Gender::Female) => Self::Forward,
            _ => Self::Backward,
        }
    }

    pub const fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Starting age from the day distance to the reference term.
///
/// Rounds half to even, then floors at 1.
pub fn starting_age(days: f64) -> u32 {
    let age = (days.abs() / DAYS_PER_LUCK_YEAR).round_ties_even();
    (age as u32).max(1)
}

/// Term that fixes the starting age: next primary term strictly after birth
/// going forward, latest at or before birth going backward.
pub fn reference_term(
    index: &SolarTermIndex,
    birth: BirthInstant,
    direction: LuckDirection,
) -> Result<TermBoundary, SearchError> {
    match direction {
        LuckDirection::Forward => index.next_primary(birth).ok_or(
            SearchError::ReferenceDataMissing("no month-opening term after birth"),
        ),
        LuckDirection::Backward => index.latest_primary(birth).ok_or(
            SearchError::ReferenceDataMissing("no month-opening term at or before birth"),
        ),
    }
}

/// One decade pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LuckPillar {
    /// 1-based position in the sequence.
    pub order: u8,
    /// Age at which this pillar takes over.
    pub age: u32,
    pub pillar: Pillar,
    pub stem_ten_god: TenGod,
    pub branch_ten_god: TenGod,
}

impl LuckPillar {
    /// Whether `age` falls inside this pillar's decade.
    pub fn covers(&self, age: u32) -> bool {
        age >= self.age && age < self.age + LUCK_PERIOD_YEARS
    }
}

/// The decade sequence with its anchor data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LuckPillars {
    pub direction: LuckDirection,
    pub start_age: u32,
    /// Term used for the starting age.
    pub reference_term: TermBoundary,
    /// Absolute distance from birth to the reference term in days.
    pub days_to_term: f64,
    pub pillars: Vec<LuckPillar>,
}

impl LuckPillars {
    /// Pillar in force at `age`; `None` before the first one starts or
    /// after the last one ends.
    pub fn active_at(&self, age: u32) -> Option<&LuckPillar> {
        self.pillars.iter().find(|p| p.covers(age))
    }

    pub fn len(&self) -> usize {
        self.pillars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pillars.is_empty()
    }
}

/// Build `count` decade pillars for a natal chart.
pub fn luck_pillars(
    index: &SolarTermIndex,
    birth: BirthInstant,
    natal: &FourPillars,
    gender: Gender,
    count: u8,
) -> Result<LuckPillars, SearchError> {
    if count == 0 || count > MAX_LUCK_PILLAR_COUNT {
        return Err(SearchError::InvalidInput("luck pillar count must be 1..=12"));
    }
    let direction = LuckDirection::of(natal.year.stem, gender);
    let term = reference_term(index, birth, direction)?;
    let days = days_between(birth.naive(), term.at).abs();
    let start_age = starting_age(days);
    let day = natal.day_stem();

    let pillars = (1..=count)
        .map(|order| {
            let pillar = natal.month.offset(direction.step() * i64::from(order));
            LuckPillar {
                order,
                age: start_age + LUCK_PERIOD_YEARS * u32::from(order - 1),
                pillar,
                stem_ten_god: ten_god(day, Glyph::Stem(pillar.stem)),
                branch_ten_god: ten_god(day, Glyph::Branch(pillar.branch)),
            }
        })
        .collect();

    tracing::debug!(
        ?direction,
        start_age,
        days,
        term = %term.term,
        "derived luck pillars"
    );
    Ok(LuckPillars {
        direction,
        start_age,
        reference_term: term,
        days_to_term: days,
        pillars,
    })
}

/// One civil-year pillar with its ten gods against a day stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnnualPillar {
    pub year: i32,
    pub pillar: Pillar,
    pub stem_ten_god: TenGod,
    pub branch_ten_god: TenGod,
}

/// Pillar of a civil year (1900 = 庚子), without 입춘 adjustment.
pub fn annual_pillar(year: i32, day_stem: Stem) -> AnnualPillar {
    let pillar = year_cycle_pillar(year);
    AnnualPillar {
        year,
        pillar,
        stem_ten_god: ten_god(day_stem, Glyph::Stem(pillar.stem)),
        branch_ten_god: ten_god(day_stem, Glyph::Branch(pillar.branch)),
    }
}

/// Annual pillars for every year in `years`.
///
/// The range must be non-empty, lie within
/// [`MIN_ANNUAL_YEAR`]..=[`MAX_ANNUAL_YEAR`], and cover at most
/// [`MAX_ANNUAL_SPAN`] years.
pub fn annual_pillars(
    years: RangeInclusive<i32>,
    day_stem: Stem,
) -> Result<Vec<AnnualPillar>, SearchError> {
    let (first, last) = (*years.start(), *years.end());
    if first > last {
        return Err(SearchError::InvalidInput("annual range ends before it starts"));
    }
    if first < MIN_ANNUAL_YEAR || last > MAX_ANNUAL_YEAR {
        return Err(SearchError::InvalidInput("annual years must lie within 1..=9999"));
    }
    if i64::from(last) - i64::from(first) >= i64::from(MAX_ANNUAL_SPAN) {
        return Err(SearchError::InvalidInput("annual range longer than 200 years"));
    }
    Ok(years.map(|y| annual_pillar(y, day_stem)).collect())
}
