//! Pillar calculator: birth instant → four pillars.
//!
//! Year and month pillars come from solar-term boundaries in the index.
//! The day pillar is pure calendar arithmetic from a fixed epoch, and the
//! hour pillar buckets a corrected wall-clock hour into twelve slots.

use chrono::{Datelike, Duration, Timelike};
use saju_base::{Branch, CYCLE_LEN, FourPillars, Pillar, Stem};
use saju_time::{BirthInstant, SolarTerm, SolarTermIndex, in_dst};

use crate::error::SearchError;

/// Calendar year whose 입춘 opens a known cycle position.
pub const YEAR_EPOCH: i32 = 1900;
/// Cycle index of [`YEAR_EPOCH`] (庚子).
pub const YEAR_EPOCH_INDEX: i64 = 36;
/// Days-from-CE ordinal of 2024-01-01, a 甲子 day.
pub const DAY_EPOCH_ORDINAL: i32 = 738_886;
/// Minutes subtracted before hour bucketing.
pub const HOUR_OFFSET_MINUTES: i64 = 30;
/// Wall-clock minute from which the day pillar rolls over (23:30).
pub const DAY_ROLLOVER: (u32, u32) = (23, 30);

/// Cycle position of a sexagenary year.
///
/// Also used for annual pillars, which follow the civil year directly.
pub fn year_cycle_pillar(year: i32) -> Pillar {
    let i = (YEAR_EPOCH_INDEX + i64::from(year) - i64::from(YEAR_EPOCH))
        .rem_euclid(i64::from(CYCLE_LEN));
    Pillar::from_cycle_index(i as u8)
}

/// Year pillar: the year of the latest 입춘 at or before birth.
pub fn year_pillar(index: &SolarTermIndex, birth: BirthInstant) -> Result<Pillar, SearchError> {
    let spring = index
        .latest_of(SolarTerm::StartOfSpring, birth)
        .ok_or(SearchError::ReferenceDataMissing(
            "no start-of-spring boundary at or before birth",
        ))?;
    Ok(year_cycle_pillar(spring.at.year()))
}

/// Stem of the first solar month (寅) for a year stem.
pub const fn month_start_stem(year_stem: Stem) -> Stem {
    match year_stem {
        Stem::Gap | Stem::Gi => Stem::Byeong,
        Stem::Eul | Stem::Gyeong => Stem::Mu,
        Stem::Byeong | Stem::Sin => Stem::Gyeong,
        Stem::Jeong | Stem::Im => Stem::Im,
        Stem::Mu | Stem::Gye => Stem::Gap,
    }
}

/// Stem of the first hour slot (子) for a day stem.
pub const fn hour_start_stem(day_stem: Stem) -> Stem {
    match day_stem {
        Stem::Gap | Stem::Gi => Stem::Gap,
        Stem::Eul | Stem::Gyeong => Stem::Byeong,
        Stem::Byeong | Stem::Sin => Stem::Mu,
        Stem::Jeong | Stem::Im => Stem::Gyeong,
        Stem::Mu | Stem::Gye => Stem::Im,
    }
}

/// Step a start stem and a start branch together by `offset`.
///
/// Start stems are always yang and start branches (子, 寅) always yang,
/// so the result stays in the cycle.
const fn stepped(start_stem: Stem, start_branch: Branch, offset: u8) -> Pillar {
    Pillar {
        stem: Stem::from_index(start_stem.index() + offset),
        branch: Branch::from_index(start_branch.index() + offset),
    }
}

/// Month pillar from the latest primary term at or before birth.
pub fn month_pillar(
    index: &SolarTermIndex,
    birth: BirthInstant,
    year_stem: Stem,
) -> Result<Pillar, SearchError> {
    let boundary = index
        .latest_primary(birth)
        .ok_or(SearchError::ReferenceDataMissing(
            "no month-opening term at or before birth",
        ))?;
    let offset = boundary
        .term
        .month_ordinal()
        .ok_or(SearchError::ReferenceDataMissing(
            "month boundary is not a primary term",
        ))?;
    Ok(stepped(month_start_stem(year_stem), Branch::In, offset))
}

/// Day pillar, rolling over to the next date from 23:30.
pub fn day_pillar(birth: BirthInstant) -> Result<Pillar, SearchError> {
    let mut date = birth.date();
    if (birth.hour(), birth.minute()) >= DAY_ROLLOVER {
        date = date
            .succ_opt()
            .ok_or(SearchError::InvalidInput("birth date at end of calendar range"))?;
    }
    let days = i64::from(date.num_days_from_ce() - DAY_EPOCH_ORDINAL);
    Ok(Pillar::from_cycle_index(
        days.rem_euclid(CYCLE_LEN as i64) as u8,
    ))
}

/// Hour slot (0 = 子 .. 11 = 亥) after DST and the fixed 30-minute offset.
pub fn hour_slot(birth: BirthInstant) -> u8 {
    let mut at = birth.naive();
    if in_dst(at) {
        at -= Duration::hours(1);
    }
    at -= Duration::minutes(HOUR_OFFSET_MINUTES);
    (((at.hour() + 1) % 24) / 2) as u8
}

/// Hour pillar for a birth on a day with the given stem.
pub fn hour_pillar(birth: BirthInstant, day_stem: Stem) -> Pillar {
    stepped(hour_start_stem(day_stem), Branch::Ja, hour_slot(birth))
}

/// All four pillars of a birth instant.
pub fn four_pillars(
    index: &SolarTermIndex,
    birth: BirthInstant,
) -> Result<FourPillars, SearchError> {
    let year = year_pillar(index, birth)?;
    let month = month_pillar(index, birth, year.stem)?;
    let day = day_pillar(birth)?;
    let hour = hour_pillar(birth, day.stem);
    tracing::debug!(%birth, %year, %month, %day, %hour, "derived pillars");
    Ok(FourPillars::new(year, month, day, hour))
}
