//! Local civil birth instants.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::TimeError;

/// A validated local civil date/time at minute precision.
///
/// Birth data is recorded as wall-clock time in the local zone; no UTC
/// offset is carried. Historical DST is handled by [`crate::dst`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BirthInstant {
    at: NaiveDateTime,
}

impl BirthInstant {
    /// Build from calendar fields, rejecting impossible dates and times.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self, TimeError> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            TimeError::InvalidDateTime(format!("{year:04}-{month:02}-{day:02} is not a date"))
        })?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
            TimeError::InvalidDateTime(format!("{hour:02}:{minute:02} is not a time of day"))
        })?;
        Ok(Self {
            at: NaiveDateTime::new(date, time),
        })
    }

    /// Wrap an existing chrono value, truncating seconds.
    pub fn from_naive(at: NaiveDateTime) -> Self {
        let at = at.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(at);
        Self { at }
    }

    pub fn naive(&self) -> NaiveDateTime {
        self.at
    }

    pub fn date(&self) -> NaiveDate {
        self.at.date()
    }

    pub fn year(&self) -> i32 {
        self.at.year()
    }

    pub fn month(&self) -> u32 {
        self.at.month()
    }

    pub fn day(&self) -> u32 {
        self.at.day()
    }

    pub fn hour(&self) -> u32 {
        self.at.hour()
    }

    pub fn minute(&self) -> u32 {
        self.at.minute()
    }
}

impl FromStr for BirthInstant {
    type Err = TimeError;

    /// Accepts `YYYY-MM-DD HH:MM` or `YYYY-MM-DDTHH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
            .map(Self::from_naive)
            .map_err(|e| TimeError::InvalidDateTime(format!("{s:?}: {e}")))
    }
}

impl std::fmt::Display for BirthInstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.at.format("%Y-%m-%d %H:%M"))
    }
}

impl serde::Serialize for BirthInstant {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_fields() {
        let b = BirthInstant::new(2000, 9, 22, 16, 0).unwrap();
        assert_eq!(b.year(), 2000);
        assert_eq!(b.hour(), 16);
        assert_eq!(b.to_string(), "2000-09-22 16:00");
    }

    #[test]
    fn february_30_rejected() {
        assert!(matches!(
            BirthInstant::new(2023, 2, 30, 0, 0),
            Err(TimeError::InvalidDateTime(_))
        ));
    }

    #[test]
    fn hour_24_rejected() {
        assert!(BirthInstant::new(2023, 1, 1, 24, 0).is_err());
        assert!(BirthInstant::new(2023, 1, 1, 10, 60).is_err());
    }

    #[test]
    fn parse_both_separators() {
        let a: BirthInstant = "1990-05-15 14:30".parse().unwrap();
        let b: BirthInstant = "1990-05-15T14:30".parse().unwrap();
        assert_eq!(a, b);
        assert!("1990/05/15 14:30".parse::<BirthInstant>().is_err());
    }
}
