//! Historical Korean daylight-saving windows.
//!
//! Clocks ran one hour ahead inside each window. Start is inclusive, end is
//! exclusive, both in local wall-clock time.

use chrono::{Datelike, NaiveDateTime, Timelike};

/// A wall-clock reading compared field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilStamp {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl CivilStamp {
    pub const fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    pub fn of(at: NaiveDateTime) -> Self {
        Self::new(at.year(), at.month(), at.day(), at.hour(), at.minute())
    }
}

/// One DST period `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DstWindow {
    pub start: CivilStamp,
    pub end: CivilStamp,
}

impl DstWindow {
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        let s = CivilStamp::of(at);
        self.start <= s && s < self.end
    }
}

/// Korean DST periods of 1948-1951 and 1987-1988.
pub const KOREAN_DST_WINDOWS: [DstWindow; 6] = [
    DstWindow {
        start: CivilStamp::new(1948, 6, 1, 0, 0),
        end: CivilStamp::new(1948, 9, 13, 0, 0),
    },
    DstWindow {
        start: CivilStamp::new(1949, 4, 1, 0, 0),
        end: CivilStamp::new(1949, 9, 11, 0, 0),
    },
    DstWindow {
        start: CivilStamp::new(1950, 4, 1, 0, 0),
        end: CivilStamp::new(1950, 9, 11, 0, 0),
    },
    DstWindow {
        start: CivilStamp::new(1951, 5, 6, 0, 0),
        end: CivilStamp::new(1951, 9, 9, 0, 0),
    },
    DstWindow {
        start: CivilStamp::new(1987, 5, 10, 2, 0),
        end: CivilStamp::new(1987, 10, 11, 3, 0),
    },
    DstWindow {
        start: CivilStamp::new(1988, 5, 8, 2, 0),
        end: CivilStamp::new(1988, 10, 9, 3, 0),
    },
];

/// Whether a wall-clock reading falls inside any historical DST window.
pub fn in_dst(at: NaiveDateTime) -> bool {
    KOREAN_DST_WINDOWS.iter().any(|w| w.contains(at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn windows_are_ordered() {
        for w in KOREAN_DST_WINDOWS {
            assert!(w.start < w.end);
        }
    }

    #[test]
    fn start_inclusive_end_exclusive() {
        assert!(in_dst(at(1987, 5, 10, 2, 0)));
        assert!(!in_dst(at(1987, 5, 10, 1, 59)));
        assert!(in_dst(at(1987, 10, 11, 2, 59)));
        assert!(!in_dst(at(1987, 10, 11, 3, 0)));
    }

    #[test]
    fn outside_all_windows() {
        assert!(!in_dst(at(1990, 7, 1, 12, 0)));
        assert!(!in_dst(at(1948, 9, 13, 0, 0)));
        assert!(in_dst(at(1950, 6, 15, 9, 30)));
    }
}
