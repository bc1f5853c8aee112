//! Integration tests for the sample solar-term index (data/solar_terms_sample.json).

use std::path::PathBuf;

use proptest::prelude::*;
use saju_time::{BirthInstant, SolarTerm, SolarTermIndex, TimeError, days_between};

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/solar_terms_sample.json")
}

fn load_sample() -> Option<SolarTermIndex> {
    let path = sample_path();
    if !path.exists() {
        eprintln!("Skipping: solar_terms_sample.json not found");
        return None;
    }
    Some(SolarTermIndex::load(&path).expect("sample index should parse"))
}

#[test]
fn timestamps_strictly_increasing() {
    let Some(idx) = load_sample() else { return };
    for w in idx.boundaries().windows(2) {
        assert!(w[0].at < w[1].at);
    }
}

#[test]
fn primary_terms_cycle_in_order() {
    let Some(idx) = load_sample() else { return };
    let primaries: Vec<_> = idx
        .boundaries()
        .iter()
        .filter(|b| b.term.is_primary())
        .collect();
    for w in primaries.windows(2) {
        let a = w[0].term.month_ordinal().unwrap();
        let b = w[1].term.month_ordinal().unwrap();
        // Consecutive within a covered year, or a jump across an uncovered gap.
        if (a + 1) % 12 != b {
            assert!(days_between(w[0].at, w[1].at) > 40.0);
        }
    }
}

#[test]
fn white_dew_2000() {
    let Some(idx) = load_sample() else { return };
    let birth: BirthInstant = "2000-09-22 16:00".parse().unwrap();
    let latest = idx.latest_primary(birth).unwrap();
    assert_eq!(latest.term, SolarTerm::WhiteDew);
    let next = idx.next_primary(birth).unwrap();
    assert_eq!(next.term, SolarTerm::ColdDew);
    let any_next = idx.next_after(birth, |_| true).unwrap();
    assert_eq!(any_next.term, SolarTerm::AutumnEquinox);
}

#[test]
fn missing_file_is_io_error() {
    let err = SolarTermIndex::load(&sample_path().with_file_name("nope.json")).unwrap_err();
    assert!(matches!(err, TimeError::Io(_)));
}

proptest! {
    #[test]
    fn latest_never_after_instant(day in 0i64..700, minute in 0i64..1440) {
        let Some(idx) = load_sample() else { return Ok(()) };
        let base: BirthInstant = "2023-02-01 00:00".parse().unwrap();
        let at = base.naive() + chrono::Duration::days(day) + chrono::Duration::minutes(minute);
        let birth = BirthInstant::from_naive(at);
        if let Some(b) = idx.latest_primary(birth) {
            prop_assert!(b.at <= at);
            if let Some(n) = idx.next_primary(birth) {
                prop_assert!(n.at > at);
                prop_assert!(b.at < n.at);
            }
        }
    }
}
