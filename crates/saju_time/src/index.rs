//! Solar Term Index: sorted solar-term boundaries loaded from JSON.
//!
//! The persisted format is a single JSON object mapping a local timestamp
//! `"YYYY-MM-DD HH:MM"` to a solar-term name:
//!
//! ```json
//! { "2024-02-04 17:27": "입춘", "2024-02-19 13:13": "우수" }
//! ```
//!
//! Term names may be Korean, Hanja, or snake_case English. Boundaries are
//! kept sorted by timestamp, and timestamps are strictly increasing after
//! load. Lookups never extrapolate: outside the loaded range they return
//! `None` and callers decide how to report missing reference data.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::TimeError;
use crate::instant::BirthInstant;
use crate::solar_term::SolarTerm;

/// Timestamp format of index keys.
pub const INDEX_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One solar-term boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TermBoundary {
    /// Local wall-clock instant the term begins.
    #[serde(serialize_with = "serialize_stamp")]
    pub at: NaiveDateTime,
    pub term: SolarTerm,
}

fn serialize_stamp<S: serde::Serializer>(at: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&at.format(INDEX_TIMESTAMP_FORMAT))
}

/// Immutable, sorted collection of solar-term boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarTermIndex {
    boundaries: Vec<TermBoundary>,
}

impl SolarTermIndex {
    /// Load an index file from a path.
    pub fn load(path: &Path) -> Result<Self, TimeError> {
        let content = std::fs::read_to_string(path)?;
        let index = Self::parse(&content)?;
        let (first, last) = index.range();
        tracing::info!(
            path = %path.display(),
            terms = index.len(),
            first = %first.format(INDEX_TIMESTAMP_FORMAT),
            last = %last.format(INDEX_TIMESTAMP_FORMAT),
            "loaded solar-term index"
        );
        Ok(index)
    }

    /// Parse an index from its JSON text.
    pub fn parse(content: &str) -> Result<Self, TimeError> {
        let raw: BTreeMap<String, String> = serde_json::from_str(content)?;
        let boundaries = raw
            .iter()
            .map(|(stamp, name)| {
                let at = NaiveDateTime::parse_from_str(stamp.trim(), INDEX_TIMESTAMP_FORMAT)
                    .map_err(|e| TimeError::IndexParse(format!("bad timestamp {stamp:?}: {e}")))?;
                let term =
                    SolarTerm::from_name(name).ok_or_else(|| TimeError::UnknownTerm(name.clone()))?;
                Ok(TermBoundary { at, term })
            })
            .collect::<Result<Vec<_>, TimeError>>()?;
        Self::from_boundaries(boundaries)
    }

    /// Build from boundaries in any order.
    pub fn from_boundaries(mut boundaries: Vec<TermBoundary>) -> Result<Self, TimeError> {
        if boundaries.is_empty() {
            return Err(TimeError::EmptyIndex);
        }
        boundaries.sort_by_key(|b| b.at);
        if let Some(pair) = boundaries.windows(2).find(|w| w[0].at == w[1].at) {
            return Err(TimeError::DuplicateTimestamp(
                pair[0].at.format(INDEX_TIMESTAMP_FORMAT).to_string(),
            ));
        }
        Ok(Self { boundaries })
    }

    /// Number of boundaries.
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    /// Always false once constructed; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// First and last boundary instants.
    pub fn range(&self) -> (NaiveDateTime, NaiveDateTime) {
        (
            self.boundaries[0].at,
            self.boundaries[self.boundaries.len() - 1].at,
        )
    }

    /// All boundaries in timestamp order.
    pub fn boundaries(&self) -> &[TermBoundary] {
        &self.boundaries
    }

    /// Most recent boundary at or before `instant` whose term satisfies `accept`.
    pub fn latest_at_or_before(
        &self,
        instant: BirthInstant,
        accept: impl Fn(SolarTerm) -> bool,
    ) -> Option<TermBoundary> {
        let at = instant.naive();
        let end = self.boundaries.partition_point(|b| b.at <= at);
        self.boundaries[..end]
            .iter()
            .rev()
            .find(|b| accept(b.term))
            .copied()
    }

    /// First boundary strictly after `instant` whose term satisfies `accept`.
    pub fn next_after(
        &self,
        instant: BirthInstant,
        accept: impl Fn(SolarTerm) -> bool,
    ) -> Option<TermBoundary> {
        let at = instant.naive();
        let start = self.boundaries.partition_point(|b| b.at <= at);
        self.boundaries[start..]
            .iter()
            .find(|b| accept(b.term))
            .copied()
    }

    /// Most recent occurrence of a specific term at or before `instant`.
    pub fn latest_of(&self, term: SolarTerm, instant: BirthInstant) -> Option<TermBoundary> {
        self.latest_at_or_before(instant, |t| t == term)
    }

    /// Most recent month-opening term at or before `instant`.
    pub fn latest_primary(&self, instant: BirthInstant) -> Option<TermBoundary> {
        self.latest_at_or_before(instant, SolarTerm::is_primary)
    }

    /// Next month-opening term strictly after `instant`.
    pub fn next_primary(&self, instant: BirthInstant) -> Option<TermBoundary> {
        self.next_after(instant, SolarTerm::is_primary)
    }
}
