//! Harmony transformation (합화): recompute the element tally after
//! accepted harmonies.
//!
//! For each event in detection order, every participant whose element
//! differs from the event's element gives up one count (if it has one),
//! and the event's element gains the total given up. Counts never go
//! negative and the tally total is conserved. Partial harmonies and
//! clashes never transform.

use serde::Serialize;

use crate::element::Element;
use crate::harmony::{HarmonyEvent, HarmonyKind, HarmonyReport};
use crate::pillar::PillarPosition;
use crate::tally::ElementTally;

/// What one harmony did to the tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedTransformation {
    pub kind: HarmonyKind,
    pub positions: Vec<PillarPosition>,
    pub element: Element,
    /// Participant elements that gave up a count.
    pub absorbed: Vec<Element>,
    /// Participant elements already at zero, left untouched.
    pub skipped: Vec<Element>,
}

impl AppliedTransformation {
    pub fn gained(&self) -> u32 {
        self.absorbed.len() as u32
    }
}

/// Tallies before and after transformation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformationResult {
    pub before: ElementTally,
    pub after: ElementTally,
    pub applied: Vec<AppliedTransformation>,
}

/// Apply `events` in order to `tally`.
pub fn transform<'a>(
    tally: ElementTally,
    events: impl IntoIterator<Item = &'a HarmonyEvent>,
) -> TransformationResult {
    let before = tally;
    let mut after = tally;
    let mut applied = Vec::new();

    for event in events {
        if !event.kind.transforms() {
            continue;
        }
        let mut absorbed = Vec::new();
        let mut skipped = Vec::new();
        for glyph in &event.glyphs {
            let e = glyph.element();
            if e == event.element {
                continue;
            }
            if after.take_one(e) {
                absorbed.push(e);
            } else {
                tracing::warn!(
                    element = e.name(),
                    target = event.element.name(),
                    "transformation skipped: element count already zero"
                );
                skipped.push(e);
            }
        }
        after.add(event.element, absorbed.len() as u32);
        tracing::debug!(
            kind = ?event.kind,
            element = event.element.name(),
            gained = absorbed.len(),
            "harmony transformed"
        );
        applied.push(AppliedTransformation {
            kind: event.kind,
            positions: event.positions.clone(),
            element: event.element,
            absorbed,
            skipped,
        });
    }

    TransformationResult {
        before,
        after,
        applied,
    }
}

/// Transform a chart tally with the transforming events of a report.
pub fn transform_report(tally: ElementTally, report: &HarmonyReport) -> TransformationResult {
    transform(tally, report.transforming_events())
}
