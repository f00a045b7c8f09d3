//! Chronological history reconstruction.
//!
//! Orders the usable versions of an attribute along the effect axis and
//! checks that each version starts where its predecessor ended. A mismatch
//! is reported as a [`ContinuityAnomaly`] but never drops the record: real
//! histories contain irregular gaps and overlaps.

use chrono::{DateTime, Utc};

use registry_core::models::{AnomalyKind, ContinuityAnomaly, RecordId};
use registry_core::traits::VersionedRecord;

use crate::resolution::authority_order;

/// An ordered history plus the discontinuities found while walking it.
#[derive(Debug)]
pub struct Sequence<'a, R> {
    /// Non-decreasing in `effect_from`.
    pub entries: Vec<&'a R>,
    pub anomalies: Vec<ContinuityAnomaly>,
}

impl<R> Sequence<'_, R> {
    pub fn is_continuous(&self) -> bool {
        self.anomalies.is_empty()
    }
}

/// Build the effect-ordered history of one attribute.
///
/// Excluded up front: undone records, corrected records, malformed
/// intervals, and effect intervals of zero or negative length.
pub fn build_sequence<R: VersionedRecord>(records: &[R]) -> Sequence<'_, R> {
    let mut candidates: Vec<&R> = records.iter().filter(|r| is_history_entry(*r)).collect();
    candidates.sort_by(|a, b| {
        a.bitemporality()
            .cmp_effect(b.bitemporality())
            .then_with(|| authority_order(*a, *b))
    });

    let walk = candidates
        .into_iter()
        .fold(Walk::default(), |walk, record| walk.accept(record));

    Sequence {
        entries: walk.entries,
        anomalies: walk.anomalies,
    }
}

fn is_history_entry<R: VersionedRecord>(record: &R) -> bool {
    let b = record.bitemporality();
    !record.is_undone() && !record.is_corrected() && !b.is_malformed() && b.has_positive_effect_span()
}

/// Where the last accepted record ended.
#[derive(Debug, Clone, Copy)]
enum Frontier {
    Start,
    After {
        previous: RecordId,
        effect_to: Option<DateTime<Utc>>,
    },
}

/// Fold accumulator. Each step consumes the previous state.
struct Walk<'a, R> {
    frontier: Frontier,
    entries: Vec<&'a R>,
    anomalies: Vec<ContinuityAnomaly>,
}

impl<R> Default for Walk<'_, R> {
    fn default() -> Self {
        Self {
            frontier: Frontier::Start,
            entries: Vec::new(),
            anomalies: Vec::new(),
        }
    }
}

impl<'a, R: VersionedRecord> Walk<'a, R> {
    fn accept(self, record: &'a R) -> Self {
        let Walk {
            frontier,
            mut entries,
            mut anomalies,
        } = self;
        let b = record.bitemporality();

        if let Frontier::After { previous, effect_to } = frontier {
            if let Some(kind) = classify(effect_to, b.effect_from) {
                anomalies.push(ContinuityAnomaly {
                    record: record.record_id(),
                    previous,
                    kind,
                    expected_from: effect_to,
                    actual_from: b.effect_from,
                });
            }
        }

        entries.push(record);
        Walk {
            frontier: Frontier::After {
                previous: record.record_id(),
                effect_to: b.effect_to,
            },
            entries,
            anomalies,
        }
    }
}

/// `None` when `start` continues exactly at `frontier`.
fn classify(frontier: Option<DateTime<Utc>>, start: Option<DateTime<Utc>>) -> Option<AnomalyKind> {
    match (frontier, start) {
        // Predecessor never ended.
        (None, _) => Some(AnomalyKind::Overlap),
        (Some(end), Some(start)) if start == end => None,
        (Some(end), Some(start)) if start > end => Some(AnomalyKind::Gap),
        // Starts before the predecessor ended, or in the unbounded past.
        (Some(_), _) => Some(AnomalyKind::Overlap),
    }
}
