//! Property tests for selection and sequence building.

use proptest::prelude::*;

use chrono::{DateTime, Duration, Utc};
use registry_core::models::{Bitemporality, EntityKey, FactRecord, ObservationPoint, RecordId};
use registry_temporal::{build_sequence, select_at, select_open};
use test_fixtures::ts;

fn base() -> DateTime<Utc> {
    ts(2000, 1, 1)
}

fn day(offset: Option<i64>) -> Option<DateTime<Utc>> {
    offset.map(|d| base() + Duration::days(d))
}

// Strategy: small day offsets so intervals collide often.
fn arb_record(id: u64) -> impl Strategy<Value = FactRecord<u64>> {
    (
        proptest::option::of(0i64..40),
        proptest::option::of(0i64..40),
        proptest::option::of(0i64..40),
        proptest::option::of(0i64..40),
        proptest::option::of(0i64..5),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(move |(rf, rt, ef, et, upd, undone, corrected)| {
            let mut record = FactRecord::new(
                RecordId(id),
                EntityKey::other("prop"),
                Bitemporality::new(day(rf), day(rt), day(ef), day(et)),
                id,
            );
            record.dafo_updated = day(upd);
            record.undone = undone;
            if corrected {
                record.correctors.push(RecordId(id + 1_000));
            }
            record
        })
}

fn arb_records() -> impl Strategy<Value = Vec<FactRecord<u64>>> {
    (0usize..12).prop_flat_map(|n| {
        (0..n as u64)
            .map(arb_record)
            .collect::<Vec<_>>()
    })
}

proptest! {
    #[test]
    fn prop_selected_record_contains_point_and_is_not_undone(
        records in arb_records(),
        at in 0i64..45,
    ) {
        let point = ObservationPoint::at(base() + Duration::days(at));
        if let Some(r) = select_at(&records, &point) {
            prop_assert!(!r.undone);
            prop_assert!(r.bitemporality.contains(&point));
        }
    }

    #[test]
    fn prop_select_at_is_idempotent(records in arb_records(), at in 0i64..45) {
        let point = ObservationPoint::at(base() + Duration::days(at));
        let first = select_at(&records, &point).map(|r| r.id);
        let second = select_at(&records, &point).map(|r| r.id);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_select_at_ignores_input_order(records in arb_records(), at in 0i64..45) {
        let point = ObservationPoint::at(base() + Duration::days(at));
        let forward = select_at(&records, &point).map(|r| r.id);
        let reversed: Vec<_> = records.iter().rev().cloned().collect();
        let backward = select_at(&reversed, &point).map(|r| r.id);
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_select_open_returns_open_uncorrected_live_record(records in arb_records()) {
        if let Some(r) = select_open(&records) {
            prop_assert!(!r.undone);
            prop_assert!(r.correctors.is_empty());
            prop_assert!(r.bitemporality.is_open());
        }
    }

    #[test]
    fn prop_sequence_is_monotonic_in_effect_from(records in arb_records()) {
        let sequence = build_sequence(&records);
        for pair in sequence.entries.windows(2) {
            prop_assert!(pair[0].bitemporality.effect_from <= pair[1].bitemporality.effect_from);
        }
        for r in &sequence.entries {
            prop_assert!(!r.undone);
            prop_assert!(r.correctors.is_empty());
            prop_assert!(r.bitemporality.has_positive_effect_span());
        }
    }

    #[test]
    fn prop_anomalies_reference_accepted_records(records in arb_records()) {
        let sequence = build_sequence(&records);
        prop_assert!(sequence.anomalies.len() < sequence.entries.len().max(1));
        for anomaly in &sequence.anomalies {
            prop_assert!(sequence.entries.iter().any(|r| r.id == anomaly.record));
            prop_assert!(sequence.entries.iter().any(|r| r.id == anomaly.previous));
        }
    }
}
