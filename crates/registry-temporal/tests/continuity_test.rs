//! History sequence construction and continuity anomaly tests.

use registry_core::models::{AnomalyKind, RecordId};
use registry_temporal::build_sequence;
use test_fixtures::{ts, RecordBuilder};

fn address(id: u64, label: &str) -> RecordBuilder<String> {
    RecordBuilder::new(id, label.to_string()).registered(ts(2020, 1, 1))
}

fn entry_ids<P>(entries: &[&registry_core::models::FactRecord<P>]) -> Vec<u64> {
    entries.iter().map(|r| r.id.0).collect()
}

#[test]
fn gap_between_second_and_third_address_is_flagged_not_dropped() {
    let records = vec![
        address(3, "sep-dec")
            .effective(ts(2020, 9, 1))
            .effective_until(ts(2020, 12, 1))
            .build(),
        address(1, "jan-mar")
            .effective(ts(2020, 1, 1))
            .effective_until(ts(2020, 3, 1))
            .build(),
        address(2, "mar-jun")
            .effective(ts(2020, 3, 1))
            .effective_until(ts(2020, 6, 1))
            .build(),
    ];

    let sequence = build_sequence(&records);
    assert_eq!(entry_ids(&sequence.entries), vec![1, 2, 3]);
    assert_eq!(sequence.anomalies.len(), 1);

    let anomaly = &sequence.anomalies[0];
    assert_eq!(anomaly.record, RecordId(3));
    assert_eq!(anomaly.previous, RecordId(2));
    assert_eq!(anomaly.kind, AnomalyKind::Gap);
    assert_eq!(anomaly.expected_from, Some(ts(2020, 6, 1)));
    assert_eq!(anomaly.actual_from, Some(ts(2020, 9, 1)));
}

#[test]
fn contiguous_history_has_no_anomalies() {
    let records = vec![
        address(1, "a")
            .effective(ts(2019, 1, 1))
            .effective_until(ts(2020, 1, 1))
            .build(),
        address(2, "b").effective(ts(2020, 1, 1)).build(),
    ];
    let sequence = build_sequence(&records);
    assert_eq!(entry_ids(&sequence.entries), vec![1, 2]);
    assert!(sequence.is_continuous());
}

#[test]
fn overlapping_history_is_flagged_as_overlap() {
    let records = vec![
        address(1, "a")
            .effective(ts(2020, 1, 1))
            .effective_until(ts(2020, 6, 1))
            .build(),
        address(2, "b")
            .effective(ts(2020, 4, 1))
            .effective_until(ts(2020, 9, 1))
            .build(),
    ];
    let sequence = build_sequence(&records);
    assert_eq!(entry_ids(&sequence.entries), vec![1, 2]);
    assert_eq!(sequence.anomalies.len(), 1);
    assert_eq!(sequence.anomalies[0].kind, AnomalyKind::Overlap);
}

#[test]
fn record_after_open_ended_predecessor_is_overlap() {
    let records = vec![
        address(1, "never-closed").effective(ts(2020, 1, 1)).build(),
        address(2, "later").effective(ts(2021, 1, 1)).build(),
    ];
    let sequence = build_sequence(&records);
    assert_eq!(sequence.anomalies.len(), 1);
    assert_eq!(sequence.anomalies[0].kind, AnomalyKind::Overlap);
    assert_eq!(sequence.anomalies[0].expected_from, None);
}

#[test]
fn unbounded_start_sorts_first() {
    let records = vec![
        address(2, "dated").effective(ts(2020, 1, 1)).build(),
        address(1, "since-forever")
            .effective_until(ts(2020, 1, 1))
            .build(),
    ];
    let sequence = build_sequence(&records);
    assert_eq!(entry_ids(&sequence.entries), vec![1, 2]);
    assert!(sequence.is_continuous());
}

#[test]
fn undone_corrected_and_degenerate_records_are_excluded() {
    let records = vec![
        address(1, "kept")
            .effective(ts(2020, 1, 1))
            .effective_until(ts(2020, 3, 1))
            .build(),
        address(2, "undone")
            .effective(ts(2020, 3, 1))
            .effective_until(ts(2020, 4, 1))
            .undone()
            .build(),
        address(3, "corrected")
            .effective(ts(2020, 3, 1))
            .effective_until(ts(2020, 4, 1))
            .corrected_by(4)
            .build(),
        address(4, "zero-length")
            .effective(ts(2020, 3, 1))
            .effective_until(ts(2020, 3, 1))
            .build(),
        address(5, "inverted")
            .effective(ts(2020, 5, 1))
            .effective_until(ts(2020, 4, 1))
            .build(),
        address(6, "kept-too").effective(ts(2020, 3, 1)).build(),
    ];
    let sequence = build_sequence(&records);
    assert_eq!(entry_ids(&sequence.entries), vec![1, 6]);
    assert!(sequence.is_continuous());
}

#[test]
fn same_effect_start_orders_by_registration_authority() {
    let records = vec![
        RecordBuilder::new(7, "later-registered".to_string())
            .registered(ts(2021, 1, 1))
            .effective(ts(2020, 1, 1))
            .effective_until(ts(2020, 6, 1))
            .build(),
        RecordBuilder::new(8, "earlier-registered".to_string())
            .registered(ts(2020, 1, 1))
            .effective(ts(2020, 1, 1))
            .effective_until(ts(2020, 6, 1))
            .build(),
    ];
    let sequence = build_sequence(&records);
    assert_eq!(entry_ids(&sequence.entries), vec![8, 7]);
    // Second entry starts before the first ended.
    assert_eq!(sequence.anomalies.len(), 1);
    assert_eq!(sequence.anomalies[0].record, RecordId(7));
}

#[test]
fn empty_input_yields_empty_sequence() {
    let records: Vec<registry_core::models::FactRecord<String>> = vec![];
    let sequence = build_sequence(&records);
    assert!(sequence.entries.is_empty());
    assert!(sequence.is_continuous());
}
