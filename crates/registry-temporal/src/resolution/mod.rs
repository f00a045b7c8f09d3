//! Authoritative-version selection.
//!
//! Both selectors are pure functions over caller-supplied slices. Records
//! that are undone or carry inconsistent timestamps are skipped, never
//! reported as errors.

pub mod comparator;
pub mod select_at;
pub mod select_open;

pub use comparator::authority_order;
pub use select_at::select_at;
pub use select_open::select_open;

use registry_core::models::RecordId;
use registry_core::traits::VersionedRecord;

/// Ids of records whose intervals end before they start on either axis.
///
/// Selection already ignores these; callers use this to report them.
pub fn malformed_records<R: VersionedRecord>(records: &[R]) -> Vec<RecordId> {
    records
        .iter()
        .filter(|r| r.bitemporality().is_malformed())
        .map(VersionedRecord::record_id)
        .collect()
}

/// Common eligibility: not retracted and internally consistent.
pub(crate) fn is_rankable<R: VersionedRecord>(record: &R) -> bool {
    !record.is_undone() && !record.bitemporality().is_malformed()
}
