//! Ranking of competing versions.

use std::cmp::Ordering;

use registry_core::traits::VersionedRecord;

/// Ascending authority order; the greatest record wins.
///
/// 1. `registration_from`, unbounded past lowest. The most recently
///    registered version outranks older knowledge.
/// 2. `dafo_updated`, absent lowest.
/// 3. Record identity, so equal registrations resolve to the highest id.
pub fn authority_order<R: VersionedRecord>(a: &R, b: &R) -> Ordering {
    a.bitemporality()
        .cmp_registration(b.bitemporality())
        .then_with(|| a.dafo_updated().cmp(&b.dafo_updated()))
        .then_with(|| a.record_id().cmp(&b.record_id()))
}
