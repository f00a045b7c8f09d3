//! Point-in-time selection.

use registry_core::models::ObservationPoint;
use registry_core::traits::VersionedRecord;

use super::{authority_order, is_rankable};

/// Select the version authoritative at `at`.
///
/// Candidates must be neither undone nor malformed and must contain `at` on
/// both axes. Among those the highest [`authority_order`] wins. `None` means
/// the attribute has no value at that point.
pub fn select_at<'a, R: VersionedRecord>(records: &'a [R], at: &ObservationPoint) -> Option<&'a R> {
    records
        .iter()
        .filter(|r| is_rankable(*r))
        .filter(|r| r.bitemporality().contains(at))
        .max_by(|a, b| authority_order(*a, *b))
}
