//! Open-interval selection: current state regardless of observation point.

use registry_core::traits::VersionedRecord;

use super::{authority_order, is_rankable};

/// Select the authoritative version among records still open on both axes.
///
/// A corrected record never qualifies, even while nominally open.
pub fn select_open<R: VersionedRecord>(records: &[R]) -> Option<&R> {
    records
        .iter()
        .filter(|r| is_rankable(*r))
        .filter(|r| !r.is_corrected())
        .filter(|r| r.bitemporality().is_open())
        .max_by(|a, b| authority_order(*a, *b))
}
