//! Capabilities shared by every versioned record kind.
//!
//! The resolution engine is generic over these, so each attribute kind keeps
//! its own payload type.

use chrono::{DateTime, Utc};

use crate::models::{Bitemporality, RecordId};

pub trait HasBitemporality {
    fn bitemporality(&self) -> &Bitemporality;
}

pub trait HasUndoFlag {
    fn is_undone(&self) -> bool;
}

/// Everything point-in-time selection and sequence building need to know
/// about a record.
pub trait VersionedRecord: HasBitemporality + HasUndoFlag {
    fn record_id(&self) -> RecordId;
    fn dafo_updated(&self) -> Option<DateTime<Utc>>;
    /// At least one later record supersedes this one.
    fn is_corrected(&self) -> bool;
}
