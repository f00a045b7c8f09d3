//! One version of one attribute of one entity.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Bitemporality, EntityKey};
use crate::traits::{HasBitemporality, HasUndoFlag, VersionedRecord};

/// Opaque record identity, assigned monotonically by ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A versioned fact. Immutable once persisted: a correction is a new record
/// plus a back-reference in `correctors`, never an in-place edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactRecord<P> {
    pub id: RecordId,
    /// The entity aggregate owning this version.
    pub entity_key: EntityKey,
    pub bitemporality: Bitemporality,
    /// Last-modified instant in the distributing system.
    pub dafo_updated: Option<DateTime<Utc>>,
    /// Explicitly retracted.
    pub undone: bool,
    /// Records superseding this one.
    pub correctors: Vec<RecordId>,
    pub payload: P,
}

impl<P> FactRecord<P> {
    pub fn new(id: RecordId, entity_key: EntityKey, bitemporality: Bitemporality, payload: P) -> Self {
        Self {
            id,
            entity_key,
            bitemporality,
            dafo_updated: None,
            undone: false,
            correctors: Vec::new(),
            payload,
        }
    }
}

impl<P> HasBitemporality for FactRecord<P> {
    fn bitemporality(&self) -> &Bitemporality {
        &self.bitemporality
    }
}

impl<P> HasUndoFlag for FactRecord<P> {
    fn is_undone(&self) -> bool {
        self.undone
    }
}

impl<P> VersionedRecord for FactRecord<P> {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn dafo_updated(&self) -> Option<DateTime<Utc>> {
        self.dafo_updated
    }

    fn is_corrected(&self) -> bool {
        !self.correctors.is_empty()
    }
}
