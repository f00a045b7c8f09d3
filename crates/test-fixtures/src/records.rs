//! Builders for versioned fact records.

use chrono::{DateTime, TimeZone, Utc};

use registry_core::models::{Bitemporality, EntityKey, FactRecord, RecordId};

/// Midnight UTC on the given date.
pub fn ts(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// Fluent builder; every bound starts open.
pub struct RecordBuilder<P> {
    record: FactRecord<P>,
}

impl<P> RecordBuilder<P> {
    pub fn new(id: u64, payload: P) -> Self {
        Self {
            record: FactRecord::new(
                RecordId(id),
                EntityKey::other("fixture"),
                Bitemporality::default(),
                payload,
            ),
        }
    }

    pub fn owner(mut self, key: EntityKey) -> Self {
        self.record.entity_key = key;
        self
    }

    pub fn registered(mut self, from: DateTime<Utc>) -> Self {
        self.record.bitemporality.registration_from = Some(from);
        self
    }

    pub fn registered_until(mut self, to: DateTime<Utc>) -> Self {
        self.record.bitemporality.registration_to = Some(to);
        self
    }

    pub fn effective(mut self, from: DateTime<Utc>) -> Self {
        self.record.bitemporality.effect_from = Some(from);
        self
    }

    pub fn effective_until(mut self, to: DateTime<Utc>) -> Self {
        self.record.bitemporality.effect_to = Some(to);
        self
    }

    pub fn updated(mut self, at: DateTime<Utc>) -> Self {
        self.record.dafo_updated = Some(at);
        self
    }

    pub fn undone(mut self) -> Self {
        self.record.undone = true;
        self
    }

    pub fn corrected_by(mut self, corrector: u64) -> Self {
        self.record.correctors.push(RecordId(corrector));
        self
    }

    pub fn build(self) -> FactRecord<P> {
        self.record
    }
}
