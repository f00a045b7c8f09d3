//! RegistryService: request-level orchestration over a candidate supplier.
//!
//! Fetches raw versions, hands them to the pure selectors, and turns the
//! outcome into owned results plus non-fatal diagnostics. One observation
//! point is captured per request and reused for every attribute.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use registry_core::config::ResolutionConfig;
use registry_core::errors::RegistryResult;
use registry_core::models::{
    AttributeKind, ContinuityAnomaly, EntityKey, FactRecord, ObservationPoint, RecordId,
    ResolutionDiagnostic,
};
use registry_core::traits::{CandidateSupplier, Clock, SystemClock};

use crate::continuity::build_sequence;
use crate::resolution::{malformed_records, select_at, select_open};

/// The authoritative version of one attribute, if any.
#[derive(Debug)]
pub struct Resolved<P> {
    pub attribute: AttributeKind,
    pub record: Option<FactRecord<P>>,
    pub diagnostics: Vec<ResolutionDiagnostic>,
}

/// The chronological history of one attribute.
#[derive(Debug)]
pub struct History<P> {
    pub attribute: AttributeKind,
    pub entries: Vec<FactRecord<P>>,
    pub anomalies: Vec<ContinuityAnomaly>,
    pub diagnostics: Vec<ResolutionDiagnostic>,
}

/// Several attributes of one entity resolved against one observation point.
#[derive(Debug)]
pub struct EntitySnapshot<P> {
    pub key: EntityKey,
    pub observed_at: ObservationPoint,
    /// Only attributes with an authoritative version appear here.
    pub attributes: HashMap<AttributeKind, FactRecord<P>>,
    pub diagnostics: Vec<ResolutionDiagnostic>,
}

impl<P> EntitySnapshot<P> {
    pub fn get(&self, kind: &AttributeKind) -> Option<&FactRecord<P>> {
        self.attributes.get(kind)
    }
}

pub struct RegistryService<S, C = SystemClock> {
    supplier: S,
    clock: C,
    config: ResolutionConfig,
}

impl<S: CandidateSupplier> RegistryService<S, SystemClock> {
    /// Service on the wall clock with default config.
    pub fn with_supplier(supplier: S) -> Self {
        Self::new(supplier, SystemClock, ResolutionConfig::default())
    }
}

impl<S: CandidateSupplier, C: Clock> RegistryService<S, C> {
    pub fn new(supplier: S, clock: C, config: ResolutionConfig) -> Self {
        Self {
            supplier,
            clock,
            config,
        }
    }

    /// Capture the observation point for a request. `as_of` overrides the
    /// clock; either way both axes use the same instant.
    pub fn observation_point(&self, as_of: Option<DateTime<Utc>>) -> ObservationPoint {
        ObservationPoint::at(as_of.unwrap_or_else(|| self.clock.now()))
    }

    /// Resolve one attribute at `at`.
    pub async fn resolve_at(
        &self,
        key: &EntityKey,
        kind: &AttributeKind,
        at: &ObservationPoint,
    ) -> RegistryResult<Resolved<S::Payload>> {
        let records = self.fetch(key, kind).await?;
        let selected = select_at(&records, at).map(|r| r.id);
        Ok(self.finish(key, kind, records, selected))
    }

    /// Resolve the currently open version of one attribute.
    pub async fn resolve_open(
        &self,
        key: &EntityKey,
        kind: &AttributeKind,
    ) -> RegistryResult<Resolved<S::Payload>> {
        let records = self.fetch(key, kind).await?;
        let selected = select_open(&records).map(|r| r.id);
        Ok(self.finish(key, kind, records, selected))
    }

    /// Reconstruct the effect-ordered history of one attribute.
    pub async fn history(
        &self,
        key: &EntityKey,
        kind: &AttributeKind,
    ) -> RegistryResult<History<S::Payload>> {
        let records = self.fetch(key, kind).await?;
        let diagnostics = self.malformed_diagnostics(key, kind, &records);

        let sequence = build_sequence(&records);
        let order: Vec<RecordId> = sequence.entries.iter().map(|r| r.id).collect();
        let anomalies = sequence.anomalies;

        if self.config.log_continuity_anomalies {
            for anomaly in &anomalies {
                warn!(
                    entity = %key,
                    attribute = %kind,
                    record = %anomaly.record,
                    previous = %anomaly.previous,
                    kind = ?anomaly.kind,
                    "continuity anomaly in history"
                );
            }
        }

        let mut by_id: HashMap<RecordId, FactRecord<S::Payload>> =
            records.into_iter().map(|r| (r.id, r)).collect();
        let entries = order.iter().filter_map(|id| by_id.remove(id)).collect();

        Ok(History {
            attribute: kind.clone(),
            entries,
            anomalies,
            diagnostics,
        })
    }

    /// Resolve every attribute in `kinds` against a single observation point.
    pub async fn resolve_entity(
        &self,
        key: &EntityKey,
        kinds: &[AttributeKind],
        as_of: Option<DateTime<Utc>>,
    ) -> RegistryResult<EntitySnapshot<S::Payload>> {
        let observed_at = self.observation_point(as_of);
        let mut attributes = HashMap::with_capacity(kinds.len());
        let mut diagnostics = Vec::new();

        for kind in kinds {
            let resolved = self.resolve_at(key, kind, &observed_at).await?;
            diagnostics.extend(resolved.diagnostics);
            if let Some(record) = resolved.record {
                attributes.insert(kind.clone(), record);
            }
        }

        Ok(EntitySnapshot {
            key: key.clone(),
            observed_at,
            attributes,
            diagnostics,
        })
    }

    async fn fetch(
        &self,
        key: &EntityKey,
        kind: &AttributeKind,
    ) -> RegistryResult<Vec<FactRecord<S::Payload>>> {
        let records = self.supplier.fetch_versions(key, kind).await?;
        debug!(entity = %key, attribute = %kind, candidates = records.len(), "fetched versions");
        Ok(records)
    }

    fn finish(
        &self,
        key: &EntityKey,
        kind: &AttributeKind,
        records: Vec<FactRecord<S::Payload>>,
        selected: Option<RecordId>,
    ) -> Resolved<S::Payload> {
        let mut diagnostics = self.malformed_diagnostics(key, kind, &records);
        let record = selected.and_then(|id| records.into_iter().find(|r| r.id == id));

        if record.is_none() {
            debug!(entity = %key, attribute = %kind, "no authoritative version");
            diagnostics.push(ResolutionDiagnostic::NoAuthoritativeVersion {
                attribute: kind.clone(),
            });
        }

        Resolved {
            attribute: kind.clone(),
            record,
            diagnostics,
        }
    }

    fn malformed_diagnostics(
        &self,
        key: &EntityKey,
        kind: &AttributeKind,
        records: &[FactRecord<S::Payload>],
    ) -> Vec<ResolutionDiagnostic> {
        malformed_records(records)
            .into_iter()
            .map(|record| {
                if self.config.log_malformed_records {
                    debug!(entity = %key, attribute = %kind, record = %record, "ignoring malformed interval");
                }
                ResolutionDiagnostic::MalformedInterval { record }
            })
            .collect()
    }
}
