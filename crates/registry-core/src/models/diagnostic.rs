//! Non-fatal findings reported alongside resolution results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AttributeKind, NodeLevel, RecordId};

/// Data-quality findings. None of these abort a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "diagnostic", rename_all = "snake_case")]
pub enum ResolutionDiagnostic {
    /// Selection found nothing; the attribute is absent.
    NoAuthoritativeVersion { attribute: AttributeKind },
    /// A record's own timestamps are inconsistent; it was ignored.
    MalformedInterval { record: RecordId },
    /// Consecutive history entries do not meet.
    ContinuityAnomaly(ContinuityAnomaly),
    /// A hierarchy hop had no match; downstream fields are omitted.
    LookupChainBroken(ChainBreak),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    /// The record starts after its predecessor ended.
    Gap,
    /// The record starts before its predecessor ended, or the predecessor
    /// never ended.
    Overlap,
}

/// A discontinuity between an accepted record and its predecessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinuityAnomaly {
    pub record: RecordId,
    pub previous: RecordId,
    pub kind: AnomalyKind,
    /// Predecessor's `effect_to`; `None` when it is still open.
    pub expected_from: Option<DateTime<Utc>>,
    /// This record's `effect_from`; `None` is the unbounded past.
    pub actual_from: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum BreakReason {
    /// The supplier returned no node for the selector.
    NoMatchingNode,
    /// Nodes exist but none has data valid at the observation point.
    NoAuthoritativeData,
    /// The previous level's data carries no reference to this level.
    MissingReference,
    /// The supplier failed.
    SupplierUnavailable(String),
}

/// Where and why a hierarchical lookup stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainBreak {
    pub level: NodeLevel,
    pub reason: BreakReason,
}
