mod bitemporality;
mod diagnostic;
mod entity;
mod fact_record;
mod lookup_node;
mod observation;

pub use bitemporality::Bitemporality;
pub use diagnostic::{AnomalyKind, BreakReason, ChainBreak, ContinuityAnomaly, ResolutionDiagnostic};
pub use entity::{AttributeKind, EntityAggregate, EntityKey};
pub use fact_record::{FactRecord, RecordId};
pub use lookup_node::{
    AreaData, LocalityData, LookupNode, NodeData, NodeKey, NodeLevel, NodeSelector,
    PostalCodeData, RoadData,
};
pub use observation::ObservationPoint;
