//! External collaborators that feed the resolver.
//!
//! Implementations may block or perform I/O. Neither applies any filtering:
//! selection is the engine's job.

use crate::errors::SupplierError;
use crate::models::{
    AttributeKind, EntityKey, FactRecord, LookupNode, NodeLevel, NodeSelector, ObservationPoint,
};

/// Supplies every known version of one attribute of one entity.
#[allow(async_fn_in_trait)]
pub trait CandidateSupplier: Send + Sync {
    type Payload;

    async fn fetch_versions(
        &self,
        key: &EntityKey,
        kind: &AttributeKind,
    ) -> Result<Vec<FactRecord<Self::Payload>>, SupplierError>;
}

/// Supplies candidate nodes for one hierarchy level.
#[allow(async_fn_in_trait)]
pub trait LookupNodeSupplier: Send + Sync {
    async fn fetch_nodes(
        &self,
        level: NodeLevel,
        selector: &NodeSelector,
        at: &ObservationPoint,
    ) -> Result<Vec<LookupNode>, SupplierError>;
}
