//! In-memory collaborator implementations.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use registry_core::errors::SupplierError;
use registry_core::models::{
    AttributeKind, EntityAggregate, EntityKey, FactRecord, LookupNode, NodeLevel, NodeSelector,
    ObservationPoint,
};
use registry_core::traits::{CandidateSupplier, LookupNodeSupplier};

/// Serves versions from entity aggregates held in memory.
pub struct InMemoryCandidateSupplier<P> {
    aggregates: HashMap<EntityKey, EntityAggregate<P>>,
    unavailable: bool,
    calls: AtomicUsize,
}

impl<P> InMemoryCandidateSupplier<P> {
    pub fn new() -> Self {
        Self {
            aggregates: HashMap::new(),
            unavailable: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Every fetch fails with [`SupplierError::Unavailable`].
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::new()
        }
    }

    pub fn with_aggregate(mut self, aggregate: EntityAggregate<P>) -> Self {
        self.aggregates.insert(aggregate.key.clone(), aggregate);
        self
    }

    /// Add versions for one attribute, creating the aggregate if needed.
    pub fn with_versions(
        mut self,
        key: &EntityKey,
        kind: AttributeKind,
        records: Vec<FactRecord<P>>,
    ) -> Self {
        let aggregate = self
            .aggregates
            .entry(key.clone())
            .or_insert_with(|| EntityAggregate::new(key.clone()));
        for record in records {
            aggregate.push(kind.clone(), record);
        }
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<P> Default for InMemoryCandidateSupplier<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Clone + Send + Sync> CandidateSupplier for InMemoryCandidateSupplier<P> {
    type Payload = P;

    async fn fetch_versions(
        &self,
        key: &EntityKey,
        kind: &AttributeKind,
    ) -> Result<Vec<FactRecord<P>>, SupplierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable {
            return Err(SupplierError::Unavailable("in-memory supplier offline".to_string()));
        }
        Ok(self
            .aggregates
            .get(key)
            .map(|a| a.versions(kind).to_vec())
            .unwrap_or_default())
    }
}

/// Serves lookup nodes from a flat list, matching selectors exactly.
#[derive(Default)]
pub struct InMemoryLookupSupplier {
    nodes: Vec<LookupNode>,
    unavailable: Vec<NodeLevel>,
    calls: AtomicUsize,
}

impl InMemoryLookupSupplier {
    pub fn new(nodes: Vec<LookupNode>) -> Self {
        Self {
            nodes,
            unavailable: Vec::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_node(mut self, node: LookupNode) -> Self {
        self.nodes.push(node);
        self
    }

    /// Fail every fetch at `level`.
    pub fn unavailable_at(mut self, level: NodeLevel) -> Self {
        self.unavailable.push(level);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LookupNodeSupplier for InMemoryLookupSupplier {
    async fn fetch_nodes(
        &self,
        level: NodeLevel,
        selector: &NodeSelector,
        _at: &ObservationPoint,
    ) -> Result<Vec<LookupNode>, SupplierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.contains(&level) {
            return Err(SupplierError::Unavailable(format!("{level} lookup offline")));
        }
        Ok(self
            .nodes
            .iter()
            .filter(|n| n.level == level && selector.matches(n))
            .cloned()
            .collect())
    }
}
