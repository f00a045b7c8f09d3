//! GeoLookupResolver: walks area → road → locality → postal code.
//!
//! Each hop fetches candidate nodes, selects every node's authoritative
//! data version at the request's observation point, and keeps the node
//! whose version ranks highest. The next hop is addressed by a key taken
//! from that data. Any hop without a result ends the walk.

use registry_core::config::LookupConfig;
use registry_core::models::{
    AreaData, BreakReason, ChainBreak, FactRecord, LocalityData, LookupNode, NodeData, NodeLevel,
    NodeSelector, ObservationPoint, PostalCodeData, RoadData,
};
use registry_core::traits::LookupNodeSupplier;
use registry_temporal::{authority_order, select_at};
use tracing::{debug, warn};

use crate::cache::LookupCache;
use crate::result::{GeoLookupRequest, GeoLookupResult, ResolvedNode};

pub struct GeoLookupResolver<L> {
    supplier: L,
    cache: Option<LookupCache>,
}

impl<L: LookupNodeSupplier> GeoLookupResolver<L> {
    pub fn new(supplier: L, config: &LookupConfig) -> Self {
        Self {
            supplier,
            cache: LookupCache::from_config(config),
        }
    }

    pub fn without_cache(supplier: L) -> Self {
        Self {
            supplier,
            cache: None,
        }
    }

    pub fn supplier(&self) -> &L {
        &self.supplier
    }

    pub fn cache(&self) -> Option<&LookupCache> {
        self.cache.as_ref()
    }

    /// Resolve `request` at `at`. Never fails: a broken chain is reported in
    /// [`GeoLookupResult::broken`] with the downstream levels left empty.
    pub async fn lookup(
        &self,
        request: &GeoLookupRequest,
        at: &ObservationPoint,
    ) -> GeoLookupResult {
        if let Some(hit) = self.cache.as_ref().and_then(|c| c.get(at, request)) {
            return hit;
        }

        let result = self.walk(request, at).await;

        // Outages are transient; do not pin them in the cache.
        let transient = matches!(
            result.broken,
            Some(ChainBreak {
                reason: BreakReason::SupplierUnavailable(_),
                ..
            })
        );
        if let (Some(cache), false) = (&self.cache, transient) {
            cache.insert(*at, request.clone(), result.clone());
        }
        result
    }

    async fn walk(&self, request: &GeoLookupRequest, at: &ObservationPoint) -> GeoLookupResult {
        let mut result = GeoLookupResult {
            house_number: request.house_number.clone(),
            ..GeoLookupResult::default()
        };

        let area_selector = NodeSelector::Code {
            code: request.area_code,
            parent: None,
        };
        let area = match self.hop(NodeLevel::Area, &area_selector, at, as_area).await {
            Ok(area) => area,
            Err(reason) => return broken(result, NodeLevel::Area, reason),
        };
        let road_selector = NodeSelector::Code {
            code: request.road_code,
            parent: Some(area.key.clone()),
        };
        result.area = Some(area);

        let road = match self.hop(NodeLevel::Road, &road_selector, at, as_road).await {
            Ok(road) => road,
            Err(reason) => return broken(result, NodeLevel::Road, reason),
        };
        let locality_key = road.data.locality.clone();
        result.road = Some(road);

        let Some(key) = locality_key else {
            return broken(result, NodeLevel::Locality, BreakReason::MissingReference);
        };
        let locality_selector = NodeSelector::Key { key };
        let locality = match self
            .hop(NodeLevel::Locality, &locality_selector, at, as_locality)
            .await
        {
            Ok(locality) => locality,
            Err(reason) => return broken(result, NodeLevel::Locality, reason),
        };
        let postal_key = locality.data.postal_code.clone();
        result.locality = Some(locality);

        let Some(key) = postal_key else {
            return broken(result, NodeLevel::PostalCode, BreakReason::MissingReference);
        };
        let postal_selector = NodeSelector::Key { key };
        match self
            .hop(NodeLevel::PostalCode, &postal_selector, at, as_postal_code)
            .await
        {
            Ok(postal_code) => result.postal_code = Some(postal_code),
            Err(reason) => return broken(result, NodeLevel::PostalCode, reason),
        }

        result
    }

    /// One level of the chain.
    async fn hop<T: Clone>(
        &self,
        level: NodeLevel,
        selector: &NodeSelector,
        at: &ObservationPoint,
        extract: fn(&NodeData) -> Option<&T>,
    ) -> Result<ResolvedNode<T>, BreakReason> {
        let nodes = self
            .supplier
            .fetch_nodes(level, selector, at)
            .await
            .map_err(|e| {
                warn!(%level, error = %e, "lookup supplier unavailable");
                BreakReason::SupplierUnavailable(e.to_string())
            })?;

        // Suppliers may over-fetch; scoping is enforced here.
        let candidates: Vec<&LookupNode> = nodes
            .iter()
            .filter(|n| n.level == level && selector.matches(n))
            .collect();
        if candidates.is_empty() {
            return Err(BreakReason::NoMatchingNode);
        }

        let winner = candidates
            .into_iter()
            .filter_map(|n| authoritative(n, at).map(|v| (n, v)))
            .filter(|(_, v)| extract(&v.payload).is_some())
            .max_by(|(_, a), (_, b)| authority_order(*a, *b));

        let (node, version) = winner.ok_or(BreakReason::NoAuthoritativeData)?;
        let data = extract(&version.payload)
            .cloned()
            .ok_or(BreakReason::NoAuthoritativeData)?;
        Ok(ResolvedNode {
            key: node.key.clone(),
            data,
        })
    }
}

fn authoritative<'a>(
    node: &'a LookupNode,
    at: &ObservationPoint,
) -> Option<&'a FactRecord<NodeData>> {
    select_at(&node.versions, at)
}

fn broken(mut result: GeoLookupResult, level: NodeLevel, reason: BreakReason) -> GeoLookupResult {
    debug!(%level, ?reason, "lookup chain broken");
    result.broken = Some(ChainBreak { level, reason });
    result
}

fn as_area(data: &NodeData) -> Option<&AreaData> {
    match data {
        NodeData::Area(a) => Some(a),
        _ => None,
    }
}

fn as_road(data: &NodeData) -> Option<&RoadData> {
    match data {
        NodeData::Road(r) => Some(r),
        _ => None,
    }
}

fn as_locality(data: &NodeData) -> Option<&LocalityData> {
    match data {
        NodeData::Locality(l) => Some(l),
        _ => None,
    }
}

fn as_postal_code(data: &NodeData) -> Option<&PostalCodeData> {
    match data {
        NodeData::PostalCode(p) => Some(p),
        _ => None,
    }
}
