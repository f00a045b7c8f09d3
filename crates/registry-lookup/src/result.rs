//! Lookup request and result types.

use serde::{Deserialize, Serialize};

use registry_core::models::{
    AreaData, ChainBreak, LocalityData, NodeKey, PostalCodeData, ResolutionDiagnostic, RoadData,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeoLookupRequest {
    pub area_code: u16,
    pub road_code: u16,
    /// Carried through to the result; not used for selection.
    pub house_number: Option<String>,
}

impl GeoLookupRequest {
    pub fn new(area_code: u16, road_code: u16) -> Self {
        Self {
            area_code,
            road_code,
            house_number: None,
        }
    }

    pub fn with_house_number(mut self, house_number: impl Into<String>) -> Self {
        self.house_number = Some(house_number.into());
        self
    }
}

/// A hop's winning node and its authoritative data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedNode<T> {
    pub key: NodeKey,
    pub data: T,
}

/// Fields resolved along the chain. Levels after a break stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoLookupResult {
    pub house_number: Option<String>,
    pub area: Option<ResolvedNode<AreaData>>,
    pub road: Option<ResolvedNode<RoadData>>,
    pub locality: Option<ResolvedNode<LocalityData>>,
    pub postal_code: Option<ResolvedNode<PostalCodeData>>,
    pub broken: Option<ChainBreak>,
}

impl GeoLookupResult {
    pub fn is_complete(&self) -> bool {
        self.broken.is_none()
    }

    /// The chain break as a resolution diagnostic, if the walk stopped early.
    pub fn diagnostic(&self) -> Option<ResolutionDiagnostic> {
        self.broken
            .clone()
            .map(ResolutionDiagnostic::LookupChainBroken)
    }
}
