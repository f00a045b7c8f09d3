//! Coded lookup nodes: the area → road → locality → postal code chain.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::FactRecord;

/// Level of a node in the geography hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeLevel {
    Area,
    Road,
    Locality,
    PostalCode,
}

impl fmt::Display for NodeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeLevel::Area => "area",
            NodeLevel::Road => "road",
            NodeLevel::Locality => "locality",
            NodeLevel::PostalCode => "postal_code",
        };
        f.write_str(s)
    }
}

/// Stable identification key of a node. References between levels hold a
/// key, never the node itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeKey(pub String);

impl NodeKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a hop addresses its candidate nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "by", rename_all = "snake_case")]
pub enum NodeSelector {
    /// Exact code match, optionally scoped to a parent node.
    Code { code: u16, parent: Option<NodeKey> },
    /// Direct reference from the previous hop.
    Key { key: NodeKey },
}

impl NodeSelector {
    /// Whether `node` is addressed by this selector. A code selector with a
    /// parent only accepts children of that parent.
    pub fn matches(&self, node: &LookupNode) -> bool {
        match self {
            NodeSelector::Code { code, parent } => {
                node.code == Some(*code)
                    && parent.as_ref().map_or(true, |p| node.parent.as_ref() == Some(p))
            }
            NodeSelector::Key { key } => node.key == *key,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaData {
    pub code: u16,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadData {
    pub code: u16,
    pub name: String,
    /// Shortened name used on address labels.
    pub addressing_name: Option<String>,
    pub locality: Option<NodeKey>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalityData {
    pub code: Option<String>,
    pub name: String,
    pub postal_code: Option<NodeKey>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalCodeData {
    pub code: u16,
    pub name: String,
}

/// Versioned data carried by a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "level", rename_all = "snake_case")]
pub enum NodeData {
    Area(AreaData),
    Road(RoadData),
    Locality(LocalityData),
    PostalCode(PostalCodeData),
}

impl NodeData {
    pub fn level(&self) -> NodeLevel {
        match self {
            NodeData::Area(_) => NodeLevel::Area,
            NodeData::Road(_) => NodeLevel::Road,
            NodeData::Locality(_) => NodeLevel::Locality,
            NodeData::PostalCode(_) => NodeLevel::PostalCode,
        }
    }
}

/// One entity of the hierarchy with its bitemporal data versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupNode {
    pub key: NodeKey,
    pub level: NodeLevel,
    pub code: Option<u16>,
    pub parent: Option<NodeKey>,
    pub versions: Vec<FactRecord<NodeData>>,
}
