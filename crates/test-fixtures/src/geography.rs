//! Geography hierarchy fixtures.
//!
//! Every helper produces a node with one version open since 2000-01-01.
//! Use [`with_version`] to add renames or closures.

use std::sync::atomic::{AtomicU64, Ordering};

use registry_core::models::{
    AreaData, EntityKey, FactRecord, LocalityData, LookupNode, NodeData, NodeKey, PostalCodeData,
    RoadData,
};

use crate::records::{ts, RecordBuilder};
use crate::suppliers::InMemoryLookupSupplier;

static NEXT_ID: AtomicU64 = AtomicU64::new(1_000_000);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::SeqCst)
}

fn open_version(key: &str, data: NodeData) -> FactRecord<NodeData> {
    RecordBuilder::new(next_id(), data)
        .owner(EntityKey::other(key))
        .registered(ts(2000, 1, 1))
        .effective(ts(2000, 1, 1))
        .build()
}

fn node(key: &str, code: Option<u16>, parent: Option<&str>, data: NodeData) -> LookupNode {
    LookupNode {
        key: NodeKey::new(key),
        level: data.level(),
        code,
        parent: parent.map(NodeKey::new),
        versions: vec![open_version(key, data)],
    }
}

pub fn area(key: &str, code: u16, name: &str) -> LookupNode {
    node(
        key,
        Some(code),
        None,
        NodeData::Area(AreaData {
            code,
            name: name.to_string(),
        }),
    )
}

pub fn road(key: &str, code: u16, area: &str, name: &str, locality: Option<&str>) -> LookupNode {
    node(
        key,
        Some(code),
        Some(area),
        NodeData::Road(RoadData {
            code,
            name: name.to_string(),
            addressing_name: None,
            locality: locality.map(NodeKey::new),
        }),
    )
}

pub fn locality(key: &str, name: &str, postal_code: Option<&str>) -> LookupNode {
    node(
        key,
        None,
        None,
        NodeData::Locality(LocalityData {
            code: None,
            name: name.to_string(),
            postal_code: postal_code.map(NodeKey::new),
        }),
    )
}

pub fn postal_code(key: &str, code: u16, name: &str) -> LookupNode {
    node(
        key,
        Some(code),
        None,
        NodeData::PostalCode(PostalCodeData {
            code,
            name: name.to_string(),
        }),
    )
}

/// Append a version built by `build` to `node`.
pub fn with_version(
    mut node: LookupNode,
    id: u64,
    data: NodeData,
    build: impl FnOnce(RecordBuilder<NodeData>) -> RecordBuilder<NodeData>,
) -> LookupNode {
    let builder = RecordBuilder::new(id, data).owner(EntityKey::other(node.key.0.clone()));
    node.versions.push(build(builder).build());
    node
}

/// Close every existing version of `node` on the registration axis at
/// `ts(year, 1, 1)`, so only versions added afterwards remain current.
pub fn closed_at(mut node: LookupNode, year: i32) -> LookupNode {
    for version in &mut node.versions {
        version.bitemporality.registration_to = Some(ts(year, 1, 1));
    }
    node
}

/// Area 101 København, road 1234 Rådhuspladsen → locality Indre By →
/// postal code 1550.
pub fn copenhagen() -> InMemoryLookupSupplier {
    InMemoryLookupSupplier::new(vec![
        area("area-101", 101, "København"),
        road("road-101-1234", 1234, "area-101", "Rådhuspladsen", Some("loc-indre-by")),
        locality("loc-indre-by", "Indre By", Some("post-1550")),
        postal_code("post-1550", 1550, "København V"),
        // A second area reusing road code 1234 must not leak into area 101.
        area("area-147", 147, "Frederiksberg"),
        road("road-147-1234", 1234, "area-147", "Falkoner Allé", None),
    ])
}

